//! Per-codec video settings.

use super::enums::*;

shape! {
    /// Container for the settings of the chosen video codec.
    pub struct VideoCodecSettings {
        av1_settings: value(Av1Settings),
        /// Video codec; determines which settings block is read.
        codec: value(VideoCodec),
        frame_capture_settings: value(FrameCaptureSettings),
        h264_settings: value(H264Settings),
        h265_settings: value(H265Settings),
        mpeg2_settings: value(Mpeg2Settings),
        prores_settings: value(ProresSettings),
        vp9_settings: value(Vp9Settings),
    }
}

shape! {
    /// AV1 encoding settings. AV1 only supports QVBR rate control.
    pub struct Av1Settings {
        adaptive_quantization: value(Av1AdaptiveQuantization),
        framerate_control: value(Av1FramerateControl),
        framerate_conversion_algorithm: value(Av1FramerateConversionAlgorithm),
        framerate_denominator: copy(i32),
        framerate_numerator: copy(i32),
        /// GOP length in frames.
        gop_size: float(f64),
        max_bitrate: copy(i32),
        number_b_frames_between_reference_frames: copy(i32),
        qvbr_settings: value(Av1QvbrSettings),
        rate_control_mode: value(Av1RateControlMode),
        slices: copy(i32),
        spatial_adaptive_quantization: value(Av1SpatialAdaptiveQuantization),
    }
}

shape! {
    /// Quality-defined variable bitrate settings for AV1.
    pub struct Av1QvbrSettings {
        /// Target quality, 1 to 10.
        qvbr_quality_level: copy(i32),
        /// Fractional refinement of the quality level, rounded to 0.33.
        qvbr_quality_level_fine_tune: float(f64),
    }
}

shape! {
    /// JPEG frame capture settings.
    pub struct FrameCaptureSettings {
        framerate_denominator: copy(i32),
        framerate_numerator: copy(i32),
        /// Maximum number of captures written.
        max_captures: copy(i32),
        /// JPEG quality, 1 to 100.
        quality: copy(i32),
    }
}

shape! {
    /// H.264 (AVC) encoding settings.
    pub struct H264Settings {
        adaptive_quantization: value(H264AdaptiveQuantization),
        /// Average bitrate in bits per second. Required for VBR and CBR.
        bitrate: copy(i32),
        codec_level: value(H264CodecLevel),
        codec_profile: value(H264CodecProfile),
        dynamic_sub_gop: value(H264DynamicSubGop),
        entropy_encoding: value(H264EntropyEncoding),
        field_encoding: value(H264FieldEncoding),
        flicker_adaptive_quantization: value(H264FlickerAdaptiveQuantization),
        framerate_control: value(H264FramerateControl),
        framerate_conversion_algorithm: value(H264FramerateConversionAlgorithm),
        framerate_denominator: copy(i32),
        framerate_numerator: copy(i32),
        gop_b_reference: value(H264GopBReference),
        /// Frequency of closed GOPs.
        gop_closed_cadence: copy(i32),
        /// GOP length, in frames or seconds depending on `gop_size_units`.
        gop_size: float(f64),
        gop_size_units: value(H264GopSizeUnits),
        /// Initial fill of the HRD buffer, 0 to 100 percent.
        hrd_buffer_initial_fill_percentage: copy(i32),
        hrd_buffer_size: copy(i32),
        interlace_mode: value(H264InterlaceMode),
        /// Peak bitrate for QVBR.
        max_bitrate: copy(i32),
        min_i_interval: copy(i32),
        number_b_frames_between_reference_frames: copy(i32),
        number_reference_frames: copy(i32),
        par_control: value(H264ParControl),
        par_denominator: copy(i32),
        par_numerator: copy(i32),
        quality_tuning_level: value(H264QualityTuningLevel),
        qvbr_settings: value(H264QvbrSettings),
        rate_control_mode: value(H264RateControlMode),
        repeat_pps: value(H264RepeatPps),
        scene_change_detect: value(H264SceneChangeDetect),
        slices: copy(i32),
        slow_pal: value(H264SlowPal),
        softness: copy(i32),
        spatial_adaptive_quantization: value(H264SpatialAdaptiveQuantization),
        syntax: value(H264Syntax),
        telecine: value(H264Telecine),
        temporal_adaptive_quantization: value(H264TemporalAdaptiveQuantization),
        unregistered_sei_timecode: value(H264UnregisteredSeiTimecode),
    }
}

shape! {
    /// Quality-defined variable bitrate settings for H.264.
    pub struct H264QvbrSettings {
        /// Average bitrate cap for QVBR.
        max_average_bitrate: copy(i32),
        qvbr_quality_level: copy(i32),
        qvbr_quality_level_fine_tune: float(f64),
    }
}

shape! {
    /// H.265 (HEVC) encoding settings.
    pub struct H265Settings {
        adaptive_quantization: value(H265AdaptiveQuantization),
        alternate_transfer_function_sei: value(H265AlternateTransferFunctionSei),
        bitrate: copy(i32),
        codec_level: value(H265CodecLevel),
        codec_profile: value(H265CodecProfile),
        dynamic_sub_gop: value(H265DynamicSubGop),
        flicker_adaptive_quantization: value(H265FlickerAdaptiveQuantization),
        framerate_control: value(H265FramerateControl),
        framerate_conversion_algorithm: value(H265FramerateConversionAlgorithm),
        framerate_denominator: copy(i32),
        framerate_numerator: copy(i32),
        gop_b_reference: value(H265GopBReference),
        gop_closed_cadence: copy(i32),
        gop_size: float(f64),
        gop_size_units: value(H265GopSizeUnits),
        hrd_buffer_initial_fill_percentage: copy(i32),
        hrd_buffer_size: copy(i32),
        interlace_mode: value(H265InterlaceMode),
        max_bitrate: copy(i32),
        min_i_interval: copy(i32),
        number_b_frames_between_reference_frames: copy(i32),
        number_reference_frames: copy(i32),
        par_control: value(H265ParControl),
        par_denominator: copy(i32),
        par_numerator: copy(i32),
        quality_tuning_level: value(H265QualityTuningLevel),
        qvbr_settings: value(H265QvbrSettings),
        rate_control_mode: value(H265RateControlMode),
        sample_adaptive_offset_filter_mode: value(H265SampleAdaptiveOffsetFilterMode),
        scene_change_detect: value(H265SceneChangeDetect),
        slices: copy(i32),
        slow_pal: value(H265SlowPal),
        spatial_adaptive_quantization: value(H265SpatialAdaptiveQuantization),
        telecine: value(H265Telecine),
        temporal_adaptive_quantization: value(H265TemporalAdaptiveQuantization),
        temporal_ids: value(H265TemporalIds),
        tiles: value(H265Tiles),
        unregistered_sei_timecode: value(H265UnregisteredSeiTimecode),
        /// `hvc1` or `hev1` sample entry for MP4 packaging.
        write_mp4_packaging_type: value(H265WriteMp4PackagingType),
    }
}

shape! {
    /// Quality-defined variable bitrate settings for H.265.
    pub struct H265QvbrSettings {
        max_average_bitrate: copy(i32),
        qvbr_quality_level: copy(i32),
        qvbr_quality_level_fine_tune: float(f64),
    }
}

shape! {
    /// MPEG-2 video encoding settings.
    pub struct Mpeg2Settings {
        adaptive_quantization: value(Mpeg2AdaptiveQuantization),
        bitrate: copy(i32),
        codec_level: value(Mpeg2CodecLevel),
        codec_profile: value(Mpeg2CodecProfile),
        dynamic_sub_gop: value(Mpeg2DynamicSubGop),
        framerate_control: value(Mpeg2FramerateControl),
        framerate_conversion_algorithm: value(Mpeg2FramerateConversionAlgorithm),
        framerate_denominator: copy(i32),
        framerate_numerator: copy(i32),
        gop_closed_cadence: copy(i32),
        gop_size: float(f64),
        gop_size_units: value(Mpeg2GopSizeUnits),
        hrd_buffer_initial_fill_percentage: copy(i32),
        hrd_buffer_size: copy(i32),
        interlace_mode: value(Mpeg2InterlaceMode),
        intra_dc_precision: value(Mpeg2IntraDcPrecision),
        max_bitrate: copy(i32),
        min_i_interval: copy(i32),
        number_b_frames_between_reference_frames: copy(i32),
        par_control: value(Mpeg2ParControl),
        par_denominator: copy(i32),
        par_numerator: copy(i32),
        quality_tuning_level: value(Mpeg2QualityTuningLevel),
        rate_control_mode: value(Mpeg2RateControlMode),
        scene_change_detect: value(Mpeg2SceneChangeDetect),
        slow_pal: value(Mpeg2SlowPal),
        softness: copy(i32),
        spatial_adaptive_quantization: value(Mpeg2SpatialAdaptiveQuantization),
        syntax: value(Mpeg2Syntax),
        telecine: value(Mpeg2Telecine),
        temporal_adaptive_quantization: value(Mpeg2TemporalAdaptiveQuantization),
    }
}

shape! {
    /// Apple ProRes settings.
    pub struct ProresSettings {
        codec_profile: value(ProresCodecProfile),
        framerate_control: value(ProresFramerateControl),
        framerate_conversion_algorithm: value(ProresFramerateConversionAlgorithm),
        framerate_denominator: copy(i32),
        framerate_numerator: copy(i32),
        interlace_mode: value(ProresInterlaceMode),
        par_control: value(ProresParControl),
        par_denominator: copy(i32),
        par_numerator: copy(i32),
        slow_pal: value(ProresSlowPal),
        telecine: value(ProresTelecine),
    }
}

shape! {
    /// VP9 settings, for WebM outputs.
    pub struct Vp9Settings {
        bitrate: copy(i32),
        framerate_control: value(Vp9FramerateControl),
        framerate_conversion_algorithm: value(Vp9FramerateConversionAlgorithm),
        framerate_denominator: copy(i32),
        framerate_numerator: copy(i32),
        gop_size: float(f64),
        hrd_buffer_size: copy(i32),
        max_bitrate: copy(i32),
        par_control: value(Vp9ParControl),
        par_denominator: copy(i32),
        par_numerator: copy(i32),
        quality_tuning_level: value(Vp9QualityTuningLevel),
        rate_control_mode: value(Vp9RateControlMode),
    }
}
