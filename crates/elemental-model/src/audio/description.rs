use super::codecs::AudioCodecSettings;
use super::enums::*;

shape! {
    /// One audio track of an output.
    pub struct AudioDescription {
        audio_normalization_settings: value(AudioNormalizationSettings),
        /// Name of the input audio selector this track is read from.
        audio_source_name: string(String),
        /// ISO/IEC 13818-1 audio type, 0 to 255.
        audio_type: copy(i32),
        audio_type_control: value(AudioTypeControl),
        codec_settings: value(AudioCodecSettings),
        /// Free-form language code used when `language_code` is not enough.
        custom_language_code: string(String),
        language_code: value(LanguageCode),
        language_code_control: value(AudioLanguageCodeControl),
        remix_settings: value(RemixSettings),
        /// Label for the track in manifests.
        stream_name: string(String),
    }
}

shape! {
    /// Loudness measurement and correction.
    pub struct AudioNormalizationSettings {
        algorithm: value(AudioNormalizationAlgorithm),
        algorithm_control: value(AudioNormalizationAlgorithmControl),
        /// Content quieter than this level (LUFS) is not measured.
        correction_gate_level: copy(i32),
        loudness_logging: value(AudioNormalizationLoudnessLogging),
        peak_calculation: value(AudioNormalizationPeakCalculation),
        /// Target loudness in LKFS, -59.0 to 0.0.
        target_lkfs: float(f64),
    }
}

shape! {
    /// Remixes input channels into a different output layout.
    pub struct RemixSettings {
        channel_mapping: value(ChannelMapping),
        channels_in: copy(i32),
        channels_out: copy(i32),
    }
}

shape! {
    /// Gain matrix from input channels to output channels.
    pub struct ChannelMapping {
        /// One entry per output channel.
        output_channels: list(OutputChannelMapping),
    }
}

shape! {
    /// Gains, in dB, applied to each input channel for one output channel.
    pub struct OutputChannelMapping {
        input_channels: list(i32),
    }
}
