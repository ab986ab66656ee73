//! Per-codec audio settings.
//!
//! [`AudioCodecSettings`] selects the codec; exactly one of its nested
//! settings blocks is expected to match the chosen codec, although nothing
//! here checks that.

use super::enums::*;

shape! {
    /// Container for the settings of the chosen audio codec.
    pub struct AudioCodecSettings {
        aac_settings: value(AacSettings),
        ac3_settings: value(Ac3Settings),
        aiff_settings: value(AiffSettings),
        /// Audio codec; determines which settings block is read.
        codec: value(AudioCodec),
        eac3_settings: value(Eac3Settings),
        mp2_settings: value(Mp2Settings),
        mp3_settings: value(Mp3Settings),
        opus_settings: value(OpusSettings),
        vorbis_settings: value(VorbisSettings),
        wav_settings: value(WavSettings),
    }
}

shape! {
    /// AAC encoding settings.
    ///
    /// In CBR mode `bitrate` is the target; in VBR mode `vbr_quality` drives
    /// the encoder and `bitrate` is ignored by the service.
    pub struct AacSettings {
        audio_description_broadcaster_mix: value(AacAudioDescriptionBroadcasterMix),
        /// Average bitrate in bits per second, 6000 to 1024000.
        bitrate: copy(i32),
        codec_profile: value(AacCodecProfile),
        coding_mode: value(AacCodingMode),
        rate_control_mode: value(AacRateControlMode),
        raw_format: value(AacRawFormat),
        /// Sample rate in Hz.
        sample_rate: copy(i32),
        specification: value(AacSpecification),
        vbr_quality: value(AacVbrQuality),
    }
}

shape! {
    /// Dolby Digital (AC-3) encoding settings.
    pub struct Ac3Settings {
        /// Average bitrate in bits per second.
        bitrate: copy(i32),
        bitstream_mode: value(Ac3BitstreamMode),
        coding_mode: value(Ac3CodingMode),
        /// Dialogue level, 1 to 31.
        dialnorm: copy(i32),
        dynamic_range_compression_profile: value(Ac3DynamicRangeCompressionProfile),
        lfe_filter: value(Ac3LfeFilter),
        metadata_control: value(Ac3MetadataControl),
        sample_rate: copy(i32),
    }
}

shape! {
    /// Uncompressed AIFF settings.
    pub struct AiffSettings {
        /// Bits per sample: 16 or 24.
        bit_depth: copy(i32),
        channels: copy(i32),
        sample_rate: copy(i32),
    }
}

shape! {
    /// Dolby Digital Plus (E-AC-3) encoding settings.
    pub struct Eac3Settings {
        attenuation_control: value(Eac3AttenuationControl),
        /// Average bitrate in bits per second, 64000 to 640000.
        bitrate: copy(i32),
        bitstream_mode: value(Eac3BitstreamMode),
        coding_mode: value(Eac3CodingMode),
        dc_filter: value(Eac3DcFilter),
        /// Dialogue level, 1 to 31.
        dialnorm: copy(i32),
        dynamic_range_compression_line: value(Eac3DynamicRangeCompressionLine),
        dynamic_range_compression_rf: value(Eac3DynamicRangeCompressionRf),
        lfe_control: value(Eac3LfeControl),
        lfe_filter: value(Eac3LfeFilter),
        /// Left-only/right-only center mix level in dB.
        lo_ro_center_mix_level: float(f64),
        /// Left-only/right-only surround mix level in dB.
        lo_ro_surround_mix_level: float(f64),
        /// Left-total/right-total center mix level in dB.
        lt_rt_center_mix_level: float(f64),
        /// Left-total/right-total surround mix level in dB.
        lt_rt_surround_mix_level: float(f64),
        metadata_control: value(Eac3MetadataControl),
        passthrough_control: value(Eac3PassthroughControl),
        phase_control: value(Eac3PhaseControl),
        /// Only 48000 is supported.
        sample_rate: copy(i32),
        stereo_downmix: value(Eac3StereoDownmix),
        surround_ex_mode: value(Eac3SurroundExMode),
        surround_mode: value(Eac3SurroundMode),
    }
}

shape! {
    /// MPEG-1 Layer II settings.
    pub struct Mp2Settings {
        bitrate: copy(i32),
        channels: copy(i32),
        sample_rate: copy(i32),
    }
}

shape! {
    /// MP3 settings.
    pub struct Mp3Settings {
        bitrate: copy(i32),
        channels: copy(i32),
        rate_control_mode: value(Mp3RateControlMode),
        sample_rate: copy(i32),
        /// VBR quality, 0 (best) to 9.
        vbr_quality: copy(i32),
    }
}

shape! {
    /// Opus settings.
    pub struct OpusSettings {
        bitrate: copy(i32),
        channels: copy(i32),
        sample_rate: copy(i32),
    }
}

shape! {
    /// Vorbis settings, for WebM outputs.
    pub struct VorbisSettings {
        channels: copy(i32),
        sample_rate: copy(i32),
        /// VBR quality, -1 to 10.
        vbr_quality: copy(i32),
    }
}

shape! {
    /// Uncompressed WAV settings.
    pub struct WavSettings {
        bit_depth: copy(i32),
        channels: copy(i32),
        format: value(WavFormat),
        sample_rate: copy(i32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn aac_vbr_at_96k() {
        let aac = AacSettings::builder()
            .bitrate(96000)
            .rate_control_mode("VBR")
            .build();

        assert_eq!(aac.bitrate(), Some(96000));
        assert_eq!(aac.rate_control_mode(), Some(&AacRateControlMode::Vbr));
        assert_eq!(aac.rate_control_mode().map(AacRateControlMode::as_str), Some("VBR"));

        let other = AacSettings::builder()
            .rate_control_mode(AacRateControlMode::Vbr)
            .bitrate(96000)
            .build();
        assert_eq!(aac, other);
        assert_eq!(hash_of(&aac), hash_of(&other));
    }

    #[test]
    fn unset_fields_read_as_none() {
        let aac = AacSettings::builder().bitrate(64000).build();
        assert_eq!(aac.sample_rate(), None);
        assert_eq!(aac.coding_mode(), None);
    }

    #[test]
    fn set_none_clears_a_field() {
        let aac = AacSettings::builder()
            .bitrate(64000)
            .set_bitrate(None)
            .build();
        assert_eq!(aac, AacSettings::default());
    }

    #[test]
    fn chained_and_set_forms_agree() {
        let chained = Eac3Settings::builder()
            .bitrate(384000)
            .lo_ro_center_mix_level(-3.0)
            .coding_mode(Eac3CodingMode::CodingMode32)
            .build();
        let set = Eac3Settings::builder()
            .set_bitrate(Some(384000))
            .set_lo_ro_center_mix_level(Some(-3.0))
            .set_coding_mode(Some(Eac3CodingMode::CodingMode32))
            .build();
        assert_eq!(chained, set);
    }

    #[test]
    fn builder_getters_read_back() {
        let builder = Mp3Settings::builder().vbr_quality(2).channels(2);
        assert_eq!(builder.get_vbr_quality(), &Some(2));
        assert_eq!(builder.get_sample_rate(), &None);
    }

    #[test]
    fn renders_in_declaration_order() {
        let aac = AacSettings::builder()
            .sample_rate(48000)
            .bitrate(96000)
            .rate_control_mode(AacRateControlMode::Vbr)
            .build();
        assert_eq!(
            aac.to_string(),
            "{Bitrate: 96000,RateControlMode: VBR,SampleRate: 48000}"
        );
    }

    #[test]
    fn nested_settings_render_recursively() {
        let settings = AudioCodecSettings::builder()
            .codec(AudioCodec::Wav)
            .wav_settings(WavSettings::builder().bit_depth(24).format("RF64"))
            .build();
        assert_eq!(
            settings.to_string(),
            "{Codec: WAV,WavSettings: {BitDepth: 24,Format: RF64}}"
        );
    }

    #[test]
    fn float_fields_render_like_f64() {
        let eac3 = Eac3Settings::builder().lt_rt_surround_mix_level(-1.5).build();
        assert_eq!(eac3.lt_rt_surround_mix_level(), Some(-1.5));
        assert_eq!(eac3.to_string(), "{LtRtSurroundMixLevel: -1.5}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_keys_are_lower_camel_case() {
        let aac = AacSettings::builder()
            .codec_profile(AacCodecProfile::Hev1)
            .sample_rate(44100)
            .build();
        let json = serde_json::to_value(&aac).unwrap();
        assert_eq!(json, serde_json::json!({"codecProfile": "HEV1", "sampleRate": 44100}));
    }
}
