use super::enums::*;
use crate::audio::LanguageCode;

shape! {
    /// Selects one caption track of an input.
    pub struct CaptionSelector {
        custom_language_code: string(String),
        language_code: value(LanguageCode),
        source_settings: value(CaptionSourceSettings),
    }
}

shape! {
    /// Format-specific caption input settings.
    pub struct CaptionSourceSettings {
        ancillary_source_settings: value(AncillarySourceSettings),
        dvb_sub_source_settings: value(DvbSubSourceSettings),
        embedded_source_settings: value(EmbeddedSourceSettings),
        file_source_settings: value(FileSourceSettings),
        source_type: value(CaptionSourceType),
        teletext_source_settings: value(TeletextSourceSettings),
        track_source_settings: value(TrackSourceSettings),
    }
}

shape! {
    /// Captions carried in SMPTE 334 ancillary data.
    pub struct AncillarySourceSettings {
        convert608_to708: value(AncillaryConvert608To708),
        source_ancillary_channel_number: copy(i32),
        terminate_captions: value(AncillaryTerminateCaptions),
    }
}

shape! {
    pub struct DvbSubSourceSettings {
        /// PID of the DVB-Sub stream; the first one is used when unset.
        pid: copy(i32),
    }
}

shape! {
    /// CEA-608/708 captions embedded in the input video.
    pub struct EmbeddedSourceSettings {
        convert608_to708: value(EmbeddedConvert608To708),
        source608_channel_number: copy(i32),
        source608_track_number: copy(i32),
        terminate_captions: value(EmbeddedTerminateCaptions),
    }
}

shape! {
    /// Captions in a sidecar file.
    pub struct FileSourceSettings {
        convert608_to708: value(FileSourceConvert608To708),
        /// Location of the caption file.
        source_file: string(String),
        /// Offset in seconds applied to every caption timestamp.
        time_delta: copy(i32),
    }
}

shape! {
    pub struct TeletextSourceSettings {
        page_number: string(String),
    }
}

shape! {
    pub struct TrackSourceSettings {
        /// One-based index of the caption track in the input container.
        track_number: copy(i32),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_selector() {
        let selector = CaptionSelector::builder()
            .language_code(LanguageCode::Eng)
            .source_settings(
                CaptionSourceSettings::builder()
                    .source_type(CaptionSourceType::Srt)
                    .file_source_settings(
                        FileSourceSettings::builder()
                            .source_file("s3://bucket/captions.srt")
                            .time_delta(-2),
                    ),
            )
            .build();

        let file = selector
            .source_settings()
            .and_then(CaptionSourceSettings::file_source_settings)
            .unwrap();
        assert_eq!(file.source_file(), Some("s3://bucket/captions.srt"));
        assert_eq!(file.time_delta(), Some(-2));
        assert_eq!(file.convert608_to708(), None);
    }

    #[test]
    fn convert_label_keeps_both_standards() {
        let embedded = EmbeddedSourceSettings::builder()
            .convert608_to708(EmbeddedConvert608To708::Upconvert)
            .source608_channel_number(1)
            .build();
        assert_eq!(
            embedded.to_string(),
            "{Convert608To708: UPCONVERT,Source608ChannelNumber: 1}"
        );
    }
}
