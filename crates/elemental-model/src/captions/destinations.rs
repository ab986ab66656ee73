use super::enums::*;
use crate::audio::LanguageCode;

shape! {
    /// One caption track of an output.
    pub struct CaptionDescription {
        /// Name of the input caption selector this track is read from.
        caption_selector_name: string(String),
        custom_language_code: string(String),
        destination_settings: value(CaptionDestinationSettings),
        language_code: value(LanguageCode),
        /// Human-readable description written to manifests.
        language_description: string(String),
    }
}

shape! {
    /// Caption description as stored in a preset, without a selector name.
    pub struct CaptionDescriptionPreset {
        custom_language_code: string(String),
        destination_settings: value(CaptionDestinationSettings),
        language_code: value(LanguageCode),
        language_description: string(String),
    }
}

shape! {
    /// Format-specific caption output settings.
    pub struct CaptionDestinationSettings {
        burnin_destination_settings: value(BurninDestinationSettings),
        destination_type: value(CaptionDestinationType),
        dvb_sub_destination_settings: value(DvbSubDestinationSettings),
        embedded_destination_settings: value(EmbeddedDestinationSettings),
        imsc_destination_settings: value(ImscDestinationSettings),
        scc_destination_settings: value(SccDestinationSettings),
        teletext_destination_settings: value(TeletextDestinationSettings),
        ttml_destination_settings: value(TtmlDestinationSettings),
    }
}

shape! {
    /// Captions rendered into the video picture.
    pub struct BurninDestinationSettings {
        alignment: value(BurninSubtitleAlignment),
        background_color: value(BurninSubtitleBackgroundColor),
        background_opacity: copy(i32),
        font_color: value(BurninSubtitleFontColor),
        /// Font opacity, 0 (transparent) to 255 (opaque).
        font_opacity: copy(i32),
        /// Font resolution in DPI.
        font_resolution: copy(i32),
        font_script: value(FontScript),
        /// Font size in points; 0 selects automatic sizing.
        font_size: copy(i32),
        outline_color: value(BurninSubtitleOutlineColor),
        outline_size: copy(i32),
        shadow_color: value(BurninSubtitleShadowColor),
        shadow_opacity: copy(i32),
        shadow_x_offset: copy(i32),
        shadow_y_offset: copy(i32),
        teletext_spacing: value(BurninSubtitleTeletextSpacing),
        x_position: copy(i32),
        y_position: copy(i32),
    }
}

shape! {
    /// DVB-Sub bitmap subtitles.
    pub struct DvbSubDestinationSettings {
        alignment: value(DvbSubtitleAlignment),
        background_color: value(DvbSubtitleBackgroundColor),
        background_opacity: copy(i32),
        font_color: value(DvbSubtitleFontColor),
        font_opacity: copy(i32),
        font_resolution: copy(i32),
        font_script: value(FontScript),
        font_size: copy(i32),
        outline_color: value(DvbSubtitleOutlineColor),
        outline_size: copy(i32),
        shadow_color: value(DvbSubtitleShadowColor),
        shadow_opacity: copy(i32),
        shadow_x_offset: copy(i32),
        shadow_y_offset: copy(i32),
        subtitling_type: value(DvbSubtitlingType),
        teletext_spacing: value(DvbSubtitleTeletextSpacing),
        x_position: copy(i32),
        y_position: copy(i32),
    }
}

shape! {
    /// CEA-608/708 captions embedded in the video stream.
    pub struct EmbeddedDestinationSettings {
        /// CEA-608 channel, 1 to 4.
        destination608_channel_number: copy(i32),
        /// CEA-708 service number, 1 to 6.
        destination708_service_number: copy(i32),
    }
}

shape! {
    pub struct ImscDestinationSettings {
        style_passthrough: value(ImscStylePassthrough),
    }
}

shape! {
    pub struct SccDestinationSettings {
        framerate: value(SccDestinationFramerate),
    }
}

shape! {
    /// Teletext subtitle output.
    pub struct TeletextDestinationSettings {
        /// Three-digit hexadecimal page number, `100` to `8FF`.
        page_number: string(String),
        page_types: list(TeletextPageType),
    }
}

shape! {
    pub struct TtmlDestinationSettings {
        style_passthrough: value(TtmlStylePassthrough),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burnin_offsets_keep_their_axis_letter() {
        let burnin = BurninDestinationSettings::builder()
            .shadow_x_offset(-2)
            .x_position(100)
            .build();
        assert_eq!(burnin.to_string(), "{ShadowXOffset: -2,XPosition: 100}");
    }

    #[test]
    fn embedded_channel_labels_keep_digits() {
        let embedded = EmbeddedDestinationSettings::builder()
            .destination608_channel_number(1)
            .destination708_service_number(1)
            .build();
        assert_eq!(
            embedded.to_string(),
            "{Destination608ChannelNumber: 1,Destination708ServiceNumber: 1}"
        );
    }

    #[test]
    fn teletext_page_types_keep_order() {
        let teletext = TeletextDestinationSettings::builder()
            .page_number("801")
            .page_types(TeletextPageType::PageTypeInitial)
            .page_types("PAGE_TYPE_SUBTITLE")
            .build();
        assert_eq!(
            teletext.page_types(),
            Some(
                &[
                    TeletextPageType::PageTypeInitial,
                    TeletextPageType::PageTypeSubtitle
                ][..]
            )
        );
    }

    #[test]
    fn preset_and_job_descriptions_are_distinct_shapes() {
        let settings = CaptionDestinationSettings::builder()
            .destination_type(CaptionDestinationType::Webvtt)
            .build();
        let preset = CaptionDescriptionPreset::builder()
            .destination_settings(settings.clone())
            .language_code(LanguageCode::Fra)
            .build();
        let job = CaptionDescription::builder()
            .caption_selector_name("Captions Selector 1")
            .destination_settings(settings)
            .language_code(LanguageCode::Fra)
            .build();
        assert_eq!(preset.destination_settings(), job.destination_settings());
        assert_eq!(
            job.to_string(),
            "{CaptionSelectorName: Captions Selector 1,DestinationSettings: {DestinationType: WEBVTT},LanguageCode: FRA}"
        );
    }
}
