use super::enums::*;
use super::packages::*;
use crate::audio::AudioDescription;
use crate::captions::CaptionDescription;
use crate::containers::ContainerSettings;
use crate::video::VideoDescription;

shape! {
    /// A set of outputs packaged and delivered together.
    pub struct OutputGroup {
        /// Name shown in the console and in CloudWatch events.
        custom_name: string(String),
        name: string(String),
        output_group_settings: value(OutputGroupSettings),
        outputs: list(Output),
    }
}

shape! {
    /// Selects the group type and carries its settings.
    pub struct OutputGroupSettings {
        cmaf_group_settings: value(CmafGroupSettings),
        dash_iso_group_settings: value(DashIsoGroupSettings),
        file_group_settings: value(FileGroupSettings),
        hls_group_settings: value(HlsGroupSettings),
        ms_smooth_group_settings: value(MsSmoothGroupSettings),
        group_type: value(OutputGroupType) as "Type" / "type",
    }
}

shape! {
    /// One output of an output group.
    pub struct Output {
        audio_descriptions: list(AudioDescription),
        caption_descriptions: list(CaptionDescription),
        container_settings: value(ContainerSettings),
        /// File extension, without the dot.
        extension: string(String),
        /// Appended to the input file name to build the output name.
        name_modifier: string(String),
        output_settings: value(OutputSettings),
        /// Name of a preset to apply instead of inline settings.
        preset: string(String),
        video_description: value(VideoDescription),
    }
}

shape! {
    /// Group-type specific settings of one output.
    pub struct OutputSettings {
        hls_settings: value(HlsSettings),
    }
}

shape! {
    /// Settings of one rendition in an HLS output group.
    pub struct HlsSettings {
        /// Audio rendition group this rendition belongs to.
        audio_group_id: string(String),
        audio_only_container: value(HlsAudioOnlyContainer),
        /// Comma-separated audio group IDs a video rendition is associated with.
        audio_rendition_sets: string(String),
        audio_track_type: value(HlsAudioTrackType),
        i_frame_only_manifest: value(HlsIFrameOnlyManifest),
        segment_modifier: string(String),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walk::UnknownValues;

    #[test]
    fn outputs_keep_insertion_order() {
        let group = OutputGroup::builder()
            .name("Apple HLS")
            .outputs(Output::builder().name_modifier("_720p"))
            .outputs(Output::builder().name_modifier("_1080p"))
            .build();
        let modifiers: Vec<_> = group
            .outputs()
            .unwrap()
            .iter()
            .filter_map(Output::name_modifier)
            .collect();
        assert_eq!(modifiers, ["_720p", "_1080p"]);
    }

    #[test]
    fn i_frame_label() {
        let hls = HlsSettings::builder()
            .i_frame_only_manifest(HlsIFrameOnlyManifest::Include)
            .build();
        assert_eq!(hls.to_string(), "{IFrameOnlyManifest: INCLUDE}");
    }

    #[test]
    fn group_type_renders_as_type() {
        let settings = OutputGroupSettings::builder()
            .group_type(OutputGroupType::FileGroupSettings)
            .file_group_settings(FileGroupSettings::builder().destination("s3://bucket/out/"))
            .build();
        assert_eq!(
            settings.to_string(),
            "{FileGroupSettings: {Destination: s3://bucket/out/},Type: FILE_GROUP_SETTINGS}"
        );
    }

    #[test]
    fn unknown_values_carry_list_indices() {
        let group = OutputGroup::builder()
            .outputs(Output::builder())
            .outputs(
                Output::builder().output_settings(
                    OutputSettings::builder()
                        .hls_settings(HlsSettings::builder().audio_track_type("ALTERNATE_AUDIO_FUTURE")),
                ),
            )
            .build();
        let unknown = group.unknown_values();
        assert_eq!(unknown.len(), 1);
        assert_eq!(
            unknown[0].path,
            "Outputs[1].OutputSettings.HlsSettings.AudioTrackType"
        );
        assert_eq!(unknown[0].value, "ALTERNATE_AUDIO_FUTURE");
    }
}
