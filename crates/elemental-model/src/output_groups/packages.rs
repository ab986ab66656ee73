//! Group settings for each adaptive-streaming and file package type.

use super::destinations::DestinationSettings;
use super::enums::*;
use crate::audio::LanguageCode;
use crate::encryption::{
    CmafEncryptionSettings, DashIsoEncryptionSettings, HlsEncryptionSettings,
    MsSmoothEncryptionSettings,
};

shape! {
    /// CMAF output group: one set of fragmented MP4 segments served through
    /// both HLS and DASH manifests.
    pub struct CmafGroupSettings {
        additional_manifests: list(CmafAdditionalManifest),
        /// Base URL written into the manifests in place of relative paths.
        base_url: string(String),
        client_cache: value(CmafClientCache),
        codec_specification: value(CmafCodecSpecification),
        /// Destination URI prefix, `s3://bucket/path/`.
        destination: string(String),
        destination_settings: value(DestinationSettings),
        encryption: value(CmafEncryptionSettings),
        /// Fragment length in seconds.
        fragment_length: copy(i32),
        manifest_compression: value(CmafManifestCompression),
        manifest_duration_format: value(CmafManifestDurationFormat),
        /// Minimum player buffer, in milliseconds.
        min_buffer_time: copy(i32),
        /// Segments shorter than this many seconds are merged into the
        /// previous one.
        min_final_segment_length: float(f64),
        mpd_profile: value(CmafMpdProfile),
        segment_control: value(CmafSegmentControl),
        /// Segment length in seconds.
        segment_length: copy(i32),
        stream_inf_resolution: value(CmafStreamInfResolution),
        write_dash_manifest: value(CmafWriteDASHManifest),
        write_hls_manifest: value(CmafWriteHLSManifest),
        write_segment_timeline_in_representation: value(CmafWriteSegmentTimelineInRepresentation),
    }
}

shape! {
    /// An extra manifest that lists a subset of the group's outputs.
    pub struct CmafAdditionalManifest {
        manifest_name_modifier: string(String),
        /// Name modifiers of the outputs included in the manifest.
        selected_outputs: list(String),
    }
}

shape! {
    /// DASH ISO output group.
    pub struct DashIsoGroupSettings {
        additional_manifests: list(DashAdditionalManifest),
        base_url: string(String),
        destination: string(String),
        destination_settings: value(DestinationSettings),
        encryption: value(DashIsoEncryptionSettings),
        fragment_length: copy(i32),
        hbbtv_compliance: value(DashIsoHbbtvCompliance),
        min_buffer_time: copy(i32),
        min_final_segment_length: float(f64),
        mpd_profile: value(DashIsoMpdProfile),
        segment_control: value(DashIsoSegmentControl),
        segment_length: copy(i32),
        write_segment_timeline_in_representation: value(DashIsoWriteSegmentTimelineInRepresentation),
    }
}

shape! {
    pub struct DashAdditionalManifest {
        manifest_name_modifier: string(String),
        selected_outputs: list(String),
    }
}

shape! {
    /// File output group: standalone files with no manifest.
    pub struct FileGroupSettings {
        destination: string(String),
        destination_settings: value(DestinationSettings),
    }
}

shape! {
    /// Apple HLS output group.
    pub struct HlsGroupSettings {
        ad_markers: list(HlsAdMarkers),
        additional_manifests: list(HlsAdditionalManifest),
        base_url: string(String),
        caption_language_mappings: list(HlsCaptionLanguageMapping),
        caption_language_setting: value(HlsCaptionLanguageSetting),
        client_cache: value(HlsClientCache),
        codec_specification: value(HlsCodecSpecification),
        destination: string(String),
        destination_settings: value(DestinationSettings),
        directory_structure: value(HlsDirectoryStructure),
        encryption: value(HlsEncryptionSettings),
        manifest_compression: value(HlsManifestCompression),
        manifest_duration_format: value(HlsManifestDurationFormat),
        min_final_segment_length: float(f64),
        /// Minimum segment length in seconds.
        min_segment_length: copy(i32),
        output_selection: value(HlsOutputSelection),
        program_date_time: value(HlsProgramDateTime),
        /// Seconds between `EXT-X-PROGRAM-DATE-TIME` tags, 0 to 3600.
        program_date_time_period: copy(i32),
        segment_control: value(HlsSegmentControl),
        segment_length: copy(i32),
        segments_per_subdirectory: copy(i32),
        stream_inf_resolution: value(HlsStreamInfResolution),
        timed_metadata_id3_frame: value(HlsTimedMetadataId3Frame),
        timed_metadata_id3_period: copy(i32),
        timestamp_delta_milliseconds: copy(i32),
    }
}

shape! {
    pub struct HlsAdditionalManifest {
        manifest_name_modifier: string(String),
        selected_outputs: list(String),
    }
}

shape! {
    /// Declares one closed-caption channel in the HLS master manifest.
    pub struct HlsCaptionLanguageMapping {
        /// CEA-608 channel, 1 to 4.
        caption_channel: copy(i32),
        custom_language_code: string(String),
        language_code: value(LanguageCode),
        language_description: string(String),
    }
}

shape! {
    /// Microsoft Smooth Streaming output group.
    pub struct MsSmoothGroupSettings {
        additional_manifests: list(MsSmoothAdditionalManifest),
        audio_deduplication: value(MsSmoothAudioDeduplication),
        destination: string(String),
        destination_settings: value(DestinationSettings),
        encryption: value(MsSmoothEncryptionSettings),
        fragment_length: copy(i32),
        manifest_encoding: value(MsSmoothManifestEncoding),
    }
}

shape! {
    pub struct MsSmoothAdditionalManifest {
        manifest_name_modifier: string(String),
        selected_outputs: list(String),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encryption::{CmafKeyProviderType, SpekeKeyProviderCmaf};

    #[test]
    fn cmaf_group_with_speke() {
        let group = CmafGroupSettings::builder()
            .destination("s3://bucket/cmaf/")
            .segment_length(6)
            .fragment_length(2)
            .write_dash_manifest(CmafWriteDASHManifest::Enabled)
            .write_hls_manifest(CmafWriteHLSManifest::Enabled)
            .encryption(
                CmafEncryptionSettings::builder()
                    .key_provider_type(CmafKeyProviderType::Speke)
                    .speke_key_provider(
                        SpekeKeyProviderCmaf::builder()
                            .resource_id("movie-42")
                            .url("https://speke.example.com/v1"),
                    ),
            )
            .build();

        let speke = group
            .encryption()
            .and_then(CmafEncryptionSettings::speke_key_provider)
            .unwrap();
        assert_eq!(speke.resource_id(), Some("movie-42"));
        assert_eq!(group.segment_length(), Some(6));
        assert_eq!(group.min_final_segment_length(), None);
    }

    #[test]
    fn ad_markers_accept_both_forms() {
        let group = HlsGroupSettings::builder()
            .ad_markers(HlsAdMarkers::Elemental)
            .ad_markers("ELEMENTAL_SCTE35")
            .build();
        assert_eq!(group.to_string(), "{AdMarkers: [ELEMENTAL, ELEMENTAL_SCTE35]}");
    }

    #[test]
    fn additional_manifest_selection() {
        let manifest = HlsAdditionalManifest::builder()
            .manifest_name_modifier("_low")
            .selected_outputs("_360p")
            .selected_outputs("_540p")
            .build();
        assert_eq!(
            manifest.selected_outputs(),
            Some(&["_360p".to_string(), "_540p".to_string()][..])
        );
        assert_eq!(
            manifest.to_string(),
            "{ManifestNameModifier: _low,SelectedOutputs: [_360p, _540p]}"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn dash_manifest_key_is_spelled_like_the_api() {
        let group = CmafGroupSettings::builder()
            .write_dash_manifest(CmafWriteDASHManifest::Disabled)
            .build();
        assert_eq!(
            serde_json::to_string(&group).unwrap(),
            r#"{"writeDashManifest":"DISABLED"}"#
        );
    }
}
