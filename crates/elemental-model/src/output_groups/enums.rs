//! Enumerations used by output group shapes.

open_enums! {
    /// Kind of output group.
    OutputGroupType {
        HlsGroupSettings = "HLS_GROUP_SETTINGS",
        DashIsoGroupSettings = "DASH_ISO_GROUP_SETTINGS",
        FileGroupSettings = "FILE_GROUP_SETTINGS",
        MsSmoothGroupSettings = "MS_SMOOTH_GROUP_SETTINGS",
        CmafGroupSettings = "CMAF_GROUP_SETTINGS",
    }

    CmafClientCache {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    CmafCodecSpecification {
        Rfc6381 = "RFC_6381",
        Rfc4281 = "RFC_4281",
    }

    CmafManifestCompression {
        Gzip = "GZIP",
        None = "NONE",
    }

    CmafManifestDurationFormat {
        FloatingPoint = "FLOATING_POINT",
        Integer = "INTEGER",
    }

    CmafMpdProfile {
        MainProfile = "MAIN_PROFILE",
        OnDemandProfile = "ON_DEMAND_PROFILE",
    }

    /// Write one file per rendition, or one file per segment.
    CmafSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }

    CmafStreamInfResolution {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    CmafWriteDASHManifest {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    CmafWriteHLSManifest {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    CmafWriteSegmentTimelineInRepresentation {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    DashIsoHbbtvCompliance {
        Hbbtv15 = "HBBTV_1_5",
        None = "NONE",
    }

    DashIsoMpdProfile {
        MainProfile = "MAIN_PROFILE",
        OnDemandProfile = "ON_DEMAND_PROFILE",
    }

    DashIsoSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }

    DashIsoWriteSegmentTimelineInRepresentation {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    /// Ad marker styles written into HLS manifests.
    HlsAdMarkers {
        Elemental = "ELEMENTAL",
        ElementalScte35 = "ELEMENTAL_SCTE35",
    }

    HlsAudioOnlyContainer {
        Automatic = "AUTOMATIC",
        M2ts = "M2TS",
    }

    /// How an audio rendition is advertised in the HLS master manifest.
    HlsAudioTrackType {
        AlternateAudioAutoSelectDefault = "ALTERNATE_AUDIO_AUTO_SELECT_DEFAULT",
        AlternateAudioAutoSelect = "ALTERNATE_AUDIO_AUTO_SELECT",
        AlternateAudioNotAutoSelect = "ALTERNATE_AUDIO_NOT_AUTO_SELECT",
        AudioOnlyVariantStream = "AUDIO_ONLY_VARIANT_STREAM",
    }

    HlsIFrameOnlyManifest {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    HlsCaptionLanguageSetting {
        Insert = "INSERT",
        Omit = "OMIT",
        None = "NONE",
    }

    HlsClientCache {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    HlsCodecSpecification {
        Rfc6381 = "RFC_6381",
        Rfc4281 = "RFC_4281",
    }

    HlsDirectoryStructure {
        SingleDirectory = "SINGLE_DIRECTORY",
        SubdirectoryPerStream = "SUBDIRECTORY_PER_STREAM",
    }

    HlsManifestCompression {
        Gzip = "GZIP",
        None = "NONE",
    }

    HlsManifestDurationFormat {
        FloatingPoint = "FLOATING_POINT",
        Integer = "INTEGER",
    }

    HlsOutputSelection {
        ManifestsAndSegments = "MANIFESTS_AND_SEGMENTS",
        SegmentsOnly = "SEGMENTS_ONLY",
    }

    HlsProgramDateTime {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    HlsSegmentControl {
        SingleFile = "SINGLE_FILE",
        SegmentedFiles = "SEGMENTED_FILES",
    }

    HlsStreamInfResolution {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    HlsTimedMetadataId3Frame {
        None = "NONE",
        Priv = "PRIV",
        Tdrl = "TDRL",
    }

    MsSmoothAudioDeduplication {
        CombineDuplicateStreams = "COMBINE_DUPLICATE_STREAMS",
        None = "NONE",
    }

    MsSmoothManifestEncoding {
        Utf8 = "UTF8",
        Utf16 = "UTF16",
    }

    /// Canned ACL applied to objects written to S3.
    S3ObjectCannedAcl {
        PublicRead = "PUBLIC_READ",
        AuthenticatedRead = "AUTHENTICATED_READ",
        BucketOwnerRead = "BUCKET_OWNER_READ",
        BucketOwnerFullControl = "BUCKET_OWNER_FULL_CONTROL",
    }

    S3ServerSideEncryptionType {
        ServerSideEncryptionS3 = "SERVER_SIDE_ENCRYPTION_S3",
        ServerSideEncryptionKms = "SERVER_SIDE_ENCRYPTION_KMS",
    }
}
