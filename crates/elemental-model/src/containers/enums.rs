//! Enumerations used by container shapes.

open_enums! {
    /// Container wrapping an output.
    ContainerType {
        F4v = "F4V",
        Ismv = "ISMV",
        M2ts = "M2TS",
        M3u8 = "M3U8",
        Cmfc = "CMFC",
        Mov = "MOV",
        Mp4 = "MP4",
        Mpd = "MPD",
        Mxf = "MXF",
        Webm = "WEBM",
        Raw = "RAW",
    }

    CmfcScte35Esam {
        Insert = "INSERT",
        None = "NONE",
    }

    CmfcScte35Source {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }

    /// Where the moov atom is placed.
    F4vMoovPlacement {
        ProgressiveDownload = "PROGRESSIVE_DOWNLOAD",
        Normal = "NORMAL",
    }

    DvbSdtOutputSdt {
        SdtFollow = "SDT_FOLLOW",
        SdtFollowIfPresent = "SDT_FOLLOW_IF_PRESENT",
        SdtManual = "SDT_MANUAL",
        SdtNone = "SDT_NONE",
    }

    M2tsAudioBufferModel {
        Dvb = "DVB",
        Atsc = "ATSC",
    }

    M2tsBufferModel {
        Multiplex = "MULTIPLEX",
        None = "NONE",
    }

    M2tsEbpAudioInterval {
        VideoAndFixedIntervals = "VIDEO_AND_FIXED_INTERVALS",
        VideoInterval = "VIDEO_INTERVAL",
    }

    M2tsEbpPlacement {
        VideoAndAudioPids = "VIDEO_AND_AUDIO_PIDS",
        VideoPid = "VIDEO_PID",
    }

    M2tsEsRateInPes {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    M2tsForceTsVideoEbpOrder {
        Force = "FORCE",
        Default = "DEFAULT",
    }

    M2tsNielsenId3 {
        Insert = "INSERT",
        None = "NONE",
    }

    M2tsPcrControl {
        PcrEveryPesPacket = "PCR_EVERY_PES_PACKET",
        ConfiguredPcrPeriod = "CONFIGURED_PCR_PERIOD",
    }

    /// Constant or variable transport stream bitrate.
    M2tsRateMode {
        Vbr = "VBR",
        Cbr = "CBR",
    }

    M2tsScte35Source {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }

    /// Markers inserted at segment boundaries of a transport stream.
    M2tsSegmentationMarkers {
        None = "NONE",
        RaiSegstart = "RAI_SEGSTART",
        RaiAdapt = "RAI_ADAPT",
        PsiSegstart = "PSI_SEGSTART",
        Ebp = "EBP",
        EbpLegacy = "EBP_LEGACY",
    }

    M2tsSegmentationStyle {
        MaintainCadence = "MAINTAIN_CADENCE",
        ResetCadence = "RESET_CADENCE",
    }

    M3u8NielsenId3 {
        Insert = "INSERT",
        None = "NONE",
    }

    M3u8PcrControl {
        PcrEveryPesPacket = "PCR_EVERY_PES_PACKET",
        ConfiguredPcrPeriod = "CONFIGURED_PCR_PERIOD",
    }

    M3u8Scte35Source {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }

    /// Passes ID3 timed metadata from the input through to the output.
    TimedMetadata {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }

    MovClapAtom {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    MovCslgAtom {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    /// FourCC written for MPEG-2 video in QuickTime.
    MovMpeg2FourCCControl {
        Xdcam = "XDCAM",
        Mpeg = "MPEG",
    }

    MovPaddingControl {
        Omneon = "OMNEON",
        None = "NONE",
    }

    MovReference {
        SelfContained = "SELF_CONTAINED",
        External = "EXTERNAL",
    }

    Mp4CslgAtom {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    Mp4FreeSpaceBox {
        Include = "INCLUDE",
        Exclude = "EXCLUDE",
    }

    Mp4MoovPlacement {
        ProgressiveDownload = "PROGRESSIVE_DOWNLOAD",
        Normal = "NORMAL",
    }

    MpdCaptionContainerType {
        Raw = "RAW",
        FragmentedMp4 = "FRAGMENTED_MP4",
    }

    MpdScte35Esam {
        Insert = "INSERT",
        None = "NONE",
    }

    MpdScte35Source {
        Passthrough = "PASSTHROUGH",
        None = "NONE",
    }
}
