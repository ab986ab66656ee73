//! Enumerations used by input shapes.

open_enums! {
    InputDeblockFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    InputDenoiseFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    InputFilterEnable {
        Auto = "AUTO",
        Disable = "DISABLE",
        Force = "FORCE",
    }

    InputPsiControl {
        IgnorePsi = "IGNORE_PSI",
        UsePsi = "USE_PSI",
    }

    /// Where input timecode comes from.
    InputTimecodeSource {
        Embedded = "EMBEDDED",
        Zerobased = "ZEROBASED",
        Specifiedstart = "SPECIFIEDSTART",
    }

    AudioDefaultSelection {
        Default = "DEFAULT",
        NotDefault = "NOT_DEFAULT",
    }

    /// How an audio selector picks its tracks.
    AudioSelectorType {
        Pid = "PID",
        Track = "TRACK",
        LanguageCode = "LANGUAGE_CODE",
    }

    /// Colour space of the input video.
    ColorSpace {
        Follow = "FOLLOW",
        Rec601 = "REC_601",
        Rec709 = "REC_709",
        Hdr10 = "HDR10",
        Hlg2020 = "HLG_2020",
    }

    ColorSpaceUsage {
        Force = "FORCE",
        Fallback = "FALLBACK",
    }

    InputRotate {
        Degree0 = "DEGREE_0",
        Degrees90 = "DEGREES_90",
        Degrees180 = "DEGREES_180",
        Degrees270 = "DEGREES_270",
        Auto = "AUTO",
    }

    /// Cipher mode of an encrypted input.
    DecryptionMode {
        AesCtr = "AES_CTR",
        AesCbc = "AES_CBC",
        AesGcm = "AES_GCM",
    }
}
