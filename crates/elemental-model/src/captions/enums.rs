//! Enumerations used by caption shapes.

open_enums! {
    /// Caption format written to an output.
    CaptionDestinationType {
        BurnIn = "BURN_IN",
        DvbSub = "DVB_SUB",
        Embedded = "EMBEDDED",
        EmbeddedPlusScte20 = "EMBEDDED_PLUS_SCTE20",
        Imsc = "IMSC",
        Scte20PlusEmbedded = "SCTE20_PLUS_EMBEDDED",
        Scc = "SCC",
        Srt = "SRT",
        Smi = "SMI",
        Teletext = "TELETEXT",
        Ttml = "TTML",
        Webvtt = "WEBVTT",
    }

    /// Caption format read from an input.
    CaptionSourceType {
        Ancillary = "ANCILLARY",
        DvbSub = "DVB_SUB",
        Embedded = "EMBEDDED",
        Scte20 = "SCTE20",
        Scc = "SCC",
        Ttml = "TTML",
        Stl = "STL",
        Srt = "SRT",
        Smi = "SMI",
        Teletext = "TELETEXT",
        NullSource = "NULL_SOURCE",
        Imsc = "IMSC",
    }

    BurninSubtitleAlignment {
        Centered = "CENTERED",
        Left = "LEFT",
    }

    BurninSubtitleBackgroundColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }

    BurninSubtitleFontColor {
        White = "WHITE",
        Black = "BLACK",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }

    BurninSubtitleOutlineColor {
        Black = "BLACK",
        White = "WHITE",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }

    BurninSubtitleShadowColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }

    /// Character spacing for burned-in captions converted from teletext.
    BurninSubtitleTeletextSpacing {
        FixedGrid = "FIXED_GRID",
        Proportional = "PROPORTIONAL",
    }

    DvbSubtitleAlignment {
        Centered = "CENTERED",
        Left = "LEFT",
    }

    DvbSubtitleBackgroundColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }

    DvbSubtitleFontColor {
        White = "WHITE",
        Black = "BLACK",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }

    DvbSubtitleOutlineColor {
        Black = "BLACK",
        White = "WHITE",
        Yellow = "YELLOW",
        Red = "RED",
        Green = "GREEN",
        Blue = "BLUE",
    }

    DvbSubtitleShadowColor {
        None = "NONE",
        Black = "BLACK",
        White = "WHITE",
    }

    DvbSubtitleTeletextSpacing {
        FixedGrid = "FIXED_GRID",
        Proportional = "PROPORTIONAL",
    }

    /// Subtitling type signalled in the DVB subtitle descriptor.
    DvbSubtitlingType {
        HearingImpaired = "HEARING_IMPAIRED",
        Standard = "STANDARD",
    }

    /// Script used to pick a font for Chinese captions.
    FontScript {
        Automatic = "AUTOMATIC",
        Hans = "HANS",
        Hant = "HANT",
    }

    AncillaryConvert608To708 {
        Upconvert = "UPCONVERT",
        Disabled = "DISABLED",
    }

    AncillaryTerminateCaptions {
        EndOfInput = "END_OF_INPUT",
        Disabled = "DISABLED",
    }

    /// Whether 608 captions are upconverted to 708.
    EmbeddedConvert608To708 {
        Upconvert = "UPCONVERT",
        Disabled = "DISABLED",
    }

    EmbeddedTerminateCaptions {
        EndOfInput = "END_OF_INPUT",
        Disabled = "DISABLED",
    }

    FileSourceConvert608To708 {
        Upconvert = "UPCONVERT",
        Disabled = "DISABLED",
    }

    ImscStylePassthrough {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    /// Frame rate of SCC caption outputs.
    SccDestinationFramerate {
        Framerate2397 = "FRAMERATE_23_97",
        Framerate24 = "FRAMERATE_24",
        Framerate25 = "FRAMERATE_25",
        Framerate2997Dropframe = "FRAMERATE_29_97_DROPFRAME",
        Framerate2997NonDropframe = "FRAMERATE_29_97_NON_DROPFRAME",
    }

    TeletextPageType {
        PageTypeInitial = "PAGE_TYPE_INITIAL",
        PageTypeSubtitle = "PAGE_TYPE_SUBTITLE",
        PageTypeAddlInfo = "PAGE_TYPE_ADDL_INFO",
        PageTypeProgramSchedule = "PAGE_TYPE_PROGRAM_SCHEDULE",
        PageTypeHearingImpairedSubtitle = "PAGE_TYPE_HEARING_IMPAIRED_SUBTITLE",
    }

    TtmlStylePassthrough {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }
}
