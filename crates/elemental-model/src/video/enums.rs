//! Enumerations used by video shapes.

open_enums! {
    /// Video codec of an output video description.
    VideoCodec {
        Av1 = "AV1",
        AvcIntra = "AVC_INTRA",
        FrameCapture = "FRAME_CAPTURE",
        H264 = "H_264",
        H265 = "H_265",
        Mpeg2 = "MPEG2",
        Prores = "PRORES",
        Vc3 = "VC3",
        Vp8 = "VP8",
        Vp9 = "VP9",
    }

    /// Active Format Description signalling in the output.
    AfdSignaling {
        None = "NONE",
        Auto = "AUTO",
        Fixed = "FIXED",
    }

    AntiAlias {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    /// Whether HDR colour metadata is written to the output.
    ColorMetadata {
        Ignore = "IGNORE",
        Insert = "INSERT",
    }

    DropFrameTimecode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    RespondToAfd {
        None = "NONE",
        Respond = "RESPOND",
        Passthrough = "PASSTHROUGH",
    }

    ScalingBehavior {
        Default = "DEFAULT",
        StretchToOutput = "STRETCH_TO_OUTPUT",
    }

    /// Where timecode is embedded in the video elementary stream.
    VideoTimecodeInsertion {
        Disabled = "DISABLED",
        PicTimingSei = "PIC_TIMING_SEI",
    }

    Av1AdaptiveQuantization {
        Off = "OFF",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        Higher = "HIGHER",
        Max = "MAX",
    }

    Av1FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    Av1FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }

    Av1RateControlMode {
        Qvbr = "QVBR",
    }

    Av1SpatialAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H264AdaptiveQuantization {
        Off = "OFF",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        Higher = "HIGHER",
        Max = "MAX",
    }

    /// H.264 level. AUTO lets the service pick one consistent with the output.
    H264CodecLevel {
        Auto = "AUTO",
        Level1 = "LEVEL_1",
        Level11 = "LEVEL_1_1",
        Level12 = "LEVEL_1_2",
        Level13 = "LEVEL_1_3",
        Level2 = "LEVEL_2",
        Level21 = "LEVEL_2_1",
        Level22 = "LEVEL_2_2",
        Level3 = "LEVEL_3",
        Level31 = "LEVEL_3_1",
        Level32 = "LEVEL_3_2",
        Level4 = "LEVEL_4",
        Level41 = "LEVEL_4_1",
        Level42 = "LEVEL_4_2",
        Level5 = "LEVEL_5",
        Level51 = "LEVEL_5_1",
        Level52 = "LEVEL_5_2",
    }

    H264CodecProfile {
        Baseline = "BASELINE",
        High = "HIGH",
        High10bit = "HIGH_10BIT",
        High422 = "HIGH_422",
        High42210bit = "HIGH_422_10BIT",
        Main = "MAIN",
    }

    H264DynamicSubGop {
        Adaptive = "ADAPTIVE",
        Static = "STATIC",
    }

    H264EntropyEncoding {
        Cabac = "CABAC",
        Cavlc = "CAVLC",
    }

    H264FieldEncoding {
        Paff = "PAFF",
        ForceField = "FORCE_FIELD",
    }

    H264FlickerAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H264FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    H264FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }

    H264GopBReference {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H264GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }

    H264InterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }

    H264ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    H264QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        SinglePassHq = "SINGLE_PASS_HQ",
        MultiPassHq = "MULTI_PASS_HQ",
    }

    /// Rate control mode for H.264. QVBR keeps quality constant within a bitrate cap.
    H264RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
        Qvbr = "QVBR",
    }

    H264RepeatPps {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H264SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        TransitionDetection = "TRANSITION_DETECTION",
    }

    H264SlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H264SpatialAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H264Syntax {
        Default = "DEFAULT",
        Rp2027 = "RP2027",
    }

    H264Telecine {
        None = "NONE",
        Soft = "SOFT",
        Hard = "HARD",
    }

    H264TemporalAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H264UnregisteredSeiTimecode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265AdaptiveQuantization {
        Off = "OFF",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
        Higher = "HIGHER",
        Max = "MAX",
    }

    H265AlternateTransferFunctionSei {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265CodecLevel {
        Auto = "AUTO",
        Level1 = "LEVEL_1",
        Level2 = "LEVEL_2",
        Level21 = "LEVEL_2_1",
        Level3 = "LEVEL_3",
        Level31 = "LEVEL_3_1",
        Level4 = "LEVEL_4",
        Level41 = "LEVEL_4_1",
        Level5 = "LEVEL_5",
        Level51 = "LEVEL_5_1",
        Level52 = "LEVEL_5_2",
        Level6 = "LEVEL_6",
        Level61 = "LEVEL_6_1",
        Level62 = "LEVEL_6_2",
    }

    /// H.265 profile and tier, joined by an underscore.
    H265CodecProfile {
        MainMain = "MAIN_MAIN",
        MainHigh = "MAIN_HIGH",
        Main10Main = "MAIN10_MAIN",
        Main10High = "MAIN10_HIGH",
        Main4228bitMain = "MAIN_422_8BIT_MAIN",
        Main4228bitHigh = "MAIN_422_8BIT_HIGH",
        Main42210bitMain = "MAIN_422_10BIT_MAIN",
        Main42210bitHigh = "MAIN_422_10BIT_HIGH",
    }

    H265DynamicSubGop {
        Adaptive = "ADAPTIVE",
        Static = "STATIC",
    }

    H265FlickerAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    H265FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }

    H265GopBReference {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }

    H265InterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }

    H265ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    H265QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        SinglePassHq = "SINGLE_PASS_HQ",
        MultiPassHq = "MULTI_PASS_HQ",
    }

    H265RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
        Qvbr = "QVBR",
    }

    H265SampleAdaptiveOffsetFilterMode {
        Default = "DEFAULT",
        Adaptive = "ADAPTIVE",
        Off = "OFF",
    }

    H265SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
        TransitionDetection = "TRANSITION_DETECTION",
    }

    H265SlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265SpatialAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265Telecine {
        None = "NONE",
        Soft = "SOFT",
        Hard = "HARD",
    }

    H265TemporalAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265TemporalIds {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265Tiles {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265UnregisteredSeiTimecode {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    H265WriteMp4PackagingType {
        Hvc1 = "HVC1",
        Hev1 = "HEV1",
    }

    Mpeg2AdaptiveQuantization {
        Off = "OFF",
        Low = "LOW",
        Medium = "MEDIUM",
        High = "HIGH",
    }

    Mpeg2CodecLevel {
        Auto = "AUTO",
        Low = "LOW",
        Main = "MAIN",
        High1440 = "HIGH1440",
        High = "HIGH",
    }

    Mpeg2CodecProfile {
        Main = "MAIN",
        Profile422 = "PROFILE_422",
    }

    Mpeg2DynamicSubGop {
        Adaptive = "ADAPTIVE",
        Static = "STATIC",
    }

    Mpeg2FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    Mpeg2FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }

    Mpeg2GopSizeUnits {
        Frames = "FRAMES",
        Seconds = "SECONDS",
    }

    Mpeg2InterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }

    /// Precision of the intra DC coefficients.
    Mpeg2IntraDcPrecision {
        Auto = "AUTO",
        IntraDcPrecision8 = "INTRA_DC_PRECISION_8",
        IntraDcPrecision9 = "INTRA_DC_PRECISION_9",
        IntraDcPrecision10 = "INTRA_DC_PRECISION_10",
        IntraDcPrecision11 = "INTRA_DC_PRECISION_11",
    }

    Mpeg2ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    Mpeg2QualityTuningLevel {
        SinglePass = "SINGLE_PASS",
        MultiPass = "MULTI_PASS",
    }

    Mpeg2RateControlMode {
        Vbr = "VBR",
        Cbr = "CBR",
    }

    Mpeg2SceneChangeDetect {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    Mpeg2SlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    Mpeg2SpatialAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    Mpeg2Syntax {
        Default = "DEFAULT",
        D10 = "D_10",
    }

    Mpeg2Telecine {
        None = "NONE",
        Soft = "SOFT",
        Hard = "HARD",
    }

    Mpeg2TemporalAdaptiveQuantization {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    /// Apple ProRes flavour.
    ProresCodecProfile {
        AppleProres422 = "APPLE_PRORES_422",
        AppleProres422Hq = "APPLE_PRORES_422_HQ",
        AppleProres422Lt = "APPLE_PRORES_422_LT",
        AppleProres422Proxy = "APPLE_PRORES_422_PROXY",
    }

    ProresFramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    ProresFramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }

    ProresInterlaceMode {
        Progressive = "PROGRESSIVE",
        TopField = "TOP_FIELD",
        BottomField = "BOTTOM_FIELD",
        FollowTopField = "FOLLOW_TOP_FIELD",
        FollowBottomField = "FOLLOW_BOTTOM_FIELD",
    }

    ProresParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    ProresSlowPal {
        Disabled = "DISABLED",
        Enabled = "ENABLED",
    }

    ProresTelecine {
        None = "NONE",
        Hard = "HARD",
    }

    Vp9FramerateControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    Vp9FramerateConversionAlgorithm {
        DuplicateDrop = "DUPLICATE_DROP",
        Interpolate = "INTERPOLATE",
    }

    Vp9ParControl {
        InitializeFromSource = "INITIALIZE_FROM_SOURCE",
        Specified = "SPECIFIED",
    }

    Vp9QualityTuningLevel {
        MultiPass = "MULTI_PASS",
        MultiPassHq = "MULTI_PASS_HQ",
    }

    Vp9RateControlMode {
        Vbr = "VBR",
    }

    /// Colour space conversion applied by the colour corrector.
    ColorSpaceConversion {
        None = "NONE",
        Force601 = "FORCE_601",
        Force709 = "FORCE_709",
        ForceHdr10 = "FORCE_HDR10",
        ForceHlg2020 = "FORCE_HLG_2020",
    }

    DeinterlaceAlgorithm {
        Interpolate = "INTERPOLATE",
        InterpolateTicker = "INTERPOLATE_TICKER",
        Blend = "BLEND",
        BlendTicker = "BLEND_TICKER",
    }

    DeinterlacerControl {
        ForceAllFrames = "FORCE_ALL_FRAMES",
        Normal = "NORMAL",
    }

    /// Deinterlace, inverse telecine, or let the service decide per frame.
    DeinterlacerMode {
        Deinterlace = "DEINTERLACE",
        InverseTelecine = "INVERSE_TELECINE",
        Adaptive = "ADAPTIVE",
    }

    NoiseReducerFilter {
        Bilateral = "BILATERAL",
        Mean = "MEAN",
        Gaussian = "GAUSSIAN",
        Lanczos = "LANCZOS",
        Sharpen = "SHARPEN",
        Conserve = "CONSERVE",
        Spatial = "SPATIAL",
    }

    /// Placement of the burned-in timecode.
    TimecodeBurninPosition {
        TopCenter = "TOP_CENTER",
        TopLeft = "TOP_LEFT",
        TopRight = "TOP_RIGHT",
        MiddleLeft = "MIDDLE_LEFT",
        MiddleCenter = "MIDDLE_CENTER",
        MiddleRight = "MIDDLE_RIGHT",
        BottomLeft = "BOTTOM_LEFT",
        BottomCenter = "BOTTOM_CENTER",
        BottomRight = "BOTTOM_RIGHT",
    }
}
