//! Enumerations used by audio shapes.

open_enums! {
    /// Audio codec of an output audio description.
    AudioCodec {
        Aac = "AAC",
        Mp2 = "MP2",
        Mp3 = "MP3",
        Wav = "WAV",
        Aiff = "AIFF",
        Ac3 = "AC3",
        Eac3 = "EAC3",
        Eac3Atmos = "EAC3_ATMOS",
        Vorbis = "VORBIS",
        Opus = "OPUS",
        Passthrough = "PASSTHROUGH",
    }

    /// Signals a receiver-mixed or broadcaster-mixed audio description stream.
    AacAudioDescriptionBroadcasterMix {
        BroadcasterMixedAd = "BROADCASTER_MIXED_AD",
        Normal = "NORMAL",
    }

    /// AAC profile.
    AacCodecProfile {
        Lc = "LC",
        Hev1 = "HEV1",
        Hev2 = "HEV2",
    }

    /// Channel layout of an AAC output.
    AacCodingMode {
        AdReceiverMix = "AD_RECEIVER_MIX",
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode11 = "CODING_MODE_1_1",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode51 = "CODING_MODE_5_1",
    }

    AacRateControlMode {
        Cbr = "CBR",
        Vbr = "VBR",
    }

    /// Whether AAC frames are wrapped in LATM/LOAS.
    AacRawFormat {
        LatmLoas = "LATM_LOAS",
        None = "NONE",
    }

    /// MPEG-2 or MPEG-4 AAC signalling.
    AacSpecification {
        Mpeg2 = "MPEG2",
        Mpeg4 = "MPEG4",
    }

    /// Quality level for AAC in VBR mode.
    AacVbrQuality {
        Low = "LOW",
        MediumLow = "MEDIUM_LOW",
        MediumHigh = "MEDIUM_HIGH",
        High = "HIGH",
    }

    Ac3BitstreamMode {
        CompleteMain = "COMPLETE_MAIN",
        Commentary = "COMMENTARY",
        Dialogue = "DIALOGUE",
        Emergency = "EMERGENCY",
        HearingImpaired = "HEARING_IMPAIRED",
        MusicAndEffects = "MUSIC_AND_EFFECTS",
        VisuallyImpaired = "VISUALLY_IMPAIRED",
        VoiceOver = "VOICE_OVER",
    }

    Ac3CodingMode {
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode11 = "CODING_MODE_1_1",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode32Lfe = "CODING_MODE_3_2_LFE",
    }

    Ac3DynamicRangeCompressionProfile {
        FilmStandard = "FILM_STANDARD",
        None = "NONE",
    }

    Ac3LfeFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    Ac3MetadataControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }

    /// Attenuates the surround channels by 3 dB before encoding.
    Eac3AttenuationControl {
        Attenuate3Db = "ATTENUATE_3_DB",
        None = "NONE",
    }

    Eac3BitstreamMode {
        CompleteMain = "COMPLETE_MAIN",
        Commentary = "COMMENTARY",
        Emergency = "EMERGENCY",
        HearingImpaired = "HEARING_IMPAIRED",
        VisuallyImpaired = "VISUALLY_IMPAIRED",
    }

    Eac3CodingMode {
        CodingMode10 = "CODING_MODE_1_0",
        CodingMode20 = "CODING_MODE_2_0",
        CodingMode32 = "CODING_MODE_3_2",
    }

    Eac3DcFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    Eac3DynamicRangeCompressionLine {
        None = "NONE",
        FilmStandard = "FILM_STANDARD",
        FilmLight = "FILM_LIGHT",
        MusicStandard = "MUSIC_STANDARD",
        MusicLight = "MUSIC_LIGHT",
        Speech = "SPEECH",
    }

    Eac3DynamicRangeCompressionRf {
        None = "NONE",
        FilmStandard = "FILM_STANDARD",
        FilmLight = "FILM_LIGHT",
        MusicStandard = "MUSIC_STANDARD",
        MusicLight = "MUSIC_LIGHT",
        Speech = "SPEECH",
    }

    Eac3LfeControl {
        Lfe = "LFE",
        NoLfe = "NO_LFE",
    }

    Eac3LfeFilter {
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    Eac3MetadataControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }

    Eac3PassthroughControl {
        WhenPossible = "WHEN_POSSIBLE",
        NoPassthrough = "NO_PASSTHROUGH",
    }

    Eac3PhaseControl {
        Shift90Degrees = "SHIFT_90_DEGREES",
        NoShift = "NO_SHIFT",
    }

    /// Preferred stereo downmix signalled in the E-AC-3 metadata.
    Eac3StereoDownmix {
        NotIndicated = "NOT_INDICATED",
        LoRo = "LO_RO",
        LtRt = "LT_RT",
        Dpl2 = "DPL2",
    }

    Eac3SurroundExMode {
        NotIndicated = "NOT_INDICATED",
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    Eac3SurroundMode {
        NotIndicated = "NOT_INDICATED",
        Enabled = "ENABLED",
        Disabled = "DISABLED",
    }

    Mp3RateControlMode {
        Cbr = "CBR",
        Vbr = "VBR",
    }

    /// RIFF or RF64 container for WAV outputs.
    WavFormat {
        Riff = "RIFF",
        Rf64 = "RF64",
    }

    /// ITU-R BS.1770 revision used to measure loudness.
    AudioNormalizationAlgorithm {
        ItuBs17701 = "ITU_BS_1770_1",
        ItuBs17702 = "ITU_BS_1770_2",
        ItuBs17703 = "ITU_BS_1770_3",
        ItuBs17704 = "ITU_BS_1770_4",
    }

    AudioNormalizationAlgorithmControl {
        CorrectAudio = "CORRECT_AUDIO",
        MeasureOnly = "MEASURE_ONLY",
    }

    AudioNormalizationLoudnessLogging {
        Log = "LOG",
        DontLog = "DONT_LOG",
    }

    AudioNormalizationPeakCalculation {
        TruePeak = "TRUE_PEAK",
        None = "NONE",
    }

    /// Whether the audio type follows the input or the configured value.
    AudioTypeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }

    AudioLanguageCodeControl {
        FollowInput = "FOLLOW_INPUT",
        UseConfigured = "USE_CONFIGURED",
    }

    /// ISO 639-2 language code, upper case.
    LanguageCode {
        Eng = "ENG",
        Spa = "SPA",
        Fra = "FRA",
        Deu = "DEU",
        Ger = "GER",
        Zho = "ZHO",
        Ara = "ARA",
        Hin = "HIN",
        Jpn = "JPN",
        Rus = "RUS",
        Por = "POR",
        Ita = "ITA",
        Urd = "URD",
        Vie = "VIE",
        Kor = "KOR",
        Pan = "PAN",
        Abk = "ABK",
        Aar = "AAR",
        Afr = "AFR",
        Aka = "AKA",
        Sqi = "SQI",
        Amh = "AMH",
        Arg = "ARG",
        Hye = "HYE",
        Asm = "ASM",
        Ava = "AVA",
        Ave = "AVE",
        Aym = "AYM",
        Aze = "AZE",
        Bam = "BAM",
        Bak = "BAK",
        Eus = "EUS",
        Bel = "BEL",
        Ben = "BEN",
        Bih = "BIH",
        Bis = "BIS",
        Bos = "BOS",
        Bre = "BRE",
        Bul = "BUL",
        Mya = "MYA",
        Cat = "CAT",
        Khm = "KHM",
        Cha = "CHA",
        Che = "CHE",
        Nya = "NYA",
        Chu = "CHU",
        Chv = "CHV",
        Cor = "COR",
        Cos = "COS",
        Cre = "CRE",
        Hrv = "HRV",
        Ces = "CES",
        Dan = "DAN",
        Div = "DIV",
        Nld = "NLD",
        Dzo = "DZO",
        Enm = "ENM",
        Epo = "EPO",
        Est = "EST",
        Ewe = "EWE",
        Fao = "FAO",
        Fij = "FIJ",
        Fin = "FIN",
        Frm = "FRM",
        Ful = "FUL",
        Gla = "GLA",
        Glg = "GLG",
        Lug = "LUG",
        Kat = "KAT",
        Ell = "ELL",
        Grn = "GRN",
        Guj = "GUJ",
        Hat = "HAT",
        Hau = "HAU",
        Heb = "HEB",
        Her = "HER",
        Hmo = "HMO",
        Hun = "HUN",
        Isl = "ISL",
        Ido = "IDO",
        Ibo = "IBO",
        Ind = "IND",
        Ina = "INA",
        Ile = "ILE",
        Iku = "IKU",
        Ipk = "IPK",
        Gle = "GLE",
        Jav = "JAV",
        Kal = "KAL",
        Kan = "KAN",
        Kau = "KAU",
        Kas = "KAS",
        Kaz = "KAZ",
        Kik = "KIK",
        Kin = "KIN",
        Kir = "KIR",
        Kom = "KOM",
        Kon = "KON",
        Kua = "KUA",
        Kur = "KUR",
        Lao = "LAO",
        Lat = "LAT",
        Lav = "LAV",
        Lim = "LIM",
        Lin = "LIN",
        Lit = "LIT",
        Lub = "LUB",
        Ltz = "LTZ",
        Mkd = "MKD",
        Mlg = "MLG",
        Msa = "MSA",
        Mal = "MAL",
        Mlt = "MLT",
        Glv = "GLV",
        Mri = "MRI",
        Mar = "MAR",
        Mah = "MAH",
        Mon = "MON",
        Nau = "NAU",
        Nav = "NAV",
        Nde = "NDE",
        Nbl = "NBL",
        Ndo = "NDO",
        Nep = "NEP",
        Sme = "SME",
        Nor = "NOR",
        Nob = "NOB",
        Nno = "NNO",
        Oci = "OCI",
        Oji = "OJI",
        Ori = "ORI",
        Orm = "ORM",
        Oss = "OSS",
        Pli = "PLI",
        Fas = "FAS",
        Pol = "POL",
        Pus = "PUS",
        Que = "QUE",
        Qaa = "QAA",
        Ron = "RON",
        Roh = "ROH",
        Run = "RUN",
        Smo = "SMO",
        Sag = "SAG",
        San = "SAN",
        Srd = "SRD",
        Srb = "SRB",
        Sna = "SNA",
        Iii = "III",
        Snd = "SND",
        Sin = "SIN",
        Slk = "SLK",
        Slv = "SLV",
        Som = "SOM",
        Sot = "SOT",
        Sun = "SUN",
        Swa = "SWA",
        Ssw = "SSW",
        Swe = "SWE",
        Tgl = "TGL",
        Tah = "TAH",
        Tgk = "TGK",
        Tam = "TAM",
        Tat = "TAT",
        Tel = "TEL",
        Tha = "THA",
        Bod = "BOD",
        Tir = "TIR",
        Ton = "TON",
        Tso = "TSO",
        Tsn = "TSN",
        Tur = "TUR",
        Tuk = "TUK",
        Twi = "TWI",
        Uig = "UIG",
        Ukr = "UKR",
        Uzb = "UZB",
        Ven = "VEN",
        Vol = "VOL",
        Wln = "WLN",
        Cym = "CYM",
        Fry = "FRY",
        Wol = "WOL",
        Xho = "XHO",
        Yid = "YID",
        Yor = "YOR",
        Zha = "ZHA",
        Zul = "ZUL",
        Orj = "ORJ",
        Qpc = "QPC",
        Tng = "TNG",
    }
}
