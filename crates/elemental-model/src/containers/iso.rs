//! ISO base media file format family: CMAF, F4V, MP4, fragmented MP4 for
//! DASH, and QuickTime.

use super::enums::*;

shape! {
    /// Settings for CMAF outputs of a CMAF output group.
    pub struct CmfcSettings {
        scte35_esam: value(CmfcScte35Esam),
        scte35_source: value(CmfcScte35Source),
    }
}

shape! {
    pub struct F4vSettings {
        moov_placement: value(F4vMoovPlacement),
    }
}

shape! {
    /// QuickTime settings.
    pub struct MovSettings {
        clap_atom: value(MovClapAtom),
        cslg_atom: value(MovCslgAtom),
        mpeg2_four_cc_control: value(MovMpeg2FourCCControl) as "Mpeg2FourCCControl" / "mpeg2FourCCControl",
        padding_control: value(MovPaddingControl),
        reference: value(MovReference),
    }
}

shape! {
    /// MP4 settings.
    pub struct Mp4Settings {
        cslg_atom: value(Mp4CslgAtom),
        /// Version of the `ctts` box, 0 or 1.
        ctts_version: copy(i32),
        free_space_box: value(Mp4FreeSpaceBox),
        moov_placement: value(Mp4MoovPlacement),
        /// Overrides the major brand written to `ftyp`.
        mp4_major_brand: string(String),
    }
}

shape! {
    /// Settings for fragmented MP4 outputs of a DASH ISO output group.
    pub struct MpdSettings {
        caption_container_type: value(MpdCaptionContainerType),
        scte35_esam: value(MpdScte35Esam),
        scte35_source: value(MpdScte35Source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_cc_label_follows_the_api() {
        let mov = MovSettings::builder()
            .mpeg2_four_cc_control(MovMpeg2FourCCControl::Xdcam)
            .build();
        assert_eq!(mov.to_string(), "{Mpeg2FourCCControl: XDCAM}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn four_cc_key_follows_the_api() {
        let mov: MovSettings =
            serde_json::from_str(r#"{"mpeg2FourCCControl": "MPEG", "reference": "SELF_CONTAINED"}"#)
                .unwrap();
        assert_eq!(mov.mpeg2_four_cc_control(), Some(&MovMpeg2FourCCControl::Mpeg));
        assert_eq!(mov.reference(), Some(&MovReference::SelfContained));
        assert_eq!(
            serde_json::to_string(&mov).unwrap(),
            r#"{"mpeg2FourCCControl":"MPEG","reference":"SELF_CONTAINED"}"#
        );
    }

    #[test]
    fn mp4_brand_is_free_form() {
        let mp4 = Mp4Settings::builder()
            .mp4_major_brand("isom")
            .moov_placement(Mp4MoovPlacement::ProgressiveDownload)
            .build();
        assert_eq!(mp4.mp4_major_brand(), Some("isom"));
        assert_eq!(
            mp4.to_string(),
            "{MoovPlacement: PROGRESSIVE_DOWNLOAD,Mp4MajorBrand: isom}"
        );
    }
}
