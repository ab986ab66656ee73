//! Job inputs, input templates and their selectors.

mod enums;

pub use enums::*;

use crate::audio::{LanguageCode, RemixSettings};
use crate::captions::CaptionSelector;
use crate::video::{Hdr10Metadata, ImageInserter, Rectangle};

shape! {
    /// One input of a job.
    pub struct Input {
        /// Selector groups keyed by group name.
        audio_selector_groups: map(AudioSelectorGroup),
        /// Audio selectors keyed by selector name, e.g. `Audio Selector 1`.
        audio_selectors: map(AudioSelector),
        caption_selectors: map(CaptionSelector),
        crop: value(Rectangle),
        deblock_filter: value(InputDeblockFilter),
        decryption_settings: value(InputDecryptionSettings),
        denoise_filter: value(InputDenoiseFilter),
        /// Location of the input file, an `s3://` or `https://` URI.
        file_input: string(String),
        filter_enable: value(InputFilterEnable),
        /// Deblock and denoise strength, -5 to 5.
        filter_strength: copy(i32),
        image_inserter: value(ImageInserter),
        input_clippings: list(InputClipping),
        position: value(Rectangle),
        program_number: copy(i32),
        psi_control: value(InputPsiControl),
        /// IMF supplemental packages for this input.
        supplemental_imps: list(String),
        timecode_source: value(InputTimecodeSource),
        /// Start timecode used with SPECIFIEDSTART, `HH:MM:SS:FF`.
        timecode_start: string(String),
        video_selector: value(VideoSelector),
    }
}

shape! {
    /// Input settings stored in a job template, without the file location.
    pub struct InputTemplate {
        audio_selector_groups: map(AudioSelectorGroup),
        audio_selectors: map(AudioSelector),
        caption_selectors: map(CaptionSelector),
        crop: value(Rectangle),
        deblock_filter: value(InputDeblockFilter),
        denoise_filter: value(InputDenoiseFilter),
        filter_enable: value(InputFilterEnable),
        filter_strength: copy(i32),
        image_inserter: value(ImageInserter),
        input_clippings: list(InputClipping),
        position: value(Rectangle),
        program_number: copy(i32),
        psi_control: value(InputPsiControl),
        timecode_source: value(InputTimecodeSource),
        timecode_start: string(String),
        video_selector: value(VideoSelector),
    }
}

shape! {
    /// A section of the input to transcode, bounded by timecodes.
    pub struct InputClipping {
        /// Last frame included, `HH:MM:SS:FF`.
        end_timecode: string(String),
        /// First frame included, `HH:MM:SS:FF`.
        start_timecode: string(String),
    }
}

shape! {
    /// Decryption of an encrypted input file.
    pub struct InputDecryptionSettings {
        decryption_mode: value(DecryptionMode),
        /// Data key wrapped with KMS, base64 encoded.
        encrypted_decryption_key: string(String),
        initialization_vector: string(String),
        kms_key_region: string(String),
    }
}

shape! {
    /// Selects the audio of an input by PID, track or language.
    pub struct AudioSelector {
        custom_language_code: string(String),
        default_selection: value(AudioDefaultSelection),
        /// Sidecar audio file used instead of the input's own audio.
        external_audio_file_input: string(String),
        language_code: value(LanguageCode),
        /// Audio offset in milliseconds.
        offset: copy(i32),
        pids: list(i32),
        program_selection: copy(i32),
        remix_settings: value(RemixSettings),
        selector_type: value(AudioSelectorType),
        /// One-based track indices, in the order they are selected.
        tracks: list(i32),
    }
}

shape! {
    pub struct AudioSelectorGroup {
        audio_selector_names: list(String),
    }
}

shape! {
    /// Colour handling and rotation of the input video.
    pub struct VideoSelector {
        color_space: value(ColorSpace),
        color_space_usage: value(ColorSpaceUsage),
        hdr10_metadata: value(Hdr10Metadata),
        pid: copy(i32),
        program_number: copy(i32),
        rotate: value(InputRotate),
    }
}
