//! The settings block shared by jobs and job templates.

use super::enums::TimecodeSource;
use crate::inputs::{Input, InputTemplate};
use crate::output_groups::OutputGroup;

shape! {
    /// What a job transcodes and how.
    pub struct JobSettings {
        /// Offset in milliseconds applied to ad avails.
        ad_avail_offset: copy(i32),
        avail_blanking: value(AvailBlanking),
        inputs: list(Input),
        nielsen_configuration: value(NielsenConfiguration),
        output_groups: list(OutputGroup),
        timecode_config: value(TimecodeConfig),
        timed_metadata_insertion: value(TimedMetadataInsertion),
    }
}

shape! {
    /// Settings stored in a job template. Inputs carry no file location.
    pub struct JobTemplateSettings {
        ad_avail_offset: copy(i32),
        avail_blanking: value(AvailBlanking),
        inputs: list(InputTemplate),
        nielsen_configuration: value(NielsenConfiguration),
        output_groups: list(OutputGroup),
        timecode_config: value(TimecodeConfig),
        timed_metadata_insertion: value(TimedMetadataInsertion),
    }
}

shape! {
    /// Slate shown during ad avails signalled by SCTE-35.
    pub struct AvailBlanking {
        /// Location of the slate image, `s3://` URI of a BMP or PNG file.
        avail_blanking_image: string(String),
    }
}

shape! {
    pub struct NielsenConfiguration {
        breakout_code: copy(i32),
        distributor_id: string(String),
    }
}

shape! {
    /// How output timecode is derived.
    ///
    /// `source` picks the policy: EMBEDDED reads the input's timecode,
    /// ZEROBASED starts at `00:00:00:00`, SPECIFIEDSTART starts at `start`.
    pub struct TimecodeConfig {
        /// Timecode of the frame that becomes the first frame of the output.
        anchor: string(String),
        source: value(TimecodeSource),
        /// Start timecode for SPECIFIEDSTART, `HH:MM:SS:FF`.
        start: string(String),
        /// Date used for ID3 timestamps and `EXT-X-PROGRAM-DATE-TIME`, `YYYY-MM-DD`.
        timestamp_offset: string(String),
    }
}

shape! {
    /// ID3 tags inserted at given timecodes.
    pub struct TimedMetadataInsertion {
        id3_insertions: list(Id3Insertion),
    }
}

shape! {
    pub struct Id3Insertion {
        /// Base64-encoded ID3 tag.
        id3: string(String),
        timecode: string(String),
    }
}
