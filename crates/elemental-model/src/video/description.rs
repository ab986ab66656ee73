use super::codecs::VideoCodecSettings;
use super::enums::*;
use super::preprocessors::VideoPreprocessor;

shape! {
    /// Video stream settings of an output.
    pub struct VideoDescription {
        afd_signaling: value(AfdSignaling),
        anti_alias: value(AntiAlias),
        codec_settings: value(VideoCodecSettings),
        color_metadata: value(ColorMetadata),
        /// Region of the input kept before scaling.
        crop: value(Rectangle),
        drop_frame_timecode: value(DropFrameTimecode),
        /// AFD value written when `afd_signaling` is FIXED, 0 to 15.
        fixed_afd: copy(i32),
        /// Output height in pixels.
        height: copy(i32),
        /// Placement of the scaled picture within the output frame.
        position: value(Rectangle),
        respond_to_afd: value(RespondToAfd),
        scaling_behavior: value(ScalingBehavior),
        /// Scaler sharpness, 0 to 100.
        sharpness: copy(i32),
        timecode_insertion: value(VideoTimecodeInsertion),
        video_preprocessors: value(VideoPreprocessor),
        /// Output width in pixels.
        width: copy(i32),
    }
}

shape! {
    /// A pixel rectangle, used for cropping and positioning.
    pub struct Rectangle {
        height: copy(i32),
        width: copy(i32),
        /// Distance from the left edge.
        x: copy(i32),
        /// Distance from the top edge.
        y: copy(i32),
    }
}
