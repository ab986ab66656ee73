//! Filters applied to the video before encoding.

use super::enums::*;

shape! {
    /// The preprocessors enabled for one output.
    pub struct VideoPreprocessor {
        color_corrector: value(ColorCorrector),
        deinterlacer: value(Deinterlacer),
        image_inserter: value(ImageInserter),
        noise_reducer: value(NoiseReducer),
        timecode_burnin: value(TimecodeBurnin),
    }
}

shape! {
    /// Brightness, contrast, hue and saturation adjustment, plus colour space
    /// conversion.
    pub struct ColorCorrector {
        brightness: copy(i32),
        color_space_conversion: value(ColorSpaceConversion),
        contrast: copy(i32),
        /// Mastering display metadata written when converting to HDR10.
        hdr10_metadata: value(Hdr10Metadata),
        hue: copy(i32),
        saturation: copy(i32),
    }
}

shape! {
    /// Static HDR10 colour volume metadata (SMPTE ST 2086).
    ///
    /// Chromaticity coordinates are in units of 0.00002, luminance in units
    /// of 0.0001 cd/m2, and light levels in cd/m2.
    pub struct Hdr10Metadata {
        blue_primary_x: copy(i32),
        blue_primary_y: copy(i32),
        green_primary_x: copy(i32),
        green_primary_y: copy(i32),
        /// Maximum content light level (MaxCLL).
        max_content_light_level: copy(i32),
        /// Maximum frame-average light level (MaxFALL).
        max_frame_average_light_level: copy(i32),
        max_luminance: copy(i32),
        min_luminance: copy(i32),
        red_primary_x: copy(i32),
        red_primary_y: copy(i32),
        white_point_x: copy(i32),
        white_point_y: copy(i32),
    }
}

shape! {
    pub struct Deinterlacer {
        algorithm: value(DeinterlaceAlgorithm),
        control: value(DeinterlacerControl),
        mode: value(DeinterlacerMode),
    }
}

shape! {
    /// Noise reduction filter and its settings.
    pub struct NoiseReducer {
        filter: value(NoiseReducerFilter),
        filter_settings: value(NoiseReducerFilterSettings),
        spatial_filter_settings: value(NoiseReducerSpatialFilterSettings),
    }
}

shape! {
    pub struct NoiseReducerFilterSettings {
        /// Filter strength, 0 to 3.
        strength: copy(i32),
    }
}

shape! {
    pub struct NoiseReducerSpatialFilterSettings {
        post_filter_sharpen_strength: copy(i32),
        speed: copy(i32),
        strength: copy(i32),
    }
}

shape! {
    /// Burns the output timecode into the picture.
    pub struct TimecodeBurnin {
        font_size: copy(i32),
        position: value(TimecodeBurninPosition),
        /// Text shown before the timecode.
        prefix: string(String),
    }
}

shape! {
    /// Still-image overlays composited onto the video.
    pub struct ImageInserter {
        /// Overlays in layer order.
        insertable_images: list(InsertableImage),
    }
}

shape! {
    /// One still-image overlay.
    pub struct InsertableImage {
        /// Display time in milliseconds.
        duration: copy(i32),
        fade_in: copy(i32),
        fade_out: copy(i32),
        height: copy(i32),
        /// Location of the image file, an `s3://` or `https://` URI.
        image_inserter_input: string(String),
        image_x: copy(i32),
        image_y: copy(i32),
        /// Stacking order, 0 to 99; higher layers are drawn on top.
        layer: copy(i32),
        /// Opacity in percent.
        opacity: copy(i32),
        /// Timecode at which the overlay appears, `HH:MM:SS:FF` or `HH:MM:SS;FF`.
        start_time: string(String),
        width: copy(i32),
    }
}
