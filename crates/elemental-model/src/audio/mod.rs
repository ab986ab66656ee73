//! Audio descriptions, codec settings and channel remixing.

mod codecs;
mod description;
mod enums;

pub use codecs::*;
pub use description::*;
pub use enums::*;
