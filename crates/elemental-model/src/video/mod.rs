//! Video descriptions, codec settings and preprocessors.

mod codecs;
mod description;
mod enums;
mod preprocessors;

pub use codecs::*;
pub use description::*;
pub use enums::*;
pub use preprocessors::*;
