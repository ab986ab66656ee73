//! Jobs, job templates and presets.

mod enums;
mod jobs;
mod settings;
mod templates;

pub use enums::*;
pub use jobs::*;
pub use settings::*;
pub use templates::*;
