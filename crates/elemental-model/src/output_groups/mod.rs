//! Output groups, their outputs, and per-package group settings.

mod destinations;
mod enums;
mod groups;
mod packages;

pub use destinations::*;
pub use enums::*;
pub use groups::*;
pub use packages::*;
