//! Caption selectors on inputs and caption descriptions on outputs.

mod destinations;
mod enums;
mod sources;

pub use destinations::*;
pub use enums::*;
pub use sources::*;
