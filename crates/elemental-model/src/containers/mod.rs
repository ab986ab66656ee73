//! Container settings of an output.

mod enums;
mod iso;
mod transport;

pub use enums::*;
pub use iso::*;
pub use transport::*;

shape! {
    /// Selects the output container and carries its settings.
    pub struct ContainerSettings {
        cmfc_settings: value(CmfcSettings),
        container: value(ContainerType),
        f4v_settings: value(F4vSettings),
        m2ts_settings: value(M2tsSettings),
        m3u8_settings: value(M3u8Settings),
        mov_settings: value(MovSettings),
        mp4_settings: value(Mp4Settings),
        mpd_settings: value(MpdSettings),
    }
}
