//! Display types for UI components

pub use albums_core::Album;

/// One rendered row of the albums table
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    /// Position in the main collection, used as the selection key
    pub index: usize,
    pub album: Album,
    pub selected: bool,
}
