//! albums-core - Pure logic behind the albums listing
//!
//! Album model, CSV/XLSX import parsing, validation, the preview collection,
//! row selection, global filtering and the import phase machine. Nothing in
//! here knows about the UI framework, so the desktop/web shells and the view
//! crate can share it.

pub mod album;
pub mod backend;
pub mod config;
pub mod file_input;
pub mod import;
pub mod phase;
pub mod preview;
pub mod table;

pub use album::{Album, AlbumPage, AlbumsQuery, Record};
pub use backend::{AlbumsBackend, BackendError, LogOnlyBackend};
pub use config::{ConfigError, ListingConfig};
pub use file_input::FileInputHandle;
pub use import::{FileKind, ImportError, SelectedFile};
pub use phase::{ImportEvent, ImportFlow, ImportPhase};
pub use preview::PreviewRows;
pub use table::{BulkDelete, Column, RowSelection, COLUMNS};
