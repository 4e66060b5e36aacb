//! Shared UI components

pub mod album_detail;
pub mod albums_table;
pub mod back_button;
pub mod button;
pub mod checkbox;
pub mod import_bar;
pub mod listing;
pub mod preview_editor;
pub mod text_input;
pub mod text_link;

pub use album_detail::AlbumDetailView;
pub use albums_table::AlbumsTableView;
pub use back_button::BackButton;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use checkbox::Checkbox;
pub use import_bar::ImportBarView;
pub use listing::AlbumsListingView;
pub use preview_editor::PreviewEditorView;
pub use text_input::{TextInput, TextInputSize};
pub use text_link::TextLink;
