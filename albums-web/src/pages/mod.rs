mod album_detail;
mod albums;
mod layout;

pub use album_detail::AlbumDetail;
pub use albums::Albums;
pub use layout::AppLayout;
