pub mod author_summary;
pub mod book;
pub mod cover;
pub mod shelf_entry;
pub mod work;

pub use author_summary::AuthorSummary;
pub use book::Book;
pub use cover::{build_cover_url, CoverRef, CoverSize};
pub use shelf_entry::ShelfEntry;
pub use work::{AuthorRecord, WorkAuthor, WorkDetail};
