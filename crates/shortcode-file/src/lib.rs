//! shortcode-file - Filesystem-backed content store.

mod post;
mod query;
mod store;

pub use post::{FilePost, NewPost};
pub use store::{DEFAULT_POSTS_PER_PAGE, FilePostStore};
