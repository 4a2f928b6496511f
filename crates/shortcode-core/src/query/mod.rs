//! Content query types.
//!
//! This module defines the query a post field carries and the page a
//! [`ContentStore`](crate::ContentStore) answers with.

mod types;

pub use types::{PostId, PostQuery, Projection, QueryPage, ValueFilter};
