//! Content store trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::query::{PostId, PostQuery, QueryPage};

/// Read access to the content store backing post pickers.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Run a query and return one page of identifiers.
    ///
    /// Results come back in the store's own order; callers do not re-sort.
    async fn query(&self, query: &PostQuery) -> Result<QueryPage>;

    /// Look up a post's raw title, or `None` if no such post exists.
    async fn title(&self, id: PostId) -> Result<Option<String>>;
}

#[async_trait]
impl<T> ContentStore for Arc<T>
where
    T: ContentStore + ?Sized,
{
    async fn query(&self, query: &PostQuery) -> Result<QueryPage> {
        (**self).query(query).await
    }

    async fn title(&self, id: PostId) -> Result<Option<String>> {
        (**self).title(id).await
    }
}
