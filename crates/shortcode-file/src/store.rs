//! Filesystem storage for posts.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use fs2::FileExt;
use tracing::{debug, instrument, warn};

use shortcode_core::error::{Error, StoreError};
use shortcode_core::{ContentStore, PostId, PostQuery, QueryPage, Result};

use crate::post::{FilePost, NewPost};
use crate::query;

/// Page size used when a query does not set `posts_per_page`.
pub const DEFAULT_POSTS_PER_PAGE: i64 = 10;

fn map_io(err: std::io::Error) -> Error {
    Error::Store(StoreError::Io {
        message: format!("IO error: {}", err),
    })
}

fn map_lock(err: std::io::Error) -> Error {
    Error::Store(StoreError::Lock {
        message: err.to_string(),
    })
}

/// Filesystem-backed content store.
///
/// Each post lives in `<root>/posts/<id>.json`.
#[derive(Debug, Clone)]
pub struct FilePostStore {
    root: PathBuf,
    default_page_size: i64,
}

impl FilePostStore {
    /// Create a new store at the given root directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            default_page_size: DEFAULT_POSTS_PER_PAGE,
        }
    }

    /// Override the page size used when a query leaves it unset.
    pub fn with_default_page_size(mut self, page_size: i64) -> Self {
        self.default_page_size = page_size;
        self
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn posts_dir(&self) -> PathBuf {
        self.root.join("posts")
    }

    fn post_path(&self, id: PostId) -> PathBuf {
        self.posts_dir().join(format!("{}.json", id))
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("posts.lock")
    }

    fn read_post(path: &Path) -> Result<FilePost> {
        let content = fs::read_to_string(path).map_err(map_io)?;
        serde_json::from_str(&content).map_err(|e| {
            Error::Store(StoreError::Corrupt {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        })
    }

    /// Create a post, assigning the next free id.
    #[instrument(skip(self, post), fields(title = %post.title))]
    pub fn create_post(&self, post: NewPost) -> Result<FilePost> {
        let posts_dir = self.posts_dir();
        fs::create_dir_all(&posts_dir).map_err(map_io)?;

        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(map_io)?;

        lock_file.lock_exclusive().map_err(map_lock)?;

        let id = self
            .list_posts()?
            .iter()
            .map(|p| p.id)
            .max()
            .unwrap_or(0)
            + 1;

        let stored = FilePost {
            id,
            title: post.title,
            content: post.content,
            post_type: post.post_type,
            post_status: post.post_status,
            date: post.date.unwrap_or_else(Utc::now),
        };

        let content = serde_json::to_string_pretty(&stored).map_err(|e| {
            Error::Store(StoreError::Corrupt {
                path: self.post_path(id).display().to_string(),
                reason: e.to_string(),
            })
        })?;

        let path = self.post_path(id);
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content).map_err(map_io)?;
        fs::rename(&temp_path, &path).map_err(map_io)?;

        lock_file.unlock().map_err(map_lock)?;

        debug!(id, "Created post");

        Ok(stored)
    }

    /// Fetch one post, or `None` if it does not exist.
    pub fn get_post(&self, id: PostId) -> Result<Option<FilePost>> {
        let path = self.post_path(id);

        if !path.exists() {
            return Ok(None);
        }

        Self::read_post(&path).map(Some)
    }

    /// Load every stored post.
    ///
    /// Files that fail to parse are skipped with a warning.
    pub fn list_posts(&self) -> Result<Vec<FilePost>> {
        let dir = self.posts_dir();

        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in fs::read_dir(&dir).map_err(map_io)? {
            let path = entry.map_err(map_io)?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            match Self::read_post(&path) {
                Ok(post) => posts.push(post),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable post"),
            }
        }

        Ok(posts)
    }
}

#[async_trait]
impl ContentStore for FilePostStore {
    #[instrument(skip(self, query), fields(root = %self.root.display()))]
    async fn query(&self, query: &PostQuery) -> Result<QueryPage> {
        let posts = self.list_posts()?;
        let page = query::run(posts, query, self.default_page_size);
        debug!(
            found = page.found_posts,
            returned = page.ids.len(),
            "Ran post query"
        );
        Ok(page)
    }

    async fn title(&self, id: PostId) -> Result<Option<String>> {
        Ok(self.get_post(id)?.map(|post| post.title))
    }
}
