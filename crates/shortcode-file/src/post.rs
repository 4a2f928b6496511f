//! Stored post types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shortcode_core::PostId;

/// A post as persisted on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilePost {
    /// Post identifier; matches the file name.
    pub id: PostId,
    /// Raw title, possibly containing HTML entities.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Post type, e.g. `post` or `page`.
    #[serde(default = "default_post_type")]
    pub post_type: String,
    /// Publication status, e.g. `publish` or `draft`.
    #[serde(default = "default_post_status")]
    pub post_status: String,
    /// Publication date.
    pub date: DateTime<Utc>,
}

/// Input for creating a post; the store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub post_type: String,
    pub post_status: String,
    /// Defaults to now when unset.
    pub date: Option<DateTime<Utc>>,
}

impl NewPost {
    /// A published `post` with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: String::new(),
            post_type: default_post_type(),
            post_status: default_post_status(),
            date: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }

    pub fn post_status(mut self, post_status: impl Into<String>) -> Self {
        self.post_status = post_status.into();
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }
}

fn default_post_type() -> String {
    "post".to_string()
}

fn default_post_status() -> String {
    "publish".to_string()
}
