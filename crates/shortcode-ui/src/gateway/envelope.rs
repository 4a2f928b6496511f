//! Response envelopes.

use serde::{Deserialize, Serialize};

use shortcode_core::PostId;
use shortcode_core::error::RequestError;

/// One selectable post, as the picker widget expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOption {
    pub id: PostId,
    pub text: String,
}

/// Search results with pagination metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub posts: Vec<PostOption>,
    pub found_posts: u64,
    pub posts_per_page: i64,
}

/// Hydrated values, in the order they were requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrateResult {
    pub posts: Vec<PostOption>,
}

/// Transport envelope: a success flag and the payload.
///
/// Failures still carry a payload (the empty result) so the widget can
/// render without special-casing errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AjaxResponse<T> {
    pub success: bool,
    pub data: T,

    /// Why the request was refused; kept server-side.
    #[serde(skip)]
    pub rejection: Option<RequestError>,
}

impl<T> AjaxResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
            rejection: None,
        }
    }

    pub fn failure(rejection: RequestError, data: T) -> Self {
        Self {
            success: false,
            data,
            rejection: Some(rejection),
        }
    }
}
