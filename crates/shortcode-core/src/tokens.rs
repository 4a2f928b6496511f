//! Field access token type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An access token scoping requests to one (shortcode, attribute) pair.
///
/// Tokens are delivered once, alongside the field's rendered markup, and
/// echoed back by the browser on every post field request.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; verification goes through a [`TokenAuthority`](crate::TokenAuthority)
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Create a new access token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value.
    ///
    /// # Security
    ///
    /// Use only when rendering the token into the owning field's markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessToken").field(&"[REDACTED]").finish()
    }
}
