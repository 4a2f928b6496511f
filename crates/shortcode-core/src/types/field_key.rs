//! Field key type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies one attribute of one shortcode.
///
/// Request-side keys are built from whatever the browser claims, so this
/// type does no validation; an unknown or malformed pair simply never
/// matches a registration or a token.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldKey {
    /// Shortcode tag.
    pub shortcode: String,
    /// Attribute name within the shortcode.
    pub attr: String,
}

impl FieldKey {
    /// Create a new field key.
    pub fn new(shortcode: impl Into<String>, attr: impl Into<String>) -> Self {
        Self {
            shortcode: shortcode.into(),
            attr: attr.into(),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.shortcode, self.attr)
    }
}
