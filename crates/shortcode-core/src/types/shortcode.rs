//! Shortcode catalog types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, InvalidInputError};
use crate::query::PostQuery;

/// Attribute type that marks an asynchronous post picker.
pub const POST_FIELD_TYPE: &str = "post";

/// Characters the host's shortcode parser refuses in a tag.
const FORBIDDEN_TAG_CHARS: &[char] = &['[', ']', '<', '>', '&', '/', '"', '\''];

/// Registered shortcodes, keyed by tag.
pub type ShortcodeCatalog = BTreeMap<ShortcodeTag, ShortcodeDefinition>;

/// A validated shortcode tag.
///
/// # Example
///
/// ```
/// use shortcode_core::ShortcodeTag;
///
/// let tag = ShortcodeTag::new("gallery").unwrap();
/// assert_eq!(tag.as_str(), "gallery");
/// assert!(ShortcodeTag::new("bad tag").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ShortcodeTag(String);

impl ShortcodeTag {
    /// Create a new tag from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the tag is empty or contains whitespace or a
    /// character the shortcode parser treats as syntax.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the tag string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ShortcodeTag {
                value: s.to_string(),
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        for c in s.chars() {
            if c.is_whitespace() || c.is_control() || FORBIDDEN_TAG_CHARS.contains(&c) {
                return Err(InvalidInputError::ShortcodeTag {
                    value: s.to_string(),
                    reason: format!("contains invalid character '{}'", c.escape_debug()),
                }
                .into());
            }
        }

        Ok(())
    }
}

impl fmt::Display for ShortcodeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ShortcodeTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ShortcodeTag {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ShortcodeTag> for String {
    fn from(tag: ShortcodeTag) -> Self {
        tag.0
    }
}

impl AsRef<str> for ShortcodeTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A registered shortcode and its declared attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortcodeDefinition {
    /// Human readable name shown in the editor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Declared attributes, in display order.
    #[serde(default)]
    pub attrs: Vec<AttrDefinition>,

    /// Anything else the registration carried.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ShortcodeDefinition {
    /// Attributes that use the post picker.
    pub fn post_attrs(&self) -> impl Iterator<Item = &AttrDefinition> {
        self.attrs.iter().filter(|attr| attr.is_post_field())
    }
}

/// One declared shortcode attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrDefinition {
    /// Attribute name as written in the shortcode.
    pub attr: String,

    /// Field type identifier; `text` when omitted.
    #[serde(rename = "type", default = "default_attr_type")]
    pub field_type: String,

    /// Label shown next to the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Content query backing a post picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<PostQuery>,

    /// Anything else the attribute declared.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_attr_type() -> String {
    "text".to_string()
}

impl AttrDefinition {
    /// Create an attribute of the given type with no query.
    pub fn new(attr: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            attr: attr.into(),
            field_type: field_type.into(),
            label: None,
            query: None,
            extra: Map::new(),
        }
    }

    /// Attach a post query, returning the updated attribute.
    pub fn with_query(mut self, query: PostQuery) -> Self {
        self.query = Some(query);
        self
    }

    /// True when this attribute is a post picker.
    pub fn is_post_field(&self) -> bool {
        self.field_type == POST_FIELD_TYPE
    }
}
