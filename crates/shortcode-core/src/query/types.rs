//! Content query value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

/// Identifier of a post in the content store.
pub type PostId = u64;

/// Which part of each matching post a query returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Whole posts.
    #[default]
    All,
    /// Identifiers only.
    Ids,
}

/// A filter value given either as a single string or a list.
///
/// The special value `any` matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ValueFilter {
    One(String),
    Many(Vec<String>),
}

impl ValueFilter {
    /// Returns the listed values.
    pub fn values(&self) -> Vec<&str> {
        match self {
            ValueFilter::One(value) => vec![value.as_str()],
            ValueFilter::Many(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// True when `candidate` passes this filter.
    pub fn matches(&self, candidate: &str) -> bool {
        self.values()
            .into_iter()
            .any(|value| value == "any" || value == candidate)
    }
}

impl From<&str> for ValueFilter {
    fn from(value: &str) -> Self {
        ValueFilter::One(value.to_string())
    }
}

/// A content query as declared on a post field.
///
/// Named fields cover what the gateway itself touches; anything else a
/// particular store understands rides along in `extra`.
///
/// # Example
///
/// ```
/// use shortcode_core::{PostQuery, Projection};
///
/// let query: PostQuery = serde_json::from_str(
///     r#"{"post_type": "page", "posts_per_page": 5, "orderby": "title"}"#,
/// ).unwrap();
///
/// let request = query.clone().ids_only().with_page(2).with_search("news");
/// assert_eq!(request.fields, Some(Projection::Ids));
/// assert_eq!(request.paged, Some(2));
/// assert_eq!(request.extra["orderby"], "title");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostQuery {
    /// Post types to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_type: Option<ValueFilter>,

    /// Post statuses to include.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_status: Option<ValueFilter>,

    /// Page size; `-1` asks for every match. Numeric strings are accepted.
    #[serde(
        default,
        deserialize_with = "number_or_numeric_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub posts_per_page: Option<i64>,

    /// One-based page number. Numeric strings are accepted.
    #[serde(
        default,
        deserialize_with = "number_or_numeric_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub paged: Option<u64>,

    /// Free-text search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s: Option<String>,

    /// Result projection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Projection>,

    /// Store-specific parameters.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

fn number_or_numeric_string<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    match Option::<NumberOrString<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number '{}': {}", text, e))),
    }
}

impl PostQuery {
    /// Restrict results to identifiers.
    pub fn ids_only(mut self) -> Self {
        self.fields = Some(Projection::Ids);
        self
    }

    /// Request a specific page.
    pub fn with_page(mut self, page: u64) -> Self {
        self.paged = Some(page);
        self
    }

    /// Add a search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.s = Some(search.into());
        self
    }

    /// Restrict to the given post type(s).
    pub fn with_post_type(mut self, post_type: impl Into<ValueFilter>) -> Self {
        self.post_type = Some(post_type.into());
        self
    }

    /// Set the page size.
    pub fn with_posts_per_page(mut self, posts_per_page: i64) -> Self {
        self.posts_per_page = Some(posts_per_page);
        self
    }
}

/// One page of query results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPage {
    /// Matching identifiers in store order.
    pub ids: Vec<PostId>,

    /// Total matches across all pages.
    pub found_posts: u64,

    /// Page size the store actually used.
    pub posts_per_page: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_accepts_string_or_list() {
        let one: ValueFilter = serde_json::from_value(json!("page")).unwrap();
        let many: ValueFilter = serde_json::from_value(json!(["post", "page"])).unwrap();

        assert!(one.matches("page"));
        assert!(!one.matches("post"));
        assert!(many.matches("post"));
        assert!(many.matches("page"));
        assert!(!many.matches("attachment"));
    }

    #[test]
    fn any_matches_everything() {
        assert!(ValueFilter::from("any").matches("attachment"));
    }

    #[test]
    fn query_round_trips_unknown_keys() {
        let raw = json!({"post_type": ["post"], "orderby": "title", "order": "ASC"});
        let query: PostQuery = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(query.extra.len(), 2);
        assert_eq!(serde_json::to_value(&query).unwrap(), raw);
    }

    #[test]
    fn page_fields_accept_numeric_strings() {
        let query: PostQuery =
            serde_json::from_value(json!({"posts_per_page": "5", "paged": " 2 "})).unwrap();
        assert_eq!(query.posts_per_page, Some(5));
        assert_eq!(query.paged, Some(2));

        let query: PostQuery =
            serde_json::from_value(json!({"posts_per_page": "-1", "paged": 3})).unwrap();
        assert_eq!(query.posts_per_page, Some(-1));
        assert_eq!(query.paged, Some(3));

        let query: PostQuery = serde_json::from_value(json!({"posts_per_page": null})).unwrap();
        assert_eq!(query.posts_per_page, None);

        assert!(serde_json::from_value::<PostQuery>(json!({"posts_per_page": "five"})).is_err());
    }

    #[test]
    fn projection_uses_lowercase_names() {
        let query = PostQuery::default().ids_only();
        assert_eq!(serde_json::to_value(&query).unwrap(), json!({"fields": "ids"}));
    }
}
