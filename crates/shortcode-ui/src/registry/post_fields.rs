//! Post field registrations.

use std::collections::BTreeMap;

use tracing::debug;

use shortcode_core::{AccessToken, FieldKey, PostQuery, ShortcodeCatalog, TokenAuthority};

/// A post picker attribute and the query behind it.
#[derive(Debug, Clone, PartialEq)]
pub struct PostField {
    /// Query declared on the attribute, unmodified.
    pub query: PostQuery,
    /// Token issued for this field.
    pub token: AccessToken,
}

/// Registrations keyed by (shortcode, attribute).
pub type PostFields = BTreeMap<FieldKey, PostField>;

/// Find every post-typed attribute in `catalog` and issue it a token.
///
/// Shortcodes without post attributes contribute nothing; an empty catalog
/// yields an empty map.
pub fn collect_post_fields<A>(catalog: &ShortcodeCatalog, authority: &A) -> PostFields
where
    A: TokenAuthority + ?Sized,
{
    let mut fields = PostFields::new();

    for (tag, definition) in catalog {
        for attr in definition.post_attrs() {
            let key = FieldKey::new(tag.as_str(), attr.attr.as_str());
            let token = authority.derive(&key);
            let query = attr.query.clone().unwrap_or_default();

            debug!(field = %key, "Registered post field");
            fields.insert(key, PostField { query, token });
        }
    }

    fields
}
