//! Editor-facing registry data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shortcode_core::{FieldType, PostQuery};

use super::post_fields::PostFields;

/// The query template of one post field, as the editor sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFieldData {
    pub query: PostQuery,
}

/// Everything the editor receives at page render.
///
/// Tokens are not included; each field's token is delivered with
/// that field's own markup via [`Registry::field_token`](super::Registry::field_token).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientData {
    /// Resolved field types.
    #[serde(rename = "shortcodeUIFieldData")]
    pub field_data: BTreeMap<String, FieldType>,

    /// Post field query templates, `shortcode -> attr -> {query}`.
    #[serde(rename = "shortcodeUIPostFieldData")]
    pub post_field_data: BTreeMap<String, BTreeMap<String, PostFieldData>>,
}

impl ClientData {
    pub(crate) fn new(field_types: &BTreeMap<String, FieldType>, post_fields: &PostFields) -> Self {
        let mut post_field_data: BTreeMap<String, BTreeMap<String, PostFieldData>> =
            BTreeMap::new();

        for (key, field) in post_fields {
            post_field_data
                .entry(key.shortcode.clone())
                .or_default()
                .insert(
                    key.attr.clone(),
                    PostFieldData {
                        query: field.query.clone(),
                    },
                );
        }

        Self {
            field_data: field_types.clone(),
            post_field_data,
        }
    }
}
