//! Core field and shortcode types.
//!
//! Types that carry external identifiers validate them at construction
//! time, so a loaded catalog never holds a tag the host could not render.

mod field_key;
mod field_type;
mod shortcode;

pub use field_key::FieldKey;
pub use field_type::{DEFAULT_TEMPLATE, DEFAULT_VIEW, FieldType, FieldTypeSpec};
pub use shortcode::{
    AttrDefinition, POST_FIELD_TYPE, ShortcodeCatalog, ShortcodeDefinition, ShortcodeTag,
};
