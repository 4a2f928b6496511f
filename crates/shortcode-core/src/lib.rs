//! shortcode-core - Core types and traits for shortcode attribute fields.

pub mod error;
pub mod query;
pub mod tokens;
pub mod traits;
pub mod types;

pub use error::Error;
pub use query::{PostId, PostQuery, Projection, QueryPage, ValueFilter};
pub use tokens::AccessToken;
pub use traits::{ContentStore, TokenAuthority};
pub use types::{
    AttrDefinition, FieldKey, FieldType, FieldTypeSpec, ShortcodeCatalog, ShortcodeDefinition,
    ShortcodeTag,
};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
