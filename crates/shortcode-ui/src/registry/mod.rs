//! Field registry.
//!
//! The registry is assembled once at startup: built-in field types, then
//! any external overrides, then a scan of the shortcode catalog for post
//! picker attributes. After [`RegistryBuilder::build`] it is read-only and
//! can be shared freely between request handlers.
//!
//! # Example
//!
//! ```
//! use shortcode_core::{FieldKey, FieldTypeSpec, ShortcodeCatalog};
//! use shortcode_ui::{HmacTokenAuthority, Registry};
//!
//! # fn example() -> Result<(), shortcode_core::Error> {
//! let catalog: ShortcodeCatalog = serde_json::from_str(
//!     r#"{"gallery": {"attrs": [{"attr": "ids", "type": "post"}]}}"#,
//! ).unwrap();
//! let authority = HmacTokenAuthority::new("secret")?;
//!
//! let registry = Registry::builder()
//!     .register("select", FieldTypeSpec::default().view("customSelectView"))?
//!     .build(&catalog, &authority);
//!
//! assert_eq!(registry.field_type("select").unwrap().view, "customSelectView");
//! assert!(registry.field_token(&FieldKey::new("gallery", "ids")).is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

mod client;
mod fields;
mod post_fields;

use std::collections::BTreeMap;

use tracing::info;

use shortcode_core::{
    AccessToken, Error, FieldKey, FieldType, FieldTypeSpec, ShortcodeCatalog, TokenAuthority,
};

pub use client::{ClientData, PostFieldData};
pub use fields::{FieldTypeTable, builtin_field_types, extend_field_types};
pub use post_fields::{PostField, PostFields, collect_post_fields};

/// Resolved field types plus post field registrations.
#[derive(Debug, Clone)]
pub struct Registry {
    field_types: BTreeMap<String, FieldType>,
    post_fields: PostFields,
}

impl Registry {
    /// Start from the built-in field types.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// All resolved field types.
    pub fn field_types(&self) -> &BTreeMap<String, FieldType> {
        &self.field_types
    }

    /// One resolved field type.
    pub fn field_type(&self, type_id: &str) -> Option<&FieldType> {
        self.field_types.get(type_id)
    }

    /// All post field registrations.
    pub fn post_fields(&self) -> &PostFields {
        &self.post_fields
    }

    /// The registration for one field.
    pub fn post_field(&self, key: &FieldKey) -> Option<&PostField> {
        self.post_fields.get(key)
    }

    /// The token to render alongside one field's markup.
    pub fn field_token(&self, key: &FieldKey) -> Option<&AccessToken> {
        self.post_fields.get(key).map(|field| &field.token)
    }

    /// Data handed to the editor at page render, without tokens.
    pub fn client_data(&self) -> ClientData {
        ClientData::new(&self.field_types, &self.post_fields)
    }
}

/// Collects field type definitions before the registry is frozen.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    table: FieldTypeTable,
}

impl RegistryBuilder {
    /// A builder seeded with the built-in field types.
    pub fn new() -> Self {
        Self {
            table: FieldTypeTable::builtin(),
        }
    }

    /// Add or override one field type.
    pub fn register(mut self, type_id: impl Into<String>, spec: FieldTypeSpec) -> Result<Self, Error> {
        self.table.register(type_id, &spec)?;
        Ok(self)
    }

    /// Add or override many field types.
    pub fn extend(mut self, overrides: &BTreeMap<String, FieldTypeSpec>) -> Result<Self, Error> {
        self.table.extend(overrides)?;
        Ok(self)
    }

    /// Resolve field types and register every post field in `catalog`.
    pub fn build<A>(self, catalog: &ShortcodeCatalog, authority: &A) -> Registry
    where
        A: TokenAuthority + ?Sized,
    {
        let field_types = self.table.resolve();
        let post_fields = collect_post_fields(catalog, authority);

        info!(
            field_types = field_types.len(),
            shortcodes = catalog.len(),
            post_fields = post_fields.len(),
            "Field registry built"
        );

        Registry {
            field_types,
            post_fields,
        }
    }
}
