//! Field type table.

use std::collections::BTreeMap;

use tracing::debug;

use shortcode_core::error::{Error, InvalidInputError};
use shortcode_core::{FieldType, FieldTypeSpec};

/// Built-in field types and the template/view each overrides.
const BUILTIN: &[(&str, Option<&str>, Option<&str>)] = &[
    ("text", None, None),
    ("textarea", Some("shortcode-ui-field-textarea"), None),
    ("url", Some("shortcode-ui-field-url"), None),
    ("select", Some("shortcode-ui-field-select"), None),
    ("checkbox", Some("shortcode-ui-field-checkbox"), None),
    ("radio", Some("shortcode-ui-field-radio"), None),
    ("email", Some("shortcode-ui-field-email"), None),
    ("number", Some("shortcode-ui-field-number"), None),
    ("date", Some("shortcode-ui-field-date"), None),
    (
        "post",
        Some("shortcode-ui-field-post"),
        Some("editAttributeFieldPost"),
    ),
];

/// Partial field type definitions keyed by type id.
///
/// Overrides are merged into the table as partials; defaults are only
/// applied by [`resolve`](Self::resolve), so merging the same overrides
/// again never changes the outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTypeTable {
    specs: BTreeMap<String, FieldTypeSpec>,
}

impl FieldTypeTable {
    /// The built-in catalog.
    pub fn builtin() -> Self {
        let specs = BUILTIN
            .iter()
            .map(|(id, template, view)| {
                let spec = FieldTypeSpec {
                    template: template.map(str::to_string),
                    view: view.map(str::to_string),
                    ..FieldTypeSpec::default()
                };
                (id.to_string(), spec)
            })
            .collect();

        Self { specs }
    }

    /// Merge one definition into the table.
    ///
    /// A new id is added as given; an existing id only has the sub-fields
    /// `spec` sets replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if `type_id` is empty or contains whitespace.
    pub fn register(&mut self, type_id: impl Into<String>, spec: &FieldTypeSpec) -> Result<(), Error> {
        let type_id = type_id.into();
        validate_type_id(&type_id)?;

        debug!(type_id = %type_id, "Registering field type");
        self.specs.entry(type_id).or_default().overlay(spec);
        Ok(())
    }

    /// Merge every entry of `overrides` into the table.
    pub fn extend<'a, I>(&mut self, overrides: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (&'a String, &'a FieldTypeSpec)>,
    {
        for (type_id, spec) in overrides {
            self.register(type_id.clone(), spec)?;
        }
        Ok(())
    }

    /// The partial definition for `type_id`, if registered.
    pub fn get(&self, type_id: &str) -> Option<&FieldTypeSpec> {
        self.specs.get(type_id)
    }

    /// Fill every entry's unset fields from the global defaults.
    pub fn resolve(&self) -> BTreeMap<String, FieldType> {
        self.specs
            .iter()
            .map(|(id, spec)| (id.clone(), spec.resolve()))
            .collect()
    }
}

impl Default for FieldTypeTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_type_id(type_id: &str) -> Result<(), Error> {
    if type_id.is_empty() {
        return Err(InvalidInputError::FieldType {
            value: type_id.to_string(),
            reason: "cannot be empty".to_string(),
        }
        .into());
    }

    if type_id.chars().any(char::is_whitespace) {
        return Err(InvalidInputError::FieldType {
            value: type_id.to_string(),
            reason: "cannot contain whitespace".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Resolved built-in field types.
pub fn builtin_field_types() -> BTreeMap<String, FieldType> {
    FieldTypeTable::builtin().resolve()
}

/// Resolve the built-ins extended with `overrides`.
pub fn extend_field_types(
    overrides: &BTreeMap<String, FieldTypeSpec>,
) -> Result<BTreeMap<String, FieldType>, Error> {
    let mut table = FieldTypeTable::builtin();
    table.extend(overrides)?;
    Ok(table.resolve())
}
