//! Field type definitions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Template used by any field type that does not name its own.
pub const DEFAULT_TEMPLATE: &str = "shortcode-ui-field-text";

/// Client-side controller used by any field type that does not name its own.
pub const DEFAULT_VIEW: &str = "editAttributeField";

/// A partial field type definition.
///
/// Both the built-in table and external overrides are expressed as
/// partials; unset `template`/`view` are only filled in when the definition
/// is resolved into a [`FieldType`].
///
/// # Example
///
/// ```
/// use shortcode_core::FieldTypeSpec;
///
/// let mut select = FieldTypeSpec::with_template("shortcode-ui-field-select");
/// select.overlay(&FieldTypeSpec::default().view("customSelectView"));
///
/// let resolved = select.resolve();
/// assert_eq!(resolved.template, "shortcode-ui-field-select");
/// assert_eq!(resolved.view, "customSelectView");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldTypeSpec {
    /// Rendering template identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Client-side controller identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,

    /// Any other options, passed through to the client untouched.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl FieldTypeSpec {
    /// A partial that only sets the template.
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Self::default()
        }
    }

    /// Set the view, returning the updated partial.
    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    /// Set one extra option, returning the updated partial.
    pub fn option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Apply `other` on top of `self`.
    ///
    /// Set fields in `other` win; unset fields leave `self` alone. Extra
    /// options merge key by key.
    pub fn overlay(&mut self, other: &FieldTypeSpec) {
        if let Some(template) = &other.template {
            self.template = Some(template.clone());
        }
        if let Some(view) = &other.view {
            self.view = Some(view.clone());
        }
        for (key, value) in &other.options {
            self.options.insert(key.clone(), value.clone());
        }
    }

    /// Fill unset fields from the global defaults.
    pub fn resolve(&self) -> FieldType {
        FieldType {
            template: self
                .template
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
            view: self.view.clone().unwrap_or_else(|| DEFAULT_VIEW.to_string()),
            options: self.options.clone(),
        }
    }
}

/// A fully resolved field type, as handed to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldType {
    /// Rendering template identifier.
    pub template: String,
    /// Client-side controller identifier.
    pub view: String,
    /// Extra options.
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

impl Default for FieldType {
    fn default() -> Self {
        FieldTypeSpec::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_fills_defaults() {
        let resolved = FieldTypeSpec::default().resolve();
        assert_eq!(resolved.template, DEFAULT_TEMPLATE);
        assert_eq!(resolved.view, DEFAULT_VIEW);
    }

    #[test]
    fn overlay_keeps_unset_fields() {
        let mut base = FieldTypeSpec::with_template("shortcode-ui-field-post").view("postView");
        base.overlay(&FieldTypeSpec::default().option("multiple", json!(true)));

        assert_eq!(base.template.as_deref(), Some("shortcode-ui-field-post"));
        assert_eq!(base.view.as_deref(), Some("postView"));
        assert_eq!(base.options.get("multiple"), Some(&json!(true)));
    }

    #[test]
    fn deserializes_extra_keys_into_options() {
        let spec: FieldTypeSpec =
            serde_json::from_str(r#"{"view": "colorPicker", "palette": ["red"]}"#).unwrap();
        assert_eq!(spec.template, None);
        assert_eq!(spec.view.as_deref(), Some("colorPicker"));
        assert_eq!(spec.options.get("palette"), Some(&json!(["red"])));
    }

    #[test]
    fn resolved_type_serializes_flat() {
        let resolved = FieldTypeSpec::default()
            .option("placeholder", json!("Pick one"))
            .resolve();
        let value = serde_json::to_value(&resolved).unwrap();
        assert_eq!(
            value,
            json!({
                "template": DEFAULT_TEMPLATE,
                "view": DEFAULT_VIEW,
                "placeholder": "Pick one",
            })
        );
    }
}
