//! Attribute schemas for the provider, resources and data sources.
//!
//! A [`Schema`] declares the attributes an object accepts, their types and
//! whether each is required, optional, computed or sensitive. Schemas
//! validate user configuration and redact sensitive values before state is
//! logged.
//!
//! Configuration and state are both plain JSON objects
//! (`serde_json::Map<String, Value>`); a `null` value counts as absent.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::provider::{Diagnostic, Diagnostics};

/// Placeholder written over sensitive values by [`Schema::redact`].
pub const REDACTED: &str = "(sensitive value)";

/// The type of an attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeType {
    /// A string value.
    String,
    /// A boolean value.
    Bool,
    /// An unordered set of nested objects, each described by a schema.
    Set(Schema),
}

impl AttributeType {
    const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Bool => "bool",
            Self::Set(_) => "set",
        }
    }
}

/// A single attribute declaration.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::provider::Attribute;
///
/// let token = Attribute::string()
///     .required()
///     .sensitive()
///     .description("API account access token");
///
/// assert!(token.required);
/// assert!(token.sensitive);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// The value type.
    pub attr_type: AttributeType,
    /// Must be present in configuration.
    pub required: bool,
    /// May be present in configuration.
    pub optional: bool,
    /// Populated by the provider.
    pub computed: bool,
    /// Masked in logs and redacted state.
    pub sensitive: bool,
    /// Human-readable description.
    pub description: Option<&'static str>,
}

impl Attribute {
    const fn of(attr_type: AttributeType) -> Self {
        Self {
            attr_type,
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            description: None,
        }
    }

    /// A string attribute.
    #[must_use]
    pub const fn string() -> Self {
        Self::of(AttributeType::String)
    }

    /// A boolean attribute.
    #[must_use]
    pub const fn bool() -> Self {
        Self::of(AttributeType::Bool)
    }

    /// A set of nested objects described by `element`.
    #[must_use]
    pub const fn set(element: Schema) -> Self {
        Self::of(AttributeType::Set(element))
    }

    /// Marks the attribute as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the attribute as optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the attribute as computed by the provider.
    #[must_use]
    pub const fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    /// Marks the attribute as sensitive.
    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub const fn description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Returns `true` if users cannot set this attribute.
    #[must_use]
    pub const fn is_computed_only(&self) -> bool {
        self.computed && !self.required && !self.optional
    }
}

/// A set of named attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema {
    description: Option<&'static str>,
    attributes: BTreeMap<&'static str, Attribute>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the description.
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Adds an attribute.
    #[must_use]
    pub fn attribute(mut self, name: &'static str, attribute: Attribute) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    /// Returns the description, if any.
    #[must_use]
    pub const fn description(&self) -> Option<&'static str> {
        self.description
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Iterates over attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &Attribute)> {
        self.attributes.iter().map(|(name, attr)| (*name, attr))
    }

    /// Validates user configuration against this schema.
    ///
    /// Reports missing required attributes, values for computed-only
    /// attributes, unknown attributes and type mismatches. Nested set
    /// elements are validated against their element schema.
    #[must_use]
    pub fn validate(&self, config: &Map<String, Value>) -> Diagnostics {
        let mut diags = Diagnostics::new();
        self.validate_at("", config, &mut diags);
        diags
    }

    fn validate_at(&self, prefix: &str, config: &Map<String, Value>, diags: &mut Diagnostics) {
        for (name, attribute) in &self.attributes {
            let path = format!("{prefix}{name}");
            let value = config.get(*name).filter(|v| !v.is_null());

            let Some(value) = value else {
                if attribute.required {
                    diags.push(
                        Diagnostic::error("Missing required argument")
                            .with_detail(format!(
                                "The argument \"{path}\" is required, but no definition was found."
                            ))
                            .with_attribute(path),
                    );
                }
                continue;
            };

            if attribute.is_computed_only() {
                diags.push(
                    Diagnostic::error("Value for unconfigurable attribute")
                        .with_detail(format!(
                            "Can't configure a value for \"{path}\": its value will be decided automatically."
                        ))
                        .with_attribute(path),
                );
                continue;
            }

            match (&attribute.attr_type, value) {
                (AttributeType::String, Value::String(_)) | (AttributeType::Bool, Value::Bool(_)) => {}
                (AttributeType::Set(element), Value::Array(items)) => {
                    for item in items {
                        match item {
                            Value::Object(fields) => {
                                element.validate_at(&format!("{path}."), fields, diags);
                            }
                            _ => diags.push(type_mismatch(&path, "object")),
                        }
                    }
                }
                (expected, _) => diags.push(type_mismatch(&path, expected.name())),
            }
        }

        for key in config.keys() {
            if !self.attributes.contains_key(key.as_str()) {
                let path = format!("{prefix}{key}");
                diags.push(
                    Diagnostic::error("Unsupported argument")
                        .with_detail(format!("An argument named \"{path}\" is not expected here."))
                        .with_attribute(path),
                );
            }
        }
    }

    /// Returns a copy of `state` with sensitive values replaced by
    /// [`REDACTED`], suitable for logging.
    #[must_use]
    pub fn redact(&self, state: &Map<String, Value>) -> Map<String, Value> {
        state
            .iter()
            .map(|(key, value)| {
                let redacted = match self.attributes.get(key.as_str()) {
                    Some(attr) if attr.sensitive && !value.is_null() => {
                        Value::String(REDACTED.to_string())
                    }
                    Some(Attribute {
                        attr_type: AttributeType::Set(element),
                        ..
                    }) => match value {
                        Value::Array(items) => Value::Array(
                            items
                                .iter()
                                .map(|item| match item {
                                    Value::Object(fields) => Value::Object(element.redact(fields)),
                                    other => other.clone(),
                                })
                                .collect(),
                        ),
                        other => other.clone(),
                    },
                    _ => value.clone(),
                };
                (key.clone(), redacted)
            })
            .collect()
    }
}

fn type_mismatch(path: &str, expected: &str) -> Diagnostic {
    Diagnostic::error("Incorrect attribute value type")
        .with_detail(format!("Inappropriate value for \"{path}\": {expected} required."))
        .with_attribute(path)
}
