//! Diagnostics surfaced to the host runtime.
//!
//! Every lifecycle callback reports failure as [`Diagnostics`]: a list of
//! structured warnings and errors with a summary, an optional detail and an
//! optional attribute path. Errors from the lower layers convert into a
//! single error diagnostic whose summary is the error's message.

use std::fmt;

use crate::clients::{HttpError, RestError};
use crate::error::ConfigError;
use crate::rest::ResourceError;

/// Severity of a [`Diagnostic`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// The operation failed.
    Error,
    /// The operation succeeded but something deserves attention.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("Error"),
            Self::Warning => f.write_str("Warning"),
        }
    }
}

/// A structured message for the host runtime's user-facing output.
///
/// # Example
///
/// ```rust
/// use bigcommerce_provider::provider::{Diagnostic, Severity};
///
/// let diag = Diagnostic::error("Missing store_hash from provider configuration")
///     .with_detail("Set store_hash or BIGCOMMERCE_STORE_HASH.")
///     .with_attribute("store_hash");
///
/// assert_eq!(diag.severity, Severity::Error);
/// assert_eq!(diag.attribute.as_deref(), Some("store_hash"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Whether this is an error or a warning.
    pub severity: Severity,
    /// Short description of the problem.
    pub summary: String,
    /// Longer explanation, if any.
    pub detail: Option<String>,
    /// Attribute path the diagnostic refers to (e.g., `header.key`).
    pub attribute: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: None,
            attribute: None,
        }
    }

    /// Attaches a detail message.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attaches the attribute path this diagnostic refers to.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Returns `true` for error diagnostics.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.summary)?;
        if let Some(attribute) = &self.attribute {
            write!(f, " (at {attribute})")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

/// An ordered collection of [`Diagnostic`]s.
///
/// Implements [`std::error::Error`] so callbacks can use `?` on any error
/// from the client layers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a diagnostic.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Returns `true` if any diagnostic is an error.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.0.iter().any(Diagnostic::is_error)
    }

    /// Returns `true` if there are no diagnostics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the diagnostics in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Returns `Err(self)` if any diagnostic is an error, `Ok(())` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the full collection when it contains an error.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_error() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

impl From<ResourceError> for Diagnostics {
    fn from(error: ResourceError) -> Self {
        Diagnostic::error(error.to_string()).into()
    }
}

impl From<RestError> for Diagnostics {
    fn from(error: RestError) -> Self {
        Diagnostic::error(error.to_string()).into()
    }
}

impl From<HttpError> for Diagnostics {
    fn from(error: HttpError) -> Self {
        Diagnostic::error(error.to_string()).into()
    }
}

impl From<ConfigError> for Diagnostics {
    fn from(error: ConfigError) -> Self {
        Diagnostic::error(error.to_string()).into()
    }
}

// Verify Diagnostics is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Diagnostics>();
};
