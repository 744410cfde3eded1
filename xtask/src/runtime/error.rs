//! Structured xtask error types.

use std::fmt::{self, Display, Formatter};
use std::path::Path;

use design_connect::ConnectError;

/// Stable error categories for xtask workflows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum XtaskErrorCategory {
    /// Invalid or unreadable configuration.
    Config,
    /// Missing or mismatched local environment prerequisites.
    Environment,
    /// Invalid user input or semantically invalid workflow request.
    Validation,
    /// A design-tool mapping failed validation or resolution.
    Mapping,
    /// Export serialization failure.
    Serialization,
    /// Filesystem or general I/O failure.
    Io,
}

/// Structured xtask error with contextual metadata.
///
/// The formatted display output is intentionally CLI-friendly. Optional `operation`, `target`,
/// and `hint` fields can be attached as the error propagates so failures remain actionable at the
/// point they are shown to the user.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct XtaskError {
    /// High-level error category.
    pub category: XtaskErrorCategory,
    /// Human-readable message.
    pub message: String,
    /// Optional operation name.
    pub operation: Option<String>,
    /// Optional path target.
    pub target: Option<String>,
    /// Optional remediation hint.
    pub hint: Option<String>,
}

/// Convenience result type for xtask internals.
pub type XtaskResult<T> = Result<T, XtaskError>;

impl XtaskError {
    /// Create an error with the given category and message.
    pub fn new(category: XtaskErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            operation: None,
            target: None,
            hint: None,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Config, message)
    }

    /// Create an environment error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Environment, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Validation, message)
    }

    /// Create a mapping error.
    pub fn mapping(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Mapping, message)
    }

    /// Create a serialization error.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Serialization, message)
    }

    /// Create an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(XtaskErrorCategory::Io, message)
    }

    /// Attach an operation label.
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Attach a target path.
    pub fn with_path(mut self, path: &Path) -> Self {
        self.target = Some(path.display().to_string());
        self
    }

    /// Attach a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for XtaskError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(operation) = &self.operation {
            write!(f, " [operation: {operation}]")?;
        }
        if let Some(target) = &self.target {
            write!(f, " [target: {target}]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " [hint: {hint}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for XtaskError {}

impl From<std::io::Error> for XtaskError {
    fn from(value: std::io::Error) -> Self {
        XtaskError::io(value.to_string())
    }
}

impl From<ConnectError> for XtaskError {
    fn from(value: ConnectError) -> Self {
        XtaskError::mapping(value.to_string())
    }
}

impl From<serde_json::Error> for XtaskError {
    fn from(value: serde_json::Error) -> Self {
        XtaskError::serialization(format!("json export failed: {value}"))
    }
}

impl From<serde_yaml::Error> for XtaskError {
    fn from(value: serde_yaml::Error) -> Self {
        XtaskError::serialization(format!("yaml export failed: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_appends_context_fields() {
        let err = XtaskError::config("failed to parse design-connect.toml")
            .with_operation("connect export")
            .with_path(Path::new("tools/design-connect.toml"))
            .with_hint("check the [nodes] table");
        assert_eq!(
            err.to_string(),
            "failed to parse design-connect.toml [operation: connect export] \
             [target: tools/design-connect.toml] [hint: check the [nodes] table]"
        );
    }

    #[test]
    fn connect_errors_map_to_mapping_category() {
        let err = XtaskError::from(ConnectError::UnknownComponent("Slider".into()));
        assert_eq!(err.category, XtaskErrorCategory::Mapping);
        assert_eq!(err.message, "no component contract named `Slider`");
    }
}
