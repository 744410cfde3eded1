//! Mapping validation and resolution errors.

use thiserror::Error;

/// Convenience result type for mapping operations.
pub type ConnectResult<T> = Result<T, ConnectError>;

/// Errors raised while validating or resolving design-tool mappings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    /// No prop contract exists for the mapped component.
    #[error("no component contract named `{0}`")]
    UnknownComponent(String),

    /// More than one mapping targets the same component.
    #[error("component `{0}` is mapped more than once")]
    DuplicateMapping(String),

    /// The mapping binds a prop the component does not declare.
    #[error("{component}: prop `{prop}` is not declared by the component")]
    UnknownProp {
        /// Component name.
        component: String,
        /// Offending prop.
        prop: String,
    },

    /// The same prop is bound twice.
    #[error("{component}: prop `{prop}` is mapped more than once")]
    DuplicateProp {
        /// Component name.
        component: String,
        /// Offending prop.
        prop: String,
    },

    /// A bound value does not fit the prop's declared kind.
    #[error("{component}.{prop}: expected {expected}, found {found}")]
    KindMismatch {
        /// Component name.
        component: String,
        /// Offending prop.
        prop: String,
        /// Declared kind.
        expected: String,
        /// Kind of the bound value.
        found: String,
    },

    /// An enum binding produces a token the prop type does not define.
    #[error("{component}.{prop}: `{token}` is not a {type_name} token")]
    IllegalToken {
        /// Component name.
        component: String,
        /// Offending prop.
        prop: String,
        /// Declared token type.
        type_name: String,
        /// Unknown token.
        token: String,
    },

    /// An enum binding lists the same design value twice.
    #[error("{component}.{prop}: design value `{value}` is listed more than once")]
    DuplicateDesignValue {
        /// Component name.
        component: String,
        /// Offending prop.
        prop: String,
        /// Repeated design value.
        value: String,
    },

    /// The example snippet references a prop that is not mapped.
    #[error("{component}: example references unmapped prop `{placeholder}`")]
    UnknownPlaceholder {
        /// Component name.
        component: String,
        /// Placeholder name.
        placeholder: String,
    },

    /// A design instance lacks a property the mapping reads.
    #[error("{component}: design property `{property}` has no value")]
    MissingDesignValue {
        /// Component name.
        component: String,
        /// Design property name.
        property: String,
    },

    /// A design instance holds an enum value with no matching option.
    #[error("{component}: design property `{property}` has no option `{value}`")]
    UnmatchedDesignValue {
        /// Component name.
        component: String,
        /// Design property name.
        property: String,
        /// Unmatched value.
        value: String,
    },

    /// A design instance holds a value of the wrong type.
    #[error("{component}: design property `{property}` expects a {expected} value")]
    DesignValueType {
        /// Component name.
        component: String,
        /// Design property name.
        property: String,
        /// Expected design value type.
        expected: &'static str,
    },

    /// A node URL still carries a template placeholder after configuration.
    #[error("{component}: node url still contains `{placeholder}`")]
    UnresolvedNode {
        /// Component name.
        component: String,
        /// Remaining placeholder.
        placeholder: String,
    },

    /// Validation collected one or more problems.
    #[error("{}", render_problems(.0))]
    Invalid(Vec<ConnectError>),
}

fn render_problems(problems: &[ConnectError]) -> String {
    let mut out = format!("{} mapping problem(s)", problems.len());
    for problem in problems {
        out.push_str("\n  - ");
        out.push_str(&problem.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_problem() {
        let err = ConnectError::Invalid(vec![
            ConnectError::UnknownComponent("Slider".into()),
            ConnectError::UnknownPlaceholder {
                component: "Button".into(),
                placeholder: "size".into(),
            },
        ]);
        let rendered = err.to_string();
        assert!(rendered.starts_with("2 mapping problem(s)"));
        assert!(rendered.contains("no component contract named `Slider`"));
        assert!(rendered.contains("Button: example references unmapped prop `size`"));
    }
}
