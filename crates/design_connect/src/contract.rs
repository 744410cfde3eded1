//! Prop contracts of the mapped components.
//!
//! Contracts restate each component's mappable props with their kinds. Token
//! props list the tokens of the library's own enums, so renaming a variant in
//! `design_system` surfaces here as an illegal-token validation error.

use design_system::{
    ButtonVariant, CardAssetType, CardDirection, CardVariant, ChipVariant, ContentCardVariant,
};

use crate::model::PropValue;

/// Kind of value a prop accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropKind {
    /// `String` prop.
    Text,
    /// `bool` prop.
    Bool,
    /// Token enum prop.
    Token {
        /// Enum type name.
        type_name: &'static str,
        /// Legal tokens.
        tokens: Vec<&'static str>,
    },
    /// Structured value written as an expression (item lists, id lists).
    Items,
    /// View slot, written as an expression or plain text.
    View,
}

impl PropKind {
    fn token<T: Copy>(type_name: &'static str, all: &[T], token: fn(T) -> &'static str) -> Self {
        Self::Token {
            type_name,
            tokens: all.iter().copied().map(token).collect(),
        }
    }

    /// Short label used in diagnostics.
    pub fn label(&self) -> String {
        match self {
            Self::Text => "text".to_string(),
            Self::Bool => "bool".to_string(),
            Self::Token { type_name, .. } => format!("{type_name} token"),
            Self::Items => "expression".to_string(),
            Self::View => "view".to_string(),
        }
    }

    /// Whether `value` has this kind. Token values are only kind-checked here;
    /// token legality is reported separately.
    pub fn accepts(&self, value: &PropValue) -> bool {
        match (self, value) {
            (Self::Text, PropValue::Text { .. }) => true,
            (Self::Bool, PropValue::Bool { .. }) => true,
            (Self::Token { type_name, .. }, PropValue::Token { type_name: found, .. }) => {
                type_name == found
            }
            (Self::Items, PropValue::Expr { .. }) => true,
            (Self::View, PropValue::Expr { .. } | PropValue::Text { .. }) => true,
            _ => false,
        }
    }
}

/// One mappable prop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropContract {
    /// Rust prop name.
    pub name: &'static str,
    /// Accepted kind.
    pub kind: PropKind,
}

/// Mappable props of one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentContract {
    /// Component name.
    pub name: &'static str,
    /// Props in declaration order.
    pub props: Vec<PropContract>,
}

impl ComponentContract {
    fn new(name: &'static str, props: Vec<(&'static str, PropKind)>) -> Self {
        Self {
            name,
            props: props
                .into_iter()
                .map(|(name, kind)| PropContract { name, kind })
                .collect(),
        }
    }

    /// Contract of `prop`, if declared.
    pub fn prop(&self, prop: &str) -> Option<&PropContract> {
        self.props.iter().find(|contract| contract.name == prop)
    }
}

/// Contracts for every component the library exposes to the design tool.
pub fn contracts() -> Vec<ComponentContract> {
    let button_variant = || PropKind::token("ButtonVariant", &ButtonVariant::ALL, ButtonVariant::token);

    vec![
        ComponentContract::new(
            "Button",
            vec![
                ("variant", button_variant()),
                ("icon", PropKind::Bool),
                ("text", PropKind::Text),
                ("disabled", PropKind::Bool),
            ],
        ),
        ComponentContract::new(
            "Card",
            vec![
                ("heading", PropKind::Text),
                ("body", PropKind::Text),
                ("show_button", PropKind::Bool),
                ("button_text", PropKind::Text),
                ("button_variant", button_variant()),
                ("button_icon", PropKind::Bool),
                (
                    "asset_type",
                    PropKind::token("CardAssetType", &CardAssetType::ALL, CardAssetType::token),
                ),
                (
                    "variant",
                    PropKind::token("CardVariant", &CardVariant::ALL, CardVariant::token),
                ),
                (
                    "direction",
                    PropKind::token("CardDirection", &CardDirection::ALL, CardDirection::token),
                ),
                ("image_src", PropKind::Text),
                ("image_alt", PropKind::Text),
            ],
        ),
        ComponentContract::new(
            "ListCard",
            vec![("text", PropKind::Text), ("disabled", PropKind::Bool)],
        ),
        ComponentContract::new(
            "Accordion",
            vec![("items", PropKind::Items), ("allow_multiple", PropKind::Bool)],
        ),
        ComponentContract::new(
            "Chips",
            vec![
                ("items", PropKind::Items),
                ("multi_select", PropKind::Bool),
                (
                    "variant",
                    PropKind::token("ChipVariant", &ChipVariant::ALL, ChipVariant::token),
                ),
                ("selected_ids", PropKind::Items),
            ],
        ),
        ComponentContract::new(
            "ContentCard",
            vec![
                ("title", PropKind::Text),
                ("description", PropKind::Text),
                (
                    "variant",
                    PropKind::token(
                        "ContentCardVariant",
                        &ContentCardVariant::ALL,
                        ContentCardVariant::token,
                    ),
                ),
                ("footer", PropKind::View),
            ],
        ),
    ]
}

/// Contract for `component`, if one exists.
pub fn contract_for(component: &str) -> Option<ComponentContract> {
    contracts()
        .into_iter()
        .find(|contract| contract.name == component)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_kinds_list_library_tokens() {
        let button = contract_for("Button").expect("button contract");
        let variant = button.prop("variant").expect("variant prop");
        assert_eq!(
            variant.kind,
            PropKind::Token {
                type_name: "ButtonVariant",
                tokens: vec!["primary", "secondary"],
            }
        );
        assert!(button.prop("size").is_none());
        assert!(contract_for("Slider").is_none());
    }

    #[test]
    fn kinds_accept_matching_values_only() {
        let chip_variant = PropKind::token("ChipVariant", &ChipVariant::ALL, ChipVariant::token);
        assert!(chip_variant.accepts(&PropValue::token("ChipVariant", "filled")));
        assert!(!chip_variant.accepts(&PropValue::token("ButtonVariant", "primary")));
        assert!(!chip_variant.accepts(&PropValue::text("filled")));
        assert!(PropKind::View.accepts(&PropValue::text("footer")));
        assert!(PropKind::Items.accepts(&PropValue::expr("vec![]")));
        assert!(!PropKind::Bool.accepts(&PropValue::text("true")));
    }
}
