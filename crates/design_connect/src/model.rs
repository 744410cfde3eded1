//! Mapping records tying component props to design-tool properties.

use serde::{Deserialize, Serialize};

/// Placeholder for the design file id inside template node URLs.
pub const FILE_ID_PLACEHOLDER: &str = "[FILE_ID]";
/// Placeholder for the design file name inside template node URLs.
pub const FILE_NAME_PLACEHOLDER: &str = "[FILE_NAME]";
/// Placeholder for the component node id inside template node URLs.
pub const NODE_ID_PLACEHOLDER: &str = "[NODE_ID]";

/// Node URL used when a mapping is declared before its design file is known.
pub const TEMPLATE_NODE_URL: &str =
    "https://www.figma.com/design/[FILE_ID]/[FILE_NAME]?node-id=[NODE_ID]";

/// A concrete prop value, as produced by a binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PropValue {
    /// String prop.
    Text {
        /// Value.
        value: String,
    },
    /// Boolean prop.
    Bool {
        /// Value.
        value: bool,
    },
    /// Variant of one of the library's token enums.
    Token {
        /// Enum type name, e.g. `ButtonVariant`.
        type_name: String,
        /// Token, e.g. `primary`.
        token: String,
    },
    /// Rust expression for structured props such as item lists or slots.
    Expr {
        /// Source text.
        source: String,
    },
}

impl PropValue {
    /// String value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Boolean value.
    pub fn bool(value: bool) -> Self {
        Self::Bool { value }
    }

    /// Token value.
    pub fn token(type_name: impl Into<String>, token: impl Into<String>) -> Self {
        Self::Token {
            type_name: type_name.into(),
            token: token.into(),
        }
    }

    /// Expression value.
    pub fn expr(source: impl Into<String>) -> Self {
        Self::Expr {
            source: source.into(),
        }
    }

    /// Short kind label used in diagnostics.
    pub fn kind_label(&self) -> String {
        match self {
            Self::Text { .. } => "text".to_string(),
            Self::Bool { .. } => "bool".to_string(),
            Self::Token { type_name, .. } => format!("{type_name} token"),
            Self::Expr { .. } => "expression".to_string(),
        }
    }

    /// Renders the value as Rust source for example snippets.
    pub fn to_source(&self) -> String {
        match self {
            Self::Text { value } => format!("{value:?}"),
            Self::Bool { value } => value.to_string(),
            Self::Token { type_name, token } => format!("{type_name}::{}", pascal_case(token)),
            Self::Expr { source } => source.clone(),
        }
    }
}

fn pascal_case(token: &str) -> String {
    token
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// One option of an enum-valued design property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    /// Option name as shown in the design tool.
    pub design_value: String,
    /// Prop value selected by the option.
    pub value: PropValue,
}

/// Values chosen by a boolean design property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanMapping {
    /// Value when the property is on.
    pub when_true: PropValue,
    /// Value when the property is off.
    pub when_false: PropValue,
}

/// How a prop obtains its value from a design instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PropBinding {
    /// Fixed value, independent of the instance.
    Literal {
        /// Value passed to the prop.
        value: PropValue,
    },
    /// Text property or text layer.
    Text {
        /// Design property name.
        property: String,
    },
    /// Boolean property, passed through or used to pick between two values.
    Boolean {
        /// Design property name.
        property: String,
        /// Values to choose between; the raw boolean when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mapped: Option<BooleanMapping>,
    },
    /// Variant property with named options.
    Enum {
        /// Design property name.
        property: String,
        /// Options in design-tool order.
        options: Vec<EnumOption>,
    },
}

impl PropBinding {
    /// Design property read by the binding, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::Literal { .. } => None,
            Self::Text { property }
            | Self::Boolean { property, .. }
            | Self::Enum { property, .. } => Some(property),
        }
    }
}

/// Binding for one component prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropMapping {
    /// Rust prop name.
    pub prop: String,
    /// Value source.
    pub binding: PropBinding,
}

/// Mapping between one component and its design-tool node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectMapping {
    /// Component name as exported by `design_system`.
    pub component: String,
    /// Node URL; may contain [`TEMPLATE_NODE_URL`] placeholders.
    pub node_url: String,
    /// Prop bindings.
    pub props: Vec<PropMapping>,
    /// View snippet with `{prop}` placeholders.
    pub example: String,
}

impl ConnectMapping {
    /// Starts a mapping for `component` at `node_url`.
    pub fn new(component: impl Into<String>, node_url: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            node_url: node_url.into(),
            props: Vec::new(),
            example: String::new(),
        }
    }

    /// Binds `prop` to a fixed value.
    pub fn literal(self, prop: &str, value: PropValue) -> Self {
        self.bind(prop, PropBinding::Literal { value })
    }

    /// Binds `prop` to a text property.
    pub fn text(self, prop: &str, property: &str) -> Self {
        self.bind(
            prop,
            PropBinding::Text {
                property: property.to_string(),
            },
        )
    }

    /// Binds `prop` to a boolean property.
    pub fn boolean(self, prop: &str, property: &str) -> Self {
        self.bind(
            prop,
            PropBinding::Boolean {
                property: property.to_string(),
                mapped: None,
            },
        )
    }

    /// Binds `prop` to a value chosen by a boolean property.
    pub fn boolean_choice(
        self,
        prop: &str,
        property: &str,
        when_true: PropValue,
        when_false: PropValue,
    ) -> Self {
        self.bind(
            prop,
            PropBinding::Boolean {
                property: property.to_string(),
                mapped: Some(BooleanMapping {
                    when_true,
                    when_false,
                }),
            },
        )
    }

    /// Binds `prop` to an enum property.
    pub fn enumeration<I>(self, prop: &str, property: &str, options: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, PropValue)>,
    {
        let options = options
            .into_iter()
            .map(|(design_value, value)| EnumOption {
                design_value: design_value.to_string(),
                value,
            })
            .collect();
        self.bind(
            prop,
            PropBinding::Enum {
                property: property.to_string(),
                options,
            },
        )
    }

    /// Sets the example snippet.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Binding for `prop`, if mapped.
    pub fn binding(&self, prop: &str) -> Option<&PropBinding> {
        self.props
            .iter()
            .find(|mapping| mapping.prop == prop)
            .map(|mapping| &mapping.binding)
    }

    /// Placeholders referenced by the example, in order of appearance.
    pub fn example_placeholders(&self) -> Vec<&str> {
        placeholders(&self.example)
    }

    fn bind(mut self, prop: &str, binding: PropBinding) -> Self {
        self.props.push(PropMapping {
            prop: prop.to_string(),
            binding,
        });
        self
    }
}

/// A piece of an example template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplatePart<'a> {
    /// Source copied through unchanged.
    Text(&'a str),
    /// Name inside a `{name}` placeholder.
    Placeholder(&'a str),
}

/// Splits `template` into text and `{name}` placeholders, left to right.
/// Braces around anything other than an identifier stay in the text, so Rust
/// blocks inside examples survive.
pub(crate) fn template_parts(template: &str) -> Vec<TemplatePart<'_>> {
    let mut parts = Vec::new();
    let mut text_start = 0;
    let mut cursor = 0;
    while let Some(offset) = template[cursor..].find('{') {
        let open = cursor + offset;
        let after = &template[open + 1..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                if text_start < open {
                    parts.push(TemplatePart::Text(&template[text_start..open]));
                }
                parts.push(TemplatePart::Placeholder(&after[..close]));
                cursor = open + close + 2;
                text_start = cursor;
            }
            _ => cursor = open + 1,
        }
    }
    if text_start < template.len() {
        parts.push(TemplatePart::Text(&template[text_start..]));
    }
    parts
}

/// `{name}` placeholders in `template`, in order of appearance.
pub(crate) fn placeholders(template: &str) -> Vec<&str> {
    template_parts(template)
        .into_iter()
        .filter_map(|part| match part {
            TemplatePart::Placeholder(name) => Some(name),
            TemplatePart::Text(_) => None,
        })
        .collect()
}

fn is_identifier(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    matches!(chars.next(), Some(first) if first.is_ascii_alphabetic() || first == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prop_values_render_as_rust_source() {
        assert_eq!(PropValue::text("Press \"here\"").to_source(), "\"Press \\\"here\\\"\"");
        assert_eq!(PropValue::bool(true).to_source(), "true");
        assert_eq!(
            PropValue::token("ButtonVariant", "secondary").to_source(),
            "ButtonVariant::Secondary"
        );
        assert_eq!(
            PropValue::token("IconName", "info-circle").to_source(),
            "IconName::InfoCircle"
        );
        assert_eq!(PropValue::expr("vec![]").to_source(), "vec![]");
    }

    #[test]
    fn placeholders_skip_non_identifier_braces() {
        let mapping = ConnectMapping::new("Chips", TEMPLATE_NODE_URL)
            .example("<Chips items={items} on_select=move |ids| { log(ids) } variant={variant} />");
        assert_eq!(mapping.example_placeholders(), vec!["items", "variant"]);
        assert!(placeholders("{ } {1x} {}").is_empty());
    }

    #[test]
    fn template_parts_keep_text_between_placeholders() {
        assert_eq!(
            template_parts("<Chips items={items} on_select=|ids| { log(ids) } />"),
            vec![
                TemplatePart::Text("<Chips items="),
                TemplatePart::Placeholder("items"),
                TemplatePart::Text(" on_select=|ids| { log(ids) } />"),
            ]
        );
        assert_eq!(
            template_parts("{{a}}"),
            vec![
                TemplatePart::Text("{"),
                TemplatePart::Placeholder("a"),
                TemplatePart::Text("}"),
            ]
        );
        assert!(template_parts("").is_empty());
    }

    #[test]
    fn builder_records_bindings_in_order() {
        let mapping = ConnectMapping::new("Button", TEMPLATE_NODE_URL)
            .text("text", "Text")
            .boolean("icon", "Icon")
            .enumeration(
                "variant",
                "Type",
                [("Primary", PropValue::token("ButtonVariant", "primary"))],
            );
        let props: Vec<&str> = mapping.props.iter().map(|m| m.prop.as_str()).collect();
        assert_eq!(props, vec!["text", "icon", "variant"]);
        assert_eq!(mapping.binding("icon").and_then(PropBinding::property), Some("Icon"));
        assert!(mapping.binding("missing").is_none());
    }

    #[test]
    fn bindings_serialize_with_kind_tags() {
        let binding = PropBinding::Boolean {
            property: "multiple".into(),
            mapped: None,
        };
        let json = serde_json::to_value(&binding).expect("serialize binding");
        assert_eq!(
            json,
            serde_json::json!({ "kind": "boolean", "property": "multiple" })
        );
    }
}
