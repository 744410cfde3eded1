//! Turning design instances into prop values, example snippets, and node URLs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConnectError, ConnectResult};
use crate::model::{
    template_parts, ConnectMapping, PropBinding, PropValue, TemplatePart, FILE_ID_PLACEHOLDER,
    FILE_NAME_PLACEHOLDER, NODE_ID_PLACEHOLDER,
};

/// A property value read from a design-tool instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DesignValue {
    /// Boolean property.
    Bool(bool),
    /// Text or variant property.
    Text(String),
}

impl DesignValue {
    /// Parses a command-line `value`: `true`/`false` become booleans,
    /// everything else is text.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            other => Self::Text(other.to_string()),
        }
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    fn as_text(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

/// Property values of one design instance, keyed by design property name.
pub type DesignInstance = BTreeMap<String, DesignValue>;

/// Prop values keyed by Rust prop name.
pub type ResolvedProps = BTreeMap<String, PropValue>;

/// Computes the prop values `mapping` yields for `instance`.
pub fn resolve(mapping: &ConnectMapping, instance: &DesignInstance) -> ConnectResult<ResolvedProps> {
    let component = mapping.component.as_str();
    let mut resolved = ResolvedProps::new();

    for prop_mapping in &mapping.props {
        let value = match &prop_mapping.binding {
            PropBinding::Literal { value } => value.clone(),
            PropBinding::Text { property } => {
                PropValue::text(lookup(component, instance, property)?.as_text())
            }
            PropBinding::Boolean { property, mapped } => {
                let flag = lookup(component, instance, property)?
                    .as_bool()
                    .ok_or_else(|| ConnectError::DesignValueType {
                        component: component.to_string(),
                        property: property.clone(),
                        expected: "boolean",
                    })?;
                match mapped {
                    None => PropValue::bool(flag),
                    Some(mapped) if flag => mapped.when_true.clone(),
                    Some(mapped) => mapped.when_false.clone(),
                }
            }
            PropBinding::Enum { property, options } => {
                let selected = lookup(component, instance, property)?.as_text();
                options
                    .iter()
                    .find(|option| option.design_value == selected)
                    .map(|option| option.value.clone())
                    .ok_or_else(|| ConnectError::UnmatchedDesignValue {
                        component: component.to_string(),
                        property: property.clone(),
                        value: selected,
                    })?
            }
        };
        resolved.insert(prop_mapping.prop.clone(), value);
    }

    Ok(resolved)
}

fn lookup<'a>(
    component: &str,
    instance: &'a DesignInstance,
    property: &str,
) -> ConnectResult<&'a DesignValue> {
    instance
        .get(property)
        .ok_or_else(|| ConnectError::MissingDesignValue {
            component: component.to_string(),
            property: property.to_string(),
        })
}

/// Fills the example snippet with `resolved` values rendered as Rust source.
///
/// The snippet is rendered in one pass, so braces inside a substituted value
/// are never read as placeholders.
pub fn render_example(mapping: &ConnectMapping, resolved: &ResolvedProps) -> ConnectResult<String> {
    let mut rendered = String::with_capacity(mapping.example.len());
    for part in template_parts(&mapping.example) {
        match part {
            TemplatePart::Text(text) => rendered.push_str(text),
            TemplatePart::Placeholder(placeholder) => {
                let value = resolved.get(placeholder).ok_or_else(|| {
                    ConnectError::UnknownPlaceholder {
                        component: mapping.component.clone(),
                        placeholder: placeholder.to_string(),
                    }
                })?;
                rendered.push_str(&value.to_source());
            }
        }
    }
    Ok(rendered)
}

/// Design file coordinates used to complete template node URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectConfig {
    /// Design file key.
    #[serde(default)]
    pub file_id: Option<String>,
    /// Design file slug.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Node ids keyed by component name.
    #[serde(default)]
    pub nodes: BTreeMap<String, String>,
}

impl ConnectConfig {
    /// Returns the mapping's node URL with every placeholder filled.
    ///
    /// Literal URLs pass through untouched. A placeholder the configuration
    /// cannot fill is an error.
    pub fn node_url(&self, mapping: &ConnectMapping) -> ConnectResult<String> {
        let mut url = mapping.node_url.clone();
        let fills = [
            (FILE_ID_PLACEHOLDER, self.file_id.as_deref()),
            (FILE_NAME_PLACEHOLDER, self.file_name.as_deref()),
            (
                NODE_ID_PLACEHOLDER,
                self.nodes.get(&mapping.component).map(String::as_str),
            ),
        ];

        for (placeholder, fill) in fills {
            if !url.contains(placeholder) {
                continue;
            }
            let Some(fill) = fill else {
                return Err(ConnectError::UnresolvedNode {
                    component: mapping.component.clone(),
                    placeholder: placeholder.to_string(),
                });
            };
            url = url.replace(placeholder, fill);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TEMPLATE_NODE_URL;
    use pretty_assertions::assert_eq;

    fn instance(pairs: &[(&str, DesignValue)]) -> DesignInstance {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    fn button() -> ConnectMapping {
        ConnectMapping::new("Button", TEMPLATE_NODE_URL)
            .text("text", "Text")
            .enumeration(
                "variant",
                "Type",
                [
                    ("Primary", PropValue::token("ButtonVariant", "primary")),
                    ("Secondary", PropValue::token("ButtonVariant", "secondary")),
                ],
            )
            .enumeration(
                "icon",
                "Icon",
                [("Yes", PropValue::bool(true)), ("No", PropValue::bool(false))],
            )
            .example("<Button variant={variant} icon={icon} text={text} />")
    }

    #[test]
    fn parse_distinguishes_booleans_from_text() {
        assert_eq!(DesignValue::parse("true"), DesignValue::Bool(true));
        assert_eq!(DesignValue::parse("false"), DesignValue::Bool(false));
        assert_eq!(DesignValue::parse("Yes"), DesignValue::Text("Yes".into()));
    }

    #[test]
    fn resolves_and_renders_button_instance() {
        let mapping = button();
        let resolved = resolve(
            &mapping,
            &instance(&[
                ("Text", DesignValue::Text("Press here".into())),
                ("Type", DesignValue::Text("Secondary".into())),
                ("Icon", DesignValue::Text("Yes".into())),
            ]),
        )
        .expect("resolve button");

        assert_eq!(
            resolved.get("variant"),
            Some(&PropValue::token("ButtonVariant", "secondary"))
        );
        assert_eq!(resolved.get("icon"), Some(&PropValue::bool(true)));
        assert_eq!(
            render_example(&mapping, &resolved).expect("render"),
            "<Button variant=ButtonVariant::Secondary icon=true text=\"Press here\" />"
        );
    }

    #[test]
    fn boolean_choice_picks_value_by_flag() {
        let mapping = ConnectMapping::new("Accordion", TEMPLATE_NODE_URL)
            .boolean_choice(
                "items",
                "multiple",
                PropValue::expr("two()"),
                PropValue::expr("one()"),
            )
            .boolean("allow_multiple", "multiple");

        let on = resolve(&mapping, &instance(&[("multiple", DesignValue::Bool(true))]))
            .expect("resolve on");
        assert_eq!(on.get("items"), Some(&PropValue::expr("two()")));
        assert_eq!(on.get("allow_multiple"), Some(&PropValue::bool(true)));

        let off = resolve(&mapping, &instance(&[("multiple", DesignValue::Bool(false))]))
            .expect("resolve off");
        assert_eq!(off.get("items"), Some(&PropValue::expr("one()")));

        assert_eq!(
            resolve(&mapping, &instance(&[("multiple", DesignValue::Text("yes".into()))])),
            Err(ConnectError::DesignValueType {
                component: "Accordion".into(),
                property: "multiple".into(),
                expected: "boolean",
            })
        );
    }

    #[test]
    fn missing_and_unmatched_design_values_are_errors() {
        let mapping = button();
        assert_eq!(
            resolve(&mapping, &instance(&[])),
            Err(ConnectError::MissingDesignValue {
                component: "Button".into(),
                property: "Text".into(),
            })
        );
        assert_eq!(
            resolve(
                &mapping,
                &instance(&[
                    ("Text", DesignValue::Text("Go".into())),
                    ("Type", DesignValue::Text("Tertiary".into())),
                ]),
            ),
            Err(ConnectError::UnmatchedDesignValue {
                component: "Button".into(),
                property: "Type".into(),
                value: "Tertiary".into(),
            })
        );
    }

    #[test]
    fn literal_bindings_ignore_the_instance() {
        let mapping = ConnectMapping::new("ContentCard", TEMPLATE_NODE_URL)
            .literal("title", PropValue::text("title"))
            .example("<ContentCard title={title} />");
        let resolved = resolve(&mapping, &DesignInstance::new()).expect("resolve literal");
        assert_eq!(
            render_example(&mapping, &resolved).expect("render"),
            "<ContentCard title=\"title\" />"
        );
    }

    #[test]
    fn substituted_values_are_not_rescanned_for_placeholders() {
        let mapping = ConnectMapping::new("Card", TEMPLATE_NODE_URL)
            .text("heading", "Heading")
            .text("body", "Body")
            .example("<Card heading={heading} body={body} />");
        let resolved = resolve(
            &mapping,
            &instance(&[
                ("Heading", DesignValue::Text("{body}".into())),
                ("Body", DesignValue::Text("Hello".into())),
            ]),
        )
        .expect("resolve card");

        assert_eq!(
            render_example(&mapping, &resolved).expect("render"),
            "<Card heading=\"{body}\" body=\"Hello\" />"
        );
    }

    #[test]
    fn unknown_placeholders_are_errors() {
        let mapping = ConnectMapping::new("Card", TEMPLATE_NODE_URL)
            .text("heading", "Heading")
            .example("<Card heading={heading} body={body} />");
        let resolved = resolve(
            &mapping,
            &instance(&[("Heading", DesignValue::Text("Hi".into()))]),
        )
        .expect("resolve card");

        assert_eq!(
            render_example(&mapping, &resolved),
            Err(ConnectError::UnknownPlaceholder {
                component: "Card".into(),
                placeholder: "body".into(),
            })
        );
    }

    #[test]
    fn node_url_fills_template_from_config() {
        let mapping = button();
        let config = ConnectConfig {
            file_id: Some("abc123".into()),
            file_name: Some("Design-System".into()),
            nodes: BTreeMap::from([("Button".to_string(), "1-10".to_string())]),
        };
        assert_eq!(
            config.node_url(&mapping).expect("node url"),
            "https://www.figma.com/design/abc123/Design-System?node-id=1-10"
        );

        let without_node = ConnectConfig {
            nodes: BTreeMap::new(),
            ..config
        };
        assert_eq!(
            without_node.node_url(&mapping),
            Err(ConnectError::UnresolvedNode {
                component: "Button".into(),
                placeholder: NODE_ID_PLACEHOLDER.into(),
            })
        );
    }

    #[test]
    fn literal_node_urls_pass_through() {
        let mapping = ConnectMapping::new("Button", "https://example.test/file?node-id=1-10");
        assert_eq!(
            ConnectConfig::default().node_url(&mapping).expect("literal url"),
            "https://example.test/file?node-id=1-10"
        );
    }
}
