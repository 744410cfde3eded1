//! Static checks of mapping records against component contracts.

use std::collections::BTreeSet;

use crate::contract::{contract_for, ComponentContract, PropKind};
use crate::error::{ConnectError, ConnectResult};
use crate::model::{ConnectMapping, PropBinding, PropValue};

/// Checks `mapping` against `contract`, returning every problem found.
pub fn problems(mapping: &ConnectMapping, contract: &ComponentContract) -> Vec<ConnectError> {
    let component = mapping.component.as_str();
    let mut found = Vec::new();
    let mut seen = BTreeSet::new();

    for prop_mapping in &mapping.props {
        let prop = prop_mapping.prop.as_str();
        if !seen.insert(prop) {
            found.push(ConnectError::DuplicateProp {
                component: component.to_string(),
                prop: prop.to_string(),
            });
            continue;
        }
        let Some(prop_contract) = contract.prop(prop) else {
            found.push(ConnectError::UnknownProp {
                component: component.to_string(),
                prop: prop.to_string(),
            });
            continue;
        };
        let kind = &prop_contract.kind;

        match &prop_mapping.binding {
            PropBinding::Literal { value } => check_value(&mut found, component, prop, kind, value),
            PropBinding::Text { .. } => {
                if !matches!(kind, PropKind::Text | PropKind::View) {
                    found.push(mismatch(component, prop, kind, "text"));
                }
            }
            PropBinding::Boolean { mapped: None, .. } => {
                if *kind != PropKind::Bool {
                    found.push(mismatch(component, prop, kind, "bool"));
                }
            }
            PropBinding::Boolean {
                mapped: Some(mapped),
                ..
            } => {
                check_value(&mut found, component, prop, kind, &mapped.when_true);
                check_value(&mut found, component, prop, kind, &mapped.when_false);
            }
            PropBinding::Enum { options, .. } => {
                let mut design_values = BTreeSet::new();
                for option in options {
                    if !design_values.insert(option.design_value.as_str()) {
                        found.push(ConnectError::DuplicateDesignValue {
                            component: component.to_string(),
                            prop: prop.to_string(),
                            value: option.design_value.clone(),
                        });
                    }
                    check_value(&mut found, component, prop, kind, &option.value);
                }
            }
        }
    }

    for placeholder in mapping.example_placeholders() {
        if !seen.contains(placeholder) {
            found.push(ConnectError::UnknownPlaceholder {
                component: component.to_string(),
                placeholder: placeholder.to_string(),
            });
        }
    }

    found
}

/// Validates one mapping against its component's contract.
pub fn validate(mapping: &ConnectMapping) -> ConnectResult<()> {
    let contract = contract_for(&mapping.component)
        .ok_or_else(|| ConnectError::UnknownComponent(mapping.component.clone()))?;
    let found = problems(mapping, &contract);
    if found.is_empty() {
        Ok(())
    } else {
        Err(ConnectError::Invalid(found))
    }
}

/// Validates every mapping, collecting problems across the whole set.
pub fn validate_all(mappings: &[ConnectMapping]) -> ConnectResult<()> {
    let mut found = Vec::new();
    let mut components = BTreeSet::new();

    for mapping in mappings {
        if !components.insert(mapping.component.as_str()) {
            found.push(ConnectError::DuplicateMapping(mapping.component.clone()));
        }
        match contract_for(&mapping.component) {
            Some(contract) => found.extend(problems(mapping, &contract)),
            None => found.push(ConnectError::UnknownComponent(mapping.component.clone())),
        }
    }

    if found.is_empty() {
        Ok(())
    } else {
        Err(ConnectError::Invalid(found))
    }
}

fn check_value(
    found: &mut Vec<ConnectError>,
    component: &str,
    prop: &str,
    kind: &PropKind,
    value: &PropValue,
) {
    if !kind.accepts(value) {
        found.push(mismatch(component, prop, kind, &value.kind_label()));
        return;
    }
    if let (PropKind::Token { type_name, tokens }, PropValue::Token { token, .. }) = (kind, value) {
        if !tokens.contains(&token.as_str()) {
            found.push(ConnectError::IllegalToken {
                component: component.to_string(),
                prop: prop.to_string(),
                type_name: type_name.to_string(),
                token: token.clone(),
            });
        }
    }
}

fn mismatch(component: &str, prop: &str, kind: &PropKind, found: &str) -> ConnectError {
    ConnectError::KindMismatch {
        component: component.to_string(),
        prop: prop.to_string(),
        expected: kind.label(),
        found: found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TEMPLATE_NODE_URL;
    use pretty_assertions::assert_eq;

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
            .example("<Button variant={variant} text={text} />")
    }

    fn invalid(result: ConnectResult<()>) -> Vec<ConnectError> {
        match result {
            Err(ConnectError::Invalid(problems)) => problems,
            other => panic!("expected invalid mapping, got {other:?}"),
        }
    }

    #[test]
    fn well_formed_mapping_validates() {
        assert_eq!(validate(&button()), Ok(()));
    }

    #[test]
    fn unknown_component_is_rejected() {
        let mapping = ConnectMapping::new("Slider", TEMPLATE_NODE_URL);
        assert_eq!(
            validate(&mapping),
            Err(ConnectError::UnknownComponent("Slider".into()))
        );
    }

    #[test]
    fn reports_every_problem_at_once() {
        let mapping = button()
            .boolean("size", "Size")
            .boolean("text", "Text")
            .enumeration(
                "icon",
                "Icon",
                [("Yes", PropValue::bool(true)), ("Yes", PropValue::bool(false))],
            )
            .example("<Button variant={variant} text={text} tone={tone} />");

        assert_eq!(
            invalid(validate(&mapping)),
            vec![
                ConnectError::UnknownProp {
                    component: "Button".into(),
                    prop: "size".into(),
                },
                ConnectError::DuplicateProp {
                    component: "Button".into(),
                    prop: "text".into(),
                },
                ConnectError::DuplicateDesignValue {
                    component: "Button".into(),
                    prop: "icon".into(),
                    value: "Yes".into(),
                },
                ConnectError::UnknownPlaceholder {
                    component: "Button".into(),
                    placeholder: "tone".into(),
                },
            ]
        );
    }

    #[test]
    fn illegal_tokens_and_kind_mismatches_are_reported() {
        let mapping = ConnectMapping::new("Chips", TEMPLATE_NODE_URL)
            .enumeration(
                "variant",
                "Variant",
                [
                    ("Default", PropValue::token("ChipVariant", "default")),
                    ("Ghost", PropValue::token("ChipVariant", "ghost")),
                    ("Filled", PropValue::text("filled")),
                ],
            )
            .text("multi_select", "multiSelect");

        assert_eq!(
            invalid(validate(&mapping)),
            vec![
                ConnectError::IllegalToken {
                    component: "Chips".into(),
                    prop: "variant".into(),
                    type_name: "ChipVariant".into(),
                    token: "ghost".into(),
                },
                ConnectError::KindMismatch {
                    component: "Chips".into(),
                    prop: "variant".into(),
                    expected: "ChipVariant token".into(),
                    found: "text".into(),
                },
                ConnectError::KindMismatch {
                    component: "Chips".into(),
                    prop: "multi_select".into(),
                    expected: "bool".into(),
                    found: "text".into(),
                },
            ]
        );
    }

    #[test]
    fn validate_all_flags_repeated_components() {
        assert_eq!(
            invalid(validate_all(&[button(), button()])),
            vec![ConnectError::DuplicateMapping("Button".into())]
        );
    }
}
