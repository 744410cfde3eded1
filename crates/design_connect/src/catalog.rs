//! Mapping records for every component published to the design tool.

use crate::model::{ConnectMapping, PropValue, TEMPLATE_NODE_URL};

const BUTTON_NODE_URL: &str =
    "https://www.figma.com/design/9qaQlSYuimzQjuH2GXNE8b/Code-connect--Test?node-id=1-10&m=dev";

const ACCORDION_TWO_SECTIONS: &str = r#"vec![
    AccordionItem::text("item-1", "Section 1", "Content for section 1"),
    AccordionItem::text("item-2", "Section 2", "Content for section 2"),
]"#;

const ACCORDION_ONE_SECTION: &str =
    r#"vec![AccordionItem::text("item-1", "Section 1", "Content for section 1")]"#;

const CHIPS_TOPICS: &str = r#"vec![
    ChipItem::new("1", "Design"),
    ChipItem::new("2", "Development"),
    ChipItem::new("3", "Testing"),
]"#;

const CHIPS_OPTIONS: &str = r#"vec![
    ChipItem::new("1", "Option 1"),
    ChipItem::new("2", "Option 2"),
    ChipItem::new("3", "Option 3"),
]"#;

fn yes_no() -> [(&'static str, PropValue); 2] {
    [("Yes", PropValue::bool(true)), ("No", PropValue::bool(false))]
}

fn button_variants() -> [(&'static str, PropValue); 2] {
    [
        ("Primary", PropValue::token("ButtonVariant", "primary")),
        ("Secondary", PropValue::token("ButtonVariant", "secondary")),
    ]
}

/// Every mapping, one per component.
pub fn catalog() -> Vec<ConnectMapping> {
    vec![button(), card(), list_card(), accordion(), chips(), content_card()]
}

/// Looks up the mapping for `component`.
pub fn mapping_for(component: &str) -> Option<ConnectMapping> {
    catalog()
        .into_iter()
        .find(|mapping| mapping.component == component)
}

fn button() -> ConnectMapping {
    ConnectMapping::new("Button", BUTTON_NODE_URL)
        .text("text", "Text")
        .enumeration("variant", "Type", button_variants())
        .enumeration("icon", "Icon", yes_no())
        .example("view! { <Button variant={variant} icon={icon} text={text} /> }")
}

fn card() -> ConnectMapping {
    ConnectMapping::new("Card", TEMPLATE_NODE_URL)
        .text("heading", "Heading")
        .text("body", "Body")
        .boolean("show_button", "Button")
        .enumeration("button_variant", "Button Type", button_variants())
        .enumeration("button_icon", "Button Icon", yes_no())
        .enumeration(
            "asset_type",
            "Asset Type",
            [
                ("Icon", PropValue::token("CardAssetType", "icon")),
                ("Image", PropValue::token("CardAssetType", "image")),
            ],
        )
        .enumeration(
            "variant",
            "Variant",
            [
                ("Default", PropValue::token("CardVariant", "default")),
                ("Stroke", PropValue::token("CardVariant", "stroke")),
            ],
        )
        .enumeration(
            "direction",
            "Direction",
            [
                ("Horizontal", PropValue::token("CardDirection", "horizontal")),
                ("Vertical", PropValue::token("CardDirection", "vertical")),
            ],
        )
        .example(
            "view! {\n    <Card\n        heading={heading}\n        body={body}\n        show_button={show_button}\n        button_variant={button_variant}\n        button_icon={button_icon}\n        asset_type={asset_type}\n        variant={variant}\n        direction={direction}\n    />\n}",
        )
}

fn list_card() -> ConnectMapping {
    ConnectMapping::new("ListCard", TEMPLATE_NODE_URL)
        .text("text", "Text")
        .enumeration(
            "disabled",
            "Dissabled",
            [
                ("Default", PropValue::bool(false)),
                ("Variant2", PropValue::bool(true)),
            ],
        )
        .example("view! { <ListCard text={text} disabled={disabled} /> }")
}

fn accordion() -> ConnectMapping {
    ConnectMapping::new("Accordion", TEMPLATE_NODE_URL)
        .boolean_choice(
            "items",
            "multiple",
            PropValue::expr(ACCORDION_TWO_SECTIONS),
            PropValue::expr(ACCORDION_ONE_SECTION),
        )
        .boolean("allow_multiple", "multiple")
        .example("view! { <Accordion items={items} allow_multiple={allow_multiple} /> }")
}

fn chips() -> ConnectMapping {
    ConnectMapping::new("Chips", TEMPLATE_NODE_URL)
        .boolean_choice(
            "items",
            "multiSelect",
            PropValue::expr(CHIPS_TOPICS),
            PropValue::expr(CHIPS_OPTIONS),
        )
        .boolean("multi_select", "multiSelect")
        .enumeration(
            "variant",
            "Variant",
            [
                ("Default", PropValue::token("ChipVariant", "default")),
                ("Filled", PropValue::token("ChipVariant", "filled")),
            ],
        )
        .example(
            "view! {\n    <Chips\n        items={items}\n        multi_select={multi_select}\n        variant={variant}\n        selected_ids=vec![\"1\".to_string()]\n    />\n}",
        )
}

fn content_card() -> ConnectMapping {
    ConnectMapping::new("ContentCard", TEMPLATE_NODE_URL)
        .literal("title", PropValue::text("title"))
        .literal("description", PropValue::text("description"))
        .enumeration(
            "variant",
            "Variant",
            [
                ("Default", PropValue::token("ContentCardVariant", "default")),
                ("Elevated", PropValue::token("ContentCardVariant", "elevated")),
                ("Outlined", PropValue::token("ContentCardVariant", "outlined")),
            ],
        )
        .example(
            "view! {\n    <ContentCard\n        title={title}\n        description={description}\n        variant={variant}\n        footer=|| view! { <Button text=\"Learn More\" /> }\n    />\n}",
        )
}
