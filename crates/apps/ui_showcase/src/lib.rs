//! Review surfaces for the design-system component library.
//!
//! [`TestApp`] reproduces the design file's "Test app" frame: three list cards
//! over three cards covering the asset, button, and direction variants.
//! [`ComponentGallery`] exercises the interactive components (accordion and
//! chips in both selection modes) so toggle behavior can be reviewed in a
//! browser.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use design_system::prelude::*;
use leptos::*;

#[component]
/// The design file's "Test app" frame rendered with library components.
pub fn TestApp() -> impl IntoView {
    view! {
        <main class="test-app" data-ui-kind="test-app">
            <Stack gap=LayoutGap::Md layout_class="test-app__list-container" aria_label="Places">
                <ListCard text="Map" icon_name=IconName::Map />
                <ListCard text="Checking" icon_name=IconName::Check />
                <ListCard text="My Family" />
            </Stack>

            <Card
                heading="My test card"
                body="Hellooo"
                show_button=true
                button_text="Press here"
                button_variant=ButtonVariant::Primary
                button_icon=false
                asset_type=CardAssetType::Icon
                variant=CardVariant::Stroke
                direction=CardDirection::Horizontal
            />
            <Card
                heading="Disable"
                body="Hello 2nd"
                show_button=false
                asset_type=CardAssetType::Icon
                variant=CardVariant::Stroke
                direction=CardDirection::Horizontal
            />
            <Card
                heading="Title"
                body="daandjbajhdbjasbd"
                show_button=true
                button_text="dhashdha"
                button_variant=ButtonVariant::Secondary
                button_icon=true
                asset_type=CardAssetType::Image
                variant=CardVariant::Stroke
                direction=CardDirection::Vertical
            />
        </main>
    }
}

fn accordion_sections() -> Vec<AccordionItem> {
    vec![
        AccordionItem::text("item-1", "Section 1", "Content for section 1"),
        AccordionItem::text("item-2", "Section 2", "Content for section 2"),
        AccordionItem::text("item-3", "Section 3", "Content for section 3"),
    ]
}

fn topic_chips() -> Vec<ChipItem> {
    vec![
        ChipItem::new("1", "Design"),
        ChipItem::new("2", "Development"),
        ChipItem::new("3", "Testing"),
    ]
}

fn selection_summary(ids: &[String]) -> String {
    if ids.is_empty() {
        "Selected: none".to_string()
    } else {
        format!("Selected: {}", ids.join(", "))
    }
}

#[component]
/// Interactive gallery of every component family.
pub fn ComponentGallery() -> impl IntoView {
    let multi_selection = create_rw_signal(vec!["1".to_string()]);
    let single_selection = create_rw_signal(Vec::<String>::new());
    let list_clicks = create_rw_signal(0_u32);

    let on_multi_select = Callback::new(move |ids: Vec<String>| {
        logging::log!("multi-select chips: {ids:?}");
        multi_selection.set(ids);
    });
    let on_single_select = Callback::new(move |ids: Vec<String>| {
        logging::log!("single-select chips: {ids:?}");
        single_selection.set(ids);
    });

    view! {
        <main class="ui-gallery" data-ui-kind="gallery">
            <Stack gap=LayoutGap::Lg>
                <section aria-label="Buttons">
                    <h2>"Buttons"</h2>
                    <Cluster gap=LayoutGap::Sm>
                        <Button variant=ButtonVariant::Primary />
                        <Button variant=ButtonVariant::Secondary text="Secondary" />
                        <Button icon=true text="With icon" />
                        <Button icon=true icon_name=IconName::Check text="Confirm" />
                        <Button variant=ButtonVariant::Secondary disabled=true text="Disabled" />
                    </Cluster>
                </section>

                <section aria-label="Accordion">
                    <h2>"Accordion"</h2>
                    <Stack gap=LayoutGap::Md>
                        <Accordion items=accordion_sections() aria_label="Single section accordion" />
                        <Accordion
                            items=accordion_sections()
                            allow_multiple=true
                            aria_label="Multiple section accordion"
                        />
                    </Stack>
                </section>

                <section aria-label="Chips">
                    <h2>"Chips"</h2>
                    <Stack gap=LayoutGap::Md>
                        <Chips
                            items=topic_chips()
                            selected_ids=vec!["1".to_string()]
                            on_select=on_multi_select
                            aria_label="Topics"
                        />
                        <p>{move || multi_selection.with(|ids| selection_summary(ids))}</p>
                        <Chips
                            items=vec![
                                ChipItem::new("1", "Option 1"),
                                ChipItem::new("2", "Option 2"),
                                ChipItem::new("3", "Option 3").disabled(),
                            ]
                            multi_select=false
                            variant=ChipVariant::Filled
                            on_select=on_single_select
                            aria_label="Options"
                        />
                        <p>{move || single_selection.with(|ids| selection_summary(ids))}</p>
                    </Stack>
                </section>

                <section aria-label="Content cards">
                    <h2>"Content cards"</h2>
                    <Cluster gap=LayoutGap::Md>
                        {ContentCardVariant::ALL
                            .into_iter()
                            .map(|variant| {
                                view! {
                                    <ContentCard
                                        title=format!("{} card", variant.token())
                                        description="Cards group related content and actions."
                                        variant=variant
                                        footer=|| view! { <Button text="Learn More" /> }
                                    />
                                }
                            })
                            .collect_view()}
                    </Cluster>
                </section>

                <section aria-label="List cards">
                    <h2>"List cards"</h2>
                    <Stack gap=LayoutGap::Sm>
                        <ListCard
                            text="Map"
                            icon_name=IconName::Map
                            on_click=Callback::new(move |_| list_clicks.update(|count| *count += 1))
                        />
                        <ListCard text="Disabled" disabled=true />
                    </Stack>
                    <p>{move || format!("List card clicks: {}", list_clicks.get())}</p>
                </section>
            </Stack>
        </main>
    }
}
