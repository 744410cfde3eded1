use super::*;

#[derive(Clone)]
/// One collapsible accordion section.
pub struct AccordionItem {
    /// Stable id, unique within one [`Accordion`] instance.
    pub id: String,
    /// Header copy.
    pub title: String,
    /// Body rendered while the section is open.
    pub content: ViewFn,
}

impl AccordionItem {
    /// Creates a section with arbitrary body content.
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<ViewFn>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    /// Creates a section whose body is plain text.
    pub fn text(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::new(id, title, move || body.clone())
    }
}

impl std::fmt::Debug for AccordionItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccordionItem")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

#[component]
/// Stack of collapsible sections sharing one open-state set.
///
/// With `allow_multiple` off, opening a section closes the others, and
/// activating the open section's header closes it as well.
pub fn Accordion(
    items: Vec<AccordionItem>,
    #[prop(optional)] allow_multiple: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let mode = SelectionMode::from_allow_multiple(allow_multiple);
    let open_items = create_rw_signal(ToggleSet::new(mode));
    let last_index = items.len().saturating_sub(1);

    let sections = items
        .into_iter()
        .enumerate()
        .map(|(index, AccordionItem { id, title, content })| {
            let header_id = format!("ui-accordion-{id}-header");
            let panel_id = format!("ui-accordion-{id}-panel");
            let id_for_state = id.clone();
            let is_open = Signal::derive(move || open_items.with(|set| set.is_active(&id_for_state)));

            view! {
                <section
                    class="ui-accordion-item"
                    data-ui-primitive="true"
                    data-ui-kind="accordion-item"
                    data-ui-last=bool_token(index == last_index)
                    data-ui-expanded=move || bool_token(is_open.get())
                >
                    <button
                        type="button"
                        id=header_id.clone()
                        aria-controls=panel_id.clone()
                        aria-expanded=move || is_open.get().to_string()
                        data-ui-slot="header"
                        on:click=move |_: MouseEvent| {
                            open_items.update(|set| {
                                set.toggle(&id, false);
                            });
                        }
                    >
                        <span data-ui-slot="title">{title}</span>
                        <span
                            data-ui-slot="indicator"
                            data-ui-expanded=move || bool_token(is_open.get())
                            aria-hidden="true"
                        >
                            <Icon icon=IconName::ChevronDown size=IconSize::Sm />
                        </span>
                    </button>
                    <Show when=move || is_open.get() fallback=|| ()>
                        <div
                            role="region"
                            id=panel_id.clone()
                            aria-labelledby=header_id.clone()
                            data-ui-slot="body"
                        >
                            {content.run()}
                        </div>
                    </Show>
                </section>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-accordion", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="accordion"
            data-ui-exclusive=bool_token(mode.is_exclusive())
        >
            {sections}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_items_keep_id_and_title() {
        let item = AccordionItem::text("item-1", "Section 1", "Content for section 1");
        assert_eq!(item.id, "item-1");
        assert_eq!(item.title, "Section 1");
        assert!(format!("{item:?}").contains("item-1"));
    }
}
