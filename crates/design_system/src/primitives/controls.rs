use super::*;

#[component]
/// Shared action button mapped from the design tool's `Button` component.
///
/// `icon` reserves the 18x18 leading icon slot; `icon_name` fills it with a
/// glyph, otherwise an empty placeholder keeps the slot's footprint. Children,
/// when given, replace `text`.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(optional)] icon: bool,
    #[prop(optional)] icon_name: Option<IconName>,
    #[prop(default = "Button".to_string(), into)] text: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let leading = icon.then(|| match icon_name {
        Some(icon) => view! {
            <span data-ui-slot="icon" aria-hidden="true">
                <Icon icon=icon size=IconSize::Sm />
            </span>
        }
        .into_view(),
        None => view! { <span data-ui-slot="icon-placeholder" aria-hidden="true"></span> }
            .into_view(),
    });
    let label = match children {
        Some(children) => children().into_view(),
        None => text.into_view(),
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-icon=bool_token(icon)
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading}
            {label}
        </button>
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One selectable chip.
pub struct ChipItem {
    /// Stable id, unique within one [`Chips`] instance.
    pub id: String,
    /// Visible label.
    pub label: String,
    /// Disabled chips render inert and are never toggled.
    pub disabled: bool,
}

impl ChipItem {
    /// Creates an enabled chip.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the chip disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Applies one chip click to `set`.
///
/// Returns the ids to report through `on_select`, or `None` when the click was
/// not applied because the chip is disabled.
fn select_chip(set: &mut ToggleSet, id: &str, disabled: bool) -> Option<Vec<String>> {
    set.toggle(id, disabled).then(|| set.snapshot())
}

#[component]
/// Selectable chip group for tags, filters, and multi-select options.
///
/// Selection lives in a [`ToggleSet`] owned by this instance. After every
/// applied toggle `on_select` receives the selected ids in the order they were
/// selected, which is not necessarily the order of `items`.
///
/// `selected_ids` seeds the initial selection. Duplicates collapse, and when
/// `multi_select` is `false` only the first seeded id is kept.
pub fn Chips(
    items: Vec<ChipItem>,
    #[prop(optional)] on_select: Option<Callback<Vec<String>>>,
    #[prop(default = true)] multi_select: bool,
    #[prop(default = ChipVariant::Default)] variant: ChipVariant,
    #[prop(optional, into)] selected_ids: Vec<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let mode = SelectionMode::from_allow_multiple(multi_select);
    let selection = create_rw_signal(ToggleSet::with_active(mode, selected_ids));

    let chips = items
        .into_iter()
        .map(|ChipItem { id, label, disabled }| {
            let id_for_state = id.clone();
            let is_selected =
                Signal::derive(move || selection.with(|set| set.is_active(&id_for_state)));
            let show_check = move || variant == ChipVariant::Filled && is_selected.get();

            let handle_click = move |_: MouseEvent| {
                let Some(selected) = selection.try_update(|set| select_chip(set, &id, disabled))
                else {
                    logging::warn!("chip selection dropped after disposal: {id}");
                    return;
                };
                if let (Some(selected), Some(on_select)) = (selected, on_select.as_ref()) {
                    on_select.call(selected);
                }
            };

            view! {
                <button
                    type="button"
                    class="ui-chip"
                    disabled=disabled
                    aria-pressed=move || is_selected.get().to_string()
                    data-ui-primitive="true"
                    data-ui-kind="chip"
                    data-ui-variant=variant.token()
                    data-ui-selected=move || bool_token(is_selected.get())
                    data-ui-disabled=bool_token(disabled)
                    on:click=handle_click
                >
                    <span data-ui-slot="label">{label}</span>
                    <Show when=show_check fallback=|| ()>
                        <span data-ui-slot="check" aria-hidden="true">
                            <Icon icon=IconName::Check size=IconSize::Sm />
                        </span>
                    </Show>
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            class=merge_layout_class("ui-chips", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="chips"
            data-ui-variant=variant.token()
            data-ui-exclusive=bool_token(mode.is_exclusive())
        >
            {chips}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chip_item_builder_sets_fields() {
        let chip = ChipItem::new("1", "Design");
        assert_eq!(chip.id, "1");
        assert_eq!(chip.label, "Design");
        assert!(!chip.disabled);
        assert!(ChipItem::new("2", "Testing").disabled().disabled);
    }

    #[test]
    fn disabled_chip_click_reports_nothing() {
        let mut set = ToggleSet::with_active(SelectionMode::Multiple, ["1"]);
        assert_eq!(select_chip(&mut set, "2", true), None);
        assert_eq!(select_chip(&mut set, "1", true), None);
        assert_eq!(set.snapshot(), vec!["1".to_string()]);
    }

    #[test]
    fn multi_select_chip_clicks_report_selection_order() {
        let mut set = ToggleSet::new(SelectionMode::Multiple);
        assert_eq!(select_chip(&mut set, "3", false), Some(vec!["3".to_string()]));
        assert_eq!(
            select_chip(&mut set, "1", false),
            Some(vec!["3".to_string(), "1".to_string()])
        );
        assert_eq!(select_chip(&mut set, "3", false), Some(vec!["1".to_string()]));
    }

    #[test]
    fn single_select_chip_clicks_replace_then_clear() {
        let mut set = ToggleSet::with_active(SelectionMode::Exclusive, ["1", "2"]);
        assert_eq!(set.snapshot(), vec!["1".to_string()]);
        assert_eq!(select_chip(&mut set, "2", false), Some(vec!["2".to_string()]));
        assert_eq!(select_chip(&mut set, "2", false), Some(Vec::new()));
        assert!(set.is_empty());
    }
}
