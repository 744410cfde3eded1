use super::*;

const DEFAULT_CARD_BODY: &str = "Body text for whatever you'd like to say. Add main takeaway points, quotes, anecdotes, or even a very very short story.";

#[component]
/// Content card with an icon or image asset, copy, and an optional action button.
///
/// Mirrors the design tool's `Card` component set: `asset_type`, `variant`, and
/// `direction` are its variant axes, and the action is a nested [`Button`].
pub fn Card(
    #[prop(default = "Title".to_string(), into)] heading: String,
    #[prop(default = DEFAULT_CARD_BODY.to_string(), into)] body: String,
    #[prop(default = true)] show_button: bool,
    #[prop(default = "Button".to_string(), into)] button_text: String,
    #[prop(optional)] on_button_click: Option<Callback<MouseEvent>>,
    #[prop(default = ButtonVariant::Primary)] button_variant: ButtonVariant,
    #[prop(optional)] button_icon: bool,
    #[prop(default = CardAssetType::Icon)] asset_type: CardAssetType,
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = CardDirection::Horizontal)] direction: CardDirection,
    #[prop(optional)] icon_name: Option<IconName>,
    #[prop(optional, into)] image_src: Option<String>,
    #[prop(optional, into)] image_alt: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let asset = match asset_type {
        CardAssetType::Icon => view! {
            <div data-ui-slot="icon-container" aria-hidden="true">
                <Icon icon=icon_name.unwrap_or(IconName::InfoCircle) size=IconSize::Lg />
            </div>
        }
        .into_view(),
        CardAssetType::Image => {
            let image = match image_src {
                Some(src) => view! { <img data-ui-slot="image" src=src alt=image_alt /> }.into_view(),
                None => view! {
                    <Icon
                        icon=IconName::ImagePlaceholder
                        size=IconSize::Lg
                        layout_class="ui-card-image-placeholder"
                    />
                }
                .into_view(),
            };
            view! { <div data-ui-slot="image-container">{image}</div> }.into_view()
        }
    };

    let action = show_button.then(|| {
        view! {
            <Button
                text=button_text
                variant=button_variant
                icon=button_icon
                ui_slot="action"
                on_click=Callback::new(move |ev| {
                    if let Some(on_button_click) = on_button_click.as_ref() {
                        on_button_click.call(ev);
                    }
                })
            />
        }
    });

    view! {
        <div
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-direction=direction.token()
            data-ui-asset=asset_type.token()
        >
            {asset}
            <div data-ui-slot="body">
                <div data-ui-slot="text">
                    <h3 data-ui-slot="heading">{heading}</h3>
                    <p data-ui-slot="body-text">{body}</p>
                </div>
                {action}
            </div>
        </div>
    }
}

#[component]
/// Navigational list row with a leading icon, a title, and a trailing chevron.
pub fn ListCard(
    #[prop(default = "My Family".to_string(), into)] text: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] icon_name: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title = match children {
        Some(children) => children().into_view(),
        None => text.into_view(),
    };

    view! {
        <div
            class=merge_layout_class("ui-list-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="list-card"
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <div data-ui-slot="body">
                <div data-ui-slot="icon" aria-hidden="true">
                    <Icon icon=icon_name.unwrap_or(IconName::Family) size=IconSize::Md />
                </div>
                <div data-ui-slot="content">
                    <span data-ui-slot="title">{title}</span>
                </div>
                <div data-ui-slot="navigation" aria-hidden="true">
                    <span data-ui-slot="chevron"></span>
                </div>
            </div>
        </div>
    }
}

#[component]
/// Titled content container with optional body content and footer.
pub fn ContentCard(
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(default = ContentCardVariant::Default)] variant: ContentCardVariant,
    #[prop(optional, into)] footer: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <article
            class=merge_layout_class("ui-content-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="content-card"
            data-ui-variant=variant.token()
        >
            <h2 data-ui-slot="title">{title}</h2>
            <p data-ui-slot="description">{description}</p>
            {children.map(|children| view! { <div data-ui-slot="content">{children()}</div> })}
            {footer.map(|footer| view! { <div data-ui-slot="footer">{footer.run()}</div> })}
        </article>
    }
}
