use design_system_showcase::{ComponentGallery, TestApp};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Design System" />
        <Meta name="description" content="Design-system components mirrored from the design file." />
        <Stylesheet id="design-system" href="/styles/design-system.css" />

        <Router>
            <nav class="site-nav" aria-label="Pages">
                <A href="/">"Test app"</A>
                <A href="/gallery">"Gallery"</A>
            </nav>
            <main class="site-root">
                <Routes>
                    <Route path="" view=TestAppEntry />
                    <Route path="/gallery" view=GalleryEntry />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn TestAppEntry() -> impl IntoView {
    view! { <TestApp /> }
}

#[component]
pub fn GalleryEntry() -> impl IntoView {
    view! { <ComponentGallery /> }
}

#[component]
fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <section class="site-not-found">
            <h1>"Not found"</h1>
            <p>{move || format!("No page at {}", location.pathname.get())}</p>
            <A href="/">"Back to the test app"</A>
        </section>
    }
}
