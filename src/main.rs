// AlfTech Landing Page — Leptos 0.8 Edition

mod content;
mod icons;
mod navigate;
mod sections;
mod theme;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    // Theme is resolved and applied once at mount; the signal only feeds the
    // toggle button icon. ActiveSection tracks the last successful nav jump.
    let theme = RwSignal::new(theme::init());
    let active_section = RwSignal::new("home");

    view! {
        <Nav theme=theme active_section=active_section />
        <main>
            <Hero active_section=active_section />
            <TechnologySections />
            <ExamplesGallery />
        </main>
        <Footer />
    }
}
