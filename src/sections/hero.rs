use leptos::prelude::*;

use crate::icons::{Icon, ICON_ARROW_RIGHT};
use crate::navigate;

#[component]
pub fn Hero(active_section: RwSignal<&'static str>) -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="container">
                <div class="hero-emblem" aria-hidden="true">
                    <span class="hero-emblem-glyph">"</>"</span>
                </div>
                <h1 class="hero-title">"Web technologies"</h1>
                <p class="hero-description">
                    "Learn the basics of modern web development: HTML, CSS and JavaScript. "
                    "Build interactive, beautiful web applications."
                </p>
                <div class="hero-actions">
                    <button
                        class="btn btn-primary"
                        on:click=move |_| navigate::go_to("html", active_section)
                    >
                        "Start learning"
                        <Icon path=ICON_ARROW_RIGHT size="18" class="btn-icon" />
                    </button>
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| navigate::go_to("examples", active_section)
                    >
                        "Code examples"
                    </button>
                </div>
            </div>
        </section>
    }
}
