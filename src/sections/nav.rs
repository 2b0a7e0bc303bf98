use leptos::prelude::*;

use crate::icons::{Icon, ICON_MENU, ICON_MOON, ICON_SUN};
use crate::navigate::{self, NAV_ITEMS};
use crate::theme::{self, Theme};

#[component]
pub fn Nav(theme: RwSignal<Theme>, active_section: RwSignal<&'static str>) -> impl IntoView {
    let toggle_theme = move |_| {
        theme.set(theme::toggle(theme.get_untracked()));
    };

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <span class="nav-brand">"AlfTech"</span>
                <div class="nav-links">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(label, id)| {
                            view! {
                                <button
                                    class="nav-link"
                                    on:click=move |_| navigate::go_to(id, active_section)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="nav-actions">
                    <button class="theme-toggle" aria-label="Toggle theme" on:click=toggle_theme>
                        {move || {
                            let path = if theme.get().is_dark() { ICON_SUN } else { ICON_MOON };
                            view! { <Icon path=path size="18" /> }
                        }}
                    </button>
                    // Decorative on small screens, no drawer behind it
                    <span class="nav-menu">
                        <Icon path=ICON_MENU size="22" />
                    </span>
                </div>
            </div>
        </nav>
    }
}
