use leptos::prelude::*;

use crate::content::{self, Technology, TECHNOLOGIES};
use crate::icons::{Icon, ICON_TERMINAL};

/// The three technology sections, column order alternating by index parity.
#[component]
pub fn TechnologySections() -> impl IntoView {
    view! {
        {TECHNOLOGIES
            .iter()
            .enumerate()
            .map(|(index, tech)| {
                view! { <TechnologySection tech=tech reversed={index % 2 == 1} /> }
            })
            .collect::<Vec<_>>()}
    }
}

#[component]
fn TechnologySection(tech: &'static Technology, reversed: bool) -> impl IntoView {
    let grid_class = if reversed { "tech-grid reversed" } else { "tech-grid" };
    let sample = content::code_sample(tech.id).unwrap_or_default();
    let panel_title = format!("{} example", tech.title);

    view! {
        <section id=tech.id class="tech-section">
            <div class="container">
                <div class=grid_class>
                    <div class="tech-content">
                        <div class="tech-heading">
                            <div class=format!("tech-icon {}", tech.accent)>
                                <Icon path=tech.icon size="32" />
                            </div>
                            <div>
                                <h2 class="tech-title">{tech.title}</h2>
                                <p class="tech-subtitle">{tech.subtitle}</p>
                            </div>
                        </div>
                        <p class="tech-description">{tech.description}</p>
                        <div class="tech-features">
                            {tech
                                .features
                                .iter()
                                .map(|&feature| view! { <span class="feature-badge">{feature}</span> })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <CodePanel title=panel_title sample=sample />
                </div>
            </div>
        </section>
    }
}

#[component]
fn CodePanel(title: String, sample: &'static str) -> impl IntoView {
    view! {
        <div class="code-panel">
            <div class="code-panel-header">
                <Icon path=ICON_TERMINAL size="20" />
                <span class="code-panel-title">{title}</span>
            </div>
            <pre class="code-panel-body"><code>{sample}</code></pre>
        </div>
    }
}
