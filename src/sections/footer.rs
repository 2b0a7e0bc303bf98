use leptos::prelude::*;

use crate::icons::{Icon, ICON_GITHUB, ICON_MAIL, ICON_TWITTER};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <h3 class="footer-title">"AlfTech"</h3>
                    <p class="footer-tagline">"Learn web technologies and enjoy the ride"</p>
                </div>
                <div class="footer-social">
                    <span class="footer-icon"><Icon path=ICON_GITHUB size="24" /></span>
                    <span class="footer-icon"><Icon path=ICON_TWITTER size="24" /></span>
                    <span class="footer-icon"><Icon path=ICON_MAIL size="24" /></span>
                </div>
                <p class="footer-copyright">"© 2024 AlfTech. All rights reserved."</p>
            </div>
        </footer>
    }
}
