//! Inline SVG icons (Lucide outlines, stroke-based).

use leptos::prelude::*;

/// Renders an inline SVG icon from a path data string.
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

/// Angle brackets (HTML)
pub const ICON_CODE: &str = "m16 18 6-6-6-6M8 6l-6 6 6 6";

/// Painter's palette (CSS)
pub const ICON_PALETTE: &str = "M12 22a10 10 0 1 1 10-10c0 1.66-1.34 3-3 3h-2.2a2 2 0 0 0-2 2c0 .55.22 1.05.58 1.41.36.37.58.87.58 1.42A2.18 2.18 0 0 1 12 22zM7.5 11.5h.01M10.5 7.5h.01M14.5 7.5h.01M17.5 11.5h.01";

/// Lightning bolt (JavaScript)
pub const ICON_ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";

/// Sun (shown while dark mode is active)
pub const ICON_SUN: &str = "M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10zM12 1v2m0 18v2M4.22 4.22l1.42 1.42m12.72 12.72 1.42 1.42M1 12h2m18 0h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42";

/// Crescent moon (shown while light mode is active)
pub const ICON_MOON: &str = "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z";

/// Right arrow (hero call to action)
pub const ICON_ARROW_RIGHT: &str = "M5 12h14m-7-7 7 7-7 7";

/// Terminal prompt (code panel header)
pub const ICON_TERMINAL: &str = "m4 17 6-6-6-6M12 19h8";

/// Hamburger menu (mobile, decorative)
pub const ICON_MENU: &str = "M4 12h16M4 6h16M4 18h16";

/// GitHub mark (footer)
pub const ICON_GITHUB: &str = "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22";

/// Bird (footer)
pub const ICON_TWITTER: &str = "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z";

/// Envelope (footer)
pub const ICON_MAIL: &str = "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zm18 2-10 7L2 6";
