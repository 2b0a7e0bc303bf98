//! Smooth scroll-to-section navigation.

use leptos::prelude::*;

/// Nav bar items: label paired with the target section id, in display order.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Home", "home"),
    ("HTML", "html"),
    ("CSS", "css"),
    ("JavaScript", "javascript"),
    ("Examples", "examples"),
];

/// Navigates to a section and records it as active on success.
///
/// An unknown id is a silent no-op: nothing scrolls and the active section
/// keeps its previous value.
pub fn go_to(target: &'static str, active_section: RwSignal<&'static str>) {
    let found = scroll_to_section(target);
    active_section.update(|current| *current = next_active_section(current, target, found));
}

/// The active-section value after a navigation attempt: the target when its
/// section was found, otherwise the current value unchanged.
fn next_active_section(
    current: &'static str,
    target: &'static str,
    found: bool,
) -> &'static str {
    if found { target } else { current }
}

/// Smoothly scrolls the section with the given id into view.
///
/// Returns `true` when the section exists; an unknown id leaves the page
/// untouched.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    match document.get_element_by_id(id) {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_items_map_positionally_to_the_five_section_anchors() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|(_, id)| *id).collect();
        assert_eq!(ids, vec!["home", "html", "css", "javascript", "examples"]);
    }

    #[test]
    fn nav_labels_are_fixed() {
        let labels: Vec<&str> = NAV_ITEMS.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Home", "HTML", "CSS", "JavaScript", "Examples"]);
    }

    #[test]
    fn found_section_becomes_active() {
        assert_eq!(next_active_section("home", "html", true), "html");
    }

    #[test]
    fn missing_section_leaves_active_section_unchanged() {
        assert_eq!(next_active_section("home", "nonexistent-id", false), "home");
    }

    #[test]
    fn navigation_attempts_track_through_the_signal() {
        let active_section = RwSignal::new("home");
        for (target, found, expected) in [
            ("html", true, "html"),
            ("nonexistent-id", false, "html"),
            ("examples", true, "examples"),
        ] {
            active_section
                .update(|current| *current = next_active_section(current, target, found));
            assert_eq!(active_section.get_untracked(), expected);
        }
    }
}
