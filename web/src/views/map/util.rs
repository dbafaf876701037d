use crate::registry::PlaceId;

/// Pin icon with `number` drawn in its head, as an inline SVG data URL.
pub fn numbered_marker_icon(number: usize, selected: bool) -> String {
    let fill = if selected { "%23f97316" } else { "%232563eb" };
    let font_size = if number > 99 { 9 } else { 12 };

    format!(
        "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='30' height='42' viewBox='0 0 30 42'%3E%3Cdefs%3E%3Cfilter id='shadow' x='-50%25' y='-50%25' width='200%25' height='200%25'%3E%3CfeDropShadow dx='0' dy='1' stdDeviation='1.5' flood-color='%23000' flood-opacity='0.25'/%3E%3C/filter%3E%3C/defs%3E%3Cpath fill='{fill}' stroke='%23ffffff' stroke-width='1.5' filter='url(%23shadow)' d='M15 2C8.4 2 3 7.4 3 14c0 9.5 12 26 12 26s12-16.5 12-26C27 7.4 21.6 2 15 2z'/%3E%3Ccircle cx='15' cy='14' r='8' fill='%23ffffff'/%3E%3Ctext x='15' y='{text_y}' text-anchor='middle' font-family='Arial, sans-serif' font-size='{font_size}' font-weight='bold' fill='%23111827'%3E{number}%3C/text%3E%3C/svg%3E",
        text_y = 14 + font_size / 3,
    )
}

/// Smooth-scrolls the sidebar card for `id` into view. Does nothing outside
/// the browser.
pub fn scroll_card_into_view(id: PlaceId) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(card) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(&id.card_dom_id()))
        else {
            leptos::logging::warn!("No sidebar card for place {id}");
            return;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        card.scroll_into_view_with_scroll_into_view_options(&options);
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_carries_number() {
        let icon = numbered_marker_icon(7, false);
        assert!(icon.starts_with("data:image/svg+xml,"));
        assert!(icon.contains("%3E7%3C/text%3E"));
        assert!(icon.contains("%232563eb"));
    }

    #[test]
    fn selected_icon_changes_colour() {
        assert!(numbered_marker_icon(1, true).contains("%23f97316"));
        assert_ne!(numbered_marker_icon(1, true), numbered_marker_icon(1, false));
    }

    #[test]
    fn three_digit_numbers_shrink() {
        assert!(numbered_marker_icon(120, false).contains("font-size='9'"));
        assert!(numbered_marker_icon(12, false).contains("font-size='12'"));
    }
}
