// Card Component
// Surface containers for product cards, partner cards, team cards, and the
// contact panels. Helpers take their content directly so pages compose them
// like any other element.

use crate::tokens::*;
use zoon::*;

/// Bordered surface on the section background.
pub fn card(child: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_24))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(neutral_2()))
        .s(Borders::all_signal(
            neutral_3().map(|color| Border::new().width(1).color(color)),
        ))
        .s(transition_colors())
        .child(child)
}

/// Shadowed surface that lifts on hover; used for interactive grids.
pub fn elevated_card(child: impl Element) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);

    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Padding::all(SPACING_24))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color_signal(neutral_2()))
        .s(Borders::all_signal(
            neutral_3().map(|color| Border::new().width(1).color(color)),
        ))
        .s(Shadows::with_signal(map_ref! {
            let hovered = hovered_signal,
            let theme = theme() =>
            card_shadows(*theme, *hovered)
        }))
        .s(transition_normal())
        .update_raw_el({
            let hovered = hovered.clone();
            move |raw_el| {
                raw_el.style_signal(
                    "transform",
                    hovered.signal().map(|is_hovered| {
                        if is_hovered {
                            "translateY(-4px)"
                        } else {
                            "translateY(0)"
                        }
                    }),
                )
            }
        })
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .child(child)
}

/// Accent-tinted surface; CTA banners and highlight panels.
pub fn filled_card(child: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_32))
        .s(RoundedCorners::all(CORNER_RADIUS_16))
        .s(Background::new().color_signal(neutral_3()))
        .s(transition_colors())
        .child(child)
}
