//! Entrance animations: sections fade in and rise as they mount, the same
//! rhythm the design tokens use for interaction feedback.

use aicare_ui::*;
use zoon::*;

/// Delay step for staggered grids: item N starts N steps later.
pub const STAGGER_STEP_MS: u32 = 120;

pub fn reveal(element: impl Element) -> impl Element {
    reveal_delayed(0, element)
}

pub fn reveal_stagger(index: usize, element: impl Element) -> impl Element {
    reveal_delayed(index as u32 * STAGGER_STEP_MS, element)
}

pub fn reveal_delayed(delay_ms: u32, element: impl Element) -> impl Element {
    let shown = Mutable::new(false);

    El::new()
        .s(Width::fill())
        .s(Transitions::new([
            Transition::property("opacity").duration(DURATION_REVEAL),
            Transition::property("transform").duration(DURATION_REVEAL),
        ]))
        .update_raw_el({
            let shown = shown.clone();
            move |raw_el| {
                raw_el
                    .style_signal(
                        "opacity",
                        shown.signal().map(|shown| {
                            if shown {
                                OPACITY_OPAQUE
                            } else {
                                OPACITY_NONE
                            }
                        }),
                    )
                    .style_signal(
                        "transform",
                        shown.signal().map(|shown| {
                            if shown {
                                "translateY(0)"
                            } else {
                                "translateY(16px)"
                            }
                        }),
                    )
            }
        })
        .after_insert(move |_| {
            Task::start(async move {
                Timer::sleep(delay_ms).await;
                shown.set_neq(true);
            });
        })
        .child(element)
}
