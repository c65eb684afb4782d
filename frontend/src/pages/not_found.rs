//! Catch-all page for unknown paths. Rendered without the site chrome; the
//! only way out is the home button.

use crate::reveal::{reveal, reveal_stagger};
use crate::router::{router, Route};
use aicare_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::screen())
        .s(Background::new().color_signal(neutral_1()))
        .s(transition_colors())
        .child(
            Column::new()
                .s(Width::fill().max(640))
                .s(Align::center())
                .s(Padding::all(SPACING_24))
                .s(Gap::new().y(SPACING_24))
                .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
                .item(reveal(
                    El::new()
                        .s(Align::new().center_x())
                        .s(Font::new().size(FONT_SIZE_96).weight(FontWeight::Bold))
                        .update_raw_el(|raw_el| {
                            raw_el
                                .style(
                                    "background-image",
                                    "linear-gradient(135deg, oklch(60% 0.2 295), oklch(40% 0.19 295))",
                                )
                                .style("-webkit-background-clip", "text")
                                .style("background-clip", "text")
                                .style("color", "transparent")
                        })
                        .child(Text::new("404")),
                ))
                .item(reveal_stagger(
                    1,
                    El::new()
                        .s(Align::new().center_x())
                        .child(h2("Neural Network Disruption Detected")),
                ))
                .item(reveal_stagger(
                    2,
                    lead(
                        "Our AI algorithms can't locate the page you've requested. It \
                        may have been moved, deleted, or exists in an alternate \
                        dimension outside our current data architecture.",
                    ),
                ))
                .item(reveal_stagger(3, diagnostic_card()))
                .item(reveal_stagger(
                    4,
                    El::new().s(Align::new().center_x()).child(
                        button()
                            .label("Return Home")
                            .variant(ButtonVariant::Primary)
                            .size(ButtonSize::Large)
                            .left_icon(IconName::HeartPulse)
                            .on_press(|| router().go(Route::Intro))
                            .build(),
                    ),
                )),
        )
}

fn diagnostic_card() -> impl Element {
    card(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_8))
            .update_raw_el(|raw_el| raw_el.style("text-align", "left"))
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .weight(FontWeight::Number(FONT_WEIGHT_6))
                        .color_signal(neutral_10()))
                    .child(Text::new("Diagnostic Report")),
            )
            .item(diagnostic_row("Error Code:", "404_PAGE_NOT_FOUND"))
            .item(diagnostic_row("Path:", current_path()))
            .item(diagnostic_row("Status:", "Failed"))
    )
}

fn diagnostic_row(label: &'static str, value: impl Into<String>) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .item(
            El::new()
                .s(Width::fill())
                .s(font_mono())
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8()))
                .child(Text::new(label)),
        )
        .item(
            El::new()
                .s(font_mono())
                .s(Font::new().size(FONT_SIZE_14).color_signal(primary_7()))
                .child(Text::new(value.into())),
        )
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|window| window.location().pathname().ok())
        .unwrap_or_else(|| "/".to_owned())
}
