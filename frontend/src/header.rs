//! Sticky site header: wordmark, nav links with an active underline, and
//! the light/dark toggle.

use crate::app::{self, PageId};
use crate::router::{router, Route};
use aicare_ui::*;
use zoon::*;

const NAV_ITEMS: &[(&str, Route, PageId)] = &[
    ("Intro", Route::Intro, PageId::Intro),
    ("About", Route::About, PageId::About),
    ("Products", Route::Products, PageId::Products),
    ("Team", Route::Team, PageId::Team),
    ("Contact", Route::Contact, PageId::Contact),
];

pub fn header() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Borders::new().bottom_signal(
            neutral_3().map(|color| Border::new().width(1).color(color)),
        ))
        .s(transition_colors())
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "sticky")
                .style("top", "0")
                .style("z-index", "50")
                .style("backdrop-filter", "blur(12px)")
        })
        .s(Background::new().color_signal(theme().map(|t| match t {
            Theme::Light => "oklch(99% 0.005 255 / 0.85)",
            Theme::Dark => "oklch(15% 0.01 285 / 0.85)",
        })))
        .child(
            Row::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Padding::new().x(SPACING_24).y(SPACING_12))
                .s(Gap::new().x(SPACING_32))
                .item(logo())
                .item(nav())
                .item(theme_toggle()),
        )
}

fn logo() -> impl Element {
    Button::new()
        .s(Background::new().color("transparent"))
        .s(Cursor::new(CursorIcon::Pointer))
        .label(
            Row::new()
                .s(Gap::new().x(SPACING_10))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Padding::all(SPACING_8))
                        .s(RoundedCorners::all(CORNER_RADIUS_8))
                        .s(Background::new().color_signal(primary_7()))
                        .s(transition_colors())
                        .child(
                            icon(IconName::HeartPulse)
                                .size(IconSize::Medium)
                                .color(IconColor::Custom("oklch(100% 0 0)"))
                                .build(),
                        ),
                )
                .item(
                    El::new()
                        .s(font_sans())
                        .s(Font::new()
                            .size(FONT_SIZE_20)
                            .weight(FontWeight::Bold)
                            .color_signal(neutral_12()))
                        .s(transition_colors())
                        .child(Text::new("AI Care")),
                ),
        )
        .on_press(|| router().go(Route::Intro))
}

fn nav() -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_24))
        .s(Align::new().center_x())
        .items(
            NAV_ITEMS
                .iter()
                .map(|&(label, route, page_id)| nav_link(label, route, page_id)),
        )
}

fn nav_link(label: &'static str, route: Route, page_id: PageId) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);

    Button::new()
        .s(Background::new().color("transparent"))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Padding::new().y(SPACING_6))
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_16)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(map_ref! {
                let current = app::page_id(),
                let hovered = hovered_signal,
                let active_color = neutral_12(),
                let resting_color = neutral_8() =>
                if *current == page_id || *hovered {
                    *active_color
                } else {
                    *resting_color
                }
            }))
        .s(Borders::new().bottom_signal(map_ref! {
            let current = app::page_id(),
            let underline = neutral_12() =>
            Border::new().width(2).color(if *current == page_id {
                *underline
            } else {
                "transparent"
            })
        }))
        .s(transition_colors())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(label))
        .on_press(move || router().go(route))
}

fn theme_toggle() -> impl Element {
    Button::new()
        .s(Padding::all(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_FULL))
        .s(Background::new().color("transparent"))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Align::new().center_y())
        .update_raw_el(|raw_el| raw_el.attr("aria-label", "Toggle color theme"))
        .label(El::new().child_signal(theme().map(|t| {
            icon(match t {
                // Offer the mode the click switches to
                Theme::Light => IconName::Moon,
                Theme::Dark => IconName::Sun,
            })
            .size(IconSize::Large)
            .color(IconColor::Secondary)
            .build()
        })))
        .on_press(toggle_theme)
}
