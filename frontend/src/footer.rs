//! Site footer: brand column, link columns, newsletter field, legal bar.

use crate::router::{router, Route};
use aicare_ui::*;
use zoon::*;

pub fn footer() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Background::new().color_signal(neutral_2()))
        .s(Borders::new().top_signal(
            neutral_3().map(|color| Border::new().width(1).color(color)),
        ))
        .s(transition_colors())
        .item(
            Row::new()
                .multiline()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Padding::new().x(SPACING_24).y(SPACING_48))
                .s(Gap::new().x(SPACING_64).y(SPACING_32))
                .item(brand_column())
                .item(link_column(
                    "Products",
                    &[
                        ("Dx2D", Route::Products),
                        ("Dx3D", Route::Products),
                        ("MedScribe", Route::Products),
                        ("Rx Scan", Route::Products),
                        ("SearchDoc", Route::Products),
                    ],
                ))
                .item(link_column(
                    "Company",
                    &[
                        ("About Us", Route::About),
                        ("Our Team", Route::Team),
                        ("Products", Route::Products),
                        ("Contact Us", Route::Contact),
                    ],
                ))
                .item(newsletter_column()),
        )
        .item(legal_bar())
}

fn brand_column() -> impl Element {
    Column::new()
        .s(Width::fill().min(220).max(320))
        .s(Gap::new().y(SPACING_16))
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_10))
                .s(Align::new().left().center_y())
                .item(
                    El::new()
                        .s(Padding::all(SPACING_6))
                        .s(RoundedCorners::all(CORNER_RADIUS_8))
                        .s(Background::new().color_signal(primary_7()))
                        .child(
                            icon(IconName::HeartPulse)
                                .size(IconSize::Small)
                                .color(IconColor::Custom("oklch(100% 0 0)"))
                                .build(),
                        ),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_18)
                            .weight(FontWeight::Bold)
                            .color_signal(neutral_12()))
                        .child(Text::new("AI Care")),
                ),
        )
        .item(paragraph(
            "AI-powered healthcare solutions that enhance diagnostic accuracy and \
            streamline medical workflows.",
        ))
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_12))
                .s(Align::new().left())
                .item(social_icon(IconName::Github))
                .item(social_icon(IconName::Linkedin))
                .item(social_icon(IconName::Twitter)),
        )
}

fn social_icon(name: IconName) -> impl Element {
    El::new()
        .s(Padding::all(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_FULL))
        .s(Background::new().color_signal(neutral_3()))
        .s(transition_colors())
        .child(icon(name).size(IconSize::Small).color(IconColor::Secondary).build())
}

fn link_column(title: &'static str, links: &'static [(&'static str, Route)]) -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_10))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color_signal(neutral_12()))
                .child(Text::new(title)),
        )
        .items(
            links
                .iter()
                .map(|&(label, route)| footer_link(label, route)),
        )
}

fn footer_link(label: &'static str, route: Route) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);

    Button::new()
        .s(Background::new().color("transparent"))
        .s(Cursor::new(CursorIcon::Pointer))
        .s(Align::new().left())
        .s(Font::new()
            .size(FONT_SIZE_14)
            .color_signal(map_ref! {
                let hovered = hovered_signal,
                let hover_color = neutral_12(),
                let resting_color = neutral_8() =>
                if *hovered { *hover_color } else { *resting_color }
            }))
        .s(transition_colors())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(label))
        .on_press(move || router().go(route))
}

fn newsletter_column() -> impl Element {
    let email = Mutable::new(String::new());

    Column::new()
        .s(Width::fill().min(220).max(320))
        .s(Gap::new().y(SPACING_12))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color_signal(neutral_12()))
                .child(Text::new("Stay Updated")),
        )
        .item(small(
            "Get the latest updates on AI Care products and healthcare innovations.",
        ))
        .item(
            input(email)
                .kind(InputKind::Email)
                .placeholder("Enter your email")
                .build(),
        )
        .item(
            button()
                .label("Subscribe")
                .variant(ButtonVariant::Secondary)
                .size(ButtonSize::Small)
                .build(),
        )
}

fn legal_bar() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Borders::new().top_signal(
            neutral_3().map(|color| Border::new().width(1).color(color)),
        ))
        .item(
            Row::new()
                .multiline()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .s(Padding::new().x(SPACING_24).y(SPACING_16))
                .s(Gap::new().x(SPACING_24).y(SPACING_8))
                .item(small("© 2025 AI Care. All rights reserved."))
                .item(
                    El::new().s(Width::fill()).s(Align::new().right()).child(small(
                        "Backed by MIDL — National Center of Artificial Intelligence (NCAI)",
                    )),
                ),
        )
}
