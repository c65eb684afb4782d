//! Products page: hero, the full product grid, integrations, closing CTA.

use super::{grid_item, section, section_header, tag_badge, tinted_section, GRID_COL_3};
use crate::data::{INTEGRATIONS, PRODUCTS};
use crate::reveal::{reveal, reveal_stagger};
use crate::router::{router, Route};
use aicare_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(hero())
        .item(product_grid())
        .item(integrations())
        .item(cta())
}

fn hero() -> impl Element {
    tinted_section(reveal(
        Column::new()
            .s(Width::fill().max(760))
            .s(Align::new().center_x())
            .s(Gap::new().y(SPACING_20))
            .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(badge("Our Products").variant(BadgeVariant::Primary).build()),
            )
            .item(El::new().s(Align::new().center_x()).child(h1("Core AI Solutions")))
            .item(lead(
                "One platform, six products: imaging diagnostics, screening, \
                documentation, and prescription intelligence that plug into the \
                systems hospitals already run.",
            )),
    ))
}

fn product_grid() -> impl Element {
    section(
        Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_24).y(SPACING_24))
            .items(PRODUCTS.iter().enumerate().map(|(index, product)| {
                grid_item(
                    GRID_COL_3,
                    reveal_stagger(index % 3, product_card(product)),
                )
            })),
    )
}

fn product_card(product: &crate::data::Product) -> impl Element {
    let features = product.features;

    elevated_card(
        Column::new()
            .s(Width::fill())
            .s(Height::fill())
            .s(Gap::new().y(SPACING_12))
            .item(
                Row::new()
                    .s(Width::fill())
                    .item(
                        El::new()
                            .s(Padding::all(SPACING_12))
                            .s(RoundedCorners::all(CORNER_RADIUS_12))
                            .s(Background::new().color_signal(primary_2()))
                            .s(transition_colors())
                            .child(
                                icon(product.icon)
                                    .size(IconSize::Large)
                                    .color(IconColor::Primary)
                                    .build(),
                            ),
                    )
                    .item(tag_badge(product.tag)),
            )
            .item(h3(product.name))
            .item(
                El::new()
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .weight(FontWeight::Number(FONT_WEIGHT_6))
                        .color_signal(primary_7()))
                    .s(transition_colors())
                    .child(Text::new(product.subtitle)),
            )
            .item(paragraph(product.description))
            .item(
                Column::new()
                    .s(Gap::new().y(SPACING_6))
                    .items(features.into_iter().map(|feature| {
                        Row::new()
                            .s(Gap::new().x(SPACING_8))
                            .s(Align::new().center_y())
                            .item(
                                icon(IconName::Check)
                                    .size(IconSize::Small)
                                    .color(IconColor::Success)
                                    .build(),
                            )
                            .item(small(feature))
                    })),
            ),
    )
}

fn integrations() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Integrations",
                "Works With Your Existing Stack",
                Some(
                    "Deployment doesn't start from zero. Every product speaks the \
                    protocols your infrastructure already uses.",
                ),
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(INTEGRATIONS.iter().enumerate().map(|(index, integration)| {
                        grid_item(
                            GRID_COL_3,
                            reveal_stagger(
                                index,
                                card(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_10))
                                        .item(
                                            El::new()
                                                .s(Padding::all(SPACING_10))
                                                .s(Align::new().left())
                                                .s(RoundedCorners::all(CORNER_RADIUS_12))
                                                .s(Background::new().color_signal(primary_2()))
                                                .child(
                                                    icon(integration.icon)
                                                        .size(IconSize::Medium)
                                                        .color(IconColor::Primary)
                                                        .build(),
                                                ),
                                        )
                                        .item(h4(integration.title))
                                        .item(paragraph(integration.description)),
                                ),
                            ),
                        )
                    })),
            ),
    )
}

fn cta() -> impl Element {
    section(reveal(filled_card(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_20))
            .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(h2("See the Platform on Your Own Cases")),
            )
            .item(El::new().s(Align::new().center_x()).s(Width::fill().max(640)).child(lead(
                "Bring a handful of anonymized studies and we'll walk your team \
                through a live evaluation.",
            )))
            .item(
                El::new().s(Align::new().center_x()).child(
                    button()
                        .label("Request a Demo")
                        .variant(ButtonVariant::Primary)
                        .size(ButtonSize::Large)
                        .right_icon(IconName::ArrowRight)
                        .on_press(|| router().go(Route::Contact))
                        .build(),
                ),
            ),
    )))
}
