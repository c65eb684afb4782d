//! About page: hero, mission, impact stats, journey timeline, values.

use super::{grid_item, section, section_header, tinted_section, GRID_COL_3};
use crate::data::{COMPANY_VALUES, IMPACT_STATS, JOURNEY};
use crate::reveal::{reveal, reveal_stagger};
use aicare_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(hero())
        .item(mission())
        .item(impact())
        .item(journey())
        .item(values())
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
                    .child(badge("About AI Care").variant(BadgeVariant::Primary).build()),
            )
            .item(El::new().s(Align::new().center_x()).child(h1("Healthcare AI, Built for Clinicians")))
            .item(lead(
                "AI Care develops medical imaging and documentation AI inside working \
                hospitals, so every model ships with the workflow it belongs to.",
            )),
    ))
}

fn mission() -> impl Element {
    section(
        Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_48).y(SPACING_32))
            .item(reveal(
                Column::new()
                    .s(Width::fill().min(420).max(560))
                    .s(Gap::new().y(SPACING_16))
                    .item(h2("Our Mission"))
                    .item(lead(
                        "To leverage cutting-edge artificial intelligence to enhance \
                        the accuracy, efficiency, and accessibility of medical imaging \
                        diagnostics and documentation.",
                    ))
                    .item(paragraph(
                        "We partner with radiology departments and national research \
                        labs to train, validate, and deploy models against real \
                        clinical data, then wrap them in tools clinicians can use \
                        without changing how they work.",
                    ))
                    .item(
                        Row::new()
                            .s(Gap::new().x(SPACING_12))
                            .item(badge("FDA Compliant").variant(BadgeVariant::Success).build())
                            .item(badge("HIPAA Secure").variant(BadgeVariant::Success).build()),
                    ),
            ))
            .item(reveal_stagger(
                1,
                El::new().s(Width::fill().min(320).max(480)).child(filled_card(
                    Column::new()
                        .s(Gap::new().y(SPACING_12))
                        .item(
                            icon(IconName::HeartPulse)
                                .size(IconSize::XLarge)
                                .color(IconColor::Primary)
                                .build(),
                        )
                        .item(h3("Why it matters"))
                        .item(paragraph(
                            "Radiology backlogs grow faster than the specialist \
                            workforce. Decision support that reads images in seconds \
                            gives that time back to patient care.",
                        )),
                )),
            )),
    )
}

fn impact() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Our Impact",
                "Measured Where It Counts",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(IMPACT_STATS.iter().enumerate().map(|(index, stat)| {
                        grid_item(
                            255,
                            reveal_stagger(
                                index,
                                card(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_4))
                                        .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
                                        .item(
                                            El::new()
                                                .s(Align::new().center_x())
                                                .s(Font::new()
                                                    .size(FONT_SIZE_36)
                                                    .weight(FontWeight::Bold)
                                                    .color_signal(primary_7()))
                                                .child(Text::new(stat.value)),
                                        )
                                        .item(
                                            El::new()
                                                .s(Align::new().center_x())
                                                .child(small(stat.label)),
                                        ),
                                ),
                            ),
                        )
                    })),
            ),
    )
}

fn journey() -> impl Element {
    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Our Journey",
                "From Lab to Hospitals Worldwide",
                None,
            )))
            .item(
                Column::new()
                    .s(Width::fill().max(760))
                    .s(Align::new().center_x())
                    .s(Gap::new().y(SPACING_24))
                    .items(JOURNEY.iter().enumerate().map(|(index, milestone)| {
                        reveal_stagger(
                            index,
                            Row::new()
                                .s(Width::fill())
                                .s(Gap::new().x(SPACING_24))
                                .item(
                                    El::new()
                                        .s(Width::exact(56))
                                        .s(Height::exact(56))
                                        .s(Align::new().top())
                                        .s(RoundedCorners::all(CORNER_RADIUS_FULL))
                                        .s(Background::new().color_signal(primary_7()))
                                        .s(transition_colors())
                                        .child(
                                            El::new()
                                                .s(Align::center())
                                                .s(Font::new()
                                                    .size(FONT_SIZE_18)
                                                    .weight(FontWeight::Bold)
                                                    .color("oklch(100% 0 0)"))
                                                .child(Text::new(milestone.phase)),
                                        ),
                                )
                                .item(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_6))
                                        .item(h3(milestone.title))
                                        .item(paragraph(milestone.description)),
                                ),
                        )
                    })),
            ),
    )
}

fn values() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Our Values",
                "What Guides Every Release",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(COMPANY_VALUES.iter().enumerate().map(|(index, value)| {
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
                                                    icon(value.icon)
                                                        .size(IconSize::Medium)
                                                        .color(IconColor::Primary)
                                                        .build(),
                                                ),
                                        )
                                        .item(h4(value.title))
                                        .item(paragraph(value.description)),
                                ),
                            ),
                        )
                    })),
            ),
    )
}
