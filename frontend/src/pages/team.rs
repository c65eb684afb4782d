//! Team page: leadership, team members, advisory board, culture, join CTA.

use super::{grid_item, intro::avatar_circle, section, section_header, tinted_section, GRID_COL_3};
use crate::data::{ADVISORS, CULTURE_VALUES, LEADERSHIP, TEAM_MEMBERS};
use crate::reveal::{reveal, reveal_stagger};
use crate::router::{router, Route};
use aicare_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(hero())
        .item(leadership())
        .item(members())
        .item(advisory_board())
        .item(culture())
        .item(join_cta())
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
                    .child(badge("Our Team").variant(BadgeVariant::Primary).build()),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(h1("The People Behind the Platform")),
            )
            .item(lead(
                "Physicians, researchers, and engineers with one shared standard: \
                if it wouldn't be trusted in our own clinics, it doesn't ship.",
            )),
    ))
}

fn leadership() -> impl Element {
    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Leadership",
                "Leadership Team",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(LEADERSHIP.iter().enumerate().map(|(index, leader)| {
                        grid_item(
                            super::GRID_COL_2,
                            reveal_stagger(index % 2, leader_card(leader)),
                        )
                    })),
            ),
    )
}

fn leader_card(leader: &crate::data::Leader) -> impl Element {
    let specialties = leader.specialties;

    elevated_card(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_12))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_16))
                    .s(Align::new().center_y())
                    .item(avatar_circle(leader.name))
                    .item(
                        Column::new()
                            .s(Gap::new().y(SPACING_2))
                            .item(h4(leader.name))
                            .item(
                                El::new()
                                    .s(Font::new()
                                        .size(FONT_SIZE_14)
                                        .weight(FontWeight::Number(FONT_WEIGHT_6))
                                        .color_signal(primary_7()))
                                    .child(Text::new(leader.role)),
                            )
                            .item(small(leader.education)),
                    ),
            )
            .item(paragraph(leader.bio))
            .item(
                Row::new()
                    .multiline()
                    .s(Gap::new().x(SPACING_8).y(SPACING_8))
                    .items(specialties.iter().map(|specialty| {
                        badge(*specialty).variant(BadgeVariant::Neutral).build()
                    })),
            ),
    )
}

fn members() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Our Team",
                "Talented Professionals Across All Departments",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(TEAM_MEMBERS.iter().enumerate().map(|(index, member)| {
                        grid_item(
                            GRID_COL_3,
                            reveal_stagger(
                                index % 3,
                                card(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_8))
                                        .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
                                        .item(avatar_circle(member.name))
                                        .item(
                                            El::new()
                                                .s(Align::new().center_x())
                                                .child(h4(member.name)),
                                        )
                                        .item(
                                            El::new()
                                                .s(Align::new().center_x())
                                                .s(Font::new()
                                                    .size(FONT_SIZE_14)
                                                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                                                    .color_signal(primary_7()))
                                                .child(Text::new(member.role)),
                                        )
                                        .item(
                                            El::new()
                                                .s(Align::new().center_x())
                                                .child(badge(member.department).variant(BadgeVariant::Neutral).build()),
                                        ),
                                ),
                            ),
                        )
                    })),
            ),
    )
}

fn advisory_board() -> impl Element {
    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Advisory Board",
                "Guidance From the Front Lines",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(ADVISORS.iter().enumerate().map(|(index, advisor)| {
                        grid_item(
                            GRID_COL_3,
                            reveal_stagger(
                                index,
                                card(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_6))
                                        .item(h4(advisor.name))
                                        .item(
                                            El::new()
                                                .s(Font::new()
                                                    .size(FONT_SIZE_14)
                                                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                                                    .color_signal(primary_7()))
                                                .child(Text::new(advisor.role)),
                                        )
                                        .item(small(advisor.affiliation)),
                                ),
                            ),
                        )
                    })),
            ),
    )
}

fn culture() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Our Culture",
                "What Makes AI Care a Great Place to Work",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(CULTURE_VALUES.iter().enumerate().map(|(index, value)| {
                        grid_item(
                            255,
                            reveal_stagger(
                                index,
                                card(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_8))
                                        .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
                                        .item(
                                            El::new()
                                                .s(Padding::all(SPACING_10))
                                                .s(Align::new().center_x())
                                                .s(RoundedCorners::all(CORNER_RADIUS_FULL))
                                                .s(Background::new().color_signal(primary_2()))
                                                .child(
                                                    icon(value.icon)
                                                        .size(IconSize::Medium)
                                                        .color(IconColor::Primary)
                                                        .build(),
                                                ),
                                        )
                                        .item(
                                            El::new()
                                                .s(Align::new().center_x())
                                                .child(h4(value.title)),
                                        )
                                        .item(small(value.description)),
                                ),
                            ),
                        )
                    })),
            ),
    )
}

fn join_cta() -> impl Element {
    section(reveal(filled_card(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_20))
            .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
            .item(El::new().s(Align::new().center_x()).child(h2("Join Our Team")))
            .item(El::new().s(Align::new().center_x()).s(Width::fill().max(640)).child(lead(
                "We hire people who care about patients first and publish second. \
                Tell us what you want to build.",
            )))
            .item(
                El::new().s(Align::new().center_x()).child(
                    button()
                        .label("Get In Touch")
                        .variant(ButtonVariant::Primary)
                        .size(ButtonSize::Large)
                        .on_press(|| router().go(Route::Contact))
                        .build(),
                ),
            ),
    )))
}
