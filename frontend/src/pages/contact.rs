//! Contact page: header, form + global contact info, offices, product FAQ.

use super::{grid_item, section, section_header, tinted_section};
use crate::contact_form::ContactForm;
use crate::data::{FAQ_CATEGORIES, OFFICES};
use crate::reveal::{reveal, reveal_stagger};
use aicare_ui::*;
use zoon::*;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(header())
        .item(form_and_info())
        .item(offices())
        .item(faq())
}

fn header() -> impl Element {
    tinted_section(reveal(
        Column::new()
            .s(Width::fill().max(760))
            .s(Align::new().center_x())
            .s(Gap::new().y(SPACING_20))
            .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(badge("Contact").variant(BadgeVariant::Primary).build()),
            )
            .item(El::new().s(Align::new().center_x()).child(h1("Get In Touch")))
            .item(lead(
                "Questions about a product, a deployment, or a research \
                collaboration? We respond within one business day.",
            )),
    ))
}

fn form_and_info() -> impl Element {
    section(
        Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_48).y(SPACING_48))
            .item(
                El::new()
                    .s(Width::fill().min(420).max(534))
                    .child(reveal(card(ContactForm::new().view()))),
            )
            .item(
                El::new()
                    .s(Width::fill().min(360).max(510))
                    .child(reveal_stagger(1, contact_info())),
            ),
    )
}

fn contact_info() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_24))
        .item(h3("Global Contact Information"))
        .item(info_item(
            IconName::Building,
            "Headquarters",
            "High End Computing Lab, Comsats University Islamabad, Islamabad, Pakistan",
        ))
        .item(info_item(
            IconName::Phone,
            "Phone & Support",
            "+1 (555) 123-4567 — Mon-Fri 8AM–6PM PST | 24/7 Emergency Support",
        ))
        .item(info_item(
            IconName::Mail,
            "Email",
            "info@aicare.com · support@aicare.com",
        ))
        .item(info_item(
            IconName::Clock,
            "Business Hours",
            "Monday - Friday: 8:00 AM – 6:00 PM · Saturday: 9:00 AM – 2:00 PM · Sunday: Closed",
        ))
}

fn info_item(icon_name: IconName, title: &'static str, body: &'static str) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .item(
            El::new()
                .s(Padding::all(SPACING_10))
                .s(Align::new().top())
                .s(RoundedCorners::all(CORNER_RADIUS_12))
                .s(Background::new().color_signal(primary_2()))
                .s(transition_colors())
                .child(icon(icon_name).size(IconSize::Medium).color(IconColor::Primary).build()),
        )
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(SPACING_4))
                .item(h4(title))
                .item(paragraph(body)),
        )
}

fn offices() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Offices",
                "Where to Find Us",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(OFFICES.iter().enumerate().map(|(index, office)| {
                        grid_item(
                            super::GRID_COL_2,
                            reveal_stagger(
                                index,
                                card(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_8))
                                        .item(
                                            Row::new()
                                                .s(Gap::new().x(SPACING_10))
                                                .s(Align::new().center_y())
                                                .item(
                                                    icon(IconName::MapPin)
                                                        .size(IconSize::Medium)
                                                        .color(IconColor::Primary)
                                                        .build(),
                                                )
                                                .item(h4(office.region)),
                                        )
                                        .item(badge(office.kind).variant(BadgeVariant::Primary).build())
                                        .item(paragraph(office.address)),
                                ),
                            ),
                        )
                    })),
            ),
    )
}

fn faq() -> impl Element {
    section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "FAQ",
                "Frequently Asked Questions",
                Some("Grouped by product, with the general questions first."),
            )))
            .item(
                Column::new()
                    .s(Width::fill().max(760))
                    .s(Align::new().center_x())
                    .s(Gap::new().y(SPACING_32))
                    .items(FAQ_CATEGORIES.iter().map(|category| {
                        Column::new()
                            .s(Width::fill())
                            .s(Gap::new().y(SPACING_12))
                            .item(h3(category.title))
                            .item(
                                accordion()
                                    .items(category.entries.iter().map(|entry| {
                                        AccordionItem::new(entry.question, entry.answer)
                                    }))
                                    .build(),
                            )
                    })),
            ),
    )
}
