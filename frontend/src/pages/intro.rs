//! Landing page: hero, partners, feature story, solutions grid, CTA,
//! team preview, and a contact strip.

use super::{grid_item, section, section_header, tag_badge, tinted_section, GRID_COL_3};
use crate::data::{HERO_STATS, HERO_WORDS, INTRO_TEAM, PRODUCTS};
use crate::reveal::{reveal, reveal_stagger};
use crate::router::{router, Route};
use aicare_ui::*;
use zoon::*;

const WORD_CYCLE_MS: u32 = 3_000;

pub fn page() -> impl Element {
    Column::new()
        .s(Width::fill())
        .item(hero())
        .item(backed_by())
        .item(revolutionizing())
        .item(solutions())
        .item(cta_banner())
        .item(team_preview())
        .item(join_mission())
        .item(contact_strip())
}

// ---- Hero ----

fn hero() -> impl Element {
    section(
        Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_48).y(SPACING_48))
            .item(reveal(hero_copy()))
            .item(reveal_stagger(2, dashboard_mockup())),
    )
}

fn hero_copy() -> impl Element {
    let word_index = Mutable::new(0_usize);
    let cycle = Task::start_droppable({
        let word_index = word_index.clone();
        async move {
            loop {
                Timer::sleep(WORD_CYCLE_MS).await;
                word_index.update(|index| (index + 1) % HERO_WORDS.len());
            }
        }
    });

    Column::new()
        .s(Width::fill().min(420).max(520))
        .s(Gap::new().y(SPACING_32))
        .after_remove(move |_| drop(cycle))
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_4))
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_60).weight(FontWeight::Bold))
                        .update_raw_el(|raw_el| {
                            raw_el
                                .style(
                                    "background-image",
                                    "linear-gradient(90deg, oklch(60% 0.2 295), oklch(40% 0.19 295))",
                                )
                                .style("-webkit-background-clip", "text")
                                .style("background-clip", "text")
                                .style("color", "transparent")
                        })
                        .child_signal(
                            word_index
                                .signal()
                                .map(|index| reveal(Text::new(HERO_WORDS[index]))),
                        ),
                )
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_60)
                            .weight(FontWeight::Bold)
                            .color_signal(neutral_12()))
                        .s(transition_colors())
                        .child(Text::new("Reinvented.")),
                ),
        )
        .item(lead("Your AI-powered care companion, backed by NCAI"))
        .item(
            Row::new()
                .multiline()
                .s(Gap::new().x(SPACING_24).y(SPACING_12))
                .items(HERO_STATS.iter().enumerate().map(|(index, stat)| {
                    let dot_color = ["oklch(65% 0.18 145)", "oklch(60% 0.16 250)", "oklch(60% 0.2 295)"]
                        [index % 3];
                    Row::new()
                        .s(Gap::new().x(SPACING_8))
                        .s(Align::new().center_y())
                        .item(
                            El::new()
                                .s(Width::exact(10))
                                .s(Height::exact(10))
                                .s(RoundedCorners::all(CORNER_RADIUS_FULL))
                                .s(Background::new().color(dot_color)),
                        )
                        .item(paragraph(*stat))
                })),
        )
        .item(
            Row::new()
                .multiline()
                .s(Gap::new().x(SPACING_16).y(SPACING_12))
                .item(
                    button()
                        .label("Get Started")
                        .variant(ButtonVariant::Primary)
                        .size(ButtonSize::Large)
                        .on_press(|| router().go(Route::Contact))
                        .build(),
                )
                .item(
                    button()
                        .label("Explore Products")
                        .variant(ButtonVariant::Ghost)
                        .size(ButtonSize::Large)
                        .right_icon(IconName::ArrowRight)
                        .on_press(|| router().go(Route::Products))
                        .build(),
                ),
        )
}

fn dashboard_mockup() -> impl Element {
    El::new()
        .s(Width::fill().min(360).max(480))
        .s(Padding::all(SPACING_10))
        .s(RoundedCorners::all(CORNER_RADIUS_24))
        .s(Background::new().color("oklch(10% 0.01 285)"))
        .s(Shadows::with_signal(shadow_raised()))
        .child(
            Column::new()
                .s(Width::fill())
                .s(Padding::all(SPACING_24))
                .s(Gap::new().y(SPACING_16))
                .s(RoundedCorners::all(CORNER_RADIUS_16))
                // The mockup screen stays light in both themes
                .s(Background::new().color("oklch(99% 0.005 255)"))
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Align::new().center_y())
                        .item(
                            El::new()
                                .s(Width::fill())
                                .s(Font::new()
                                    .size(FONT_SIZE_18)
                                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                                    .color("oklch(18% 0.02 255)"))
                                .child(Text::new("AI Care Dashboard")),
                        )
                        .item(
                            El::new()
                                .s(Padding::all(SPACING_6))
                                .s(RoundedCorners::all(CORNER_RADIUS_FULL))
                                .s(Background::new().color("oklch(60% 0.2 295)"))
                                .child(
                                    icon(IconName::Activity)
                                        .size(IconSize::Small)
                                        .color(IconColor::Custom("oklch(100% 0 0)"))
                                        .build(),
                                ),
                        ),
                )
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(SPACING_12))
                        .item(mockup_stat_card(
                            "AI Diagnosis",
                            "Active",
                            "oklch(95% 0.03 250)",
                            IconName::FileText,
                            "oklch(55% 0.16 250)",
                        ))
                        .item(mockup_stat_card(
                            "Health Monitor",
                            "Online",
                            "oklch(95% 0.04 145)",
                            IconName::Shield,
                            "oklch(55% 0.15 145)",
                        )),
                )
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Padding::all(SPACING_16))
                        .s(Gap::new().x(SPACING_12))
                        .s(RoundedCorners::all(CORNER_RADIUS_12))
                        .s(Background::new().color("oklch(94% 0.015 255)"))
                        .s(Align::new().center_y())
                        .item(
                            El::new()
                                .s(Padding::all(SPACING_10))
                                .s(RoundedCorners::all(CORNER_RADIUS_FULL))
                                .s(Background::new().color("oklch(60% 0.2 295)"))
                                .child(
                                    icon(IconName::Users)
                                        .size(IconSize::Medium)
                                        .color(IconColor::Custom("oklch(100% 0 0)"))
                                        .build(),
                                ),
                        )
                        .item(
                            Column::new()
                                .s(Width::fill())
                                .s(Gap::new().y(SPACING_2))
                                .item(
                                    El::new()
                                        .s(Font::new()
                                            .size(FONT_SIZE_16)
                                            .weight(FontWeight::Number(FONT_WEIGHT_6))
                                            .color("oklch(18% 0.02 255)"))
                                        .child(Text::new("Dr. Sarah Chen")),
                                )
                                .item(
                                    El::new()
                                        .s(Font::new().size(FONT_SIZE_14).color("oklch(45% 0.02 255)"))
                                        .child(Text::new(
                                            "Cardiologist — next appointment tomorrow at 2:00 PM",
                                        )),
                                ),
                        ),
                ),
        )
}

fn mockup_stat_card(
    title: &'static str,
    status: &'static str,
    bg: &'static str,
    icon_name: IconName,
    icon_bg: &'static str,
) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_16))
        .s(Gap::new().y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_12))
        .s(Background::new().color(bg))
        .item(
            El::new()
                .s(Padding::all(SPACING_8))
                .s(Align::new().left())
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .s(Background::new().color(icon_bg))
                .child(
                    icon(icon_name)
                        .size(IconSize::Small)
                        .color(IconColor::Custom("oklch(100% 0 0)"))
                        .build(),
                ),
        )
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color("oklch(25% 0.02 255)"))
                .child(Text::new(title)),
        )
        .item(
            Row::new()
                .s(Gap::new().x(SPACING_6))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Width::exact(8))
                        .s(Height::exact(8))
                        .s(RoundedCorners::all(CORNER_RADIUS_FULL))
                        .s(Background::new().color("oklch(65% 0.18 145)")),
                )
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_12).color("oklch(40% 0.02 255)"))
                        .child(Text::new(status)),
                ),
        )
}

// ---- Backed by ----

fn backed_by() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Trusted Partnership",
                "Backed by Leading AI Institutions",
                Some(
                    "AI Care is built inside national research programs, pairing \
                    clinical partners with dedicated AI research groups.",
                ),
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .item(grid_item(
                        super::GRID_COL_2,
                        reveal_stagger(
                            0,
                            partner_card(
                                IconName::Building,
                                "MIDL",
                                "Medical Imaging and Data Analytics Lab",
                                "Applied research lab focused on medical imaging \
                                pipelines, model validation, and clinical deployment.",
                                "Active Partnership",
                            ),
                        ),
                    ))
                    .item(grid_item(
                        super::GRID_COL_2,
                        reveal_stagger(
                            1,
                            partner_card(
                                IconName::Lightbulb,
                                "NCAI",
                                "National Center of Artificial Intelligence",
                                "National research center advancing AI across \
                                healthcare, with labs at Comsats University Islamabad.",
                                "Research Partner",
                            ),
                        ),
                    )),
            )
            .item(reveal(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_48).y(SPACING_16))
                    .s(Align::new().center_x())
                    .item(compliance_stat(IconName::Lightbulb, "$2.5M+", "Research Funding"))
                    .item(compliance_stat(IconName::Users, "50+", "AI Researchers"))
                    .item(compliance_stat(IconName::Globe, "15+", "Countries Reached")),
            )),
    )
}

fn partner_card(
    icon_name: IconName,
    name: &'static str,
    full_name: &'static str,
    description: &'static str,
    status: &'static str,
) -> impl Element {
    elevated_card(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_12))
            .item(
                Row::new()
                    .s(Gap::new().x(SPACING_12))
                    .s(Align::new().center_y())
                    .item(
                        El::new()
                            .s(Padding::all(SPACING_10))
                            .s(RoundedCorners::all(CORNER_RADIUS_12))
                            .s(Background::new().color_signal(primary_2()))
                            .child(icon(icon_name).size(IconSize::Large).color(IconColor::Primary).build()),
                    )
                    .item(
                        Column::new()
                            .item(h4(name))
                            .item(small(full_name)),
                    ),
            )
            .item(paragraph(description))
            .item(
                El::new()
                    .s(Align::new().left())
                    .child(badge(status).variant(BadgeVariant::Success).build()),
            ),
    )
}

fn compliance_stat(icon_name: IconName, value: &'static str, label: &'static str) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_12))
        .s(Align::new().center_y())
        .item(icon(icon_name).size(IconSize::Large).color(IconColor::Primary).build())
        .item(
            Column::new()
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_24)
                            .weight(FontWeight::Bold)
                            .color_signal(neutral_12()))
                        .child(Text::new(value)),
                )
                .item(small(label)),
        )
}

// ---- Revolutionizing ----

fn revolutionizing() -> impl Element {
    section(
        Row::new()
            .multiline()
            .s(Width::fill())
            .s(Gap::new().x(SPACING_48).y(SPACING_48))
            .item(reveal(
                Column::new()
                    .s(Width::fill().min(420).max(520))
                    .s(Gap::new().y(SPACING_24))
                    .item(
                        El::new()
                            .s(Align::new().left())
                            .child(badge("About AI Care").variant(BadgeVariant::Primary).build()),
                    )
                    .item(h2("Revolutionizing Healthcare with AI"))
                    .item(lead(
                        "At AI Care, we're pioneering the future of healthcare through \
                        cutting-edge artificial intelligence. Our mission is to make \
                        world-class medical expertise accessible to everyone, \
                        everywhere.",
                    ))
                    .item(feature_row(
                        IconName::Activity,
                        "Advanced AI Diagnostics",
                        "Our AI models are trained on millions of medical cases, \
                        providing accurate diagnoses in seconds.",
                    ))
                    .item(feature_row(
                        IconName::Shield,
                        "HIPAA Compliant",
                        "Your data is protected with enterprise-grade security and \
                        full HIPAA compliance.",
                    ))
                    .item(feature_row(
                        IconName::Users,
                        "Expert Medical Team",
                        "Backed by leading physicians and researchers from top medical \
                        institutions worldwide.",
                    )),
            ))
            .item(reveal_stagger(
                1,
                Column::new()
                    .s(Width::fill().min(360).max(520))
                    .s(Gap::new().y(SPACING_16))
                    .item(
                        El::new()
                            .s(Align::new().left())
                            .child(badge("FDA Approved").variant(BadgeVariant::Success).build()),
                    )
                    .item(
                        Row::new()
                            .multiline()
                            .s(Width::fill())
                            .s(Gap::new().x(SPACING_16).y(SPACING_16))
                            .item(overlay_stat("99.9%", "Diagnostic Accuracy"))
                            .item(overlay_stat("50K+", "Patients Served"))
                            .item(overlay_stat("24/7", "Support"))
                            .item(overlay_stat("15+", "Countries")),
                    ),
            )),
    )
}

fn feature_row(icon_name: IconName, title: &'static str, body: &'static str) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Gap::new().x(SPACING_16))
        .item(
            El::new()
                .s(Padding::all(SPACING_10))
                .s(Align::new().top())
                .s(RoundedCorners::all(CORNER_RADIUS_12))
                .s(Background::new().color_signal(primary_7()))
                .s(transition_colors())
                .child(
                    icon(icon_name)
                        .size(IconSize::Medium)
                        .color(IconColor::Custom("oklch(100% 0 0)"))
                        .build(),
                ),
        )
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(SPACING_4))
                .item(h4(title))
                .item(paragraph(body)),
        )
}

fn overlay_stat(value: &'static str, label: &'static str) -> impl Element {
    El::new().s(Width::exact(240)).child(card(
        Column::new()
            .s(Gap::new().y(SPACING_4))
            .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .s(Font::new()
                        .size(FONT_SIZE_30)
                        .weight(FontWeight::Bold)
                        .color_signal(primary_7()))
                    .child(Text::new(value)),
            )
            .item(El::new().s(Align::new().center_x()).child(small(label))),
    ))
}

// ---- Solutions ----

fn solutions() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Our Solutions",
                "AI-Powered Healthcare Solutions",
                Some(
                    "Discover our comprehensive suite of AI-driven healthcare tools \
                    designed to enhance patient care, improve diagnostic accuracy, \
                    and streamline medical workflows.",
                ),
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(PRODUCTS.iter().enumerate().map(|(index, product)| {
                        grid_item(
                            GRID_COL_3,
                            reveal_stagger(index % 3, solution_card(product)),
                        )
                    })),
            ),
    )
}

fn solution_card(product: &crate::data::Product) -> impl Element {
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
            )
            .item(
                El::new().s(Align::new().left().bottom()).child(
                    button()
                        .label("Learn More")
                        .variant(ButtonVariant::Link)
                        .size(ButtonSize::Small)
                        .right_icon(IconName::ArrowRight)
                        .on_press(|| router().go(Route::Products))
                        .build(),
                ),
            ),
    )
}

// ---- CTA banner ----

fn cta_banner() -> impl Element {
    section(reveal(filled_card(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_20))
            .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(h2("Ready to Transform Your Healthcare Practice?")),
            )
            .item(El::new().s(Align::new().center_x()).s(Width::fill().max(640)).child(lead(
                "Join thousands of healthcare professionals who are already using AI \
                Care to improve patient outcomes and streamline their workflows.",
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Align::new().center_x())
                    .s(Gap::new().x(SPACING_16).y(SPACING_12))
                    .item(
                        button()
                            .label("Start Free Trial")
                            .variant(ButtonVariant::Primary)
                            .size(ButtonSize::Large)
                            .on_press(|| router().go(Route::Contact))
                            .build(),
                    )
                    .item(
                        button()
                            .label("Schedule Demo")
                            .variant(ButtonVariant::Outline)
                            .size(ButtonSize::Large)
                            .on_press(|| router().go(Route::Contact))
                            .build(),
                    ),
            ),
    )))
}

// ---- Team preview ----

fn team_preview() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Meet Our Team",
                "Experts Behind AI Care",
                Some(
                    "Clinicians, researchers, and engineers working on the same \
                    problem from three directions.",
                ),
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .items(INTRO_TEAM.iter().enumerate().map(|(index, member)| {
                        grid_item(
                            GRID_COL_3,
                            reveal_stagger(
                                index,
                                elevated_card(
                                    Column::new()
                                        .s(Width::fill())
                                        .s(Gap::new().y(SPACING_8))
                                        .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
                                        .item(avatar_circle(member.name))
                                        .item(El::new().s(Align::new().center_x()).child(h4(member.name)))
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
                                                .child(small(member.affiliation)),
                                        ),
                                ),
                            ),
                        )
                    })),
            )
            .item(
                El::new().s(Align::new().center_x()).child(
                    button()
                        .label("View Full Team")
                        .variant(ButtonVariant::Outline)
                        .right_icon(IconName::ArrowRight)
                        .on_press(|| router().go(Route::Team))
                        .build(),
                ),
            ),
    )
}

/// Initials stand in for headshots; the deployment pipeline owns real photos.
pub fn avatar_circle(name: &str) -> impl Element {
    let initials: String = name
        .split_whitespace()
        .filter(|word| word.chars().next().is_some_and(char::is_uppercase))
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    El::new()
        .s(Width::exact(72))
        .s(Height::exact(72))
        .s(Align::new().center_x())
        .s(RoundedCorners::all(CORNER_RADIUS_FULL))
        .s(Background::new().color_signal(primary_2()))
        .s(transition_colors())
        .child(
            El::new()
                .s(Align::center())
                .s(Font::new()
                    .size(FONT_SIZE_24)
                    .weight(FontWeight::Bold)
                    .color_signal(primary_8()))
                .child(Text::new(initials)),
        )
}

// ---- Join mission ----

fn join_mission() -> impl Element {
    section(reveal(
        Column::new()
            .s(Width::fill().max(720))
            .s(Align::new().center_x())
            .s(Gap::new().y(SPACING_20))
            .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
            .item(El::new().s(Align::new().center_x()).child(h2("Join Our Mission")))
            .item(lead(
                "We're always looking for passionate people who want to improve \
                healthcare with AI. Help us build tools clinicians actually trust.",
            ))
            .item(
                El::new().s(Align::new().center_x()).child(
                    button()
                        .label("Get In Touch")
                        .variant(ButtonVariant::Primary)
                        .on_press(|| router().go(Route::Contact))
                        .build(),
                ),
            ),
    ))
}

// ---- Contact strip ----

fn contact_strip() -> impl Element {
    tinted_section(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_48))
            .item(reveal(section_header(
                "Get In Touch",
                "Let's Start a Conversation",
                None,
            )))
            .item(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_24))
                    .item(grid_item(
                        GRID_COL_3,
                        reveal_stagger(
                            0,
                            contact_item(
                                IconName::Mail,
                                "Email Us",
                                "Send us an email and we'll respond within 24 hours.",
                            ),
                        ),
                    ))
                    .item(grid_item(
                        GRID_COL_3,
                        reveal_stagger(
                            1,
                            contact_item(
                                IconName::Phone,
                                "Call Us",
                                "Mon-Fri from 8am to 6pm PST",
                            ),
                        ),
                    ))
                    .item(grid_item(
                        GRID_COL_3,
                        reveal_stagger(
                            2,
                            contact_item(IconName::MapPin, "Visit Us", "San Francisco, CA"),
                        ),
                    )),
            )
            .item(reveal(filled_card(
                Row::new()
                    .multiline()
                    .s(Width::fill())
                    .s(Gap::new().x(SPACING_24).y(SPACING_16))
                    .s(Align::new().center_y())
                    .item(
                        Column::new()
                            .s(Width::fill().min(320))
                            .s(Gap::new().y(SPACING_8))
                            .item(h3("Enterprise Solutions"))
                            .item(paragraph(
                                "Looking for custom AI healthcare solutions for your \
                                organization? Our enterprise team is ready to help.",
                            )),
                    )
                    .item(
                        button()
                            .label("Schedule Demo")
                            .variant(ButtonVariant::Primary)
                            .on_press(|| router().go(Route::Contact))
                            .build(),
                    ),
            ))),
    )
}

fn contact_item(icon_name: IconName, title: &'static str, body: &'static str) -> impl Element {
    card(
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_8))
            .item(
                El::new()
                    .s(Padding::all(SPACING_10))
                    .s(Align::new().left())
                    .s(RoundedCorners::all(CORNER_RADIUS_12))
                    .s(Background::new().color_signal(primary_2()))
                    .child(icon(icon_name).size(IconSize::Medium).color(IconColor::Primary).build()),
            )
            .item(h4(title))
            .item(paragraph(body)),
    )
}
