pub mod about;
pub mod contact;
pub mod intro;
pub mod not_found;
pub mod products;
pub mod team;

use aicare_ui::*;
use zoon::*;

// Column widths inside the 1140px content area (24px side padding, 24px gaps)
pub const GRID_COL_3: u32 = 348;
pub const GRID_COL_2: u32 = 534;

/// Full-width band with a centered, padded content column.
pub fn section(child: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().y(SPACING_80))
        .child(content_column(child))
}

/// Like [`section`] but on the alternate surface color, so consecutive
/// sections read as separate bands.
pub fn tinted_section(child: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().y(SPACING_80))
        .s(Background::new().color_signal(neutral_2()))
        .s(transition_colors())
        .child(content_column(child))
}

pub fn content_column(child: impl Element) -> impl Element {
    El::new()
        .s(Width::fill().max(CONTENT_MAX_WIDTH))
        .s(Align::new().center_x())
        .s(Padding::new().x(SPACING_24))
        .child(child)
}

/// Centered eyebrow tag, heading, and optional subtitle above a section.
pub fn section_header(
    tag: &'static str,
    title: &'static str,
    subtitle: Option<&'static str>,
) -> impl Element {
    let mut column = Column::new()
        .s(Width::fill().max(720))
        .s(Align::new().center_x())
        .s(Gap::new().y(SPACING_16))
        .update_raw_el(|raw_el| raw_el.style("text-align", "center"))
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(badge(tag).variant(BadgeVariant::Primary).build()),
        )
        .item(h2(title));

    if let Some(subtitle) = subtitle {
        column = column.item(lead(subtitle));
    }

    column
}

/// Wrapper giving grid children a fixed column width inside multiline rows.
pub fn grid_item(width: u32, child: impl Element) -> impl Element {
    El::new().s(Width::exact(width)).s(Height::fill()).child(child)
}

/// Right-aligned product tag; empty when the product carries none.
pub fn tag_badge(tag: Option<crate::data::ProductTag>) -> impl Element {
    El::new().s(Align::new().right()).child(tag.map(|tag| {
        badge(tag.label())
            .variant(match tag {
                crate::data::ProductTag::Popular => BadgeVariant::Warning,
                crate::data::ProductTag::New => BadgeVariant::Success,
            })
            .build()
    }))
}
