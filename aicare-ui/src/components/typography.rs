// Typography Components

use crate::tokens::*;
use zoon::*;

pub fn h1(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_48)
            .weight(FontWeight::Bold)
            .color_signal(neutral_12()))
        .s(transition_colors())
        .child(Text::new(text.into()))
}

pub fn h2(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_36)
            .weight(FontWeight::Bold)
            .color_signal(neutral_12()))
        .s(transition_colors())
        .child(Text::new(text.into()))
}

pub fn h3(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_24)
            .weight(FontWeight::SemiBold)
            .color_signal(neutral_12()))
        .s(transition_colors())
        .child(Text::new(text.into()))
}

pub fn h4(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_20)
            .weight(FontWeight::SemiBold)
            .color_signal(neutral_12()))
        .s(transition_colors())
        .child(Text::new(text.into()))
}

/// Larger body copy under section headings.
pub fn lead(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_18)
            .color_signal(neutral_8()))
        .s(transition_colors())
        .update_raw_el(|raw_el| raw_el.style("line-height", "160%"))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_16)
            .color_signal(neutral_8()))
        .s(transition_colors())
        .update_raw_el(|raw_el| raw_el.style("line-height", "160%"))
        .child(Text::new(text.into()))
}

pub fn small(text: impl Into<String>) -> impl Element {
    El::new()
        .s(font_sans())
        .s(Font::new()
            .size(FONT_SIZE_14)
            .color_signal(neutral_6()))
        .s(transition_colors())
        .child(Text::new(text.into()))
}
