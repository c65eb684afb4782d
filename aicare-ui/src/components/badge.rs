// Badge Component
// Pill labels for section eyebrows, product tags, and status markers.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeVariant {
    /// Accent-tinted; section eyebrow tags.
    Primary,
    /// Green; "New", active-partnership status.
    Success,
    /// Amber; "Popular" product tag.
    Warning,
    /// Quiet neutral pill.
    Neutral,
}

pub struct BadgeBuilder {
    label: String,
    variant: BadgeVariant,
}

pub fn badge(label: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder {
        label: label.into(),
        variant: BadgeVariant::Neutral,
    }
}

impl BadgeBuilder {
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn build(self) -> impl Element {
        let (bg_signal, text_signal) = match self.variant {
            BadgeVariant::Primary => (primary_2().boxed_local(), primary_8().boxed_local()),
            BadgeVariant::Success => (success_1().boxed_local(), success_7().boxed_local()),
            BadgeVariant::Warning => (warning_1().boxed_local(), warning_8().boxed_local()),
            BadgeVariant::Neutral => (neutral_3().boxed_local(), neutral_10().boxed_local()),
        };

        El::new()
            .s(Padding::new().x(SPACING_12).y(SPACING_4))
            .s(RoundedCorners::all(CORNER_RADIUS_FULL))
            .s(Background::new().color_signal(bg_signal))
            .s(font_sans())
            .s(Font::new()
                .size(FONT_SIZE_12)
                .weight(FontWeight::Number(FONT_WEIGHT_6))
                .color_signal(text_signal))
            .s(transition_colors())
            .child(Text::new(self.label))
    }
}
