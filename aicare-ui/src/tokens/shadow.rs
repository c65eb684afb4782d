// Shadow Token System

use super::theme::{theme, Theme};
use zoon::*;

pub const SHADOW_COLOR_BLACK_LIGHT: &str = "rgba(0, 0, 0, 0.08)";
pub const SHADOW_COLOR_BLACK_MEDIUM: &str = "rgba(0, 0, 0, 0.15)";
pub const SHADOW_COLOR_BLACK_STRONG: &str = "rgba(0, 0, 0, 0.35)";
pub const SHADOW_COLOR_PRIMARY: &str = "oklch(50% 0.19 295 / 0.3)";

/// Card elevation for the given theme; `raised` is the hovered state.
pub fn card_shadows(theme: Theme, raised: bool) -> Vec<Shadow> {
    match (theme, raised) {
        (Theme::Light, false) => vec![
            Shadow::new().y(1).blur(3).color(SHADOW_COLOR_BLACK_LIGHT),
            Shadow::new().y(4).blur(12).color(SHADOW_COLOR_BLACK_LIGHT),
        ],
        (Theme::Light, true) => vec![
            Shadow::new().y(8).blur(24).color(SHADOW_COLOR_BLACK_MEDIUM),
            Shadow::new().y(2).blur(6).color(SHADOW_COLOR_BLACK_LIGHT),
        ],
        (Theme::Dark, false) => {
            vec![Shadow::new().y(4).blur(16).color(SHADOW_COLOR_BLACK_STRONG)]
        }
        (Theme::Dark, true) => {
            vec![Shadow::new().y(10).blur(28).color(SHADOW_COLOR_BLACK_STRONG)]
        }
    }
}

/// Resting card elevation as a reactive signal.
pub fn shadow_card() -> impl Signal<Item = Vec<Shadow>> {
    theme().map(|t| card_shadows(t, false))
}

/// Hovered/raised elevation as a reactive signal.
pub fn shadow_raised() -> impl Signal<Item = Vec<Shadow>> {
    theme().map(|t| card_shadows(t, true))
}

/// Accent glow behind primary call-to-action buttons.
pub fn shadow_primary_button() -> impl Signal<Item = Vec<Shadow>> {
    theme().map(|t| match t {
        Theme::Light => vec![Shadow::new().y(4).blur(14).color(SHADOW_COLOR_BLACK_MEDIUM)],
        Theme::Dark => vec![Shadow::new().y(4).blur(18).color(SHADOW_COLOR_PRIMARY)],
    })
}
