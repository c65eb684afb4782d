// Color Token System
// Reactive signals mapping the theme to oklch values. The violet primary
// scale matches the site's dark-mode accent; neutrals carry the slate text
// and surface colors for both modes.

use super::theme::{theme, Theme};
use zoon::*;

// Primary (violet) scale
pub fn primary_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.02 295)",
        Theme::Dark => "oklch(22% 0.04 295)",
    })
}

pub fn primary_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(93% 0.04 295)",
        Theme::Dark => "oklch(28% 0.06 295)",
    })
}

pub fn primary_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(87% 0.07 295)",
        Theme::Dark => "oklch(35% 0.09 295)",
    })
}

pub fn primary_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(70% 0.13 295)",
        Theme::Dark => "oklch(52% 0.15 295)",
    })
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(50% 0.19 295)",
        Theme::Dark => "oklch(64% 0.19 295)",
    })
}

pub fn primary_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(42% 0.18 295)",
        Theme::Dark => "oklch(72% 0.16 295)",
    })
}

pub fn primary_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(34% 0.15 295)",
        Theme::Dark => "oklch(82% 0.12 295)",
    })
}

// Neutral scale — page backgrounds through headline text
pub fn neutral_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.005 255)",
        Theme::Dark => "oklch(15% 0.01 285)",
    })
}

pub fn neutral_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.01 255)",
        Theme::Dark => "oklch(19% 0.012 285)",
    })
}

pub fn neutral_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(94% 0.015 255)",
        Theme::Dark => "oklch(24% 0.015 285)",
    })
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.02 255)",
        Theme::Dark => "oklch(30% 0.015 285)",
    })
}

pub fn neutral_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(72% 0.02 255)",
        Theme::Dark => "oklch(48% 0.015 285)",
    })
}

pub fn neutral_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(52% 0.02 255)",
        Theme::Dark => "oklch(68% 0.012 285)",
    })
}

pub fn neutral_10() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(38% 0.02 255)",
        Theme::Dark => "oklch(80% 0.01 285)",
    })
}

pub fn neutral_12() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(18% 0.02 255)",
        Theme::Dark => "oklch(96% 0.005 285)",
    })
}

// Success scale — status dots, active-partnership tags, form success panel
pub fn success_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.03 145)",
        Theme::Dark => "oklch(22% 0.05 145)",
    })
}

pub fn success_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(52% 0.15 145)",
        Theme::Dark => "oklch(70% 0.15 145)",
    })
}

pub fn success_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(32% 0.12 145)",
        Theme::Dark => "oklch(86% 0.12 145)",
    })
}

// Warning scale — "Popular" product tags
pub fn warning_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(96% 0.05 75)",
        Theme::Dark => "oklch(25% 0.06 75)",
    })
}

pub fn warning_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(48% 0.15 75)",
        Theme::Dark => "oklch(78% 0.15 75)",
    })
}

// Error scale — form validation messages and field borders
pub fn error_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.03 30)",
        Theme::Dark => "oklch(22% 0.05 30)",
    })
}

pub fn error_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(52% 0.2 30)",
        Theme::Dark => "oklch(70% 0.19 30)",
    })
}

// Static colors that don't change with theme
pub fn transparent() -> &'static str {
    "transparent"
}

pub fn white() -> &'static str {
    "oklch(100% 0 0)"
}
