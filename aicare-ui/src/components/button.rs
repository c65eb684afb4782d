// Button Component

use crate::components::icon::{icon, IconColor, IconName, IconSize};
use crate::tokens::*;
use futures_signals::signal::always;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Solid accent fill; the main call to action.
    Primary,
    /// Neutral fill for secondary actions.
    Secondary,
    /// Transparent with a visible border.
    Outline,
    /// Transparent until hovered; icon buttons and nav actions.
    Ghost,
    /// Reads as an inline link.
    Link,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

pub struct ButtonBuilder {
    label: Option<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    left_icon: Option<IconName>,
    right_icon: Option<IconName>,
    on_press: Option<Box<dyn Fn()>>,
}

pub fn button() -> ButtonBuilder {
    ButtonBuilder {
        label: None,
        variant: ButtonVariant::Primary,
        size: ButtonSize::Medium,
        left_icon: None,
        right_icon: None,
        on_press: None,
    }
}

impl ButtonBuilder {
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn left_icon(mut self, icon: IconName) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn right_icon(mut self, icon: IconName) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        let (focused, focused_signal) = Mutable::new_and_signal(false);

        let (padding_x, padding_y, font_size, icon_size) = match self.size {
            ButtonSize::Small => (SPACING_12, SPACING_6, FONT_SIZE_14, IconSize::Small),
            ButtonSize::Medium => (SPACING_16, SPACING_8, FONT_SIZE_16, IconSize::Medium),
            ButtonSize::Large => (SPACING_24, SPACING_12, FONT_SIZE_18, IconSize::Large),
        };

        // Icon-only buttons get square padding
        let is_icon_only =
            self.label.is_none() && (self.left_icon.is_some() || self.right_icon.is_some());
        let padding_x = if is_icon_only { padding_y } else { padding_x };

        let variant = self.variant;

        let bg_color_signal = match variant {
            ButtonVariant::Primary => primary_7().boxed_local(),
            ButtonVariant::Secondary => neutral_3().boxed_local(),
            _ => always(transparent()).boxed_local(),
        };

        let hover_bg_color_signal = match variant {
            ButtonVariant::Primary => primary_8().boxed_local(),
            ButtonVariant::Secondary => neutral_4().boxed_local(),
            ButtonVariant::Outline | ButtonVariant::Ghost => primary_1().boxed_local(),
            ButtonVariant::Link => always(transparent()).boxed_local(),
        };

        let text_color_signal = match variant {
            ButtonVariant::Primary => always(white()).boxed_local(),
            ButtonVariant::Secondary => neutral_12().boxed_local(),
            _ => primary_7().boxed_local(),
        };

        let border_color_signal = match variant {
            ButtonVariant::Outline => primary_5().boxed_local(),
            _ => always(transparent()).boxed_local(),
        };

        let shadows_signal = match variant {
            ButtonVariant::Primary => shadow_primary_button().boxed_local(),
            _ => always(vec![]).boxed_local(),
        };

        let content = self.content(icon_size);
        let on_press = self.on_press;

        Button::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all(if is_icon_only {
                CORNER_RADIUS_FULL
            } else {
                CORNER_RADIUS_8
            }))
            .s(font_sans())
            .s(Font::new()
                .size(font_size)
                .weight(FontWeight::Number(FONT_WEIGHT_6))
                .color_signal(text_color_signal))
            .s(transition_colors())
            .s(Background::new().color_signal(map_ref! {
                let hovered = hovered_signal,
                let bg_color = bg_color_signal,
                let hover_bg_color = hover_bg_color_signal =>
                if *hovered { *hover_bg_color } else { *bg_color }
            }))
            .s(Borders::all_signal(
                border_color_signal.map(|color| Border::new().width(1).color(color)),
            ))
            .s(Outline::with_signal_self(map_ref! {
                let focused = focused_signal,
                let theme = theme() =>
                if *focused {
                    Some(Outline::inner().width(2).color(match theme {
                        Theme::Light => "oklch(70% 0.13 295)",
                        Theme::Dark => "oklch(52% 0.15 295)",
                    }))
                } else {
                    None
                }
            }))
            .s(Shadows::with_signal(shadows_signal))
            .s(Cursor::new(CursorIcon::Pointer))
            .update_raw_el(move |raw_el| {
                raw_el.style(
                    "text-decoration",
                    if variant == ButtonVariant::Link {
                        "underline"
                    } else {
                        "none"
                    },
                )
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .on_focused_change(move |is_focused| focused.set_neq(is_focused))
            .label(content)
            .on_press(move || {
                if let Some(handler) = &on_press {
                    handler();
                }
            })
    }

    fn content(&self, icon_size: IconSize) -> RawElOrText {
        let mut row = Row::new().s(Gap::new().x(SPACING_8)).s(Align::new().center_y());

        if let Some(name) = self.left_icon {
            row = row.item(icon(name).size(icon_size).color(IconColor::Current).build());
        }
        if let Some(label) = &self.label {
            row = row.item(Text::new(label));
        }
        if let Some(name) = self.right_icon {
            row = row.item(icon(name).size(icon_size).color(IconColor::Current).build());
        }

        row.unify()
    }
}
