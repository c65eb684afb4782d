// Input Component
// Single-line form field with label, optional required marker, and an
// error flag that switches the border to the error color. The text lives in
// a caller-owned Mutable so forms can clear fields after submission.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputKind {
    Text,
    Email,
}

impl InputKind {
    fn type_attr(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
        }
    }
}

pub struct InputBuilder {
    placeholder: String,
    kind: InputKind,
    label: Option<String>,
    required: bool,
    text: Mutable<String>,
    error: ReadOnlyMutable<Option<&'static str>>,
    on_change: Option<Box<dyn Fn(String)>>,
}

pub fn input(text: Mutable<String>) -> InputBuilder {
    InputBuilder {
        placeholder: String::new(),
        kind: InputKind::Text,
        label: None,
        required: false,
        text,
        error: Mutable::new(None).read_only(),
        on_change: None,
    }
}

impl InputBuilder {
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// While set, the border switches to the error color and the message is
    /// rendered under the field.
    pub fn error(mut self, error: ReadOnlyMutable<Option<&'static str>>) -> Self {
        self.error = error;
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (focused, focused_signal) = Mutable::new_and_signal(false);
        let error = self.error;
        let text = self.text;
        let on_change = self.on_change;
        let kind = self.kind;
        let accessible_label = self
            .label
            .clone()
            .unwrap_or_else(|| self.placeholder.clone());

        let mut column = Column::new().s(Width::fill()).s(Gap::new().y(SPACING_6));

        if let Some(label) = self.label {
            let label = if self.required { format!("{label} *") } else { label };
            column = column.item(
                El::new()
                    .s(font_sans())
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .weight(FontWeight::Number(FONT_WEIGHT_5))
                        .color_signal(neutral_10()))
                    .s(transition_colors())
                    .child(Text::new(label)),
            );
        }

        // All TextInput flags are set in one chain; conditional calls would
        // change the element's flag types.
        column = column.item(
            TextInput::new()
                .s(Width::fill())
                .s(Height::exact(44))
                .s(Padding::new().x(SPACING_16))
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .s(font_sans())
                .s(Font::new().size(FONT_SIZE_16).color_signal(neutral_12()))
                .s(Background::new().color_signal(neutral_1()))
                .s(Borders::all_signal(map_ref! {
                    let focused = focused_signal,
                    let has_error = error.signal_ref(|error| error.is_some()),
                    let error_color = error_7(),
                    let focus_color = primary_5(),
                    let resting_color = neutral_4() =>
                    Border::new().width(1).color(if *has_error {
                        *error_color
                    } else if *focused {
                        *focus_color
                    } else {
                        *resting_color
                    })
                }))
                .s(transition_colors())
                .update_raw_el(move |raw_el| raw_el.attr("type", kind.type_attr()))
                .placeholder(
                    Placeholder::new(&self.placeholder).s(Font::new().color_signal(neutral_6())),
                )
                .label_hidden(accessible_label)
                .text_signal(text.signal_cloned())
                .on_change(move |new_value| {
                    text.set_neq(new_value.clone());
                    if let Some(handler) = &on_change {
                        handler(new_value);
                    }
                })
                .on_focus({
                    let focused = focused.clone();
                    move || focused.set_neq(true)
                })
                .on_blur(move || focused.set_neq(false)),
        );

        column.item_signal(error.signal().map(|error| {
            error.map(|message| {
                El::new()
                    .s(font_sans())
                    .s(Font::new().size(FONT_SIZE_14).color_signal(error_7()))
                    .child(Text::new(message))
            })
        }))
    }
}
