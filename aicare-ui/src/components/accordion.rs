// Accordion Component
// FAQ-style disclosure list. One item open at a time by default: opening an
// item collapses its siblings through a shared open-index.

use crate::components::icon::{icon, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Debug, Clone)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

pub struct AccordionBuilder {
    items: Vec<AccordionItem>,
    allow_multiple: bool,
    default_open: Option<usize>,
}

pub fn accordion() -> AccordionBuilder {
    AccordionBuilder {
        items: Vec::new(),
        allow_multiple: false,
        default_open: None,
    }
}

impl AccordionBuilder {
    pub fn items(mut self, items: impl IntoIterator<Item = AccordionItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn allow_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    pub fn default_open(mut self, index: usize) -> Self {
        self.default_open = Some(index);
        self
    }

    pub fn build(self) -> impl Element {
        let open_states: Vec<Mutable<bool>> = (0..self.items.len())
            .map(|index| Mutable::new(self.default_open == Some(index)))
            .collect();
        let allow_multiple = self.allow_multiple;

        Column::new().s(Width::fill()).s(Gap::new().y(SPACING_8)).items(
            self.items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let open = open_states[index].clone();
                    let siblings = open_states.clone();
                    accordion_item(item, open, siblings, index, allow_multiple)
                })
                .collect::<Vec<_>>(),
        )
    }
}

fn accordion_item(
    item: AccordionItem,
    open: Mutable<bool>,
    siblings: Vec<Mutable<bool>>,
    index: usize,
    allow_multiple: bool,
) -> impl Element {
    let content = item.content;

    Column::new()
        .s(Width::fill())
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_2()))
        .s(Borders::all_signal(
            neutral_3().map(|color| Border::new().width(1).color(color)),
        ))
        .s(transition_colors())
        .item(
            Button::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_16).y(SPACING_12))
                .s(Background::new().color("transparent"))
                .s(Cursor::new(CursorIcon::Pointer))
                .s(Align::new().left())
                .label(
                    Row::new()
                        .s(Width::fill())
                        .s(Align::new().center_y())
                        .s(Gap::new().x(SPACING_12))
                        .item(
                            El::new()
                                .s(Width::fill())
                                .s(font_sans())
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::Number(FONT_WEIGHT_5))
                                    .color_signal(neutral_12()))
                                .child(Text::new(&item.title)),
                        )
                        .item(El::new().child_signal(open.signal().map(|is_open| {
                            icon(if is_open {
                                IconName::ChevronUp
                            } else {
                                IconName::ChevronDown
                            })
                            .size(IconSize::Small)
                            .color(IconColor::Muted)
                            .build()
                        }))),
                )
                .on_press({
                    let open = open.clone();
                    move || {
                        let will_open = !open.get();
                        if will_open && !allow_multiple {
                            for (sibling_index, sibling) in siblings.iter().enumerate() {
                                if sibling_index != index {
                                    sibling.set_neq(false);
                                }
                            }
                        }
                        open.set(will_open);
                    }
                }),
        )
        .item_signal(open.signal().map(move |is_open| {
            is_open.then(|| {
                El::new()
                    .s(Padding::new().x(SPACING_16).y(SPACING_12))
                    .s(Borders::new().top_signal(
                        neutral_3().map(|color| Border::new().width(1).color(color)),
                    ))
                    .s(font_sans())
                    .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8()))
                    .update_raw_el(|raw_el| raw_el.style("line-height", "160%"))
                    .child(Text::new(&content))
            })
        }))
}
