use crate::{footer, header, pages};
use aicare_ui::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageId {
    Intro,
    About,
    Products,
    Team,
    Contact,
    NotFound,
}

impl PageId {
    /// Chrome is metadata on the page itself, not a separate path list, so
    /// a new route cannot silently fall out of sync with it.
    pub fn chrome_visible(self) -> bool {
        !matches!(self, PageId::NotFound)
    }
}

static PAGE_ID: Lazy<Mutable<PageId>> = Lazy::new(|| Mutable::new(PageId::Intro));

pub fn set_page_id(page_id: PageId) {
    PAGE_ID.set_neq(page_id);
}

pub fn page_id() -> impl Signal<Item = PageId> {
    PAGE_ID.signal()
}

pub fn root() -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(font_sans())
        .s(Background::new().color_signal(neutral_1()))
        .s(transition_colors())
        .item_signal(page_id().map(|id| id.chrome_visible().then(header::header)))
        .item(El::new().s(Width::fill()).child_signal(page_id().map(page)))
        .item_signal(page_id().map(|id| id.chrome_visible().then(footer::footer)))
}

fn page(page_id: PageId) -> RawElOrText {
    match page_id {
        PageId::Intro => pages::intro::page().unify(),
        PageId::About => pages::about::page().unify(),
        PageId::Products => pages::products::page().unify(),
        PageId::Team => pages::team::page().unify(),
        PageId::Contact => pages::contact::page().unify(),
        PageId::NotFound => pages::not_found::page().unify(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_not_found_page_suppresses_chrome() {
        assert!(PageId::Intro.chrome_visible());
        assert!(PageId::About.chrome_visible());
        assert!(PageId::Products.chrome_visible());
        assert!(PageId::Team.chrome_visible());
        assert!(PageId::Contact.chrome_visible());
        assert!(!PageId::NotFound.chrome_visible());
    }
}
