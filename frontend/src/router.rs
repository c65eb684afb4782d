use crate::app::{self, PageId};
use zoon::*;

pub static ROUTER: Lazy<Router<Route>> = Lazy::new(|| {
    Router::new(|route: Option<Route>| async move {
        app::set_page_id(page_id_for_route(route));
        // Reset the viewport only after the new page is committed, so the
        // browser's own scroll restoration can't undo it.
        Task::next_macro_tick().await;
        reset_scroll();
    })
});

pub fn router() -> &'static Router<Route> {
    &ROUTER
}

#[route]
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Route {
    #[route("about")]
    About,
    #[route("products")]
    Products,
    #[route("team")]
    Team,
    #[route("contact")]
    Contact,
    #[route()]
    Intro,
}

/// Total route-to-page mapping. An unmatched URL is not an error: it lands
/// on the Not-Found page via the `None` arm.
pub fn page_id_for_route(route: Option<Route>) -> PageId {
    match route {
        Some(Route::Intro) => PageId::Intro,
        Some(Route::About) => PageId::About,
        Some(Route::Products) => PageId::Products,
        Some(Route::Team) => PageId::Team,
        Some(Route::Contact) => PageId::Contact,
        None => PageId::NotFound,
    }
}

fn reset_scroll() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_resolves_to_its_page() {
        assert_eq!(page_id_for_route(Some(Route::Intro)), PageId::Intro);
        assert_eq!(page_id_for_route(Some(Route::About)), PageId::About);
        assert_eq!(page_id_for_route(Some(Route::Products)), PageId::Products);
        assert_eq!(page_id_for_route(Some(Route::Team)), PageId::Team);
        assert_eq!(page_id_for_route(Some(Route::Contact)), PageId::Contact);
    }

    #[test]
    fn unmatched_path_resolves_to_not_found() {
        assert_eq!(page_id_for_route(None), PageId::NotFound);
    }

    #[test]
    fn known_pages_show_chrome_and_not_found_hides_it() {
        for route in [
            Route::Intro,
            Route::About,
            Route::Products,
            Route::Team,
            Route::Contact,
        ] {
            let page_id = page_id_for_route(Some(route));
            assert_ne!(page_id, PageId::NotFound);
            assert!(page_id.chrome_visible());
        }
        assert!(!page_id_for_route(None).chrome_visible());
    }

    #[test]
    fn navigation_keeps_theme_untouched() {
        use aicare_ui::Theme;

        // Start on the intro page with the default light theme.
        let mut theme = Theme::Light;
        let mut page_id = page_id_for_route(Some(Route::Intro));
        assert!(page_id.chrome_visible());

        // Toggling the theme does not change the page.
        theme = theme.toggled();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(page_id, PageId::Intro);

        // Navigating to an unknown path hides the chrome and keeps the theme.
        page_id = page_id_for_route(None);
        assert_eq!(page_id, PageId::NotFound);
        assert!(!page_id.chrome_visible());
        assert_eq!(theme, Theme::Dark);
    }
}
