//! AI Care Marketing Site Entry Point

use zoon::*;

mod app;
mod contact_form;
mod data;
mod footer;
mod header;
mod pages;
mod reveal;
mod router;

fn main() {
    aicare_ui::init_theme();
    start_app("app", app::root);
    router::router();
}
