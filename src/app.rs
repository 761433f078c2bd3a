use dioxus::prelude::*;
use yres_core::Page;

use crate::context::Settings;
use crate::pages::{Donate, Programs};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Donation card
/// - `/programs` - Program card grid
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Donate {},
    #[route("/programs")]
    Programs {},
}

/// Root application component.
///
/// Provides global styles, settings and page state, and routing.
#[component]
pub fn App() -> Element {
    let settings: Settings = crate::get_settings();
    let page: Signal<Page> = use_signal(Page::new);

    use_context_provider(|| settings);
    use_context_provider(|| page);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
