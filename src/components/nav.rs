//! Site Navigation Component
//!
//! Header with the YRES title and links to both widgets.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Donate,
    Programs,
}

impl NavLocation {
    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Donate => "Donate",
            NavLocation::Programs => "Programs",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Donate => Route::Donate {},
            NavLocation::Programs => Route::Programs {},
        }
    }
}

#[component]
pub fn SiteNav(current: NavLocation) -> Element {
    let locations = [NavLocation::Donate, NavLocation::Programs];

    rsx! {
        header { class: "site-nav",
            span { class: "site-nav__title", "YRES" }
            nav { class: "site-nav__links",
                for location in locations {
                    Link {
                        to: location.route(),
                        class: if location == current { "site-nav__link active" } else { "site-nav__link" },
                        "{location.display_name()}"
                    }
                }
            }
        }
    }
}
