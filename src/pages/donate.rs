//! Donate page - the donation card on its own.

use dioxus::prelude::*;

use crate::components::{DonationCard, NavLocation, SiteNav};
use crate::context::use_settings;

#[component]
pub fn Donate() -> Element {
    let settings = use_settings();

    rsx! {
        SiteNav { current: NavLocation::Donate }
        main { class: "page page--donate",
            DonationCard { donation: settings.config.donation.clone() }
        }
    }
}
