//! Donation Card Component
//!
//! Title, mission text, CTA link and fundraising progress. Every value on
//! the card comes from [`DonationProps`]; percentages and amounts are
//! derived by [`DonationView`].

use dioxus::prelude::*;
use yres_core::{DonationProps, DonationView};
use yres_ui::FundraisingProgress;

#[component]
pub fn DonationCard(donation: DonationProps) -> Element {
    let view = DonationView::new(&donation);
    let paragraphs: Vec<String> = donation
        .mission_body
        .paragraphs()
        .into_iter()
        .map(str::to_string)
        .collect();

    rsx! {
        div { class: "donation-card",
            div { class: "donation-card__header",
                h2 { class: "donation-card__title", "{donation.title}" }
                p { class: "donation-card__subtitle", "{donation.subtitle}" }
            }

            div { class: "donation-card__cta",
                a {
                    class: "donation-card__button",
                    href: "{donation.cta_href}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": "{donation.cta_aria_label}",
                    "{donation.cta_text}"
                }
            }

            div { class: "donation-card__mission",
                h3 { class: "donation-card__heading", "{donation.mission_heading}" }
                div { class: "donation-card__body",
                    for paragraph in paragraphs {
                        p { class: "donation-card__paragraph", "{paragraph}" }
                    }
                }
            }

            div { class: "donation-card__progress",
                h4 { class: "donation-card__subheading", "{donation.progress_heading}" }
                FundraisingProgress { view: view, note: donation.caption.clone() }
            }
        }
    }
}
