//! Programs page - the flip-card program grid.
//!
//! The page wrapper stands in for the document: clicks and Escape presses
//! that no card stopped reach every mounted grid from here.

use dioxus::prelude::*;
use yres_core::{Key as CardKey, UiEvent};

use crate::components::{run_dispatch, NavLocation, ProgramGrid, SiteNav};
use crate::context::use_page;

/// Container id of the grid on this page
const GRID_ID: &str = "programCardsGrid";

#[component]
pub fn Programs() -> Element {
    let page = use_page();

    let on_outside_click = move |_: MouseEvent| {
        run_dispatch(page, UiEvent::Click { target: None });
    };
    let on_keydown = move |evt: KeyboardEvent| {
        let key = CardKey::from_dom(&evt.key().to_string());
        if key == CardKey::Escape {
            run_dispatch(page, UiEvent::KeyDown { key, target: None });
        }
    };

    rsx! {
        div {
            class: "page-root",
            tabindex: "-1",
            onclick: on_outside_click,
            onkeydown: on_keydown,

            SiteNav { current: NavLocation::Programs }
            main { class: "page page--programs",
                header { class: "page__header",
                    h1 { class: "page__title", "Our Programs" }
                    p { class: "page__lede",
                        "Select a program to see the details and register."
                    }
                }
                ProgramGrid { id: GRID_ID.to_string() }
            }
        }
    }
}
