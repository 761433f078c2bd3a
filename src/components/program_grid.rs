//! Program Grid Component
//!
//! Loads the feed once, mounts it into the shared [`Page`] under this
//! grid's id and paints every card from the registry. The grid is torn
//! down when the component unmounts.

use dioxus::prelude::*;
use tracing::{debug, info};
use yres_core::{
    load_programs, CardState, Dispatch, FocusRequest, FocusTiming, Page, ProgramRecord, UiEvent,
    FALLBACK_MESSAGE,
};

use crate::components::ProgramCard;
use crate::context::{use_page, use_settings};

/// Run an event through the page and carry out what it asks for: focus
/// moves (deferred ones re-checked when their delay elapses) and CTA
/// navigation logging.
pub fn run_dispatch(mut page: Signal<Page>, event: UiEvent) -> Dispatch {
    let dispatch = page.write().dispatch(event);

    for request in &dispatch.focus {
        apply_focus(page, request.clone());
    }
    if let Some(href) = &dispatch.navigate {
        info!(%href, "Following program CTA");
    }

    dispatch
}

fn apply_focus(page: Signal<Page>, request: FocusRequest) {
    match request.timing {
        FocusTiming::Immediate => focus_element(&request.element_id),
        FocusTiming::Deferred(delay) => {
            spawn(async move {
                tokio::time::sleep(delay).await;
                if page.peek().is_focus_current(&request.ticket) {
                    focus_element(&request.element_id);
                } else {
                    debug!(card = %request.card_id, "Skipping stale focus request");
                }
            });
        }
    }
}

fn focus_element(id: &str) {
    let Ok(id) = serde_json::to_string(id) else {
        return;
    };
    let _ = document::eval(&format!("document.getElementById({})?.focus()", id));
}

#[component]
pub fn ProgramGrid(id: String) -> Element {
    let settings = use_settings();
    let mut page = use_page();

    // Feed is fetched once per mount; the number of mounted cards drives
    // the loading and fallback states.
    let container = id.clone();
    let mounted = use_resource(move || {
        let feed = settings.feed.clone();
        let options = settings.card_options();
        let container = container.clone();
        async move {
            let report = load_programs(&feed).await;
            let count = report.records.len();
            if count > 0 {
                page.write()
                    .container_mut(&container)
                    .initialize(report.records, options);
            }
            count
        }
    });

    let unmount_id = id.clone();
    use_drop(move || {
        page.write().unmount(&unmount_id);
    });

    let count = *mounted.read();
    match count {
        None => rsx! {
            p { class: "program-cards__loading", "Loading programs…" }
        },
        Some(0) => rsx! {
            p { class: "program-cards__fallback", "{FALLBACK_MESSAGE}" }
        },
        Some(_) => {
            let snapshot = {
                let page = page.read();
                page.container(&id).and_then(|grid| {
                    let registry = grid.registry()?;
                    let cards: Vec<(ProgramRecord, CardState)> = registry
                        .cards()
                        .iter()
                        .enumerate()
                        .map(|(position, record)| (record.clone(), registry.state(position)))
                        .collect();
                    Some((grid.title_lines(), registry.strings().clone(), cards))
                })
            };

            let Some((title_lines, strings, cards)) = snapshot else {
                return rsx! {
                    p { class: "program-cards__fallback", "{FALLBACK_MESSAGE}" }
                };
            };

            rsx! {
                div {
                    class: "program-cards",
                    id: "{id}",
                    "data-pc-init": "1",
                    style: "--title-lines: {title_lines}",
                    for (position, (record, state)) in cards.into_iter().enumerate() {
                        ProgramCard {
                            key: "{record.id}",
                            container: id.clone(),
                            record: record,
                            position: position,
                            state: state,
                            strings: strings.clone(),
                        }
                    }
                }
            }
        }
    }
}
