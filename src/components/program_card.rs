//! Program Card Component
//!
//! Two-faced flip card. The front carries the summary and the toggle, the
//! back the details and a close button. Every input is routed through
//! [`run_dispatch`] and then stopped here, because the page has already
//! delivered it to every grid's document-level handler.

use dioxus::prelude::*;
use yres_core::{
    CardState, CardStrings, CardView, Control, EventTarget, Face, Key as CardKey, ProgramRecord,
    UiEvent,
};
use yres_ui::{Button, ButtonVariant, CategoryBadge, CloseButton, CtaLink, TagList};

use crate::components::run_dispatch;
use crate::context::use_page;

fn card_key(evt: &KeyboardEvent) -> CardKey {
    CardKey::from_dom(&evt.key().to_string())
}

#[component]
pub fn ProgramCard(
    /// Id of the grid this card belongs to
    container: String,
    record: ProgramRecord,
    position: usize,
    state: CardState,
    strings: CardStrings,
) -> Element {
    let page = use_page();

    let view = CardView::new(&record, position, state, &strings);
    let aria = view.aria.clone();
    let front_cta = view.cta(Face::Front);
    let back_cta = view.cta(Face::Back);
    let spots = view.spots_label();
    let meta: Vec<(&'static str, String)> = view
        .meta_items()
        .into_iter()
        .map(|(icon, text)| (icon, text.to_string()))
        .collect();

    let card_target = EventTarget::card(container.clone(), record.id.clone());
    let control_target = {
        let card_target = card_target.clone();
        move |control: Control| EventTarget {
            control: Some(control),
            ..card_target.clone()
        }
    };

    let on_card_click = {
        let target = card_target.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            run_dispatch(page, UiEvent::Click { target: Some(target.clone()) });
        }
    };
    let on_card_keydown = {
        let target = card_target.clone();
        move |evt: KeyboardEvent| {
            evt.stop_propagation();
            run_dispatch(page, UiEvent::KeyDown {
                key: card_key(&evt),
                target: Some(target.clone()),
            });
        }
    };

    let on_toggle_click = {
        let target = control_target(Control::Toggle);
        move |evt: MouseEvent| {
            evt.stop_propagation();
            let dispatch = run_dispatch(page, UiEvent::Click { target: Some(target.clone()) });
            if dispatch.prevent_default {
                evt.prevent_default();
            }
        }
    };
    let on_toggle_keydown = {
        let target = control_target(Control::Toggle);
        move |evt: KeyboardEvent| {
            let key = card_key(&evt);
            if !matches!(key, CardKey::Enter | CardKey::Space) {
                return;
            }
            // Handled here so the button does not also synthesize a click.
            evt.stop_propagation();
            let dispatch = run_dispatch(page, UiEvent::KeyDown {
                key,
                target: Some(target.clone()),
            });
            if dispatch.prevent_default {
                evt.prevent_default();
            }
        }
    };

    let on_close = {
        let target = control_target(Control::Close);
        move |evt: MouseEvent| {
            evt.stop_propagation();
            evt.prevent_default();
            run_dispatch(page, UiEvent::Click { target: Some(target.clone()) });
        }
    };

    let cta_handler = move |face: Face| {
        let target = control_target(Control::PrimaryCta(face));
        move |evt: MouseEvent| {
            evt.stop_propagation();
            let dispatch = run_dispatch(page, UiEvent::Click { target: Some(target.clone()) });
            if dispatch.prevent_default {
                evt.prevent_default();
            }
        }
    };
    let on_front_cta = cta_handler(Face::Front);
    let on_back_cta = cta_handler(Face::Back);

    let expanded = aria.expanded.to_string();
    let front_hidden = aria.front_hidden.to_string();
    let back_hidden = aria.back_hidden.to_string();
    let card_class = if state == CardState::Open {
        "program-card is-flipped"
    } else {
        "program-card"
    };

    rsx! {
        article {
            class: "{card_class}",
            id: "{record.id}",
            "aria-expanded": "{expanded}",
            "data-position": "{position}",
            onclick: on_card_click,
            onkeydown: on_card_keydown,

            div { class: "program-card__flipper",
                // Front face
                div { class: "program-card__front", "aria-hidden": "{front_hidden}",
                    img {
                        class: "program-card__image",
                        src: "{record.thumbnail}",
                        alt: "{record.alt}",
                        loading: "lazy",
                    }
                    div { class: "program-card__content",
                        div { class: "program-card__header",
                            CategoryBadge { category: record.category.clone() }
                            h2 { class: "program-card__title", id: record.title_id(), "{record.title}" }
                        }
                        div { class: "program-card__meta",
                            for (icon, text) in meta {
                                div { class: "program-card__meta-item", "{icon} {text}" }
                            }
                        }
                        TagList { record: record.clone() }
                        if let Some(spots) = spots {
                            div { class: "program-card__spots", "{spots}" }
                        }
                        div { class: "program-card__actions",
                            Button {
                                variant: ButtonVariant::Secondary,
                                id: record.toggle_id(),
                                aria_label: aria.toggle_aria_label.clone(),
                                aria_controls: record.back_id(),
                                aria_expanded: aria.expanded,
                                tabindex: aria.tabindex(Face::Front),
                                onclick: on_toggle_click,
                                onkeydown: on_toggle_keydown,
                                "{aria.toggle_label}"
                            }
                            CtaLink { cta: front_cta, onclick: on_front_cta }
                        }
                    }
                }

                // Back face
                div {
                    class: "program-card__back",
                    id: record.back_id(),
                    role: "region",
                    "aria-labelledby": record.title_id(),
                    "aria-hidden": "{back_hidden}",
                    div { class: "program-card__back-content",
                        div { class: "program-card__back-header",
                            h3 {
                                class: "program-card__back-title",
                                id: record.back_title_id(),
                                tabindex: "-1",
                                "{record.title}"
                            }
                            CloseButton { onclick: on_close, tabindex: aria.tabindex(Face::Back) }
                        }
                        p { class: "program-card__blurb", "{record.short_blurb}" }
                        ul { class: "program-card__detail-list",
                            for detail in record.details.iter() {
                                li { class: "program-card__detail-item", "{detail}" }
                            }
                        }
                        div { class: "program-card__back-cta",
                            CtaLink {
                                cta: back_cta,
                                onclick: on_back_cta,
                                style: "width:100%".to_string(),
                            }
                        }
                    }
                }
            }
        }
    }
}
