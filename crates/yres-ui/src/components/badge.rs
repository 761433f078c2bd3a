//! Category Badge and Tag Components
//!
//! Small pills on the card front: one category badge and up to three tags.

use dioxus::prelude::*;
use yres_core::ProgramRecord;

/// CSS class for a category badge. Known categories get their own colour
/// modifier; anything else falls back to the base style.
pub fn category_class(category: &str) -> String {
    format!(
        "program-card__category program-card__category--{}",
        category.trim().to_lowercase()
    )
}

/// Category pill
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     CategoryBadge { category: "stem".to_string() }
/// }
/// ```
#[component]
pub fn CategoryBadge(category: String) -> Element {
    let class = category_class(&category);

    rsx! {
        span { class: "{class}", "{category}" }
    }
}

/// Tag pills for a record, limited to the visible set
#[component]
pub fn TagList(record: ProgramRecord) -> Element {
    let tags = record.visible_tags().to_vec();
    if tags.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "program-card__tags",
            for tag in tags {
                span { class: "program-card__tag", "{tag}" }
            }
        }
    }
}
