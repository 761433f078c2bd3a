//! Progress Bar Component
//!
//! Fundraising bar with an accessible `progressbar` role and a polite live
//! caption. The filled segment is capped at 100% while the caption keeps
//! the true amounts.

use dioxus::prelude::*;
use yres_core::{DonationView, Progress};

/// Properties for the ProgressBar component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressBarProps {
    /// Derived percentages
    pub progress: Progress,
    /// Accessible name of the bar
    pub aria_label: String,
    /// Text painted inside the filled segment, if it fits
    #[props(default)]
    pub label: Option<String>,
}

/// Track plus filled segment
///
/// # Example
///
/// ```rust,ignore
/// let view = DonationView::new(&props);
/// rsx! {
///     ProgressBar {
///         progress: view.progress,
///         aria_label: view.progress_aria_label(),
///         label: view.bar_label(),
///     }
/// }
/// ```
#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let width = props.progress.bar_width();
    let value = props.progress.aria_value();

    rsx! {
        div {
            class: "donation-card__track",
            role: "progressbar",
            "aria-valuenow": "{value}",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-label": "{props.aria_label}",
            div {
                class: "donation-card__fill",
                style: "width: {width}",
                if let Some(label) = props.label {
                    span { class: "donation-card__bar-label", "{label}" }
                }
            }
        }
    }
}

/// Properties for the ProgressCaption component
#[derive(Clone, PartialEq, Props)]
pub struct ProgressCaptionProps {
    pub raised: String,
    pub goal: String,
    /// Trailing note, e.g. "Help us meet our goal!"
    #[props(default)]
    pub note: String,
}

/// Raised/goal caption announced politely when the figures change
#[component]
pub fn ProgressCaption(props: ProgressCaptionProps) -> Element {
    rsx! {
        p {
            class: "donation-card__caption",
            "aria-live": "polite",
            "aria-atomic": "true",
            strong { "{props.raised}" }
            " / "
            strong { "{props.goal}" }
            if !props.note.is_empty() {
                " "
                span { class: "donation-card__note", "{props.note}" }
            }
        }
    }
}

/// Bar and caption for a donation view
#[component]
pub fn FundraisingProgress(view: DonationView, note: String) -> Element {
    rsx! {
        ProgressBar {
            progress: view.progress,
            aria_label: view.progress_aria_label(),
            label: view.bar_label(),
        }
        ProgressCaption {
            raised: view.raised_label.clone(),
            goal: view.goal_label.clone(),
            note: note,
        }
    }
}
