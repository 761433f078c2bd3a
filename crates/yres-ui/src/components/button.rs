//! Button Components
//!
//! Button styles used by the cards:
//! - Primary: filled teal call-to-action
//! - Secondary: outlined "More Info" style toggle
//! - Disabled: grey sold-out placeholder

use dioxus::prelude::*;
use tracing::debug;
use yres_core::CtaView;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled teal action
    #[default]
    Primary,
    /// Outlined teal action
    Secondary,
    /// Greyed out, not interactive
    Disabled,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "program-card__btn program-card__btn--primary",
            ButtonVariant::Secondary => "program-card__btn program-card__btn--secondary",
            ButtonVariant::Disabled => "program-card__btn program-card__btn--disabled",
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("{} {}", base, extra),
        None => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Keydown handler
    #[props(default)]
    pub onkeydown: Option<EventHandler<KeyboardEvent>>,
    #[props(default)]
    pub id: Option<String>,
    #[props(default)]
    pub aria_label: Option<String>,
    #[props(default)]
    pub aria_controls: Option<String>,
    #[props(default)]
    pub aria_expanded: Option<bool>,
    /// `Some(-1)` removes the button from the tab order
    #[props(default)]
    pub tabindex: Option<i32>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled `<button type="button">`
///
/// Handlers receive the raw event so callers can stop propagation.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Secondary,
///         aria_expanded: false,
///         onclick: move |evt: MouseEvent| toggle(evt),
///         "More Info"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = join_class(props.variant.class(), props.class.as_deref());
    let expanded = props.aria_expanded.map(|e| e.to_string());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            id: props.id,
            "aria-label": props.aria_label,
            "aria-controls": props.aria_controls,
            "aria-expanded": expanded,
            tabindex: props.tabindex,
            onclick: move |evt| {
                if let Some(handler) = &props.onclick {
                    handler.call(evt);
                }
            },
            onkeydown: move |evt| {
                if let Some(handler) = &props.onkeydown {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

/// Properties for the CtaLink component
#[derive(Clone, PartialEq, Props)]
pub struct CtaLinkProps {
    /// Derived call-to-action for one card face
    pub cta: CtaView,
    /// Click handler, only wired up for live links
    pub onclick: EventHandler<MouseEvent>,
    /// Inline style, e.g. full width on the back face
    #[props(default)]
    pub style: Option<String>,
}

/// Whether a click on this CTA leads anywhere.
fn is_placeholder(cta: &CtaView) -> bool {
    cta.disabled || cta.href.is_none()
}

/// Call-to-action anchor. Sold-out placeholders render without `href`,
/// marked `aria-disabled` and out of the tab order.
///
/// Clicks on a placeholder still reach `onclick` so the card sees them.
#[component]
pub fn CtaLink(props: CtaLinkProps) -> Element {
    let cta = props.cta.clone();
    let class = cta.class();
    let disabled = cta.disabled.then(|| "true".to_string());
    let placeholder = is_placeholder(&cta);
    let label = cta.label.clone();

    rsx! {
        a {
            class: "{class}",
            href: cta.href.clone(),
            style: props.style,
            "aria-disabled": disabled,
            tabindex: cta.tabindex,
            onclick: move |evt| {
                if placeholder {
                    debug!(%label, "Click on inactive CTA");
                }
                props.onclick.call(evt)
            },
            "{cta.label}"
        }
    }
}

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<MouseEvent>,
    /// Accessible label for screen readers
    pub aria_label: String,
    #[props(default)]
    pub tabindex: Option<i32>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let class = join_class("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            tabindex: props.tabindex,
            onclick: move |evt| props.onclick.call(evt),
            {props.children}
        }
    }
}

/// Back-face close button
#[component]
pub fn CloseButton(onclick: EventHandler<MouseEvent>, tabindex: Option<i32>) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: "Close details".to_string(),
            tabindex: tabindex,
            class: "program-card__close".to_string(),
            "\u{2715}"
        }
    }
}
