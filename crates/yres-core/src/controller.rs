//! Flip interaction controller.
//!
//! Translates pointer and keyboard input into registry transitions. Input is
//! split the same way a browser delivers it:
//!
//! - **container handlers** see events whose target lies inside this grid:
//!   toggle/close controls and primary CTAs
//! - **document handlers** see every event that was not stopped: clicks
//!   outside the open card and Escape
//!
//! Control activations stop propagation, so clicking "More Info" on one card
//! is never also treated as an outside click by the same grid.

use crate::registry::{Face, FocusRequest, ProgramRegistry};

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Interactive element on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The "more info" / "less info" toggle on the front face
    Toggle,
    /// The close button on the back face
    Close,
    /// Primary CTA on the given face
    PrimaryCta(Face),
}

/// Where an event landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTarget {
    /// Id of the grid container
    pub container: String,
    /// Id of the card the target sits in
    pub card: String,
    /// Control hit, `None` for card chrome or text
    pub control: Option<Control>,
}

impl EventTarget {
    pub fn card(container: impl Into<String>, card: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            card: card.into(),
            control: None,
        }
    }

    pub fn control(container: impl Into<String>, card: impl Into<String>, control: Control) -> Self {
        Self {
            container: container.into(),
            card: card.into(),
            control: Some(control),
        }
    }
}

/// User input. A `None` target means outside every card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click { target: Option<EventTarget> },
    KeyDown { key: Key, target: Option<EventTarget> },
}

impl UiEvent {
    pub fn target(&self) -> Option<&EventTarget> {
        match self {
            UiEvent::Click { target } | UiEvent::KeyDown { target, .. } => target.as_ref(),
        }
    }
}

/// What the host must do after an event was handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub focus: Vec<FocusRequest>,
    pub stop_propagation: bool,
    pub prevent_default: bool,
    /// CTA destination the host should follow
    pub navigate: Option<String>,
}

impl Dispatch {
    pub fn merge(&mut self, other: Dispatch) {
        self.focus.extend(other.focus);
        self.stop_propagation |= other.stop_propagation;
        self.prevent_default |= other.prevent_default;
        if other.navigate.is_some() {
            self.navigate = other.navigate;
        }
    }
}

/// Event handling for one grid.
pub struct FlipController {
    container: String,
    registry: ProgramRegistry,
}

impl FlipController {
    pub fn new(container: impl Into<String>, registry: ProgramRegistry) -> Self {
        Self {
            container: container.into(),
            registry,
        }
    }

    pub fn registry(&self) -> &ProgramRegistry {
        &self.registry
    }

    /// Resolve a target to a card position, if it belongs to this grid.
    fn position(&self, target: Option<&EventTarget>) -> Option<usize> {
        let target = target.filter(|t| t.container == self.container)?;
        self.registry.position_of(&target.card)
    }

    /// Delegated handler for events inside the container.
    pub fn handle_container_event(&mut self, event: &UiEvent) -> Dispatch {
        let Some(target) = event.target() else {
            return Dispatch::default();
        };
        let Some(position) = self.position(Some(target)) else {
            return Dispatch::default();
        };

        match (event, target.control) {
            (UiEvent::Click { .. }, Some(Control::Close)) => Dispatch {
                focus: self.registry.close(position),
                stop_propagation: true,
                prevent_default: true,
                navigate: None,
            },
            (UiEvent::Click { .. }, Some(Control::Toggle)) => Dispatch {
                focus: self.registry.toggle(position),
                stop_propagation: true,
                prevent_default: true,
                navigate: None,
            },
            (UiEvent::KeyDown { key: Key::Enter | Key::Space, .. }, Some(Control::Toggle)) => {
                Dispatch {
                    focus: self.registry.toggle(position),
                    prevent_default: true,
                    ..Default::default()
                }
            }
            (UiEvent::Click { .. }, Some(Control::PrimaryCta(_))) => {
                let navigate = self
                    .registry
                    .activate_cta(position)
                    .then(|| self.registry.cards()[position].cta_href.clone());
                Dispatch {
                    prevent_default: navigate.is_none(),
                    navigate,
                    ..Default::default()
                }
            }
            _ => Dispatch::default(),
        }
    }

    /// Document-level handler: outside clicks and Escape close the open card.
    pub fn handle_document_event(&mut self, event: &UiEvent) -> Vec<FocusRequest> {
        let Some(open) = self.registry.flipped_position() else {
            return Vec::new();
        };

        match event {
            UiEvent::Click { target } => {
                if self.position(target.as_ref()) == Some(open) {
                    Vec::new()
                } else {
                    self.registry.close(open)
                }
            }
            UiEvent::KeyDown { key: Key::Escape, .. } => self.registry.close(open),
            UiEvent::KeyDown { .. } => Vec::new(),
        }
    }
}
