//! Grid containers and the page that hosts them.
//!
//! A [`GridContainer`] owns one registry for its whole mounted lifetime.
//! [`GridContainer::initialize`] is guarded by a one-time marker so repeated
//! calls keep the first dataset; [`GridContainer::teardown`] releases the
//! registry and its document listeners.
//!
//! A [`Page`] routes input: container-level handling first, then, unless
//! propagation was stopped, the document-level handlers of every listening
//! container. Grids on the same page keep independent flip state.

use tracing::{debug, info};

use crate::config::{CardOptions, LineClamp};
use crate::controller::{Dispatch, FlipController, UiEvent};
use crate::record::ProgramRecord;
use crate::registry::{FocusTicket, ProgramRegistry};

/// One mounted program grid.
pub struct GridContainer {
    id: String,
    /// One-time init marker
    initialized: bool,
    line_clamp: LineClamp,
    controller: Option<FlipController>,
}

impl GridContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            initialized: false,
            line_clamp: LineClamp::default(),
            controller: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Whether document-level listeners are attached.
    pub fn is_listening(&self) -> bool {
        self.controller.is_some()
    }

    /// Mount `records` in input order.
    ///
    /// Returns `false` without touching anything if the container was
    /// already initialized.
    pub fn initialize(&mut self, records: Vec<ProgramRecord>, options: CardOptions) -> bool {
        if self.initialized {
            debug!(container = %self.id, "Grid already initialized, ignoring");
            return false;
        }
        self.initialized = true;
        self.line_clamp = options.line_clamp;

        info!(container = %self.id, cards = records.len(), "Mounting program grid");
        let registry = ProgramRegistry::new(records, &options);
        self.controller = Some(FlipController::new(self.id.clone(), registry));
        true
    }

    /// Drop the registry and detach listeners. The container can be
    /// initialized again afterwards.
    pub fn teardown(&mut self) -> bool {
        if !self.initialized {
            return false;
        }
        info!(container = %self.id, "Tearing down program grid");
        self.controller = None;
        self.initialized = false;
        true
    }

    pub fn registry(&self) -> Option<&ProgramRegistry> {
        self.controller.as_ref().map(FlipController::registry)
    }

    /// Value for the `--title-lines` CSS custom property.
    pub fn title_lines(&self) -> u8 {
        self.line_clamp.title_lines()
    }

    pub fn handle_event(&mut self, event: &UiEvent) -> Dispatch {
        match self.controller.as_mut() {
            Some(controller) => controller.handle_container_event(event),
            None => Dispatch::default(),
        }
    }

    pub fn handle_document_event(&mut self, event: &UiEvent) -> Dispatch {
        match self.controller.as_mut() {
            Some(controller) => Dispatch {
                focus: controller.handle_document_event(event),
                ..Default::default()
            },
            None => Dispatch::default(),
        }
    }

    /// False once the grid was torn down or the card changed state.
    pub fn is_focus_current(&self, ticket: &FocusTicket) -> bool {
        self.registry()
            .is_some_and(|registry| registry.is_focus_current(ticket))
    }
}

/// All program grids mounted on one page.
#[derive(Default)]
pub struct Page {
    containers: Vec<GridContainer>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self, id: &str) -> Option<&GridContainer> {
        self.containers.iter().find(|c| c.id == id)
    }

    /// Container with `id`, created empty on first access.
    pub fn container_mut(&mut self, id: &str) -> &mut GridContainer {
        let index = match self.containers.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => {
                self.containers.push(GridContainer::new(id));
                self.containers.len() - 1
            }
        };
        &mut self.containers[index]
    }

    /// Tear down and forget a container.
    pub fn unmount(&mut self, id: &str) -> bool {
        let Some(index) = self.containers.iter().position(|c| c.id == id) else {
            return false;
        };
        let mut container = self.containers.remove(index);
        container.teardown()
    }

    /// Deliver an event the way a browser would: the owning container's
    /// delegated handler, then every document listener unless stopped.
    pub fn dispatch(&mut self, event: UiEvent) -> Dispatch {
        let owner = event.target().map(|t| t.container.clone());

        let mut dispatch = match owner {
            Some(owner) => self
                .containers
                .iter_mut()
                .find(|c| c.id == owner)
                .map(|c| c.handle_event(&event))
                .unwrap_or_default(),
            None => Dispatch::default(),
        };

        if !dispatch.stop_propagation {
            for container in self.containers.iter_mut().filter(|c| c.is_listening()) {
                let document = container.handle_document_event(&event);
                dispatch.merge(document);
            }
        }

        dispatch
    }

    /// Whether any mounted grid still honours `ticket`. Generations are
    /// unique across registries, so at most one grid can match.
    pub fn is_focus_current(&self, ticket: &FocusTicket) -> bool {
        self.containers.iter().any(|c| c.is_focus_current(ticket))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{Control, EventTarget, Key};
    use crate::registry::CardState;

    fn record(id: &str) -> ProgramRecord {
        ProgramRecord {
            id: id.to_string(),
            title: id.to_string(),
            category: "stem".to_string(),
            age_grade: String::new(),
            duration: String::new(),
            location: String::new(),
            date_range: String::new(),
            price: None,
            tags: None,
            spots_left: None,
            details: vec![],
            short_blurb: String::new(),
            thumbnail: String::new(),
            alt: String::new(),
            cta_href: "#".to_string(),
            cta_text: "Register".to_string(),
        }
    }

    #[test]
    fn second_initialize_is_noop() {
        let mut grid = GridContainer::new("programCardsGrid");
        assert!(grid.initialize(vec![record("a"), record("b")], CardOptions::default()));
        assert!(!grid.initialize(vec![record("z")], CardOptions::default()));

        let ids: Vec<_> = grid.registry().unwrap().cards().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn teardown_detaches_and_allows_remount() {
        let mut grid = GridContainer::new("grid");
        grid.initialize(vec![record("a")], CardOptions::default());
        assert!(grid.teardown());
        assert!(!grid.is_listening());
        assert!(!grid.is_initialized());
        assert!(!grid.teardown());

        assert!(grid.initialize(vec![record("b")], CardOptions::default()));
        assert_eq!(grid.registry().unwrap().cards()[0].id, "b");
    }

    #[test]
    fn focus_ticket_invalid_after_teardown() {
        let mut page = Page::new();
        page.container_mut("grid")
            .initialize(vec![record("a")], CardOptions::default());

        let d = page.dispatch(UiEvent::Click {
            target: Some(EventTarget::control("grid", "a", Control::Toggle)),
        });
        let ticket = d.focus[0].ticket;
        assert!(page.is_focus_current(&ticket));

        assert!(page.unmount("grid"));
        assert!(!page.is_focus_current(&ticket));
    }

    #[test]
    fn events_before_initialize_are_ignored() {
        let mut page = Page::new();
        page.container_mut("grid");
        let d = page.dispatch(UiEvent::KeyDown { key: Key::Escape, target: None });
        assert_eq!(d, Dispatch::default());
        assert_eq!(
            page.container("grid").unwrap().registry().map(|r| r.state(0)),
            None::<CardState>
        );
    }
}
