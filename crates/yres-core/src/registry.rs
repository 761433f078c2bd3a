//! Program card registry: the cards of one grid plus its flipped-card pointer.
//!
//! At most one card is open at a time. [`ProgramRegistry::open`] closes the
//! current card before opening another, so the `card_flip_back` event of the
//! old card always precedes the `card_flip` of the new one.
//!
//! Every transition takes a fresh generation number. The deferred focus move
//! after opening a card carries a [`FocusTicket`]; hosts check
//! [`ProgramRegistry::is_focus_current`] when the delay elapses and drop the
//! request if anything changed in between.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::analytics::{AnalyticsEvent, AnalyticsSink, CardPayload};
use crate::config::{CardOptions, CardStrings};
use crate::record::ProgramRecord;

/// Delay between opening a card and moving focus to its back heading,
/// giving the flip animation time to start.
pub const FOCUS_TRANSFER_DELAY: Duration = Duration::from_millis(300);

// Shared across registries so a ticket from a torn-down grid can never
// match a later mount.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Per-card interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Closed,
    Open,
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

/// Element that should receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// Heading of the back face
    BackHeading,
    /// The "more info" toggle on the front face
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTiming {
    Immediate,
    Deferred(Duration),
}

/// Identifies one focus request against the registry's transition history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTicket {
    position: usize,
    generation: u64,
}

/// Focus move the host should perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    pub card_id: String,
    /// DOM id of the element to focus
    pub element_id: String,
    pub target: FocusTarget,
    pub timing: FocusTiming,
    pub ticket: FocusTicket,
}

/// Cards of one mounted grid and which of them is open.
pub struct ProgramRegistry {
    cards: Vec<ProgramRecord>,
    flipped: Option<usize>,
    generation: u64,
    analytics: Option<AnalyticsSink>,
    strings: CardStrings,
}

impl ProgramRegistry {
    pub fn new(cards: Vec<ProgramRecord>, options: &CardOptions) -> Self {
        Self {
            cards,
            flipped: None,
            generation: next_generation(),
            analytics: options.analytics.clone(),
            strings: options.strings.clone(),
        }
    }

    pub fn cards(&self) -> &[ProgramRecord] {
        &self.cards
    }

    pub fn card(&self, position: usize) -> Option<&ProgramRecord> {
        self.cards.get(position)
    }

    pub fn strings(&self) -> &CardStrings {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Position of the open card, if any.
    pub fn flipped_position(&self) -> Option<usize> {
        self.flipped
    }

    pub fn flipped(&self) -> Option<&ProgramRecord> {
        self.flipped.and_then(|position| self.cards.get(position))
    }

    pub fn state(&self, position: usize) -> CardState {
        if self.flipped == Some(position) {
            CardState::Open
        } else {
            CardState::Closed
        }
    }

    /// Number of open cards. Never more than one.
    pub fn open_count(&self) -> usize {
        (0..self.cards.len())
            .filter(|&position| self.state(position) == CardState::Open)
            .count()
    }

    /// Open the card at `position`, closing any other open card first.
    ///
    /// Opening the card that is already open does nothing.
    pub fn open(&mut self, position: usize) -> Vec<FocusRequest> {
        let Some(card) = self.cards.get(position) else {
            return Vec::new();
        };
        if self.flipped == Some(position) {
            return Vec::new();
        }

        let payload = CardPayload::new(card, position);
        let mut requests = self.close_flipped();

        self.flipped = Some(position);
        self.generation = next_generation();
        debug!(card = %payload.id, position, "Card opened");

        AnalyticsEvent::CardFlip(payload.clone()).emit(self.analytics.as_ref());

        requests.push(FocusRequest {
            element_id: self.cards[position].back_title_id(),
            card_id: payload.id,
            target: FocusTarget::BackHeading,
            timing: FocusTiming::Deferred(FOCUS_TRANSFER_DELAY),
            ticket: self.ticket(position),
        });
        requests
    }

    /// Close the card at `position`, returning focus to its toggle.
    ///
    /// Closing a card that is not open does nothing.
    pub fn close(&mut self, position: usize) -> Vec<FocusRequest> {
        if self.flipped != Some(position) {
            return Vec::new();
        }
        let Some(card) = self.cards.get(position) else {
            return Vec::new();
        };

        let payload = CardPayload::new(card, position);
        let element_id = card.toggle_id();

        self.flipped = None;
        self.generation = next_generation();
        debug!(card = %payload.id, position, "Card closed");

        AnalyticsEvent::CardFlipBack(payload.clone()).emit(self.analytics.as_ref());

        vec![FocusRequest {
            card_id: payload.id,
            element_id,
            target: FocusTarget::Toggle,
            timing: FocusTiming::Immediate,
            ticket: self.ticket(position),
        }]
    }

    /// Open a closed card or close an open one.
    pub fn toggle(&mut self, position: usize) -> Vec<FocusRequest> {
        match self.state(position) {
            CardState::Open => self.close(position),
            CardState::Closed => self.open(position),
        }
    }

    /// Close whichever card is open.
    pub fn close_flipped(&mut self) -> Vec<FocusRequest> {
        match self.flipped {
            Some(position) => self.close(position),
            None => Vec::new(),
        }
    }

    /// Primary CTA activation. Never changes flip state.
    ///
    /// Returns `true` when navigation should proceed; sold-out placeholders
    /// are inert and report nothing.
    pub fn activate_cta(&self, position: usize) -> bool {
        let Some(card) = self.cards.get(position) else {
            return false;
        };
        if card.is_sold_out() {
            return false;
        }

        AnalyticsEvent::CtaClick {
            card: CardPayload::new(card, position),
            href: card.cta_href.clone(),
        }
        .emit(self.analytics.as_ref());
        true
    }

    /// Whether a focus request is still valid: no transition happened since
    /// it was issued.
    pub fn is_focus_current(&self, ticket: &FocusTicket) -> bool {
        ticket.generation == self.generation && ticket.position < self.cards.len()
    }

    fn ticket(&self, position: usize) -> FocusTicket {
        FocusTicket {
            position,
            generation: self.generation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use parking_lot::Mutex;

    fn record(id: &str, spots_left: Option<u32>) -> ProgramRecord {
        ProgramRecord {
            id: id.to_string(),
            title: format!("{} program", id),
            category: "stem".to_string(),
            age_grade: "Grades 5-8".to_string(),
            duration: "8 weeks".to_string(),
            location: "Markham".to_string(),
            date_range: "Jan - Mar".to_string(),
            price: None,
            tags: None,
            spots_left,
            details: vec!["Detail".to_string()],
            short_blurb: "Blurb".to_string(),
            thumbnail: "img.jpg".to_string(),
            alt: "Alt".to_string(),
            cta_href: format!("https://example.org/{}", id),
            cta_text: "Register".to_string(),
        }
    }

    fn registry_with_log() -> (ProgramRegistry, Arc<Mutex<Vec<(String, String)>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink_log = log.clone();
        let options = CardOptions::default().with_analytics(Arc::new(move |event: &str, payload: &serde_json::Value| {
            sink_log.lock().push((
                event.to_string(),
                payload["id"].as_str().unwrap_or_default().to_string(),
            ));
        }));
        let cards = vec![record("a", None), record("b", Some(4)), record("c", Some(0))];
        (ProgramRegistry::new(cards, &options), log)
    }

    #[test]
    fn starts_closed() {
        let (registry, log) = registry_with_log();
        assert_eq!(registry.flipped_position(), None);
        assert_eq!(registry.open_count(), 0);
        assert!(log.lock().is_empty());
    }

    #[test]
    fn open_requests_deferred_focus_on_back_heading() {
        let (mut registry, log) = registry_with_log();
        let requests = registry.open(0);

        assert_eq!(registry.state(0), CardState::Open);
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].element_id, "a-back-title");
        assert_eq!(requests[0].target, FocusTarget::BackHeading);
        assert_eq!(requests[0].timing, FocusTiming::Deferred(FOCUS_TRANSFER_DELAY));
        assert_eq!(*log.lock(), vec![("card_flip".to_string(), "a".to_string())]);
    }

    #[test]
    fn opening_second_card_closes_first() {
        let (mut registry, log) = registry_with_log();
        registry.open(0);
        let requests = registry.open(1);

        assert_eq!(registry.flipped_position(), Some(1));
        assert_eq!(registry.state(0), CardState::Closed);
        assert_eq!(requests[0].element_id, "a-more");
        assert_eq!(requests[0].timing, FocusTiming::Immediate);
        assert_eq!(requests[1].element_id, "b-back-title");

        let events: Vec<_> = log.lock().clone();
        assert_eq!(
            events,
            vec![
                ("card_flip".to_string(), "a".to_string()),
                ("card_flip_back".to_string(), "a".to_string()),
                ("card_flip".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn toggle_closes_open_card() {
        let (mut registry, _log) = registry_with_log();
        registry.toggle(1);
        assert_eq!(registry.state(1), CardState::Open);
        let requests = registry.toggle(1);
        assert_eq!(registry.state(1), CardState::Closed);
        assert_eq!(requests[0].target, FocusTarget::Toggle);
    }

    #[test]
    fn redundant_transitions_are_silent() {
        let (mut registry, log) = registry_with_log();
        assert!(registry.close(0).is_empty());
        assert!(registry.close_flipped().is_empty());
        registry.open(0);
        assert!(registry.open(0).is_empty());
        assert!(registry.open(99).is_empty());
        assert_eq!(log.lock().len(), 1);
    }

    #[test]
    fn stale_focus_ticket_rejected() {
        let (mut registry, _log) = registry_with_log();
        let ticket = registry.open(0)[0].ticket;
        assert!(registry.is_focus_current(&ticket));

        registry.close(0);
        assert!(!registry.is_focus_current(&ticket));

        // Re-opening the same card issues a fresh ticket; the old one stays stale.
        let fresh = registry.open(0)[0].ticket;
        assert!(!registry.is_focus_current(&ticket));
        assert!(registry.is_focus_current(&fresh));
    }

    #[test]
    fn cta_click_reports_only_available_programs() {
        let (registry, log) = registry_with_log();
        assert!(registry.activate_cta(1));
        assert!(!registry.activate_cta(2));
        assert_eq!(registry.flipped_position(), None);
        assert_eq!(*log.lock(), vec![("cta_click".to_string(), "b".to_string())]);
    }
}
