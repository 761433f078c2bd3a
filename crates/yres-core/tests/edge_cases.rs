//! Scenario and boundary tests
//!
//! These tests walk through the documented behaviours of both widgets end to
//! end: donation figures, sold-out cards, idempotent mounting and several
//! grids sharing one page.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::json;
use yres_core::{
    compute_progress, format_cad, render_card, render_donation_card, render_grid,
    validate_records, CardOptions, CardState, CardStrings, Control, DonationProps, EventTarget,
    Face, FocusTarget, FocusTiming, Key, Page, ProgramRecord, UiEvent, FOCUS_TRANSFER_DELAY,
};

// ============================================================================
// Test Utilities
// ============================================================================

fn feed() -> Vec<ProgramRecord> {
    let values = vec![
        json!({
            "id": "robotics",
            "title": "Robotics Club",
            "category": "stem",
            "ageGrade": "Grades 5-8",
            "duration": "8 weeks",
            "location": "Markham",
            "dateRange": "Jan 10 - Mar 1",
            "price": "$120",
            "tags": ["coding", "teams", "lego", "arduino"],
            "spotsLeft": 4,
            "details": ["Hands-on builds", "Final showcase"],
            "shortBlurb": "Build and code robots.",
            "thumbnail": "img/robotics.jpg",
            "alt": "Students with a robot",
            "ctaHref": "https://example.org/robotics",
            "ctaText": "Register"
        }),
        json!({
            "id": "art-studio",
            "title": "Art Studio",
            "category": "arts",
            "ageGrade": "Grades 1-4",
            "duration": "6 weeks",
            "location": "Newmarket",
            "dateRange": "Apr 2 - May 7",
            "spotsLeft": 0,
            "details": ["Materials provided"],
            "shortBlurb": "Painting and sculpture.",
            "thumbnail": "img/art.jpg",
            "alt": "Painted canvases",
            "ctaHref": "https://example.org/art",
            "ctaText": "Register"
        }),
    ];
    validate_records(values).records
}

type EventLog = Arc<Mutex<Vec<(String, String)>>>;

fn recording_options() -> (CardOptions, EventLog) {
    let log: EventLog = Arc::new(Mutex::new(Vec::new()));
    let sink_log = log.clone();
    let options = CardOptions::default().with_analytics(Arc::new(
        move |event: &str, payload: &serde_json::Value| {
            sink_log.lock().push((
                event.to_string(),
                payload["id"].as_str().unwrap_or_default().to_string(),
            ));
        },
    ));
    (options, log)
}

fn toggle(container: &str, card: &str) -> UiEvent {
    UiEvent::Click {
        target: Some(EventTarget::control(container, card, Control::Toggle)),
    }
}

// ============================================================================
// Donation Card
// ============================================================================

#[test]
fn test_default_donation_figures() {
    let p = compute_progress(2500.0, 15000.0);
    assert_eq!(p.display_percent, 17);
    assert!((p.visual_percent - 16.67).abs() < 0.01);
    assert_eq!(format_cad(2500.0), "$2,500");
    assert_eq!(format_cad(15000.0), "$15,000");
}

#[test]
fn test_zero_goal_card() {
    let props = DonationProps {
        goal: 0.0,
        ..Default::default()
    };
    let html = render_donation_card(&props);
    assert!(html.contains(r#"aria-valuenow="0""#));
    assert!(html.contains("width: 0%"));
    assert!(!html.contains("donation-card__bar-label"));
    assert!(html.contains("<strong>$2,500</strong> / <strong>$0</strong>"));
}

// ============================================================================
// Program Cards
// ============================================================================

#[test]
fn test_sold_out_card_markup() {
    let records = feed();
    let html = render_card(&records[1], 1, CardState::Closed, &CardStrings::default());

    assert!(html.contains(r#"aria-disabled="true" tabindex="-1">Waitlist</a>"#));
    assert!(html.contains(r#"aria-disabled="true" tabindex="-1">Join Waitlist</a>"#));
    assert!(!html.contains(r#"href="https://example.org/art""#));
}

#[test]
fn test_second_initialize_keeps_first_dataset() {
    let mut page = Page::new();
    let grid = page.container_mut("programCardsGrid");
    assert!(grid.initialize(feed(), CardOptions::default()));

    let mut other = feed();
    other.truncate(1);
    other[0].id = "replacement".to_string();
    assert!(!grid.initialize(other, CardOptions::default()));

    let html = render_grid(page.container("programCardsGrid").unwrap());
    assert!(html.contains(r#"id="robotics""#));
    assert!(html.contains(r#"id="art-studio""#));
    assert!(!html.contains("replacement"));
}

#[test]
fn test_switching_cards_orders_events() {
    let (options, log) = recording_options();
    let mut page = Page::new();
    page.container_mut("grid").initialize(feed(), options);

    page.dispatch(toggle("grid", "robotics"));
    let dispatch = page.dispatch(toggle("grid", "art-studio"));

    assert_eq!(
        *log.lock(),
        vec![
            ("card_flip".to_string(), "robotics".to_string()),
            ("card_flip_back".to_string(), "robotics".to_string()),
            ("card_flip".to_string(), "art-studio".to_string()),
        ]
    );

    // Focus returns to A's toggle immediately, then moves into B's back face.
    assert_eq!(dispatch.focus.len(), 2);
    assert_eq!(dispatch.focus[0].element_id, "robotics-more");
    assert_eq!(dispatch.focus[0].timing, FocusTiming::Immediate);
    assert_eq!(dispatch.focus[1].target, FocusTarget::BackHeading);
    assert_eq!(dispatch.focus[1].timing, FocusTiming::Deferred(FOCUS_TRANSFER_DELAY));

    let html = render_grid(page.container("grid").unwrap());
    let robotics = html.find(r#"id="robotics""#).unwrap();
    let art = html.find(r#"id="art-studio""#).unwrap();
    assert!(html[robotics..art].contains(r#"aria-expanded="false""#));
    assert!(html[art..].contains(r#"aria-expanded="true""#));
}

#[test]
fn test_escape_with_nothing_open() {
    let (options, log) = recording_options();
    let mut page = Page::new();
    page.container_mut("grid").initialize(feed(), options);

    let dispatch = page.dispatch(UiEvent::KeyDown {
        key: Key::Escape,
        target: None,
    });
    assert!(dispatch.focus.is_empty());
    assert!(log.lock().is_empty());
}

#[test]
fn test_cta_on_open_card_keeps_it_open() {
    let (options, log) = recording_options();
    let mut page = Page::new();
    page.container_mut("grid").initialize(feed(), options);

    page.dispatch(toggle("grid", "robotics"));
    let dispatch = page.dispatch(UiEvent::Click {
        target: Some(EventTarget::control(
            "grid",
            "robotics",
            Control::PrimaryCta(Face::Back),
        )),
    });

    assert_eq!(dispatch.navigate.as_deref(), Some("https://example.org/robotics"));
    let registry = page.container("grid").unwrap().registry().unwrap();
    assert_eq!(registry.state(0), CardState::Open);
    assert_eq!(log.lock().last().unwrap().0, "cta_click");
}

// ============================================================================
// Several Grids On One Page
// ============================================================================

#[test]
fn test_grids_keep_independent_state() {
    let mut page = Page::new();
    page.container_mut("camps").initialize(feed(), CardOptions::default());
    page.container_mut("clubs").initialize(feed(), CardOptions::default());

    page.dispatch(toggle("camps", "robotics"));
    page.dispatch(toggle("clubs", "art-studio"));

    let camps = page.container("camps").unwrap().registry().unwrap();
    let clubs = page.container("clubs").unwrap().registry().unwrap();
    assert_eq!(camps.flipped_position(), Some(0));
    assert_eq!(clubs.flipped_position(), Some(1));

    // Control clicks stop propagation, so "camps" keeps its card open. A
    // plain click inside "clubs" reaches the document and closes "camps".
    page.dispatch(UiEvent::Click {
        target: Some(EventTarget::card("clubs", "art-studio")),
    });
    let camps = page.container("camps").unwrap().registry().unwrap();
    let clubs = page.container("clubs").unwrap().registry().unwrap();
    assert_eq!(camps.flipped_position(), None);
    assert_eq!(clubs.flipped_position(), Some(1));

    page.dispatch(UiEvent::KeyDown {
        key: Key::Escape,
        target: None,
    });
    let clubs = page.container("clubs").unwrap().registry().unwrap();
    assert_eq!(clubs.flipped_position(), None);
}

#[test]
fn test_unmounted_grid_stops_listening() {
    let (options, log) = recording_options();
    let mut page = Page::new();
    page.container_mut("camps").initialize(feed(), options);
    page.container_mut("clubs").initialize(feed(), CardOptions::default());

    page.dispatch(toggle("camps", "robotics"));
    page.dispatch(toggle("clubs", "robotics"));
    assert!(page.unmount("camps"));

    log.lock().clear();
    page.dispatch(UiEvent::KeyDown {
        key: Key::Escape,
        target: None,
    });

    assert!(log.lock().is_empty());
    assert!(page.container("camps").is_none());
    let clubs = page.container("clubs").unwrap().registry().unwrap();
    assert_eq!(clubs.flipped_position(), None);
}
