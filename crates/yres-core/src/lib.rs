//! YRES Widgets Core Library
//!
//! Framework-free logic behind the YRES donation card and program card grid.
//!
//! ## Overview
//!
//! - **Donation card**: [`compute_progress`] and [`format_cad`] turn a
//!   raised/goal pair into bar width, label and caption; [`DonationView`]
//!   packages them for rendering.
//! - **Program grid**: a [`GridContainer`] mounts validated
//!   [`ProgramRecord`]s into a [`ProgramRegistry`] and a [`FlipController`]
//!   turns clicks and key presses into open/close transitions with a single
//!   open card per grid.
//!
//! The desktop app and the `yres` CLI render from these types; nothing here
//! depends on a UI framework.
//!
//! ## Quick Start
//!
//! ```ignore
//! use yres_core::{load_programs, CardOptions, FeedSource, Key, Page, UiEvent};
//!
//! let report = load_programs(&FeedSource::default()).await;
//!
//! let mut page = Page::new();
//! page.container_mut("programCardsGrid")
//!     .initialize(report.records, CardOptions::default());
//!
//! // Escape closes whatever card is open.
//! let dispatch = page.dispatch(UiEvent::KeyDown { key: Key::Escape, target: None });
//! for request in dispatch.focus {
//!     println!("focus #{}", request.element_id);
//! }
//! ```

pub mod analytics;
pub mod card;
pub mod config;
pub mod container;
pub mod controller;
pub mod donation;
pub mod error;
pub mod escape;
pub mod feed;
pub mod progress;
pub mod record;
pub mod registry;
pub mod render;

// Re-exports
pub use analytics::{
    tracing_sink, AnalyticsEntry, AnalyticsEvent, AnalyticsSink, CardPayload,
    JsonlAnalyticsWriter,
};
pub use card::{CardAria, CardView, CtaView};
pub use config::{
    AnalyticsTarget, CardOptions, CardStrings, Interaction, LineClamp, ProgramsConfig,
    WidgetConfig,
};
pub use container::{GridContainer, Page};
pub use controller::{Control, Dispatch, EventTarget, FlipController, Key, UiEvent};
pub use donation::{render_donation_card, DonationProps, DonationView, MissionBody};
pub use error::{WidgetError, WidgetResult};
pub use escape::escape;
pub use feed::{load_programs, try_load_programs, FeedSource, FALLBACK_MESSAGE};
pub use progress::{compute_progress, format_cad, Progress};
pub use record::{validate_records, FeedReport, ProgramRecord, RecordIssue};
pub use registry::{
    CardState, Face, FocusRequest, FocusTarget, FocusTicket, FocusTiming, ProgramRegistry,
    FOCUS_TRANSFER_DELAY,
};
pub use render::{render_card, render_fallback, render_grid};
