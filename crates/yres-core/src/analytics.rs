//! Analytics events emitted by the flip-card controller.
//!
//! A sink is any `Fn(event_name, payload)`; the controller calls it
//! synchronously inside the transition and does not catch anything it does.
//!
//! Two ready-made sinks are provided:
//! - [`tracing_sink`] logs each event at info level
//! - [`JsonlAnalyticsWriter`] appends one JSON object per line to a file
//!
//! ```bash
//! # Flips per card
//! jq -r 'select(.event == "card_flip") | .payload.id' analytics.jsonl | sort | uniq -c
//! ```

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::ProgramRecord;

/// Caller-supplied analytics callback.
pub type AnalyticsSink = Arc<dyn Fn(&str, &Value) + Send + Sync>;

pub const CARD_FLIP: &str = "card_flip";
pub const CARD_FLIP_BACK: &str = "card_flip_back";
pub const CTA_CLICK: &str = "cta_click";

/// Identifies the card an event refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPayload {
    pub id: String,
    pub title: String,
    pub category: String,
    pub position: usize,
}

impl CardPayload {
    pub fn new(record: &ProgramRecord, position: usize) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.trim().to_string(),
            category: record.category.trim().to_string(),
            position,
        }
    }
}

/// Events reported to the analytics sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    /// A card was opened
    CardFlip(CardPayload),
    /// A card was closed
    CardFlipBack(CardPayload),
    /// The primary CTA of an available program was activated
    CtaClick { card: CardPayload, href: String },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CardFlip(_) => CARD_FLIP,
            AnalyticsEvent::CardFlipBack(_) => CARD_FLIP_BACK,
            AnalyticsEvent::CtaClick { .. } => CTA_CLICK,
        }
    }

    /// JSON payload handed to the sink.
    pub fn payload(&self) -> Value {
        match self {
            AnalyticsEvent::CardFlip(card) | AnalyticsEvent::CardFlipBack(card) => {
                serde_json::json!({
                    "id": card.id,
                    "title": card.title,
                    "category": card.category,
                    "position": card.position,
                })
            }
            AnalyticsEvent::CtaClick { card, href } => serde_json::json!({
                "id": card.id,
                "title": card.title,
                "category": card.category,
                "position": card.position,
                "href": href,
            }),
        }
    }

    /// Deliver to `sink` if one is configured.
    pub fn emit(&self, sink: Option<&AnalyticsSink>) {
        if let Some(sink) = sink {
            sink(self.name(), &self.payload());
        }
    }
}

/// Sink that logs every event through `tracing`.
pub fn tracing_sink() -> AnalyticsSink {
    Arc::new(|event: &str, payload: &Value| {
        tracing::info!(target: "yres::analytics", event, %payload, "analytics");
    })
}

/// A single analytics line in the JSONL log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsEntry {
    /// ISO 8601 timestamp (e.g., "2026-10-18T14:30:45.123Z")
    pub ts: String,
    pub event: String,
    pub payload: Value,
}

impl AnalyticsEntry {
    pub fn new(event: impl Into<String>, payload: Value) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: event.into(),
            payload,
        }
    }
}

/// Append-only JSONL analytics log.
pub struct JsonlAnalyticsWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlAnalyticsWriter {
    /// Open (or create) the log file in append mode.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a single line and flush.
    pub fn write(&self, entry: &AnalyticsEntry) -> std::io::Result<()> {
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        writer.flush()
    }

    /// Wrap the writer as a sink. Write failures are logged, not raised.
    pub fn into_sink(self) -> AnalyticsSink {
        let writer = Arc::new(self);
        Arc::new(move |event: &str, payload: &Value| {
            if let Err(e) = writer.write(&AnalyticsEntry::new(event, payload.clone())) {
                tracing::warn!(path = ?writer.path(), error = %e, "Failed to write analytics entry");
            }
        })
    }
}
