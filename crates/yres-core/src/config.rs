//! Widget configuration.
//!
//! [`CardOptions`] is the runtime option set handed to a program grid.
//! [`WidgetConfig`] is its on-disk JSON form (camelCase keys, every field
//! optional), which also carries donation card props and the feed location.
//!
//! ```json
//! {
//!   "feed": "https://yres.ca/programs.json",
//!   "programs": {
//!     "interaction": "flip",
//!     "lineClamp": { "title": 2 },
//!     "analytics": { "jsonl": "analytics.jsonl" },
//!     "strings": { "spotsLeft": "{count} seats remaining" }
//!   },
//!   "donation": { "raised": 4200, "goal": 15000 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analytics::{tracing_sink, AnalyticsSink, JsonlAnalyticsWriter};
use crate::donation::DonationProps;
use crate::error::{WidgetError, WidgetResult};
use crate::feed::FeedSource;

/// Title line clamp used when none (or zero) is configured.
pub const DEFAULT_TITLE_LINES: u8 = 2;

/// How cards reveal their details. Only flipping is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interaction {
    #[default]
    Flip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineClamp {
    pub title: u8,
}

impl Default for LineClamp {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE_LINES,
        }
    }
}

impl LineClamp {
    /// Lines applied to card titles; zero falls back to the default.
    pub fn title_lines(&self) -> u8 {
        if self.title == 0 {
            DEFAULT_TITLE_LINES
        } else {
            self.title
        }
    }
}

/// User-visible labels on program cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardStrings {
    pub more_info: String,
    pub less_info: String,
    pub sold_out: String,
    /// Remaining-spots line; `{count}` is replaced by the number
    pub spots_left: String,
    pub register: String,
    pub waitlist: String,
    pub join_waitlist: String,
}

impl Default for CardStrings {
    fn default() -> Self {
        Self {
            more_info: "More Info".to_string(),
            less_info: "Less Info".to_string(),
            sold_out: "Sold Out".to_string(),
            spots_left: "Only {count} spots left!".to_string(),
            register: "Register".to_string(),
            waitlist: "Waitlist".to_string(),
            join_waitlist: "Join Waitlist".to_string(),
        }
    }
}

impl CardStrings {
    pub fn spots_left_label(&self, count: u32) -> String {
        self.spots_left.replace("{count}", &count.to_string())
    }
}

/// Runtime options for one program grid.
#[derive(Clone, Default)]
pub struct CardOptions {
    pub line_clamp: LineClamp,
    pub analytics: Option<AnalyticsSink>,
    pub strings: CardStrings,
}

impl std::fmt::Debug for CardOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardOptions")
            .field("line_clamp", &self.line_clamp)
            .field("analytics", &self.analytics.is_some())
            .field("strings", &self.strings)
            .finish()
    }
}

impl CardOptions {
    pub fn with_analytics(mut self, sink: AnalyticsSink) -> Self {
        self.analytics = Some(sink);
        self
    }
}

/// Analytics destination as written in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsTarget {
    /// Log events through tracing
    Log,
    /// Append events to a JSONL file
    Jsonl(PathBuf),
}

impl AnalyticsTarget {
    pub fn build_sink(&self) -> WidgetResult<AnalyticsSink> {
        match self {
            AnalyticsTarget::Log => Ok(tracing_sink()),
            AnalyticsTarget::Jsonl(path) => Ok(JsonlAnalyticsWriter::open(path)?.into_sink()),
        }
    }
}

/// Program grid section of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgramsConfig {
    /// Accepted for config compatibility; `flip` is the only mode.
    pub interaction: Interaction,
    pub line_clamp: LineClamp,
    pub analytics: Option<AnalyticsTarget>,
    pub strings: CardStrings,
}

impl ProgramsConfig {
    /// Build runtime options, opening the analytics sink if one is configured.
    pub fn to_options(&self) -> WidgetResult<CardOptions> {
        let analytics = self
            .analytics
            .as_ref()
            .map(AnalyticsTarget::build_sink)
            .transpose()?;

        Ok(CardOptions {
            line_clamp: self.line_clamp,
            analytics,
            strings: self.strings.clone(),
        })
    }
}

/// Whole config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Feed path or URL
    pub feed: Option<String>,
    pub programs: ProgramsConfig,
    pub donation: DonationProps,
}

impl WidgetConfig {
    /// Parse a config file.
    pub fn load(path: impl AsRef<Path>) -> WidgetResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        info!(?path, "Loaded widget config");
        Ok(config)
    }

    /// Load `path` if given, else the default location if it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> WidgetResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn feed_source(&self) -> FeedSource {
        self.feed
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Reject values no widget can render, such as a negative goal.
    pub fn validate(&self) -> WidgetResult<()> {
        if self.donation.goal < 0.0 {
            return Err(WidgetError::Config(format!(
                "donation goal must not be negative (got {})",
                self.donation.goal
            )));
        }
        if !self.programs.strings.spots_left.contains("{count}") {
            return Err(WidgetError::Config(
                "strings.spotsLeft must contain a {count} placeholder".to_string(),
            ));
        }
        Ok(())
    }
}

/// Default config file location (`<config dir>/yres/widgets.json`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("yres").join("widgets.json"))
}
