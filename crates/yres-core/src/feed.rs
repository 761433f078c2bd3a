//! Program feed loader.
//!
//! The feed is read exactly once per mount. HTTP requests carry no-cache
//! headers and files are re-read from disk on every call, so a stale copy
//! is never served.

use std::path::PathBuf;
use std::str::FromStr;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::error::{WidgetError, WidgetResult};
use crate::record::{validate_records, FeedReport};

/// Message shown in place of the grid when no programs could be loaded.
pub const FALLBACK_MESSAGE: &str = "Failed to load programs. Check programs.json.";

/// Where the program feed lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    File(PathBuf),
    Url(String),
}

impl FromStr for FeedSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(FeedSource::Url(s.to_string()))
        } else {
            Ok(FeedSource::File(PathBuf::from(s)))
        }
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::File(path) => write!(f, "{}", path.display()),
            FeedSource::Url(url) => write!(f, "{}", url),
        }
    }
}

impl Default for FeedSource {
    fn default() -> Self {
        FeedSource::File(PathBuf::from("programs.json"))
    }
}

/// Load and validate the feed, surfacing every failure.
pub async fn try_load_programs(source: &FeedSource) -> WidgetResult<FeedReport> {
    debug!(%source, "Loading program feed");

    let body = match source {
        FeedSource::File(path) => tokio::fs::read(path).await?,
        FeedSource::Url(url) => fetch(url).await?,
    };

    let values: Vec<Value> = serde_json::from_slice(&body)?;
    let report = validate_records(values);

    info!(
        %source,
        accepted = report.records.len(),
        rejected = report.rejected.len(),
        "Program feed loaded"
    );
    Ok(report)
}

/// Load the feed, degrading to an empty report on any failure.
///
/// The error is logged; callers show [`FALLBACK_MESSAGE`] when the report
/// has no records. There is no retry.
pub async fn load_programs(source: &FeedSource) -> FeedReport {
    match try_load_programs(source).await {
        Ok(report) => report,
        Err(e) => {
            error!(%source, error = %e, "Error loading programs");
            FeedReport::default()
        }
    }
}

async fn fetch(url: &str) -> WidgetResult<Vec<u8>> {
    let response = reqwest::Client::new()
        .get(url)
        .header(CACHE_CONTROL, "no-cache")
        .header(PRAGMA, "no-cache")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(WidgetError::HttpStatus(status.as_u16()));
    }

    Ok(response.bytes().await?.to_vec())
}
