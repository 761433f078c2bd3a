//! Settings and page-state context for the YRES widgets.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let settings = use_settings();
//! let page = use_page();
//! ```

use dioxus::prelude::*;
use yres_core::{CardOptions, FeedSource, Page, WidgetConfig};

/// Resolved startup settings.
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub config: WidgetConfig,
    pub feed: FeedSource,
}

impl Settings {
    pub fn new(config: WidgetConfig) -> Self {
        let feed = config.feed_source();
        Self { config, feed }
    }

    /// Card options for a program grid.
    ///
    /// A broken analytics destination is logged and the grid mounts without
    /// analytics.
    pub fn card_options(&self) -> CardOptions {
        match self.config.programs.to_options() {
            Ok(options) => options,
            Err(e) => {
                tracing::error!(error = %e, "Failed to open analytics sink");
                self.programs_without_analytics()
            }
        }
    }

    fn programs_without_analytics(&self) -> CardOptions {
        let programs = &self.config.programs;
        CardOptions {
            line_clamp: programs.line_clamp,
            analytics: None,
            strings: programs.strings.clone(),
        }
    }
}

/// Hook to access the startup settings.
pub fn use_settings() -> Settings {
    use_context::<Settings>()
}

/// Hook to access the page holding every mounted program grid.
///
/// All grids on a page share this signal so document-level input (outside
/// clicks, Escape) reaches each of them.
pub fn use_page() -> Signal<Page> {
    use_context::<Signal<Page>>()
}
