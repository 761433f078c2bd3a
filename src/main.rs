#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use yres_core::{WidgetConfig, WidgetResult};

use crate::context::Settings;

/// Global settings, resolved from the config file and command line
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Get the resolved settings (defaults if startup did not set them)
pub fn get_settings() -> Settings {
    SETTINGS.get().cloned().unwrap_or_default()
}

/// Store the startup settings. Only the first call takes effect.
fn store_settings(settings: Settings) {
    if let Err(rejected) = SETTINGS.set(settings) {
        tracing::warn!(feed = %rejected.feed, "Settings already initialized, keeping the first value");
    }
}

/// YRES Widgets - donation card and program grid
#[derive(Parser, Debug)]
#[command(name = "yres-desktop")]
#[command(about = "YRES Widgets - donation card and program grid")]
struct Args {
    /// Config file (default: <config dir>/yres/widgets.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Program feed path or URL, overriding the config file
    #[arg(short, long)]
    feed: Option<String>,

    /// Amount raised, overriding the config file
    #[arg(long)]
    raised: Option<f64>,

    /// Fundraising goal, overriding the config file
    #[arg(long)]
    goal: Option<f64>,
}

fn resolve_settings(args: Args) -> WidgetResult<Settings> {
    let config = WidgetConfig::load_or_default(args.config.as_deref())?;
    apply_overrides(config, args)
}

/// Layer command-line values over the loaded config and re-check the result.
fn apply_overrides(mut config: WidgetConfig, args: Args) -> WidgetResult<Settings> {
    if let Some(feed) = args.feed {
        config.feed = Some(feed);
    }
    if let Some(raised) = args.raised {
        config.donation.raised = raised;
    }
    if let Some(goal) = args.goal {
        config.donation.goal = goal;
    }
    config.validate()?;

    Ok(Settings::new(config))
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let settings = match resolve_settings(args) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Invalid settings, using defaults");
            Settings::default()
        }
    };

    tracing::info!(feed = %settings.feed, "Starting YRES widgets");
    store_settings(settings);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("YRES Widgets")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let argv = std::iter::once("yres-desktop").chain(extra.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn overrides_replace_config_values() {
        let settings = apply_overrides(
            WidgetConfig::default(),
            args(&["--raised", "4000", "--goal", "20000", "--feed", "feed.json"]),
        )
        .unwrap();

        assert_eq!(settings.config.donation.raised, 4000.0);
        assert_eq!(settings.config.donation.goal, 20000.0);
        assert_eq!(settings.config.feed.as_deref(), Some("feed.json"));
    }

    #[test]
    fn negative_goal_is_rejected() {
        let result = apply_overrides(WidgetConfig::default(), args(&["--goal=-5"]));
        assert!(matches!(result, Err(yres_core::WidgetError::Config(_))));
    }

    #[test]
    fn first_stored_settings_win() {
        let first = apply_overrides(WidgetConfig::default(), args(&["--feed", "first.json"])).unwrap();
        let second = apply_overrides(WidgetConfig::default(), args(&["--feed", "second.json"])).unwrap();

        store_settings(first);
        store_settings(second);

        assert_eq!(get_settings().config.feed.as_deref(), Some("first.json"));
    }

    #[test]
    fn zero_goal_is_accepted() {
        let settings = apply_overrides(WidgetConfig::default(), args(&["--goal", "0"])).unwrap();
        assert_eq!(settings.config.donation.goal, 0.0);
    }
}
