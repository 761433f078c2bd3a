//! YRES Widgets CLI
//!
//! Thin wrapper around yres-core for checking feeds and producing static
//! markup.
//!
//! ## Usage
//!
//! ```bash
//! # Percentages and currency for a raised/goal pair
//! yres progress --raised 2500 --goal 15000
//!
//! # Report records the feed loader would reject
//! yres validate programs.json
//!
//! # Static program grid
//! yres render programs https://yres.ca/programs.json --out grid.html
//!
//! # Static donation card with overridden figures
//! yres render donation --raised 4000 --goal 15000
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use yres_core::{
    compute_progress, format_cad, render_donation_card, render_fallback, render_grid,
    try_load_programs, FeedSource, Page, WidgetConfig,
};

/// Container id used for statically rendered grids
const GRID_ID: &str = "programCardsGrid";

/// YRES Widgets - donation card and program grid tooling
#[derive(Parser)]
#[command(name = "yres")]
#[command(version = "0.1.0")]
#[command(about = "YRES Widgets - donation card and program grid tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/yres/widgets.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show fundraising progress for a raised/goal pair
    Progress {
        #[arg(long)]
        raised: f64,
        #[arg(long)]
        goal: f64,
        /// Print the raw percentages as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a program feed and report rejected records
    Validate {
        /// Feed path or URL (default: feed from config, else programs.json)
        feed: Option<String>,
    },

    /// Render static HTML
    Render {
        #[command(subcommand)]
        target: RenderTarget,
    },
}

#[derive(Subcommand)]
enum RenderTarget {
    /// Program card grid, or the fallback message when the feed is empty
    Programs {
        /// Feed path or URL (default: feed from config, else programs.json)
        feed: Option<String>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Donation card
    Donation {
        #[arg(long)]
        raised: Option<f64>,
        #[arg(long)]
        goal: Option<f64>,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the feed argument against the config file.
fn feed_source(arg: Option<String>, config: &WidgetConfig) -> FeedSource {
    match arg {
        Some(feed) => feed.parse().unwrap_or_default(),
        None => config.feed_source(),
    }
}

fn write_output(out: Option<&Path>, html: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "Wrote markup");
        }
        None => println!("{}", html),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = WidgetConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?;
    debug!(?config, "Resolved config");

    match cli.command {
        Commands::Progress { raised, goal, json } => {
            if goal < 0.0 {
                bail!("Goal must not be negative (got {})", goal);
            }
            let progress = compute_progress(raised, goal);

            if json {
                println!("{}", serde_json::to_string_pretty(&progress)?);
            } else {
                println!("Raised:   {}", format_cad(raised));
                println!("Goal:     {}", format_cad(goal));
                println!("Progress: {}%", progress.display_percent);
                println!("Bar:      {}", progress.bar_width());
            }
        }

        Commands::Validate { feed } => {
            let source = feed_source(feed, &config);
            let report = try_load_programs(&source)
                .await
                .with_context(|| format!("Failed to load feed {}", source))?;

            println!("Feed: {}", source);
            println!("Accepted: {}", report.records.len());
            for record in &report.records {
                println!("  {} ({})", record.id, record.title);
            }

            if !report.is_clean() {
                println!("Rejected: {}", report.rejected.len());
                for issue in &report.rejected {
                    println!("  {}", issue);
                }
                bail!("{} record(s) rejected", report.rejected.len());
            }
        }

        Commands::Render { target } => match target {
            RenderTarget::Programs { feed, out } => {
                let source = feed_source(feed, &config);
                // Rendering degrades to the fallback message, like the page does.
                let report = yres_core::load_programs(&source).await;

                let html = if report.records.is_empty() {
                    render_fallback()
                } else {
                    let options = config.programs.to_options()?;
                    let mut page = Page::new();
                    let grid = page.container_mut(GRID_ID);
                    grid.initialize(report.records, options);
                    render_grid(grid)
                };

                write_output(out.as_deref(), &html)?;
            }

            RenderTarget::Donation { raised, goal, out } => {
                let mut props = config.donation.clone();
                if let Some(raised) = raised {
                    props.raised = raised;
                }
                if let Some(goal) = goal {
                    if goal < 0.0 {
                        bail!("Goal must not be negative (got {})", goal);
                    }
                    props.goal = goal;
                }

                write_output(out.as_deref(), &render_donation_card(&props))?;
            }
        },
    }

    Ok(())
}
