//! Donation card content and view model.
//!
//! [`DonationProps`] holds the editable content; [`DonationView`] derives
//! everything the card paints (formatted amounts, progressbar attributes,
//! bar label visibility). The desktop component and [`render_donation_card`]
//! both render from the same view.

use serde::{Deserialize, Serialize};

use crate::escape::escape;
use crate::progress::{compute_progress, format_cad, Progress};

/// Mission text: one paragraph or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MissionBody {
    Single(String),
    Paragraphs(Vec<String>),
}

impl MissionBody {
    pub fn paragraphs(&self) -> Vec<&str> {
        match self {
            MissionBody::Single(text) => vec![text.as_str()],
            MissionBody::Paragraphs(paragraphs) => paragraphs.iter().map(String::as_str).collect(),
        }
    }
}

/// Donation card content. Every field can be overridden independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DonationProps {
    pub title: String,
    pub subtitle: String,
    pub mission_heading: String,
    pub mission_body: MissionBody,
    pub progress_heading: String,
    pub cta_text: String,
    pub cta_href: String,
    /// Accessible name of the CTA link
    pub cta_aria_label: String,
    /// Line appended to the raised/goal caption
    pub caption: String,
    pub raised: f64,
    pub goal: f64,
}

impl Default for DonationProps {
    fn default() -> Self {
        Self {
            title: "Donate".to_string(),
            subtitle: "Make an Impact with YRES".to_string(),
            mission_heading: "Our Mission".to_string(),
            mission_body: MissionBody::Paragraphs(vec![
                "Our mission at York Region Educational Services is to provide accessible and high-quality learning opportunities for the York Region community.".to_string(),
                "To cut current program costs, improve quality, and commence new initiatives, our goal is to raise $15,000 CAD.".to_string(),
            ]),
            progress_heading: "We've Raised…".to_string(),
            cta_text: "Donate Now".to_string(),
            cta_href: "https://www.canadahelps.org/en/".to_string(),
            cta_aria_label: "Donate now via CanadaHelps (opens in new tab)".to_string(),
            caption: "Help us meet our goal!".to_string(),
            raised: 2500.0,
            goal: 15000.0,
        }
    }
}

/// Everything the card needs to paint, derived from props.
#[derive(Debug, Clone, PartialEq)]
pub struct DonationView {
    pub progress: Progress,
    pub raised_label: String,
    pub goal_label: String,
}

impl DonationView {
    pub fn new(props: &DonationProps) -> Self {
        Self {
            progress: compute_progress(props.raised, props.goal),
            raised_label: format_cad(props.raised),
            goal_label: format_cad(props.goal),
        }
    }

    /// `aria-label` of the progressbar element.
    pub fn progress_aria_label(&self) -> String {
        format!(
            "Fundraising progress: {} percent complete",
            self.progress.aria_value()
        )
    }

    /// Text painted inside the bar, if it fits.
    pub fn bar_label(&self) -> Option<String> {
        self.progress
            .shows_bar_label()
            .then(|| format!("{}%", self.progress.aria_value()))
    }
}

/// Static HTML for the donation card.
pub fn render_donation_card(props: &DonationProps) -> String {
    let view = DonationView::new(props);
    let progress = &view.progress;

    let mission: String = props
        .mission_body
        .paragraphs()
        .into_iter()
        .map(|p| format!(r#"<p class="donation-card__paragraph">{}</p>"#, escape(p)))
        .collect();

    let bar_label = view
        .bar_label()
        .map(|label| format!(r#"<span class="donation-card__bar-label">{}</span>"#, label))
        .unwrap_or_default();

    format!(
        r#"<div class="donation-card">
  <div class="donation-card__header">
    <h2 class="donation-card__title">{title}</h2>
    <p class="donation-card__subtitle">{subtitle}</p>
  </div>
  <div class="donation-card__cta">
    <a class="donation-card__button" href="{href}" target="_blank" rel="noopener noreferrer" aria-label="{cta_label}">{cta}</a>
  </div>
  <div class="donation-card__mission">
    <h3 class="donation-card__heading">{mission_heading}</h3>
    <div class="donation-card__body">{mission}</div>
  </div>
  <div class="donation-card__progress">
    <h4 class="donation-card__subheading">{progress_heading}</h4>
    <div class="donation-card__track" role="progressbar" aria-valuenow="{value}" aria-valuemin="0" aria-valuemax="100" aria-label="{aria_label}">
      <div class="donation-card__fill" style="width: {width}">{bar_label}</div>
    </div>
    <p class="donation-card__caption" aria-live="polite" aria-atomic="true"><strong>{raised}</strong> / <strong>{goal}</strong> <span class="donation-card__note">{note}</span></p>
  </div>
</div>"#,
        title = escape(&props.title),
        subtitle = escape(&props.subtitle),
        href = escape(&props.cta_href),
        cta_label = escape(&props.cta_aria_label),
        cta = escape(&props.cta_text),
        mission_heading = escape(&props.mission_heading),
        mission = mission,
        progress_heading = escape(&props.progress_heading),
        value = progress.aria_value(),
        aria_label = view.progress_aria_label(),
        width = progress.bar_width(),
        bar_label = bar_label,
        raised = view.raised_label,
        goal = view.goal_label,
        note = escape(&props.caption),
    )
}
