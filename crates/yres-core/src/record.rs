//! Program record schema and load-time validation.
//!
//! Records arrive as a JSON array with camelCase keys. Each element is
//! decoded on its own so one broken entry is reported and skipped instead
//! of taking the whole feed down.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Maximum number of tags shown on a card front.
pub const MAX_VISIBLE_TAGS: usize = 3;

/// A program listing as delivered by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramRecord {
    /// Unique id, also used as the card's element id
    pub id: String,
    pub title: String,
    pub category: String,
    pub age_grade: String,
    pub duration: String,
    pub location: String,
    pub date_range: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// `Some(0)` marks the program as sold out
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spots_left: Option<u32>,
    pub details: Vec<String>,
    pub short_blurb: String,
    pub thumbnail: String,
    pub alt: String,
    pub cta_href: String,
    pub cta_text: String,
}

impl ProgramRecord {
    /// True when registration is closed and the CTA becomes a waitlist placeholder.
    pub fn is_sold_out(&self) -> bool {
        self.spots_left == Some(0)
    }

    /// Tags rendered on the card, at most [`MAX_VISIBLE_TAGS`].
    pub fn visible_tags(&self) -> &[String] {
        match &self.tags {
            Some(tags) => &tags[..tags.len().min(MAX_VISIBLE_TAGS)],
            None => &[],
        }
    }

    /// Element id of the front-face heading.
    pub fn title_id(&self) -> String {
        format!("{}-title", self.id)
    }

    /// Element id of the back face region.
    pub fn back_id(&self) -> String {
        format!("{}-back", self.id)
    }

    /// Element id of the back-face heading (deferred focus target).
    pub fn back_title_id(&self) -> String {
        format!("{}-back-title", self.id)
    }

    /// Element id of the "more info" toggle.
    pub fn toggle_id(&self) -> String {
        format!("{}-more", self.id)
    }
}

/// One feed element that was rejected during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    /// Position of the element in the feed array
    pub index: usize,
    /// Record id, when it could be read
    pub id: Option<String>,
    pub reason: String,
}

impl std::fmt::Display for RecordIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.id {
            Some(id) => write!(f, "#{} ({}): {}", self.index, id, self.reason),
            None => write!(f, "#{}: {}", self.index, self.reason),
        }
    }
}

/// Outcome of validating a feed: accepted records in input order plus rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeedReport {
    pub records: Vec<ProgramRecord>,
    pub rejected: Vec<RecordIssue>,
}

impl FeedReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Decode and validate raw feed elements.
///
/// Rejects elements that do not match the schema, have a blank id, or reuse
/// an id already accepted earlier in the feed.
pub fn validate_records(values: Vec<Value>) -> FeedReport {
    let mut report = FeedReport::default();
    let mut seen = HashSet::new();

    for (index, value) in values.into_iter().enumerate() {
        let raw_id = value
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string);

        let issue = match serde_json::from_value::<ProgramRecord>(value) {
            Ok(record) if record.id.trim().is_empty() => Some("empty id".to_string()),
            Ok(record) if seen.contains(&record.id) => {
                Some(format!("duplicate id '{}'", record.id))
            }
            Ok(record) => {
                seen.insert(record.id.clone());
                report.records.push(record);
                None
            }
            Err(e) => Some(e.to_string()),
        };

        if let Some(reason) = issue {
            warn!(index, id = ?raw_id, %reason, "Rejected program record");
            report.rejected.push(RecordIssue {
                index,
                id: raw_id,
                reason,
            });
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample(id: &str) -> Value {
        json!({
            "id": id,
            "title": "Robotics Club",
            "category": "stem",
            "ageGrade": "Grades 5-8",
            "duration": "8 weeks",
            "location": "Markham",
            "dateRange": "Jan 10 - Mar 1",
            "details": ["Hands-on builds"],
            "shortBlurb": "Build and code robots.",
            "thumbnail": "img/robotics.jpg",
            "alt": "Students with a robot",
            "ctaHref": "https://example.org/register",
            "ctaText": "Register"
        })
    }

    #[test]
    fn optional_fields_default_to_none() {
        let report = validate_records(vec![sample("robotics")]);
        assert!(report.is_clean());
        let record = &report.records[0];
        assert_eq!(record.price, None);
        assert_eq!(record.tags, None);
        assert_eq!(record.spots_left, None);
        assert!(!record.is_sold_out());
        assert!(record.visible_tags().is_empty());
    }

    #[test]
    fn only_three_tags_visible() {
        let mut value = sample("robotics");
        value["tags"] = json!(["a", "b", "c", "d", "e"]);
        let report = validate_records(vec![value]);
        assert_eq!(report.records[0].visible_tags(), ["a", "b", "c"]);
    }

    #[test]
    fn sold_out_only_at_zero() {
        let mut value = sample("robotics");
        value["spotsLeft"] = json!(0);
        let report = validate_records(vec![value]);
        assert!(report.records[0].is_sold_out());

        let mut value = sample("chess");
        value["spotsLeft"] = json!(4);
        let report = validate_records(vec![value]);
        assert!(!report.records[0].is_sold_out());
    }

    #[test]
    fn missing_required_field_is_reported() {
        let mut value = sample("robotics");
        value.as_object_mut().unwrap().remove("title");
        let report = validate_records(vec![value, sample("chess")]);

        assert_eq!(report.records.len(), 1);
        assert_eq!(report.records[0].id, "chess");
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].index, 0);
        assert_eq!(report.rejected[0].id.as_deref(), Some("robotics"));
        assert!(report.rejected[0].reason.contains("title"));
    }

    #[test]
    fn duplicate_and_blank_ids_rejected() {
        let report = validate_records(vec![sample("a"), sample("a"), sample("  ")]);
        assert_eq!(report.records.len(), 1);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].reason, "duplicate id 'a'");
        assert_eq!(report.rejected[1].reason, "empty id");
    }

    #[test]
    fn element_ids() {
        let report = validate_records(vec![sample("robotics")]);
        let record = &report.records[0];
        assert_eq!(record.title_id(), "robotics-title");
        assert_eq!(record.back_id(), "robotics-back");
        assert_eq!(record.back_title_id(), "robotics-back-title");
        assert_eq!(record.toggle_id(), "robotics-more");
    }
}
