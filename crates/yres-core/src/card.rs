//! Per-card view model shared by the markup renderer and the desktop UI.
//!
//! Accessibility attributes are derived from [`CardState`] rather than
//! toggled in place, so a card can never show a half-flipped mix of
//! attributes.

use crate::config::CardStrings;
use crate::record::ProgramRecord;
use crate::registry::{CardState, Face};

/// Accessibility attributes for one card in a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAria {
    pub state: CardState,
    /// `aria-expanded` on the card and its toggle
    pub expanded: bool,
    pub front_hidden: bool,
    pub back_hidden: bool,
    /// Visible toggle text ("More Info" / "Less Info")
    pub toggle_label: String,
    pub toggle_aria_label: String,
}

impl CardAria {
    pub fn new(record: &ProgramRecord, state: CardState, strings: &CardStrings) -> Self {
        let open = state == CardState::Open;
        let (toggle_label, amount) = if open {
            (strings.less_info.clone(), "less")
        } else {
            (strings.more_info.clone(), "more")
        };

        Self {
            state,
            expanded: open,
            front_hidden: open,
            back_hidden: !open,
            toggle_label,
            toggle_aria_label: format!("Show {} information about {}", amount, record.title),
        }
    }

    /// Whether interactive elements on `face` are in the tab order.
    pub fn face_tabbable(&self, face: Face) -> bool {
        match face {
            Face::Front => !self.front_hidden,
            Face::Back => !self.back_hidden,
        }
    }

    /// `tabindex` for an ordinary control on `face`: `None` keeps the
    /// natural tab order, `Some(-1)` removes it.
    pub fn tabindex(&self, face: Face) -> Option<i32> {
        if self.face_tabbable(face) {
            None
        } else {
            Some(-1)
        }
    }
}

/// Primary call-to-action on one face.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CtaView {
    pub label: String,
    /// `None` for the sold-out placeholder
    pub href: Option<String>,
    pub disabled: bool,
    pub tabindex: Option<i32>,
}

impl CtaView {
    pub fn class(&self) -> &'static str {
        if self.disabled {
            "program-card__btn program-card__btn--disabled"
        } else {
            "program-card__btn program-card__btn--primary"
        }
    }
}

/// Everything needed to draw one card.
#[derive(Debug, Clone)]
pub struct CardView<'a> {
    pub record: &'a ProgramRecord,
    pub position: usize,
    pub aria: CardAria,
    strings: &'a CardStrings,
}

impl<'a> CardView<'a> {
    pub fn new(
        record: &'a ProgramRecord,
        position: usize,
        state: CardState,
        strings: &'a CardStrings,
    ) -> Self {
        Self {
            record,
            position,
            aria: CardAria::new(record, state, strings),
            strings,
        }
    }

    pub fn cta(&self, face: Face) -> CtaView {
        if self.record.is_sold_out() {
            let label = match face {
                Face::Front => &self.strings.waitlist,
                Face::Back => &self.strings.join_waitlist,
            };
            return CtaView {
                label: label.clone(),
                href: None,
                disabled: true,
                tabindex: Some(-1),
            };
        }

        let label = if self.record.cta_text.trim().is_empty() {
            self.strings.register.clone()
        } else {
            self.record.cta_text.clone()
        };

        CtaView {
            label,
            href: Some(self.record.cta_href.clone()),
            disabled: false,
            tabindex: self.aria.tabindex(face),
        }
    }

    /// Spots line, when the feed reports availability.
    pub fn spots_label(&self) -> Option<String> {
        self.record.spots_left.map(|count| {
            if count == 0 {
                self.strings.sold_out.clone()
            } else {
                self.strings.spots_left_label(count)
            }
        })
    }

    /// Icon/text pairs for the meta block; price only when present.
    pub fn meta_items(&self) -> Vec<(&'static str, &'a str)> {
        let record = self.record;
        let mut items = vec![
            ("📚", record.age_grade.as_str()),
            ("⏰", record.duration.as_str()),
            ("📍", record.location.as_str()),
            ("📅", record.date_range.as_str()),
        ];
        if let Some(price) = record.price.as_deref().filter(|p| !p.is_empty()) {
            items.push(("💰", price));
        }
        items
    }
}
