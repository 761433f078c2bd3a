//! Static HTML markup for program cards.
//!
//! Free text from the feed (title, blurb, alt text, tags, detail items) is
//! always passed through [`escape`]. Category and the meta lines are
//! structured fields supplied by the site maintainers and are inserted as-is.

use crate::card::{CardView, CtaView};
use crate::config::CardStrings;
use crate::container::GridContainer;
use crate::escape::escape;
use crate::feed::FALLBACK_MESSAGE;
use crate::record::ProgramRecord;
use crate::registry::{CardState, Face};

fn tabindex_attr(tabindex: Option<i32>) -> String {
    tabindex
        .map(|t| format!(r#" tabindex="{}""#, t))
        .unwrap_or_default()
}

fn render_cta(cta: &CtaView, extra_style: &str) -> String {
    let href = cta
        .href
        .as_ref()
        .map(|h| format!(r#" href="{}""#, escape(h)))
        .unwrap_or_default();
    let disabled = if cta.disabled {
        r#" aria-disabled="true""#
    } else {
        ""
    };

    format!(
        r#"<a class="{class}"{href}{extra_style}{disabled}{tabindex}>{label}</a>"#,
        class = cta.class(),
        href = href,
        extra_style = extra_style,
        disabled = disabled,
        tabindex = tabindex_attr(cta.tabindex),
        label = escape(&cta.label),
    )
}

/// Markup for one card in `state`.
pub fn render_card(
    record: &ProgramRecord,
    position: usize,
    state: CardState,
    strings: &CardStrings,
) -> String {
    let view = CardView::new(record, position, state, strings);
    let aria = &view.aria;
    let title = escape(&record.title);

    let meta: String = view
        .meta_items()
        .into_iter()
        .map(|(icon, text)| format!(r#"<div class="program-card__meta-item">{} {}</div>"#, icon, text))
        .collect();

    let tags = if record.visible_tags().is_empty() {
        String::new()
    } else {
        let items: String = record
            .visible_tags()
            .iter()
            .map(|t| format!(r#"<span class="program-card__tag">{}</span>"#, escape(t)))
            .collect();
        format!(r#"<div class="program-card__tags">{}</div>"#, items)
    };

    let spots = view
        .spots_label()
        .map(|label| format!(r#"<div class="program-card__spots">{}</div>"#, escape(&label)))
        .unwrap_or_default();

    let details: String = record
        .details
        .iter()
        .map(|d| format!(r#"<li class="program-card__detail-item">{}</li>"#, escape(d)))
        .collect();

    format!(
        r#"<article class="program-card" id="{id}" aria-expanded="{expanded}" data-position="{position}">
  <div class="program-card__flipper">
    <div class="program-card__front" aria-hidden="{front_hidden}">
      <img src="{thumbnail}" alt="{alt}" class="program-card__image" loading="lazy" />
      <div class="program-card__content">
        <div class="program-card__header">
          <span class="program-card__category program-card__category--{category}">{category}</span>
          <h2 class="program-card__title" id="{title_id}">{title}</h2>
        </div>
        <div class="program-card__meta">{meta}</div>
        {tags}
        {spots}
        <div class="program-card__actions">
          <button class="program-card__btn program-card__btn--secondary" id="{toggle_id}" type="button" aria-label="{toggle_aria}" aria-controls="{back_id}" aria-expanded="{expanded}"{front_tab}>{toggle_label}</button>
          {front_cta}
        </div>
      </div>
    </div>
    <div class="program-card__back" id="{back_id}" role="region" aria-labelledby="{title_id}" aria-hidden="{back_hidden}">
      <div class="program-card__back-content">
        <div class="program-card__back-header">
          <h3 class="program-card__back-title" id="{back_title_id}" tabindex="-1">{title}</h3>
          <button class="program-card__close" type="button" aria-label="Close details"{back_tab}>✕</button>
        </div>
        <p class="program-card__blurb">{blurb}</p>
        <ul class="program-card__detail-list">{details}</ul>
        <div class="program-card__back-cta">{back_cta}</div>
      </div>
    </div>
  </div>
</article>"#,
        id = escape(&record.id),
        expanded = aria.expanded,
        position = position,
        front_hidden = aria.front_hidden,
        back_hidden = aria.back_hidden,
        thumbnail = escape(&record.thumbnail),
        alt = escape(&record.alt),
        category = record.category,
        title_id = escape(&record.title_id()),
        title = title,
        meta = meta,
        tags = tags,
        spots = spots,
        toggle_id = escape(&record.toggle_id()),
        toggle_aria = escape(&aria.toggle_aria_label),
        back_id = escape(&record.back_id()),
        front_tab = tabindex_attr(aria.tabindex(Face::Front)),
        toggle_label = escape(&aria.toggle_label),
        front_cta = render_cta(&view.cta(Face::Front), ""),
        back_title_id = escape(&record.back_title_id()),
        back_tab = tabindex_attr(aria.tabindex(Face::Back)),
        blurb = escape(&record.short_blurb),
        details = details,
        back_cta = render_cta(&view.cta(Face::Back), r#" style="width:100%""#),
    )
}

/// Markup for a mounted grid: every card in its current state, built in one
/// pass and wrapped in the container element.
///
/// An uninitialized container renders empty.
pub fn render_grid(container: &GridContainer) -> String {
    let Some(registry) = container.registry() else {
        return String::new();
    };

    let cards: Vec<String> = registry
        .cards()
        .iter()
        .enumerate()
        .map(|(position, record)| {
            render_card(record, position, registry.state(position), registry.strings())
        })
        .collect();

    format!(
        "<div class=\"program-cards\" id=\"{id}\" data-pc-init=\"1\" style=\"--title-lines: {lines}\">\n{cards}\n</div>",
        id = escape(container.id()),
        lines = container.title_lines(),
        cards = cards.join("\n"),
    )
}

/// Placeholder shown when the feed produced no programs.
pub fn render_fallback() -> String {
    format!(
        r#"<p class="program-cards__fallback" style="text-align:center;color:#666">{}</p>"#,
        escape(FALLBACK_MESSAGE)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardOptions;

    fn record() -> ProgramRecord {
        ProgramRecord {
            id: "robotics".to_string(),
            title: "Robots <b>& more</b>".to_string(),
            category: "stem".to_string(),
            age_grade: "Grades 5-8".to_string(),
            duration: "8 weeks".to_string(),
            location: "Markham".to_string(),
            date_range: "Jan - Mar".to_string(),
            price: None,
            tags: Some(vec![
                "<i>coding</i>".to_string(),
                "teams".to_string(),
                "lego".to_string(),
                "overflowtag".to_string(),
            ]),
            spots_left: Some(0),
            details: vec!["Bring a \"laptop\"".to_string()],
            short_blurb: "<script>alert('x')</script>".to_string(),
            thumbnail: "robotics.jpg".to_string(),
            alt: "Kids' robot".to_string(),
            cta_href: "https://example.org/robotics".to_string(),
            cta_text: "Register".to_string(),
        }
    }

    #[test]
    fn free_text_is_escaped() {
        let html = render_card(&record(), 0, CardState::Closed, &CardStrings::default());
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<i>coding"));
        assert!(html.contains("Robots &lt;b&gt;&amp; more&lt;/b&gt;"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains(r#"alt="Kids&#39; robot""#));
        assert!(html.contains("Bring a &quot;laptop&quot;"));
    }

    #[test]
    fn only_three_tags_rendered() {
        let html = render_card(&record(), 0, CardState::Closed, &CardStrings::default());
        assert_eq!(html.matches("program-card__tag\"").count(), 3);
        assert!(!html.contains("overflowtag"));
    }

    #[test]
    fn sold_out_renders_placeholders() {
        let html = render_card(&record(), 0, CardState::Closed, &CardStrings::default());
        assert!(html.contains(
            r#"<a class="program-card__btn program-card__btn--disabled" aria-disabled="true" tabindex="-1">Waitlist</a>"#
        ));
        assert!(html.contains(
            r#"<a class="program-card__btn program-card__btn--disabled" style="width:100%" aria-disabled="true" tabindex="-1">Join Waitlist</a>"#
        ));
        assert!(!html.contains("https://example.org/robotics"));
        assert!(html.contains("Sold Out"));
    }

    #[test]
    fn open_state_flips_attributes() {
        let mut rec = record();
        rec.spots_left = None;
        let html = render_card(&rec, 2, CardState::Open, &CardStrings::default());
        assert!(html.contains(r#"aria-expanded="true" data-position="2""#));
        assert!(html.contains(r#"class="program-card__front" aria-hidden="true""#));
        assert!(html.contains(r#"aria-hidden="false">"#));
        assert!(html.contains(r#"aria-expanded="true" tabindex="-1">Less Info</button>"#));
        assert!(html.contains(r#"aria-label="Close details">✕</button>"#));
    }

    #[test]
    fn grid_wraps_cards_with_line_clamp() {
        let mut grid = GridContainer::new("programCardsGrid");
        let mut options = CardOptions::default();
        options.line_clamp.title = 3;
        let mut second = record();
        second.id = "chess".to_string();
        grid.initialize(vec![record(), second], options);

        let html = render_grid(&grid);
        assert!(html.starts_with(r#"<div class="program-cards" id="programCardsGrid" data-pc-init="1" style="--title-lines: 3">"#));
        assert!(html.find(r#"id="robotics""#).unwrap() < html.find(r#"id="chess""#).unwrap());
    }

    #[test]
    fn uninitialized_grid_renders_nothing() {
        assert_eq!(render_grid(&GridContainer::new("grid")), "");
        assert!(render_fallback().contains("Failed to load programs"));
    }
}
