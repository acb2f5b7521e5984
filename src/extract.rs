// src/extract.rs
//
// Turns rendered markup into JobRecords. Tied to the site's current
// class names; a layout change breaks this module first.

use scraper::{ElementRef, Html, Selector};

use crate::config::consts::SITE_ORIGIN;
use crate::data::JobRecord;

/// Extraction result plus how many card blocks were dropped for
/// missing fields, so incomplete cards don't vanish silently.
pub struct Extraction {
    pub records: Vec<JobRecord>,
    pub skipped: usize,
}

struct Selectors {
    card: Selector,
    logo: Selector,
    logo_image: Selector,
    content: Selector,
    title: Selector,
    location: Selector,
    deadline: Selector,
    link: Selector,
}

impl Selectors {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            card: sel("div.mp-card.job-card")?,
            logo: sel("div.logo-container")?,
            logo_image: sel("img.logo-container__image")?,
            content: sel("div.content")?,
            title: sel("h3.header__title")?,
            location: sel("span.mp-text__default--regular.mp-text--no-margin")?,
            deadline: sel("time.mp-text__default--bold")?,
            link: sel("div.content__header.header a")?,
        })
    }
}

fn sel(css: &str) -> Result<Selector, Box<dyn std::error::Error>> {
    Selector::parse(css).map_err(|e| format!("Bad selector {css:?}: {e}").into())
}

/// Walk the job cards and their logo containers, pairing them
/// positionally (card i ↔ logo i). When the counts diverge, zip
/// truncates to the shorter side — the site renders them 1:1.
pub fn extract_jobs(markup: &str) -> Result<Extraction, Box<dyn std::error::Error>> {
    let selectors = Selectors::new()?;
    let doc = Html::parse_document(markup);

    let cards: Vec<ElementRef> = doc.select(&selectors.card).collect();
    let logos: Vec<ElementRef> = doc.select(&selectors.logo).collect();

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (card, logo) in cards.iter().zip(logos.iter()) {
        let company = logo
            .select(&selectors.logo_image)
            .next()
            .and_then(|img| img.value().attr("alt"))
            .map(normalize_ws);

        for content in card.select(&selectors.content) {
            let title = text_of(&content, &selectors.title);
            let location = text_of(&content, &selectors.location);
            let deadline = text_of(&content, &selectors.deadline);
            let href = content
                .select(&selectors.link)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string);

            // All or nothing: a block missing any field emits no record.
            match (&company, title, location, deadline, href) {
                (Some(company), Some(position), Some(location), Some(deadline), Some(href)) => {
                    records.push(JobRecord {
                        position,
                        company: company.clone(),
                        location,
                        deadline,
                        link: absolute_link(&href),
                    });
                }
                _ => skipped += 1,
            }
        }
    }

    Ok(Extraction { records, skipped })
}

fn text_of(scope: &ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|el| normalize_ws(&el.text().collect::<String>()))
        .filter(|t| !t.is_empty())
}

/// Collapse runs of whitespace to single spaces and trim the ends.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// The cards carry site-relative hrefs.
fn absolute_link(href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        s!(href)
    } else {
        format!("{SITE_ORIGIN}{href}")
    }
}
