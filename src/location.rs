use tracing::debug;

use crate::api_types::RawArticle;
use crate::models::{LocationBundle, NewsSource};
use crate::normalize::article_stub;
use crate::tables::{slugify, Tables};

const MAX_TOP_SOURCES: usize = 3;

/// Group a country's articles into a per-location bundle of top sources.
///
/// Sources are grouped by exact name equality and kept in first-seen order
/// from the input, not sorted by trust score; the first three distinct names
/// win. Returns None for an empty article set so the caller can present
/// "no data" however it likes.
pub fn build_location_bundle(
    tables: &Tables,
    country_code: &str,
    articles: &[RawArticle],
) -> Option<LocationBundle> {
    if articles.is_empty() {
        return None;
    }

    let (city, country) = tables.location(country_code);
    let coordinates = tables.coordinates(country_code);

    // first-seen-order grouping; a map would lose the input ordering
    let mut groups: Vec<(&str, Vec<&RawArticle>)> = Vec::new();
    for article in articles {
        let name = article.source.name.as_str();
        match groups.iter_mut().find(|(n, _)| *n == name) {
            Some((_, members)) => members.push(article),
            None => groups.push((name, vec![article])),
        }
    }

    debug!(
        "Location grouping - country={}, articles={}, distinct_sources={}",
        country_code,
        articles.len(),
        groups.len()
    );

    let top_sources: Vec<NewsSource> = groups
        .into_iter()
        .take(MAX_TOP_SOURCES)
        .map(|(name, members)| NewsSource {
            id: slugify(name),
            name: name.to_string(),
            logo: tables.source_logo(name),
            trust_score: tables.trust_score(name),
            description: tables.source_description(name),
            website: tables.source_website(name),
            articles: members.into_iter().map(article_stub).collect(),
        })
        .collect();

    Some(LocationBundle {
        id: format!("{}-{}", city.to_lowercase(), country_code.to_lowercase()),
        name: city.to_string(),
        country: country.to_string(),
        coordinates,
        top_sources,
    })
}
