use chrono::{DateTime, Utc};
use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

use crate::api_types::RawArticle;
use crate::categorize::categorize;
use crate::models::{ArticleStub, NormalizedArticle};
use crate::tables::Tables;

const WORDS_PER_MINUTE: u32 = 200;
const TRENDING_WINDOW_SECS: i64 = 6 * 60 * 60;
const SUMMARY_MAX_CHARS: usize = 200;

// Seed separating the synthetic view-count stream from the id stream.
const VIEWS_SEED: u64 = 0x9e3779b97f4a7c15;

/// Stable article identifier: 16 hex chars derived from the url. Same url
/// always yields the same id; collisions across distinct urls are negligible.
pub fn article_id(url: &str) -> String {
    format!("{:016x}", xxh3_64(url.as_bytes()))
}

/// Synthetic view count in [10_000, 210_000), for display and coarse
/// popularity sorting only. Deterministic per url so repeated normalization
/// of the same article agrees with itself.
pub fn synthetic_views(url: &str) -> u64 {
    10_000 + xxh3_64_with_seed(url.as_bytes(), VIEWS_SEED) % 200_000
}

/// Reading time in minutes at 200 wpm, never below 1.
pub fn read_time_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count() as u32;
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// True iff the article was published less than six hours before `now`.
/// An unparseable timestamp degrades to "not trending", never an error.
pub fn is_trending(published_at: &str, now: DateTime<Utc>) -> bool {
    match DateTime::parse_from_rfc3339(published_at) {
        Ok(published) => (now - published.with_timezone(&Utc)).num_seconds() < TRENDING_WINDOW_SECS,
        Err(_) => false,
    }
}

fn summarize(description: Option<&str>, content: Option<&str>) -> String {
    if let Some(d) = description.filter(|d| !d.is_empty()) {
        return d.to_string();
    }
    if let Some(c) = content.filter(|c| !c.is_empty()) {
        let head: String = c.chars().take(SUMMARY_MAX_CHARS).collect();
        return format!("{}...", head);
    }
    String::new()
}

/// Normalize a provider article against an explicit clock. Total over any
/// well-typed RawArticle: missing optional fields resolve via defaults.
pub fn normalize_at(
    tables: &Tables,
    raw: &RawArticle,
    country_hint: &str,
    now: DateTime<Utc>,
) -> NormalizedArticle {
    let (city, country) = tables.location(country_hint);
    let body = raw
        .content
        .as_deref()
        .filter(|c| !c.is_empty())
        .or(raw.description.as_deref())
        .unwrap_or("");

    NormalizedArticle {
        id: article_id(&raw.url),
        title: raw.title.clone(),
        summary: summarize(raw.description.as_deref(), raw.content.as_deref()),
        image_url: raw
            .url_to_image
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "/placeholder.svg?height=300&width=500".to_string()),
        source: raw.source.name.clone(),
        source_logo: tables.source_logo(&raw.source.name),
        location: city.to_string(),
        country: country.to_string(),
        published_at: raw.published_at.clone(),
        read_time: read_time_minutes(body),
        category: categorize(&raw.title, raw.description.as_deref().unwrap_or("")),
        trending: is_trending(&raw.published_at, now),
        views: synthetic_views(&raw.url),
        url: raw.url.clone(),
    }
}

/// Normalize against the current wall clock. Trending is a function of
/// article age, so it is recomputed on every call rather than stored as fact.
pub fn normalize(tables: &Tables, raw: &RawArticle, country_hint: &str) -> NormalizedArticle {
    normalize_at(tables, raw, country_hint, Utc::now())
}

/// Trimmed stub for embedding under a NewsSource.
pub fn article_stub(raw: &RawArticle) -> ArticleStub {
    ArticleStub {
        id: article_id(&raw.url),
        title: raw.title.clone(),
        summary: raw.description.clone().unwrap_or_default(),
        published_at: raw.published_at.clone(),
        image_url: raw
            .url_to_image
            .clone()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| "/placeholder.svg?height=200&width=300".to_string()),
        url: raw.url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_types::RawSource;
    use crate::models::Category;
    use chrono::Duration;

    fn raw(url: &str) -> RawArticle {
        RawArticle {
            source: RawSource {
                id: None,
                name: "Reuters".to_string(),
            },
            author: None,
            title: "Parliament passes budget".to_string(),
            description: Some("Lawmakers approved the annual budget.".to_string()),
            url: url.to_string(),
            url_to_image: None,
            published_at: "2026-08-29T12:00:00Z".to_string(),
            content: Some("word ".repeat(450).trim_end().to_string()),
        }
    }

    #[test]
    fn id_is_deterministic_per_url() {
        let t = Tables::builtin();
        let a = normalize(&t, &raw("https://example.com/a"), "us");
        let b = normalize(&t, &raw("https://example.com/a"), "us");
        let c = normalize(&t, &raw("https://example.com/b"), "us");
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_eq!(a.id.len(), 16);
        assert!(a.id.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn views_are_stable_and_in_range() {
        let a = synthetic_views("https://example.com/a");
        assert_eq!(a, synthetic_views("https://example.com/a"));
        assert!((10_000..210_000).contains(&a));
    }

    #[test]
    fn read_time_rounds_up_from_word_count() {
        let t = Tables::builtin();
        // 450 words at 200 wpm -> ceil(2.25) = 3 minutes
        let article = normalize_at(&t, &raw("u"), "us", Utc::now());
        assert_eq!(article.read_time, 3);
    }

    #[test]
    fn empty_body_still_reads_one_minute() {
        let t = Tables::builtin();
        let mut r = raw("u");
        r.description = None;
        r.content = None;
        let article = normalize_at(&t, &r, "us", Utc::now());
        assert_eq!(article.summary, "");
        assert_eq!(article.read_time, 1);
    }

    #[test]
    fn summary_falls_back_to_truncated_content() {
        let t = Tables::builtin();
        let mut r = raw("u");
        r.description = None;
        r.content = Some("x".repeat(300));
        let article = normalize_at(&t, &r, "us", Utc::now());
        assert_eq!(article.summary.chars().count(), 203); // 200 + "..."
        assert!(article.summary.ends_with("..."));
    }

    #[test]
    fn trending_window_is_six_hours() {
        let now = Utc::now();
        let one_hour = (now - Duration::hours(1)).to_rfc3339();
        let seven_hours = (now - Duration::hours(7)).to_rfc3339();
        assert!(is_trending(&one_hour, now));
        assert!(!is_trending(&seven_hours, now));
    }

    #[test]
    fn malformed_timestamp_is_not_trending() {
        assert!(!is_trending("yesterday-ish", Utc::now()));
        assert!(!is_trending("", Utc::now()));
    }

    #[test]
    fn unknown_country_hint_uses_sentinel_location() {
        let t = Tables::builtin();
        let article = normalize_at(&t, &raw("u"), "zz", Utc::now());
        assert_eq!(article.location, "Unknown");
        assert_eq!(article.country, "Unknown");
    }

    #[test]
    fn category_comes_from_the_text() {
        let t = Tables::builtin();
        let article = normalize_at(&t, &raw("u"), "us", Utc::now());
        assert_eq!(article.category, Category::Politics);
    }
}
