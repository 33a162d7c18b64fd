use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::fetch::{FetchError, NewsApiClient};
use crate::location::build_location_bundle;
use crate::models::{LocationBundle, NormalizedArticle, ScoredArticle, UserActivity};
use crate::normalize::normalize;
use crate::recommend::{analyze_activity, score_recommendations, ActivityAnalysis};
use crate::tables::Tables;

/// Countries polled for the global trending surface.
pub const TRENDING_COUNTRIES: [&str; 7] = ["us", "gb", "de", "fr", "jp", "in", "br"];

const PER_COUNTRY_HEADLINES: u32 = 5;
const SEARCH_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub articles: Vec<NormalizedArticle>,
    pub total: u32,
    pub page: u32,
    pub has_more: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForYouFeed {
    pub analysis: ActivityAnalysis,
    pub recommendations: Vec<ScoredArticle>,
}

/// Trending headlines pooled across the fixed country list.
///
/// Per-country fetches run concurrently and tolerate partial failure: a
/// failed country logs a warning and contributes nothing, it never aborts
/// the batch. Results are concatenated, ranked by recency-and-popularity,
/// and truncated to `limit`.
pub async fn global_trending(
    client: &NewsApiClient,
    tables: &Tables,
    category: Option<&str>,
    limit: usize,
) -> Vec<NormalizedArticle> {
    let start = std::time::Instant::now();
    debug!(
        "Trending fan-out - countries={}, category={:?}",
        TRENDING_COUNTRIES.len(),
        category
    );

    let fetches = TRENDING_COUNTRIES.iter().map(|country| async move {
        let query = crate::api_types::HeadlinesQuery {
            country: Some((*country).to_string()),
            category: category.map(str::to_string),
            page_size: Some(PER_COUNTRY_HEADLINES),
            ..Default::default()
        };
        (*country, client.top_headlines(&query).await)
    });

    let mut pooled = Vec::new();
    for (country, result) in join_all(fetches).await {
        match result {
            Ok(resp) => {
                debug!(
                    "Country fetch succeeded - country={}, articles={}",
                    country,
                    resp.articles.len()
                );
                pooled.extend(
                    resp.articles
                        .iter()
                        .map(|raw| normalize(tables, raw, country)),
                );
            }
            Err(err) => {
                warn!("Country fetch failed - country={}, error={}", country, err);
            }
        }
    }

    // recency-and-popularity rank: trending articles first, then by views
    pooled.sort_by(|a, b| {
        let score = |x: &NormalizedArticle| {
            (if x.trending { 10.0 } else { 0.0 }) + x.views as f64 / 10_000.0
        };
        score(b).partial_cmp(&score(a)).expect("finite scores")
    });
    pooled.truncate(limit);

    info!(
        "Trending feed assembled - duration={:.2}s, articles={}",
        start.elapsed().as_secs_f32(),
        pooled.len()
    );
    pooled
}

/// One country's headlines grouped into a location bundle; Ok(None) when the
/// provider has nothing for that country.
pub async fn location_feed(
    client: &NewsApiClient,
    tables: &Tables,
    country: &str,
    category: Option<&str>,
) -> Result<Option<LocationBundle>, FetchError> {
    let resp = client.news_by_location(country, category).await?;
    if resp.articles.is_empty() {
        info!("No articles for country={}", country);
    }
    Ok(build_location_bundle(tables, country, &resp.articles))
}

/// Full-text search normalized for display. Searched articles carry no
/// country, so location falls back to the "us" hint.
pub async fn search_feed(
    client: &NewsApiClient,
    tables: &Tables,
    query: &str,
    language: &str,
    page: u32,
    limit: usize,
) -> Result<SearchResults, FetchError> {
    let resp = client.search_news(query, language, page).await?;
    let total = resp.total_results;

    let mut articles: Vec<NormalizedArticle> = resp
        .articles
        .iter()
        .map(|raw| normalize(tables, raw, "us"))
        .collect();
    articles.truncate(limit);

    Ok(SearchResults {
        articles,
        total,
        page,
        has_more: u64::from(page) * u64::from(SEARCH_PAGE_SIZE) < u64::from(total),
    })
}

/// Personalized feed: profile summary plus ranked recommendations.
/// Pure over its inputs; the caller supplies both the profile and the
/// candidate pool (typically a trending snapshot).
pub fn for_you_feed(profile: &UserActivity, candidates: &[NormalizedArticle]) -> ForYouFeed {
    ForYouFeed {
        analysis: analyze_activity(profile),
        recommendations: score_recommendations(profile, candidates),
    }
}
