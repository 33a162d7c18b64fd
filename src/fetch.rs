use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::Client;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api_types::{HeadlinesQuery, HeadlinesResponse};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";
const QUOTA_WINDOW: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Error)]
pub enum FetchError {
    /// Raised locally before any network call once the hourly budget is spent.
    #[error("request quota exceeded ({limit}/hour); retry after the window resets")]
    QuotaExceeded { limit: u32 },

    #[error("request failed for {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("decoding response for {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered 200 with `"status": "error"` in the body.
    #[error("upstream error {code}: {message}")]
    Upstream { code: String, message: String },
}

#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub rate_limit_per_hour: u32,
}

impl NewsApiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_limit_per_hour: 1000, // free-tier limit
        }
    }
}

#[derive(Debug)]
struct QuotaState {
    count: u32,
    window_start: Instant,
}

/// Thin client over a NewsAPI-style headlines provider.
///
/// Carries a fixed-size request counter that resets once per rolling hour;
/// an exhausted quota fails fast without touching the network.
pub struct NewsApiClient {
    http: Client,
    config: NewsApiConfig,
    quota: Mutex<QuotaState>,
}

impl NewsApiClient {
    pub fn new(config: NewsApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            quota: Mutex::new(QuotaState {
                count: 0,
                window_start: Instant::now(),
            }),
        }
    }

    fn take_quota(&self) -> Result<(), FetchError> {
        let mut state = self.quota.lock().expect("quota lock poisoned");
        if state.window_start.elapsed() >= QUOTA_WINDOW {
            debug!("Quota window reset - previous_count={}", state.count);
            state.count = 0;
            state.window_start = Instant::now();
        }
        if state.count >= self.config.rate_limit_per_hour {
            warn!(
                "Quota exceeded - count={}, limit={}",
                state.count, self.config.rate_limit_per_hour
            );
            return Err(FetchError::QuotaExceeded {
                limit: self.config.rate_limit_per_hour,
            });
        }
        state.count += 1;
        Ok(())
    }

    async fn request(
        &self,
        endpoint: &str,
        params: Vec<(&'static str, String)>,
    ) -> Result<HeadlinesResponse, FetchError> {
        self.take_quota()?;

        let url = format!("{}{}", self.config.base_url, endpoint);
        let start = Instant::now();
        debug!("Headlines request - endpoint={}, params={:?}", endpoint, params);

        let mut query = params;
        query.push(("apiKey", self.config.api_key.clone()));

        let resp = self
            .http
            .get(&url)
            .header("User-Agent", "newsglobe/0.1")
            .query(&query)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| FetchError::Http {
                url: url.clone(),
                source,
            })?;

        let body: HeadlinesResponse =
            resp.json()
                .await
                .map_err(|source| FetchError::Decode {
                    url: url.clone(),
                    source,
                })?;

        if body.status != "ok" {
            return Err(FetchError::Upstream {
                code: body.code.unwrap_or_else(|| "unknown".to_string()),
                message: body
                    .message
                    .unwrap_or_else(|| "unspecified upstream error".to_string()),
            });
        }

        info!(
            "Headlines request completed - endpoint={}, duration={:.2}s, articles={}",
            endpoint,
            start.elapsed().as_secs_f32(),
            body.articles.len()
        );
        Ok(body)
    }

    /// GET /top-headlines. Country defaults to "us", page size to 20.
    pub async fn top_headlines(
        &self,
        query: &HeadlinesQuery,
    ) -> Result<HeadlinesResponse, FetchError> {
        let mut params = vec![(
            "country",
            query.country.clone().unwrap_or_else(|| "us".to_string()),
        )];
        if let Some(category) = &query.category {
            params.push(("category", category.clone()));
        }
        if let Some(q) = &query.q {
            params.push(("q", q.clone()));
        }
        params.push(("pageSize", query.page_size.unwrap_or(20).to_string()));
        params.push(("page", query.page.unwrap_or(1).to_string()));

        self.request("/top-headlines", params).await
    }

    /// GET /everything, sorted by publication time.
    pub async fn everything(
        &self,
        query: &HeadlinesQuery,
    ) -> Result<HeadlinesResponse, FetchError> {
        let params = vec![
            ("q", query.q.clone().unwrap_or_else(|| "news".to_string())),
            (
                "language",
                query.language.clone().unwrap_or_else(|| "en".to_string()),
            ),
            ("pageSize", query.page_size.unwrap_or(20).to_string()),
            ("page", query.page.unwrap_or(1).to_string()),
            ("sortBy", "publishedAt".to_string()),
        ];

        self.request("/everything", params).await
    }

    /// Headlines for one country, 10 articles per page.
    pub async fn news_by_location(
        &self,
        country: &str,
        category: Option<&str>,
    ) -> Result<HeadlinesResponse, FetchError> {
        self.top_headlines(&HeadlinesQuery {
            country: Some(country.to_lowercase()),
            category: category.map(str::to_string),
            page_size: Some(10),
            ..HeadlinesQuery::default()
        })
        .await
    }

    /// Full-text search across everything, 20 articles per page.
    pub async fn search_news(
        &self,
        query: &str,
        language: &str,
        page: u32,
    ) -> Result<HeadlinesResponse, FetchError> {
        self.everything(&HeadlinesQuery {
            q: Some(query.to_string()),
            language: Some(language.to_string()),
            page: Some(page),
            page_size: Some(20),
            ..HeadlinesQuery::default()
        })
        .await
    }
}
