use serde::{Deserialize, Serialize};

/// Top-level shape of a NewsAPI-style headlines response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlinesResponse {
    pub status: String, // "ok" | "error"
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
    // populated on "error" responses
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Provider-supplied article record, passed through untouched until normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawArticle {
    pub source: RawSource,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(rename = "urlToImage", default)]
    pub url_to_image: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSource {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// Query parameters accepted by the headlines endpoints. All optional;
/// unset fields are omitted from the request.
#[derive(Debug, Clone, Default)]
pub struct HeadlinesQuery {
    pub country: Option<String>,
    pub category: Option<String>,
    pub q: Option<String>,
    pub language: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}
