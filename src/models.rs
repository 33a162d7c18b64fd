use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of topic labels assigned by the categorizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Politics,
    Business,
    Technology,
    Health,
    Sports,
    Entertainment,
    Science,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "Politics",
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Health => "Health",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Science => "Science",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully derived article record handed to the presentation layer.
/// Built once per raw article; values are recomputed, never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedArticle {
    pub id: String, // 16 hex chars, stable per url
    pub title: String,
    pub summary: String,
    pub image_url: String,
    pub source: String,
    pub source_logo: String,
    pub location: String, // city
    pub country: String,
    pub published_at: String, // ISO8601, passed through from the provider
    pub read_time: u32,       // minutes, >= 1
    pub category: Category,
    pub trending: bool,
    pub views: u64,
    pub url: String,
}

/// Trimmed article entry carried inside a NewsSource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleStub {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub published_at: String,
    pub image_url: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSource {
    pub id: String, // slugified name
    pub name: String,
    pub logo: String,
    pub trust_score: f64, // [0, 10]
    pub description: String,
    pub website: String,
    pub articles: Vec<ArticleStub>,
}

/// Per-country grouping of up to three sources, keyed for the globe view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationBundle {
    pub id: String, // e.g., "london-gb"
    pub name: String,
    pub country: String,
    pub coordinates: [f64; 2], // [lat, lng]
    pub top_sources: Vec<NewsSource>,
}

/// User activity profile supplied wholesale by the caller; read-only to the scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserActivity {
    pub viewed_articles: Vec<String>,
    pub clicked_categories: BTreeMap<String, u32>,
    pub time_spent_by_category: BTreeMap<String, u32>, // seconds
    pub search_history: Vec<String>,
    pub bookmarked_articles: Vec<String>,
    pub liked_articles: Vec<String>,
    pub reading_times: BTreeMap<String, u32>, // article id -> seconds
    pub preferred_sources: BTreeMap<String, u32>,
    pub location_interests: BTreeMap<String, u32>,
}

/// Recommendation output: the article plus its capped score and the
/// human-readable signals that contributed to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredArticle {
    #[serde(flatten)]
    pub article: NormalizedArticle,
    pub ai_score: u32, // [0, 100]
    pub reasons: Vec<String>,
}
