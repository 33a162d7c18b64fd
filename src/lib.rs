//! News aggregation core: a thin headlines client plus pure, synchronous
//! transformations (normalization, categorization, location grouping, and
//! a weighted-sum recommendation ranker) over in-memory article records.

pub mod api_types;
pub mod categorize;
pub mod feeds;
pub mod fetch;
pub mod location;
pub mod models;
pub mod normalize;
pub mod recommend;
pub mod tables;

pub use api_types::{HeadlinesQuery, HeadlinesResponse, RawArticle, RawSource};
pub use categorize::categorize;
pub use feeds::{for_you_feed, global_trending, location_feed, search_feed};
pub use fetch::{FetchError, NewsApiClient, NewsApiConfig};
pub use location::build_location_bundle;
pub use models::{
    Category, LocationBundle, NewsSource, NormalizedArticle, ScoredArticle, UserActivity,
};
pub use normalize::{normalize, normalize_at};
pub use recommend::{analyze_activity, score_recommendations};
pub use tables::Tables;
