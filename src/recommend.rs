use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{NormalizedArticle, ScoredArticle, UserActivity};

/// Result count cap for the for-you surface.
const MAX_RECOMMENDATIONS: usize = 12;

/// Average historical reading time (seconds) above which a reader is
/// considered a long-form reader.
const LONG_FORM_THRESHOLD_SECS: f64 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadingLength {
    LongForm,
    QuickReads,
}

impl ReadingLength {
    pub fn label(&self) -> &'static str {
        match self {
            ReadingLength::LongForm => "Long-form articles",
            ReadingLength::QuickReads => "Quick reads",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestSummary {
    pub category: String,
    pub score: u32, // percentage share of clicks
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingPatterns {
    pub preferred_length: String,
    pub best_reading_time: String,
    pub engagement_level: u32,
}

/// Summary of a user's activity profile shown on the for-you surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityAnalysis {
    pub top_interests: Vec<InterestSummary>,
    pub reading_patterns: ReadingPatterns,
    pub confidence_score: u32,
}

/// Derived reading-length preference: long-form if the average recorded
/// reading time exceeds five minutes, quick reads otherwise.
pub fn preferred_reading_length(profile: &UserActivity) -> ReadingLength {
    if profile.viewed_articles.is_empty() {
        return ReadingLength::QuickReads;
    }
    let total: u32 = profile.reading_times.values().sum();
    let avg = f64::from(total) / profile.viewed_articles.len() as f64;
    if avg > LONG_FORM_THRESHOLD_SECS {
        ReadingLength::LongForm
    } else {
        ReadingLength::QuickReads
    }
}

/// Summarize a profile: top category interests by click share, reading
/// patterns, and an overall engagement level.
pub fn analyze_activity(profile: &UserActivity) -> ActivityAnalysis {
    let total_clicks: u32 = profile.clicked_categories.values().sum();

    let mut top_interests: Vec<InterestSummary> = profile
        .clicked_categories
        .iter()
        .map(|(category, &clicks)| {
            let share = if total_clicks == 0 {
                0.0
            } else {
                f64::from(clicks) / f64::from(total_clicks) * 100.0
            };
            let minutes = profile
                .time_spent_by_category
                .get(category)
                .copied()
                .unwrap_or(0)
                / 60;
            InterestSummary {
                category: category.clone(),
                score: share.round() as u32,
                reason: format!("{} articles viewed, {} minutes reading time", clicks, minutes),
            }
        })
        .collect();
    top_interests.sort_by(|a, b| b.score.cmp(&a.score));
    top_interests.truncate(5);

    let engagement_level = if profile.viewed_articles.is_empty() {
        0
    } else {
        let ratio =
            profile.liked_articles.len() as f64 / profile.viewed_articles.len() as f64 * 100.0;
        (ratio.round() as u32).min(95)
    };

    ActivityAnalysis {
        top_interests,
        reading_patterns: ReadingPatterns {
            preferred_length: preferred_reading_length(profile).label().to_string(),
            best_reading_time: "Afternoon (2-4 PM)".to_string(),
            engagement_level,
        },
        confidence_score: 87,
    }
}

/// Rank candidate articles against a user profile.
///
/// Each article accumulates a score from independent weighted signals, each
/// contributing a human-readable reason when it fires. Scores are capped at
/// 100; zero-score articles are dropped; ties keep the candidate order
/// (stable sort); at most 12 results. Pure: identical inputs yield identical
/// ordered output.
pub fn score_recommendations(
    profile: &UserActivity,
    candidates: &[NormalizedArticle],
) -> Vec<ScoredArticle> {
    let preferred_length = preferred_reading_length(profile);
    let mut recommendations = Vec::new();

    for article in candidates {
        let mut score: u32 = 0;
        let mut reasons = Vec::new();

        let category_interest = profile
            .clicked_categories
            .get(article.category.as_str())
            .copied()
            .unwrap_or(0);
        if category_interest > 0 {
            score += category_interest * 5;
            reasons.push(format!(
                "High interest in {} ({} articles viewed)",
                article.category, category_interest
            ));
        }

        let source_preference = profile
            .preferred_sources
            .get(&article.source)
            .copied()
            .unwrap_or(0);
        if source_preference > 0 {
            score += source_preference * 3;
            reasons.push(format!("Preferred source: {}", article.source));
        }

        let location_interest = profile
            .location_interests
            .get(&article.location)
            .copied()
            .unwrap_or(0);
        if location_interest > 0 {
            score += location_interest * 2;
            reasons.push(format!("Interest in {} news", article.location));
        }

        let title = article.title.to_lowercase();
        let summary = article.summary.to_lowercase();
        let search_match = profile.search_history.iter().any(|term| {
            let term = term.to_lowercase();
            title.contains(&term) || summary.contains(&term)
        });
        if search_match {
            score += 10;
            reasons.push("Matches your recent searches".to_string());
        }

        let length_fit = match preferred_length {
            ReadingLength::LongForm => article.read_time >= 6,
            ReadingLength::QuickReads => article.read_time <= 4,
        };
        if length_fit {
            score += 5;
            reasons.push(format!(
                "Matches your {} preference",
                preferred_length.label().to_lowercase()
            ));
        }

        if article.trending {
            score += 8;
            reasons.push("Currently trending".to_string());
        }

        if article.views > 100_000 {
            score += 3;
            reasons.push("High engagement article".to_string());
        }

        if score > 0 {
            recommendations.push(ScoredArticle {
                article: article.clone(),
                ai_score: score.min(100),
                reasons,
            });
        }
    }

    // Vec::sort_by is stable, so equal scores keep candidate order.
    recommendations.sort_by(|a, b| b.ai_score.cmp(&a.ai_score));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    debug!(
        "Scored recommendations - candidates={}, returned={}",
        candidates.len(),
        recommendations.len()
    );
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::collections::BTreeMap;

    fn article(id: &str, category: Category) -> NormalizedArticle {
        NormalizedArticle {
            id: id.to_string(),
            title: format!("{} article", id),
            summary: "a summary".to_string(),
            image_url: String::new(),
            source: "Reuters".to_string(),
            source_logo: String::new(),
            location: "London".to_string(),
            country: "United Kingdom".to_string(),
            published_at: "2026-08-29T12:00:00Z".to_string(),
            read_time: 3,
            category,
            trending: false,
            views: 50_000,
            url: format!("https://example.com/{}", id),
        }
    }

    fn profile_with_clicks(category: &str, clicks: u32) -> UserActivity {
        UserActivity {
            clicked_categories: BTreeMap::from([(category.to_string(), clicks)]),
            ..UserActivity::default()
        }
    }

    #[test]
    fn worked_technology_scenario() {
        let profile = profile_with_clicks("Technology", 10);
        let mut candidate = article("tech-1", Category::Technology);
        candidate.trending = true;
        candidate.views = 150_000;
        // quick-reads fit would add 5; make the article long enough to avoid it
        candidate.read_time = 5;

        let out = score_recommendations(&profile, &[candidate]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].ai_score, 61); // 10*5 + 8 + 3
        assert!(out[0]
            .reasons
            .iter()
            .any(|r| r.starts_with("High interest in Technology")));
        assert!(out[0].reasons.iter().any(|r| r == "Currently trending"));
        assert!(out[0]
            .reasons
            .iter()
            .any(|r| r == "High engagement article"));
    }

    #[test]
    fn zero_score_articles_are_excluded() {
        let profile = UserActivity::default();
        let mut candidate = article("a", Category::General);
        candidate.read_time = 10; // defeats the quick-reads default fit
        assert!(score_recommendations(&profile, &[candidate]).is_empty());
    }

    #[test]
    fn score_is_capped_at_one_hundred() {
        let profile = profile_with_clicks("Politics", 40); // 200 before the cap
        let out = score_recommendations(&profile, &[article("a", Category::Politics)]);
        assert_eq!(out[0].ai_score, 100);
    }

    #[test]
    fn output_is_sorted_and_truncated_to_twelve() {
        let mut profile = profile_with_clicks("Business", 1);
        profile.clicked_categories.insert("Sports".to_string(), 4);

        let mut candidates = Vec::new();
        for i in 0..10 {
            candidates.push(article(&format!("b{}", i), Category::Business));
        }
        for i in 0..10 {
            candidates.push(article(&format!("s{}", i), Category::Sports));
        }

        let out = score_recommendations(&profile, &candidates);
        assert_eq!(out.len(), 12);
        for pair in out.windows(2) {
            assert!(pair[0].ai_score >= pair[1].ai_score);
        }
        // all Sports articles outrank Business ones, in candidate order
        assert!(out[0].article.id.starts_with('s'));
    }

    #[test]
    fn ties_keep_candidate_order() {
        let profile = profile_with_clicks("Health", 2);
        let candidates = vec![
            article("h1", Category::Health),
            article("h2", Category::Health),
            article("h3", Category::Health),
        ];
        let out = score_recommendations(&profile, &candidates);
        let ids: Vec<&str> = out.iter().map(|s| s.article.id.as_str()).collect();
        assert_eq!(ids, ["h1", "h2", "h3"]);
    }

    #[test]
    fn repeated_scoring_is_identical() {
        let mut profile = profile_with_clicks("Science", 3);
        profile.search_history.push("quantum".to_string());
        let candidates: Vec<_> = (0..5)
            .map(|i| article(&format!("c{}", i), Category::Science))
            .collect();

        let first = score_recommendations(&profile, &candidates);
        let second = score_recommendations(&profile, &candidates);
        let ids = |v: &[ScoredArticle]| {
            v.iter()
                .map(|s| (s.article.id.clone(), s.ai_score))
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn search_history_matches_title_or_summary() {
        let mut profile = UserActivity::default();
        profile.search_history.push("Quantum Computing".to_string());
        let mut candidate = article("q", Category::General);
        candidate.title = "Breakthrough in quantum computing hardware".to_string();
        candidate.read_time = 10;

        let out = score_recommendations(&profile, &[candidate]);
        assert_eq!(out[0].ai_score, 10);
        assert_eq!(out[0].reasons, ["Matches your recent searches"]);
    }

    #[test]
    fn long_form_readers_get_length_fit_on_long_articles() {
        let mut profile = UserActivity::default();
        profile.viewed_articles = vec!["a".to_string(), "b".to_string()];
        profile
            .reading_times
            .extend([("a".to_string(), 400), ("b".to_string(), 350)]);
        assert_eq!(preferred_reading_length(&profile), ReadingLength::LongForm);

        let mut candidate = article("long", Category::General);
        candidate.read_time = 8;
        let out = score_recommendations(&profile, &[candidate]);
        assert_eq!(out[0].ai_score, 5);
        assert_eq!(
            out[0].reasons,
            ["Matches your long-form articles preference"]
        );
    }

    #[test]
    fn analysis_ranks_interests_by_click_share() {
        let mut profile = UserActivity::default();
        profile.clicked_categories.extend([
            ("Technology".to_string(), 15),
            ("Health".to_string(), 8),
            ("Politics".to_string(), 6),
            ("Business".to_string(), 4),
            ("Science".to_string(), 3),
            ("Sports".to_string(), 1),
        ]);
        profile
            .time_spent_by_category
            .insert("Technology".to_string(), 1200);
        profile.viewed_articles = vec!["t1".to_string(), "t2".to_string()];
        profile.liked_articles = vec!["t1".to_string()];

        let analysis = analyze_activity(&profile);
        assert_eq!(analysis.top_interests.len(), 5);
        assert_eq!(analysis.top_interests[0].category, "Technology");
        assert_eq!(analysis.top_interests[0].score, 41); // 15/37
        assert_eq!(
            analysis.top_interests[0].reason,
            "15 articles viewed, 20 minutes reading time"
        );
        assert_eq!(analysis.reading_patterns.engagement_level, 50);
    }

    #[test]
    fn empty_profile_analysis_is_total() {
        let analysis = analyze_activity(&UserActivity::default());
        assert!(analysis.top_interests.is_empty());
        assert_eq!(analysis.reading_patterns.engagement_level, 0);
        assert_eq!(analysis.reading_patterns.preferred_length, "Quick reads");
    }
}
