use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Category;

/// Keyword groups tested in priority order; the first group with a match wins.
/// Order matters: "government technology budget" is Politics, not Technology.
static KEYWORD_GROUPS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    [
        (
            Category::Politics,
            r"\b(election|vote|government|politics|minister|president|congress|parliament)\b",
        ),
        (
            Category::Business,
            r"\b(stock|market|economy|business|finance|company|trade|gdp)\b",
        ),
        (
            Category::Technology,
            r"\b(technology|tech|ai|computer|software|digital|cyber|innovation)\b",
        ),
        (
            Category::Health,
            r"\b(health|medical|doctor|hospital|disease|treatment|medicine|covid)\b",
        ),
        (
            Category::Sports,
            r"\b(sport|football|soccer|basketball|tennis|olympics|game|match)\b",
        ),
        (
            Category::Entertainment,
            r"\b(movie|music|entertainment|celebrity|film|actor|artist|culture)\b",
        ),
        (
            Category::Science,
            r"\b(science|research|study|discovery|climate|environment|space)\b",
        ),
    ]
    .into_iter()
    .map(|(cat, pattern)| (cat, Regex::new(pattern).expect("keyword pattern compiles")))
    .collect()
});

/// Assign a topic label to free text. Pure and total: every input maps to
/// exactly one of the eight fixed labels, with General as the fallback.
pub fn categorize(title: &str, description: &str) -> Category {
    let text = format!("{} {}", title, description).to_lowercase();

    for (category, regex) in KEYWORD_GROUPS.iter() {
        if regex.is_match(&text) {
            return *category;
        }
    }
    Category::General
}
