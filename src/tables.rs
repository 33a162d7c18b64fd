use std::collections::BTreeMap;

/// Trust score used when a source has no editorial rating on file.
pub const DEFAULT_TRUST_SCORE: f64 = 7.0;

/// Sentinel for country codes we have no city/name mapping for.
pub const UNKNOWN_PLACE: (&str, &str) = ("Unknown", "Unknown");

/// Static lookup tables: source credibility, country geography, and canned
/// source metadata. Built once at startup and injected into the functions
/// that need them; never mutated afterwards. Every getter resolves misses
/// via a documented default instead of failing.
#[derive(Debug, Clone)]
pub struct Tables {
    trust_scores: BTreeMap<&'static str, f64>,
    coordinates: BTreeMap<&'static str, [f64; 2]>,
    locations: BTreeMap<&'static str, (&'static str, &'static str)>, // cc -> (city, country)
    descriptions: BTreeMap<&'static str, &'static str>,
    websites: BTreeMap<&'static str, &'static str>,
}

impl Tables {
    pub fn builtin() -> Self {
        let trust_scores = BTreeMap::from([
            ("BBC News", 9.2),
            ("Reuters", 9.0),
            ("Associated Press", 8.9),
            ("The Guardian", 8.5),
            ("NPR", 8.7),
            ("The New York Times", 8.3),
            ("The Washington Post", 8.1),
            ("CNN", 7.8),
            ("Fox News", 7.2),
            ("Al Jazeera", 8.0),
            ("Deutsche Welle", 8.4),
            ("France 24", 8.2),
            ("NHK World", 8.6),
            ("Times of India", 7.5),
            ("The Hindu", 8.1),
            ("South China Morning Post", 7.9),
            ("RT", 6.5),
            ("Sputnik", 6.2),
        ]);

        let coordinates = BTreeMap::from([
            ("us", [39.8283, -98.5795]),
            ("gb", [55.3781, -3.436]),
            ("ca", [56.1304, -106.3468]),
            ("au", [-25.2744, 133.7751]),
            ("de", [51.1657, 10.4515]),
            ("fr", [46.2276, 2.2137]),
            ("jp", [36.2048, 138.2529]),
            ("in", [20.5937, 78.9629]),
            ("br", [-14.235, -51.9253]),
            ("mx", [23.6345, -102.5528]),
            ("ru", [61.524, 105.3188]),
            ("cn", [35.8617, 104.1954]),
            ("za", [-30.5595, 22.9375]),
            ("eg", [26.0975, 30.0444]),
            ("ng", [9.082, 8.6753]),
            ("ar", [-38.4161, -63.6167]),
            ("cl", [-35.6751, -71.543]),
            ("pe", [-9.19, -75.0152]),
            ("co", [4.5709, -74.2973]),
            ("ve", [6.4238, -66.5897]),
        ]);

        let locations = BTreeMap::from([
            ("us", ("New York", "United States")),
            ("gb", ("London", "United Kingdom")),
            ("ca", ("Toronto", "Canada")),
            ("au", ("Sydney", "Australia")),
            ("de", ("Berlin", "Germany")),
            ("fr", ("Paris", "France")),
            ("jp", ("Tokyo", "Japan")),
            ("in", ("Mumbai", "India")),
            ("br", ("São Paulo", "Brazil")),
            ("mx", ("Mexico City", "Mexico")),
            ("ru", ("Moscow", "Russia")),
            ("cn", ("Beijing", "China")),
            ("za", ("Cape Town", "South Africa")),
            ("eg", ("Cairo", "Egypt")),
            ("ng", ("Lagos", "Nigeria")),
            ("ar", ("Buenos Aires", "Argentina")),
            ("cl", ("Santiago", "Chile")),
            ("pe", ("Lima", "Peru")),
            ("co", ("Bogotá", "Colombia")),
            ("ve", ("Caracas", "Venezuela")),
        ]);

        let descriptions = BTreeMap::from([
            (
                "BBC News",
                "British public service broadcaster providing global news coverage",
            ),
            (
                "Reuters",
                "International news agency providing business and financial news",
            ),
            (
                "Associated Press",
                "American multinational nonprofit news agency",
            ),
            (
                "The Guardian",
                "British daily newspaper with global digital presence",
            ),
            ("CNN", "American news-based television channel and website"),
            ("Al Jazeera", "Qatari state-funded international news network"),
            (
                "The New York Times",
                "American newspaper with worldwide influence",
            ),
            (
                "The Washington Post",
                "American daily newspaper published in Washington, D.C.",
            ),
        ]);

        let websites = BTreeMap::from([
            ("BBC News", "bbc.com/news"),
            ("Reuters", "reuters.com"),
            ("Associated Press", "apnews.com"),
            ("The Guardian", "theguardian.com"),
            ("CNN", "cnn.com"),
            ("Al Jazeera", "aljazeera.com"),
            ("The New York Times", "nytimes.com"),
            ("The Washington Post", "washingtonpost.com"),
        ]);

        Self {
            trust_scores,
            coordinates,
            locations,
            descriptions,
            websites,
        }
    }

    pub fn trust_score(&self, source_name: &str) -> f64 {
        self.trust_scores
            .get(source_name)
            .copied()
            .unwrap_or(DEFAULT_TRUST_SCORE)
    }

    /// (city, country-name) for a country code; ("Unknown", "Unknown") on miss.
    pub fn location(&self, country_code: &str) -> (&str, &str) {
        self.locations
            .get(country_code.to_lowercase().as_str())
            .copied()
            .unwrap_or(UNKNOWN_PLACE)
    }

    /// [lat, lng] for a country code; [0, 0] on miss.
    pub fn coordinates(&self, country_code: &str) -> [f64; 2] {
        self.coordinates
            .get(country_code.to_lowercase().as_str())
            .copied()
            .unwrap_or([0.0, 0.0])
    }

    pub fn source_description(&self, source_name: &str) -> String {
        match self.descriptions.get(source_name) {
            Some(d) => (*d).to_string(),
            None => format!("{} - News and information source", source_name),
        }
    }

    pub fn source_website(&self, source_name: &str) -> String {
        match self.websites.get(source_name) {
            Some(w) => (*w).to_string(),
            None => format!("{}.com", source_name.to_lowercase().replace(' ', "")),
        }
    }

    /// Placeholder logo URL; real logos live with the presentation layer.
    pub fn source_logo(&self, source_name: &str) -> String {
        format!(
            "/placeholder.svg?height=40&width=120&text={}",
            source_name.replace(' ', "%20")
        )
    }
}

/// Lowercase, whitespace-collapsed identifier for a source name.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_source_scores() {
        let t = Tables::builtin();
        assert_eq!(t.trust_score("BBC News"), 9.2);
        assert_eq!(t.trust_score("Sputnik"), 6.2);
    }

    #[test]
    fn unknown_source_defaults_to_seven() {
        let t = Tables::builtin();
        assert_eq!(t.trust_score("Daily Bugle"), DEFAULT_TRUST_SCORE);
        assert_eq!(
            t.source_description("Daily Bugle"),
            "Daily Bugle - News and information source"
        );
        assert_eq!(t.source_website("Daily Bugle"), "dailybugle.com");
    }

    #[test]
    fn unknown_country_resolves_to_sentinel() {
        let t = Tables::builtin();
        assert_eq!(t.location("zz"), ("Unknown", "Unknown"));
        assert_eq!(t.coordinates("zz"), [0.0, 0.0]);
    }

    #[test]
    fn country_codes_are_case_insensitive() {
        let t = Tables::builtin();
        assert_eq!(t.location("GB"), ("London", "United Kingdom"));
        assert_eq!(t.coordinates("US"), [39.8283, -98.5795]);
    }

    #[test]
    fn slugs_join_on_hyphens() {
        assert_eq!(slugify("BBC News"), "bbc-news");
        assert_eq!(slugify("The  New York Times"), "the-new-york-times");
    }
}
