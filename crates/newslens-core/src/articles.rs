use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the twelve fixed topical tags an article can carry.
///
/// The set is closed: the scraping process classifies every article against
/// exactly these tags, and anything that fits none of the named topics lands
/// in [`Genre::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Culture,
    Economy,
    Entertainment,
    Health,
    Police,
    Policy,
    Science,
    Society,
    Sports,
    Tech,
    War,
    Other,
}

impl Genre {
    /// All genres in canonical (declaration) order.
    pub const CANONICAL: [Genre; 12] = [
        Genre::Culture,
        Genre::Economy,
        Genre::Entertainment,
        Genre::Health,
        Genre::Police,
        Genre::Policy,
        Genre::Science,
        Genre::Society,
        Genre::Sports,
        Genre::Tech,
        Genre::War,
        Genre::Other,
    ];

    /// Genres in the order the stacked bar chart lists them: the reverse of
    /// canonical order.
    #[must_use]
    pub fn display_order() -> [Genre; 12] {
        let mut genres = Self::CANONICAL;
        genres.reverse();
        genres
    }

    /// Lowercase name, identical to the dataset column for this genre.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Genre::Culture => "culture",
            Genre::Economy => "economy",
            Genre::Entertainment => "entertainment",
            Genre::Health => "health",
            Genre::Police => "police",
            Genre::Policy => "policy",
            Genre::Science => "science",
            Genre::Society => "society",
            Genre::Sports => "sports",
            Genre::Tech => "tech",
            Genre::War => "war",
            Genre::Other => "other",
        }
    }

    /// Capitalized human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Genre::Culture => "Culture",
            Genre::Economy => "Economy",
            Genre::Entertainment => "Entertainment",
            Genre::Health => "Health",
            Genre::Police => "Police",
            Genre::Policy => "Policy",
            Genre::Science => "Science",
            Genre::Society => "Society",
            Genre::Sports => "Sports",
            Genre::Tech => "Tech",
            Genre::War => "War",
            Genre::Other => "Other",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One scraped newspaper article.
///
/// `country_key` is the ISO-3 code for `country` (1:1 mapping), used by the
/// choropleth layer for map geometry. `scrape_date` is day-granular and is
/// the single comparable date representation across the system: loaders
/// normalize into it so filtering never compares date strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub newspaper: String,
    pub country: String,
    pub country_key: String,
    pub scrape_date: NaiveDate,
    pub link: String,
    pub positive: bool,
    /// Zero or more genre tags; multi-label.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Article {
    #[must_use]
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_starts_with_culture_and_ends_with_other() {
        assert_eq!(Genre::CANONICAL.len(), 12);
        assert_eq!(Genre::CANONICAL[0], Genre::Culture);
        assert_eq!(Genre::CANONICAL[11], Genre::Other);
    }

    #[test]
    fn display_order_is_reversed_canonical() {
        let display = Genre::display_order();
        assert_eq!(display[0], Genre::Other);
        assert_eq!(display[1], Genre::War);
        assert_eq!(display[11], Genre::Culture);
        for (i, genre) in display.iter().enumerate() {
            assert_eq!(*genre, Genre::CANONICAL[11 - i]);
        }
    }

    #[test]
    fn genre_serializes_to_lowercase_name() {
        let json = serde_json::to_string(&Genre::Entertainment).expect("serialize");
        assert_eq!(json, "\"entertainment\"");
        let back: Genre = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Genre::Entertainment);
    }

    #[test]
    fn article_deserializes_with_missing_genres_as_empty() {
        let json = r#"{
            "title": "Budget approved",
            "newspaper": "La Nacion",
            "country": "Argentina",
            "country_key": "ARG",
            "scrape_date": "2024-01-01",
            "link": "https://example.com/budget",
            "positive": true
        }"#;
        let article: Article = serde_json::from_str(json).expect("deserialize");
        assert!(article.genres.is_empty());
        assert!(article.positive);
        assert_eq!(
            article.scrape_date,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn has_genre_checks_membership() {
        let article = Article {
            title: "Chip factory opens".to_string(),
            newspaper: "The Herald".to_string(),
            country: "Argentina".to_string(),
            country_key: "ARG".to_string(),
            scrape_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            link: "https://example.com/chips".to_string(),
            positive: true,
            genres: vec![Genre::Tech, Genre::Economy],
        };
        assert!(article.has_genre(Genre::Tech));
        assert!(article.has_genre(Genre::Economy));
        assert!(!article.has_genre(Genre::Sports));
    }
}
