//! Catalog document and game records
//!
//! The catalog is loaded once per page session and never mutated afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Badge background used when a record does not specify one
pub const DEFAULT_BADGE_COLOR: &str = "#008CBA";

const RELEASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// A single game record, decoded verbatim from the catalog JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub year: Option<i32>,
    /// Calendar date as `YYYY-MM-DD`
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub platform: Vec<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub badge_color: Option<String>,
    /// External detail page; when present it replaces the local details dialog
    #[serde(default)]
    pub url: Option<String>,
}

impl Game {
    /// Release day, or `None` when the date string is malformed
    pub fn release_day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.release_date.trim(), RELEASE_DATE_FORMAT).ok()
    }

    pub fn badge_color(&self) -> &str {
        self.badge_color
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_BADGE_COLOR)
    }

    /// Rating worth displaying; zero counts as unrated
    pub fn display_rating(&self) -> Option<f64> {
        self.rating.filter(|r| *r > 0.0)
    }

    /// External detail URL, ignoring blank values
    pub fn external_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    /// "Genre • Year" line shown under the card title
    pub fn release_line(&self) -> String {
        match self.year {
            Some(year) => format!("{} • {}", self.genre, year),
            None => self.genre.clone(),
        }
    }
}

/// The catalog document: games plus the auxiliary category and platform lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub games: Vec<Game>,
    /// Not used for filtering; kept so the document round-trips
    #[serde(default)]
    pub categories: Vec<serde_json::Value>,
    #[serde(default)]
    pub platforms: Vec<serde_json::Value>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games, ..Default::default() }
    }

    /// Decode a catalog document. Missing top-level lists become empty.
    pub fn from_json(body: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(body)?;
        tracing::debug!("Decoded catalog with {} games", catalog.games.len());
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Distinct non-empty genres in order of first appearance
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for game in &self.games {
            if !game.genre.is_empty() && !genres.contains(&game.genre) {
                genres.push(game.genre.clone());
            }
        }
        genres
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn game(id: i64, title: &str, genre: &str, release_date: &str) -> Game {
        Game {
            id,
            title: title.to_string(),
            subtitle: String::new(),
            genre: genre.to_string(),
            year: release_date.get(..4).and_then(|y| y.parse().ok()),
            release_date: release_date.to_string(),
            developer: None,
            platform: Vec::new(),
            rating: None,
            description: None,
            image: String::new(),
            badge: String::new(),
            badge_color: None,
            url: None,
        }
    }

    #[test]
    fn test_decode_full_record() {
        let body = r##"{
            "games": [{
                "id": 7,
                "title": "Super Quest",
                "subtitle": "Deluxe",
                "genre": "RPG",
                "year": 2026,
                "releaseDate": "2026-10-19",
                "developer": "Studio",
                "platform": ["PC", "Switch"],
                "rating": 4.5,
                "description": "A quest.",
                "image": "img/quest.png",
                "badge": "New",
                "badgeColor": "#ff0000",
                "url": "https://example.com/quest"
            }],
            "categories": [{"id": "rpg", "name": "RPG"}],
            "platforms": ["PC"]
        }"##;
        let catalog = Catalog::from_json(body).unwrap();
        assert_eq!(catalog.len(), 1);
        let g = &catalog.games[0];
        assert_eq!(g.subtitle, "Deluxe");
        assert_eq!(g.platform, vec!["PC", "Switch"]);
        assert_eq!(g.badge_color(), "#ff0000");
        assert_eq!(g.external_url(), Some("https://example.com/quest"));
        assert_eq!(g.release_day(), NaiveDate::from_ymd_opt(2026, 10, 19));
        assert_eq!(catalog.categories.len(), 1);
        assert_eq!(catalog.platforms.len(), 1);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories.is_empty());
        assert!(catalog.platforms.is_empty());
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = Catalog::from_json("<html>not found</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[test]
    fn test_optional_fields_and_defaults() {
        let catalog = Catalog::from_json(r#"{"games":[{"id":1,"title":"Bare"}]}"#).unwrap();
        let g = &catalog.games[0];
        assert_eq!(g.badge_color(), DEFAULT_BADGE_COLOR);
        assert_eq!(g.external_url(), None);
        assert_eq!(g.release_day(), None);
        assert_eq!(g.display_rating(), None);
        assert_eq!(g.release_line(), "");
    }

    #[test]
    fn test_blank_url_and_zero_rating_are_ignored() {
        let mut g = game(1, "A", "Action", "2026-01-01");
        g.url = Some("  ".to_string());
        g.rating = Some(0.0);
        assert_eq!(g.external_url(), None);
        assert_eq!(g.display_rating(), None);
        assert_eq!(g.release_line(), "Action • 2026");
    }

    #[test]
    fn test_genres_in_first_appearance_order() {
        let catalog = Catalog::new(vec![
            game(1, "A", "RPG", "2026-01-01"),
            game(2, "B", "Action", "2026-01-01"),
            game(3, "C", "RPG", "2026-01-01"),
            game(4, "D", "", "2026-01-01"),
        ]);
        assert_eq!(catalog.genres(), vec!["RPG", "Action"]);
        assert_eq!(catalog.find(3).map(|g| g.title.as_str()), Some("C"));
        assert!(catalog.find(9).is_none());
    }
}
