//! Genre, favorites, title and period filters
//!
//! Filters are stateless: each call recomputes from the full game list and
//! keeps catalog order.

use chrono::NaiveDate;

use crate::catalog::{Catalog, Game};
use crate::favorites::Favorites;
use crate::period::Period;

/// Genre token selecting every game
pub const GENRE_ALL: &str = "all";
/// Genre token selecting the current favorites
pub const GENRE_FAVORITES: &str = "favorites";

/// Genre filter: `"all"`, `"favorites"`, or an exact, case-sensitive genre
pub fn genre_filter<'a>(games: &'a [Game], genre: &str, favorites: &Favorites) -> Vec<&'a Game> {
    match genre {
        GENRE_ALL => games.iter().collect(),
        GENRE_FAVORITES => games.iter().filter(|g| favorites.contains(g.id)).collect(),
        _ => games.iter().filter(|g| g.genre == genre).collect(),
    }
}

/// Case-insensitive substring match on titles. A blank query selects everything.
pub fn title_filter<'a>(games: &'a [Game], query: &str) -> Vec<&'a Game> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return games.iter().collect();
    }
    games
        .iter()
        .filter(|g| g.title.to_lowercase().contains(&query))
        .collect()
}

/// The one filter currently driving the displayed list
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Filter {
    #[default]
    All,
    Genre(String),
    Favorites,
    Title(String),
    Period(Period),
}

impl Filter {
    /// Map a genre button token to a filter
    pub fn genre(token: &str) -> Self {
        match token {
            GENRE_ALL => Filter::All,
            GENRE_FAVORITES => Filter::Favorites,
            genre => Filter::Genre(genre.to_string()),
        }
    }

    /// Title search; blank queries collapse to `All`
    pub fn title(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            Filter::All
        } else {
            Filter::Title(query.to_string())
        }
    }

    /// Map a navigation token to a filter; unknown tokens show everything
    pub fn period(token: &str) -> Self {
        Period::from_token(token).map(Filter::Period).unwrap_or(Filter::All)
    }

    pub fn apply<'a>(
        &self,
        catalog: &'a Catalog,
        favorites: &Favorites,
        today: NaiveDate,
    ) -> Vec<&'a Game> {
        let games = catalog.games.as_slice();
        match self {
            Filter::All => genre_filter(games, GENRE_ALL, favorites),
            Filter::Genre(genre) => genre_filter(games, genre, favorites),
            Filter::Favorites => genre_filter(games, GENRE_FAVORITES, favorites),
            Filter::Title(query) => title_filter(games, query),
            Filter::Period(period) => period.filter(games, today),
        }
    }

    /// Genre button shown as pressed. Title searches fall back to "all".
    pub fn active_genre(&self) -> Option<&str> {
        match self {
            Filter::All | Filter::Title(_) => Some(GENRE_ALL),
            Filter::Favorites => Some(GENRE_FAVORITES),
            Filter::Genre(genre) => Some(genre.as_str()),
            Filter::Period(_) => None,
        }
    }

    pub fn active_period(&self) -> Option<Period> {
        match self {
            Filter::Period(period) => Some(*period),
            _ => None,
        }
    }

    /// Whether this filter owns the title input; anything else clears it
    pub fn is_title(&self) -> bool {
        matches!(self, Filter::Title(_))
    }

    /// Status line, e.g. `3 game(s) - genre RPG`
    pub fn status_line(&self, count: usize) -> String {
        match self {
            Filter::All => format!("{} game(s) - all games", count),
            Filter::Genre(genre) => format!("{} game(s) - genre {}", count, genre),
            Filter::Favorites => format!("{} game(s) - my favorites", count),
            Filter::Title(query) => format!("{} game(s) - title containing \"{}\"", count, query),
            Filter::Period(period) => format!("{} game(s) found {}", count, period.describe()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::game;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            game(1, "Super Quest", "RPG", "2026-10-19"),
            game(2, "Racing Fever", "Racing", "2026-10-25"),
            game(3, "Quest for Speed", "Racing", "2027-03-01"),
            game(4, "Dungeon Lords", "rpg", "2026-11-02"),
        ])
    }

    fn ids(games: Vec<&Game>) -> Vec<i64> {
        games.into_iter().map(|g| g.id).collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_genre_all_keeps_catalog_order() {
        let catalog = catalog();
        let result = genre_filter(&catalog.games, GENRE_ALL, &Favorites::new());
        assert_eq!(ids(result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_genre_is_exact_and_case_sensitive() {
        let catalog = catalog();
        let favorites = Favorites::new();
        assert_eq!(ids(genre_filter(&catalog.games, "RPG", &favorites)), vec![1]);
        assert_eq!(ids(genre_filter(&catalog.games, "rpg", &favorites)), vec![4]);
        assert_eq!(ids(genre_filter(&catalog.games, "Racing", &favorites)), vec![2, 3]);
        assert!(genre_filter(&catalog.games, "Puzzle", &favorites).is_empty());
    }

    #[test]
    fn test_favorites_reflect_current_membership() {
        let catalog = catalog();
        let mut favorites = Favorites::new();
        assert!(genre_filter(&catalog.games, GENRE_FAVORITES, &favorites).is_empty());

        favorites.toggle(3);
        favorites.toggle(1);
        favorites.toggle(99); // not in the catalog
        assert_eq!(ids(genre_filter(&catalog.games, GENRE_FAVORITES, &favorites)), vec![1, 3]);

        favorites.toggle(1);
        assert_eq!(ids(Filter::Favorites.apply(&catalog, &favorites, today())), vec![3]);
    }

    #[test]
    fn test_blank_title_query_selects_everything() {
        let catalog = catalog();
        assert_eq!(title_filter(&catalog.games, "").len(), 4);
        assert_eq!(title_filter(&catalog.games, "   ").len(), 4);
        assert_eq!(Filter::title("  "), Filter::All);
    }

    #[test]
    fn test_title_is_case_insensitive_substring() {
        let catalog = catalog();
        assert_eq!(ids(title_filter(&catalog.games, "super")), vec![1]);
        assert_eq!(ids(title_filter(&catalog.games, "QUEST")), vec![1, 3]);
        assert_eq!(ids(title_filter(&catalog.games, "r qu")), vec![1]);
        assert_eq!(ids(title_filter(&catalog.games, "  fever ")), vec![2]);
        assert!(title_filter(&catalog.games, "xyz").is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let catalog = catalog();
        let favorites = Favorites::new();
        let filter = Filter::genre("Racing");
        assert_eq!(
            ids(filter.apply(&catalog, &favorites, today())),
            ids(filter.apply(&catalog, &favorites, today()))
        );
    }

    #[test]
    fn test_period_filter_through_apply() {
        let catalog = catalog();
        let favorites = Favorites::new();
        assert_eq!(ids(Filter::period("#week").apply(&catalog, &favorites, today())), vec![1, 2]);
        assert_eq!(Filter::period("#bogus"), Filter::All);
    }

    #[test]
    fn test_active_button_state() {
        assert_eq!(Filter::title("zelda").active_genre(), Some(GENRE_ALL));
        assert_eq!(Filter::genre("favorites").active_genre(), Some(GENRE_FAVORITES));
        assert_eq!(Filter::genre("RPG").active_genre(), Some("RPG"));
        assert_eq!(Filter::period("month").active_genre(), None);
        assert_eq!(Filter::period("month").active_period(), Some(Period::Month));
        assert!(Filter::title("zelda").is_title());
        assert!(!Filter::genre("RPG").is_title());
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(Filter::All.status_line(4), "4 game(s) - all games");
        assert_eq!(Filter::genre("RPG").status_line(1), "1 game(s) - genre RPG");
        assert_eq!(Filter::title("quest").status_line(2), "2 game(s) - title containing \"quest\"");
        assert_eq!(Filter::Period(Period::Week).status_line(0), "0 game(s) found this week");
    }
}
