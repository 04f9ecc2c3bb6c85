//! Release-date windows driven by the navigation links
//!
//! All comparisons are whole local calendar days. Windows are inclusive at
//! both ends, so a game released exactly on a boundary day matches.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::catalog::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    Tomorrow,
    /// Today through today + 7 days
    Week,
    /// Same calendar month and year
    Month,
    /// Today through the same day six calendar months later. A day the
    /// target month lacks rolls over into the following month.
    Semester,
    /// Same calendar year
    Year,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[
            Period::Today,
            Period::Tomorrow,
            Period::Week,
            Period::Month,
            Period::Semester,
            Period::Year,
        ]
    }

    /// Parse a navigation token, with or without the leading `#`
    pub fn from_token(token: &str) -> Option<Period> {
        match token.trim().trim_start_matches('#') {
            "today" => Some(Period::Today),
            "tomorrow" => Some(Period::Tomorrow),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "semester" => Some(Period::Semester),
            "year" => Some(Period::Year),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Tomorrow => "tomorrow",
            Period::Week => "week",
            Period::Month => "month",
            Period::Semester => "semester",
            Period::Year => "year",
        }
    }

    /// Navigation link text
    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Tomorrow => "Tomorrow",
            Period::Week => "This Week",
            Period::Month => "This Month",
            Period::Semester => "Next 6 Months",
            Period::Year => "This Year",
        }
    }

    /// Phrase used in the filter status line
    pub fn describe(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Tomorrow => "tomorrow",
            Period::Week => "this week",
            Period::Month => "this month",
            Period::Semester => "in the next 6 months",
            Period::Year => "this year",
        }
    }

    /// Inclusive day range for the windows that are ranges
    pub fn range(&self, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match self {
            Period::Week => Some((today, add_days(today, 7))),
            Period::Semester => Some((today, six_months_later(today))),
            _ => None,
        }
    }

    pub fn contains(&self, release: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Period::Today => release == today,
            Period::Tomorrow => release == add_days(today, 1),
            Period::Month => release.year() == today.year() && release.month() == today.month(),
            Period::Year => release.year() == today.year(),
            Period::Week | Period::Semester => self
                .range(today)
                .is_some_and(|(start, end)| start <= release && release <= end),
        }
    }

    /// Games released inside this window. Malformed release dates never match.
    pub fn filter<'a>(&self, games: &'a [Game], today: NaiveDate) -> Vec<&'a Game> {
        let matched: Vec<&Game> = games
            .iter()
            .filter(|g| g.release_day().is_some_and(|day| self.contains(day, today)))
            .collect();
        tracing::debug!("{} games released {}", matched.len(), self.describe());
        matched
    }
}

/// Same day number six months on, counted from the first of the month so
/// Aug 31 lands on Mar 3 (or Mar 2 in a leap year) instead of Feb 28
fn six_months_later(day: NaiveDate) -> NaiveDate {
    day.with_day(1)
        .and_then(|first| first.checked_add_months(Months::new(6)))
        .map(|first| add_days(first, u64::from(day.day0())))
        .unwrap_or(NaiveDate::MAX)
}

fn add_days(day: NaiveDate, days: u64) -> NaiveDate {
    day.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
