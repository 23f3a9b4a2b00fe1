use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

use super::model::RawRow;

// ---------------------------------------------------------------------------
// Day-of-week encoding used by the weekdays column
// ---------------------------------------------------------------------------

/// Weekday digit of a calendar date: `'1'` = Sunday, `'2'` = Monday, …,
/// `'7'` = Saturday.
pub fn day_of_week(date: NaiveDate) -> char {
    // number_from_sunday() is 1..=7, always a single digit
    char::from(b'0' + date.weekday().number_from_sunday() as u8)
}

/// Weekday digit of an instant, resolved in the time zone it carries.
///
/// `Utc` gives the same answer on every host; pass a fixed offset or a
/// local zone to evaluate the date where the traveller is.
pub fn day_of_week_at<Tz: TimeZone>(instant: &DateTime<Tz>) -> char {
    day_of_week(instant.date_naive())
}

// ---------------------------------------------------------------------------
// Query predicate
// ---------------------------------------------------------------------------

/// Airport + weekday criteria for one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query<'a> {
    /// Compared exactly, case-sensitive.
    pub airport: &'a str,
    pub day: char,
}

impl<'a> Query<'a> {
    pub fn new(airport: &'a str, date: NaiveDate) -> Self {
        Self {
            airport,
            day: day_of_week(date),
        }
    }

    /// A row passes when the airport is its origin or destination and its
    /// weekdays string contains the requested day digit. Rows too short to
    /// carry those fields never match.
    pub fn matches(&self, row: &RawRow) -> bool {
        (row.origin() == self.airport || row.destination() == self.airport)
            && row.weekdays().contains(self.day)
    }
}
