//! Liturgical calendar: Easter computation and season classification.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

/// Liturgical season of the Church year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Lent,
    Easter,
    Advent,
    Christmas,
    #[serde(rename = "Ordinary Time")]
    OrdinaryTime,
}

/// Symbolic color associated with a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Purple,
    White,
    Green,
}

impl Color {
    /// Hex value used in the response payload.
    pub fn hex(&self) -> &'static str {
        match self {
            Color::Purple => "#7030A0",
            Color::White => "#FFFFFF",
            Color::Green => "#008000",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Purple => "Purple",
            Color::White => "White",
            Color::Green => "Green",
        }
    }
}

impl Season {
    /// The fixed color of this season.
    pub fn color(&self) -> Color {
        match self {
            Season::Lent | Season::Advent => Color::Purple,
            Season::Easter | Season::Christmas => Color::White,
            Season::OrdinaryTime => Color::Green,
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Season::Lent => "Lent",
            Season::Easter => "Easter",
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::OrdinaryTime => "Ordinary Time",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Easter Sunday for a Gregorian year, via the anonymous Gregorian algorithm.
///
/// Valid for years >= 1583; behavior below that is unspecified.
pub fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    // The algorithm always lands in March or April.
    ymd(year, month as u32, day as u32)
}

/// Season boundary dates for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchors {
    pub easter: NaiveDate,
    pub ash_wednesday: NaiveDate,
    pub pentecost: NaiveDate,
    pub advent_start: NaiveDate,
    pub christmas: NaiveDate,
    pub epiphany: NaiveDate,
}

impl Anchors {
    /// Compute all anchor dates for a calendar year.
    pub fn for_year(year: i32) -> Self {
        let easter = easter_sunday(year);
        let nov_27 = ymd(year, 11, 27);
        // First Sunday on or after November 27, inclusive.
        let days_to_sunday = 6 - nov_27.weekday().num_days_from_monday();

        Anchors {
            easter,
            ash_wednesday: easter - Duration::days(46),
            pentecost: easter + Duration::days(49),
            advent_start: nov_27 + Duration::days(i64::from(days_to_sunday)),
            christmas: ymd(year, 12, 25),
            epiphany: ymd(year, 1, 6),
        }
    }
}

/// Classify a date into its liturgical season.
///
/// Anchors come from the date's own calendar year; an early-January date is
/// compared against that same year's Christmas window (the Jan 1 - Epiphany
/// branch), never the prior year's.
pub fn classify(date: NaiveDate) -> Season {
    let anchors = Anchors::for_year(date.year());
    let year_start = ymd(date.year(), 1, 1);
    let year_end = ymd(date.year(), 12, 31);

    // Ordered rules, first match wins, even where ranges could coincide
    // at a boundary.
    let rules = [
        (anchors.ash_wednesday <= date && date < anchors.easter, Season::Lent),
        (anchors.easter <= date && date <= anchors.pentecost, Season::Easter),
        (anchors.advent_start <= date && date < anchors.christmas, Season::Advent),
        (
            (anchors.christmas <= date && date <= year_end)
                || (year_start <= date && date <= anchors.epiphany),
            Season::Christmas,
        ),
    ];

    for (matched, season) in rules {
        if matched {
            return season;
        }
    }
    Season::OrdinaryTime
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn easter_fixed_points() {
        assert_eq!(easter_sunday(2023), d(2023, 4, 9));
        assert_eq!(easter_sunday(2024), d(2024, 3, 31));
        assert_eq!(easter_sunday(2025), d(2025, 4, 20));
    }

    #[test]
    fn easter_is_a_spring_sunday_for_two_centuries() {
        for year in 1900..=2100 {
            let easter = easter_sunday(year);
            assert_eq!(easter.weekday(), Weekday::Sun, "{year}: {easter}");
            assert!(easter >= d(year, 3, 22), "{year}: {easter}");
            assert!(easter <= d(year, 4, 25), "{year}: {easter}");
        }
    }

    #[test]
    fn anchors_for_2024() {
        let anchors = Anchors::for_year(2024);
        assert_eq!(anchors.ash_wednesday, d(2024, 2, 14));
        assert_eq!(anchors.pentecost, d(2024, 5, 19));
        assert_eq!(anchors.advent_start, d(2024, 12, 1));
        assert_eq!(anchors.christmas, d(2024, 12, 25));
        assert_eq!(anchors.epiphany, d(2024, 1, 6));
    }

    #[test]
    fn advent_starts_on_november_27_when_it_is_a_sunday() {
        // November 27, 2022 was a Sunday.
        assert_eq!(Anchors::for_year(2022).advent_start, d(2022, 11, 27));
    }

    #[test]
    fn classify_fixed_points_for_2024() {
        assert_eq!(classify(d(2024, 3, 10)), Season::Lent);
        assert_eq!(classify(d(2024, 4, 5)), Season::Easter);
        assert_eq!(classify(d(2024, 7, 1)), Season::OrdinaryTime);
    }

    #[test]
    fn season_boundaries_respect_rule_order() {
        // Easter Sunday itself: Lent's half-open range yields to the
        // Easter-season rule.
        assert_eq!(classify(d(2024, 3, 31)), Season::Easter);
        assert_eq!(classify(d(2024, 3, 30)), Season::Lent);
        // Pentecost is the last day of the Easter season.
        assert_eq!(classify(d(2024, 5, 19)), Season::Easter);
        assert_eq!(classify(d(2024, 5, 20)), Season::OrdinaryTime);
        // Christmas Eve is still Advent; Christmas Day switches season.
        assert_eq!(classify(d(2024, 12, 24)), Season::Advent);
        assert_eq!(classify(d(2024, 12, 25)), Season::Christmas);
        assert_eq!(classify(d(2024, 12, 31)), Season::Christmas);
        // Epiphany closes the Christmas window within the same year.
        assert_eq!(classify(d(2024, 1, 6)), Season::Christmas);
        assert_eq!(classify(d(2024, 1, 7)), Season::OrdinaryTime);
    }

    #[test]
    fn colors_are_fixed_per_season() {
        assert_eq!(Season::Lent.color(), Color::Purple);
        assert_eq!(Season::Advent.color(), Color::Purple);
        assert_eq!(Season::Easter.color(), Color::White);
        assert_eq!(Season::Christmas.color(), Color::White);
        assert_eq!(Season::OrdinaryTime.color(), Color::Green);
        assert_eq!(Color::Purple.hex(), "#7030A0");
        assert_eq!(Color::White.hex(), "#FFFFFF");
        assert_eq!(Color::Green.hex(), "#008000");
    }

    #[test]
    fn season_serializes_as_display_name() {
        let json = serde_json::to_string(&Season::OrdinaryTime).unwrap();
        assert_eq!(json, "\"Ordinary Time\"");
        assert_eq!(serde_json::to_string(&Season::Lent).unwrap(), "\"Lent\"");
    }
}
