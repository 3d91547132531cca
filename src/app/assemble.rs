//! Response assembly: parsed reading text, calendar, and feast extraction
//! combined into the externally visible payload.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{MassType, ReadingSection, Season, calendar, feast, parser};

/// Liturgical season block of the response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiturgicalInfo {
    pub season: Season,
    pub color: String,
    pub feast_day: Option<String>,
}

/// Externally visible payload for one day's readings.
///
/// Field names are stable; `readings[].type` carries the header keyword and
/// `liturgical_info.color` the season's hex value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MassResponse {
    pub date: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub mass_type: String,
    pub liturgical_info: LiturgicalInfo,
    pub readings: Vec<ReadingSection>,
}

/// Liturgical info for a date, with feast extraction applied to the title
/// when one is known.
pub fn liturgical_info(date: NaiveDate, title: Option<&str>) -> LiturgicalInfo {
    let season = calendar::classify(date);
    LiturgicalInfo {
        season,
        color: season.color().hex().to_string(),
        feast_day: title.and_then(feast::extract),
    }
}

/// Assemble the response for one fetched reading document.
pub fn assemble(date: NaiveDate, mass_type: MassType, raw_text: &str) -> MassResponse {
    let parsed = parser::parse(raw_text);
    let info = liturgical_info(date, parsed.title.as_deref());

    MassResponse {
        date: date.format("%Y-%m-%d").to_string(),
        title: parsed.title,
        url: parsed.url,
        mass_type: mass_type.name().to_string(),
        liturgical_info: info,
        readings: parsed.sections,
    }
}
