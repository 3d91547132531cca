//! lectio: daily Catholic Mass readings as structured data.
//!
//! The core is pure: a line scanner over the provider's raw reading text, a
//! liturgical-calendar classifier keyed to the computed date of Easter, and
//! a feast-name extractor over the parsed title. A provider port with an
//! HTTP adapter supplies the raw text.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use chrono::NaiveDate;

use adapters::UsccbHttpProvider;
use app::assemble;
use ports::ReadingsProvider;

pub use app::{LiturgicalInfo, MassResponse};
pub use domain::{
    AppError, ErrorCategory, MassType, ParsedReading, ReadingSection, ReadingType, Season,
};

/// Parse a client-supplied ISO date string.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(value.to_string()))
}

/// Fetch and assemble the readings for a date using the USCCB provider.
pub fn mass(date: NaiveDate, mass_type: Option<&str>) -> Result<MassResponse, AppError> {
    let provider = UsccbHttpProvider::new()?;
    mass_with_provider(&provider, date, mass_type)
}

/// Fetch and assemble the readings for a date using any provider.
///
/// An explicit `mass_type` is validated up front; otherwise the first type
/// the provider publishes for the date is used, falling back to the default
/// mass when the provider lists none.
pub fn mass_with_provider(
    provider: &impl ReadingsProvider,
    date: NaiveDate,
    mass_type: Option<&str>,
) -> Result<MassResponse, AppError> {
    let selected = match mass_type {
        Some(name) => MassType::from_name(name)?,
        None => provider.mass_types(date)?.first().copied().unwrap_or_default(),
    };

    let text = provider.reading_text(date, selected)?;
    Ok(assemble::assemble(date, selected, &text))
}

/// Liturgical season information for a date, without fetching readings.
pub fn season_for(date: NaiveDate) -> LiturgicalInfo {
    assemble::liturgical_info(date, None)
}
