//! Readings provider port definition.

use chrono::NaiveDate;

use crate::domain::{AppError, MassType};

/// Port for the upstream daily-readings provider.
pub trait ReadingsProvider {
    /// Mass types the provider publishes for the date.
    fn mass_types(&self, date: NaiveDate) -> Result<Vec<MassType>, AppError>;

    /// Raw reading text for the date and mass type.
    ///
    /// # Errors
    /// Returns [`AppError::ReadingsNotFound`] when the provider has no
    /// document for the date.
    fn reading_text(&self, date: NaiveDate, mass_type: MassType) -> Result<String, AppError>;
}

/// Provider double serving a fixed text, for tests and offline use.
#[derive(Debug, Clone, Default)]
pub struct FixedTextProvider {
    pub text: String,
    pub types: Vec<MassType>,
}

impl ReadingsProvider for FixedTextProvider {
    fn mass_types(&self, _date: NaiveDate) -> Result<Vec<MassType>, AppError> {
        Ok(self.types.clone())
    }

    fn reading_text(&self, date: NaiveDate, _mass_type: MassType) -> Result<String, AppError> {
        if self.text.is_empty() {
            return Err(AppError::ReadingsNotFound { date });
        }
        Ok(self.text.clone())
    }
}
