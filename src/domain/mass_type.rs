use std::fmt;

use crate::domain::error::AppError;

/// Mass variants the provider publishes for a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MassType {
    #[default]
    Default,
    Day,
    Dawn,
    Vigil,
    Night,
}

impl MassType {
    /// All variants, in probe order.
    pub const ALL: [MassType; 5] =
        [MassType::Default, MassType::Day, MassType::Dawn, MassType::Vigil, MassType::Night];

    /// Wire name used in the response payload.
    pub fn name(&self) -> &'static str {
        match self {
            MassType::Default => "DEFAULT",
            MassType::Day => "DAY",
            MassType::Dawn => "DAWN",
            MassType::Vigil => "VIGIL",
            MassType::Night => "NIGHT",
        }
    }

    /// Path suffix appended to the date segment of the provider URL.
    pub fn url_suffix(&self) -> &'static str {
        match self {
            MassType::Default => "",
            MassType::Day => "-Day",
            MassType::Dawn => "-Dawn",
            MassType::Vigil => "-Vigil",
            MassType::Night => "-Night",
        }
    }

    /// Parse a user-supplied name, case-insensitively.
    pub fn from_name(name: &str) -> Result<MassType, AppError> {
        MassType::ALL
            .into_iter()
            .find(|mass_type| mass_type.name() == name.to_ascii_uppercase())
            .ok_or_else(|| AppError::UnknownMassType(name.to_string()))
    }
}

impl fmt::Display for MassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
