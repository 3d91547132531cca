pub mod calendar;
pub mod error;
pub mod feast;
pub mod mass_type;
pub mod parser;
pub mod reading;

pub use calendar::{Anchors, Color, Season, classify, easter_sunday};
pub use error::{AppError, ErrorCategory};
pub use mass_type::MassType;
pub use reading::{ParsedReading, ReadingSection, ReadingType};
