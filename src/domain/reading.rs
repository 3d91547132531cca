use serde::Serialize;
use std::fmt;

/// Categories of a mass reading section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadingType {
    #[serde(rename = "First Reading")]
    FirstReading,
    #[serde(rename = "Second Reading")]
    SecondReading,
    Gospel,
    #[serde(rename = "Responsorial Psalm")]
    ResponsorialPsalm,
    Alleluia,
}

impl ReadingType {
    /// All section categories.
    pub const ALL: [ReadingType; 5] = [
        ReadingType::FirstReading,
        ReadingType::SecondReading,
        ReadingType::Gospel,
        ReadingType::ResponsorialPsalm,
        ReadingType::Alleluia,
    ];

    /// The header keyword as it appears in the raw text.
    pub fn keyword(&self) -> &'static str {
        match self {
            ReadingType::FirstReading => "First Reading",
            ReadingType::SecondReading => "Second Reading",
            ReadingType::Gospel => "Gospel",
            ReadingType::ResponsorialPsalm => "Responsorial Psalm",
            ReadingType::Alleluia => "Alleluia",
        }
    }

    /// Resolve a header keyword back to its category.
    pub fn from_keyword(keyword: &str) -> Option<ReadingType> {
        ReadingType::ALL.into_iter().find(|reading| reading.keyword() == keyword)
    }
}

impl fmt::Display for ReadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// One typed reading section with its citation and body lines.
///
/// `content` retains line encounter order; `source` is the header citation
/// joined with a verse token when one was found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingSection {
    #[serde(rename = "type")]
    pub kind: ReadingType,
    pub source: String,
    pub content: Vec<String>,
}

/// Result of parsing one raw reading document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedReading {
    pub title: Option<String>,
    pub url: Option<String>,
    pub sections: Vec<ReadingSection>,
}
