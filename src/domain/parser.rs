//! Line scanner turning raw reading text into a [`ParsedReading`].
//!
//! One forward pass over trimmed lines. Malformed lines are never errors:
//! anything unrecognized becomes section content, or is dropped when no
//! section is open yet.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::reading::{ParsedReading, ReadingSection, ReadingType};

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(First Reading|Second Reading|Gospel|Responsorial Psalm|Alleluia):\s*(.*?)(?:\s+(\d+:\d+(?:-\d+)?))?\s*$",
    )
    .expect("valid section header regex")
});

static VERSE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+:\d+(?:-\d+)?").expect("valid verse token regex"));

/// Classification of one trimmed, non-empty line.
///
/// Precedence: URL, then the one-shot title, then a section header, then
/// plain content.
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineKind<'a> {
    Url,
    Title,
    Header { kind: ReadingType, citation: &'a str, verse: Option<&'a str> },
    Content,
}

fn classify_line(line: &str, title_taken: bool) -> LineKind<'_> {
    if line.starts_with("https://") {
        return LineKind::Url;
    }

    // Title capture is one-shot: once a title exists this check is skipped,
    // so a later title-shaped line is eligible as a header or content.
    if !title_taken
        && !line.starts_with("R.")
        && !line.starts_with("The word")
        && !line.starts_with("The Gospel")
    {
        return LineKind::Title;
    }

    if let Some(captures) = HEADER_RE.captures(line) {
        if let Some(kind) = captures.get(1).and_then(|m| ReadingType::from_keyword(m.as_str())) {
            return LineKind::Header {
                kind,
                citation: captures.get(2).map_or("", |m| m.as_str()),
                verse: captures.get(3).map(|m| m.as_str()),
            };
        }
    }

    LineKind::Content
}

/// Parse a raw reading document into title, source URL, and typed sections.
pub fn parse(text: &str) -> ParsedReading {
    let lines: Vec<&str> = text.lines().collect();

    let mut title: Option<String> = None;
    let mut url: Option<String> = None;
    let mut sections: Vec<ReadingSection> = Vec::new();
    let mut current: Option<ReadingSection> = None;

    for (index, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match classify_line(line, title.is_some()) {
            LineKind::Url => {
                // Every occurrence overwrites: the last URL line wins.
                debug!("found url: {line}");
                url = Some(line.to_string());
            }
            LineKind::Title => {
                debug!("found title: {line}");
                title = Some(line.to_string());
            }
            LineKind::Header { kind, citation, verse } => {
                if let Some(section) = current.take() {
                    debug!("closed section: {} ({})", section.kind, section.source);
                    sections.push(section);
                }
                let verse = verse
                    .map(str::to_owned)
                    .or_else(|| lookahead_verse(&lines[index + 1..]));
                let source = join_source(citation, verse.as_deref());
                debug!("opened section: {kind} ({source})");
                current = Some(ReadingSection { kind, source, content: Vec::new() });
            }
            LineKind::Content => {
                // Content before the first header has nowhere to go and is
                // dropped.
                if let Some(section) = current.as_mut() {
                    section.content.push(line.to_string());
                }
            }
        }
    }

    if let Some(section) = current {
        debug!("closed final section: {} ({})", section.kind, section.source);
        sections.push(section);
    }

    ParsedReading { title, url, sections }
}

/// Read-only scan of up to the next two lines for a chapter:verse token.
fn lookahead_verse(rest: &[&str]) -> Option<String> {
    rest.iter().take(2).find_map(|line| VERSE_RE.find(line).map(|m| m.as_str().to_string()))
}

fn join_source(citation: &str, verse: Option<&str>) -> String {
    format!("{} {}", citation.trim(), verse.unwrap_or("")).trim().to_string()
}
