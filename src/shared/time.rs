//! Passage timestamp parsing

use chrono::NaiveDateTime;

use crate::domain::{DomainError, DomainResult};

const FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a local civil timestamp such as `2013-02-08 06:27:00`
pub fn parse_passage(input: &str) -> DomainResult<NaiveDateTime> {
    let trimmed = input.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| DomainError::InvalidTimestamp(trimmed.to_string()))
}

pub fn parse_passages<I, S>(inputs: I) -> DomainResult<Vec<NaiveDateTime>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs
        .into_iter()
        .map(|s| parse_passage(s.as_ref()))
        .collect()
}

/// Parse one timestamp per line, skipping blank lines and `#` comments
pub fn parse_passage_lines(content: &str) -> DomainResult<Vec<NaiveDateTime>> {
    parse_passages(
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
}
