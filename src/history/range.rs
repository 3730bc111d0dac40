//! Version range resolution.

use std::fmt;

use tracing::debug;

use super::tags::Timeline;
use super::CURRENT;

/// Lower boundary of the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Start {
    /// Exclusive lower boundary at a tag or ref.
    Tag(String),
    /// No lower boundary: the whole history up to the end.
    FullHistory,
}

/// The slice of history whose fragments form the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    /// Lower boundary (exclusive).
    pub start: Start,
    /// Upper boundary (inclusive); `HEAD` for the working position.
    pub end: String,
}

impl Range {
    /// The git revision argument for this range.
    #[must_use]
    pub fn revision(&self) -> String {
        match &self.start {
            Start::Tag(start) => format!("{start}..{}", self.end),
            Start::FullHistory => self.end.clone(),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.revision())
    }
}

/// Picks the start boundary when the caller did not supply one.
///
/// For the working position the newest release is the start (unreleased
/// changes). For a release tag the start is the release before it; the
/// oldest release (or an unknown ref) reaches back to the beginning.
#[must_use]
pub fn resolve(timeline: &Timeline, explicit_start: Option<&str>) -> Range {
    let end = timeline.end.clone();
    let start = match explicit_start {
        Some(start) => Start::Tag(start.to_string()),
        None if end == CURRENT => {
            timeline.tags.last().map_or(Start::FullHistory, |t| Start::Tag(t.clone()))
        }
        None => timeline
            .tags
            .iter()
            .position(|t| *t == end)
            .and_then(|i| i.checked_sub(1))
            .map_or(Start::FullHistory, |i| Start::Tag(timeline.tags[i].clone())),
    };
    let range = Range { start, end };
    debug!("range: {range}");
    range
}
