//! Report rendering: plain text for humans, YAML for tools.

use chrono::{Local, TimeZone};

use crate::config::Section;
use crate::error::Result;
use crate::history::CURRENT;
use crate::notes::aggregate::Aggregation;
use crate::notes::NoteEntry;

/// Header shown for notes newer than the last release.
pub const CURRENT_LABEL: &str = "Current Branch";

/// What the text report shows.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions<'a> {
    /// Key of the summary section.
    pub prelude: &'a str,
    /// Sections to print, in order.
    pub sections: &'a [Section],
    /// Annotate entries with hash, author and date.
    pub blame: bool,
}

/// Renders the text report.
///
/// Releases appear in aggregation order. Within the summary and every
/// section, entries are listed newest first; sections without entries are
/// omitted.
#[must_use]
pub fn render_text(aggregation: &Aggregation, options: &RenderOptions<'_>) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (i, release) in aggregation.tags().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        let label = if release.tag() == CURRENT { CURRENT_LABEL } else { release.tag() };
        lines.push(label.to_string());
        lines.push(underline(label, '='));

        for entry in newest_first(release.section(options.prelude)) {
            lines.push(entry.note.trim().to_string());
            lines.push(String::new());
        }

        for section in options.sections {
            let entries = release.section(&section.key);
            if entries.is_empty() {
                continue;
            }
            lines.push(String::new());
            lines.push(section.title.clone());
            lines.push(underline(&section.title, '-'));
            for entry in newest_first(entries) {
                lines.push(bullet(entry, options.blame));
            }
        }
    }

    if lines.is_empty() {
        return String::new();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Renders the whole aggregation as YAML, in insertion order.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_dump(aggregation: &Aggregation) -> Result<String> {
    Ok(serde_yaml::to_string(aggregation)?)
}

fn newest_first(entries: &[NoteEntry]) -> Vec<&NoteEntry> {
    let mut sorted: Vec<&NoteEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.time.cmp(&a.time));
    sorted
}

fn underline(text: &str, ch: char) -> String {
    std::iter::repeat(ch).take(text.chars().count()).collect()
}

fn bullet(entry: &NoteEntry, blame: bool) -> String {
    if !blame {
        return format!("- {}", entry.note);
    }
    let mut line = format!("- {}", entry.note);
    if let Some(hash) = &entry.hash {
        line.push_str(&format!(" `{hash}`"));
    }
    line.push_str(&format!(" ({}) {}", entry.name, short_date(entry.time)));
    line
}

/// Local calendar date of an epoch timestamp as `yy-mm-dd`.
fn short_date(epoch: i64) -> String {
    Local
        .timestamp_opt(epoch, 0)
        .single()
        .map_or_else(|| epoch.to_string(), |dt| dt.format("%y-%m-%d").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(note: &str, time: i64, hash: Option<&str>) -> NoteEntry {
        NoteEntry { time, name: "Ann".into(), hash: hash.map(String::from), note: note.into() }
    }

    fn sections() -> Vec<Section> {
        vec![
            Section { key: "features".into(), title: "New Features".into() },
            Section { key: "fixes".into(), title: "Bug Fixes".into() },
        ]
    }

    fn render(agg: &Aggregation, blame: bool) -> String {
        let sections = sections();
        render_text(agg, &RenderOptions { prelude: "release_summary", sections: &sections, blame })
    }

    #[test]
    fn newest_entry_first_within_section() {
        let mut agg = Aggregation::new();
        agg.insert("v1.0.0", "fixes", entry("older", 100, None));
        agg.insert("v1.0.0", "fixes", entry("newer", 200, None));
        let text = render(&agg, false);
        assert!(text.find("- newer").unwrap() < text.find("- older").unwrap());
    }

    #[test]
    fn full_layout() {
        let mut agg = Aggregation::new();
        agg.insert("HEAD", "fixes", entry("Fix crash", 50, None));
        agg.insert("v2.0.0", "release_summary", entry("  Big release.  ", 10, None));
        agg.insert("v2.0.0", "features", entry("Add dump", 20, None));
        let expected = "\
Current Branch
==============

Bug Fixes
---------
- Fix crash

v2.0.0
======
Big release.


New Features
------------
- Add dump
";
        assert_eq!(render(&agg, false), expected);
    }

    #[test]
    fn configured_order_not_insertion_order() {
        let mut agg = Aggregation::new();
        agg.insert("v1.0.0", "fixes", entry("f", 1, None));
        agg.insert("v1.0.0", "features", entry("n", 1, None));
        let text = render(&agg, false);
        assert!(text.find("New Features").unwrap() < text.find("Bug Fixes").unwrap());
    }

    #[test]
    fn blame_annotates_entries() {
        let mut agg = Aggregation::new();
        agg.insert("v1.0.0", "fixes", entry("committed", 1_718_452_800, Some("abc1234")));
        agg.insert("v1.0.0", "fixes", entry("staged", 1_718_452_700, None));
        let text = render(&agg, true);
        let date = short_date(1_718_452_800);
        assert!(text.contains(&format!("- committed `abc1234` (Ann) {date}\n")));
        assert!(text.contains(&format!("- staged (Ann) {}\n", short_date(1_718_452_700))));
    }

    #[test]
    fn release_without_entries_shows_only_its_header() {
        let mut agg = Aggregation::new();
        agg.extend("v1.0.0", "fixes", Vec::new());
        assert_eq!(render(&agg, false), "v1.0.0\n======\n");
    }

    #[test]
    fn empty_aggregation_renders_nothing() {
        assert_eq!(render(&Aggregation::new(), false), "");
    }

    #[test]
    fn dump_keeps_raw_order_and_fields() {
        let mut agg = Aggregation::new();
        agg.insert("v1.0.0", "fixes", entry("old", 1, Some("a1")));
        agg.insert("v1.0.0", "fixes", entry("new", 2, None));
        let dump = render_dump(&agg).unwrap();
        assert!(dump.find("note: old").unwrap() < dump.find("note: new").unwrap());
        assert!(dump.contains("hash: a1"));
        assert!(dump.contains("hash: null"));
        assert!(dump.contains("time: 2"));
    }
}
