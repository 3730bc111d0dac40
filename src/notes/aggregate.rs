//! Aggregation of note entries by release and section.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use super::fragment::load_fragment;
use super::{normalize, FragmentMeta, NoteEntry, NotesDir, UNCOMMITTED};
use crate::error::{RelnotesError, Result};
use crate::history::locate::LocatedFragment;
use crate::ports::FileSystem;

/// Entries of one release, grouped by section in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNotes {
    tag: String,
    sections: Vec<(String, Vec<NoteEntry>)>,
}

impl TagNotes {
    /// The release label.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Entries of `section` in insertion order; empty if none.
    #[must_use]
    pub fn section(&self, section: &str) -> &[NoteEntry] {
        self.sections
            .iter()
            .find(|(key, _)| key == section)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or_default()
    }

    /// All sections in first-seen order; a section may have no entries.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &[NoteEntry])> {
        self.sections.iter().map(|(key, entries)| (key.as_str(), entries.as_slice()))
    }
}

/// Release → section → entries, every level in insertion order.
///
/// Reads never create keys; [`Aggregation::insert`] and
/// [`Aggregation::extend`] are the only ways to add a release or section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    tags: Vec<TagNotes>,
}

impl Aggregation {
    /// Creates an empty aggregation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `entry` under `tag` / `section`, creating both if absent.
    pub fn insert(&mut self, tag: &str, section: &str, entry: NoteEntry) {
        self.extend(tag, section, vec![entry]);
    }

    /// Appends `entries` under `tag` / `section`, creating both if absent,
    /// even when `entries` is empty.
    pub fn extend(&mut self, tag: &str, section: &str, entries: Vec<NoteEntry>) {
        let index = match self.tags.iter().position(|t| t.tag == tag) {
            Some(i) => i,
            None => {
                self.tags.push(TagNotes { tag: tag.to_string(), sections: Vec::new() });
                self.tags.len() - 1
            }
        };
        let sections = &mut self.tags[index].sections;
        match sections.iter_mut().find(|(key, _)| key == section) {
            Some((_, existing)) => existing.extend(entries),
            None => sections.push((section.to_string(), entries)),
        }
    }

    /// Looks up a release.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&TagNotes> {
        self.tags.iter().find(|t| t.tag == tag)
    }

    /// Releases in insertion order.
    pub fn tags(&self) -> impl Iterator<Item = &TagNotes> {
        self.tags.iter()
    }

    /// Returns `true` if no entry was inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

struct SectionsRef<'a>(&'a [(String, Vec<NoteEntry>)]);

impl Serialize for SectionsRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, entries) in self.0 {
            map.serialize_entry(key, entries)?;
        }
        map.end()
    }
}

impl Serialize for Aggregation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tags.len()))?;
        for tag in &self.tags {
            map.serialize_entry(&tag.tag, &SectionsRef(&tag.sections))?;
        }
        map.end()
    }
}

/// Loads fragments into an [`Aggregation`], each path at most once.
///
/// The first source to offer a path wins: history, then staged files,
/// then the directory listing of lint mode.
pub struct Collector<'a> {
    fs: &'a dyn FileSystem,
    valid_sections: &'a BTreeSet<String>,
    seen: HashSet<String>,
    aggregation: Aggregation,
}

impl<'a> Collector<'a> {
    /// Creates a collector validating against `valid_sections`.
    #[must_use]
    pub fn new(fs: &'a dyn FileSystem, valid_sections: &'a BTreeSet<String>) -> Self {
        Self { fs, valid_sections, seen: HashSet::new(), aggregation: Aggregation::new() }
    }

    /// Adds a fragment found in history.
    ///
    /// A fragment deleted by a later commit is skipped silently.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing fragment cannot be read or is invalid.
    pub fn add_committed(&mut self, fragment: &LocatedFragment) -> Result<()> {
        let path = normalize(&fragment.path);
        if !self.seen.insert(path.clone()) {
            return Ok(());
        }
        if !self.fs.exists(Path::new(&path)) {
            debug!("{path} no longer exists, skipping");
            return Ok(());
        }
        let meta = FragmentMeta {
            time: fragment.time,
            name: fragment.author.clone(),
            hash: Some(fragment.hash.clone()),
        };
        self.load(&fragment.tag, &path, &meta)
    }

    /// Adds a fragment from the working tree under the `Uncommitted` label.
    ///
    /// Paths that were already seen, are not files, or are not YAML files
    /// inside `notes_dir` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment cannot be read or is invalid.
    pub fn add_uncommitted(
        &mut self,
        notes_dir: &NotesDir,
        path: &str,
        author: &str,
    ) -> Result<()> {
        let path = normalize(path);
        if path.is_empty() || self.seen.contains(&path) {
            return Ok(());
        }
        if !notes_dir.is_fragment(&path) || !self.fs.is_file(Path::new(&path)) {
            return Ok(());
        }
        self.seen.insert(path.clone());
        let time = self
            .fs
            .modified(Path::new(&path))
            .map_err(|e| RelnotesError::Read { path: path.clone(), message: e.to_string() })?;
        let meta = FragmentMeta { time, name: author.to_string(), hash: None };
        self.load(UNCOMMITTED, &path, &meta)
    }

    /// Returns the collected aggregation.
    #[must_use]
    pub fn finish(self) -> Aggregation {
        self.aggregation
    }

    fn load(&mut self, tag: &str, path: &str, meta: &FragmentMeta) -> Result<()> {
        for (section, entries) in load_fragment(self.fs, path, meta, self.valid_sections)? {
            self.aggregation.extend(tag, &section, entries);
        }
        Ok(())
    }
}
