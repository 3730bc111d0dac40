//! Fragment location: which release introduced each fragment file.

use tracing::debug;

use super::decoration::Decoration;
use super::range::Range;
use super::{run_git, ReleasePattern};
use crate::error::{RelnotesError, Result};
use crate::notes::NotesDir;
use crate::ports::GitRepo;

/// Separates the fields of a commit header line (ASCII unit separator).
const FIELD_SEP: char = '\x1f';

/// Header format: decoration, committer time, committer name, short hash.
const LOG_FORMAT: &str = "--format=%D%x1f%ct%x1f%cn%x1f%h";

/// A fragment file and the commit that added it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFragment {
    /// Release the fragment belongs to.
    pub tag: String,
    /// Commit time in epoch seconds.
    pub time: i64,
    /// Committer name.
    pub author: String,
    /// Abbreviated commit hash.
    pub hash: String,
    /// Repository-relative path of the fragment.
    pub path: String,
}

#[derive(Default)]
struct Commit {
    time: i64,
    author: String,
    hash: String,
}

/// Lists fragment files added within `range`, newest commit first.
///
/// Commits inherit the release of the nearest newer tagged commit; commits
/// newer than every tag in the range belong to the range end.
///
/// # Errors
///
/// Returns an error if the git query fails or prints an unexpected header.
pub fn locate(
    git: &dyn GitRepo,
    range: &Range,
    notes_dir: &NotesDir,
    pattern: &ReleasePattern,
) -> Result<Vec<LocatedFragment>> {
    let revision = range.revision();
    let args = [
        "log",
        revision.as_str(),
        "--name-only",
        "--no-renames",
        "--diff-filter=A",
        LOG_FORMAT,
    ];
    let log = run_git(git, &args)?;

    let mut tag = range.end.clone();
    let mut commit = Commit::default();
    let mut located = Vec::new();
    for line in log.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.contains(FIELD_SEP) {
            let fields: Vec<&str> = line.splitn(4, FIELD_SEP).collect();
            let &[decoration, time, author, hash] = fields.as_slice() else {
                return Err(unexpected(&args, line));
            };
            if let Some(release) = pattern.release_tag(&Decoration::parse(decoration)) {
                tag = release.to_string();
            }
            let time = time.parse().map_err(|_| unexpected(&args, line))?;
            commit = Commit { time, author: author.to_string(), hash: hash.to_string() };
        } else if notes_dir.is_fragment(line) {
            located.push(LocatedFragment {
                tag: tag.clone(),
                time: commit.time,
                author: commit.author.clone(),
                hash: commit.hash.clone(),
                path: line.to_string(),
            });
        }
    }

    debug!("located {} fragment(s) in {revision}", located.len());
    Ok(located)
}

fn unexpected(args: &[&str], line: &str) -> RelnotesError {
    RelnotesError::Git {
        command: args.join(" "),
        message: format!("unexpected commit header {line:?}"),
    }
}
