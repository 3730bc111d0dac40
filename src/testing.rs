//! In-memory port implementations shared by unit tests.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::adapters::replaying::{ReplayingClock, ReplayingIdGenerator, ReplayingTerminal};
use crate::cassette::format::{Cassette, Interaction};
use crate::cassette::replayer::CassetteReplayer;
use crate::context::ServiceContext;
use crate::ports::{FileSystem, GitRepo};

type PortResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Git double answering from a table keyed by the space-joined arguments.
#[derive(Clone, Default)]
pub struct ScriptedGit {
    responses: Arc<Mutex<HashMap<String, Result<String, String>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, args: &str, stdout: &str) -> Self {
        self.responses.lock().unwrap().insert(args.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn fail(self, args: &str, message: &str) -> Self {
        self.responses.lock().unwrap().insert(args.to_string(), Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl GitRepo for ScriptedGit {
    fn run(&self, args: &[&str]) -> PortResult<String> {
        let key = args.join(" ");
        self.calls.lock().unwrap().push(key.clone());
        match self.responses.lock().unwrap().get(&key) {
            Some(Ok(out)) => Ok(out.clone()),
            Some(Err(msg)) => Err(msg.clone().into()),
            None => Err(format!("unexpected git call: {key}").into()),
        }
    }
}

#[derive(Default)]
struct MemState {
    files: HashMap<PathBuf, (String, i64)>,
    dirs: BTreeSet<PathBuf>,
}

/// In-memory filesystem; handles are shared so tests can inspect writes.
#[derive(Clone, Default)]
pub struct MemFs {
    state: Arc<Mutex<MemState>>,
}

impl MemFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.state.lock().unwrap().dirs.insert(PathBuf::from(path));
        self
    }

    pub fn with_file(self, path: &str, contents: &str, mtime: i64) -> Self {
        self.state
            .lock()
            .unwrap()
            .files
            .insert(PathBuf::from(path), (contents.to_string(), mtime));
        self
    }

    pub fn file(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().files.get(Path::new(path)).map(|(c, _)| c.clone())
    }

    pub fn file_names(&self) -> Vec<PathBuf> {
        let mut names: Vec<_> = self.state.lock().unwrap().files.keys().cloned().collect();
        names.sort();
        names
    }
}

impl FileSystem for MemFs {
    fn read_to_string(&self, path: &Path) -> PortResult<String> {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(path)
            .map(|(c, _)| c.clone())
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }

    fn write(&self, path: &Path, contents: &str) -> PortResult<()> {
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.to_path_buf(), (contents.to_string(), 0));
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path)
            || state.dirs.contains(path)
            || state.files.keys().any(|k| k.starts_with(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(path)
    }

    fn list_dir(&self, path: &Path) -> PortResult<Vec<String>> {
        let state = self.state.lock().unwrap();
        let mut names: Vec<String> = state
            .files
            .keys()
            .filter(|k| k.parent() == Some(path))
            .filter_map(|k| k.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        names.sort();
        Ok(names)
    }

    fn modified(&self, path: &Path) -> PortResult<i64> {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(path)
            .map(|(_, t)| *t)
            .ok_or_else(|| format!("File not found: {}", path.display()).into())
    }
}

/// Builds a context from the given doubles; clock, ids and terminal replay
/// `interactions`.
pub fn context(git: ScriptedGit, fs: MemFs, interactions: Vec<Interaction>) -> ServiceContext {
    let cassette = Cassette {
        name: "unit".into(),
        recorded_at: Utc::now(),
        head: "0000000".into(),
        interactions,
    };
    ServiceContext {
        git: Box::new(git),
        fs: Box::new(fs),
        clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
        id_gen: Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
        terminal: Box::new(ReplayingTerminal::new(CassetteReplayer::new(&cassette))),
    }
}
