//! Service context bundling all port trait objects.

use std::path::Path;

use crate::adapters::replaying::{
    ReplayingClock, ReplayingFileSystem, ReplayingGitRepo, ReplayingIdGenerator,
    ReplayingTerminal,
};
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{Clock, FileSystem, GitRepo, IdGenerator, Terminal};

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. Constructors
/// wire up different adapter implementations (live, replaying).
pub struct ServiceContext {
    /// Git history queries.
    pub git: Box<dyn GitRepo>,
    /// Filesystem for fragment and config I/O.
    pub fs: Box<dyn FileSystem>,
    /// Clock for naming new fragments.
    pub clock: Box<dyn Clock>,
    /// ID generator for new fragment name suffixes.
    pub id_gen: Box<dyn IdGenerator>,
    /// Editor launch and yes/no prompts.
    pub terminal: Box<dyn Terminal>,
}

impl ServiceContext {
    /// Creates a live context bound to the process environment.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::clock::LiveClock;
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::live::git::LiveGitRepo;
        use crate::adapters::live::id_gen::LiveIdGenerator;
        use crate::adapters::live::terminal::LiveTerminal;

        Self {
            git: Box::new(LiveGitRepo),
            fs: Box::new(LiveFileSystem),
            clock: Box::new(LiveClock),
            id_gen: Box::new(LiveIdGenerator),
            terminal: Box::new(LiveTerminal),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// All ports are served by a single cassette; each port/method pair
    /// is dispatched to its own interaction stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            git: Box::new(ReplayingGitRepo::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            id_gen: Box::new(ReplayingIdGenerator::new(CassetteReplayer::new(&cassette))),
            terminal: Box::new(ReplayingTerminal::new(CassetteReplayer::new(&cassette))),
        })
    }
}
