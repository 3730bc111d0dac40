//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the release-notes core and an
//! external system (git, filesystem, time, IDs, the interactive terminal).
//! Implementations live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod id_gen;
pub mod terminal;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use git::GitRepo;
pub use id_gen::IdGenerator;
pub use terminal::Terminal;
