//! Live adapters for real external interactions.

pub mod clock;
pub mod filesystem;
pub mod git;
pub mod id_gen;
pub mod terminal;
