//! Adapter implementations of the port traits.
//!
//! `live` talks to the real process environment; `replaying` serves
//! recorded interactions from a cassette.

pub mod live;
pub mod replaying;
