//! Live clock adapter.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// System clock; new fragments are dated from it.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
