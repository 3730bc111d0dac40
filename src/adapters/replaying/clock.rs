//! Replaying adapter for the Clock port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Replays recorded clock values from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a new replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let output = next_output(&self.replayer, "clock", "now");
        serde_json::from_value(output).expect("clock::now: failed to deserialize DateTime<Utc>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::make_replayer;
    use crate::cassette::format::Interaction;
    use serde_json::json;

    #[test]
    fn replaying_clock_serves_recorded_time() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "clock".into(),
            method: "now".into(),
            input: json!({}),
            output: json!("2024-06-15T10:30:00Z"),
        }]);
        let clock = ReplayingClock::new(replayer);
        assert_eq!(clock.now().to_rfc3339(), "2024-06-15T10:30:00+00:00");
    }
}
