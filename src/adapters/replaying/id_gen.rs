//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::id_gen::IdGenerator;

/// Replays recorded IDs from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a new replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        let output = next_output(&self.replayer, "id_gen", "generate_id");
        output.as_str().expect("id_gen::generate_id: expected string output").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::replaying::test_support::make_replayer;
    use crate::cassette::format::Interaction;
    use serde_json::json;

    #[test]
    fn replaying_id_generator() {
        let replayer = make_replayer(vec![
            Interaction {
                seq: 0,
                port: "id_gen".into(),
                method: "generate_id".into(),
                input: json!({}),
                output: json!("0123456789abcdef"),
            },
            Interaction {
                seq: 1,
                port: "id_gen".into(),
                method: "generate_id".into(),
                input: json!({}),
                output: json!("fedcba9876543210"),
            },
        ]);
        let gen = ReplayingIdGenerator::new(replayer);
        assert_eq!(gen.generate_id(), "0123456789abcdef");
        assert_eq!(gen.generate_id(), "fedcba9876543210");
    }
}
