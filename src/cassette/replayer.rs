//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Hands out a cassette's interactions one port/method stream at a time.
///
/// Streams are independent: consuming `git::run` entries does not move the
/// `fs::exists` stream, so a replay only has to preserve the call order
/// within each stream.
pub struct CassetteReplayer {
    streams: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Splits `cassette` into per port/method streams.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut streams: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            streams
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { streams }
    }

    /// Takes the next interaction recorded for `port::method`.
    ///
    /// Returns `None` once the stream is used up or if it was never recorded.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Option<Interaction> {
        self.streams.get_mut(&(port.to_string(), method.to_string()))?.pop_front()
    }

    /// Number of interactions not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.streams.values().map(VecDeque::len).sum()
    }

    /// `port::method` names that still have interactions, sorted.
    #[must_use]
    pub fn pending(&self) -> Vec<String> {
        let mut pending: Vec<String> = self
            .streams
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((port, method), _)| format!("{port}::{method}"))
            .collect();
        pending.sort();
        pending
    }
}
