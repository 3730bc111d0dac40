//! Live adapter for the `IdGenerator` port.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Number of hex digits in a fragment name suffix.
const SUFFIX_LEN: usize = 16;

/// Live ID generator producing 16 random hex digits from a v4 UUID.
pub struct LiveIdGenerator;

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(SUFFIX_LEN);
        id
    }
}
