//! ID generator port for producing unique fragment name suffixes.

/// Generates unique identifiers.
///
/// Used for the random suffix of new fragment file names; replay swaps in
/// a predictable sequence.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string of lowercase hex digits.
    fn generate_id(&self) -> String;
}
