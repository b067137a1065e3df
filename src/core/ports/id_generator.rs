//! Identifier generation port
//!
//! Defines where new repository IDs come from.

use std::fmt::Debug;

/// Source of unique, opaque record identifiers
///
/// Every call must return a value never returned before by the same
/// generator. The store does not check for collisions.
pub trait IdGenerator: Debug + Send + Sync {
    /// Produce a fresh identifier
    fn generate(&self) -> String;
}
