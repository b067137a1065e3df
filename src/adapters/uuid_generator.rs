//! UUID-backed identifier generation

use uuid::Uuid;

use crate::core::ports::IdGenerator;

/// Generates random (v4) UUIDs in hyphenated lowercase form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    /// Create a new generator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
