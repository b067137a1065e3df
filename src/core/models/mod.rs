//! Domain models for repo-catalog
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Repository`] - A catalogued repository record
//! - [`NewRepository`] - Client fields for creating a record
//! - [`RepositoryPatch`] - A partial update, subject to [`PROTECTED_FIELDS`]

mod repository;

pub use repository::{NewRepository, PROTECTED_FIELDS, Repository, RepositoryPatch};
