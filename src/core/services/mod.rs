//! Business logic services
//!
//! - [`store`] - The in-memory repository store

pub mod store;

pub use store::{RepositoryStore, StoreError};
