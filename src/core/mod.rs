//! Core domain logic for repo-catalog
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Repository, NewRepository, RepositoryPatch)
//! - `services/` - The repository store and its operations
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
