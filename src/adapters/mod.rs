//! Adapter implementations for port traits
//!
//! This module contains concrete implementations of the core ports:
//!
//! - `uuid_generator` - Random UUID repository identifiers

mod uuid_generator;

pub use uuid_generator::UuidGenerator;
