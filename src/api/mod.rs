//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or called directly.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take the store plus typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorBody, ErrorCode, REPOSITORY_NOT_FOUND};
pub use handlers::{
    create_repository, delete_repository, ensure_repository, like_repository, list_repositories,
    update_repository,
};
pub use types::{CreateRepositoryRequest, LikesData, UpdateRepositoryRequest};
