//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::core::models::Repository;
use crate::core::services::RepositoryStore;

use super::error::ApiError;
use super::types::{CreateRepositoryRequest, LikesData, UpdateRepositoryRequest};

// =============================================================================
// REPOSITORIES
// =============================================================================

/// List all repositories in insertion order
pub fn list_repositories(store: &RepositoryStore) -> Result<Vec<Repository>, ApiError> {
    Ok(store.list().to_vec())
}

/// Create a new repository
pub fn create_repository(
    store: &mut RepositoryStore,
    req: &CreateRepositoryRequest,
) -> Result<Repository, ApiError> {
    Ok(store.create(req.into()))
}

/// Apply a partial update to a repository
pub fn update_repository(
    store: &mut RepositoryStore,
    id: &str,
    req: UpdateRepositoryRequest,
) -> Result<Repository, ApiError> {
    Ok(store.update(id, req.into())?)
}

/// Delete a repository
pub fn delete_repository(store: &mut RepositoryStore, id: &str) -> Result<(), ApiError> {
    Ok(store.delete(id)?)
}

/// Like a repository, returning only the new count
pub fn like_repository(store: &mut RepositoryStore, id: &str) -> Result<LikesData, ApiError> {
    let likes = store.like(id)?;
    Ok(LikesData { likes })
}

/// Lookup guard for handlers that must check existence before doing
/// anything else (such as parsing a request body)
pub fn ensure_repository(store: &RepositoryStore, id: &str) -> Result<(), ApiError> {
    store.position(id)?;
    Ok(())
}
