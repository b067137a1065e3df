//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::models::{NewRepository, RepositoryPatch};

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a repository
///
/// Missing fields fall back to empty values; contents are not validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateRepositoryRequest {
    /// Repository title
    #[serde(default)]
    pub title: String,
    /// Repository URL
    #[serde(default)]
    pub url: String,
    /// Technologies used
    #[serde(default)]
    pub techs: Vec<String>,
}

impl From<&CreateRepositoryRequest> for NewRepository {
    fn from(req: &CreateRepositoryRequest) -> Self {
        Self {
            title: req.title.clone(),
            url: req.url.clone(),
            techs: req.techs.clone(),
        }
    }
}

/// Request body for a partial repository update
///
/// `id` and `likes` are accepted with any JSON value so clients sending a
/// full record are not rejected, but they never reach the stored record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRepositoryRequest {
    /// Ignored
    #[serde(default)]
    pub id: Option<Value>,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New URL
    #[serde(default)]
    pub url: Option<String>,
    /// Replacement technology list
    #[serde(default)]
    pub techs: Option<Vec<String>>,
    /// Ignored
    #[serde(default)]
    pub likes: Option<Value>,
}

impl From<UpdateRepositoryRequest> for RepositoryPatch {
    fn from(req: UpdateRepositoryRequest) -> Self {
        Self {
            id: req.id.map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string)),
            title: req.title,
            url: req.url,
            techs: req.techs,
            likes: req.likes.map(|v| v.as_u64().unwrap_or_default()),
        }
    }
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Like endpoint response data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikesData {
    /// Like count after the increment
    pub likes: u64,
}
