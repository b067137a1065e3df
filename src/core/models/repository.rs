//! Repository record
//!
//! A repository is one catalog entry: where the code lives, what it is built
//! with, and how many times it has been liked.

use serde::{Deserialize, Serialize};

/// Fields a client may never set through a partial update.
///
/// `id` is fixed at creation. `likes` only moves through the like operation.
pub const PROTECTED_FIELDS: &[&str] = &["id", "likes"];

/// A catalogued software repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// Unique identifier, assigned at creation
    pub id: String,

    /// Display title
    pub title: String,

    /// Where the repository lives
    pub url: String,

    /// Technologies used, in client order
    pub techs: Vec<String>,

    /// Like counter (system-owned)
    pub likes: u64,
}

impl Repository {
    /// Build a fresh record with zero likes
    #[must_use]
    pub fn new(id: String, fields: NewRepository) -> Self {
        Self {
            id,
            title: fields.title,
            url: fields.url,
            techs: fields.techs,
            likes: 0,
        }
    }

    /// Merge a patch into this record, field by field.
    ///
    /// Protected fields are stripped first. `techs` is replaced wholesale.
    pub fn apply(&mut self, patch: RepositoryPatch) {
        let patch = patch.strip_protected();

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(techs) = patch.techs {
            self.techs = techs;
        }
    }
}

/// Client-supplied fields for a new repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewRepository {
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Repository URL
    #[serde(default)]
    pub url: String,
    /// Technologies used
    #[serde(default)]
    pub techs: Vec<String>,
}

/// A partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositoryPatch {
    /// Accepted from the wire, always stripped
    #[serde(default)]
    pub id: Option<String>,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New URL
    #[serde(default)]
    pub url: Option<String>,
    /// Replacement technology list
    #[serde(default)]
    pub techs: Option<Vec<String>>,
    /// Accepted from the wire, always stripped
    #[serde(default)]
    pub likes: Option<u64>,
}

impl RepositoryPatch {
    /// Names of protected fields this patch tries to set
    #[must_use]
    pub fn protected_fields_present(&self) -> Vec<&'static str> {
        PROTECTED_FIELDS
            .iter()
            .copied()
            .filter(|field| match *field {
                "id" => self.id.is_some(),
                "likes" => self.likes.is_some(),
                _ => false,
            })
            .collect()
    }

    /// Drop every protected field from the patch
    #[must_use]
    pub fn strip_protected(self) -> Self {
        Self {
            id: None,
            likes: None,
            ..self
        }
    }

    /// Whether the patch changes nothing once protected fields are gone
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.url.is_none() && self.techs.is_none()
    }
}
