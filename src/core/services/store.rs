//! Repository store
//!
//! Owns the in-memory collection of repositories and is the only way to
//! read or change it. Insertion order is preserved.
//!
//! Update, delete and like all go through the lookup guard
//! ([`RepositoryStore::position`]) before touching anything, so a failed
//! lookup never leaves a partial change behind.

use thiserror::Error;

use crate::core::models::{NewRepository, Repository, RepositoryPatch};
use crate::core::ports::IdGenerator;

/// Errors raised by store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries the requested ID
    #[error("repository not found: {id}")]
    NotFound {
        /// The ID that was looked up
        id: String,
    },
}

/// Ordered, in-memory collection of repositories
#[derive(Debug)]
pub struct RepositoryStore {
    records: Vec<Repository>,
    ids: Box<dyn IdGenerator>,
}

impl RepositoryStore {
    /// Create an empty store drawing IDs from `ids`
    #[must_use]
    pub fn new(ids: impl IdGenerator + 'static) -> Self {
        Self {
            records: Vec::new(),
            ids: Box::new(ids),
        }
    }

    /// All records, in insertion order
    #[must_use]
    pub fn list(&self) -> &[Repository] {
        &self.records
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by ID without mutating
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Repository> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Append a new record with a generated ID and zero likes
    pub fn create(&mut self, fields: NewRepository) -> Repository {
        let repo = Repository::new(self.ids.generate(), fields);
        log::info!("Created repository {} ({})", repo.id, repo.title);
        self.records.push(repo.clone());
        repo
    }

    /// Merge `patch` into the record with `id`, keeping its position.
    ///
    /// `id` and `likes` in the patch are discarded.
    pub fn update(&mut self, id: &str, patch: RepositoryPatch) -> Result<Repository, StoreError> {
        let ignored = patch.protected_fields_present();
        let repo = self.find_mut(id)?;

        if !ignored.is_empty() {
            log::debug!("Ignoring protected fields {ignored:?} in update of {id}");
        }
        repo.apply(patch);
        log::debug!("Updated repository {id}");

        Ok(repo.clone())
    }

    /// Remove the record with `id`. Later records shift down by one.
    pub fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let index = self.position(id)?;
        self.records.remove(index);
        log::info!("Deleted repository {id}");
        Ok(())
    }

    /// Add one like to the record with `id`, returning the new count
    pub fn like(&mut self, id: &str) -> Result<u64, StoreError> {
        let repo = self.find_mut(id)?;
        repo.likes += 1;
        log::debug!("Repository {id} now has {} likes", repo.likes);
        Ok(repo.likes)
    }

    /// Lookup guard: position of the first record whose ID equals `id`.
    ///
    /// Comparison is exact and case-sensitive. The position is only valid
    /// until the collection next changes.
    pub fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.records.iter().position(|r| r.id == id).ok_or_else(|| {
            log::debug!("Repository {id} not found");
            StoreError::NotFound { id: id.to_string() }
        })
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Repository, StoreError> {
        let index = self.position(id)?;
        Ok(&mut self.records[index])
    }
}
