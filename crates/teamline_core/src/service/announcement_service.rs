//! Announcement use-case service.
//!
//! # Responsibility
//! - Provide create/get/delete operations for announcements.
//!
//! # Invariants
//! - Identifier and creation timestamp are assigned exactly once, at
//!   creation.
//! - Delete distinguishes a missing announcement from a transport failure.

use crate::model::announcement::{Announcement, AnnouncementId};
use crate::repo::announcement_repo::AnnouncementRepository;
use crate::repo::{RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from announcement use-case operations.
#[derive(Debug)]
pub enum AnnouncementServiceError {
    /// Target announcement does not exist.
    AnnouncementNotFound(AnnouncementId),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for AnnouncementServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnnouncementNotFound(id) => write!(f, "announcement not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent announcement state: {details}")
            }
        }
    }
}

impl Error for AnnouncementServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for AnnouncementServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::AnnouncementNotFound(id) => Self::AnnouncementNotFound(id),
            other => Self::Repo(other),
        }
    }
}

/// Announcement service facade over repository implementations.
pub struct AnnouncementService<R: AnnouncementRepository> {
    repo: R,
}

impl<R: AnnouncementRepository> AnnouncementService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates one announcement and returns the stored record.
    ///
    /// The returned record carries the generated id and the creation
    /// timestamp as persisted, so callers can rely on exact round-trips.
    pub fn create_announcement(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Announcement, AnnouncementServiceError> {
        let announcement = Announcement::new(title, message, author);
        let id = self.repo.add_announcement(&announcement)?;

        self.repo
            .get_announcement_by_id(id)?
            .ok_or(AnnouncementServiceError::InconsistentState(
                "created announcement not found in read-back",
            ))
    }

    /// Gets one announcement by stable id.
    pub fn get_announcement(&self, id: AnnouncementId) -> RepoResult<Option<Announcement>> {
        self.repo.get_announcement_by_id(id)
    }

    /// Hard-deletes one announcement by stable id.
    pub fn delete_announcement(&self, id: AnnouncementId) -> Result<(), AnnouncementServiceError> {
        self.repo.delete_announcement(id)?;
        Ok(())
    }
}
