//! Announcement domain model.
//!
//! # Responsibility
//! - Define the announcement record created and deleted by announcement
//!   use-cases.
//!
//! # Invariants
//! - `id` is generated once and never reused for another announcement.
//! - `created_at_epoch_ms` is assigned at creation and never mutated.
//! - Deletion is a hard delete; there is no tombstone state.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for announcements.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type AnnouncementId = Uuid;

/// Validation error for announcement records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnouncementValidationError {
    /// Identifier is the nil UUID.
    NilId,
    /// Title is empty or whitespace-only.
    BlankTitle,
    /// Message body is empty or whitespace-only.
    BlankMessage,
    /// Author is empty or whitespace-only.
    BlankAuthor,
}

impl Display for AnnouncementValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "announcement id must not be the nil uuid"),
            Self::BlankTitle => write!(f, "announcement title must not be blank"),
            Self::BlankMessage => write!(f, "announcement message must not be blank"),
            Self::BlankAuthor => write!(f, "announcement author must not be blank"),
        }
    }
}

impl Error for AnnouncementValidationError {}

/// Canonical announcement record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Stable global ID, also the storage document key.
    pub id: AnnouncementId,
    /// Short headline shown in announcement lists.
    pub title: String,
    /// Full announcement body.
    pub message: String,
    /// Email or display name of the author.
    pub author: String,
    /// Creation instant in Unix epoch milliseconds.
    #[serde(rename = "created_at")]
    pub created_at_epoch_ms: i64,
}

impl Announcement {
    /// Creates an announcement with a generated ID and the current time.
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            message: message.into(),
            author: author.into(),
            created_at_epoch_ms: current_epoch_ms(),
        }
    }

    /// Creates an announcement with caller-provided ID and creation time.
    ///
    /// Used by read paths where identity already exists in storage.
    pub fn with_id(
        id: AnnouncementId,
        title: impl Into<String>,
        message: impl Into<String>,
        author: impl Into<String>,
        created_at_epoch_ms: i64,
    ) -> Result<Self, AnnouncementValidationError> {
        if id.is_nil() {
            return Err(AnnouncementValidationError::NilId);
        }
        Ok(Self {
            id,
            title: title.into(),
            message: message.into(),
            author: author.into(),
            created_at_epoch_ms,
        })
    }

    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), AnnouncementValidationError> {
        if self.id.is_nil() {
            return Err(AnnouncementValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(AnnouncementValidationError::BlankTitle);
        }
        if self.message.trim().is_empty() {
            return Err(AnnouncementValidationError::BlankMessage);
        }
        if self.author.trim().is_empty() {
            return Err(AnnouncementValidationError::BlankAuthor);
        }
        Ok(())
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// A clock before the Unix epoch maps to 0.
pub(crate) fn current_epoch_ms() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_millis() as i64,
        Err(_) => 0,
    }
}
