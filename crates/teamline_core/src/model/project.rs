//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record mutated by membership and
//!   leadership use-cases.
//!
//! # Invariants
//! - `name` is the unique project key and never changes after creation.
//! - `member_emails` is an ordered list; entries are compared byte-exact
//!   (case-sensitive) and duplicates are not collapsed.
//! - `leader_email` is not required to appear in `member_emails`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for project records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// Project name is empty or whitespace-only.
    BlankName,
    /// Leader email is empty or whitespace-only.
    BlankLeaderEmail,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "project name must not be blank"),
            Self::BlankLeaderEmail => write!(f, "project leader email must not be blank"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project key.
    pub name: String,
    /// Email of the single project leader.
    pub leader_email: String,
    /// Ordered member emails. Case-sensitive, duplicates preserved.
    pub member_emails: Vec<String>,
}

impl Project {
    /// Creates a project with an empty member list.
    ///
    /// The leader is deliberately not added to `member_emails`.
    pub fn new(name: impl Into<String>, leader_email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            leader_email: leader_email.into(),
            member_emails: Vec::new(),
        }
    }

    /// Checks record-level invariants before persistence.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::BlankName);
        }
        if self.leader_email.trim().is_empty() {
            return Err(ProjectValidationError::BlankLeaderEmail);
        }
        Ok(())
    }

    /// Returns whether `email` is present with a byte-exact match.
    pub fn has_member(&self, email: &str) -> bool {
        self.member_emails.iter().any(|member| member == email)
    }
}
