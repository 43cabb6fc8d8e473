//! Project use-case service.
//!
//! # Responsibility
//! - Provide create-project, membership and set-leader operations.
//! - Enforce the failure vocabulary delivered to the output boundary.
//!
//! # Invariants
//! - Member email comparison is byte-exact; no case normalization.
//! - Exactly one persistence write on success, zero writes on failure.
//! - Each operation is a single read-validate-write pass; concurrent
//!   writers to the same project follow last-writer-wins.

use crate::model::project::Project;
use crate::repo::project_repo::ProjectRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from project use-case operations.
///
/// `Display` output is the exact message delivered to the output boundary.
#[derive(Debug)]
pub enum ProjectServiceError {
    /// Referenced project does not exist.
    ProjectNotFound,
    /// Remove attempted on a project with no members.
    EmptyMemberList,
    /// Remove attempted for an email absent from the member list.
    EmailNotFound,
    /// Add attempted for an email already present.
    DuplicateMember,
    /// Set-leader attempted with the current leader's email.
    SameLeader,
    /// Create attempted with a name that is already in use.
    NameTaken,
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectNotFound => write!(f, "Project not found"),
            Self::EmptyMemberList => write!(f, "No members in project"),
            Self::EmailNotFound => write!(f, "Email not found in project"),
            Self::DuplicateMember => write!(f, "Email is already a member of the project"),
            Self::SameLeader => write!(f, "New leader is the same as the current leader"),
            Self::NameTaken => write!(f, "Project name is already taken"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ProjectServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ProjectServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Project service facade over repository implementations.
pub struct ProjectService<R: ProjectRepository> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a project with an empty member list.
    ///
    /// The leader is not auto-added to the member list.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        leader_email: impl Into<String>,
    ) -> Result<Project, ProjectServiceError> {
        let name = name.into();
        if self.repo.exists_by_name(&name)? {
            return Err(ProjectServiceError::NameTaken);
        }

        let project = Project::new(name, leader_email);
        self.repo.save(&project)?;
        Ok(project)
    }

    /// Appends `email` to the project's member list.
    pub fn add_member_email(
        &mut self,
        project_name: &str,
        email: impl Into<String>,
    ) -> Result<(), ProjectServiceError> {
        let mut project = self.fetch(project_name)?;
        let email = email.into();

        if project.has_member(&email) {
            return Err(ProjectServiceError::DuplicateMember);
        }

        project.member_emails.push(email);
        self.repo.save(&project)?;
        Ok(())
    }

    /// Removes the single first byte-exact match of `email`.
    pub fn remove_member_email(
        &mut self,
        project_name: &str,
        email: &str,
    ) -> Result<(), ProjectServiceError> {
        let mut project = self.fetch(project_name)?;

        if project.member_emails.is_empty() {
            return Err(ProjectServiceError::EmptyMemberList);
        }

        let position = project
            .member_emails
            .iter()
            .position(|member| member == email)
            .ok_or(ProjectServiceError::EmailNotFound)?;

        project.member_emails.remove(position);
        self.repo.save(&project)?;
        Ok(())
    }

    /// Replaces the project leader and returns the new leader's email.
    pub fn set_leader(
        &mut self,
        project_name: &str,
        new_leader_email: impl Into<String>,
    ) -> Result<String, ProjectServiceError> {
        let mut project = self.fetch(project_name)?;
        let new_leader_email = new_leader_email.into();

        if project.leader_email == new_leader_email {
            return Err(ProjectServiceError::SameLeader);
        }

        project.leader_email = new_leader_email.clone();
        self.repo.save(&project)?;
        Ok(new_leader_email)
    }

    /// Gets one project by name without mutating it.
    pub fn get_project(&self, project_name: &str) -> Result<Option<Project>, ProjectServiceError> {
        Ok(self.repo.get_project_info(project_name)?)
    }

    fn fetch(&self, project_name: &str) -> Result<Project, ProjectServiceError> {
        self.repo
            .get_project_info(project_name)?
            .ok_or(ProjectServiceError::ProjectNotFound)
    }
}
