//! Output boundary contracts and use-case dispatch.
//!
//! # Responsibility
//! - Define the capability trait a presentation layer implements to
//!   receive operation outcomes.
//! - Bridge request payloads to service calls and deliver exactly one
//!   outcome per operation.
//!
//! # Invariants
//! - For every dispatch call, exactly one of `prepare_success_view` /
//!   `prepare_fail_view` runs, exactly once.
//! - Failure messages are the error `Display` output, verbatim.

use crate::model::announcement::{Announcement, AnnouncementId};
use crate::model::project::Project;
use crate::repo::announcement_repo::AnnouncementRepository;
use crate::repo::project_repo::ProjectRepository;
use crate::service::announcement_service::AnnouncementService;
use crate::service::project_service::ProjectService;

/// Capability handed to use-case dispatch for reporting one outcome.
///
/// One trait generic over the success payload replaces the
/// interface-per-operation shape; a presenter implements it once per
/// payload type it can render.
pub trait OutputBoundary<P> {
    /// Receives the success payload. Called at most once per operation.
    fn prepare_success_view(&mut self, payload: P);
    /// Receives a human-readable failure reason. Called at most once.
    fn prepare_fail_view(&mut self, message: &str);
}

/// Request payload for the create-project operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub name: String,
    pub leader_email: String,
}

/// Request payload for add/remove member operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberEmailRequest {
    pub project_name: String,
    pub email: String,
}

/// Request payload for the set-leader operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLeaderRequest {
    pub project_name: String,
    pub new_leader_email: String,
}

/// Request payload for the create-announcement operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub message: String,
    pub author: String,
}

/// Request payload for the delete-announcement operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteAnnouncementRequest {
    pub id: AnnouncementId,
}

/// Runs create-project and reports the created record on success.
pub fn create_project<R, B>(
    service: &mut ProjectService<R>,
    request: CreateProjectRequest,
    boundary: &mut B,
) where
    R: ProjectRepository,
    B: OutputBoundary<Project>,
{
    match service.create_project(request.name, request.leader_email) {
        Ok(project) => boundary.prepare_success_view(project),
        Err(err) => boundary.prepare_fail_view(&err.to_string()),
    }
}

/// Runs add-member; the success payload is empty and the view refreshes.
pub fn add_member_email<R, B>(
    service: &mut ProjectService<R>,
    request: MemberEmailRequest,
    boundary: &mut B,
) where
    R: ProjectRepository,
    B: OutputBoundary<()>,
{
    match service.add_member_email(&request.project_name, request.email) {
        Ok(()) => boundary.prepare_success_view(()),
        Err(err) => boundary.prepare_fail_view(&err.to_string()),
    }
}

/// Runs remove-member; the success payload is empty and the view refreshes.
pub fn remove_member_email<R, B>(
    service: &mut ProjectService<R>,
    request: MemberEmailRequest,
    boundary: &mut B,
) where
    R: ProjectRepository,
    B: OutputBoundary<()>,
{
    match service.remove_member_email(&request.project_name, &request.email) {
        Ok(()) => boundary.prepare_success_view(()),
        Err(err) => boundary.prepare_fail_view(&err.to_string()),
    }
}

/// Runs set-leader and reports the new leader's email on success.
pub fn set_leader<R, B>(
    service: &mut ProjectService<R>,
    request: SetLeaderRequest,
    boundary: &mut B,
) where
    R: ProjectRepository,
    B: OutputBoundary<String>,
{
    match service.set_leader(&request.project_name, request.new_leader_email) {
        Ok(new_leader) => boundary.prepare_success_view(new_leader),
        Err(err) => boundary.prepare_fail_view(&err.to_string()),
    }
}

/// Runs create-announcement and reports the stored record on success.
pub fn create_announcement<R, B>(
    service: &AnnouncementService<R>,
    request: CreateAnnouncementRequest,
    boundary: &mut B,
) where
    R: AnnouncementRepository,
    B: OutputBoundary<Announcement>,
{
    match service.create_announcement(request.title, request.message, request.author) {
        Ok(announcement) => boundary.prepare_success_view(announcement),
        Err(err) => boundary.prepare_fail_view(&err.to_string()),
    }
}

/// Runs delete-announcement and reports the deleted id on success.
pub fn delete_announcement<R, B>(
    service: &AnnouncementService<R>,
    request: DeleteAnnouncementRequest,
    boundary: &mut B,
) where
    R: AnnouncementRepository,
    B: OutputBoundary<AnnouncementId>,
{
    match service.delete_announcement(request.id) {
        Ok(()) => boundary.prepare_success_view(request.id),
        Err(err) => boundary.prepare_fail_view(&err.to_string()),
    }
}
