//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Apply the membership/leadership/announcement validation rules.
//!
//! # Invariants
//! - Each operation performs at most one read and one write.
//! - Validation failures never reach the repository write path.

pub mod announcement_service;
pub mod project_service;
