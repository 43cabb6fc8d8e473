//! Project repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence gateway for project records keyed by name.
//! - Own member-list replacement semantics for `save`.
//!
//! # Invariants
//! - `save` is an idempotent overwrite: project row and full member list
//!   are replaced in a single transaction.
//! - Member order and duplicates are preserved through the `position`
//!   column; emails are stored byte-exact.

use crate::model::project::Project;
use crate::repo::{ensure_connection_ready, RepoResult};
use rusqlite::{params, Connection, TransactionBehavior};

const PROJECT_TABLES: &[(&str, &[&str])] = &[
    ("projects", &["name", "leader_email"]),
    ("project_members", &["project_name", "position", "email"]),
];

/// Persistence gateway for project records.
pub trait ProjectRepository {
    /// Gets one project by its unique name.
    fn get_project_info(&self, name: &str) -> RepoResult<Option<Project>>;
    /// Overwrites the stored project keyed by its name.
    fn save(&mut self, project: &Project) -> RepoResult<()>;
    /// Returns whether a project with the given name exists.
    fn exists_by_name(&self, name: &str) -> RepoResult<bool>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, PROJECT_TABLES)?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn get_project_info(&self, name: &str) -> RepoResult<Option<Project>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, leader_email
             FROM projects
             WHERE name = ?1;",
        )?;

        let mut rows = stmt.query([name])?;
        if let Some(row) = rows.next()? {
            let name: String = row.get("name")?;
            let leader_email: String = row.get("leader_email")?;
            let member_emails = load_member_emails(self.conn, &name)?;
            return Ok(Some(Project {
                name,
                leader_email,
                member_emails,
            }));
        }

        Ok(None)
    }

    fn save(&mut self, project: &Project) -> RepoResult<()> {
        project.validate()?;

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        tx.execute(
            "INSERT INTO projects (name, leader_email)
             VALUES (?1, ?2)
             ON CONFLICT(name) DO UPDATE SET leader_email = excluded.leader_email;",
            params![project.name.as_str(), project.leader_email.as_str()],
        )?;

        tx.execute(
            "DELETE FROM project_members WHERE project_name = ?1;",
            [project.name.as_str()],
        )?;

        for (position, email) in project.member_emails.iter().enumerate() {
            tx.execute(
                "INSERT INTO project_members (project_name, position, email)
                 VALUES (?1, ?2, ?3);",
                params![project.name.as_str(), position as i64, email.as_str()],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn exists_by_name(&self, name: &str) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM projects
                WHERE name = ?1
            );",
            [name],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }
}

fn load_member_emails(conn: &Connection, project_name: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT email
         FROM project_members
         WHERE project_name = ?1
         ORDER BY position ASC;",
    )?;

    let mut rows = stmt.query([project_name])?;
    let mut emails = Vec::new();
    while let Some(row) = rows.next()? {
        emails.push(row.get("email")?);
    }
    Ok(emails)
}
