//! Announcement repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the persistence gateway for announcement records keyed by id.
//!
//! # Invariants
//! - Write paths validate records before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - `delete_announcement` reports a missing row as `AnnouncementNotFound`
//!   rather than folding it into a generic failure.

use crate::model::announcement::{Announcement, AnnouncementId};
use crate::repo::{ensure_connection_ready, parse_announcement_id, RepoError, RepoResult};
use rusqlite::{params, Connection};

const ANNOUNCEMENT_TABLES: &[(&str, &[&str])] = &[(
    "announcements",
    &["id", "title", "message", "author", "created_at"],
)];

/// Persistence gateway for announcement records.
pub trait AnnouncementRepository {
    /// Stores one announcement and returns its stable id.
    fn add_announcement(&self, announcement: &Announcement) -> RepoResult<AnnouncementId>;
    /// Gets one announcement by id.
    fn get_announcement_by_id(&self, id: AnnouncementId) -> RepoResult<Option<Announcement>>;
    /// Hard-deletes one announcement by id.
    fn delete_announcement(&self, id: AnnouncementId) -> RepoResult<()>;
}

/// SQLite-backed announcement repository.
pub struct SqliteAnnouncementRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAnnouncementRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, ANNOUNCEMENT_TABLES)?;
        Ok(Self { conn })
    }
}

impl AnnouncementRepository for SqliteAnnouncementRepository<'_> {
    fn add_announcement(&self, announcement: &Announcement) -> RepoResult<AnnouncementId> {
        announcement.validate()?;

        self.conn.execute(
            "INSERT INTO announcements (id, title, message, author, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                announcement.id.to_string(),
                announcement.title.as_str(),
                announcement.message.as_str(),
                announcement.author.as_str(),
                announcement.created_at_epoch_ms,
            ],
        )?;

        Ok(announcement.id)
    }

    fn get_announcement_by_id(&self, id: AnnouncementId) -> RepoResult<Option<Announcement>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, message, author, created_at
             FROM announcements
             WHERE id = ?1;",
        )?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            let announcement = Announcement {
                id: parse_announcement_id(&id_text)?,
                title: row.get("title")?,
                message: row.get("message")?,
                author: row.get("author")?,
                created_at_epoch_ms: row.get("created_at")?,
            };
            announcement.validate()?;
            return Ok(Some(announcement));
        }

        Ok(None)
    }

    fn delete_announcement(&self, id: AnnouncementId) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM announcements WHERE id = ?1;",
            [id.to_string()],
        )?;

        if changed == 0 {
            return Err(RepoError::AnnouncementNotFound(id));
        }

        Ok(())
    }
}
