use teamline_core::db::open_db_in_memory;
use teamline_core::{
    Announcement, AnnouncementRepository, AnnouncementService, AnnouncementServiceError, RepoError,
    SqliteAnnouncementRepository,
};
use uuid::Uuid;

#[test]
fn create_announcement_roundtrips_through_storage() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnnouncementRepository::try_new(&conn).unwrap();
    let service = AnnouncementService::new(repo);

    let created = service
        .create_announcement("Kickoff", "First sprint starts Monday", "lead@example.com")
        .unwrap();
    assert!(!created.id.is_nil());
    assert_eq!(created.title, "Kickoff");
    assert_eq!(created.message, "First sprint starts Monday");
    assert_eq!(created.author, "lead@example.com");

    let fetched = service.get_announcement(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    // Creation time survives storage exactly, millisecond for millisecond.
    assert_eq!(fetched.created_at_epoch_ms, created.created_at_epoch_ms);
}

#[test]
fn fixed_timestamp_roundtrips_without_precision_loss() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnnouncementRepository::try_new(&conn).unwrap();

    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let announcement =
        Announcement::with_id(id, "Pinned", "fixed clock", "lead", 1_700_000_000_123).unwrap();
    repo.add_announcement(&announcement).unwrap();

    let fetched = repo.get_announcement_by_id(id).unwrap().unwrap();
    assert_eq!(fetched.created_at_epoch_ms, 1_700_000_000_123);
}

#[test]
fn delete_announcement_hard_deletes_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnnouncementRepository::try_new(&conn).unwrap();
    let service = AnnouncementService::new(repo);

    let created = service
        .create_announcement("Kickoff", "body", "lead")
        .unwrap();
    service.delete_announcement(created.id).unwrap();

    assert!(service.get_announcement(created.id).unwrap().is_none());
}

#[test]
fn delete_missing_announcement_is_distinguishable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnnouncementRepository::try_new(&conn).unwrap();
    let service = AnnouncementService::new(repo);

    let missing_id = Uuid::new_v4();
    let err = service.delete_announcement(missing_id).unwrap_err();
    assert!(
        matches!(err, AnnouncementServiceError::AnnouncementNotFound(id) if id == missing_id)
    );
}

#[test]
fn blank_fields_are_rejected_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnnouncementRepository::try_new(&conn).unwrap();
    let service = AnnouncementService::new(repo);

    let err = service.create_announcement("", "body", "lead").unwrap_err();
    assert!(matches!(
        err,
        AnnouncementServiceError::Repo(RepoError::AnnouncementValidation(_))
    ));

    let stored: i64 = conn
        .query_row("SELECT COUNT(*) FROM announcements;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(stored, 0);
}
