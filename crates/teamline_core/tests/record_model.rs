use teamline_core::{
    Announcement, AnnouncementValidationError, Project, ProjectValidationError,
};
use uuid::Uuid;

#[test]
fn project_new_starts_with_empty_member_list() {
    let project = Project::new("Apollo", "lead@example.com");

    assert_eq!(project.name, "Apollo");
    assert_eq!(project.leader_email, "lead@example.com");
    assert!(project.member_emails.is_empty());
}

#[test]
fn project_validate_rejects_blank_fields() {
    let blank_name = Project::new("   ", "lead@example.com");
    assert_eq!(
        blank_name.validate().unwrap_err(),
        ProjectValidationError::BlankName
    );

    let blank_leader = Project::new("Apollo", "");
    assert_eq!(
        blank_leader.validate().unwrap_err(),
        ProjectValidationError::BlankLeaderEmail
    );
}

#[test]
fn has_member_matches_byte_exact_only() {
    let mut project = Project::new("Apollo", "lead@example.com");
    project.member_emails.push("Abc@gmail.com".to_string());

    assert!(project.has_member("Abc@gmail.com"));
    assert!(!project.has_member("abc@gmail.com"));
}

#[test]
fn project_serialization_uses_expected_wire_fields() {
    let mut project = Project::new("Apollo", "lead@example.com");
    project.member_emails.push("a@example.com".to_string());
    project.member_emails.push("b@example.com".to_string());

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["name"], "Apollo");
    assert_eq!(json["leader_email"], "lead@example.com");
    assert_eq!(
        json["member_emails"],
        serde_json::json!(["a@example.com", "b@example.com"])
    );

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn announcement_new_generates_identity_and_timestamp() {
    let announcement = Announcement::new("Kickoff", "First sprint starts Monday", "lead");

    assert!(!announcement.id.is_nil());
    assert!(announcement.created_at_epoch_ms > 0);
    assert_eq!(announcement.title, "Kickoff");
    assert_eq!(announcement.message, "First sprint starts Monday");
    assert_eq!(announcement.author, "lead");
}

#[test]
fn with_id_rejects_nil_uuid() {
    let err = Announcement::with_id(Uuid::nil(), "t", "m", "a", 1).unwrap_err();
    assert_eq!(err, AnnouncementValidationError::NilId);
}

#[test]
fn announcement_validate_rejects_blank_fields() {
    let blank_title = Announcement::new("  ", "message", "author");
    assert_eq!(
        blank_title.validate().unwrap_err(),
        AnnouncementValidationError::BlankTitle
    );

    let blank_message = Announcement::new("title", "", "author");
    assert_eq!(
        blank_message.validate().unwrap_err(),
        AnnouncementValidationError::BlankMessage
    );

    let blank_author = Announcement::new("title", "message", "\t");
    assert_eq!(
        blank_author.validate().unwrap_err(),
        AnnouncementValidationError::BlankAuthor
    );
}

#[test]
fn announcement_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let announcement =
        Announcement::with_id(id, "Kickoff", "Sprint starts", "lead", 1_700_000_000_123).unwrap();

    let json = serde_json::to_value(&announcement).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "Kickoff");
    assert_eq!(json["message"], "Sprint starts");
    assert_eq!(json["author"], "lead");
    assert_eq!(json["created_at"], 1_700_000_000_123_i64);

    let decoded: Announcement = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, announcement);
}
