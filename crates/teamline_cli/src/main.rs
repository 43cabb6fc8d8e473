//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `teamline_core` linkage.
//! - Drive one create-project/create-announcement pass end to end.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use teamline_core::db::{open_db, open_db_in_memory};
use teamline_core::{
    AnnouncementService, ProjectService, SqliteAnnouncementRepository, SqliteProjectRepository,
};

fn main() {
    println!("teamline_core ping={}", teamline_core::ping());
    println!("teamline_core version={}", teamline_core::core_version());

    let log_dir = std::env::temp_dir().join("teamline-logs");
    if let Some(dir) = log_dir.to_str() {
        if let Err(err) = teamline_core::init_logging(teamline_core::default_log_level(), dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    if let Err(err) = smoke() {
        eprintln!("smoke check failed: {err}");
        std::process::exit(1);
    }
}

fn smoke() -> Result<(), Box<dyn std::error::Error>> {
    // TEAMLINE_DB points at a database file; default is a throwaway
    // in-memory database.
    let mut conn = match std::env::var_os("TEAMLINE_DB") {
        Some(path) => open_db(PathBuf::from(path))?,
        None => open_db_in_memory()?,
    };

    // Unique name keeps repeat runs against a file database working.
    let project_name = format!("smoke-{}", run_stamp());

    {
        let repo = SqliteProjectRepository::try_new(&mut conn)?;
        let mut projects = ProjectService::new(repo);
        let project = projects.create_project(&project_name, "leader@example.com")?;
        projects.add_member_email(&project.name, "member@example.com")?;
        println!(
            "created project `{}` led by {}",
            project.name, project.leader_email
        );
    }

    let repo = SqliteAnnouncementRepository::try_new(&conn)?;
    let announcements = AnnouncementService::new(repo);
    let announcement =
        announcements.create_announcement("Smoke check", "core wiring is alive", "teamline")?;
    println!(
        "created announcement {} at epoch_ms={}",
        announcement.id, announcement.created_at_epoch_ms
    );

    Ok(())
}

fn run_stamp() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos())
        .unwrap_or_default()
}
