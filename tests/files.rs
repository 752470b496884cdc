use std::fs;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use palette_calendar::calendar::{FilterMode, ProjectId, Seed, ViewMode};
use palette_calendar::config::Config;
use palette_calendar::error::{ConfigError, SeedError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("palette-calendar-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_seed_file_replaces_sample_data() {
    let path = scratch_file(
        "seed.toml",
        r##"
        [[projects]]
        id = "p"
        name = "논문"
        color = "#8B5CF6"

        [[todos]]
        id = "a"
        title = "초안"
        project = "p"
        offset = 2
        priority = "high"

        [[events]]
        id = "x"
        title = "세미나"
        offset = -1
        start = "13:30"
        end = "15:00"
        project = "p"
        kind = "meeting"

        [[events]]
        id = "y"
        title = "요가"
        offset = 0
        start = "07:00"
        end = "08:00"
        project = "p"
        personal = true
        "##,
    );

    let store = Seed::load(&path).unwrap().into_store(today()).unwrap();
    assert_eq!(store.projects().len(), 1);
    assert!(store.users().is_empty());

    let draft = &store.todos()[0];
    assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 17).unwrap());
    assert!(!draft.completed);

    let seminar = &store.events()[0];
    assert_eq!(seminar.date, NaiveDate::from_ymd_opt(2024, 3, 14).unwrap());
    assert_eq!(seminar.start_time, NaiveTime::from_hms_opt(13, 30, 0).unwrap());
    assert_eq!(seminar.project_id, Some(ProjectId::from("p")));

    // Personal events never carry a project
    let yoga = &store.events()[1];
    assert!(yoga.is_personal);
    assert_eq!(yoga.project_id, None);

    let personal = FilterMode::PersonalOnly;
    assert!(personal.shows_event(yoga));
    assert!(!personal.shows_event(seminar));
}

#[test]
fn test_seed_rejects_dangling_project_and_bad_time() {
    let dangling = Seed::parse(
        r#"
        [[todos]]
        id = "a"
        title = "고아"
        project = "missing"
        offset = 0
        "#,
    )
    .unwrap()
    .into_store(today());
    assert!(matches!(dangling, Err(SeedError::UnknownProject { .. })));

    let bad_time = Seed::parse(
        r#"
        [[events]]
        id = "x"
        title = "회의"
        offset = 0
        start = "25:00"
        end = "26:00"
        "#,
    )
    .unwrap()
    .into_store(today());
    assert!(matches!(bad_time, Err(SeedError::Time { .. })));
}

#[test]
fn test_seed_rejects_shared_event_without_project() {
    let orphan = Seed::parse(
        r#"
        [[events]]
        id = "x"
        title = "회의"
        offset = 0
        start = "10:00"
        end = "11:00"
        kind = "meeting"
        "#,
    )
    .unwrap()
    .into_store(today());
    assert!(matches!(
        orphan,
        Err(SeedError::EventWithoutProject { ref item }) if item == "회의"
    ));
}

#[test]
fn test_missing_seed_file_is_an_io_error() {
    let path = std::env::temp_dir().join("palette-calendar-does-not-exist.toml");
    assert!(matches!(Seed::load(&path), Err(SeedError::Io(_))));
}

#[test]
fn test_config_file_round_trip_through_disk() {
    let path = scratch_file(
        "config.toml",
        r#"
        [calendar]
        default_view = "month"

        [ui]
        mouse_enabled = false
        sidebar_width = 32

        [share]
        base_url = "https://cal.example.com"
        "#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.calendar.view_mode(), ViewMode::Month);
    assert!(!config.ui.mouse_enabled);
    assert_eq!(config.ui.sidebar_width, 32);
    assert_eq!(config.share.base_url, "https://cal.example.com");
    assert!(config.logging.enabled);
}

#[test]
fn test_config_file_errors() {
    let malformed = scratch_file("malformed.toml", "[ui\nsidebar_width = ");
    assert!(matches!(
        Config::load_from(&malformed),
        Err(ConfigError::Parse(_))
    ));

    let invalid = scratch_file("invalid.toml", "[ui]\nsidebar_width = 200\n");
    assert!(matches!(
        Config::load_from(&invalid),
        Err(ConfigError::Invalid(_))
    ));
}
