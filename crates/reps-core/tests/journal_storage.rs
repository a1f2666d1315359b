use std::collections::HashSet;
use std::fs;

use chrono::{Duration, Utc};
use tempfile::tempdir;

use reps_core::records::{NewSession, NewWorkout, TemplatePatch, WorkoutPatch};
use reps_core::storage::{keys, Exercise, Feeling, FileStore, KeyValueStore, MovementType};
use reps_core::{Journal, RepsError};

#[test]
fn test_records_survive_reopen() {
    let dir = tempdir().expect("tempdir");

    let template_id = {
        let journal = Journal::open_dir(dir.path()).expect("open should succeed");
        let template = journal
            .templates()
            .create("Full body", vec![Exercise::new("Squat"), Exercise::new("Press")])
            .expect("create should succeed");
        journal
            .sessions()
            .create(NewSession::new(MovementType::Lifted, Feeling::Strong).with_note("felt good"))
            .expect("log should succeed");
        template.id
    };

    let journal = Journal::open_dir(dir.path()).expect("reopen should succeed");
    let template = journal
        .templates()
        .get_by_id(&template_id)
        .expect("template should persist");
    assert_eq!(template.name, "Full body");
    assert_eq!(template.exercises.len(), 2);

    let sessions = journal.sessions().get_all();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].note.as_deref(), Some("felt good"));

    assert!(dir.path().join("reps_templates.json").exists());
    assert!(dir.path().join("reps_movement_sessions.json").exists());
}

#[test]
fn test_created_ids_are_unique() {
    let journal = Journal::in_memory();
    let mut seen = HashSet::new();
    for i in 0..200 {
        let template = journal
            .templates()
            .create(&format!("Template {}", i), vec![])
            .expect("create should succeed");
        assert!(seen.insert(template.id));
    }
    assert_eq!(journal.templates().get_all().len(), 200);
}

#[test]
fn test_missing_id_update_and_delete_have_no_side_effects() {
    let journal = Journal::in_memory();
    let template = journal
        .templates()
        .create("Legs", vec![Exercise::new("Squat")])
        .expect("create should succeed");
    let before = journal.templates().get_all();

    let updated = journal
        .templates()
        .update("missing", TemplatePatch::new().name("Other"))
        .expect("update should not error");
    assert!(updated.is_none());
    assert!(!journal.templates().delete("missing").expect("delete should not error"));
    assert!(journal
        .workouts()
        .update("missing", WorkoutPatch::new().date(Utc::now()))
        .expect("update should not error")
        .is_none());
    assert!(!journal.sessions().delete("missing").expect("delete should not error"));

    assert_eq!(journal.templates().get_all(), before);

    assert!(journal.templates().delete(&template.id).expect("delete should succeed"));
    assert!(journal.templates().get_all().is_empty());
}

#[test]
fn test_delete_removes_exactly_one() {
    let journal = Journal::in_memory();
    let ids: Vec<String> = (0..3)
        .map(|_| {
            journal
                .sessions()
                .create(NewSession::new(MovementType::Walked, Feeling::Easy))
                .expect("log should succeed")
                .id
        })
        .collect();

    assert!(journal.sessions().delete(&ids[1]).expect("delete should succeed"));
    let remaining: Vec<String> = journal.sessions().get_all().into_iter().map(|s| s.id).collect();
    assert_eq!(remaining, vec![ids[0].clone(), ids[2].clone()]);
}

#[test]
fn test_recent_sessions_sorted_and_limited() {
    let journal = Journal::in_memory();
    let now = Utc::now();
    for offset in [5, 0, 12, 3, 20, 1] {
        journal
            .sessions()
            .create(
                NewSession::new(MovementType::Ran, Feeling::Alive)
                    .with_date(now - Duration::days(offset)),
            )
            .expect("log should succeed");
    }

    let recent = journal.sessions().get_recent(4);
    assert_eq!(recent.len(), 4);
    assert!(recent.windows(2).all(|pair| pair[0].date >= pair[1].date));
    assert_eq!(recent[0].date, now);
    assert_eq!(journal.sessions().get_recent(100).len(), 6);
}

#[test]
fn test_legacy_untagged_collections_load() {
    let dir = tempdir().expect("tempdir");
    let store = FileStore::open(dir.path()).expect("open should succeed");
    store
        .set(
            keys::WORKOUTS,
            r#"[{"id":"1700000000000-abcdefghi","templateId":"t1","date":"2023-11-14T22:13:20.000Z","exercises":[{"name":"Bench","weight":135,"reps":8,"sets":3,"tags":["easy"]}]}]"#,
        )
        .expect("seed should succeed");

    let journal = Journal::open_dir(dir.path()).expect("open should succeed");
    let workouts = journal.workouts().get_all();
    assert_eq!(workouts.len(), 1);
    assert_eq!(workouts[0].exercises[0].tags, vec!["easy".to_string()]);
    assert_eq!(journal.template_name_for(&workouts[0]), "Deleted template");

    // The next write upgrades the layout.
    journal
        .workouts()
        .create(NewWorkout::new("t1", vec![]))
        .expect("create should succeed");
    let raw = fs::read_to_string(dir.path().join("reps_workouts.json")).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    assert_eq!(value["version"], 1);
    assert_eq!(value["data"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_corrupt_collection_reads_empty() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("reps_templates.json"), "{ truncated").expect("write");

    let journal = Journal::open_dir(dir.path()).expect("open should succeed");
    assert!(journal.templates().get_all().is_empty());
    assert!(journal.templates().get_by_id("anything").is_none());
}

#[test]
fn test_newer_layout_is_not_overwritten() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("reps_movement_sessions.json");
    let newer = r#"{"version":2,"data":[{"id":"a"},{"id":"b"},{"id":"c"}]}"#;
    fs::write(&path, newer).expect("write");

    let journal = Journal::open_dir(dir.path()).expect("open should succeed");
    assert!(journal.sessions().get_all().is_empty());

    let err = journal
        .sessions()
        .create(NewSession::new(MovementType::Ran, Feeling::Alive))
        .expect_err("create should refuse to rewrite");
    assert!(matches!(err, RepsError::Schema(_)));
    assert!(journal.sessions().delete("a").is_err());

    assert_eq!(fs::read_to_string(&path).expect("read"), newer);
}

#[test]
fn test_corrupt_collection_is_not_overwritten() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("reps_templates.json");
    fs::write(&path, r#"[{"id":"1-a","name":"Push","#).expect("write");

    let journal = Journal::open_dir(dir.path()).expect("open should succeed");
    assert!(journal.templates().create("Legs", vec![]).is_err());
    assert!(journal
        .templates()
        .update("1-a", TemplatePatch::new().name("Pull"))
        .is_err());

    assert_eq!(
        fs::read_to_string(&path).expect("read"),
        r#"[{"id":"1-a","name":"Push","#
    );
}

#[test]
fn test_partial_records_keep_their_siblings() {
    let dir = tempdir().expect("tempdir");
    let store = FileStore::open(dir.path()).expect("open should succeed");
    store
        .set(
            keys::TEMPLATES,
            r#"[{"id":"1-a","name":"Push","exercises":[]},{"id":"1-b","name":"Pull"},{"id":"1-c"}]"#,
        )
        .expect("seed should succeed");

    let journal = Journal::open_dir(dir.path()).expect("open should succeed");
    let names: Vec<String> = journal.templates().get_all().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Push".to_string(), "Pull".to_string()]);

    journal.templates().create("Legs", vec![]).expect("create should succeed");

    let raw = fs::read_to_string(dir.path().join("reps_templates.json")).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let data = value["data"].as_array().expect("array");
    assert_eq!(data.len(), 4);
    assert_eq!(data[0]["name"], "Push");
    assert_eq!(data[1]["name"], "Pull");
    assert_eq!(data[2]["name"], "Legs");
    assert_eq!(data[3], serde_json::json!({"id": "1-c"}));
}
