//! Integration tests for formula persistence and staged editing.

use std::fs;
use std::path::PathBuf;

use wincalc_config::{ConfigError, EditSession, FormulaRepository};
use wincalc_model::{Dimension, Operator, Rule, Source};
use wincalc_standards::{SCHEMA_KEY, default_rule_set};

fn temp_repo_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("wincalc_config_{stamp}"));
    dir
}

fn cleanup_dir(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[test]
fn load_without_persisted_table_returns_defaults() {
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    assert!(!repo.exists());
    assert_eq!(repo.load(), default_rule_set());

    cleanup_dir(&dir);
}

#[test]
fn save_and_load_round_trip() {
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    let mut edited = default_rule_set();
    edited.set_rule(
        "40mm",
        "2 Track",
        "Shutter Height",
        Rule::new(Source::Height, Operator::Subtract, 2, 0),
    );

    let path = repo.save(&edited).expect("save");
    assert!(path.to_string_lossy().contains(SCHEMA_KEY));
    assert!(repo.exists());

    let loaded = repo.load();
    assert_eq!(loaded, edited);
    assert_eq!(
        loaded.rule("40mm", "2 Track", "Shutter Height"),
        Some(&Rule::new(Source::Height, Operator::Subtract, 2, 0))
    );

    cleanup_dir(&dir);
}

#[test]
fn corrupt_persisted_table_falls_back_to_defaults() {
    init_tracing();
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    fs::write(repo.store_path(), "{not json").expect("write corrupt file");

    // Strict load surfaces the parse failure.
    let err = repo.try_load().unwrap_err();
    assert!(matches!(err, ConfigError::MalformedPersistedData(_)));

    // Session load recovers with the built-in table.
    assert_eq!(repo.load(), default_rule_set());

    cleanup_dir(&dir);
}

#[test]
fn schema_violations_also_fall_back() {
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    // Valid JSON, invalid record: subunit equals the radix.
    let json = r#"{"40mm":{"2 Track":{"Shutter Height":{"source":"H","op":"-","u":1,"s":8}}}}"#;
    fs::write(repo.store_path(), json).expect("write bad schema");

    assert!(matches!(
        repo.try_load(),
        Err(ConfigError::MalformedPersistedData(_))
    ));
    assert_eq!(repo.load(), default_rule_set());

    cleanup_dir(&dir);
}

#[test]
fn reset_discards_persisted_edits() {
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    let mut edited = default_rule_set();
    edited.set_rule(
        "60mm",
        "3 Track",
        "Glass Height",
        Rule::new(Source::Height, Operator::Subtract, 5, 0),
    );
    repo.save(&edited).expect("save");

    let restored = repo.reset().expect("reset");
    assert_eq!(restored, default_rule_set());
    assert!(!repo.exists());
    assert_eq!(repo.load(), default_rule_set());

    cleanup_dir(&dir);
}

#[test]
fn edit_session_commit_persists_staged_rules() {
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    let mut session = EditSession::begin(repo.load());
    assert!(!session.is_dirty());

    let rule = Rule::new(Source::Length, Operator::Add, 1, 2);
    session.set_rule("40mm", "2 Track", "Shutter Length", rule);
    assert!(session.is_dirty());

    let committed = session.commit(&repo).expect("commit");
    assert_eq!(
        committed.rule("40mm", "2 Track", "Shutter Length"),
        Some(&rule)
    );
    assert_eq!(repo.load(), committed);

    cleanup_dir(&dir);
}

#[test]
fn edit_session_discard_leaves_table_unchanged() {
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    let mut session = EditSession::begin(repo.load());
    session.set_rule(
        "40mm",
        "2 Track",
        "Shutter Length",
        Rule::new(Source::Length, Operator::Add, 3, 0),
    );

    let restored = session.discard();
    assert_eq!(restored, default_rule_set());
    // Nothing was persisted.
    assert!(!repo.exists());

    cleanup_dir(&dir);
}

#[test]
fn committed_table_drives_evaluation() {
    let dir = temp_repo_dir();
    let repo = FormulaRepository::new(&dir).expect("create repo");

    let mut session = EditSession::begin(repo.load());
    session.set_rule(
        "40mm",
        "2 Track",
        "Shutter Height",
        Rule::new(Source::Height, Operator::Subtract, 0, 4),
    );
    let committed = session.commit(&repo).expect("commit");

    let evaluation = wincalc_eval::evaluate(
        Dimension::new(4, 2),
        Dimension::new(5, 0),
        "40mm",
        "2 Track",
        &committed,
    )
    .expect("evaluate");

    let field = evaluation.field("Shutter Height").expect("field");
    assert_eq!(field.value, Dimension::new(4, 4));
    assert_eq!(field.hint, "- 0u 4s");

    cleanup_dir(&dir);
}
