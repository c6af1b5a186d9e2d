//! Engine integration tests
//!
//! The progressive-discipline properties end to end: counts, exact-match
//! escalation, partition independence, durability across restarts, and the
//! serialization property under concurrent callers.
//!
//! Run with: cargo test -p integration-tests --test engine_tests

use integration_tests::helpers::{config_path, engine_at, fresh_engine};
use tempfile::TempDir;

use warden_core::{EscalationAction, GuildId, UserId};
use warden_service::ServiceError;
use warden_store::StoreError;

const GUILD: GuildId = GuildId::new(1_000);
const SUBJECT: UserId = UserId::new(2_000);
const MODERATOR: UserId = UserId::new(3_000);

// ============================================================================
// Counting
// ============================================================================

#[test]
fn test_view_length_matches_call_count_and_last_outcome() {
    let (_dir, engine) = fresh_engine();

    let mut last = 0;
    for _ in 0..6 {
        last = engine
            .record_warning(GUILD, SUBJECT, MODERATOR, Some("spam"))
            .unwrap()
            .new_count;
    }

    assert_eq!(last, 6);
    assert_eq!(engine.warnings(GUILD, SUBJECT).len(), 6);
}

// ============================================================================
// Escalation
// ============================================================================

#[test]
fn test_default_thresholds_fire_exactly_once_each() {
    let (_dir, engine) = fresh_engine();

    let mut fired = Vec::new();
    for _ in 0..8 {
        let outcome = engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap();
        if let Some(action) = outcome.triggered {
            fired.push((outcome.new_count, action));
        }
    }

    assert_eq!(
        fired,
        vec![
            (3, EscalationAction::Timeout),
            (5, EscalationAction::Kick),
            (7, EscalationAction::Ban),
        ]
    );
}

#[test]
fn test_counts_between_thresholds_trigger_nothing() {
    let (_dir, engine) = fresh_engine();

    for expected in [1, 2] {
        let outcome = engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap();
        assert_eq!(outcome.new_count, expected);
        assert_eq!(outcome.triggered, None);
    }
}

// ============================================================================
// Partition independence
// ============================================================================

#[test]
fn test_subjects_do_not_share_counts() {
    let (_dir, engine) = fresh_engine();
    let other = UserId::new(2_001);

    for _ in 0..3 {
        engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap();
    }

    let outcome = engine.record_warning(GUILD, other, MODERATOR, None).unwrap();
    assert_eq!(outcome.new_count, 1);
    assert_eq!(outcome.triggered, None);
    assert_eq!(engine.warnings(GUILD, SUBJECT).len(), 3);
}

#[test]
fn test_communities_do_not_share_ledgers() {
    let (_dir, engine) = fresh_engine();
    let other_guild = GuildId::new(1_001);

    for _ in 0..3 {
        engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap();
    }

    let outcome = engine.record_warning(other_guild, SUBJECT, MODERATOR, None).unwrap();
    assert_eq!(outcome.new_count, 1);
}

// ============================================================================
// Clearing
// ============================================================================

#[test]
fn test_clear_returns_previous_count_and_empties() {
    let (_dir, engine) = fresh_engine();

    for _ in 0..4 {
        engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap();
    }

    assert_eq!(engine.clear_warnings(GUILD, SUBJECT), 4);
    assert!(engine.warnings(GUILD, SUBJECT).is_empty());

    // Idempotent on an already-empty pair.
    assert_eq!(engine.clear_warnings(GUILD, SUBJECT), 0);
    assert_eq!(engine.clear_warnings(GuildId::new(999), UserId::new(999)), 0);
}

// ============================================================================
// Durability
// ============================================================================

#[test]
fn test_warnings_survive_a_restart() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    {
        let engine = engine_at(&path);
        engine.record_warning(GUILD, SUBJECT, MODERATOR, Some("spam")).unwrap();
        engine.record_warning(GUILD, SUBJECT, MODERATOR, Some("flooding")).unwrap();
    }

    // Fresh store, fresh engine, same file: the ledger is intact and the
    // count continues where it left off.
    let engine = engine_at(&path);
    assert_eq!(engine.warnings(GUILD, SUBJECT).len(), 2);

    let outcome = engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap();
    assert_eq!(outcome.new_count, 3);
    assert_eq!(outcome.triggered, Some(EscalationAction::Timeout));
}

#[test]
fn test_persist_failure_is_surfaced_and_append_is_not_rolled_back() {
    let dir = TempDir::new().unwrap();
    let engine = engine_at(config_path(&dir));

    // Pull the directory out from under the store so the next save fails.
    std::fs::remove_dir_all(dir.path()).unwrap();

    let err = engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap_err();
    assert!(matches!(err, ServiceError::Store(StoreError::Write { .. })));

    // Documented non-transactional behavior: the in-memory count advanced
    // even though the write failed.
    assert_eq!(engine.warnings(GUILD, SUBJECT).len(), 1);
}

// ============================================================================
// Serialization under concurrency
// ============================================================================

#[test]
fn test_concurrent_callers_lose_no_records() {
    let (_dir, engine) = fresh_engine();
    let callers = 10;
    let per_caller = 10;

    std::thread::scope(|scope| {
        for _ in 0..callers {
            let engine = engine.clone();
            scope.spawn(move || {
                for _ in 0..per_caller {
                    engine.record_warning(GUILD, SUBJECT, MODERATOR, None).unwrap();
                }
            });
        }
    });

    assert_eq!(engine.warnings(GUILD, SUBJECT).len(), callers * per_caller);

    // The persisted document agrees with the in-memory one.
    let reloaded = engine_at(engine.store().lock().path());
    assert_eq!(reloaded.warnings(GUILD, SUBJECT).len(), callers * per_caller);
}
