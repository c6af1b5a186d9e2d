//! Store integration tests
//!
//! Persistence semantics end to end: first-run defaults, corruption
//! handling, and full-document round trips through the real filesystem.
//!
//! Run with: cargo test -p integration-tests --test store_tests

use std::fs;

use integration_tests::helpers::config_path;
use tempfile::TempDir;

use warden_core::{
    ChannelId, EscalationAction, GuildId, ThresholdTable, UserId, WarningRecord,
};
use warden_store::{ConfigStore, StoreError};

// ============================================================================
// First run
// ============================================================================

#[test]
fn test_first_run_creates_durable_default_document() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    let store = ConfigStore::load(&path).unwrap();
    assert!(store.document().log_channels.is_empty());
    assert_eq!(store.thresholds(), &ThresholdTable::default());

    // The default document is already on disk: loading again without any
    // mutation yields the identical document.
    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(reloaded.document(), store.document());

    // And the on-disk shape is the documented one.
    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        raw,
        serde_json::json!({
            "log_channels": {},
            "warn_thresholds": { "3": "timeout", "5": "kick", "7": "ban" },
            "warnings": {}
        })
    );
}

// ============================================================================
// Corruption
// ============================================================================

#[test]
fn test_corrupt_document_is_an_error_not_a_default() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    fs::write(&path, "{\"log_channels\": \"oops\"}").unwrap();

    let err = ConfigStore::load(&path).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));

    // The broken file is left untouched for the operator to inspect.
    assert_eq!(fs::read_to_string(&path).unwrap(), "{\"log_channels\": \"oops\"}");
}

#[test]
fn test_structurally_incomplete_document_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    fs::write(&path, "{\"log_channels\": {}, \"warn_thresholds\": {}}").unwrap();

    assert!(matches!(
        ConfigStore::load(&path).unwrap_err(),
        StoreError::Corrupt { .. }
    ));
}

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn test_full_document_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    let guild = GuildId::new(175_928_847_299_117_063);
    let subject = UserId::new(200);

    let mut store = ConfigStore::load(&path).unwrap();
    store.set_log_channel(guild, ChannelId::new(300));
    store.append_warning(guild, subject, WarningRecord::new(UserId::new(400), Some("spam")));
    store.append_warning(guild, subject, WarningRecord::new(UserId::new(401), None));
    store.save().unwrap();

    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(reloaded.document(), store.document());

    // Every stored detail survives: reason text, moderator id, timestamp to
    // the precision stored.
    let original = store.warnings(guild, subject);
    let restored = reloaded.warnings(guild, subject);
    assert_eq!(restored, original);
    assert_eq!(restored[1].reason, warden_core::DEFAULT_REASON);
}

#[test]
fn test_load_preserves_custom_threshold_table() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    fs::write(
        &path,
        serde_json::json!({
            "log_channels": {},
            "warn_thresholds": { "2": "kick", "4": "ban" },
            "warnings": {}
        })
        .to_string(),
    )
    .unwrap();

    let store = ConfigStore::load(&path).unwrap();
    assert_eq!(store.thresholds().action_for(2), Some(EscalationAction::Kick));
    assert_eq!(store.thresholds().action_for(4), Some(EscalationAction::Ban));
    assert_eq!(store.thresholds().action_for(3), None);
}

// ============================================================================
// Persistence discipline
// ============================================================================

#[test]
fn test_unsaved_mutations_do_not_reach_disk() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    let mut store = ConfigStore::load(&path).unwrap();
    store.set_log_channel(GuildId::new(1), ChannelId::new(2));
    store.append_warning(GuildId::new(1), UserId::new(3), WarningRecord::new(UserId::new(4), None));

    let reloaded = ConfigStore::load(&path).unwrap();
    assert!(reloaded.log_channel(GuildId::new(1)).is_none());
    assert!(reloaded.warnings(GuildId::new(1), UserId::new(3)).is_empty());
}

#[test]
fn test_batched_mutations_persist_in_one_save() {
    let dir = TempDir::new().unwrap();
    let path = config_path(&dir);

    let mut store = ConfigStore::load(&path).unwrap();
    store.set_log_channel(GuildId::new(1), ChannelId::new(2));
    store.set_log_channel(GuildId::new(9), ChannelId::new(8));
    store.save().unwrap();

    let reloaded = ConfigStore::load(&path).unwrap();
    assert_eq!(reloaded.log_channel(GuildId::new(1)), Some(ChannelId::new(2)));
    assert_eq!(reloaded.log_channel(GuildId::new(9)), Some(ChannelId::new(8)));
}
