//! Warning thresholds - the progressive-discipline schedule
//!
//! The table maps an exact warning count to the automated action taken when a
//! subject reaches it. Lookup is exact-match, not greater-or-equal: a count
//! that skips past a configured threshold triggers nothing for it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Automated escalation applied when a warning threshold is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscalationAction {
    Timeout,
    Kick,
    Ban,
}

impl EscalationAction {
    /// Capitalized label for audit entries and embeds
    pub fn label(&self) -> &'static str {
        match self {
            Self::Timeout => "Timeout",
            Self::Kick => "Kick",
            Self::Ban => "Ban",
        }
    }

    /// The lowercase tag used in the persisted document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Kick => "kick",
            Self::Ban => "ban",
        }
    }
}

impl std::fmt::Display for EscalationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping from exact warning count to escalation action
///
/// Load-only at runtime: the store exposes no mutator for it, so the table a
/// community runs with is whatever its persisted document says (or the
/// default).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThresholdTable(BTreeMap<usize, EscalationAction>);

impl Default for ThresholdTable {
    fn default() -> Self {
        Self(BTreeMap::from([
            (3, EscalationAction::Timeout),
            (5, EscalationAction::Kick),
            (7, EscalationAction::Ban),
        ]))
    }
}

impl ThresholdTable {
    /// Build a table from explicit (count, action) entries
    pub fn from_entries(entries: impl IntoIterator<Item = (usize, EscalationAction)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Action configured for exactly `count` warnings, if any
    ///
    /// Absence is normal, not an error: most counts have no entry.
    #[inline]
    pub fn action_for(&self, count: usize) -> Option<EscalationAction> {
        self.0.get(&count).copied()
    }

    /// Iterate entries in ascending count order
    pub fn iter(&self) -> impl Iterator<Item = (usize, EscalationAction)> + '_ {
        self.0.iter().map(|(&count, &action)| (count, action))
    }

    /// Number of configured thresholds
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let table = ThresholdTable::default();
        assert_eq!(table.action_for(3), Some(EscalationAction::Timeout));
        assert_eq!(table.action_for(5), Some(EscalationAction::Kick));
        assert_eq!(table.action_for(7), Some(EscalationAction::Ban));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = ThresholdTable::default();
        for count in [0, 1, 2, 4, 6, 8, 100] {
            assert_eq!(table.action_for(count), None, "count {count}");
        }
    }

    #[test]
    fn test_iter_ascending() {
        let table = ThresholdTable::from_entries([
            (7, EscalationAction::Ban),
            (3, EscalationAction::Timeout),
            (5, EscalationAction::Kick),
        ]);
        let counts: Vec<usize> = table.iter().map(|(count, _)| count).collect();
        assert_eq!(counts, vec![3, 5, 7]);
    }

    #[test]
    fn test_serde_uses_string_keys_and_lowercase_tags() {
        let table = ThresholdTable::default();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, "{\"3\":\"timeout\",\"5\":\"kick\",\"7\":\"ban\"}");

        let back: ThresholdTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(EscalationAction::Timeout.label(), "Timeout");
        assert_eq!(EscalationAction::Ban.to_string(), "ban");
    }
}
