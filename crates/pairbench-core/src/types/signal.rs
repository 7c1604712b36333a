//! Per-bar trading signals.

use serde::{Deserialize, Serialize};

/// Action for a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignalAction {
    /// No action this bar
    #[default]
    Flat,
    /// Open a long position
    LongEntry,
    /// Close the open long position
    LongExit,
}

/// Signal sequence aligned index-for-index with a [`BarSeries`].
///
/// Well-formed series never contain two `LongEntry` actions without an
/// intervening `LongExit`, and never open with a `LongExit`. Strategies
/// guarantee this with an explicit position state machine.
///
/// [`BarSeries`]: super::BarSeries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSeries {
    actions: Vec<SignalAction>,
}

impl SignalSeries {
    /// Wrap a vector of per-bar actions.
    pub fn new(actions: Vec<SignalAction>) -> Self {
        Self { actions }
    }

    /// An all-`Flat` series of the given length.
    pub fn flat(len: usize) -> Self {
        Self {
            actions: vec![SignalAction::Flat; len],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Get the action at a bar index.
    pub fn get(&self, index: usize) -> Option<SignalAction> {
        self.actions.get(index).copied()
    }

    /// All per-bar actions.
    pub fn actions(&self) -> &[SignalAction] {
        &self.actions
    }

    /// Number of `LongEntry` actions.
    pub fn entry_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|a| **a == SignalAction::LongEntry)
            .count()
    }

    /// Check the duplicate-entry invariant: entries and exits strictly
    /// alternate, starting with an entry.
    pub fn is_well_formed(&self) -> bool {
        let mut in_position = false;
        for action in &self.actions {
            match action {
                SignalAction::LongEntry if in_position => return false,
                SignalAction::LongEntry => in_position = true,
                SignalAction::LongExit if !in_position => return false,
                SignalAction::LongExit => in_position = false,
                SignalAction::Flat => {}
            }
        }
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = SignalAction> + '_ {
        self.actions.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SignalAction::*;

    #[test]
    fn test_well_formed_alternation() {
        let series = SignalSeries::new(vec![Flat, LongEntry, Flat, LongExit, LongEntry]);
        assert!(series.is_well_formed());
        assert_eq!(series.entry_count(), 2);
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let series = SignalSeries::new(vec![LongEntry, Flat, LongEntry]);
        assert!(!series.is_well_formed());
    }

    #[test]
    fn test_exit_without_entry_rejected() {
        let series = SignalSeries::new(vec![Flat, LongExit]);
        assert!(!series.is_well_formed());
    }

    #[test]
    fn test_flat_series() {
        let series = SignalSeries::flat(5);
        assert_eq!(series.len(), 5);
        assert!(series.is_well_formed());
        assert_eq!(series.entry_count(), 0);
    }
}
