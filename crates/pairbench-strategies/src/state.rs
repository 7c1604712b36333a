//! Position state machine shared by the strategy variants.

use pairbench_core::types::{SignalAction, SignalSeries};

/// Position state while scanning a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PositionState {
    Flat,
    Long,
}

/// Fold aligned entry/exit conditions into a well-formed signal series.
///
/// Walks the bars once with an explicit {Flat, Long} state machine: an
/// entry condition only fires when flat, an exit condition only when long.
/// This is what suppresses duplicate entries while a position is open.
pub(crate) fn signalize(entries: &[bool], exits: &[bool]) -> SignalSeries {
    debug_assert_eq!(entries.len(), exits.len());

    let mut state = PositionState::Flat;
    let actions = entries
        .iter()
        .zip(exits.iter())
        .map(|(&enter, &exit)| match state {
            PositionState::Flat if enter => {
                state = PositionState::Long;
                SignalAction::LongEntry
            }
            PositionState::Long if exit => {
                state = PositionState::Flat;
                SignalAction::LongExit
            }
            _ => SignalAction::Flat,
        })
        .collect();

    SignalSeries::new(actions)
}
