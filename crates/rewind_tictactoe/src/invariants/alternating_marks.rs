//! Alternating marks invariant: X and O take turns, X first.

use super::Invariant;
use crate::{GameState, Seat};

/// Invariant: snapshot `k` holds `k` marks, the mark added in step `k`
/// belongs to the seat whose turn it was at `k - 1`, and the seat to move
/// matches the parity of the displayed step.
///
/// Jumping relies on this: it derives the seat to move from step parity.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let counts_match = state
            .history()
            .iter()
            .enumerate()
            .all(|(k, snapshot)| snapshot.marks() == k);

        let marks_alternate = state.history().windows(2).enumerate().all(|(k, pair)| {
            let expected = Seat::for_step(k).mark();
            pair[0]
                .cells()
                .iter()
                .zip(pair[1].cells())
                .filter(|(b, _)| b.is_empty())
                .filter_map(|(_, a)| a.mark())
                .all(|mark| mark == expected)
        });

        counts_match && marks_alternate && state.to_move() == Seat::for_step(state.step())
    }

    fn description() -> &'static str {
        "Marks alternate starting with X and the seat to move follows step parity"
    }
}
