//! Monotonic lineage invariant: marks are never erased or overwritten.

use super::Invariant;
use crate::GameState;

/// Invariant: each snapshot equals its predecessor plus exactly one mark.
///
/// A cell that is marked in snapshot `k` carries the same mark in every
/// later snapshot of the history.
pub struct MonotonicLineageInvariant;

impl Invariant<GameState> for MonotonicLineageInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let (before, after) = (pair[0].cells(), pair[1].cells());
            let kept = before
                .iter()
                .zip(after)
                .all(|(b, a)| b.is_empty() || b == a);
            let added = before
                .iter()
                .zip(after)
                .filter(|(b, a)| b.is_empty() && !a.is_empty())
                .count();
            kept && added == 1
        })
    }

    fn description() -> &'static str {
        "Every snapshot adds exactly one mark and erases none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicLineageInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_branched_game_holds() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .apply_move(2)
            .jump_to(1)
            .expect("step 1 exists")
            .apply_move(8);
        assert!(MonotonicLineageInvariant::holds(&state));
        assert_eq!(state.history().len(), 3);
    }
}
