//! History rooted invariant: history starts empty and the step is in range.

use super::Invariant;
use crate::{BoardSnapshot, GameState};

/// Invariant: the history is never empty, begins with the empty snapshot,
/// and the displayed step indexes into it.
pub struct HistoryRootedInvariant;

impl Invariant<GameState> for HistoryRootedInvariant {
    fn holds(state: &GameState) -> bool {
        match state.history().first() {
            Some(root) => *root == BoardSnapshot::empty() && state.step() < state.history().len(),
            None => false,
        }
    }

    fn description() -> &'static str {
        "History begins with the empty snapshot and the step is a valid index"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryRootedInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_rewound_game_holds() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(1)
            .jump_to(0)
            .expect("step 0 exists");
        assert!(HistoryRootedInvariant::holds(&state));
    }
}
