//! Game state with history and time travel.
//!
//! [`GameState`] is a value type. Every transition borrows the current
//! state and returns a new one, so previous states stay valid for as long
//! as the caller holds them.

use crate::error::{InvalidState, JumpError, MoveRejection};
use crate::invariants::{HistoryRootedInvariant, Invariant};
use crate::rules::WinningLine;
use crate::snapshot::BoardSnapshot;
use crate::{Position, Roster, Seat};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Label of the history entry for step 0.
pub const RESET_LABEL: &str = "Reset Game";

/// History length at which every cell has been filled.
const FULL_HISTORY: usize = 10;

/// Phase of the displayed snapshot, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Moves can be made.
    InProgress,
    /// A line is complete.
    Won(WinningLine),
    /// The history is full with no winner.
    Draw,
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MoveEntry {
    /// History index this row jumps to.
    step: usize,
    /// "Reset Game" for step 0, "Move #n" otherwise.
    description: String,
    /// Recorded location, or empty for step 0.
    location: String,
    /// True if this is the displayed step.
    selected: bool,
}

/// Complete game state.
///
/// Deserialization rejects states whose history is empty, does not start
/// with the empty snapshot, or does not contain the step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// Display names.
    roster: Roster,
    /// Snapshots, index 0 is always empty.
    history: Vec<BoardSnapshot>,
    /// Displayed snapshot.
    step: usize,
    /// Seat to move next.
    to_move: Seat,
}

/// Unchecked decoded form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    roster: Roster,
    history: Vec<BoardSnapshot>,
    step: usize,
    to_move: Seat,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = Self {
            roster: raw.roster,
            history: raw.history,
            step: raw.step,
            to_move: raw.to_move,
        };
        if HistoryRootedInvariant::holds(&state) {
            Ok(state)
        } else {
            Err(InvalidState {
                step: state.step,
                history_len: state.history.len(),
            })
        }
    }
}

impl GameState {
    /// Creates a new game with the default roster.
    pub fn new() -> Self {
        Self::with_roster(Roster::default())
    }

    /// Creates a new game with custom display names.
    #[instrument]
    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster,
            history: vec![BoardSnapshot::empty()],
            step: 0,
            to_move: Seat::One,
        }
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns every recorded snapshot.
    pub fn history(&self) -> &[BoardSnapshot] {
        &self.history
    }

    /// Returns the displayed step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the seat to move next.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// Returns the displayed snapshot.
    pub fn current(&self) -> &BoardSnapshot {
        &self.history[self.step]
    }

    /// Completed line on the displayed snapshot.
    pub fn winner(&self) -> Option<WinningLine> {
        self.current().winner()
    }

    /// Derives the phase of the displayed snapshot.
    pub fn phase(&self) -> Phase {
        if let Some(line) = self.winner() {
            Phase::Won(line)
        } else if self.history.len() == FULL_HISTORY {
            Phase::Draw
        } else {
            Phase::InProgress
        }
    }

    /// Status line for the view.
    ///
    /// On a win this names the seat that just moved, not the next one.
    pub fn status(&self) -> String {
        match self.phase() {
            Phase::Won(_) => {
                let mover = self.to_move.opponent();
                format!("Player {} Wins", self.roster.name(mover))
            }
            Phase::Draw => "Draw".to_string(),
            Phase::InProgress => format!(
                "Player {} ({})",
                self.roster.name(self.to_move),
                self.to_move.mark()
            ),
        }
    }

    /// Move list for the view, one entry per snapshot.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                description: if step == 0 {
                    RESET_LABEL.to_string()
                } else {
                    format!("Move #{}", step)
                },
                location: snapshot
                    .location()
                    .map(|loc| loc.to_string())
                    .unwrap_or_default(),
                selected: step == self.step,
            })
            .collect()
    }

    /// Plays `pos` for the seat to move, or explains why not.
    ///
    /// Any snapshots after the displayed step are discarded before the new
    /// one is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveRejection::GameWon`] if the displayed snapshot has a winner
    /// - [`MoveRejection::CellOccupied`] if the cell is taken
    #[instrument(skip(self), fields(step = self.step, seat = ?self.to_move))]
    pub fn try_move(&self, pos: Position) -> Result<Self, MoveRejection> {
        let current = self.current();
        if current.winner().is_some() {
            return Err(MoveRejection::GameWon);
        }
        if !current.cell(pos).is_empty() {
            return Err(MoveRejection::CellOccupied(pos));
        }

        let seat = self.to_move;
        let next = current.with_mark(pos, seat, self.roster.name(seat));

        let mut history = self.history[..=self.step].to_vec();
        history.push(next);
        let step = history.len() - 1;

        debug!(step, discarded = self.history.len() - self.step - 1, "Move applied");
        Ok(Self {
            roster: self.roster.clone(),
            history,
            step,
            to_move: seat.opponent(),
        })
    }

    /// Plays a board index, ignoring moves that are not allowed.
    ///
    /// Rejected moves return an unchanged copy.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Self {
        let result = Position::from_index(index)
            .ok_or(MoveRejection::OutOfBounds(index))
            .and_then(|pos| self.try_move(pos));

        match result {
            Ok(next) => next,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                self.clone()
            }
        }
    }

    /// Displays an earlier (or later) snapshot without altering history.
    ///
    /// The seat to move is recomputed from the parity of `step` alone.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `step` is not a recorded history index.
    #[instrument(skip(self), fields(history_len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, JumpError> {
        if step >= self.history.len() {
            return Err(JumpError {
                requested: step,
                history_len: self.history.len(),
            });
        }

        Ok(Self {
            roster: self.roster.clone(),
            history: self.history.clone(),
            step,
            to_move: Seat::for_step(step),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    fn play(indices: &[usize]) -> GameState {
        indices
            .iter()
            .fold(GameState::new(), |state, &i| state.apply_move(i))
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(GameState::new().status(), "Player One (X)");
    }

    #[test]
    fn test_first_move() {
        let state = play(&[0]);
        assert_eq!(state.status(), "Player Two (O)");
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.step(), 1);
        assert_eq!(
            state.current().cell(Position::TopLeft),
            Cell::Marked(Mark::X)
        );
        assert_eq!(
            state.history()[1].location().map(|l| l.to_string()),
            Some("[row: 1 | column: 1]".to_string())
        );
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let state = play(&[4]);
        let again = state.apply_move(4);
        assert_eq!(again, state);
        assert_eq!(
            state.try_move(Position::Center),
            Err(MoveRejection::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_out_of_bounds_index_is_noop() {
        let state = play(&[4]);
        assert_eq!(state.apply_move(9), state);
    }

    #[test]
    fn test_diagonal_win() {
        let state = play(&[0, 1, 4, 7, 8]);
        assert_eq!(state.status(), "Player One Wins");
        let line = state.winner().expect("diagonal should win");
        assert_eq!(line.indices(), [0, 4, 8]);
        assert_eq!(line.mark, Mark::X);
    }

    #[test]
    fn test_second_seat_win_names_mover() {
        // O completes the middle column.
        let state = play(&[0, 1, 2, 4, 5, 7]);
        assert_eq!(state.status(), "Player Two Wins");
    }

    #[test]
    fn test_moves_after_win_are_ignored() {
        let state = play(&[0, 1, 4, 7, 8]);
        assert_eq!(state.apply_move(2), state);
        assert_eq!(
            state.try_move(Position::TopRight),
            Err(MoveRejection::GameWon)
        );
    }

    #[test]
    fn test_draw() {
        // X O X / X O O / O X X
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(state.history().len(), 10);
        assert_eq!(state.winner(), None);
        assert_eq!(state.status(), "Draw");
        assert_eq!(state.phase(), Phase::Draw);
    }

    #[test]
    fn test_draw_persists_after_jump_and_branch_truncates() {
        let state = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        let rewound = state.jump_to(3).expect("step 3 exists");

        // Draw follows the history length, not the displayed step.
        assert_eq!(rewound.status(), "Draw");
        assert_eq!(rewound.to_move(), Seat::Two);

        let branched = rewound.apply_move(4);
        assert_eq!(branched.history().len(), 5);
        assert_eq!(branched.step(), 4);
        assert_eq!(
            branched.current().cell(Position::Center),
            Cell::Marked(Mark::O)
        );
        assert_eq!(branched.status(), "Player One (X)");
    }

    #[test]
    fn test_jump_keeps_history() {
        let state = play(&[0, 4, 8]);
        let rewound = state.jump_to(0).expect("step 0 exists");

        assert_eq!(rewound.step(), 0);
        assert_eq!(rewound.history().len(), 4);
        assert!(rewound.current().cells().iter().all(|c| c.is_empty()));
        assert_eq!(rewound.status(), "Player One (X)");

        let forward = rewound.jump_to(3).expect("step 3 exists");
        assert_eq!(forward.current(), state.current());
    }

    #[test]
    fn test_jump_parity() {
        let state = play(&[0, 4, 8]);
        assert_eq!(state.jump_to(1).map(|s| s.to_move()), Ok(Seat::Two));
        assert_eq!(state.jump_to(2).map(|s| s.to_move()), Ok(Seat::One));
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let state = play(&[0]);
        assert_eq!(
            state.jump_to(5),
            Err(JumpError {
                requested: 5,
                history_len: 2
            })
        );
    }

    #[test]
    fn test_branching_truncates_future() {
        let state = play(&[0, 4, 8, 1]);
        let branched = state
            .jump_to(1)
            .map(|s| s.apply_move(2))
            .expect("step 1 exists");

        assert_eq!(branched.history().len(), 3);
        assert_eq!(branched.step(), 2);
        assert_eq!(
            branched.current().cell(Position::TopRight),
            Cell::Marked(Mark::O)
        );
        assert_eq!(branched.current().cell(Position::Center), Cell::Empty);
    }

    #[test]
    fn test_moves_list() {
        let state = play(&[0, 4]);
        let moves = state.moves();

        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0].description(), RESET_LABEL);
        assert_eq!(moves[0].location(), "");
        assert_eq!(moves[1].description(), "Move #1");
        assert_eq!(moves[1].location(), "[row: 1 | column: 1]");
        assert_eq!(moves[2].location(), "[row: 2 | column: 2]");
        assert!(*moves[2].selected());
        assert!(!*moves[0].selected());
    }

    #[test]
    fn test_custom_roster_in_status_and_names() {
        let state = GameState::with_roster(Roster::new("Ada", "Grace")).apply_move(4);
        assert_eq!(state.status(), "Player Grace (O)");
        assert_eq!(state.current().name(Position::Center), Some("Ada"));
    }

    #[test]
    fn test_serde_round_trip_keeps_state() {
        let state = play(&[0, 4, 8]).jump_to(1).expect("step 1 exists");
        let json = serde_json::to_string(&state).expect("serializable");
        let decoded: GameState = serde_json::from_str(&json).expect("valid state");
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_deserialize_rejects_empty_history() {
        let mut value = serde_json::to_value(GameState::new()).expect("serializable");
        value["history"] = serde_json::json!([]);
        value["step"] = serde_json::json!(0);

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("step 0 with 0 history entries"));
    }

    #[test]
    fn test_deserialize_rejects_step_past_history() {
        let mut value = serde_json::to_value(play(&[4])).expect("serializable");
        value["step"] = serde_json::json!(7);

        let err = serde_json::from_value::<GameState>(value).unwrap_err();
        assert!(err.to_string().contains("step 7 with 2 history entries"));
    }
}
