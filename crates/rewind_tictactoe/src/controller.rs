//! Controller that owns the game and reacts to clicks.

use crate::error::JumpError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::state::{GameState, MoveEntry};
use crate::view::{BoardView, Intent};
use crate::{Roster, WinningLine};
use tracing::{debug, info, instrument, warn};

/// Owns the authoritative [`GameState`] and replaces it on each transition.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Starts a game with the default roster.
    #[instrument]
    pub fn new() -> Self {
        Self::with_roster(Roster::default())
    }

    /// Starts a game with custom display names.
    #[instrument]
    pub fn with_roster(roster: Roster) -> Self {
        info!(one = %roster.one(), two = %roster.two(), "Starting game");
        Self {
            state: GameState::with_roster(roster),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Plays a board index for the seat to move.
    ///
    /// Returns true if the move was applied. Moves onto occupied cells,
    /// after a win, or outside the board leave the state untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> bool {
        let next = self.state.apply_move(index);
        self.replace(next)
    }

    /// Displays a recorded step.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError`] if `step` is outside the history; the state is
    /// not changed.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let next = self.state.jump_to(step)?;
        self.replace(next);
        Ok(())
    }

    /// Routes a view intent to the matching operation.
    ///
    /// Returns false if the intent was ignored.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::CellClicked(index) => self.apply_move(index),
            Intent::JumpTo(step) => match self.jump_to(step) {
                Ok(()) => true,
                Err(e) => {
                    debug!(error = %e, "Jump ignored");
                    false
                }
            },
        }
    }

    /// Throws the game away and starts over with the same names.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.state = GameState::with_roster(self.state.roster().clone());
    }

    /// Status line for the view.
    pub fn status(&self) -> String {
        self.state.status()
    }

    /// Move list for the view.
    pub fn moves(&self) -> Vec<MoveEntry> {
        self.state.moves()
    }

    /// Winning line on the displayed snapshot.
    pub fn winner(&self) -> Option<WinningLine> {
        self.state.winner()
    }

    /// Board description for the displayed snapshot.
    pub fn board_view(&self) -> BoardView {
        let winner = self.winner();
        BoardView::tic_tac_toe(self.state.current().cells(), winner.as_ref())
    }

    fn replace(&mut self, next: GameState) -> bool {
        if next == self.state {
            return false;
        }
        if let Err(violations) = GameInvariants::check_all(&next) {
            for v in &violations {
                warn!(violation = %v, "Invariant violated");
            }
        }
        self.state = next;
        true
    }
}
