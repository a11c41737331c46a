//! Application state and event handling.

use crate::input::{Action, action_for_key};
use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use rewind_tictactoe::{GameController, Intent, Position};
use tracing::{debug, info};

/// Clickable screen region produced by the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    /// Screen area.
    pub area: Rect,
    /// Intent reported when the area is clicked.
    pub intent: Intent,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController,
    cursor: Position,
    hitboxes: Vec<Hitbox>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a game.
    pub fn new(game: GameController) -> Self {
        Self {
            game,
            cursor: Position::Center,
            hitboxes: Vec::new(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Board cursor for keyboard play.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Replaces the clickable regions after a render.
    pub fn set_hitboxes(&mut self, hitboxes: Vec<Hitbox>) {
        self.hitboxes = hitboxes;
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for_key(key, self.cursor, self.game.state().step());
        debug!(?key, ?action, "Key pressed");

        match action {
            Action::Game(intent) => self.dispatch(intent),
            Action::Cursor(pos) => self.cursor = pos,
            Action::Restart => self.game.restart(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
            Action::None => {}
        }
    }

    /// Handles a mouse event, clicking whatever region was hit.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        let point = ratatui::layout::Position::new(event.column, event.row);
        let hit = self
            .hitboxes
            .iter()
            .find(|hitbox| hitbox.area.contains(point))
            .map(|hitbox| hitbox.intent);

        if let Some(intent) = hit {
            if let Intent::CellClicked(index) = intent
                && let Some(pos) = Position::from_index(index)
            {
                self.cursor = pos;
            }
            self.dispatch(intent);
        }
    }

    fn dispatch(&mut self, intent: Intent) {
        let changed = self.game.dispatch(intent);
        debug!(?intent, changed, status = %self.game.status(), "Intent dispatched");
    }
}
