//! Pure view descriptions of the board.
//!
//! Views hold no state. They are re-derived from the game on every render
//! and carry the [`Intent`] a click should report back to the controller.

use crate::rules::WinningLine;
use crate::{Cell, Position};
use serde::{Deserialize, Serialize};

/// CSS-style class of every cell.
pub const CELL_CLASS: &str = "square";

/// Class added to cells on the winning line.
pub const WINNING_CLASS: &str = "winning";

/// Something the user asked for by clicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Cell `i` was clicked.
    CellClicked(usize),
    /// A move-list row was clicked.
    JumpTo(usize),
}

/// A single clickable cell.
///
/// The cell knows nothing about its index; whoever builds it binds the
/// click intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView<I = Intent> {
    value: Cell,
    highlighted: bool,
    on_click: I,
}

impl<I: Clone> CellView<I> {
    /// Creates a cell view.
    pub fn new(value: Cell, highlighted: bool, on_click: I) -> Self {
        Self {
            value,
            highlighted,
            on_click,
        }
    }

    /// Displayed value.
    pub fn value(&self) -> Cell {
        self.value
    }

    /// Text to render: blank, "X" or "O".
    pub fn text(&self) -> &'static str {
        self.value.symbol()
    }

    /// True if part of the winning line.
    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Visual class, `"square"` or `"square winning"`.
    pub fn class(&self) -> String {
        if self.highlighted {
            format!("{} {}", CELL_CLASS, WINNING_CLASS)
        } else {
            CELL_CLASS.to_string()
        }
    }

    /// Reports the click, returning exactly the intent this cell was given.
    pub fn click(&self) -> I {
        self.on_click.clone()
    }
}

/// A grid of cell views, row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    rows: Vec<Vec<CellView>>,
}

impl BoardView {
    /// Lays out `rows × columns` cells in row-major order.
    ///
    /// Cell `i` is highlighted if its index is in `winning`, and clicking it
    /// reports [`Intent::CellClicked`]`(i)`. Missing cells render empty.
    pub fn new(rows: usize, columns: usize, cells: &[Cell], winning: &[usize]) -> Self {
        let rows = (0..rows)
            .map(|row| {
                (0..columns)
                    .map(|col| {
                        let i = row * columns + col;
                        let value = cells.get(i).copied().unwrap_or_default();
                        CellView::new(value, winning.contains(&i), Intent::CellClicked(i))
                    })
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// The 3x3 tic-tac-toe board.
    pub fn tic_tac_toe(cells: &[Cell; 9], winning: Option<&WinningLine>) -> Self {
        match winning {
            Some(line) => Self::new(3, 3, cells, &line.indices()),
            None => Self::new(3, 3, cells, &[]),
        }
    }

    /// Rows of cells.
    pub fn rows(&self) -> &[Vec<CellView>] {
        &self.rows
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flatten()
    }

    /// The cell view at a board position, for 3x3 boards.
    pub fn at(&self, pos: Position) -> Option<&CellView> {
        self.cells().nth(pos.to_index())
    }
}
