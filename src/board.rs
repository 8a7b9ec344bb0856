use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::player::PlayerId;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn occupant(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(id) => Some(id),
        }
    }

    /// 0 for empty, otherwise the occupant's cell id.
    pub fn cell_id(self) -> u8 {
        self.occupant().map_or(0, PlayerId::cell_id)
    }
}

/// The grid. Row 0 is the top, row `height - 1` the bottom; pieces settle
/// towards the bottom so every column is a contiguous stack from the last row up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfig(format!(
                "board must be at least 1x1 (found: {width}x{height})"
            )));
        }
        let Some(capacity) = width.checked_mul(height) else {
            return Err(GameError::InvalidConfig(format!(
                "board {width}x{height} is too large"
            )));
        };
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Empty; capacity],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn capacity(&self) -> usize {
        self.width * self.height
    }

    fn index(&self, column: usize, row: usize) -> usize {
        row * self.width + column
    }

    fn check_column(&self, column: usize) -> Result<(), GameError> {
        if column >= self.width {
            return Err(GameError::InvalidColumn {
                column,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Bottom-most empty row of `column`, or `None` when the column is full.
    pub fn lowest_open_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.check_column(column)?;
        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(column, row)] == Cell::Empty))
    }

    /// Occupies the landing cell of `column`. `row` must be what
    /// `lowest_open_row` reports for that column right now.
    pub fn place(&mut self, column: usize, row: usize, player: PlayerId) -> Result<(), GameError> {
        if self.lowest_open_row(column)? != Some(row) {
            return Err(GameError::InvalidPlacement { column, row });
        }
        let idx = self.index(column, row);
        self.cells[idx] = Cell::Occupied(player);
        Ok(())
    }

    pub fn occupant_at(&self, column: usize, row: usize) -> Result<Cell, GameError> {
        if column >= self.width || row >= self.height {
            return Err(GameError::OutOfBounds { column, row });
        }
        Ok(self.cells[self.index(column, row)])
    }

    /// Signed lookup used by directional scans; off-board reads as `None`.
    pub(crate) fn get(&self, column: isize, row: isize) -> Option<Cell> {
        if column < 0 || row < 0 {
            return None;
        }
        let (column, row) = (column as usize, row as usize);
        if column >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[self.index(column, row)])
    }

    pub fn is_column_full(&self, column: usize) -> Result<bool, GameError> {
        Ok(self.lowest_open_row(column)?.is_none())
    }

    pub fn column_height(&self, column: usize) -> Result<usize, GameError> {
        Ok(match self.lowest_open_row(column)? {
            Some(row) => self.height - 1 - row,
            None => self.height,
        })
    }

    pub fn is_full(&self) -> bool {
        // Row 0 filled everywhere implies every column is full.
        (0..self.width).all(|column| self.cells[self.index(column, 0)] != Cell::Empty)
    }

    /// Row-major cell codes, top row first.
    pub fn cell_ids(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.cell_id()).collect()
    }

    /// Builds a board from text rows, top first: `.` empty, `X` first, `O` second.
    /// Gravity is not enforced, so arbitrary grids can be fed to the win scan.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let height = rows.len();
        let width = rows[0].len();
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            assert_eq!(row.len(), width, "ragged board row {row:?}");
            for ch in row.chars() {
                cells.push(match ch {
                    'X' => Cell::Occupied(PlayerId::First),
                    'O' => Cell::Occupied(PlayerId::Second),
                    _ => Cell::Empty,
                });
            }
        }
        Board {
            width,
            height,
            cells,
        }
    }
}
