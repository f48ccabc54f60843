use crate::cards::Card;
use std::fmt;

pub const GRID_SIZE: usize = 5;
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;
pub const LINE_COUNT: usize = GRID_SIZE * 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,
    Column,
}

/// One of the ten scored lines: rows 0-4 then columns 0-4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId {
    pub orientation: Orientation,
    pub index: usize,
}

impl LineId {
    pub const fn row(index: usize) -> Self {
        Self { orientation: Orientation::Row, index }
    }

    pub const fn column(index: usize) -> Self {
        Self { orientation: Orientation::Column, index }
    }

    /// All lines in display order.
    pub fn all() -> impl Iterator<Item = LineId> {
        (0..GRID_SIZE).map(LineId::row).chain((0..GRID_SIZE).map(LineId::column))
    }

    /// Position in the `all()` order, or `None` when the index is off the grid.
    pub const fn slot(self) -> Option<usize> {
        if self.index >= GRID_SIZE {
            return None;
        }
        Some(match self.orientation {
            Orientation::Row => self.index,
            Orientation::Column => GRID_SIZE + self.index,
        })
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.orientation {
            Orientation::Row => write!(f, "Row {}", self.index + 1),
            Orientation::Column => write!(f, "Col {}", self.index + 1),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CellError {
    #[error("cell ({row}, {col}) is outside the grid")]
    OutOfRange { row: usize, col: usize },
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// The 5x5 placement grid. A cell, once filled, is never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<Card>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Card at `(row, col)`; `None` for empty or off-grid cells.
    pub fn get(&self, row: usize, col: usize) -> Option<Card> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    fn check_free(&self, row: usize, col: usize) -> Result<(), CellError> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(CellError::OutOfRange { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(CellError::Occupied { row, col });
        }
        Ok(())
    }

    pub fn place(&mut self, row: usize, col: usize, card: Card) -> Result<(), CellError> {
        self.check_free(row, col)?;
        self.cells[row][col] = Some(card);
        Ok(())
    }

    /// Occupied cards of a line, in grid order. Empty for off-grid lines.
    pub fn line(&self, line: LineId) -> Vec<Card> {
        if line.index >= GRID_SIZE {
            return Vec::new();
        }
        (0..GRID_SIZE)
            .filter_map(|i| match line.orientation {
                Orientation::Row => self.cells[line.index][i],
                Orientation::Column => self.cells[i][line.index],
            })
            .collect()
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cells.iter().flatten().filter_map(|c| *c)
    }

    pub fn occupied(&self) -> usize {
        self.cards().count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == CELL_COUNT
    }

    /// Empty cells in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..CELL_COUNT)
            .map(|i| (i / GRID_SIZE, i % GRID_SIZE))
            .filter(|&(r, c)| self.cells[r][c].is_none())
    }
}
