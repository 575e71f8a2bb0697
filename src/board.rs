use thiserror::Error;
use tracing::debug;

use crate::Pos2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },

    #[error("board of {width}x{height} cells does not fit in memory")]
    TooLarge { width: usize, height: usize },
}

/// The state of a single cell
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}
impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}
impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A fixed-size, non-toroidal grid of cells stored row-major
///
/// The number of cells always equals `width * height`, and neither dimension
/// changes after construction. Both dimensions are at most [`Board::MAX_DIMENSION`],
/// so every coordinate converts to a [`Pos2`] without truncation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Largest accepted width or height
    ///
    /// One short of `i32::MAX`, so a neighbor offset past the last column or
    /// row is still representable.
    pub const MAX_DIMENSION: usize = i32::MAX as usize - 1;

    /// Creates an all-dead board
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::ZeroDimension { width, height });
        }
        if width > Self::MAX_DIMENSION || height > Self::MAX_DIMENSION {
            return Err(BoardError::TooLarge { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;

        debug!(width, height, "created board");
        Ok(Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Creates a board with the given cells alive
    ///
    /// Positions outside the board are skipped. Returns the board and the
    /// number of skipped positions.
    pub fn from_alive<I>(width: usize, height: usize, alive: I) -> Result<(Self, usize), BoardError>
    where
        I: IntoIterator<Item = Pos2>,
    {
        let mut board = Self::new(width, height)?;
        let skipped = alive
            .into_iter()
            .filter(|&pos| !board.set_alive(pos))
            .count();
        Ok((board, skipped))
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Flat index of `(x, y)`
    ///
    /// The coordinates must be on the board.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is outside a {}x{} board",
            self.width,
            self.height
        );
        x + y * self.width
    }

    /// Coordinates of a flat index
    #[inline]
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// Whether `pos` lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos2) -> bool {
        self.checked_coords(pos).is_some()
    }

    /// Converts a signed position to board coordinates, if it is on the board
    pub fn checked_coords(&self, pos: Pos2) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index_of(x, y)]
    }
    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_alive()
    }

    /// Sets the cell at `pos` alive
    ///
    /// Returns `false` and leaves the board untouched if `pos` is off the board.
    pub fn set_alive(&mut self, pos: Pos2) -> bool {
        let Some((x, y)) = self.checked_coords(pos) else {
            return false;
        };
        let index = self.index_of(x, y);
        self.cells[index] = Cell::Alive;
        true
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Positions of all alive cells, in row-major order
    pub fn iter_alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(i, _)| {
                let (x, y) = self.coords_of(i);
                Pos2::new(x as i32, y as i32)
            })
    }

    /// Whether `other` has the same dimensions as this board
    #[inline]
    pub fn same_size(&self, other: &Board) -> bool {
        self.width == other.width && self.height == other.height
    }
}
