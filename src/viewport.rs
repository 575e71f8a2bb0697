//! Mapping between a host's drawing surface and board cells.

use thiserror::Error;

use crate::{BoardError, Pos2};

/// Largest accepted cell size or status offset, in surface units
///
/// Terminal coordinates are `u16`, and no pixel surface is wider than this.
pub const MAX_SURFACE_UNITS: u32 = u16::MAX as u32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewportError {
    #[error("cell size must be between 1 and {MAX_SURFACE_UNITS}, got {0}")]
    CellSize(u32),

    #[error("offset must be at most {MAX_SURFACE_UNITS}, got {0}")]
    Offset(u32),
}

/// How board cells are laid out on a drawing surface
///
/// Each cell is a `cell_size` square, and the top `offset` units of the
/// surface are reserved for status text above the grid. Both are bounded by
/// [`MAX_SURFACE_UNITS`], so they always fit in an `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    cell_size: u32,
    offset: u32,
}

impl Viewport {
    pub fn new(cell_size: u32, offset: u32) -> Result<Self, ViewportError> {
        if cell_size == 0 || cell_size > MAX_SURFACE_UNITS {
            return Err(ViewportError::CellSize(cell_size));
        }
        if offset > MAX_SURFACE_UNITS {
            return Err(ViewportError::Offset(offset));
        }
        Ok(Self { cell_size, offset })
    }

    #[inline]
    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Number of whole cells that fit on a `width` by `height` surface
    pub fn grid_size(&self, width: u32, height: u32) -> Result<(usize, usize), BoardError> {
        let cols = (width / self.cell_size) as usize;
        let rows = (height.saturating_sub(self.offset) / self.cell_size) as usize;
        if cols == 0 || rows == 0 {
            return Err(BoardError::ZeroDimension {
                width: cols,
                height: rows,
            });
        }
        Ok((cols, rows))
    }

    /// The cell under the surface point `(px, py)`
    ///
    /// The result may be off the board, e.g. for a pointer over the status
    /// text or past the last column.
    pub fn cell_at(&self, px: i32, py: i32) -> Pos2 {
        let size = self.cell_size as i32;
        Pos2 {
            x: px.div_euclid(size),
            y: py.saturating_sub(self.offset as i32).div_euclid(size),
        }
    }

    /// Top-left surface point of the cell at `(x, y)`
    ///
    /// Saturates at `u32::MAX` for cells too far out to be drawn.
    pub fn origin_of(&self, x: usize, y: usize) -> (u32, u32) {
        let scale = |n: usize| u32::try_from(n).unwrap_or(u32::MAX).saturating_mul(self.cell_size);
        (scale(x), scale(y).saturating_add(self.offset))
    }
}

impl Default for Viewport {
    /// One terminal character per cell, one line of status text
    fn default() -> Self {
        Self {
            cell_size: 1,
            offset: 1,
        }
    }
}
