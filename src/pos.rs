use std::{
    cmp::Ordering,
    ops::{Add, Sub},
};

/// A signed grid position
///
/// Positions coming from outside the board (pointer input, pattern files)
/// may be negative or past the edge, so they stay signed until the board
/// validates them with [`Board::contains`].
///
/// [`Board::contains`]: crate::Board::contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos2 {
    pub x: i32,
    pub y: i32,
}
impl Pos2 {
    /// The eight offsets of the Moore neighborhood, in row-major order
    pub const MOORE: [Pos2; 8] = [
        Pos2::new(-1, -1),
        Pos2::new(0, -1),
        Pos2::new(1, -1),
        Pos2::new(-1, 0),
        Pos2::new(1, 0),
        Pos2::new(-1, 1),
        Pos2::new(0, 1),
        Pos2::new(1, 1),
    ];

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn zero() -> Self {
        Self::new(0, 0)
    }
}
impl Default for Pos2 {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl PartialOrd for Pos2 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Pos2 {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major, same order as the board's flat cell index
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Add for Pos2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl Sub for Pos2 {
    type Output = Pos2;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
