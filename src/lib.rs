//! Conway's Game of Life on a fixed-size, non-toroidal board.

pub mod board;
pub mod enc;
pub mod engine;
pub mod pos;
pub mod state;
pub mod viewport;

pub use board::{Board, BoardError, Cell};
pub use enc::{BoardCodec, DecodeError, Pattern, RunLengthEncoded};
pub use engine::{BoardWindow, advance, advance_into, live_neighbor_count};
pub use pos::Pos2;
pub use state::{RunState, SimulationState};
pub use viewport::{Viewport, ViewportError};
