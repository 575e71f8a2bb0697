use tracing::{debug, trace};

use crate::{Board, BoardError, Pos2, engine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// A running simulation: the current board, its generation, and whether
/// ticks advance it
///
/// Hosts call [`tick`] once per frame and route input to [`activate`] and
/// [`toggle`] between frames.
///
/// [`tick`]: SimulationState::tick
/// [`activate`]: SimulationState::activate
/// [`toggle`]: SimulationState::toggle
#[derive(Debug)]
pub struct SimulationState {
    board: Board,
    // next generation is written here, then swapped with `board`
    scratch: Board,
    generation: u64,
    run_state: RunState,
}

impl SimulationState {
    pub fn new(board: Board) -> Self {
        let scratch = board.clone();
        Self {
            board,
            scratch,
            generation: 0,
            run_state: RunState::Paused,
        }
    }

    /// Starts a simulation on an all-dead board
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        Board::new(width, height).map(Self::new)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn run_state(&self) -> RunState {
        self.run_state
    }
    #[inline]
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Flips between [`RunState::Paused`] and [`RunState::Running`]
    pub fn toggle(&mut self) -> RunState {
        self.run_state = match self.run_state {
            RunState::Paused => RunState::Running,
            RunState::Running => RunState::Paused,
        };
        debug!(state = ?self.run_state, generation = self.generation, "toggled");
        self.run_state
    }

    /// Advances one generation if running
    ///
    /// Returns whether the board advanced.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step();
        true
    }

    /// Advances one generation regardless of the run state
    pub fn step(&mut self) {
        engine::advance_into(&self.board, &mut self.scratch);
        std::mem::swap(&mut self.board, &mut self.scratch);
        self.generation += 1;
        trace!(
            generation = self.generation,
            alive = self.board.alive_count(),
            "advanced"
        );
    }

    /// Sets the cell at `pos` alive
    ///
    /// Positions off the board are ignored. Returns whether a cell was set.
    pub fn activate(&mut self, pos: Pos2) -> bool {
        let set = self.board.set_alive(pos);
        if !set {
            trace!(x = pos.x, y = pos.y, "ignored activation off the board");
        }
        set
    }

    /// Ends the simulation, returning the final board
    #[inline]
    pub fn take(self) -> Board {
        self.board
    }
}
