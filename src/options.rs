use std::{str::FromStr, time::Duration};

use anyhow::{Context, bail};
use boundlife::{Board, BoardError, Pos2, Viewport};

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn options() -> getopts::Options {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("r", "run", "start running instead of paused");
        opts.optopt("o", "output", "write the final board to FILE", "FILE");
        opts.optopt("i", "input", "seed the board from an RLE FILE", "FILE");
        opts.optopt("w", "width", "set grid width", "CELLS");
        opts.optopt("h", "height", "set grid height", "CELLS");
        opts.optopt("", "cell-size", "size of a cell on the surface", "UNITS");
        opts.optopt("", "offset", "rows reserved above the grid", "UNITS");
        opts.optopt("f", "fill", "empty, random, alternating or all", "TYPE");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "max number of ticks", "COUNT");
        opts
    }

    /// Parses the arguments, returning `None` if only help was requested
    pub fn new<T: AsRef<str>>(args: &[T]) -> anyhow::Result<Option<Self>> {
        let opts = Self::options();
        let matches = opts.parse(args.iter().map(T::as_ref))?;
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: boundlife [options]"));
            return Ok(None);
        }

        let args = Self { matches };
        // surface malformed values now rather than mid-run
        args.width()?;
        args.height()?;
        args.viewport()?;
        args.fill_mode()?;
        args.sleep()?;
        args.generations()?;
        Ok(Some(args))
    }
    pub fn from_env() -> anyhow::Result<Option<Self>> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn get<T>(&self, name: &str) -> anyhow::Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.matches
            .opt_get(name)
            .with_context(|| format!("invalid value for --{name}"))
    }

    fn width(&self) -> anyhow::Result<Option<usize>> {
        self.get("width")
    }
    fn height(&self) -> anyhow::Result<Option<usize>> {
        self.get("height")
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn start_running(&self) -> bool {
        self.matches.opt_present("run")
    }

    pub fn generations(&self) -> anyhow::Result<u64> {
        Ok(self.get("gens")?.unwrap_or(u64::MAX)) // kinda hacky way of saying "infinity"
    }
    pub fn sleep(&self) -> anyhow::Result<Option<Duration>> {
        Ok(match self.get("sleep")? {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        })
    }

    pub fn viewport(&self) -> anyhow::Result<Viewport> {
        let default = Viewport::default();
        let viewport = Viewport::new(
            self.get("cell-size")?.unwrap_or(default.cell_size()),
            self.get("offset")?.unwrap_or(default.offset()),
        )?;
        Ok(viewport)
    }

    /// Grid size in cells
    ///
    /// Explicit `--width`/`--height` win, then the size declared by a seed
    /// pattern, otherwise the terminal (console mode) or a fixed surface is
    /// mapped through the viewport.
    pub fn grid_size(&self, pattern_size: Option<(usize, usize)>) -> anyhow::Result<(usize, usize)> {
        let (cols, rows) = if self.console() {
            crossterm::terminal::size().context("query terminal size")?
        } else {
            (100, 101)
        };
        let derived = self.viewport()?.grid_size(cols.into(), rows.into());

        match (self.width()?, self.height()?) {
            (Some(w), Some(h)) => Ok((w, h)),
            (w, h) => {
                let (dw, dh) = match pattern_size {
                    Some(size) => size,
                    None => derived?,
                };
                Ok((w.unwrap_or(dw), h.unwrap_or(dh)))
            }
        }
    }
    pub fn fill_mode(&self) -> anyhow::Result<FillMode> {
        let mode_str = self.matches.opt_str("fill");
        mode_str.as_deref().unwrap_or("empty").parse()
    }

    pub fn output_file(&self) -> Option<String> {
        self.matches.opt_str("output")
    }
    pub fn input_file(&self) -> Option<String> {
        self.matches.opt_str("input")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillMode {
    Random,
    Alternating,
    All,
    Empty,
}
impl FromStr for FillMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(Self::Random),
            "alternating" => Ok(Self::Alternating),
            "all" => Ok(Self::All),
            "empty" => Ok(Self::Empty),
            other => bail!("unknown fill mode \"{other}\""),
        }
    }
}
impl FillMode {
    fn fill_cell<R: rand::Rng>(&self, cell: Pos2, rng: &mut R) -> bool {
        match self {
            Self::Random => rng.random_bool(0.5),
            Self::Alternating => (cell.x + cell.y) % 2 == 0,
            Self::All => true,
            Self::Empty => false,
        }
    }
    pub fn create_board(self, w: usize, h: usize) -> Result<Board, BoardError> {
        let mut board = Board::new(w, h)?;
        if self == Self::Empty {
            return Ok(board);
        }

        let mut rng = rand::rng();
        for y in 0..h {
            for x in 0..w {
                let cell = Pos2::new(x as i32, y as i32);
                if self.fill_cell(cell, &mut rng) {
                    board.set_alive(cell);
                }
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(args: &[&str]) -> Args {
        Args::new(args).unwrap().expect("not a help request")
    }

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2::new(x, y)
    }

    #[test]
    fn fill_mode_parses() {
        let args = args(&["--fill", "alternating"]);

        assert_eq!(args.fill_mode().unwrap(), FillMode::Alternating);
    }

    #[test]
    fn fill_mode_defaults_to_empty() {
        assert_eq!(args(&[]).fill_mode().unwrap(), FillMode::Empty);
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(Args::new(&["--fill", "sparse"]).is_err());
        assert!(Args::new(&["--width", "wide"]).is_err());
        assert!(Args::new(&["--gens", "-3"]).is_err());
    }

    #[test]
    fn help_returns_none() {
        assert!(Args::new(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn explicit_size_wins() {
        let args = args(&["-w", "12", "-h", "7"]);

        assert_eq!(args.grid_size(None).unwrap(), (12, 7));
        assert_eq!(args.grid_size(Some((40, 30))).unwrap(), (12, 7));
    }

    #[test]
    fn pattern_size_fills_missing_dimensions() {
        assert_eq!(args(&[]).grid_size(Some((40, 30))).unwrap(), (40, 30));
        assert_eq!(args(&["-w", "12"]).grid_size(Some((40, 30))).unwrap(), (12, 30));
    }

    #[test]
    fn headless_size_goes_through_viewport() {
        let args = args(&["--cell-size", "10", "--offset", "1"]);

        assert_eq!(args.grid_size(None).unwrap(), (10, 10));
    }

    #[test]
    fn oversized_viewport_is_an_error() {
        assert!(Args::new(&["--cell-size", "0"]).is_err());
        assert!(Args::new(&["--cell-size", "3000000000"]).is_err());
        assert!(Args::new(&["--offset", "2147483648"]).is_err());
    }

    #[test]
    fn create_board_all_fills_grid() {
        let board = FillMode::All.create_board(3, 2).unwrap();

        assert_eq!(board.alive_count(), 6);
    }

    #[test]
    fn create_board_empty_is_empty() {
        let board = FillMode::Empty.create_board(5, 4).unwrap();

        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn create_board_alternating_uses_parity() {
        let board = FillMode::Alternating.create_board(3, 3).unwrap();

        let expected = vec![pos(0, 0), pos(2, 0), pos(1, 1), pos(0, 2), pos(2, 2)];
        assert_eq!(board.iter_alive().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn create_board_rejects_zero_size() {
        assert!(FillMode::Random.create_board(0, 3).is_err());
    }
}
