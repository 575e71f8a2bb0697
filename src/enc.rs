use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

use crate::{Board, Pos2};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid run count \"{run}\" on line {line}")]
    InvalidRun { line: usize, run: String },

    #[error("run on line {line} moves past the largest representable position")]
    Overflow { line: usize },

    #[error("run on line {line} reaches column {end}, past the declared width {width}")]
    PastWidth { line: usize, end: usize, width: usize },

    #[error("pattern has more than {limit} alive cells (line {line})")]
    TooManyCells { line: usize, limit: usize },

    #[error("pattern has no '!' terminator")]
    Unterminated,
}

/// Most alive cells a decoded pattern may hold
pub const MAX_PATTERN_CELLS: usize = 1 << 24;

/// A decoded pattern: its declared size (if any) and alive positions
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub name: Option<String>,
    pub size: Option<(usize, usize)>,
    pub alive: Vec<Pos2>,
}

pub trait BoardCodec {
    fn encode(&self, board: &Board) -> String;
    fn decode(&self, value: &str) -> Result<Pattern, DecodeError>;
}

struct RunEncoder {
    sequence: String,
    line_len: usize,
    max_line_len: usize,
}
impl RunEncoder {
    fn new(max_line_len: usize) -> Self {
        Self {
            sequence: String::new(),
            line_len: 0,
            max_line_len,
        }
    }

    fn push_run(&mut self, run: i32, c: char) {
        let append = match run {
            0 => String::new(),
            1 => c.to_string(),
            n => format!("{}{}", n, c),
        };
        if self.line_len + append.len() > self.max_line_len {
            self.sequence.push('\n');
            self.line_len = 0;
        }
        self.line_len += append.len();
        self.sequence.push_str(&append);
    }

    fn end(mut self) -> String {
        self.sequence.push('!');
        self.sequence
    }
}

/// The run-length encoded pattern format
///
/// Encoding always starts at the board's top-left corner, so a decoded
/// pattern lands on the same cells it was saved from.
#[derive(Debug, Default)]
pub struct RunLengthEncoded {
    name: Option<String>,
}
impl RunLengthEncoded {
    pub fn set_name<T: AsRef<str>>(mut self, name: T) -> Self {
        self.name = Some(name.as_ref().to_owned());
        self
    }

    fn encode_header(&self, board: &Board) -> String {
        let mut header = String::new();
        if let Some(name) = &self.name {
            header.push_str(&format!("#N {}\n", name));
        }
        header.push_str(&format!(
            "x = {}, y = {}, rule = B3/S23",
            board.width(),
            board.height()
        ));
        header
    }
    fn encode_cells(&self, board: &Board) -> String {
        let mut last = Pos2 { x: -1, y: 0 };
        let mut alive_run = 0;
        let mut seq = RunEncoder::new(70);
        for pos in board.iter_alive() {
            // if we're one ahead of the last, then only increment the run
            if last.y == pos.y && (last.x + 1) == pos.x {
                alive_run += 1;
                last = pos;
                continue;
            }

            let lines_run = pos.y - last.y;
            let dead_run = match lines_run {
                0 => pos.x - last.x - 1,
                _ => pos.x,
            };
            // NOTE: order matters!
            seq.push_run(alive_run, 'o');
            seq.push_run(lines_run, '$');
            seq.push_run(dead_run, 'b');

            alive_run = 1;
            last = pos;
        }

        seq.push_run(alive_run, 'o');
        seq.end()
    }

    fn token_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"(\d*)([bo$!])").expect("valid RLE token regex"))
    }
    fn header_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^\s*x\s*=\s*(\d+)\s*,\s*y\s*=\s*(\d+)").expect("valid RLE header regex")
        })
    }
}

impl BoardCodec for RunLengthEncoded {
    fn encode(&self, board: &Board) -> String {
        format!("{}\n{}\n", self.encode_header(board), self.encode_cells(board))
    }

    fn decode(&self, value: &str) -> Result<Pattern, DecodeError> {
        let mut pattern = Pattern::default();
        let mut cursor = Pos2 { x: 0, y: 0 };
        for (line_no, line) in value.lines().enumerate() {
            if let Some(name) = line.strip_prefix("#N") {
                pattern.name = Some(name.trim().to_owned());
                continue;
            }
            if line.starts_with('#') {
                continue;
            }
            if let Some(caps) = Self::header_regex().captures(line) {
                // the regex only matches digits, overflow is the only failure
                let dim = |i: usize| caps[i].parse::<usize>().ok();
                pattern.size = dim(1).zip(dim(2));
                continue;
            }

            for (_, [run_str, state]) in Self::token_regex()
                .captures_iter(line)
                .map(|x| x.extract())
            {
                let line_num = line_no + 1;
                let run = match run_str {
                    "" => 1,
                    s => s.parse::<i32>().map_err(|_| DecodeError::InvalidRun {
                        line: line_num,
                        run: s.to_owned(),
                    })?,
                };
                let shift = |from: i32| {
                    from.checked_add(run)
                        .ok_or(DecodeError::Overflow { line: line_num })
                };
                match state {
                    "!" => return Ok(pattern),
                    "o" => {
                        let end = shift(cursor.x)?;
                        if let Some((width, _)) = pattern.size {
                            // cursor.x is never negative, so `end` fits
                            if end as usize > width {
                                return Err(DecodeError::PastWidth {
                                    line: line_num,
                                    end: end as usize,
                                    width,
                                });
                            }
                        }
                        if pattern.alive.len() + run as usize > MAX_PATTERN_CELLS {
                            return Err(DecodeError::TooManyCells {
                                line: line_num,
                                limit: MAX_PATTERN_CELLS,
                            });
                        }
                        pattern
                            .alive
                            .extend((cursor.x..end).map(|x| Pos2::new(x, cursor.y)));
                        cursor.x = end;
                    }
                    "b" => cursor.x = shift(cursor.x)?,
                    "$" => {
                        cursor.x = 0;
                        cursor.y = shift(cursor.y)?;
                    }
                    _ => unreachable!(),
                }
            }
        }

        Err(DecodeError::Unterminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn glider_board() -> Board {
        let alive = [
            Pos2::new(1, 0),
            Pos2::new(2, 1),
            Pos2::new(0, 2),
            Pos2::new(1, 2),
            Pos2::new(2, 2),
        ];
        Board::from_alive(5, 4, alive).unwrap().0
    }

    #[test]
    fn encodes_glider() {
        let encoded = RunLengthEncoded::default()
            .set_name("glider")
            .encode(&glider_board());

        assert_eq!(
            encoded,
            "#N glider\nx = 5, y = 4, rule = B3/S23\nbo$2bo$3o!\n"
        );
    }

    #[test]
    fn decodes_header_and_cells() {
        let pattern = RunLengthEncoded::default()
            .decode("#N glider\n#C a comment\nx = 5, y = 4, rule = B3/S23\nbo$2bo$3o!\n")
            .unwrap();

        assert_eq!(pattern.name.as_deref(), Some("glider"));
        assert_eq!(pattern.size, Some((5, 4)));
        assert_eq!(pattern.alive, glider_board().iter_alive().collect::<Vec<_>>());
    }

    #[test]
    fn decodes_blank_lines_runs() {
        let pattern = RunLengthEncoded::default().decode("o2$o!").unwrap();

        assert_eq!(pattern.alive, vec![Pos2::new(0, 0), Pos2::new(0, 2)]);
    }

    #[test]
    fn missing_terminator_is_an_error() {
        assert_eq!(
            RunLengthEncoded::default().decode("bo$2bo"),
            Err(DecodeError::Unterminated)
        );
    }

    #[test]
    fn oversized_run_is_an_error() {
        let err = RunLengthEncoded::default()
            .decode("x = 3, y = 3\n99999999999o!")
            .unwrap_err();

        assert!(matches!(err, DecodeError::InvalidRun { line: 2, .. }));
    }

    #[test]
    fn runs_past_i32_are_errors() {
        let codec = RunLengthEncoded::default();

        assert_eq!(
            codec.decode("2000000000b2000000000bo!"),
            Err(DecodeError::Overflow { line: 1 })
        );
        assert_eq!(
            codec.decode("#C tall\n2000000000$2000000000$o!"),
            Err(DecodeError::Overflow { line: 2 })
        );
    }

    #[test]
    fn huge_alive_run_is_capped() {
        let codec = RunLengthEncoded::default();

        assert_eq!(
            codec.decode("2000000000o!"),
            Err(DecodeError::TooManyCells {
                line: 1,
                limit: MAX_PATTERN_CELLS
            })
        );
    }

    #[test]
    fn alive_run_past_declared_width_is_an_error() {
        let codec = RunLengthEncoded::default();

        assert_eq!(
            codec.decode("x = 3, y = 1\nb3o!"),
            Err(DecodeError::PastWidth {
                line: 2,
                end: 4,
                width: 3
            })
        );
        assert_eq!(codec.decode("x = 3, y = 1\nb2o!").unwrap().alive.len(), 2);
    }
}
