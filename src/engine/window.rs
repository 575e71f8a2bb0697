use crate::{Board, Pos2};

/// A read-only rectangular view of a [`Board`]
///
/// The window is clipped to the board, so renderers can ask for a region of
/// any size (e.g. the whole terminal) without checking the board's edges.
pub struct BoardWindow<'a> {
    tl: Pos2,
    br: Pos2,
    board: &'a Board,
}
impl<'a> BoardWindow<'a> {
    pub fn new(board: &'a Board, top_left: Pos2, bottom_right: Pos2) -> Self {
        let clamp = |pos: Pos2| Pos2 {
            x: pos.x.clamp(0, board.width() as i32),
            y: pos.y.clamp(0, board.height() as i32),
        };
        Self {
            tl: clamp(top_left),
            br: clamp(bottom_right),
            board,
        }
    }

    /// Alive cells inside the window, in row-major order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + '_ {
        let rx = self.tl.x..self.br.x;
        (self.tl.y..self.br.y).flat_map(move |y| {
            rx.clone()
                .map(move |x| Pos2::new(x, y))
                .filter(move |pos| self.board.is_alive(pos.x as usize, pos.y as usize))
        })
    }
}

impl std::fmt::Display for BoardWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut last = self.tl - Pos2 { x: 1, y: 0 };
        for alive in self.iter() {
            // determine the number of lines to print
            let lines = alive.y - last.y;
            // determine the number of padding spaces to print
            let padding = match lines {
                0 => alive.x - last.x - 1,
                _ => alive.x - self.tl.x,
            };
            write!(
                f,
                "{0:\n<1$}{0: <2$}█",
                "", lines as usize, padding as usize
            )?;
            last = alive;
        }
        Ok(())
    }
}
