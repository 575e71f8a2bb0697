use boundlife::{BoardWindow, Pos2, SimulationState, Viewport};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue, terminal,
};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Toggle,
    Step,
    Activate(Pos2),
    Handled,
}

pub struct ConsoleRender {
    viewport: Viewport,
    report: String,
    mouse_down: bool,
}
impl ConsoleRender {
    pub fn new(viewport: Viewport) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide, EnableMouseCapture)?;
        Ok(Self {
            viewport,
            report: String::new(),
            mouse_down: false,
        })
    }

    pub fn render(&self, state: &SimulationState) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;

        let size = self.viewport.cell_size() as i32;
        let visible = Pos2 {
            x: cols as i32 / size,
            y: (rows as i32 - self.viewport.offset() as i32) / size,
        };
        let block = "\u{2588}".repeat(self.viewport.cell_size() as usize);
        for cell in BoardWindow::new(state.board(), Pos2::zero(), visible).iter() {
            let (px, py) = self.viewport.origin_of(cell.x as usize, cell.y as usize);
            for dy in 0..self.viewport.cell_size() {
                queue!(stdout, cursor::MoveTo(px as u16, py.saturating_add(dy) as u16))?;
                io::Write::write_all(&mut stdout, block.as_bytes())?;
            }
        }

        // write header
        let run_state = if state.is_running() { "running" } else { "paused" };
        let header = format!(
            "Generation: {} [{}] {}",
            state.generation(),
            run_state,
            self.report
        );
        queue!(stdout, cursor::MoveTo(0, 0))?;
        io::Write::write_all(&mut stdout, header.as_bytes())?;

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let cmd = match event::read()? {
            // CTRL+C or q
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => ConsoleCommand::Exit,
            // windows also reports releases, only act on the press
            event::Event::Key(KeyEvent {
                code: KeyCode::Char(' '),
                kind: KeyEventKind::Press,
                ..
            }) => ConsoleCommand::Toggle,
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('n'),
                kind: KeyEventKind::Press,
                ..
            }) => ConsoleCommand::Step,
            event::Event::Mouse(MouseEvent {
                kind,
                column,
                row,
                ..
            }) => self.handle_mouse(kind, column, row),
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }

    fn handle_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) -> ConsoleCommand {
        match kind {
            MouseEventKind::Down(MouseButton::Left) => self.mouse_down = true,
            MouseEventKind::Up(MouseButton::Left) => {
                self.mouse_down = false;
                return ConsoleCommand::Handled;
            }
            MouseEventKind::Drag(MouseButton::Left) => {}
            _ => return ConsoleCommand::Handled,
        }
        if !self.mouse_down {
            return ConsoleCommand::Handled;
        }
        ConsoleCommand::Activate(self.viewport.cell_at(column.into(), row.into()))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), DisableMouseCapture, cursor::Show).expect("enable cursor");
    }
}
