use std::thread;

use anyhow::Context;
use boundlife::{Board, BoardCodec, RunLengthEncoded, SimulationState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod console;
mod options;
mod stats;

use console::ConsoleCommand;

fn init_tracing(console: bool) {
    // stdout is the drawing surface in console mode, keep logs quiet and on stderr
    let default = if console { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn args_to_board(args: &options::Args) -> anyhow::Result<Board> {
    let Some(file_name) = args.input_file() else {
        let (width, height) = args.grid_size(None)?;
        return Ok(args.fill_mode()?.create_board(width, height)?);
    };
    let encoded_str =
        std::fs::read_to_string(&file_name).with_context(|| format!("read {file_name}"))?;
    let pattern = RunLengthEncoded::default()
        .decode(&encoded_str)
        .with_context(|| format!("decode {file_name}"))?;

    // a pattern's declared size is the default board size
    let (width, height) = args.grid_size(pattern.size)?;
    let (board, skipped) = Board::from_alive(width, height, pattern.alive)?;
    if skipped > 0 {
        warn!(
            skipped,
            width, height, "pattern cells outside the board were dropped"
        );
    }
    info!(name = pattern.name.as_deref(), alive = board.alive_count(), "loaded {file_name}");
    Ok(board)
}

fn main() -> anyhow::Result<()> {
    let Some(args) = options::Args::from_env()? else {
        return Ok(());
    };
    init_tracing(args.console());

    let board = args_to_board(&args)?;
    info!(
        width = board.width(),
        height = board.height(),
        alive = board.alive_count(),
        "starting"
    );

    // setup the simulation and reporting metrics
    let mut state = SimulationState::new(board);
    // headless runs have nobody to press space
    if args.start_running() || !args.console() {
        state.toggle();
    }
    let mut console = if args.console() {
        Some(console::ConsoleRender::new(args.viewport()?)?)
    } else {
        None
    };
    let sleep = args.sleep()?;

    let mut stats = stats::Throughput::new(state.generation(), state.board().alive_count());
    'ticks: for _ in 0..args.generations()? {
        // handle input and render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    ConsoleCommand::Exit => break 'ticks,
                    ConsoleCommand::Toggle => {
                        state.toggle();
                    }
                    ConsoleCommand::Step if !state.is_running() => state.step(),
                    ConsoleCommand::Activate(pos) => {
                        state.activate(pos);
                    }
                    _ => {}
                }
            }
            console.render(&state)?;
        }

        // report metrics every 500ms
        if stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                info!(generation = state.generation(), "{}", report);
            }
        }

        state.tick();
        stats.record(state.generation(), state.board().alive_count());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    info!(
        generation = state.generation(),
        alive = state.board().alive_count(),
        "finished"
    );

    if let Some(file_name) = args.output_file() {
        let encoder = RunLengthEncoded::default().set_name("boundlife generated pattern");
        let encoded = encoder.encode(state.board());
        std::fs::write(&file_name, encoded).with_context(|| format!("write {file_name}"))?;
    }

    Ok(())
}
