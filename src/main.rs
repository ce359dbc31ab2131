mod display;

use std::io::{stdout, BufWriter, Write};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};

use bullet_dodge::compute::{apply_pointer, init_state, tick};
use bullet_dodge::config::GameConfig;
use bullet_dodge::entities::GameState;
use bullet_dodge::error::GameError;
use bullet_dodge::render::render_frame;
use bullet_dodge::timer::Timer;

use display::{Layout, TerminalSurface, MIN_COLS, MIN_ROWS};

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Each frame drains every pending terminal event without blocking, applies
/// pointer motion, advances the simulation once (unless paused), redraws, and
/// sleeps for whatever is left of the frame budget.
fn game_loop<W: Write>(out: &mut W, state: &mut GameState) -> Result<(), GameError> {
    let frame_budget = Duration::from_millis(state.config.frame_millis);
    let (cols, rows) = terminal::size()?;
    let mut layout = Layout::new(cols, rows, &state.config);

    let mut timer = Timer::new();
    timer.start(Instant::now());

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(KeyEvent {
                    code,
                    modifiers,
                    kind: KeyEventKind::Press,
                    ..
                }) => match code {
                    _ if is_quit_key(code, modifiers) => {
                        log::info!("Quit requested at frame {}", state.frame);
                        return Ok(());
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') => {
                        let now = Instant::now();
                        if timer.is_paused() {
                            timer.unpause(now);
                            log::info!("Resumed at {} ms", timer.ticks(now));
                        } else {
                            timer.pause(now);
                            log::info!("Paused at {} ms", timer.ticks(now));
                        }
                    }
                    _ => {}
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Moved | MouseEventKind::Drag(_),
                    column,
                    row,
                    ..
                }) if !timer.is_paused() => {
                    let (x, y) = layout.to_playfield(column, row);
                    *state = apply_pointer(state, x, y);
                }
                Event::Resize(cols, rows) => {
                    layout = Layout::new(cols, rows, &state.config);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if !timer.is_paused() {
            *state = tick(state, timer.ticks(now));
        }

        let mut surface = TerminalSurface::new(&mut *out, layout);
        surface.begin_frame()?;
        render_frame(&mut surface, state, timer.ticks(now))?;
        if timer.is_paused() {
            surface.draw_paused()?;
        }
        surface.present()?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        }
    }
}

/// `q`, `Esc` or Ctrl-C.
fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // The game owns the terminal; run with `RUST_LOG=debug ... 2>game.log`
    // to see more than warnings.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = GameConfig::load()
        .map_err(GameError::from)
        .and_then(run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Failed to run game: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: GameConfig) -> Result<(), GameError> {
    let (cols, rows) = terminal::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(GameError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    let setup = out
        .execute(terminal::EnterAlternateScreen)
        .and_then(|o| o.execute(cursor::Hide))
        .and_then(|o| o.execute(EnableMouseCapture))
        .map(|_| ());

    let mut state = init_state(config);
    let result = match setup {
        Ok(()) => {
            log::info!("Game started on a {}x{} terminal", cols, rows);
            game_loop(&mut out, &mut state)
        }
        Err(e) => Err(e.into()),
    };

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    log::info!(
        "Game over after {} frames with score {}",
        state.frame,
        state.score
    );
    result
}
