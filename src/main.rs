mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::{mpsc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use arcade_shooter::config::GameConfig;
use arcade_shooter::controller::{GameLoopController, Key};
use arcade_shooter::ports::FrameScheduler;
use arcade_shooter::store::FileStore;

use display::TerminalRenderer;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS
const DEFAULT_CONFIG: &str = "arcade_shooter.ron";

#[derive(Parser, Debug)]
#[command(author, version, about = "Terminal arcade shooter", long_about = None)]
struct Cli {
    /// RON config file; missing values fall back to the built-in defaults.
    /// Without this flag `arcade_shooter.ron` in the working directory is
    /// used when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where log output goes (the terminal itself is taken by the game).
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Directory holding the persisted high score. Defaults to ~/.arcade_shooter
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

// ── Frame scheduling ──────────────────────────────────────────────────────────

/// One-shot gate: a tick arms it, the frame loop consumes it.
#[derive(Debug, Default)]
struct FrameClock {
    armed: bool,
}

impl FrameClock {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.armed)
    }
}

impl FrameScheduler for FrameClock {
    fn request_next_frame(&mut self) {
        self.armed = true;
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Translate a terminal key into the identifier the game core expects.
fn key_identifier(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Left => Some("ArrowLeft"),
        KeyCode::Right => Some("ArrowRight"),
        KeyCode::Up => Some("ArrowUp"),
        KeyCode::Down => Some("ArrowDown"),
        KeyCode::Char('p') => Some("p"),
        KeyCode::Char('P') => Some("P"),
        KeyCode::Char(' ') => Some(" "),
        _ => None,
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Input events are drained from the channel at the top of every frame and
/// applied before the tick runs, so input and simulation never interleave.
fn game_loop<W: Write>(
    renderer: &mut TerminalRenderer<W>,
    controller: &mut GameLoopController<FileStore>,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut clock = FrameClock::default();
    controller.start(&mut clock);

    loop {
        let frame_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind: KeyEventKind::Press | KeyEventKind::Repeat,
                    modifiers,
                    ..
                }) => {
                    if is_quit(code, modifiers) {
                        return Ok(());
                    }
                    let Some(key) = key_identifier(code).and_then(Key::from_identifier) else {
                        continue;
                    };
                    controller.handle_key(key, &mut clock);
                    if controller.is_paused() {
                        renderer.draw_pause_banner();
                        renderer.flush()?;
                    }
                }
                Event::Resize(cols, rows) => renderer.resize(cols, rows),
                _ => {}
            }
        }

        if clock.take() {
            controller.tick(renderer, &mut clock);
            renderer.flush()?;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_logging(path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(|| std::env::temp_dir().join("arcade_shooter.log"));
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file: {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<GameConfig> {
    let config = match path {
        Some(path) => GameConfig::load_from_file(&path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => {
            let (config, err) = GameConfig::load_or_default(DEFAULT_CONFIG);
            if let Some(e) = err {
                debug!("{DEFAULT_CONFIG} not used, built-in defaults apply: {e}");
            }
            config
        }
    };
    for warning in config.validate() {
        warn!("config: {warning}");
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file)?;
    let config = load_config(cli.config)?;
    let store = cli.data_dir.map(FileStore::new).unwrap_or_else(FileStore::in_home);

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = (|| -> std::io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut renderer = TerminalRenderer::new(&mut out, cols, rows, &config.canvas);
        let mut controller = GameLoopController::new(config, store);
        info!(high_score = controller.world().high_score, "game started");
        game_loop(&mut renderer, &mut controller, &rx)
    })();

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")
}
