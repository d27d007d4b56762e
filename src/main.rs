use std::fs::File;
use std::io::{stdout, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{cursor, event, terminal, ExecutableCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use lane_dodge::display::TerminalSurface;
use lane_dodge::host::{self, FixedRateScheduler, RunSummary, DEFAULT_FPS};
use lane_dodge::input::ChannelInput;
use lane_dodge::{Engine, GameConfig, Phase};

#[derive(Parser, Debug)]
#[command(name = "lane_dodge", about = "Dodge the falling enemies, one lane at a time")]
struct Cli {
    /// JSON file overriding the default playfield and tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for enemy placement, speeds and the background pick.
    #[arg(long)]
    seed: Option<u64>,

    /// Enemies alive at once (at most the number of lanes).
    #[arg(long)]
    max_enemies: Option<usize>,

    /// Target frame rate.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Write logs to this file (the terminal itself is taken by the game).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::parse_json_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(max_enemies) = cli.max_enemies {
        config.max_enemies = max_enemies;
    }
    config.validate().context("invalid game configuration")?;
    Ok(config)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = load_config(&cli)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut engine = Engine::new(config, rng).context("failed to create game session")?;

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = play(&mut engine, &mut out, rx, cli.fps);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    let summary = result?;
    let verdict = match summary.phase {
        Phase::Exploding => "game over",
        Phase::Running => "quit",
    };
    println!("{verdict}: score {}, lives left {}", summary.score, summary.lives);
    Ok(())
}

fn play(
    engine: &mut Engine<StdRng>,
    out: &mut BufWriter<std::io::Stdout>,
    rx: mpsc::Receiver<event::Event>,
    fps: u32,
) -> Result<RunSummary> {
    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    let mut surface = TerminalSurface::new(out, engine.config(), cols, rows);
    let mut scheduler = FixedRateScheduler::new(fps);
    let mut input = ChannelInput::new(rx);
    let summary = host::run(engine, &mut scheduler, &mut input, &mut surface)?;
    Ok(summary)
}
