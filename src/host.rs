//! Frame scheduling and the outer loop.
//!
//! The host owns time. Each iteration waits for the next frame, feeds the
//! queued key presses to the engine and runs exactly one tick. The loop is
//! a plain `loop`, so a session of any length uses constant stack.

use std::io;
use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::engine::Engine;
use crate::entities::Phase;
use crate::input::{Command, InputSource};
use crate::surface::Surface;

pub const DEFAULT_FPS: u32 = 60;

pub trait FrameScheduler {
    /// Block until the next frame is due and return its timestamp in
    /// milliseconds since the scheduler was created.
    fn next_frame(&mut self) -> u64;

    /// Timestamp of "now" without waiting, used to start the clock.
    fn now(&self) -> u64;
}

/// Sleeps away whatever is left of a fixed frame budget.
pub struct FixedRateScheduler {
    origin: Instant,
    frame: Duration,
    deadline: Instant,
}

impl FixedRateScheduler {
    pub fn new(fps: u32) -> Self {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let origin = Instant::now();
        Self { origin, frame, deadline: origin + frame }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn next_frame(&mut self) -> u64 {
        let now = Instant::now();
        if now < self.deadline {
            thread::sleep(self.deadline - now);
        }
        // A slow frame pushes the next deadline out instead of bursting.
        self.deadline = Instant::now().max(self.deadline) + self.frame;
        self.now()
    }

    fn now(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u64,
    pub lives: u32,
    pub frames: u64,
    pub phase: Phase,
}

/// Drive `engine` until the player quits or the input source goes away.
/// Game over does not end the loop; the game-over screen keeps animating.
pub fn run<R, F, I, S>(
    engine: &mut Engine<R>,
    scheduler: &mut F,
    input: &mut I,
    surface: &mut S,
) -> io::Result<RunSummary>
where
    R: Rng,
    F: FrameScheduler,
    I: InputSource,
    S: Surface,
{
    engine.start(scheduler.now());

    'frames: loop {
        let now = scheduler.next_frame();

        for command in input.poll() {
            match command {
                Command::Quit => break 'frames,
                other => {
                    if let Some(direction) = other.direction() {
                        engine.move_player(direction);
                    }
                }
            }
        }
        if input.is_closed() {
            break;
        }

        engine.tick(now, surface)?;
    }

    let summary = RunSummary {
        score: engine.score(),
        lives: engine.player().lives,
        frames: engine.frame(),
        phase: engine.phase(),
    };
    info!(score = summary.score, frames = summary.frames, "session ended");
    Ok(summary)
}
