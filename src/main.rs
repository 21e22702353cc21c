//! Neon Dash entry point
//!
//! The browser build is driven from JavaScript through `neon_dash::web`.
//! Natively this runs the simulation headless and reports how the run went.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;

    use neon_dash::platform::{InputSource, InstantTime, ManualTime};
    use neon_dash::sim::{GameEvent, GameSession, Level, autopilot};
    use neon_dash::{FrameStatus, LoadError, Runner, Tuning};

    /// Run a level without a window
    #[derive(Parser, Debug)]
    #[command(name = "neon-dash", version, about)]
    pub struct Args {
        /// Level JSON (stock level if omitted)
        #[arg(long)]
        level: Option<PathBuf>,

        /// Tuning JSON (defaults if omitted)
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Simulated seconds to run before giving up
        #[arg(long, default_value_t = 60.0)]
        seconds: f64,

        /// Frames per second
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// Let the demo pilot play instead of never pressing
        #[arg(long)]
        autopilot: bool,

        /// Pace frames against the wall clock
        #[arg(long)]
        realtime: bool,
    }

    pub fn run(args: Args) -> Result<(), LoadError> {
        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let level = match &args.level {
            Some(path) => Level::load(path)?,
            None => Level::default(),
        };
        let session = GameSession::new(level, tuning);
        let fps = args.fps.max(1.0);
        let max_frames = (args.seconds * fps).ceil() as u64;

        let policy = |session: &GameSession| args.autopilot && autopilot::decide(session);

        let (session, frames) = if args.realtime {
            let mut runner = Runner::new(session, InstantTime::default());
            runner.press(InputSource::Keyboard, true);
            let period = Duration::from_secs_f64(1.0 / fps);
            for _ in 0..max_frames {
                let down = policy(runner.session());
                runner.press(InputSource::Keyboard, down);
                std::thread::sleep(period);
                let status = runner.frame();
                report(runner.drain_events());
                if status == FrameStatus::Stopped {
                    break;
                }
            }
            let frames = runner.frames();
            (runner.session().clone(), frames)
        } else {
            let mut runner = Runner::new(session, ManualTime::default());
            runner.press(InputSource::Keyboard, true);
            let frames = runner.run_simulated(max_frames, 1.0 / fps, policy);
            report(runner.drain_events());
            (runner.session().clone(), frames)
        };

        println!(
            "{:?} after {} frames: attempt {}, progress {:.1}%",
            session.phase(),
            frames,
            session.attempts(),
            session.progress() * 100.0
        );
        Ok(())
    }

    fn report(events: Vec<GameEvent>) {
        for event in events {
            match event {
                GameEvent::Died { attempt } => log::info!("Crashed, attempt {attempt}"),
                GameEvent::ModeChanged { mode } => log::info!("Portal: now {mode:?}"),
                GameEvent::Completed { attempts } => {
                    log::info!("Level complete in {attempts} attempts")
                }
                GameEvent::Started => log::info!("Run started"),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Neon Dash (native) starting...");

    let args = headless::Args::parse();
    if let Err(e) = headless::run(args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is neon_dash::web::init, this is just to satisfy the compiler
}
