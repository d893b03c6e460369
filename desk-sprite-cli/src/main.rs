//! desk-sprite CLI - a terminal host for the desktop pet engine.
//!
//! Runs the pet behavior engine headless, prints state changes and frames,
//! and maps simple stdin commands onto the interaction source so the pet
//! can be clicked, dragged, and guided from a terminal.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use desk_sprite_core::{
    Bounds, Config, DesktopLayout, Engine, EngineEvent, InteractionSource, LoggingWindow,
    OverlayOptions, Point, StaticDesktop,
};

/// desk-sprite - an autonomous desktop companion, in your terminal.
///
/// The pet idles, wanders toward desktop icons, and responds to input.
/// Drive it from stdin with: click, rclick, drag-start, drag X Y,
/// drag-end, move X Y, guide X Y, quit.
#[derive(Parser, Debug)]
#[command(name = "desk-sprite")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a desktop layout JSON file (screen bounds + icon slots).
    ///
    /// Without one, an empty desktop of --screen-width x --screen-height
    /// is used and the pet wanders to random points only.
    #[arg(short = 'l', long = "layout")]
    pub layout: Option<PathBuf>,

    /// Screen width used when no layout file is given.
    #[arg(long = "screen-width", default_value = "1920")]
    pub screen_width: f64,

    /// Screen height used when no layout file is given.
    #[arg(long = "screen-height", default_value = "1080")]
    pub screen_height: f64,

    /// Walking speed in screen units per second.
    #[arg(long = "move-speed", default_value = "2.0")]
    pub move_speed: f64,

    /// Minimum idle time in seconds before the pet wanders.
    #[arg(long = "idle-min", default_value = "3.0")]
    pub idle_min: f64,

    /// Maximum idle time in seconds before the pet wanders.
    #[arg(long = "idle-max", default_value = "8.0")]
    pub idle_max: f64,

    /// Pointer-following smoothing rate.
    #[arg(long = "follow-speed", default_value = "8.0")]
    pub follow_speed: f64,

    /// Frames per second for the behavior loop.
    #[arg(long = "fps", default_value = "60.0", env = "DESK_SPRITE_FPS")]
    pub fps: f64,

    /// Seed for deterministic behavior.
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Stop after this many seconds (run forever if omitted).
    #[arg(short = 'd', long = "duration")]
    pub duration: Option<u64>,

    /// Print every frame, not just state changes.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Convert CLI arguments to an engine Config.
    pub fn to_config(&self) -> Config {
        let mut config = Config::new()
            .move_speed(self.move_speed)
            .idle_time_range(self.idle_min, self.idle_max)
            .follow_speed(self.follow_speed)
            .frame_rate(self.fps)
            .start_position(Point::new(
                self.screen_width / 2.0,
                self.screen_height / 2.0,
            ));

        if let Some(seed) = self.seed {
            config = config.rng_seed(seed);
        }

        config
    }

    /// Load the configured layout, or synthesize an icon-less one.
    pub fn load_layout(&self) -> anyhow::Result<DesktopLayout> {
        match &self.layout {
            Some(path) => DesktopLayout::load(path)
                .with_context(|| format!("loading desktop layout from {}", path.display())),
            None => Ok(DesktopLayout::new(Bounds::new(
                self.screen_width,
                self.screen_height,
            ))),
        }
    }
}

/// Parse "X Y" out of a command tail.
fn parse_point(args: &[&str]) -> Option<Point> {
    if args.len() != 2 {
        return None;
    }
    let x = args[0].parse().ok()?;
    let y = args[1].parse().ok()?;
    Some(Point::new(x, y))
}

/// Map one stdin line onto the interaction source.
///
/// Returns `false` when the line asks to quit.
fn dispatch_command(source: &mut InteractionSource, line: &str) -> bool {
    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [] => {}
        ["click"] => source.on_primary_click(),
        ["rclick"] => source.on_secondary_click(),
        ["drag-start"] => source.on_drag_start(),
        ["drag-end"] => source.on_drag_end(),
        ["drag", rest @ ..] => match parse_point(rest) {
            Some(p) => source.on_drag_move(p),
            None => warn!("usage: drag X Y"),
        },
        ["move", rest @ ..] => match parse_point(rest) {
            Some(p) => source.on_pointer_move(p),
            None => warn!("usage: move X Y"),
        },
        ["guide", rest @ ..] => match parse_point(rest) {
            Some(p) => source.request_guide(p),
            None => warn!("usage: guide X Y"),
        },
        ["quit"] | ["exit"] => return false,
        _ => warn!(command = line, "unrecognized command"),
    }
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let layout = cli.load_layout()?;
    info!(
        icons = layout.icons.len(),
        width = layout.screen.width,
        height = layout.screen.height,
        "desktop layout ready"
    );

    // One-time host window setup; the engine does not depend on the outcome.
    desk_sprite_core::setup_overlay(&LoggingWindow, &OverlayOptions::default());

    let (engine, mut events, handle) =
        Engine::new(cli.to_config(), Box::new(StaticDesktop::new(layout)))
            .context("building pet engine")?;
    let mut source = engine.source();
    let verbose = cli.verbose;

    let engine_task = tokio::spawn(engine.run());

    let consumer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            match event {
                EngineEvent::Started => info!("pet is awake"),
                EngineEvent::StateChanged { from, to } => {
                    info!(%from, %to, "state change");
                }
                EngineEvent::Frame(view) => {
                    if verbose {
                        if view.speech_visible {
                            info!(pos = %view.position, state = %view.state, speech = %view.speech_text, "frame");
                        } else {
                            info!(pos = %view.position, state = %view.state, "frame");
                        }
                    }
                }
                EngineEvent::Stopped => {
                    info!("pet went home");
                    break;
                }
            }
        }
    });

    if let Some(secs) = cli.duration {
        let timer_handle = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(secs)).await;
            timer_handle.cancel();
        });
    }

    let ctrlc_handle = handle.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrlc_handle.cancel();
        }
    });

    // stdin command loop; EOF or "quit" stops the pet.
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !handle.is_cancelled() {
        tokio::select! {
            line = lines.next_line() => {
                match line {
                    Ok(Some(text)) => {
                        if !dispatch_command(&mut source, &text) {
                            break;
                        }
                    }
                    Ok(None) | Err(_) => break,
                }
            }
            _ = tokio::time::sleep(Duration::from_millis(200)) => {
                // Re-check cancellation while stdin is quiet.
            }
        }
    }
    handle.cancel();

    engine_task.await.context("engine task")??;
    consumer.await.context("consumer task")?;
    Ok(())
}
