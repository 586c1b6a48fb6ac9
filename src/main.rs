//! Statusline runner (default binary).
//!
//! Reads the host's session JSON from stdin and prints the horse block, or
//! with `--animate` redraws it continuously. Whatever goes wrong, the exit
//! status is 0: a statusline must never break the host's display.

use std::io::{self, Write};
use std::time::SystemTime;

use anyhow::Result;
use clap::Parser;
use log::debug;

use ride_with_whip::core::{display_lines, unix_millis, FrameObserver, Track};
use ride_with_whip::diag::{DebugLog, DebugPaths};
use ride_with_whip::input::{read_payload, PayloadError};
use ride_with_whip::term::{prepare_console, run_animation, TerminalRenderer};
use ride_with_whip::types::PRODUCT_NAME;

/// Statusline plugin that displays an animated red galloping horse.
///
/// Reads JSON from stdin and prints a 4-line track with the horse on it.
/// The horse cycles through 8 gallop frames.
#[derive(Debug, Parser)]
#[command(
    name = "statusline",
    disable_version_flag = true,
    args_override_self = true,
    after_help = "Animation timing:\n  - Frame cycle: 250ms per frame\n  - Position: 500ms per step"
)]
struct Cli {
    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,

    /// Run continuous animation in terminal (press Ctrl+C to exit)
    #[arg(short, long)]
    animate: bool,

    /// Enable debug logging to track call timing and animation state
    #[arg(short, long)]
    debug: bool,
}

/// Flags the CLI understands. Anything else on the command line is dropped
/// before parsing, so an unknown flag never hides the known ones after it.
const KNOWN_FLAGS: [&str; 8] = [
    "-h",
    "--help",
    "-v",
    "--version",
    "-a",
    "--animate",
    "-d",
    "--debug",
];

/// Program name plus each known flag once, in first-seen order.
fn known_args(args: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut args = args.into_iter();
    let mut kept: Vec<String> = args.next().into_iter().collect();
    for arg in args {
        if KNOWN_FLAGS.contains(&arg.as_str()) && !kept[1..].contains(&arg) {
            kept.push(arg);
        }
    }
    kept
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = match Cli::try_parse_from(known_args(std::env::args())) {
        Ok(cli) => cli,
        Err(err) => {
            // --help lands here; print it and leave quietly.
            let _ = err.print();
            return;
        }
    };

    if cli.version {
        let _ = writeln!(io::stdout(), "{PRODUCT_NAME} v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if let Err(err) = run(&cli) {
        debug!("statusline gave up: {err:#}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    prepare_console();

    let track = Track::default();
    let mut term = TerminalRenderer::new();

    if cli.animate {
        return run_animation(&track, &mut term, None);
    }

    match read_payload(io::stdin().lock()) {
        Ok(Some(input)) => debug!("session payload for model {:?}", input.model.display_name),
        Ok(None) => debug!("no session payload"),
        Err(PayloadError::Read(err)) => {
            debug!("stdin unreadable, skipping render: {err}");
            return Ok(());
        }
        Err(err) => debug!("{err}; rendering defaults"),
    }

    let mut debug_log = if cli.debug {
        DebugLog::open(DebugPaths::temp())
            .map_err(|err| debug!("debug log unavailable: {err:#}"))
            .ok()
    } else {
        None
    };

    let observer = debug_log.as_mut().map(|log| log as &mut dyn FrameObserver);
    let rows = display_lines(&track, unix_millis(SystemTime::now()), observer);
    term.draw_status(&rows, track.filler())
}
