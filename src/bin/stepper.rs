//! Step through a generated sequence and print the layout after any number of hops.
//!
//! Positions can be picked a few ways:
//!
//! 1. An exact step (`--step 12`)
//! 2. A percentage of the whole sequence (`--percent 50`)
//! 3. One of the four preset percentages (`--preset 2`)
//! 4. The very end (`--end`)
//!
//! With `--state-out` the session is saved so a later run can pick up with `--state-in`.

use std::path::PathBuf;

use anyhow::{anyhow, ensure};
use clap::Parser;
use log::info;

use hanoi_line::layout_printer::LayoutPrinter;
use hanoi_line::line_solver::{LineSolver, MoveRequest, MAX_DISK_COUNT};
use hanoi_line::peg::Peg;
use hanoi_line::peg_state::PegState;
use hanoi_line::session::SessionState;
use hanoi_line::timeline::{Timeline, DEFAULT_CHECKPOINT_STRIDE, DEFAULT_PERCENT_PRESETS};

#[derive(Parser, Debug)]
#[clap(name = "stepper")]
struct Opts {
    #[clap(short = 'n', long, default_value = "8")]
    disk_count: u32,

    #[clap(short, long, default_value = "1")]
    start: i64,

    #[clap(short, long, default_value = "8")]
    goal: i64,

    /// Show the layout after this many hops
    #[clap(long)]
    step: Option<usize>,

    /// Show the layout this far (in percent) through the sequence
    #[clap(long)]
    percent: Option<u32>,

    /// Jump to one of the preset percentages (1-based)
    #[clap(long)]
    preset: Option<usize>,

    /// Comma separated percentages for --preset (default 70,16,64,20)
    #[clap(long, use_value_delimiter = true)]
    presets: Vec<u32>,

    /// Show the layout after the last hop
    #[clap(long)]
    end: bool,

    /// Print disk colours next to their ranks
    #[clap(long)]
    colours: bool,

    #[clap(long, default_value_t = DEFAULT_CHECKPOINT_STRIDE)]
    stride: usize,

    #[clap(long)]
    state_in: Option<PathBuf>,

    #[clap(long)]
    state_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let (request, mut timeline) = match &opts.state_in {
        Some(state_in) => {
            info!("Resuming session from {}", state_in.display());
            let session = SessionState::load(state_in)?;
            (session.request, session.restore_with_stride(opts.stride)?)
        }
        None => {
            ensure!(
                opts.disk_count <= MAX_DISK_COUNT,
                "disk count must be between 0 and {MAX_DISK_COUNT}, got {}", opts.disk_count);
            let request = MoveRequest::new(opts.disk_count, Peg::new(opts.start)?, Peg::new(opts.goal)?)?;
            (request, new_timeline(request, opts.stride)?)
        }
    };

    let state = navigate(&opts, &mut timeline)?;
    println!("Move {} of {}", timeline.position(), timeline.len());
    LayoutPrinter::new(opts.colours).pretty_print(&state);

    if let Some(state_out) = &opts.state_out {
        SessionState::capture(request, &timeline).save(state_out)?;
    }
    Ok(())
}

fn new_timeline(request: MoveRequest, stride: usize) -> anyhow::Result<Timeline> {
    let solution = LineSolver::solve(request)?;
    let initial = PegState::with_tower(request.start, request.disk_count);
    Ok(Timeline::with_stride(initial, solution.required_hops, stride)?)
}

fn navigate(opts: &Opts, timeline: &mut Timeline) -> anyhow::Result<PegState> {
    let state = if opts.end {
        timeline.jump_to_end()?
    } else if let Some(step) = opts.step {
        timeline.seek(step)?
    } else if let Some(percent) = opts.percent {
        timeline.jump_to_percent(percent)?
    } else if let Some(preset) = opts.preset {
        let presets: &[u32] = if opts.presets.is_empty() {
            &DEFAULT_PERCENT_PRESETS
        } else {
            &opts.presets
        };
        let percent = preset.checked_sub(1)
            .and_then(|i| presets.get(i))
            .ok_or_else(|| anyhow!("no preset #{preset}, have {}", presets.len()))?;
        timeline.jump_to_percent(*percent)?
    } else {
        timeline.current()?
    };
    Ok(state)
}
