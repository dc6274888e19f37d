use anyhow::ensure;
use clap::Parser;
use log::info;

use hanoi_line::line_solver::{LineSolver, MoveRequest, MAX_DISK_COUNT};
use hanoi_line::peg::Peg;

#[derive(Parser, Debug)]
#[clap(name = "moves_generator")]
struct Opts {
  #[clap(short = 'n', long, default_value = "8")]
  disk_count: u32,

  #[clap(short, long, default_value = "1")]
  start: i64,

  #[clap(short, long, default_value = "8")]
  goal: i64,

  /// Print the logical single-disk transfers instead of the expanded hops
  #[clap(long)]
  logical: bool,

  /// Emit the hop list as JSON
  #[clap(long)]
  json: bool,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let opts: Opts = Opts::parse();

  ensure!(
    opts.disk_count <= MAX_DISK_COUNT,
    "disk count must be between 0 and {MAX_DISK_COUNT}, got {}", opts.disk_count);

  let request = MoveRequest::new(opts.disk_count, Peg::new(opts.start)?, Peg::new(opts.goal)?)?;
  let solution = LineSolver::solve(request)?;
  info!(
    "{} transfers expanded to {} hops",
    solution.transfers.len(), solution.required_hops.len());

  if opts.logical {
    if opts.json {
      println!("{}", serde_json::to_string(&solution.transfers)?);
    } else {
      for transfer in solution.transfers {
        println!("{} {}", transfer.start, transfer.goal);
      }
    }
  } else if opts.json {
    println!("{}", serde_json::to_string(&solution.required_hops)?);
  } else {
    for hop in solution.required_hops {
      println!("{} {}", hop.from, hop.to);
    }
  }
  Ok(())
}
