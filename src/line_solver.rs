use log::debug;
use serde::{Deserialize, Serialize};

use crate::hop::{Hop, Transfer};
use crate::hop_expander::expand_transfer;
use crate::peg::{Peg, RequestError, FIRST_HOME, LAST_HOME};
use crate::peg_state::PegState;
use crate::scratch_selector::select_scratch_peg;

/// Largest tower the front-ends accept.  The solver itself takes any size.
pub const MAX_DISK_COUNT: u32 = 9;

#[derive(Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
  pub disk_count: u32,
  pub start: Peg,
  pub goal: Peg,
}

impl MoveRequest {
  pub fn new(disk_count: u32, start: Peg, goal: Peg) -> Result<Self, RequestError> {
    let request = Self { disk_count, start, goal };
    request.check()?;
    Ok(request)
  }

  /// The usual request: the whole tower from the first home peg to the last.
  pub fn home_to_home(disk_count: u32) -> Self {
    Self { disk_count, start: FIRST_HOME, goal: LAST_HOME }
  }

  pub fn check(&self) -> Result<(), RequestError> {
    if self.disk_count > 0 && self.start == self.goal {
      return Err(RequestError::SamePeg(self.start));
    }
    Ok(())
  }
}

pub struct LineSolution {
  pub transfers: Vec<Transfer>,
  pub required_hops: Vec<Hop>,
}

pub struct LineSolver;

impl LineSolver {
  pub fn solve(request: MoveRequest) -> Result<LineSolution, RequestError> {
    request.check()?;
    let transfers = plan_transfers(request.disk_count, request.start, request.goal)?;
    let required_hops = expand_all(&transfers)?;
    debug!(
      "{} disks {} => {}: {} transfers, {} hops",
      request.disk_count, request.start, request.goal, transfers.len(), required_hops.len());

    let solution = LineSolution { transfers, required_hops };
    if cfg!(debug_assertions) {
      LineSolver::validate_solution(&request, &solution);
    }
    Ok(solution)
  }

  fn validate_solution(request: &MoveRequest, solution: &LineSolution) {
    let initial = PegState::with_tower(request.start, request.disk_count);
    let done = initial.apply_prefix_checked(&solution.required_hops, solution.required_hops.len());
    let done = match done {
      Ok(done) => done,
      Err(e) => panic!("Generated an unplayable sequence for {request:?}: {e}"),
    };
    assert_eq!(done.stack(request.goal), initial.stack(request.start));
    assert_eq!(done.disk_count(), done.height(request.goal));
  }
}

enum Job {
  Tower { disk_count: u32, start: Peg, goal: Peg },
  Single(Transfer),
}

/// Logical single-disk moves for a tower of `disk_count`, in the order the classic recursion would
/// emit them: park the top `n - 1` disks on the scratch peg, move the bottom disk, bring the
/// `n - 1` back on top of it.  Driven by an explicit job stack so deep towers don't grow the call
/// stack.
pub fn plan_transfers(disk_count: u32, start: Peg, goal: Peg) -> Result<Vec<Transfer>, RequestError> {
  if disk_count == 0 {
    return Ok(Vec::new());
  }
  if start == goal {
    return Err(RequestError::SamePeg(start));
  }

  let mut transfers = Vec::new();
  let mut jobs = vec![Job::Tower { disk_count, start, goal }];
  while let Some(job) = jobs.pop() {
    match job {
      Job::Single(transfer) => transfers.push(transfer),
      Job::Tower { disk_count: 1, start, goal } => transfers.push(Transfer::new(start, goal)),
      Job::Tower { disk_count, start, goal } => {
        let scratch = select_scratch_peg(start, goal)?;
        // Popped in reverse order of pushing.
        jobs.push(Job::Tower { disk_count: disk_count - 1, start: scratch, goal });
        jobs.push(Job::Single(Transfer::new(start, goal)));
        jobs.push(Job::Tower { disk_count: disk_count - 1, start, goal: scratch });
      }
    }
  }
  Ok(transfers)
}

/// Every hop needed to carry `disk_count` disks from `start` to `goal`.
pub fn generate_moves(disk_count: u32, start: Peg, goal: Peg) -> Result<Vec<Hop>, RequestError> {
  expand_all(&plan_transfers(disk_count, start, goal)?)
}

fn expand_all(transfers: &[Transfer]) -> Result<Vec<Hop>, RequestError> {
  let mut hops = Vec::with_capacity(transfers.len() * 2);
  for transfer in transfers {
    hops.extend(expand_transfer(transfer.start, transfer.goal)?);
  }
  Ok(hops)
}
