use crate::peg::{Peg, RequestError};

/// Pick the peg that parks the smaller disks while the bottom disk of a sub-tower travels from
/// `start` to `goal`.
///
/// Leaving a home peg we park on the peg right next to it, unless the goal *is* that peg, in which
/// case we overshoot one past the goal.  From an ordinary peg we always step back, away from the
/// direction of travel.
pub fn select_scratch_peg(start: Peg, goal: Peg) -> Result<Peg, RequestError> {
  if start == goal {
    return Err(RequestError::SamePeg(start));
  }
  let direction = start.direction_to(goal);
  if start.is_home() {
    if start.displacement_to(goal).abs() > 1 {
      start.offset(direction)
    } else {
      start.offset(2 * direction)
    }
  } else {
    start.offset(-direction)
  }
}
