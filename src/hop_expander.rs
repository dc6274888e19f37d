use crate::hop::Hop;
use crate::peg::{Peg, RequestError};

/// Break one logical transfer into physical hops.  A disk leaving a home peg for anything but its
/// immediate neighbour jumps two pegs first, after that it walks one peg at a time.
pub fn expand_transfer(start: Peg, goal: Peg) -> Result<Vec<Hop>, RequestError> {
  if start == goal {
    return Err(RequestError::SamePeg(start));
  }
  let direction = start.direction_to(goal);
  let mut hops = Vec::with_capacity(start.displacement_to(goal).unsigned_abs() as usize);
  let mut current = start;

  if current.is_home() && current.displacement_to(goal).abs() != 1 {
    let landing = current.offset(2 * direction)?;
    hops.push(Hop::new(current, landing));
    current = landing;
  }

  while current != goal {
    let next = current.offset(direction)?;
    hops.push(Hop::new(current, next));
    current = next;
  }

  Ok(hops)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn peg(id: i64) -> Peg {
    Peg::new(id).unwrap()
  }

  fn pairs(hops: &[Hop]) -> Vec<(u8, u8)> {
    hops.iter().map(|h| (h.from.id(), h.to.id())).collect()
  }

  #[test]
  fn test_home_to_far_home_leads_with_double_hop() {
    let hops = expand_transfer(peg(1), peg(8)).unwrap();
    assert_eq!(pairs(&hops), vec![(1, 3), (3, 4), (4, 5), (5, 6), (6, 7), (7, 8)]);

    let hops = expand_transfer(peg(8), peg(1)).unwrap();
    assert_eq!(pairs(&hops), vec![(8, 6), (6, 5), (5, 4), (4, 3), (3, 2), (2, 1)]);
  }

  #[test]
  fn test_home_to_neighbour_is_single_hop() {
    assert_eq!(pairs(&expand_transfer(peg(1), peg(2)).unwrap()), vec![(1, 2)]);
    assert_eq!(pairs(&expand_transfer(peg(8), peg(7)).unwrap()), vec![(8, 7)]);
  }

  #[test]
  fn test_home_two_away_is_just_the_double_hop() {
    assert_eq!(pairs(&expand_transfer(peg(1), peg(3)).unwrap()), vec![(1, 3)]);
  }

  #[test]
  fn test_ordinary_start_walks() {
    assert_eq!(pairs(&expand_transfer(peg(5), peg(2)).unwrap()), vec![(5, 4), (4, 3), (3, 2)]);
    assert_eq!(pairs(&expand_transfer(peg(2), peg(1)).unwrap()), vec![(2, 1)]);
  }

  #[test]
  fn test_displacements_sum_to_transfer() {
    for start in Peg::all() {
      for goal in Peg::all().filter(|&g| g != start) {
        let hops = expand_transfer(start, goal).unwrap();
        let total: i64 = hops.iter().map(Hop::displacement).sum();
        assert_eq!(total, start.displacement_to(goal), "{start} -> {goal}");
        for (i, hop) in hops.iter().enumerate() {
          if i == 0 && start.is_home() {
            assert!(hop.magnitude() <= 2);
          } else {
            assert_eq!(hop.magnitude(), 1);
          }
        }
      }
    }
  }

  #[test]
  fn test_rejects_same_peg() {
    assert_eq!(expand_transfer(peg(3), peg(3)), Err(RequestError::SamePeg(peg(3))));
  }
}
