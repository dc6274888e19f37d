use std::fmt;
use std::fmt::{Display, Formatter};

use derive_new::new;
use serde::{Deserialize, Serialize};

use crate::peg::Peg;

/// Move the top disk of `from` onto `to`.  Hops carry no size information, whether the move is
/// legal is up to whoever produced the sequence.
#[derive(new, Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct Hop {
  pub from: Peg,
  pub to: Peg,
}

impl Hop {
  /// Signed number of pegs travelled.
  pub fn displacement(&self) -> i64 {
    self.from.displacement_to(self.to)
  }

  pub fn magnitude(&self) -> u64 {
    self.displacement().unsigned_abs()
  }
}

impl Display for Hop {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.from, self.to)
  }
}

/// One logical single-disk move between two pegs, before it is broken into hops.
#[derive(new, Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct Transfer {
  pub start: Peg,
  pub goal: Peg,
}

impl Display for Transfer {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} => {}", self.start, self.goal)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn peg(id: i64) -> Peg {
    Peg::new(id).unwrap()
  }

  #[test]
  fn test_magnitude_is_direction_agnostic() {
    assert_eq!(Hop::new(peg(1), peg(3)).magnitude(), 2);
    assert_eq!(Hop::new(peg(8), peg(6)).magnitude(), 2);
    assert_eq!(Hop::new(peg(8), peg(6)).displacement(), -2);
    assert_eq!(Hop::new(peg(4), peg(5)).displacement(), 1);
  }

  #[test]
  fn test_display() {
    assert_eq!(Hop::new(peg(1), peg(3)).to_string(), "1 -> 3");
    assert_eq!(Transfer::new(peg(2), peg(7)).to_string(), "2 => 7");
  }

  #[test]
  fn test_hop_json_shape() {
    let json = serde_json::to_string(&Hop::new(peg(6), peg(7))).unwrap();
    assert_eq!(json, r#"{"from":6,"to":7}"#);
  }
}
