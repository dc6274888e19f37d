use std::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of pegs on the line.  The scratch-peg heuristic is built around this exact value.
pub const PEG_COUNT: u8 = 8;

pub const FIRST_HOME: Peg = Peg(1);
pub const LAST_HOME: Peg = Peg(PEG_COUNT);

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RequestError {
  #[error("start and goal are both peg {0}")]
  SamePeg(Peg),

  #[error("peg {0} is off the line (expected 1..=8)")]
  PegOutOfRange(i64),
}

/// The two ends of a line of `peg_count` pegs are home pegs, everything in between is ordinary.
pub const fn is_home(id: u8, peg_count: u8) -> bool {
  id == 1 || id == peg_count
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Peg(u8);

impl Peg {
  pub fn new(id: i64) -> Result<Self, RequestError> {
    if !(1..=i64::from(PEG_COUNT)).contains(&id) {
      return Err(RequestError::PegOutOfRange(id));
    }
    Ok(Peg(id as u8))
  }

  pub fn id(self) -> u8 {
    self.0
  }

  /// Zero-based position, handy for indexing per-peg storage.
  pub fn index(self) -> usize {
    usize::from(self.0 - 1)
  }

  pub fn is_home(self) -> bool {
    is_home(self.0, PEG_COUNT)
  }

  /// Signed distance from `self` to `other`.
  pub fn displacement_to(self, other: Peg) -> i64 {
    i64::from(other.0) - i64::from(self.0)
  }

  /// +1 when `other` lies to the right, -1 to the left, 0 if they are the same peg.
  pub fn direction_to(self, other: Peg) -> i64 {
    self.displacement_to(other).signum()
  }

  pub fn offset(self, delta: i64) -> Result<Peg, RequestError> {
    Peg::new(i64::from(self.0) + delta)
  }

  pub fn all() -> impl Iterator<Item = Peg> {
    (1..=PEG_COUNT).map(Peg)
  }
}

impl Display for Peg {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl TryFrom<i64> for Peg {
  type Error = RequestError;

  fn try_from(value: i64) -> Result<Self, Self::Error> {
    Peg::new(value)
  }
}

impl From<Peg> for u8 {
  fn from(peg: Peg) -> Self {
    peg.0
  }
}
