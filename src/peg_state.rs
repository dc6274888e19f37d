use derive_new::new;
use log::trace;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::disk_palette::DiskColour;
use crate::hop::Hop;
use crate::peg::{Peg, PEG_COUNT};

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ReplayError {
  #[error("cannot replay {requested} hops of a {available}-hop sequence")]
  PrefixOutOfRange { requested: usize, available: usize },

  #[error("hop #{index} ({hop}) takes from an empty peg")]
  EmptySource { index: usize, hop: Hop },

  #[error("hop #{index} ({hop}) puts disk {moved} on top of smaller disk {below}")]
  OrderViolation { index: usize, hop: Hop, moved: u32, below: u32 },
}

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum LayoutError {
  #[error("layout names {0} pegs but the line only has 8")]
  TooManyPegs(usize),

  #[error("invalid disk count {0:?} in layout code")]
  InvalidDigit(char),
}

#[derive(new, Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Disk {
  pub rank: u32,
  pub colour: DiskColour,
}

/// Disks on every peg of the line, bottom first, so the last disk of each stack is the only one
/// that can move.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct PegState {
  stacks: Vec<Vec<Disk>>,
}

impl Default for PegState {
  fn default() -> Self {
    Self::empty()
  }
}

impl PegState {
  pub fn empty() -> Self {
    Self { stacks: vec![Vec::new(); usize::from(PEG_COUNT)] }
  }

  /// `disk_count` disks stacked on `peg`, everything else empty.
  pub fn with_tower(peg: Peg, disk_count: u32) -> Self {
    Self::with_tower_with_rng(peg, disk_count, &mut thread_rng())
  }

  pub fn with_tower_with_rng<R: Rng + ?Sized>(peg: Peg, disk_count: u32, rng: &mut R) -> Self {
    let mut state = Self::empty();
    state.stacks[peg.index()] = build_stack(peg, disk_count, rng);
    state
  }

  /// One disk count per peg, starting at peg 1.  Missing trailing entries are empty pegs.
  pub fn from_counts(counts: &[u32]) -> Result<Self, LayoutError> {
    Self::from_counts_with_rng(counts, &mut thread_rng())
  }

  pub fn from_counts_with_rng<R: Rng + ?Sized>(
      counts: &[u32],
      rng: &mut R,
  ) -> Result<Self, LayoutError> {
    if counts.len() > usize::from(PEG_COUNT) {
      return Err(LayoutError::TooManyPegs(counts.len()));
    }
    let mut state = Self::empty();
    for (peg, &count) in Peg::all().zip(counts) {
      state.stacks[peg.index()] = build_stack(peg, count, rng);
    }
    Ok(state)
  }

  /// Decimal digit per peg, e.g. `"30000000"` is three disks on the first peg.
  pub fn from_layout_code(code: &str) -> Result<Self, LayoutError> {
    Self::from_layout_code_with_rng(code, &mut thread_rng())
  }

  pub fn from_layout_code_with_rng<R: Rng + ?Sized>(
      code: &str,
      rng: &mut R,
  ) -> Result<Self, LayoutError> {
    let counts = code.trim()
        .chars()
        .map(|c| c.to_digit(10).ok_or(LayoutError::InvalidDigit(c)))
        .collect::<Result<Vec<_>, _>>()?;
    Self::from_counts_with_rng(&counts, rng)
  }

  pub fn stack(&self, peg: Peg) -> &[Disk] {
    &self.stacks[peg.index()]
  }

  pub fn top(&self, peg: Peg) -> Option<&Disk> {
    self.stack(peg).last()
  }

  pub fn height(&self, peg: Peg) -> usize {
    self.stack(peg).len()
  }

  pub fn disk_count(&self) -> usize {
    self.stacks.iter().map(Vec::len).sum()
  }

  pub fn iter(&self) -> impl Iterator<Item = (Peg, &[Disk])> + '_ {
    Peg::all().map(move |peg| (peg, self.stack(peg)))
  }

  /// Layout after the first `prefix_len` hops of `hops`.  `self` is left untouched.
  pub fn apply_prefix(&self, hops: &[Hop], prefix_len: usize) -> Result<PegState, ReplayError> {
    self.replay_prefix(hops, prefix_len, false)
  }

  /// Same as [`PegState::apply_prefix`] but refuses to put a disk on top of a smaller one.
  pub fn apply_prefix_checked(
      &self,
      hops: &[Hop],
      prefix_len: usize,
  ) -> Result<PegState, ReplayError> {
    self.replay_prefix(hops, prefix_len, true)
  }

  fn replay_prefix(
      &self,
      hops: &[Hop],
      prefix_len: usize,
      check_order: bool,
  ) -> Result<PegState, ReplayError> {
    if prefix_len > hops.len() {
      return Err(ReplayError::PrefixOutOfRange { requested: prefix_len, available: hops.len() });
    }
    let mut next = self.clone();
    next.replay_in_place(&hops[..prefix_len], 0, check_order)?;
    Ok(next)
  }

  /// Applies `hops` in order.  `first_index` is only used to number hops in errors.  On error the
  /// state holds every hop before the offending one.
  pub(crate) fn replay_in_place(
      &mut self,
      hops: &[Hop],
      first_index: usize,
      check_order: bool,
  ) -> Result<(), ReplayError> {
    for (offset, hop) in hops.iter().enumerate() {
      let index = first_index + offset;
      let moved = self.stacks[hop.from.index()]
          .last()
          .map(|d| d.rank)
          .ok_or(ReplayError::EmptySource { index, hop: *hop })?;
      if check_order {
        if let Some(below) = self.top(hop.to).map(|d| d.rank) {
          if below < moved {
            return Err(ReplayError::OrderViolation { index, hop: *hop, moved, below });
          }
        }
      }
      if let Some(disk) = self.stacks[hop.from.index()].pop() {
        trace!("#{index}: disk {} {hop}", disk.rank);
        self.stacks[hop.to.index()].push(disk);
      }
    }
    Ok(())
  }
}

/// Ranks follow `peg * 10 + depth`, depth 1 being the top disk, so the bottom disk is the widest.
fn build_stack<R: Rng + ?Sized>(peg: Peg, disk_count: u32, rng: &mut R) -> Vec<Disk> {
  let base = u32::from(peg.id()) * 10;
  (1..=disk_count)
      .rev()
      .map(|depth| Disk::new(base + depth, DiskColour::random(rng)))
      .collect()
}
