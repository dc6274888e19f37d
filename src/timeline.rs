use log::debug;

use crate::hop::Hop;
use crate::peg_state::{PegState, ReplayError};

pub const DEFAULT_CHECKPOINT_STRIDE: usize = 64;

/// The four quick-jump buttons of the stepper, as percentages of the whole sequence.
pub const DEFAULT_PERCENT_PRESETS: [u32; 4] = [70, 16, 64, 20];

/// A generated sequence plus a cursor into it.  Every `stride` hops a snapshot of the layout is
/// kept, so jumping anywhere costs at most `stride - 1` hops of replay.
pub struct Timeline {
  hops: Vec<Hop>,
  checkpoints: Vec<PegState>,
  stride: usize,
  position: usize,
}

impl Timeline {
  pub fn new(initial: PegState, hops: Vec<Hop>) -> Result<Self, ReplayError> {
    Self::with_stride(initial, hops, DEFAULT_CHECKPOINT_STRIDE)
  }

  /// Replays the whole sequence once up front, so a sequence that doesn't fit `initial` is
  /// rejected here rather than halfway through a seek.
  pub fn with_stride(initial: PegState, hops: Vec<Hop>, stride: usize) -> Result<Self, ReplayError> {
    let stride = stride.max(1);
    let mut checkpoints = vec![initial.clone()];
    let mut state = initial;
    for (chunk_index, chunk) in hops.chunks(stride).enumerate() {
      state.replay_in_place(chunk, chunk_index * stride, false)?;
      if chunk.len() == stride {
        checkpoints.push(state.clone());
      }
    }
    debug!("Timeline of {} hops with {} checkpoints", hops.len(), checkpoints.len());
    Ok(Self { hops, checkpoints, stride, position: 0 })
  }

  pub fn len(&self) -> usize {
    self.hops.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hops.is_empty()
  }

  pub fn hops(&self) -> &[Hop] {
    &self.hops
  }

  pub fn initial(&self) -> &PegState {
    &self.checkpoints[0]
  }

  pub fn stride(&self) -> usize {
    self.stride
  }

  pub fn position(&self) -> usize {
    self.position
  }

  pub fn state_at(&self, step: usize) -> Result<PegState, ReplayError> {
    if step > self.hops.len() {
      return Err(ReplayError::PrefixOutOfRange { requested: step, available: self.hops.len() });
    }
    let checkpoint = (step / self.stride).min(self.checkpoints.len() - 1);
    let base = checkpoint * self.stride;
    self.checkpoints[checkpoint].apply_prefix(&self.hops[base..], step - base)
  }

  pub fn current(&self) -> Result<PegState, ReplayError> {
    self.state_at(self.position)
  }

  pub fn seek(&mut self, step: usize) -> Result<PegState, ReplayError> {
    let state = self.state_at(step)?;
    self.position = step;
    Ok(state)
  }

  pub fn step_forward(&mut self) -> Result<PegState, ReplayError> {
    self.seek((self.position + 1).min(self.len()))
  }

  pub fn step_back(&mut self) -> Result<PegState, ReplayError> {
    self.seek(self.position.saturating_sub(1))
  }

  pub fn jump_to_start(&mut self) -> Result<PegState, ReplayError> {
    self.seek(0)
  }

  pub fn jump_to_end(&mut self) -> Result<PegState, ReplayError> {
    self.seek(self.len())
  }

  pub fn jump_to_percent(&mut self, percent: u32) -> Result<PegState, ReplayError> {
    self.seek(step_for_percent(percent, self.len()))
  }
}

/// Step that sits `percent` of the way through `len` hops.  Halves round to even, anything past
/// 100% lands on the last step.
pub fn step_for_percent(percent: u32, len: usize) -> usize {
  let step = (f64::from(percent) / 100.0 * len as f64).round_ties_even();
  (step as usize).min(len)
}
