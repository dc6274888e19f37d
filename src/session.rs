use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::ensure;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::line_solver::{LineSolver, MoveRequest, MAX_DISK_COUNT};
use crate::peg_state::PegState;
use crate::timeline::{Timeline, DEFAULT_CHECKPOINT_STRIDE};

/// Enough to rebuild a stepping session: the sequence is regenerated from the request rather than
/// stored.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct SessionState {
  pub request: MoveRequest,
  pub position: usize,
}

impl SessionState {
  pub fn new(request: MoveRequest, position: usize) -> Self {
    Self { request, position }
  }

  pub fn capture(request: MoveRequest, timeline: &Timeline) -> Self {
    Self::new(request, timeline.position())
  }

  pub fn load(state_in: impl AsRef<Path>) -> anyhow::Result<Self> {
    let file = File::open(state_in)?;
    let reader = BufReader::new(file);
    let state: SessionState = serde_json::from_reader(reader)?;
    state.request.check()?;
    ensure!(
      state.request.disk_count <= MAX_DISK_COUNT,
      "saved disk count must be between 0 and {MAX_DISK_COUNT}, got {}", state.request.disk_count);
    Ok(state)
  }

  pub fn save(&self, state_out: impl AsRef<Path>) -> anyhow::Result<()> {
    info!("Saving session to {}", state_out.as_ref().display());
    let file = File::create(state_out)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer(writer, self)?;
    Ok(())
  }

  /// Regenerates the sequence and puts the cursor back where it was.  A position past the end
  /// (hand-edited file, say) is pulled back to the last step.
  pub fn restore(&self) -> anyhow::Result<Timeline> {
    self.restore_with_stride(DEFAULT_CHECKPOINT_STRIDE)
  }

  pub fn restore_with_stride(&self, stride: usize) -> anyhow::Result<Timeline> {
    let solution = LineSolver::solve(self.request)?;
    let initial = PegState::with_tower(self.request.start, self.request.disk_count);
    let mut timeline = Timeline::with_stride(initial, solution.required_hops, stride)?;
    if self.position > timeline.len() {
      warn!("Saved position {} is past the end ({}), clamping", self.position, timeline.len());
    }
    timeline.seek(self.position.min(timeline.len()))?;
    Ok(timeline)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;
  use std::path::PathBuf;
  use std::process;

  use super::*;

  fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hanoi-line-{}-{name}.json", process::id()))
  }

  #[test]
  fn test_save_and_load() {
    let path = scratch_file("roundtrip");
    let state = SessionState::new(MoveRequest::home_to_home(4), 11);
    state.save(&path).unwrap();

    let loaded = SessionState::load(&path).unwrap();
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded, state);
  }

  #[test]
  fn test_file_format() {
    let state = SessionState::new(MoveRequest::home_to_home(2), 3);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "request": { "disk_count": 2, "start": 1, "goal": 8 },
        "position": 3,
      }));
  }

  #[test]
  fn test_restore_puts_cursor_back() {
    let timeline = SessionState::new(MoveRequest::home_to_home(3), 7).restore().unwrap();
    assert_eq!(timeline.len(), 22);
    assert_eq!(timeline.position(), 7);
  }

  #[test]
  fn test_restore_clamps_position() {
    let timeline = SessionState::new(MoveRequest::home_to_home(2), 500).restore().unwrap();
    assert_eq!(timeline.position(), 13);
  }

  #[test]
  fn test_load_rejects_bad_request() {
    let path = scratch_file("same-peg");
    fs::write(&path, r#"{"request":{"disk_count":3,"start":4,"goal":4},"position":0}"#).unwrap();
    let result = SessionState::load(&path);
    fs::remove_file(&path).unwrap();
    assert!(result.is_err());
  }

  #[test]
  fn test_load_rejects_oversized_tower() {
    let path = scratch_file("oversized");
    fs::write(&path, r#"{"request":{"disk_count":60,"start":1,"goal":8},"position":0}"#).unwrap();
    let result = SessionState::load(&path);
    fs::remove_file(&path).unwrap();
    assert!(result.is_err());
  }

  #[test]
  fn test_load_accepts_largest_tower() {
    let path = scratch_file("largest");
    let state = SessionState::new(MoveRequest::home_to_home(MAX_DISK_COUNT), 0);
    state.save(&path).unwrap();
    let loaded = SessionState::load(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(loaded.unwrap(), state);
  }

  #[test]
  fn test_restore_honours_stride() {
    let session = SessionState::new(MoveRequest::home_to_home(3), 9);
    let timeline = session.restore_with_stride(4).unwrap();
    assert_eq!(timeline.stride(), 4);
    assert_eq!(timeline.position(), 9);
    assert_eq!(session.restore().unwrap().stride(), DEFAULT_CHECKPOINT_STRIDE);
  }

  #[test]
  fn test_load_rejects_peg_off_the_line() {
    let path = scratch_file("off-line");
    fs::write(&path, r#"{"request":{"disk_count":3,"start":1,"goal":9},"position":0}"#).unwrap();
    let result = SessionState::load(&path);
    fs::remove_file(&path).unwrap();
    assert!(result.is_err());
  }
}
