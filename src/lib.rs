pub mod peg;
pub mod hop;
pub mod scratch_selector;
pub mod hop_expander;
pub mod line_solver;
pub mod disk_palette;
pub mod peg_state;
pub mod timeline;
pub mod session;
pub mod layout_printer;

pub use hop::{Hop, Transfer};
pub use line_solver::{generate_moves, plan_transfers, LineSolution, LineSolver, MoveRequest};
pub use peg::{Peg, RequestError};
pub use peg_state::{Disk, PegState, ReplayError};
