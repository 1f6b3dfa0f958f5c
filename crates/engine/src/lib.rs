//! Engine crate - drives games without a display
//!
//! - [`session`]: the controller loop (line-clear cascade, respawn, pacing, restart)
//! - [`place`]: move the falling shape to a target column and orientation, then drop
//! - [`policy`]: pick placements by scoring the settled board

pub mod place;
pub mod policy;
pub mod session;

pub use place::{apply_place, landing_shape, PlaceError, PIVOT_COLUMNS};
pub use policy::{BoardFeatures, HeuristicPolicy, Placement, Weights};
pub use session::{Session, SessionConfig, SessionStats};
