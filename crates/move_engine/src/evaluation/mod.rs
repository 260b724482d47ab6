//! Static position evaluation
//!
//! Scores a position from White's point of view using:
//! - Material count (piece values)
//! - Mobility (number of legal moves of the side to move)
//!
//! ## Module Organization
//!
//! - `material` - Material balance evaluation
//! - `position` - Full position evaluation (material + mobility)

mod material;
mod position;

pub use material::evaluate_material;
pub use position::{evaluate, evaluate_mobility};
