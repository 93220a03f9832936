//! Interpretation of detected hand poses.
//!
//! [`landmark`] defines the 21-point hand landmark schema and the per-frame
//! keypoint set, [`gesture`] derives finger states and the pinch gap from it.

pub mod gesture;
pub mod landmark;
