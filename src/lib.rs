//! Hand landmark interpretation.
//!
//! This crate post-processes the 21 labeled keypoints that an external hand-pose
//! estimator produces for each frame: axis-aligned bounding boxes, per-finger
//! raised/lowered flags, distances between named landmarks, and clamped linear
//! range mapping, so that something like a volume slider can be driven from the
//! thumb-index pinch gap.
//!
//! Detection itself is out of scope. A detector hands each frame's keypoints to
//! [`hand::landmark::HandLandmarks::from_points`], and every operation here is a
//! pure function of that value; nothing is carried across frames.
//!
//! # Coordinates
//!
//! All positions are 2D pixel coordinates in the source image's coordinate
//! system: X points right, Y points *down*. The finger heuristics in
//! [`hand::gesture`] additionally assume an upright hand with the palm facing
//! the camera.

use log::LevelFilter;

pub mod hand;
pub mod landmark;
pub mod num;
pub mod rect;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_PKG_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and this library will log at *debug* level; other crates
/// follow the `RUST_LOG` environment variable.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
