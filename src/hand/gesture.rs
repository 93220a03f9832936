//! Finger-state heuristics and pinch mapping.
//!
//! Everything in here is a frame-local pure function of a [`HandLandmarks`]
//! value. The up/down heuristics compare raw landmark coordinates and assume an
//! upright hand with the palm facing the camera (fingers pointing roughly
//! upward in image coordinates); a rotated or back-facing hand will be
//! misclassified. The hand's actual orientation is never validated here.

use std::ops::RangeInclusive;

use crate::num::map_range;

use super::landmark::{HandLandmarks, LandmarkIdx};

/// The five fingers, in landmark-schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    /// All fingers, thumb first.
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// The fingertip landmark of this finger.
    pub fn tip(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbTip,
            Finger::Index => LandmarkIdx::IndexFingerTip,
            Finger::Middle => LandmarkIdx::MiddleFingerTip,
            Finger::Ring => LandmarkIdx::RingFingerTip,
            Finger::Pinky => LandmarkIdx::PinkyTip,
        }
    }

    /// The joint the raised-finger heuristic compares the tip against: the IP
    /// joint for the thumb (one landmark below the tip), the PIP joint for the
    /// other fingers (two below).
    fn flex_reference(self) -> LandmarkIdx {
        match self {
            Finger::Thumb => LandmarkIdx::ThumbIp,
            Finger::Index => LandmarkIdx::IndexFingerPip,
            Finger::Middle => LandmarkIdx::MiddleFingerPip,
            Finger::Ring => LandmarkIdx::RingFingerPip,
            Finger::Pinky => LandmarkIdx::PinkyPip,
        }
    }
}

/// Per-finger raised/lowered flags, thumb first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FingerState([bool; 5]);

impl FingerState {
    pub fn is_up(&self, finger: Finger) -> bool {
        self.0[finger as usize]
    }

    /// The number of raised fingers.
    pub fn count_up(&self) -> usize {
        self.0.iter().filter(|up| **up).count()
    }

    /// The raw flags, in thumb→pinky order.
    pub fn flags(&self) -> [bool; 5] {
        self.0
    }
}

impl HandLandmarks {
    /// Computes which fingers are raised.
    ///
    /// The four non-thumb fingers count as raised when their tip sits *above*
    /// their PIP joint (smaller Y, since Y grows downward); they flex
    /// vertically in the assumed upright pose. The thumb flexes laterally, so
    /// its flag compares X instead: raised when the tip sits left of the IP
    /// joint.
    ///
    /// The thumb flag and [`HandLandmarks::thumb_up`] answer different
    /// questions on different axes (relative lateral flexion vs. absolute
    /// vertical position) and may disagree for the same pose. Both heuristics
    /// are kept as-is.
    pub fn fingers_up(&self) -> FingerState {
        FingerState(Finger::ALL.map(|finger| {
            let tip = self.position(finger.tip());
            let joint = self.position(finger.flex_reference());
            match finger {
                Finger::Thumb => tip.x < joint.x,
                _ => tip.y < joint.y,
            }
        }))
    }

    /// Whether the thumb tip sits above the wrist (smaller Y in image
    /// coordinates).
    pub fn thumb_up(&self) -> bool {
        self.position(LandmarkIdx::ThumbTip).y < self.position(LandmarkIdx::Wrist).y
    }

    /// The complement of [`HandLandmarks::thumb_up`]: the thumb tip sits at or
    /// below the wrist.
    pub fn thumb_down(&self) -> bool {
        !self.thumb_up()
    }
}

/// Maps the thumb-index pinch gap onto control ranges.
///
/// A gauge holds the pixel range the pinch gap is expected to move in; gaps
/// outside it clamp to the nearest bound. Typical targets are a volume span in
/// dB (e.g. −65.25..=0), an on-screen bar height (an inverted range like
/// 400..=150), or a percentage.
#[derive(Debug, Clone)]
pub struct PinchGauge {
    gap: RangeInclusive<f32>,
}

impl PinchGauge {
    /// The default pinch-gap pixel range, suited to a hand at arm's length in
    /// a 640x480 camera frame.
    pub const DEFAULT_GAP: RangeInclusive<f32> = 50.0..=300.0;

    /// Creates a gauge for pinch gaps in the given pixel range.
    ///
    /// # Panics
    ///
    /// Panics if `gap` is empty or degenerate.
    pub fn new(gap: RangeInclusive<f32>) -> Self {
        assert!(
            gap.start() < gap.end(),
            "invalid pinch gap range {}..={}",
            gap.start(),
            gap.end(),
        );
        Self { gap }
    }

    /// Measures the hand's pinch gap and maps it onto `target`.
    pub fn map(&self, hand: &HandLandmarks, target: RangeInclusive<f32>) -> f32 {
        let gap = hand.pinch_gap().length();
        let value = map_range(gap, self.gap.clone(), target);
        log::trace!("pinch gap {gap:.1}px -> {value:.2}");
        value
    }

    /// Normalized pinch level: 0.0 fully pinched, 1.0 fully open.
    pub fn level(&self, hand: &HandLandmarks) -> f32 {
        self.map(hand, 0.0..=1.0)
    }
}

impl Default for PinchGauge {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GAP)
    }
}
