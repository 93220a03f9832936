//! The 21-point hand landmark schema and per-hand keypoint sets.

use itertools::Itertools;
use nalgebra::{center, distance, Point2};

use crate::{landmark::Landmarks, rect::Rect};

/// The number of landmarks that make up a hand pose.
pub const NUM_LANDMARKS: usize = 21;

/// Names for the hand pose landmarks.
///
/// The discriminants match the landmark indices produced by common hand pose
/// estimators: 0 is the wrist, 4/8/12/16/20 are the fingertips in thumb→pinky
/// order.
///
/// # Terminology
///
/// - **CMC**: [Carpometacarpal joint], the lowest joint of the thumb, located near the wrist.
/// - **MCP**: [Metacarpophalangeal joint], the lower joint forming the knuckles near the palm of
///   the hand.
/// - **IP**: Interphalangeal joint, the joint between the thumb's MCP and tip.
/// - **PIP**: Proximal Interphalangeal joint, the joint between the MCP and DIP.
/// - **DIP**: Distal Interphalangeal joint, the highest joint of a finger.
/// - **Tip**: This landmark is just placed on the tip of the finger, above the DIP.
///
/// [Carpometacarpal joint]: https://en.wikipedia.org/wiki/Carpometacarpal_joint
/// [Metacarpophalangeal joint]: https://en.wikipedia.org/wiki/Metacarpophalangeal_joint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandmarkIdx {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexFingerMcp,
    IndexFingerPip,
    IndexFingerDip,
    IndexFingerTip,
    MiddleFingerMcp,
    MiddleFingerPip,
    MiddleFingerDip,
    MiddleFingerTip,
    RingFingerMcp,
    RingFingerPip,
    RingFingerDip,
    RingFingerTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// The fingertip landmarks, in thumb→pinky order.
pub const FINGERTIPS: [LandmarkIdx; 5] = {
    use LandmarkIdx::*;
    [ThumbTip, IndexFingerTip, MiddleFingerTip, RingFingerTip, PinkyTip]
};

/// The landmarks of a single detected hand in a single frame.
///
/// Always holds exactly [`NUM_LANDMARKS`] positions. A frame without a detected
/// hand is expressed by the *absence* of this value (detectors return
/// `Option<HandLandmarks>`), never by an empty or partial set, so every method
/// on this type is total.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    landmarks: Landmarks,
}

impl Default for HandLandmarks {
    fn default() -> Self {
        Self {
            landmarks: Landmarks::new(NUM_LANDMARKS),
        }
    }
}

impl HandLandmarks {
    /// Builds a hand pose from per-frame detector output.
    ///
    /// # Panics
    ///
    /// Panics if `points` does not yield exactly [`NUM_LANDMARKS`] positions.
    /// A malformed keypoint list is a bug in the upstream detector glue, not a
    /// runtime condition to recover from.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point2<f32>>,
    {
        let mut landmarks = Landmarks::new(NUM_LANDMARKS);
        for (slot, point) in landmarks.positions_mut().iter_mut().zip_eq(points) {
            *slot = point.into();
        }
        Self { landmarks }
    }

    /// Returns a landmark's position in the input image's coordinate system.
    pub fn position(&self, index: LandmarkIdx) -> Point2<f32> {
        self.landmarks.position(index as usize)
    }

    /// Returns all 21 landmark positions, in schema order.
    pub fn positions(&self) -> impl Iterator<Item = Point2<f32>> + Clone + '_ {
        self.landmarks.iter()
    }

    pub fn landmarks(&self) -> &Landmarks {
        &self.landmarks
    }

    pub fn landmarks_mut(&mut self) -> &mut Landmarks {
        &mut self.landmarks
    }

    /// Computes the axis-aligned bounding rectangle of all 21 landmarks.
    pub fn bounding_rect(&self) -> Rect {
        Rect::bounding(self.positions()).unwrap()
    }

    /// Measures the segment between two named landmarks.
    pub fn span(&self, a: LandmarkIdx, b: LandmarkIdx) -> Span {
        Span::between(self.position(a), self.position(b))
    }

    /// Measures the gap between thumb tip and index fingertip.
    ///
    /// This is the distance a pinch gesture controls.
    pub fn pinch_gap(&self) -> Span {
        self.span(LandmarkIdx::ThumbTip, LandmarkIdx::IndexFingerTip)
    }
}

/// A measured segment between two landmarks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    length: f32,
    midpoint: Point2<f32>,
    endpoints: [Point2<f32>; 2],
}

impl Span {
    fn between(a: Point2<f32>, b: Point2<f32>) -> Self {
        Self {
            length: distance(&a, &b),
            midpoint: center(&a, &b),
            endpoints: [a, b],
        }
    }

    /// The Euclidean distance between the two endpoints.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    /// The arithmetic mean of the two endpoints.
    #[inline]
    pub fn midpoint(&self) -> Point2<f32> {
        self.midpoint
    }

    #[inline]
    pub fn endpoints(&self) -> [Point2<f32>; 2] {
        self.endpoints
    }
}
