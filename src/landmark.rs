//! Per-frame landmark storage.

use nalgebra::Point2;

/// An ordered collection of 2D landmark positions.
///
/// A detector fills one of these per frame. The length is fixed at creation;
/// which index carries which anatomical meaning is up to the schema layered on
/// top (see [`crate::hand::landmark`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Landmarks {
    positions: Box<[Point2<f32>]>,
}

impl Landmarks {
    /// Creates a new [`Landmarks`] collection containing `len` preallocated landmarks.
    ///
    /// All landmarks start at the origin.
    pub fn new(len: usize) -> Self {
        Self {
            positions: vec![Point2::origin(); len].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point2<f32>> + Clone + '_ {
        self.positions.iter().copied()
    }

    /// Returns the position of the landmark at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn position(&self, index: usize) -> Point2<f32> {
        self.positions[index]
    }

    pub fn set_position(&mut self, index: usize, position: Point2<f32>) {
        self.positions[index] = position;
    }

    pub fn positions(&self) -> &[Point2<f32>] {
        &self.positions
    }

    pub fn positions_mut(&mut self) -> &mut [Point2<f32>] {
        &mut self.positions
    }

    /// Applies `f` to every landmark position.
    ///
    /// This is how detector output in normalized image coordinates is brought
    /// into pixel coordinates: multiply every position by the frame size.
    pub fn map_positions(&mut self, mut f: impl FnMut(Point2<f32>) -> Point2<f32>) {
        for pos in self.positions_mut() {
            *pos = f(*pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::vector;

    use super::*;

    #[test]
    fn starts_at_origin() {
        let landmarks = Landmarks::new(4);
        assert_eq!(landmarks.len(), 4);
        assert!(landmarks.iter().all(|pos| pos == Point2::origin()));
    }

    #[test]
    fn map_positions_rescales() {
        let mut landmarks = Landmarks::new(2);
        landmarks.set_position(0, Point2::new(0.5, 0.25));
        landmarks.set_position(1, Point2::new(1.0, 1.0));

        // Normalized detector output to 640x480 pixel coordinates.
        landmarks.map_positions(|pos| {
            Point2::from(pos.coords.component_mul(&vector![640.0, 480.0]))
        });

        assert_eq!(landmarks.position(0), Point2::new(320.0, 120.0));
        assert_eq!(landmarks.position(1), Point2::new(640.0, 480.0));
    }

    #[test]
    #[should_panic]
    fn position_out_of_bounds() {
        Landmarks::new(3).position(3);
    }
}
