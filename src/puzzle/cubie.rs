//! The cubie store: 26 movable sub-cubes with positions, orientations, and
//! sticker colors.

use std::ops::{Index, IndexMut};

use cgmath::{Matrix3, SquareMatrix, Vector3};
use itertools::{iproduct, Itertools};
use smallvec::SmallVec;

use super::{Axis, Color, Face, Sign};

/// Distance between adjacent cubie centers when rendered. Cubie positions
/// are kept in lattice units internally; only [`Cubie::render_position()`]
/// applies this scale.
pub const CUBE_SPACING: f32 = 1.01;

/// Sticker colors of one cubie, keyed by logical face. Interior faces are
/// `None` and are never assigned a color by any operation.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceColors([Option<Color>; 6]);
impl Index<Face> for FaceColors {
    type Output = Option<Color>;
    fn index(&self, face: Face) -> &Option<Color> {
        &self.0[face.index()]
    }
}
impl IndexMut<Face> for FaceColors {
    fn index_mut(&mut self, face: Face) -> &mut Option<Color> {
        &mut self.0[face.index()]
    }
}
impl FaceColors {
    /// Returns the solved sticker assignment for the cubie at the given
    /// lattice position: each axis with a nonzero coordinate contributes the
    /// fixed color of the face it points at; axes with coordinate 0
    /// contribute nothing.
    pub fn solved_at(lattice: Vector3<i32>) -> FaceColors {
        let mut ret = FaceColors::default();
        for face in Face::iter() {
            if lattice[face.axis().int()] == face.sign().int() {
                ret[face] = Some(face.solved_color());
            }
        }
        ret
    }

    /// Permutes the sticker labels to reflect `quarter_turns` physical
    /// 90-degree rotations of the cubie about `axis` (right-handed about the
    /// positive axis; negative counts turn the other way). The two faces on
    /// the rotation axis are unchanged.
    pub fn rotate_about(&mut self, axis: Axis, quarter_turns: i32) {
        for _ in 0..quarter_turns.rem_euclid(4) {
            *self = self.rotated_once(axis);
        }
    }
    /// One positive quarter turn of the sticker labels about `axis`. Each
    /// axis has a single canonical four-cycle; direction is just how many
    /// times it is applied.
    fn rotated_once(self, axis: Axis) -> FaceColors {
        let mut next = self;
        match axis {
            // +X carries up -> front -> down -> back.
            Axis::X => {
                next[Face::F] = self[Face::U];
                next[Face::D] = self[Face::F];
                next[Face::B] = self[Face::D];
                next[Face::U] = self[Face::B];
            }
            // +Y carries front -> right -> back -> left.
            Axis::Y => {
                next[Face::R] = self[Face::F];
                next[Face::B] = self[Face::R];
                next[Face::L] = self[Face::B];
                next[Face::F] = self[Face::L];
            }
            // +Z carries right -> up -> left -> down.
            Axis::Z => {
                next[Face::U] = self[Face::R];
                next[Face::L] = self[Face::U];
                next[Face::D] = self[Face::L];
                next[Face::R] = self[Face::D];
            }
        }
        next
    }

    /// Returns the colors present on this cubie, in face-index order.
    pub fn present(&self) -> SmallVec<[Color; 3]> {
        self.0.iter().copied().flatten().collect()
    }
}

/// One of the 26 movable unit cubes composing the 3x3x3 puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubie {
    /// Center of the cubie in lattice units. Each component is an exact
    /// integer in {-1, 0, 1} at rest; fractional values occur only while a
    /// rotation is being animated.
    pub position: Vector3<f32>,
    /// Rotation of the cubie relative to its solved orientation. An exact
    /// signed permutation matrix (every entry in {-1, 0, 1}) at rest.
    pub orientation: Matrix3<f32>,
    /// Sticker colors, keyed by logical face.
    pub face_colors: FaceColors,
}
impl Cubie {
    fn new(lattice: Vector3<i32>) -> Cubie {
        Cubie {
            position: Vector3::new(lattice.x as f32, lattice.y as f32, lattice.z as f32),
            orientation: Matrix3::identity(),
            face_colors: FaceColors::solved_at(lattice),
        }
    }

    /// Returns the position rounded to the nearest lattice point.
    pub fn lattice_position(&self) -> Vector3<i32> {
        Vector3::new(
            self.position.x.round() as i32,
            self.position.y.round() as i32,
            self.position.z.round() as i32,
        )
    }
    /// Returns the position scaled by [`CUBE_SPACING`], for the render
    /// collaborator.
    pub fn render_position(&self) -> Vector3<f32> {
        self.position * CUBE_SPACING
    }

    /// Rounds the position to exact lattice coordinates and the orientation
    /// to an exact signed permutation matrix, removing the floating-point
    /// drift accumulated over an animation's many small steps.
    pub(super) fn snap(&mut self) {
        self.position = self.position.map(f32::round);
        self.orientation = Matrix3::from_cols(
            self.orientation.x.map(f32::round),
            self.orientation.y.map(f32::round),
            self.orientation.z.map(f32::round),
        );
    }

    /// Returns the number of stickers on this cubie: 3 for a corner, 2 for
    /// an edge, 1 for a center.
    pub fn sticker_count(&self) -> usize {
        self.face_colors.present().len()
    }
    /// Returns this cubie's piece signature: its present color letters,
    /// sorted and concatenated. Two cubies with the same signature are
    /// indistinguishable to the validator.
    pub fn signature(&self) -> String {
        self.face_colors
            .present()
            .into_iter()
            .map(Color::letter)
            .sorted()
            .collect()
    }
}

/// The cubie store: the 26 movable cubies of one 3x3x3 cube. The true
/// geometric center is omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    cubies: Vec<Cubie>,
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Index<usize> for Cube {
    type Output = Cubie;
    fn index(&self, i: usize) -> &Cubie {
        &self.cubies[i]
    }
}
impl IndexMut<usize> for Cube {
    fn index_mut(&mut self, i: usize) -> &mut Cubie {
        &mut self.cubies[i]
    }
}
impl Cube {
    /// Constructs a solved cube: every lattice point in {-1, 0, 1}^3 except
    /// the origin, with exterior faces colored by the fixed axis-to-color
    /// convention.
    pub fn new() -> Cube {
        let mut cubies = Vec::with_capacity(26);
        for (x, y, z) in iproduct!(-1..=1, -1..=1, -1..=1) {
            let lattice = Vector3::new(x, y, z);
            if lattice == Vector3::new(0, 0, 0) {
                continue;
            }
            cubies.push(Cubie::new(lattice));
        }
        Cube { cubies }
    }

    /// Returns all cubies.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }
    /// Returns the cubie at index `i`, or `None` if out of range.
    pub fn get(&self, i: usize) -> Option<&Cubie> {
        self.cubies.get(i)
    }
    /// Returns the cubie at index `i` mutably, or `None` if out of range.
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Cubie> {
        self.cubies.get_mut(i)
    }
    /// Returns the index of the cubie whose position rounds to the given
    /// lattice point.
    pub fn cubie_at(&self, lattice: Vector3<i32>) -> Option<usize> {
        self.cubies
            .iter()
            .position(|cubie| cubie.lattice_position() == lattice)
    }

    /// Returns the indices of the cubies in the given layer: those whose
    /// position component along `axis` rounds to the layer coordinate.
    /// For a cube at rest this is 9 for the face layers and 8 for the
    /// middle slice (the origin is not a cubie). An empty result is logged
    /// and treated as a no-op by callers.
    pub fn layer(&self, axis: Axis, layer: Sign) -> Vec<usize> {
        let ret: Vec<usize> = self
            .cubies
            .iter()
            .positions(|cubie| cubie.position[axis.int()].round() as i32 == layer.int())
            .collect();
        if ret.is_empty() {
            log::warn!("no cubies found for layer {axis:?} = {}", layer.int());
        }
        ret
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn solved_cube_has_26_cubies_with_expected_sticker_counts() {
        let cube = Cube::new();
        assert_eq!(26, cube.cubies().len());
        assert_eq!(None, cube.cubie_at(Vector3::new(0, 0, 0)));

        let count_with = |n| cube.cubies().iter().filter(|c| c.sticker_count() == n).count();
        assert_eq!(6, count_with(1)); // centers
        assert_eq!(12, count_with(2)); // edges
        assert_eq!(8, count_with(3)); // corners
    }

    #[test]
    fn every_layer_holds_nine_cubies_and_layers_partition_the_cube() {
        let cube = Cube::new();
        for axis in Axis::iter() {
            let mut seen = HashSet::new();
            for sign in Sign::iter() {
                let layer = cube.layer(axis, sign);
                let expected = if sign.is_zero() { 8 } else { 9 };
                assert_eq!(expected, layer.len());
                for i in layer {
                    assert!(seen.insert(i), "layers overlap");
                }
            }
            assert_eq!(26, seen.len());
        }
    }

    #[test]
    fn sticker_rotation_round_trips() {
        let corner = FaceColors::solved_at(Vector3::new(1, 1, 1));
        for axis in Axis::iter() {
            let mut colors = corner;
            colors.rotate_about(axis, 1);
            assert_ne!(corner, colors);
            colors.rotate_about(axis, -1);
            assert_eq!(corner, colors);

            let mut colors = corner;
            colors.rotate_about(axis, 4);
            assert_eq!(corner, colors);
        }
    }

    #[test]
    fn interior_faces_stay_absent_through_rotation() {
        let edge = FaceColors::solved_at(Vector3::new(1, 0, 1));
        assert_eq!(2, edge.present().len());
        let mut colors = edge;
        for _ in 0..4 {
            colors.rotate_about(Axis::Y, 1);
            assert_eq!(2, colors.present().len());
        }
    }
}
