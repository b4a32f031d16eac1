//! Animated layer rotation, modeled as an explicit per-rotation state
//! machine driven by an external per-frame tick.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Matrix3, Rad, Vector3};

use super::{Axis, Cube, Move, Sign};

/// Angle advanced per animation tick, in radians.
pub const ROTATION_STEP: f32 = std::f32::consts::PI / 60.0;

/// Tolerance when deciding that the requested total angle has been reached.
pub const ANGLE_EPSILON: f32 = 1e-3;

/// Phase of an in-flight layer rotation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RotationPhase {
    /// Advancing the selected cubies by one angular step per tick.
    Animating,
    /// Rounding positions and orientations to exact rest values.
    Snapping,
    /// Permuting the affected cubies' sticker labels.
    Remapping,
    /// Finished; the cube is back at rest.
    Done,
}

/// A single 90-degree-multiple turn of one layer, animated over many ticks.
///
/// The rotation selects its layer once at construction, then advances
/// through `Animating -> Snapping -> Remapping -> Done`, one phase
/// transition per tick boundary. The final rest state is an exact quarter
/// turn of the prior rest state regardless of step size.
#[derive(Debug, Clone)]
pub struct LayerRotation {
    axis: Axis,
    layer: Sign,
    total_angle: f32,
    rotated: f32,
    pivot: Vector3<f32>,
    selected: Vec<usize>,
    phase: RotationPhase,
}
impl LayerRotation {
    /// Starts a rotation of the given layer by `total_angle` radians
    /// (right-handed about the positive axis; any multiple of 90 degrees).
    /// An empty layer selection produces an already-complete no-op.
    pub fn new(cube: &Cube, axis: Axis, layer: Sign, total_angle: f32) -> LayerRotation {
        let selected = cube.layer(axis, layer);
        let pivot = if selected.is_empty() {
            Vector3::new(0.0, 0.0, 0.0)
        } else {
            // Center of mass of the layer; the rotation axis passes through it.
            selected
                .iter()
                .fold(Vector3::new(0.0, 0.0, 0.0), |sum, &i| sum + cube[i].position)
                / selected.len() as f32
        };
        let phase = if selected.is_empty() {
            RotationPhase::Done
        } else {
            RotationPhase::Animating
        };
        LayerRotation {
            axis,
            layer,
            total_angle,
            rotated: 0.0,
            pivot,
            selected,
            phase,
        }
    }
    /// Starts the rotation described by a move.
    pub fn from_move(cube: &Cube, mv: Move) -> LayerRotation {
        Self::new(cube, mv.axis(), mv.layer(), mv.angle())
    }

    /// Returns the current phase.
    pub fn phase(&self) -> RotationPhase {
        self.phase
    }
    /// Returns whether the rotation has completed.
    pub fn is_done(&self) -> bool {
        self.phase == RotationPhase::Done
    }

    /// Advances the rotation by one frame and returns the phase it is in
    /// afterwards. Call once per frame until it reports
    /// [`RotationPhase::Done`].
    pub fn tick(&mut self, cube: &mut Cube) -> RotationPhase {
        match self.phase {
            RotationPhase::Animating => {
                let remaining = self.total_angle - self.rotated;
                let step = remaining.signum() * remaining.abs().min(ROTATION_STEP);
                let rot = Matrix3::from_axis_angle(self.axis.unit(), Rad(step));
                for &i in &self.selected {
                    let cubie = &mut cube[i];
                    cubie.position = self.pivot + rot * (cubie.position - self.pivot);
                    cubie.orientation = rot * cubie.orientation;
                }
                self.rotated += step;
                if (self.total_angle - self.rotated).abs() <= ANGLE_EPSILON {
                    self.phase = RotationPhase::Snapping;
                }
            }
            RotationPhase::Snapping => {
                for &i in &self.selected {
                    cube[i].snap();
                }
                self.phase = RotationPhase::Remapping;
            }
            RotationPhase::Remapping => {
                let quarter_turns = (self.total_angle / FRAC_PI_2).round() as i32;
                for &i in &self.selected {
                    cube[i].face_colors.rotate_about(self.axis, quarter_turns);
                }
                log::trace!(
                    "finished {quarter_turns} quarter turn(s) of layer {:?} = {}",
                    self.axis,
                    self.layer.int()
                );
                self.phase = RotationPhase::Done;
            }
            RotationPhase::Done => {}
        }
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{apply_move, apply_sequence};
    use super::super::Face;
    use super::*;

    #[test]
    fn four_turns_of_one_layer_are_the_identity() {
        for face in Face::iter() {
            let mut cube = Cube::new();
            for _ in 0..4 {
                apply_move(&mut cube, Move::cw(face));
            }
            assert_eq!(Cube::new(), cube, "4x {face} should be the identity");
        }
    }

    #[test]
    fn a_turn_and_its_inverse_round_trip() {
        for face in Face::iter() {
            let mut cube = Cube::new();
            apply_sequence(&mut cube, &[Move::cw(face), Move::ccw(face)]);
            assert_eq!(Cube::new(), cube);
        }
    }

    #[test]
    fn rest_state_is_exactly_quantized_after_a_turn() {
        let mut cube = Cube::new();
        apply_move(&mut cube, Move::cw(Face::R));
        for cubie in cube.cubies() {
            for i in 0..3 {
                let p = cubie.position[i];
                assert_eq!(p, p.round(), "position drifted: {p}");
                for j in 0..3 {
                    let m = cubie.orientation[i][j];
                    assert!(m == -1.0 || m == 0.0 || m == 1.0, "orientation drifted: {m}");
                }
            }
        }
    }

    #[test]
    fn quarter_turn_moves_a_corner_where_it_belongs() {
        let mut cube = Cube::new();
        let start = cube.cubie_at(Vector3::new(1, 1, 1)).expect("corner");
        apply_move(&mut cube, Move::cw(Face::R));
        // R clockwise carries the up-front-right corner to up-back-right.
        assert_eq!(Vector3::new(1, 1, -1), cube[start].lattice_position());

        // Its front sticker now faces up and its up sticker faces back, so
        // the labels must have followed.
        let colors = cube[start].face_colors;
        assert_eq!(Some(Face::F.solved_color()), colors[Face::U]);
        assert_eq!(Some(Face::U.solved_color()), colors[Face::B]);
        assert_eq!(Some(Face::R.solved_color()), colors[Face::R]);
        assert_eq!(None, colors[Face::F]);
    }

    #[test]
    fn phases_advance_one_per_tick_after_animation() {
        let mut cube = Cube::new();
        let mut rotation = LayerRotation::from_move(&cube, Move::cw(Face::U));
        let mut phase = rotation.tick(&mut cube);
        while phase == RotationPhase::Animating {
            phase = rotation.tick(&mut cube);
        }
        assert_eq!(RotationPhase::Snapping, phase);
        assert_eq!(RotationPhase::Remapping, rotation.tick(&mut cube));
        assert_eq!(RotationPhase::Done, rotation.tick(&mut cube));
        assert_eq!(RotationPhase::Done, rotation.tick(&mut cube));
    }
}
