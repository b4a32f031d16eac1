//! Cube state model: cubie store, moves, animation, painting, and
//! validation.

use thiserror::Error;

mod algorithm;
mod axis;
mod colors;
mod controller;
mod cubie;
mod moves;
mod paint;
mod rotation;
mod sign;
mod test_state;
mod tracker;
mod validate;

pub use algorithm::{
    invert_sequence, AlgorithmRun, AlgorithmStatus, DEFAULT_MOVE_SEQUENCE, SOLVE_DEMO_MOVES,
};
pub use axis::{Axis, Face};
pub use colors::Color;
pub use controller::CubeController;
pub use cubie::{Cube, Cubie, FaceColors, CUBE_SPACING};
pub use moves::{Move, TwistDirection};
pub use paint::{paint_sticker, PaintOutcome, StickerRef};
pub use rotation::{LayerRotation, RotationPhase, ANGLE_EPSILON, ROTATION_STEP};
pub use sign::Sign;
pub use test_state::{load_test_state, TEST_STATE};
pub use tracker::StickerGrid;
pub use validate::{
    missing_pieces, validation_status, ValidationStatus, EXPECTED_CENTERS, EXPECTED_CORNERS,
    EXPECTED_EDGES,
};

/// Error type for cube operations.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// A move referenced a face letter outside the fixed `UDFBLR` set. The
    /// offending sequence is rejected before any mutation occurs.
    #[error("unknown move symbol {0:?}")]
    UnknownMove(char),
    /// A direct mutation (paint, bulk load) was requested while a move
    /// sequence is in flight.
    #[error("cube is busy animating a move sequence")]
    Busy,
}
