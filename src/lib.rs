//! Paintable 3x3x3 puzzle cube simulator.
//!
//! This crate models the state of a 3x3x3 puzzle cube as 26 movable cubies,
//! each with a position, an orientation, and a set of sticker colors. Three
//! independent mutation paths are supported and kept consistent:
//!
//! - free-form painting of individual stickers;
//! - animated quarter-turn rotations of whole layers;
//! - bulk loading of a fixed demonstration state.
//!
//! Rendering, picking, and camera control are external collaborators: the
//! crate consumes `(cubie, face)` pairs resolved elsewhere and exposes
//! [`puzzle::Cubie::render_position()`] for drawing, but owns no graphics
//! code itself.

pub mod puzzle;

pub use puzzle::{
    Color, Cube, CubeController, CubeError, Face, Move, StickerGrid, TwistDirection,
};
