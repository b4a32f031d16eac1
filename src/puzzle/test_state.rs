//! Fixed demonstration cube state and its bulk loader.

use super::{Color, Cube, Face};

use Color::{Blue as B, Green as G, Orange as O, Red as R, White as W, Yellow as Y};

/// A fixed scrambled state used to seed the demo: one 3x3 color grid per
/// face, rows and columns following [`Face::grid_axes()`]. This particular
/// state is a legal scramble, so the validator accepts it.
pub const TEST_STATE: [(Face, [[Color; 3]; 3]); 6] = [
    (Face::U, [[W, O, R], [W, W, Y], [B, B, Y]]),
    (Face::F, [[R, W, G], [O, O, B], [B, B, Y]]),
    (Face::R, [[O, G, G], [Y, G, O], [B, R, O]]),
    (Face::B, [[Y, G, G], [W, R, O], [W, G, O]]),
    (Face::L, [[R, R, W], [Y, B, B], [B, R, R]]),
    (Face::D, [[Y, R, O], [Y, Y, G], [W, W, G]]),
];

/// Overwrites every exterior sticker of a cube at rest with the fixed
/// demonstration state. Interior faces are untouched, so the exterior-only
/// sticker invariant is preserved.
pub fn load_test_state(cube: &mut Cube) {
    for (face, rows) in TEST_STATE {
        for (row, cells) in rows.iter().enumerate() {
            for (col, &color) in cells.iter().enumerate() {
                let pos = face.cell_position(row * 3 + col);
                let Some(i) = cube.cubie_at(pos) else {
                    log::warn!("no cubie at {pos:?} while loading test state");
                    continue;
                };
                cube[i].face_colors[face] = Some(color);
            }
        }
    }
    log::info!("loaded demonstration test state");
}
