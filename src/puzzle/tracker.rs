//! Geometry-independent sticker-grid view of the cube, driven purely by
//! move identity.

use std::collections::HashMap;

use itertools::Itertools;
use lazy_static::lazy_static;

use super::{Color, Cube, Face, Move, TwistDirection};

/// A cell of one face's 3x3 sticker grid: `(face index, cell index)`.
type Cell = (usize, usize);

/// The ring of stickers around each face: four 3-cell strips on the
/// adjacent faces, listed so that a clockwise turn carries each strip onto
/// the next. Cell indices are row-major per [`Face::grid_axes()`].
const RINGS: [[(Face, [usize; 3]); 4]; 6] = [
    // R
    [
        (Face::F, [2, 5, 8]),
        (Face::U, [2, 5, 8]),
        (Face::B, [6, 3, 0]),
        (Face::D, [2, 5, 8]),
    ],
    // L
    [
        (Face::U, [0, 3, 6]),
        (Face::F, [0, 3, 6]),
        (Face::D, [0, 3, 6]),
        (Face::B, [8, 5, 2]),
    ],
    // U
    [
        (Face::F, [0, 1, 2]),
        (Face::L, [0, 1, 2]),
        (Face::B, [0, 1, 2]),
        (Face::R, [0, 1, 2]),
    ],
    // D
    [
        (Face::F, [6, 7, 8]),
        (Face::R, [6, 7, 8]),
        (Face::B, [6, 7, 8]),
        (Face::L, [6, 7, 8]),
    ],
    // F
    [
        (Face::U, [6, 7, 8]),
        (Face::R, [0, 3, 6]),
        (Face::D, [2, 1, 0]),
        (Face::L, [8, 5, 2]),
    ],
    // B
    [
        (Face::U, [0, 1, 2]),
        (Face::L, [6, 3, 0]),
        (Face::D, [8, 7, 6]),
        (Face::R, [2, 5, 8]),
    ],
];

/// Four-cycles of the turned face's own cells under a clockwise turn.
const FACE_CYCLES: [[usize; 4]; 2] = [[0, 2, 8, 6], [1, 5, 7, 3]];

lazy_static! {
    /// `(source, destination)` cell pairs for each of the 12 possible moves.
    static ref MOVE_PERMUTATIONS: HashMap<(Face, TwistDirection), Vec<(Cell, Cell)>> = {
        let mut map = HashMap::new();
        for face in Face::iter() {
            for direction in [TwistDirection::Cw, TwistDirection::Ccw] {
                map.insert((face, direction), move_permutation(face, direction));
            }
        }
        map
    };
}

fn move_permutation(face: Face, direction: TwistDirection) -> Vec<(Cell, Cell)> {
    let f = face.index();
    let mut pairs = Vec::with_capacity(20);
    for cycle in FACE_CYCLES {
        for i in 0..4 {
            let (mut src, mut dst) = (cycle[i], cycle[(i + 1) % 4]);
            if direction == TwistDirection::Ccw {
                std::mem::swap(&mut src, &mut dst);
            }
            pairs.push(((f, src), (f, dst)));
        }
    }
    let ring = &RINGS[f];
    for i in 0..4 {
        let (mut src, mut dst) = (ring[i], ring[(i + 1) % 4]);
        if direction == TwistDirection::Ccw {
            std::mem::swap(&mut src, &mut dst);
        }
        let ((src_face, src_cells), (dst_face, dst_cells)) = (src, dst);
        for k in 0..3 {
            pairs.push(((src_face.index(), src_cells[k]), (dst_face.index(), dst_cells[k])));
        }
    }
    pairs
}

/// The six-face sticker grid: a 3x3 grid of color codes per face,
/// maintained independently of the 3D cubie store.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StickerGrid {
    faces: [[Color; 9]; 6],
}
impl Default for StickerGrid {
    fn default() -> Self {
        Self::new()
    }
}
impl StickerGrid {
    /// Returns the solved grid: each face uniformly its solved color.
    pub fn new() -> StickerGrid {
        let mut faces = [[Color::White; 9]; 6];
        for face in Face::iter() {
            faces[face.index()] = [face.solved_color(); 9];
        }
        StickerGrid { faces }
    }

    /// Derives the grid from a cube at rest, reading each face's stickers
    /// through the shared grid conventions. The grid after any completed
    /// move equals this projection of the cubie store.
    pub fn from_cube(cube: &Cube) -> StickerGrid {
        let mut grid = StickerGrid::new();
        for face in Face::iter() {
            for cell in 0..9 {
                let pos = face.cell_position(cell);
                let i = cube.cubie_at(pos).expect("cube is missing a cubie");
                let color = cube[i].face_colors[face].expect("exterior face has no sticker");
                grid.faces[face.index()][cell] = color;
            }
        }
        grid
    }

    /// Returns one face's cells, row-major.
    pub fn face(&self, face: Face) -> &[Color; 9] {
        &self.faces[face.index()]
    }

    /// Applies one move to the grid. A fresh grid is built from the
    /// precomputed cell permutation and then swapped in whole, so a cell is
    /// never read after it has been written within one move.
    pub fn apply(&mut self, mv: Move) {
        let pairs = &MOVE_PERMUTATIONS[&(mv.face, mv.direction)];
        let mut next = self.faces;
        for &((src_face, src_cell), (dst_face, dst_cell)) in pairs {
            next[dst_face][dst_cell] = self.faces[src_face][src_cell];
        }
        self.faces = next;
    }

    /// Returns whether every face is a single uniform color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|cells| cells.iter().all_equal())
    }
}
