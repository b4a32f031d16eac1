//! Axes and cube faces.

use std::fmt;

use cgmath::Vector3;
use strum::{EnumIter, IntoEnumIterator};

use super::{Color, Sign};

/// A 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
    /// Returns the unit vector along this axis.
    pub fn unit(self) -> Vector3<f32> {
        match self {
            Self::X => Vector3::new(1.0, 0.0, 0.0),
            Self::Y => Vector3::new(0.0, 1.0, 0.0),
            Self::Z => Vector3::new(0.0, 0.0, 1.0),
        }
    }
}

/// A face of the cube, and simultaneously one of the six logical sticker
/// directions on a cubie.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face {
    axis: Axis,
    sign: Sign,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl Face {
    /// Right face (+X).
    pub const R: Face = Face {
        axis: Axis::X,
        sign: Sign::Pos,
    };
    /// Left face (-X).
    pub const L: Face = Face {
        axis: Axis::X,
        sign: Sign::Neg,
    };
    /// Up face (+Y).
    pub const U: Face = Face {
        axis: Axis::Y,
        sign: Sign::Pos,
    };
    /// Down face (-Y).
    pub const D: Face = Face {
        axis: Axis::Y,
        sign: Sign::Neg,
    };
    /// Front face (+Z).
    pub const F: Face = Face {
        axis: Axis::Z,
        sign: Sign::Pos,
    };
    /// Back face (-Z).
    pub const B: Face = Face {
        axis: Axis::Z,
        sign: Sign::Neg,
    };

    /// Returns the face on the given axis with the given sign. Panics if
    /// given `Sign::Zero`.
    pub fn new(axis: Axis, sign: Sign) -> Self {
        assert!(sign.is_nonzero(), "invalid sign for face");
        Self { axis, sign }
    }
    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        self.axis
    }
    /// Returns the sign of this face along its perpendicular axis.
    pub const fn sign(self) -> Sign {
        self.sign
    }
    /// Returns a unique index for this face in the range 0..6.
    pub const fn index(self) -> usize {
        match (self.axis, self.sign) {
            (Axis::X, Sign::Pos) => 0, // Right
            (Axis::X, Sign::Neg) => 1, // Left
            (Axis::Y, Sign::Pos) => 2, // Up
            (Axis::Y, Sign::Neg) => 3, // Down
            (Axis::Z, Sign::Pos) => 4, // Front
            (Axis::Z, Sign::Neg) => 5, // Back
            (_, Sign::Zero) => panic!("invalid face"),
        }
    }
    /// Returns the face letter used in move notation (`U`, `D`, `F`, `B`,
    /// `L`, or `R`).
    pub const fn symbol(self) -> char {
        match (self.axis, self.sign) {
            (Axis::X, Sign::Pos) => 'R',
            (Axis::X, Sign::Neg) => 'L',
            (Axis::Y, Sign::Pos) => 'U',
            (Axis::Y, Sign::Neg) => 'D',
            (Axis::Z, Sign::Pos) => 'F',
            (Axis::Z, Sign::Neg) => 'B',
            (_, Sign::Zero) => panic!("invalid face"),
        }
    }
    /// Returns the face for a move-notation letter, if it is one of the six
    /// known letters.
    pub fn from_symbol(symbol: char) -> Option<Face> {
        match symbol {
            'R' => Some(Face::R),
            'L' => Some(Face::L),
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }
    /// Returns the sticker color of this face on a solved cube.
    pub const fn solved_color(self) -> Color {
        match (self.axis, self.sign) {
            (Axis::X, Sign::Pos) => Color::Red,
            (Axis::X, Sign::Neg) => Color::Orange,
            (Axis::Y, Sign::Pos) => Color::White,
            (Axis::Y, Sign::Neg) => Color::Yellow,
            (Axis::Z, Sign::Pos) => Color::Blue,
            (Axis::Z, Sign::Neg) => Color::Green,
            (_, Sign::Zero) => panic!("invalid face"),
        }
    }
    /// Returns the outward normal of this face as a lattice vector.
    pub fn normal(self) -> Vector3<i32> {
        let mut ret = Vector3::new(0, 0, 0);
        ret[self.axis.int()] = self.sign.int();
        ret
    }
    /// Returns the `(u, v)` lattice directions of this face's 3x3 sticker
    /// grid: cell columns increase along `u` and rows along `v`. The choices
    /// match the net most cube diagrams use (U and D share F's columns; side
    /// faces are read with +Y up, looking at each face from outside).
    pub fn grid_axes(self) -> (Vector3<i32>, Vector3<i32>) {
        match (self.axis, self.sign) {
            (Axis::Y, Sign::Pos) => (Vector3::new(1, 0, 0), Vector3::new(0, 0, 1)), // U
            (Axis::Y, Sign::Neg) => (Vector3::new(1, 0, 0), Vector3::new(0, 0, -1)), // D
            (Axis::Z, Sign::Pos) => (Vector3::new(1, 0, 0), Vector3::new(0, -1, 0)), // F
            (Axis::Z, Sign::Neg) => (Vector3::new(-1, 0, 0), Vector3::new(0, -1, 0)), // B
            (Axis::X, Sign::Neg) => (Vector3::new(0, 0, 1), Vector3::new(0, -1, 0)), // L
            (Axis::X, Sign::Pos) => (Vector3::new(0, 0, -1), Vector3::new(0, -1, 0)), // R
            (_, Sign::Zero) => panic!("invalid face"),
        }
    }
    /// Returns the lattice position of the cubie holding cell `cell`
    /// (row-major, 0..9) of this face's sticker grid.
    pub fn cell_position(self, cell: usize) -> Vector3<i32> {
        let (u, v) = self.grid_axes();
        let row = (cell / 3) as i32 - 1;
        let col = (cell % 3) as i32 - 1;
        self.normal() + u * col + v * row
    }

    /// Returns an iterator over all six faces, in `index()` order.
    pub fn iter() -> impl Iterator<Item = Face> {
        Axis::iter().flat_map(|axis| {
            [Sign::Pos, Sign::Neg]
                .into_iter()
                .map(move |sign| Face { axis, sign })
        })
    }
}
