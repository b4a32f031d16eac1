//! Moves: a face letter plus a turn direction.

use std::f32::consts::FRAC_PI_2;
use std::fmt;

use super::{Axis, CubeError, Face, Sign};

/// Turn direction; clockwise or counterclockwise as seen looking at the
/// turned face from outside the cube.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TwistDirection {
    /// Clockwise.
    #[default]
    Cw,
    /// Counterclockwise.
    Ccw,
}
impl fmt::Display for TwistDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwistDirection::Cw => Ok(()),
            TwistDirection::Ccw => write!(f, "'"),
        }
    }
}
impl TwistDirection {
    /// Returns the opposite direction.
    pub const fn rev(self) -> TwistDirection {
        match self {
            TwistDirection::Cw => TwistDirection::Ccw,
            TwistDirection::Ccw => TwistDirection::Cw,
        }
    }
}

/// A quarter turn of one face of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Which face to turn.
    pub face: Face,
    /// Which way to turn it.
    pub direction: TwistDirection,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}
impl Move {
    /// Returns a clockwise quarter turn of `face`.
    pub const fn cw(face: Face) -> Move {
        Move {
            face,
            direction: TwistDirection::Cw,
        }
    }
    /// Returns a counterclockwise quarter turn of `face`.
    pub const fn ccw(face: Face) -> Move {
        Move {
            face,
            direction: TwistDirection::Ccw,
        }
    }

    /// Returns the rotation axis of this move.
    pub const fn axis(self) -> Axis {
        self.face.axis()
    }
    /// Returns the layer coordinate of this move along its axis.
    pub const fn layer(self) -> Sign {
        self.face.sign()
    }
    /// Returns the signed total rotation angle in radians, measured
    /// right-handed about the positive rotation axis. A clockwise turn of a
    /// face is a -90 degree turn about that face's outward normal.
    pub fn angle(self) -> f32 {
        let sign = match self.direction {
            TwistDirection::Cw => -1.0,
            TwistDirection::Ccw => 1.0,
        };
        FRAC_PI_2 * sign * self.face.sign().float()
    }
    /// Returns the move that undoes this one.
    pub const fn rev(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.rev(),
        }
    }

    /// Parses one move in compact notation: a face letter optionally
    /// followed by `'` for counterclockwise (e.g. `R`, `U'`).
    pub fn parse(s: &str) -> Result<Move, CubeError> {
        let mut chars = s.chars();
        let symbol = chars.next().ok_or(CubeError::UnknownMove(' '))?;
        let face = Face::from_symbol(symbol).ok_or(CubeError::UnknownMove(symbol))?;
        match chars.next() {
            None => Ok(Move::cw(face)),
            Some('\'') if chars.next().is_none() => Ok(Move::ccw(face)),
            Some(c) => Err(CubeError::UnknownMove(c)),
        }
    }
    /// Parses a whitespace-separated move sequence (e.g. `"R U R' U'"`).
    /// Fails on the first unknown symbol, yielding no moves at all.
    pub fn parse_sequence(s: &str) -> Result<Vec<Move>, CubeError> {
        s.split_whitespace().map(Move::parse).collect()
    }
}
