//! Sign enum.

use std::ops::Neg;

/// Positive, negative, or zero; one lattice coordinate of a cubie.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i32 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0,
    /// 0.0, or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
    /// Returns false if `Sign::Zero` or true otherwise.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Returns an iterator over all three signs.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Neg, Sign::Zero, Sign::Pos].into_iter()
    }
}
