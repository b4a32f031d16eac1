//! Direct single-sticker painting, independent of the move system.

use super::{Color, Cube, Face};

/// One sticker of one cubie, as resolved by the external picking
/// collaborator from a screen coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StickerRef {
    /// Index of the cubie in the store.
    pub cubie: usize,
    /// Which logical face of that cubie was hit.
    pub face: Face,
}

/// What a paint request did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PaintOutcome {
    /// The sticker was recolored.
    Painted,
    /// The targeted face holds no sticker (or the pick was malformed); the
    /// cube was left untouched.
    Skipped,
}

/// Overwrites the color of a single sticker. Interior faces never hold a
/// color and are never painted; requests against them are silently skipped
/// rather than treated as errors.
pub fn paint_sticker(cube: &mut Cube, sticker: StickerRef, color: Color) -> PaintOutcome {
    let Some(cubie) = cube.get_mut(sticker.cubie) else {
        log::warn!("paint target cubie {} does not exist", sticker.cubie);
        return PaintOutcome::Skipped;
    };
    match cubie.face_colors[sticker.face] {
        Some(_) => {
            cubie.face_colors[sticker.face] = Some(color);
            PaintOutcome::Painted
        }
        None => PaintOutcome::Skipped,
    }
}
