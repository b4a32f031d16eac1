//! High-level facade tying the cubie store, the sticker tracker, and the
//! move executor together behind one interface.

use super::algorithm::{AlgorithmRun, AlgorithmStatus};
use super::moves::Move;
use super::paint::{paint_sticker, PaintOutcome, StickerRef};
use super::test_state::load_test_state;
use super::tracker::StickerGrid;
use super::validate::{validation_status, ValidationStatus};
use super::{Color, Cube, CubeError};

/// Owns a cube plus the flat sticker grid that shadows it, and serializes
/// all mutation through one entry point so the two can never diverge.
///
/// Callers drive animation by calling [`CubeController::tick()`] once per
/// frame; everything else is event-shaped.
#[derive(Debug, Default)]
pub struct CubeController {
    cube: Cube,
    grid: StickerGrid,
    run: Option<AlgorithmRun>,
}

impl CubeController {
    /// Creates a controller over a solved cube with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cubie store, for rendering.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// The flat per-face sticker grid, kept in lockstep with the store.
    pub fn grid(&self) -> &StickerGrid {
        &self.grid
    }

    /// Whether a move sequence is currently executing.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Queues a single move, appending to the in-flight sequence if any.
    pub fn twist(&mut self, mv: Move) {
        match &mut self.run {
            Some(run) => run.push(mv),
            None => self.run = Some(AlgorithmRun::new([mv])),
        }
    }

    /// Queues a whole sequence of moves.
    pub fn run_sequence(&mut self, moves: impl IntoIterator<Item = Move>) {
        for mv in moves {
            self.twist(mv);
        }
    }

    /// Parses face-turn notation (e.g. `"R U R' U'"`) and queues the
    /// result. The whole string is parsed before anything is queued, so a
    /// bad symbol leaves the cube untouched.
    pub fn run_notation(&mut self, notation: &str) -> Result<(), CubeError> {
        let moves = Move::parse_sequence(notation)?;
        self.run_sequence(moves);
        Ok(())
    }

    /// Advances the in-flight sequence by one animation step. No-op when
    /// idle. Completed moves are mirrored into the sticker grid.
    pub fn tick(&mut self) {
        let status = match &mut self.run {
            Some(run) => run.tick(&mut self.cube),
            None => return,
        };
        match status {
            AlgorithmStatus::Running => (),
            AlgorithmStatus::MoveFinished(mv) => self.grid.apply(mv),
            AlgorithmStatus::Finished => self.run = None,
        }
    }

    /// Runs the in-flight sequence to completion synchronously.
    pub fn catch_up(&mut self) {
        while self.run.is_some() {
            self.tick();
        }
    }

    /// Recolors one sticker. Rejected while a sequence is animating, since
    /// a repaint mid-turn would desynchronize the grid from the store.
    pub fn paint(&mut self, sticker: StickerRef, color: Color) -> Result<PaintOutcome, CubeError> {
        if self.is_animating() {
            return Err(CubeError::Busy);
        }
        let outcome = paint_sticker(&mut self.cube, sticker, color);
        if outcome == PaintOutcome::Painted {
            self.grid = StickerGrid::from_cube(&self.cube);
        }
        Ok(outcome)
    }

    /// Replaces every exterior sticker with the fixed demonstration state.
    pub fn load_test_state(&mut self) -> Result<(), CubeError> {
        if self.is_animating() {
            return Err(CubeError::Busy);
        }
        load_test_state(&mut self.cube);
        self.grid = StickerGrid::from_cube(&self.cube);
        Ok(())
    }

    /// Checks the painted state against the full set of expected pieces.
    pub fn validate(&self) -> ValidationStatus {
        validation_status(&self.cube)
    }

    /// Whether every face of the tracked grid is a single color.
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Discards any in-flight sequence and returns to the solved state.
    pub fn reset(&mut self) {
        self.cube = Cube::new();
        self.grid = StickerGrid::new();
        self.run = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Face, SOLVE_DEMO_MOVES};
    use super::*;

    #[test]
    fn grid_stays_in_lockstep_through_a_sequence() {
        let mut ctrl = CubeController::new();
        ctrl.run_sequence(SOLVE_DEMO_MOVES);
        ctrl.catch_up();
        assert!(!ctrl.is_animating());
        assert_eq!(StickerGrid::from_cube(ctrl.cube()), *ctrl.grid());
        assert!(!ctrl.is_solved());
    }

    #[test]
    fn sexy_move_six_times_returns_to_solved() {
        let mut ctrl = CubeController::new();
        for _ in 0..6 {
            ctrl.run_notation("R U R' U'").unwrap();
        }
        ctrl.catch_up();
        assert!(ctrl.is_solved());
        assert_eq!(Cube::new(), *ctrl.cube());
    }

    #[test]
    fn bad_notation_is_rejected_without_queuing_anything() {
        let mut ctrl = CubeController::new();
        assert_eq!(Err(CubeError::UnknownMove('X')), ctrl.run_notation("R X"));
        assert!(!ctrl.is_animating());
        assert_eq!(Cube::new(), *ctrl.cube());
    }

    #[test]
    fn painting_is_rejected_mid_animation() {
        let mut ctrl = CubeController::new();
        ctrl.twist(Move::cw(Face::R));
        ctrl.tick();
        let target = StickerRef {
            cubie: 0,
            face: Face::U,
        };
        assert_eq!(Err(CubeError::Busy), ctrl.paint(target, Color::Red));
        ctrl.catch_up();
        assert_eq!(Ok(PaintOutcome::Skipped), ctrl.paint(target, Color::Red));
    }

    #[test]
    fn painting_resyncs_the_grid() {
        let mut ctrl = CubeController::new();
        let up_center = ctrl
            .cube()
            .cubie_at(Face::U.normal())
            .expect("up center exists");
        let target = StickerRef {
            cubie: up_center,
            face: Face::U,
        };
        assert_eq!(Ok(PaintOutcome::Painted), ctrl.paint(target, Color::Red));
        assert_eq!(Color::Red, ctrl.grid().face(Face::U)[4]);
        assert!(!ctrl.validate().is_valid);
    }

    #[test]
    fn test_state_loads_and_validates() {
        let mut ctrl = CubeController::new();
        ctrl.load_test_state().unwrap();
        assert!(ctrl.validate().is_valid);
        assert!(!ctrl.is_solved());
        ctrl.reset();
        assert!(ctrl.is_solved());
    }
}
