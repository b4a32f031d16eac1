//! End-to-end exercise of the public API: paint, validate, load the demo
//! state, and replay move sequences, the way the interactive demo does.

use paintcube::puzzle::{
    invert_sequence, PaintOutcome, StickerRef, DEFAULT_MOVE_SEQUENCE, SOLVE_DEMO_MOVES,
};
use paintcube::{Color, Cube, CubeController, CubeError, Face};
use pretty_assertions::assert_eq;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn paint_validate_then_replay() {
    init_logger();
    let mut ctrl = CubeController::new();

    // Paint the up center an illegal duplicate color and confirm the
    // validator notices, then paint it back.
    let up_center = ctrl.cube().cubie_at(Face::U.normal()).expect("up center");
    let target = StickerRef {
        cubie: up_center,
        face: Face::U,
    };
    assert_eq!(Ok(PaintOutcome::Painted), ctrl.paint(target, Color::Red));
    let status = ctrl.validate();
    assert!(!status.is_valid);
    assert!(status.message.contains('W'));
    assert_eq!(Ok(PaintOutcome::Painted), ctrl.paint(target, Color::White));
    assert!(ctrl.validate().is_valid);

    // Run the default demo sequence and confirm the grid followed.
    ctrl.run_sequence(DEFAULT_MOVE_SEQUENCE);
    assert!(ctrl.is_animating());
    assert_eq!(Err(CubeError::Busy), ctrl.paint(target, Color::Red));
    ctrl.catch_up();
    assert!(!ctrl.is_solved());
    assert!(ctrl.validate().is_valid);

    ctrl.run_sequence(invert_sequence(&DEFAULT_MOVE_SEQUENCE));
    ctrl.catch_up();
    assert!(ctrl.is_solved());
    assert_eq!(Cube::new(), *ctrl.cube());
}

#[test]
fn solve_demo_scrambles_then_solves() {
    init_logger();
    let mut ctrl = CubeController::new();
    ctrl.run_sequence(SOLVE_DEMO_MOVES);
    ctrl.catch_up();
    assert!(!ctrl.is_solved());
    ctrl.run_sequence(invert_sequence(&SOLVE_DEMO_MOVES));
    ctrl.catch_up();
    assert!(ctrl.is_solved());
}

#[test]
fn demo_state_loads_and_validates_through_the_controller() {
    init_logger();
    let mut ctrl = CubeController::new();
    ctrl.load_test_state().expect("idle controller accepts load");
    assert!(ctrl.validate().is_valid);
    assert!(!ctrl.is_solved());

    // Notation round trip on top of the loaded state.
    ctrl.run_notation("R U R' U'").expect("valid notation");
    ctrl.catch_up();
    assert!(ctrl.validate().is_valid);
}
