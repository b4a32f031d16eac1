//! Queued execution of move sequences, one animated layer turn at a time.

use std::collections::VecDeque;

use super::moves::Move;
use super::rotation::{LayerRotation, RotationPhase};
use super::{Cube, Face};

/// Scramble applied by the solve demo before it replays the inverse.
pub const SOLVE_DEMO_MOVES: [Move; 4] = [
    Move::ccw(Face::F),
    Move::cw(Face::U),
    Move::cw(Face::R),
    Move::cw(Face::U),
];

/// Sequence executed when a caller asks for "the" demo sequence without
/// supplying one.
pub const DEFAULT_MOVE_SEQUENCE: [Move; 2] = [Move::cw(Face::R), Move::cw(Face::U)];

/// What a single executor tick accomplished.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AlgorithmStatus {
    /// A move animation is still in flight (or just started).
    Running,
    /// The given move just finished; its layer has snapped and remapped.
    MoveFinished(Move),
    /// The queue is empty and no animation remains.
    Finished,
}

/// Drives a queue of moves against a cube. Each tick advances the current
/// move's [`LayerRotation`] by at most one phase transition, so callers can
/// tick once per frame and animation pacing falls out naturally.
#[derive(Debug)]
pub struct AlgorithmRun {
    queue: VecDeque<Move>,
    current: Option<(Move, LayerRotation)>,
}

impl AlgorithmRun {
    /// Creates a run over the given moves, none started yet.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            queue: moves.into_iter().collect(),
            current: None,
        }
    }

    /// Appends a move to the end of the queue.
    pub fn push(&mut self, mv: Move) {
        self.queue.push_back(mv);
    }

    /// Whether every queued move has fully completed.
    pub fn is_finished(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }

    /// Advances execution by one step. Starts the next queued move if none
    /// is in flight, otherwise ticks the in-flight rotation.
    pub fn tick(&mut self, cube: &mut Cube) -> AlgorithmStatus {
        if self.current.is_none() {
            let Some(mv) = self.queue.pop_front() else {
                return AlgorithmStatus::Finished;
            };
            log::trace!("starting move {mv}");
            self.current = Some((mv, LayerRotation::from_move(cube, mv)));
        }
        if let Some((mv, rotation)) = &mut self.current {
            let mv = *mv;
            if rotation.tick(cube) == RotationPhase::Done {
                self.current = None;
                return AlgorithmStatus::MoveFinished(mv);
            }
        }
        AlgorithmStatus::Running
    }
}

/// Builds the inverse of a sequence: reversed order, each move mirrored.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.rev()).collect()
}
