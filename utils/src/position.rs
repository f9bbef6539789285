use std::fmt;
use std::ops::{Deref, DerefMut};

use arrayvec::ArrayVec;

/// Upper bound on legal moves in any position we search (chess peaks at 218).
pub const MAX_MOVES: usize = 256;

pub type MoveList<M> = ArrayVec<M, MAX_MOVES>;

/// Game state as reported by the rules collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    /// Repetition, fifty-move rule or insufficient material.
    Draw,
}

/// Why a game can not continue from a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverCondition {
    Checkmate,
    Stalemate,
    Draw,
}

impl TerminalStatus {
    pub fn is_terminal(self) -> bool {
        self != TerminalStatus::Ongoing
    }

    pub fn game_over(self) -> Option<GameOverCondition> {
        match self {
            TerminalStatus::Ongoing => None,
            TerminalStatus::Checkmate => Some(GameOverCondition::Checkmate),
            TerminalStatus::Stalemate => Some(GameOverCondition::Stalemate),
            TerminalStatus::Draw => Some(GameOverCondition::Draw),
        }
    }
}

impl fmt::Display for GameOverCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOverCondition::Checkmate => write!(f, "checkmate"),
            GameOverCondition::Stalemate => write!(f, "stalemate"),
            GameOverCondition::Draw => write!(f, "draw"),
        }
    }
}

/// The boundary between the search and whatever implements the rules.
///
/// The search never copies a position. It applies a move, recurses and
/// reverts, so `revert_move` must be the exact inverse of the most recent
/// `apply_move`.
pub trait PositionAdapter {
    type Move: Copy + Eq + fmt::Debug + Send;

    fn legal_moves(&self) -> MoveList<Self::Move>;

    fn apply_move(&mut self, mv: Self::Move);

    fn revert_move(&mut self, mv: Self::Move);

    fn terminal_status(&self) -> TerminalStatus;

    /// Primary hash used to index the transposition table.
    fn position_key(&self) -> u64;

    /// Second hash, uncorrelated with `position_key`, stored alongside cached
    /// results so a key collision reads as a miss.
    fn position_fingerprint(&self) -> u64;
}

/// Applies a move for as long as the guard lives and reverts it on drop,
/// whichever way the enclosing scope is left.
pub struct MoveGuard<'a, P: PositionAdapter> {
    position: &'a mut P,
    mv: P::Move,
}

impl<'a, P: PositionAdapter> MoveGuard<'a, P> {
    #[inline(always)]
    pub fn new(position: &'a mut P, mv: P::Move) -> Self {
        position.apply_move(mv);
        Self { position, mv }
    }

    pub fn applied_move(&self) -> P::Move {
        self.mv
    }
}

impl<P: PositionAdapter> Deref for MoveGuard<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.position
    }
}

impl<P: PositionAdapter> DerefMut for MoveGuard<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut *self.position
    }
}

impl<P: PositionAdapter> Drop for MoveGuard<'_, P> {
    #[inline(always)]
    fn drop(&mut self) {
        self.position.revert_move(self.mv);
    }
}
