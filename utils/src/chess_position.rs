use std::fmt;
use std::str::FromStr;

use ahash::AHashMap;
use chess::{Board, BoardStatus, ChessMove, Color, MoveGen, Piece};

use crate::material::has_insufficient_material;
use crate::moves::is_capture;
use crate::position::{MoveList, PositionAdapter, TerminalStatus};
use crate::{zobrist, PositionError};

/// Halfmoves without a capture or pawn move before the game is drawn.
const FIFTY_MOVE_LIMIT: u16 = 100;
const REPETITION_LIMIT: u8 = 3;

#[derive(Clone, Copy, PartialEq, Eq)]
struct Undo {
    board: Board,
    mv: ChessMove,
    halfmove_clock: u16,
    fullmove_number: u16,
}

/// A game in progress: the current board plus everything needed to undo
/// moves and to recognise draws the board alone can not see.
#[derive(Clone)]
pub struct ChessPosition {
    board: Board,
    halfmove_clock: u16,
    fullmove_number: u16,
    undo_stack: Vec<Undo>,
    /// Occurrences of every position reached so far, keyed by board hash.
    repetitions: AHashMap<u64, u8>,
}

impl ChessPosition {
    pub fn from_board(board: Board) -> Self {
        Self::with_clocks(board, 0, 1)
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let board =
            Board::from_str(fen).map_err(|_| PositionError::InvalidFen(fen.to_string()))?;

        let mut fields = fen.split_whitespace().skip(4);
        let halfmove_clock = fields.next().and_then(|f| f.parse().ok()).unwrap_or(0);
        let fullmove_number = fields.next().and_then(|f| f.parse().ok()).unwrap_or(1);

        Ok(Self::with_clocks(board, halfmove_clock, fullmove_number.max(1)))
    }

    fn with_clocks(board: Board, halfmove_clock: u16, fullmove_number: u16) -> Self {
        let mut repetitions = AHashMap::new();
        repetitions.insert(board.get_hash(), 1);

        Self {
            board,
            halfmove_clock,
            fullmove_number,
            undo_stack: Vec::with_capacity(128),
            repetitions,
        }
    }

    #[inline(always)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline(always)]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Moves applied since this position was created.
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.undo_stack.last().map(|undo| undo.mv)
    }

    pub fn is_legal(&self, mv: ChessMove) -> bool {
        self.board.legal(mv)
    }

    /// Parses a move in UCI notation (`e2e4`, `e7e8q`) and plays it.
    pub fn push_uci(&mut self, uci: &str) -> Result<ChessMove, PositionError> {
        let illegal = || PositionError::IllegalMove {
            mv: uci.to_string(),
            fen: self.fen(),
        };

        let mv = ChessMove::from_str(uci).map_err(|_| illegal())?;
        if !self.board.legal(mv) {
            return Err(illegal());
        }

        self.apply_move(mv);
        Ok(mv)
    }

    pub fn fen(&self) -> String {
        let board_fen = self.board.to_string();
        let placement: Vec<&str> = board_fen.split_whitespace().take(4).collect();
        format!(
            "{} {} {}",
            placement.join(" "),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    fn repetition_count(&self) -> u8 {
        self.repetitions
            .get(&self.board.get_hash())
            .copied()
            .unwrap_or(0)
    }

    fn is_draw(&self) -> bool {
        self.halfmove_clock >= FIFTY_MOVE_LIMIT
            || self.repetition_count() >= REPETITION_LIMIT
            || has_insufficient_material(&self.board)
    }
}

impl PositionAdapter for ChessPosition {
    type Move = ChessMove;

    #[inline(always)]
    fn legal_moves(&self) -> MoveList<ChessMove> {
        MoveGen::new_legal(&self.board).collect()
    }

    fn apply_move(&mut self, mv: ChessMove) {
        debug_assert!(self.board.legal(mv), "illegal move {} in {}", mv, self.fen());

        let resets_clock =
            self.board.piece_on(mv.get_source()) == Some(Piece::Pawn) || is_capture(&self.board, mv);

        self.undo_stack.push(Undo {
            board: self.board,
            mv,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        });

        self.board = self.board.make_move_new(mv);
        self.halfmove_clock = if resets_clock {
            0
        } else {
            self.halfmove_clock + 1
        };
        if self.board.side_to_move() == Color::White {
            self.fullmove_number += 1;
        }

        *self.repetitions.entry(self.board.get_hash()).or_insert(0) += 1;
    }

    fn revert_move(&mut self, mv: ChessMove) {
        let Some(undo) = self.undo_stack.pop() else {
            debug_assert!(false, "revert of {} without a matching apply", mv);
            return;
        };
        debug_assert_eq!(undo.mv, mv, "moves reverted out of order");

        let hash = self.board.get_hash();
        if let Some(count) = self.repetitions.get_mut(&hash) {
            *count -= 1;
            if *count == 0 {
                self.repetitions.remove(&hash);
            }
        }

        self.board = undo.board;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;
    }

    fn terminal_status(&self) -> TerminalStatus {
        match self.board.status() {
            BoardStatus::Checkmate => TerminalStatus::Checkmate,
            BoardStatus::Stalemate => TerminalStatus::Stalemate,
            BoardStatus::Ongoing if self.is_draw() => TerminalStatus::Draw,
            BoardStatus::Ongoing => TerminalStatus::Ongoing,
        }
    }

    #[inline(always)]
    fn position_key(&self) -> u64 {
        self.board.get_hash()
    }

    #[inline(always)]
    fn position_fingerprint(&self) -> u64 {
        zobrist::fingerprint(&self.board)
    }
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::from_board(Board::default())
    }
}

impl FromStr for ChessPosition {
    type Err = PositionError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

impl PartialEq for ChessPosition {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.halfmove_clock == other.halfmove_clock
            && self.fullmove_number == other.fullmove_number
            && self.undo_stack == other.undo_stack
            && self.repetitions.len() == other.repetitions.len()
            && self
                .repetitions
                .iter()
                .all(|(hash, count)| other.repetitions.get(hash) == Some(count))
    }
}

impl Eq for ChessPosition {}

impl fmt::Display for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen())
    }
}

impl fmt::Debug for ChessPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChessPosition")
            .field("fen", &self.fen())
            .field("ply_count", &self.ply_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(position: &mut ChessPosition, moves: &[&str]) {
        for mv in moves {
            position.push_uci(mv).unwrap();
        }
    }

    #[test]
    fn test_fen_clocks_are_parsed() {
        let position =
            ChessPosition::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 17 42").unwrap();
        assert_eq!(position.halfmove_clock(), 17);
        assert_eq!(position.fullmove_number(), 42);
        assert_eq!(position.fen(), "4k3/8/8/8/8/8/8/4K2R w K - 17 42");
    }

    #[test]
    fn test_invalid_fen_is_rejected() {
        let err = ChessPosition::from_fen("not a position").unwrap_err();
        assert!(matches!(err, PositionError::InvalidFen(_)));
    }

    #[test]
    fn test_illegal_move_is_rejected() {
        let mut position = ChessPosition::default();
        let before = position.clone();
        let err = position.push_uci("e2e5").unwrap_err();
        assert!(matches!(err, PositionError::IllegalMove { .. }));
        assert_eq!(position, before);
    }

    #[test]
    fn test_apply_then_revert_restores_everything() {
        let mut position = ChessPosition::default();
        play(&mut position, &["e2e4", "e7e5", "g1f3"]);
        let before = position.clone();

        for mv in position.legal_moves() {
            position.apply_move(mv);
            position.revert_move(mv);
            assert_eq!(position, before);
        }
    }

    #[test]
    fn test_clocks_follow_moves() {
        let mut position = ChessPosition::default();
        play(&mut position, &["g1f3"]);
        assert_eq!(position.halfmove_clock(), 1);
        assert_eq!(position.fullmove_number(), 1);

        play(&mut position, &["e7e5"]);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 2);

        play(&mut position, &["f3e5"]);
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.ply_count(), 3);
        assert_eq!(position.last_move(), Some(ChessMove::from_str("f3e5").unwrap()));
    }

    #[test]
    fn test_checkmate_status() {
        let mut position = ChessPosition::default();
        play(&mut position, &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(position.terminal_status(), TerminalStatus::Checkmate);
        assert!(position.legal_moves().is_empty());
    }

    #[test]
    fn test_stalemate_status() {
        let position = ChessPosition::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert_eq!(position.terminal_status(), TerminalStatus::Stalemate);
    }

    #[test]
    fn test_threefold_repetition_is_a_draw() {
        let mut position = ChessPosition::default();
        let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

        play(&mut position, &shuffle);
        assert_eq!(position.terminal_status(), TerminalStatus::Ongoing);

        play(&mut position, &shuffle);
        assert_eq!(position.terminal_status(), TerminalStatus::Draw);

        let last = position.last_move().unwrap();
        position.revert_move(last);
        assert_eq!(position.terminal_status(), TerminalStatus::Ongoing);
    }

    #[test]
    fn test_fifty_move_rule_is_a_draw() {
        let mut position =
            ChessPosition::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").unwrap();
        assert_eq!(position.terminal_status(), TerminalStatus::Ongoing);
        play(&mut position, &["a1a2"]);
        assert_eq!(position.terminal_status(), TerminalStatus::Draw);
    }

    #[test]
    fn test_insufficient_material_is_a_draw() {
        let position = ChessPosition::from_fen("4k3/8/8/8/8/8/8/4KB2 w - - 0 1").unwrap();
        assert_eq!(position.terminal_status(), TerminalStatus::Draw);
    }

    #[test]
    fn test_keys_agree_across_transpositions() {
        let mut a = ChessPosition::default();
        let mut b = ChessPosition::default();
        play(&mut a, &["g1f3", "g8f6", "b1c3"]);
        play(&mut b, &["b1c3", "g8f6", "g1f3"]);

        assert_eq!(a.position_key(), b.position_key());
        assert_eq!(a.position_fingerprint(), b.position_fingerprint());
    }
}
