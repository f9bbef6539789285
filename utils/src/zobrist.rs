//! Independent Zobrist hashing.
//!
//! The `chess` crate already hashes boards; this second hash uses its own
//! random keys so the pair of them behaves like a 128-bit identity. The
//! transposition table stores it to tell genuine hits from key collisions.
//!
//! <https://www.chessprogramming.org/Zobrist_Hashing>

use std::sync::OnceLock;

use chess::{Board, Color, NUM_COLORS, NUM_PIECES, NUM_SQUARES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x00C0_FFEE_D15E_A5E5;

struct ZobristKeys {
    pieces: [[[u64; NUM_SQUARES]; NUM_PIECES]; NUM_COLORS],
    castling: [[u64; 4]; NUM_COLORS],
    en_passant_file: [u64; 8],
    black_to_move: u64,
}

impl ZobristKeys {
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(SEED);

        let mut pieces = [[[0u64; NUM_SQUARES]; NUM_PIECES]; NUM_COLORS];
        for color in pieces.iter_mut() {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let mut castling = [[0u64; 4]; NUM_COLORS];
        for color in castling.iter_mut() {
            // Index 0 means "no rights" and contributes nothing
            for key in color.iter_mut().skip(1) {
                *key = rng.gen();
            }
        }

        let mut en_passant_file = [0u64; 8];
        for key in en_passant_file.iter_mut() {
            *key = rng.gen();
        }

        Self {
            pieces,
            castling,
            en_passant_file,
            black_to_move: rng.gen(),
        }
    }
}

fn keys() -> &'static ZobristKeys {
    static KEYS: OnceLock<ZobristKeys> = OnceLock::new();
    KEYS.get_or_init(ZobristKeys::generate)
}

/// Hashes piece placement, side to move, castling rights and en passant file.
pub fn fingerprint(board: &Board) -> u64 {
    let keys = keys();
    let mut hash = 0u64;

    for square in *board.combined() {
        if let (Some(piece), Some(color)) = (board.piece_on(square), board.color_on(square)) {
            hash ^= keys.pieces[color.to_index()][piece.to_index()][square.to_index()];
        }
    }

    for color in [Color::White, Color::Black] {
        hash ^= keys.castling[color.to_index()][board.castle_rights(color).to_index()];
    }

    if let Some(square) = board.en_passant() {
        hash ^= keys.en_passant_file[square.get_file().to_index()];
    }

    if board.side_to_move() == Color::Black {
        hash ^= keys.black_to_move;
    }

    hash
}
