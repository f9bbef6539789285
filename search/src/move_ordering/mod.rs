mod mvv_lva;

use utils::{MoveList, PositionAdapter};

pub use mvv_lva::MvvLva;

/// Reorders the moves of a node before it is expanded.
///
/// Implementations may only permute `moves`: nothing is added or dropped.
/// Ordering changes how much the search prunes, never what it returns.
pub trait MoveOrderer<P: PositionAdapter>: Send {
    fn name(&self) -> String;

    fn order(&self, position: &P, moves: &mut MoveList<P::Move>);
}

/// Leaves moves in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<P: PositionAdapter> MoveOrderer<P> for NaturalOrder {
    fn name(&self) -> String {
        "natural".to_string()
    }

    fn order(&self, _position: &P, _moves: &mut MoveList<P::Move>) {}
}

/// Moves `hint` to the front, keeping the relative order of everything else.
pub(crate) fn promote<M: PartialEq>(moves: &mut [M], hint: M) {
    if let Some(index) = moves.iter().position(|mv| *mv == hint) {
        moves[..=index].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_keeps_relative_order() {
        let mut moves = [1, 2, 3, 4, 5];
        promote(&mut moves, 4);
        assert_eq!(moves, [4, 1, 2, 3, 5]);

        promote(&mut moves, 9);
        assert_eq!(moves, [4, 1, 2, 3, 5]);
    }
}
