/// Static evaluation of a position.
///
/// Scores are centipawns from the point of view of the side to move, so the
/// search can negate them between plies. Implementations must be pure: the
/// same position always yields the same score.
pub trait Evaluator<P>: Send {
    fn name(&self) -> String;

    fn evaluate(&self, position: &P) -> i16;
}
