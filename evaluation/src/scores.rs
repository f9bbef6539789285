// Score bounds and special values for alpha-beta search.
pub const POS_INFINITY: i16 = 30_000;
pub const NEG_INFINITY: i16 = -POS_INFINITY;
/// Base value for checkmate. Mate scores are MATE_VALUE - ply to distinguish faster mates.
pub const MATE_VALUE: i16 = POS_INFINITY - 1000;
pub const DRAW_VALUE: i16 = 0;
/// Static evaluations never leave this range, so any mate outranks them.
pub const EVAL_LIMIT: i16 = 20_000;

/// Scores this far from zero can only come from a mate sentinel.
#[inline(always)]
pub fn is_mate_score(score: i16) -> bool {
    score.unsigned_abs() > EVAL_LIMIT as u16
}

#[inline(always)]
pub fn clamp_eval(score: i32) -> i16 {
    score.clamp(-(EVAL_LIMIT as i32), EVAL_LIMIT as i32) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_scores_outrank_evaluations() {
        assert!(is_mate_score(MATE_VALUE));
        assert!(is_mate_score(-(MATE_VALUE - 40)));
        assert!(!is_mate_score(EVAL_LIMIT));
        assert!(!is_mate_score(DRAW_VALUE));
    }

    #[test]
    fn test_clamp_eval() {
        assert_eq!(clamp_eval(150), 150);
        assert_eq!(clamp_eval(1_000_000), EVAL_LIMIT);
        assert_eq!(clamp_eval(-1_000_000), -EVAL_LIMIT);
    }
}
