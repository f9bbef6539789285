use crate::{ConfigurationError, MAX_DEPTH};

/// Tunables for one [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root.
    pub depth: u8,
    /// Transposition table size in megabytes.
    pub hash_size_mb: usize,
    /// Prune with alpha-beta. Off means plain minimax over the full tree.
    pub alpha_beta: bool,
    /// Cache results in the transposition table.
    pub transposition: bool,
    /// Prefer shorter mates by scoring a mate at ply `p` as `MATE_VALUE - p`.
    pub mate_distance: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            hash_size_mb: 16,
            alpha_beta: true,
            transposition: true,
            mate_distance: true,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Result<Self, ConfigurationError> {
        let config = Self {
            depth,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_depth(self.depth)?;
        if self.hash_size_mb == 0 {
            return Err(ConfigurationError::InvalidHashSize(self.hash_size_mb));
        }
        Ok(())
    }
}

pub(crate) fn validate_depth(depth: u8) -> Result<(), ConfigurationError> {
    if depth == 0 || depth > MAX_DEPTH {
        return Err(ConfigurationError::InvalidDepth {
            depth,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(SearchConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_depth_bounds() {
        assert!(SearchConfig::with_depth(1).is_ok());
        assert!(SearchConfig::with_depth(MAX_DEPTH).is_ok());
        assert_eq!(
            SearchConfig::with_depth(0),
            Err(ConfigurationError::InvalidDepth {
                depth: 0,
                max: MAX_DEPTH
            })
        );
        assert!(SearchConfig::with_depth(MAX_DEPTH + 1).is_err());
    }

    #[test]
    fn test_zero_hash_is_rejected() {
        let config = SearchConfig {
            hash_size_mb: 0,
            ..SearchConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigurationError::InvalidHashSize(0)));
    }
}
