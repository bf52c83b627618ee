//! Configuration for a responder.

use crate::error::{WhimError, WhimResult};

/// Environment variable holding an optional RNG seed.
pub const SEED_VAR: &str = "WHIM_SEED";

/// Configuration for a [`Responder`](crate::Responder).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhimConfig {
    /// RNG seed for reproducible responses. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl WhimConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> WhimResult<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> WhimResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(raw) = lookup(SEED_VAR) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                let seed = trimmed.parse::<u64>().map_err(|_| WhimError::InvalidEnv {
                    var: SEED_VAR,
                    value: raw.clone(),
                })?;
                config.seed = Some(seed);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unseeded() {
        assert_eq!(WhimConfig::default().seed, None);
    }

    #[test]
    fn builder_sets_seed() {
        let cfg = WhimConfig::default().with_seed(123);
        assert_eq!(cfg.seed, Some(123));
    }

    #[test]
    fn lookup_reads_seed() {
        let cfg = WhimConfig::from_lookup(|var| (var == SEED_VAR).then(|| " 77 ".to_string()))
            .unwrap();
        assert_eq!(cfg.seed, Some(77));
    }

    #[test]
    fn blank_seed_is_ignored() {
        let cfg = WhimConfig::from_lookup(|_| Some("   ".to_string())).unwrap();
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn garbage_seed_is_rejected() {
        let err = WhimConfig::from_lookup(|_| Some("lots".to_string())).unwrap_err();
        assert!(matches!(err, WhimError::InvalidEnv { var: SEED_VAR, .. }));
    }
}
