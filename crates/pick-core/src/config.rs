//! Session configuration: the optional sphere-count argument plus the
//! environment overrides for strategy and seed.

use crate::constants::{BACKGROUND_RGB, DEFAULT_SPHERE_COUNT, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::pick::StrategyKind;
use crate::viewport::Viewport;
use thiserror::Error;

pub const STRATEGY_ENV: &str = "SPHERE_PICK_STRATEGY";
pub const SEED_ENV: &str = "SPHERE_PICK_SEED";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid sphere count {0:?}: expected a non-negative integer")]
    InvalidSphereCount(String),
    #[error("unexpected argument {0:?}; usage: pick-native [SPHERE_COUNT]")]
    UnexpectedArgument(String),
    #[error("unknown pick strategy {0:?}: expected ground, surface or depth")]
    UnknownStrategy(String),
    #[error("invalid seed {0:?}: expected an unsigned integer")]
    InvalidSeed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub sphere_count: usize,
    pub window_width: u32,
    pub window_height: u32,
    pub background: [f32; 3],
    pub strategy: StrategyKind,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            sphere_count: DEFAULT_SPHERE_COUNT,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            background: BACKGROUND_RGB,
            strategy: StrategyKind::default(),
            seed: None,
        }
    }
}

impl SessionConfig {
    /// Parse process arguments, program name excluded.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();
        if let Some(count) = args.next() {
            let count = count.as_ref();
            config.sphere_count = count
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSphereCount(count.to_string()))?;
        }
        if let Some(extra) = args.next() {
            return Err(ConfigError::UnexpectedArgument(extra.as_ref().to_string()));
        }
        Ok(config)
    }

    /// Apply [`STRATEGY_ENV`] and [`SEED_ENV`] from `lookup`.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(STRATEGY_ENV) {
            self.strategy = name.parse().map_err(ConfigError::UnknownStrategy)?;
        }
        if let Some(seed) = lookup(SEED_ENV) {
            let parsed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
            self.seed = Some(parsed);
        }
        Ok(self)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.window_width, self.window_height)
    }

    /// The configured seed, or a fresh random one.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
