// config.rs - Simulation settings
//
// Defaults follow the classic 160x170 board drawn at 3 px per cell. Settings
// are fixed once the simulation starts.

use std::num::NonZeroUsize;

use crate::error::ConfigError;
use crate::patterns;
use crate::scheduler::{StepScheduler, Strategy};
use crate::seed::Seed;

pub const DEFAULT_HEIGHT: usize = 160; // cells along y
pub const DEFAULT_WIDTH: usize = 170; // cells along x
pub const DEFAULT_SCALE: u32 = 3; // pixels per cell side
pub const DEFAULT_DELAY: u32 = 2; // ticks between generations
pub const DEFAULT_LIVE_PERCENT: u32 = 25; // random fill density

#[derive(Clone, Debug)]
pub struct SimConfig {
    pub height: usize,
    pub width: usize,
    pub scale: u32,
    pub delay: u32,
    pub live_percent: u32,
    /// `None` uses the detected hardware parallelism.
    pub workers: Option<usize>,
    pub strategy: Strategy,
    /// Pattern key or name; `None` fills the board randomly.
    pub pattern: Option<String>,
    /// Fixed RNG seed for reproducible random fills.
    pub rng_seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            scale: DEFAULT_SCALE,
            delay: DEFAULT_DELAY,
            live_percent: DEFAULT_LIVE_PERCENT,
            workers: None,
            strategy: Strategy::default(),
            pattern: None,
            rng_seed: None,
        }
    }
}

impl SimConfig {
    /// Check every setting; returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::EmptyBoard { height: self.height, width: self.width });
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.live_percent > 100 {
            return Err(ConfigError::Probability(self.live_percent));
        }
        self.worker_count()?;
        self.initial_seed()?;
        Ok(())
    }

    pub fn worker_count(&self) -> Result<NonZeroUsize, ConfigError> {
        match self.workers {
            None => Ok(StepScheduler::detect_workers()),
            Some(n) => NonZeroUsize::new(n).ok_or(ConfigError::ZeroWorkers),
        }
    }

    /// The seed chosen by these settings, checked against the board size.
    pub fn initial_seed(&self) -> Result<Seed, ConfigError> {
        let Some(name) = self.pattern.as_deref() else {
            return Ok(Seed::Random { live_percent: self.live_percent });
        };
        let pattern = patterns::find(name).ok_or_else(|| ConfigError::UnknownPattern(name.to_string()))?;
        if !pattern.fits(self.height, self.width) {
            return Err(ConfigError::PatternOutOfBounds {
                name: pattern.name,
                height: self.height,
                width: self.width,
            });
        }
        Ok(Seed::Pattern(pattern))
    }

    /// Window size in pixels for the board area.
    pub fn pixel_size(&self) -> (f32, f32) {
        let scale = self.scale as f32;
        (self.width as f32 * scale, self.height as f32 * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pixel_size(), (510.0, 480.0));
        assert!(matches!(config.initial_seed(), Ok(Seed::Random { live_percent: 25 })));
    }

    #[test]
    fn rejects_bad_values() {
        let base = SimConfig::default;

        let config = SimConfig { height: 0, ..base() };
        assert_eq!(config.validate(), Err(ConfigError::EmptyBoard { height: 0, width: 170 }));

        let config = SimConfig { scale: 0, ..base() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroScale));

        let config = SimConfig { workers: Some(0), ..base() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWorkers));

        let config = SimConfig { live_percent: 101, ..base() };
        assert_eq!(config.validate(), Err(ConfigError::Probability(101)));

        let config = SimConfig { pattern: Some("lwss".into()), ..base() };
        assert_eq!(config.validate(), Err(ConfigError::UnknownPattern("lwss".into())));
    }

    #[test]
    fn pattern_must_fit_board() {
        let config = SimConfig {
            height: 50,
            width: 50,
            pattern: Some("gosper-gun".into()),
            ..SimConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::PatternOutOfBounds { name: "Gosper Glider Gun", height: 50, width: 50 })
        );

        let config = SimConfig { pattern: Some("glider".into()), ..config };
        assert!(matches!(config.initial_seed(), Ok(Seed::Pattern(p)) if p.key == "glider"));
    }

    #[test]
    fn explicit_workers() {
        let config = SimConfig { workers: Some(6), ..SimConfig::default() };
        assert_eq!(config.worker_count().map(NonZeroUsize::get), Ok(6));
    }
}
