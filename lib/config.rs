//! Parameters for a full [pipeline][crate::pipeline] run.
//!
//! A [`PipelineConfig`] carries everything needed to build, sample, convert,
//! and discretize a lattice potential. It deserializes from kebab-case keys,
//! e.g. in TOML:
//! ```toml
//! unit = "eV"
//! charge = 1.0
//! softening = 0.01
//! spacing = 0.05
//! charges = 10
//! neighborhood = 1
//! grid-points = 400
//! steps = 100
//! query-points = 5000
//! empty-bin = "error"
//! clamp-edges = true
//! ```
//! Any omitted key takes its value from [`PipelineConfig::test`].

use serde::{ Deserialize, Serialize };
use crate::{
    discretize::EmptyBin,
    error::ConfigError,
    lattice::{ LResult, Lattice },
    units::EnergyUnit,
};

pub type CResult<T> = Result<T, ConfigError>;

/// Grid sizes of the fast preset.
pub const TEST_GRID_POINTS: usize = 400;
pub const TEST_STEPS: usize = 100;

/// Grid sizes of the high-precision preset.
pub const PRECISE_GRID_POINTS: usize = 4000;
pub const PRECISE_STEPS: usize = 500;

/// Size of the query grid on which the step profile is evaluated.
pub const DEF_QUERY_POINTS: usize = 5000;

/// Configuration of a single pipeline run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PipelineConfig {
    /// Unit in which all energies are reported.
    pub unit: EnergyUnit,
    /// Charge on each lattice site, in units of the elementary charge.
    pub charge: f64,
    /// Softening length `a`.
    pub softening: f64,
    /// Lattice spacing `L`.
    pub spacing: f64,
    /// Number of charges `N`.
    pub charges: usize,
    /// Number of charges on each side of the nearest to include; `None`
    /// includes all of them.
    pub neighborhood: Option<usize>,
    /// Number of points in the continuous sample grid over `[0, (N + 1) L]`.
    pub grid_points: usize,
    /// Number of interior steps `n`.
    pub steps: usize,
    /// Number of points in the query grid.
    pub query_points: usize,
    /// Treatment of interior bins holding no samples.
    pub empty_bin: EmptyBin,
    /// Whether to zero the first and last continuous samples.
    pub clamp_edges: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self { Self::test() }
}

impl PipelineConfig {
    /// Fast preset: ten unit charges with all neighbors, on a 400-point grid
    /// reduced to 100 steps.
    pub fn test() -> Self {
        Self {
            unit: EnergyUnit::EV,
            charge: 1.0,
            softening: 0.01,
            spacing: 0.05,
            charges: 10,
            neighborhood: None,
            grid_points: TEST_GRID_POINTS,
            steps: TEST_STEPS,
            query_points: DEF_QUERY_POINTS,
            empty_bin: EmptyBin::Error,
            clamp_edges: true,
        }
    }

    /// Like [`Self::test`], but on a 4000-point grid reduced to 500 steps.
    pub fn high_precision() -> Self {
        Self {
            grid_points: PRECISE_GRID_POINTS,
            steps: PRECISE_STEPS,
            ..Self::test()
        }
    }

    /// Set the reporting unit.
    pub fn with_unit(mut self, unit: EnergyUnit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the neighborhood size; `None` includes all charges.
    pub fn with_neighborhood(mut self, neighborhood: Option<usize>) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Set the number of interior steps.
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Set the number of continuous grid points.
    pub fn with_grid_points(mut self, grid_points: usize) -> Self {
        self.grid_points = grid_points;
        self
    }

    /// Set the empty-bin policy.
    pub fn with_empty_bin(mut self, empty_bin: EmptyBin) -> Self {
        self.empty_bin = empty_bin;
        self
    }

    /// Get the effective neighborhood size.
    pub fn neighborhood(&self) -> usize {
        self.neighborhood.unwrap_or(self.charges)
    }

    /// Build the lattice described by `self`.
    pub fn lattice(&self) -> LResult<Lattice> {
        Lattice::new(self.charge, self.softening, self.spacing, self.charges)
    }

    /// Check every parameter without running anything.
    pub fn validate(&self) -> CResult<()> {
        self.lattice()?;
        ConfigError::check_grid_points(self.grid_points)?;
        ConfigError::check_query_points(self.query_points)?;
        crate::error::DiscretizeError::check_bins(self.steps)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{ DiscretizeError, LatticeError };
    use super::*;

    #[test]
    fn presets() {
        let test = PipelineConfig::test();
        assert_eq!(test, PipelineConfig::default());
        assert_eq!((test.grid_points, test.steps), (400, 100));
        assert_eq!(test.neighborhood(), 10);
        assert!(test.validate().is_ok());
        let precise = PipelineConfig::high_precision();
        assert_eq!((precise.grid_points, precise.steps), (4000, 500));
        assert_eq!(precise.spacing, test.spacing);
        assert!(precise.validate().is_ok());
    }

    #[test]
    fn validation_reports_first_problem() {
        let mut config = PipelineConfig::test();
        config.softening = 0.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::Lattice(LatticeError::BadSoftening(0.0))),
        );
        let config = PipelineConfig::test().with_grid_points(1);
        assert_eq!(config.validate(), Err(ConfigError::BadGridPoints(1)));
        let config = PipelineConfig::test().with_steps(0);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Discretize(DiscretizeError::NoBins)),
        );
        let mut config = PipelineConfig::test();
        config.query_points = 0;
        assert_eq!(config.validate(), Err(ConfigError::BadQueryPoints(0)));
    }

    #[test]
    fn from_toml() {
        let config: PipelineConfig = toml::from_str(
            r#"
            unit = "J"
            neighborhood = 1
            grid-points = 4000
            empty-bin = "interpolate"
            "#
        ).unwrap();
        assert_eq!(config.unit, EnergyUnit::J);
        assert_eq!(config.neighborhood(), 1);
        assert_eq!(config.grid_points, 4000);
        assert_eq!(config.steps, TEST_STEPS);
        assert_eq!(config.empty_bin, EmptyBin::Interpolate);
        assert!(config.clamp_edges);
    }

    #[test]
    fn toml_rejects_unknown_keys_and_units() {
        assert!(toml::from_str::<PipelineConfig>("voisinage = 3").is_err());
        assert!(toml::from_str::<PipelineConfig>("unit = \"erg\"").is_err());
    }
}
