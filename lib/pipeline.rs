//! The full potential-construction pipeline.
//!
//! For a given [`PipelineConfig`], [`run`] performs the following, with no
//! shared state between stages:
//! 1. build the [`Lattice`] and sample its potential over `grid-points` points
//!    spanning `[0, (N + 1) L]`
//! 2. convert the samples to the configured energy unit
//! 3. [discretize][crate::discretize::discretize] them into `steps` interior
//!    bins
//! 4. evaluate the resulting step profile on a `query-points` grid over the
//!    same span
//!
//! [`compare_neighborhoods`] additionally samples the same lattice with a
//! second neighborhood size to measure the effect of truncating the sum.

use ndarray as nd;
use tracing::{ debug, info };
use crate::{
    config::{ CResult, PipelineConfig },
    discretize::{ discretize, StepProfile },
    error::LengthError,
    lattice::Lattice,
    units::EnergyUnit,
};

/// A continuous potential curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    /// Coordinate array.
    pub x: nd::Array1<f64>,
    /// Potential array, in [`Self::unit`].
    pub v: nd::Array1<f64>,
    /// Unit of the potential array.
    pub unit: EnergyUnit,
}

impl Curve {
    /// Get the smallest and largest potential values.
    pub fn range(&self) -> (f64, f64) {
        self.v.iter()
            .fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), vk| (lo.min(*vk), hi.max(*vk)),
            )
    }

    /// Get the largest absolute pointwise difference from another curve
    /// sampled on the same grid.
    pub fn max_deviation(&self, other: &Self) -> Result<f64, LengthError> {
        LengthError::check(&self.v, &other.v)?;
        let dev
            = self.v.iter().zip(&other.v)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max);
        Ok(dev)
    }
}

/// Output of a single [`run`].
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutput {
    /// Continuous potential.
    pub continuous: Curve,
    /// Discretized potential.
    pub steps: StepProfile,
    /// Discretized potential evaluated on the query grid.
    pub piecewise: Curve,
}

/// Sample the lattice potential described by `config` with an explicit
/// neighborhood size, converted to the configured unit.
pub fn sample(config: &PipelineConfig, lattice: &Lattice, neighborhood: usize)
    -> Curve
{
    let (x, v_ev)
        = lattice.sample_linspace(
            config.grid_points, neighborhood, config.clamp_edges);
    let v: nd::Array1<f64> = config.unit.from_ev(&v_ev);
    Curve { x, v, unit: config.unit }
}

/// Run the full pipeline.
pub fn run(config: &PipelineConfig) -> CResult<PipelineOutput> {
    config.validate()?;
    let lattice = config.lattice()?;
    let continuous = sample(config, &lattice, config.neighborhood());
    let (vmin, vmax) = continuous.range();
    info!(
        vmin,
        vmax,
        unit = config.unit.tag(),
        "sampled continuous potential"
    );

    let steps = discretize(
        &continuous.x, &continuous.v, config.steps, config.empty_bin)?;
    let xq: nd::Array1<f64>
        = nd::Array1::linspace(
            continuous.x[0],
            continuous.x[continuous.x.len() - 1],
            config.query_points,
        );
    let vq = steps.eval_many(&xq)?;
    debug!(
        bins = steps.len(),
        queries = xq.len(),
        "evaluated step profile"
    );
    let piecewise = Curve { x: xq, v: vq, unit: config.unit };
    Ok(PipelineOutput { continuous, steps, piecewise })
}

/// Sample the potential described by `config` twice, once with its own
/// neighborhood and once with `other`, returning both curves in that order.
pub fn compare_neighborhoods(config: &PipelineConfig, other: usize)
    -> CResult<(Curve, Curve)>
{
    config.validate()?;
    let lattice = config.lattice()?;
    let base = sample(config, &lattice, config.neighborhood());
    let alt = sample(config, &lattice, other);
    let deviation = base.max_deviation(&alt)?;
    info!(
        base = config.neighborhood(),
        other,
        deviation,
        "compared neighborhoods"
    );
    Ok((base, alt))
}

#[cfg(test)]
mod tests {
    use crate::{
        discretize::EmptyBin,
        error::{ ConfigError, DiscretizeError },
    };
    use super::*;

    #[test]
    fn one_neighbor_scenario() {
        let config = PipelineConfig::test().with_neighborhood(Some(1));
        let out = run(&config).unwrap();
        assert_eq!(out.continuous.x.len(), 400);
        let (vmin, vmax) = out.continuous.range();
        assert!(vmin.is_finite() && vmax.is_finite());
        assert!(vmin < 0.0);
        assert!(vmin < vmax && vmax <= 0.0);
        assert_eq!(out.continuous.v[0], 0.0);
        assert_eq!(out.continuous.v[399], 0.0);

        let heights = out.steps.heights();
        assert_eq!(heights.len(), 102);
        assert_eq!(heights[0], 0.0);
        assert_eq!(heights[101], 0.0);
        assert!(heights.iter().skip(1).take(100).all(|h| *h < 0.0));

        assert_eq!(out.piecewise.x.len(), 5000);
        assert!(
            out.piecewise.v.iter()
                .all(|vk| heights.iter().any(|h| h == vk))
        );
        assert_eq!(out.piecewise.v[0], 0.0);
        assert_eq!(out.piecewise.v[4999], 0.0);
    }

    #[test]
    fn joules_scale_electron_volts() {
        let config = PipelineConfig::test();
        let ev = run(&config).unwrap();
        let j = run(&config.clone().with_unit(EnergyUnit::J)).unwrap();
        assert_eq!(j.continuous.unit, EnergyUnit::J);
        let (ev_min, _) = ev.continuous.range();
        let (j_min, _) = j.continuous.range();
        assert!((j_min / ev_min - crate::units::e).abs() < 1e-30);
        assert_eq!(j.steps.heights()[0], 0.0);
    }

    #[test]
    fn truncated_neighborhood_is_shallower() {
        let config = PipelineConfig::test();
        let (full, one) = compare_neighborhoods(&config, 1).unwrap();
        assert_eq!(full.x, one.x);
        // edges are clamped in both
        assert!(
            full.v.iter().zip(&one.v).skip(1).take(398)
                .all(|(f, o)| f < o)
        );
        assert!(full.max_deviation(&one).unwrap() > 0.0);
        let (_, same) = compare_neighborhoods(&config, 9).unwrap();
        assert_eq!(full.max_deviation(&same), Ok(0.0));
    }

    #[test]
    fn deviation_needs_matching_grids() {
        let config = PipelineConfig::test();
        let lattice = config.lattice().unwrap();
        let long = sample(&config, &lattice, 1);
        let short = sample(&config.clone().with_grid_points(100), &lattice, 1);
        assert_eq!(long.max_deviation(&short), Err(LengthError(400, 100)));
        assert_eq!(short.max_deviation(&long), Err(LengthError(100, 400)));
    }

    #[test]
    fn coarse_grid_needs_a_policy() {
        let config = PipelineConfig::test().with_grid_points(50);
        assert!(matches!(
            run(&config),
            Err(ConfigError::Discretize(DiscretizeError::EmptyBin { .. })),
        ));
        let config = config.with_empty_bin(EmptyBin::Interpolate);
        let out = run(&config).unwrap();
        assert_eq!(out.steps.len(), 102);
        assert!(out.steps.heights().iter().all(|h| h.is_finite()));
    }

    #[test]
    fn invalid_config_fails_before_sampling() {
        let mut config = PipelineConfig::test();
        config.spacing = 0.0;
        assert!(matches!(run(&config), Err(ConfigError::Lattice(_))));
        assert!(compare_neighborhoods(&config, 1).is_err());
    }
}
