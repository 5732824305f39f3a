//! Electrostatic potential of a one-dimensional lattice of softened point
//! charges.
//!
//! Charge `j` (for `j` in `0..N`) sits at `x_j = (j + 1) L`, so that the
//! lattice is centered in the domain `[0, (N + 1) L]`. Each charge contributes
//! a softened Coulomb term
//! ```text
//!            Q e² k
//! V_j(x) = - ------------------
//!            √((x - x_j)² + a²)
//! ```
//! reported in electron-volts, and only the charges within some neighborhood
//! of the charge nearest to `x` are summed.
//!
//! ```
//! use stairpot::lattice::Lattice;
//!
//! let lattice = Lattice::new(1.0, 0.01, 0.05, 10).unwrap();
//! let v = lattice.potential(lattice.position(4), 1);
//! assert!(v.is_finite() && v < 0.0);
//! ```

use ndarray as nd;
use tracing::{ debug, trace };
use crate::{
    Arr1,
    error::LatticeError,
    units::{ e, k },
};

pub type LResult<T> = Result<T, LatticeError>;

/// Softened Coulomb potential energy (eV) at `x` due to a charge `Q` (in units
/// of the elementary charge) at `x0` with softening length `a`.
///
/// The result is finite whenever `a ≠ 0`.
pub fn coulomb_softened(x: f64, x0: f64, Q: f64, a: f64) -> f64 {
    let r = ((x - x0).powi(2) + a.powi(2)).sqrt();
    let V = -Q * e.powi(2) * k / r;
    V / e
}

/// A fixed, evenly spaced row of identical softened point charges.
///
/// All parameters are validated on construction and are never changed
/// afterward.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lattice {
    // charge, in units of the elementary charge
    Q: f64,
    // softening length
    a: f64,
    // lattice spacing
    L: f64,
    // number of charges
    N: usize,
}

impl Lattice {
    /// Create a new `Lattice` of `N` charges `Q` with softening length `a` and
    /// spacing `L`.
    ///
    /// Fails if `a` or `L` is not strictly positive and finite, if `Q` is not
    /// finite, or if `N` is zero.
    pub fn new(Q: f64, a: f64, L: f64, N: usize) -> LResult<Self> {
        LatticeError::check_charge(Q)?;
        LatticeError::check_softening(a)?;
        LatticeError::check_spacing(L)?;
        LatticeError::check_count(N)?;
        Ok(Self { Q, a, L, N })
    }

    /// Get the charge on each site.
    pub fn charge(&self) -> f64 { self.Q }

    /// Get the softening length.
    pub fn softening(&self) -> f64 { self.a }

    /// Get the lattice spacing.
    pub fn spacing(&self) -> f64 { self.L }

    /// Get the number of charges.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.N }

    /// Get the position of the `j`-th charge.
    ///
    /// Indices past the end of the lattice are not checked.
    pub fn position(&self, j: usize) -> f64 { (j + 1) as f64 * self.L }

    /// Get the right-hand end of the domain `[0, (N + 1) L]` spanned by the
    /// lattice.
    pub fn extent(&self) -> f64 { (self.N + 1) as f64 * self.L }

    /// Return the positions of all charges.
    pub fn positions(&self) -> nd::Array1<f64> {
        (0..self.N).map(|j| self.position(j)).collect()
    }

    /// Index of the charge nearest to `x`, clamped to the lattice.
    pub fn nearest(&self, x: f64) -> usize {
        let jc = (x / self.L - 0.5).floor();
        // NaN and negative values land on the first charge
        if jc.is_nan() || jc <= 0.0 {
            0
        } else if jc >= (self.N - 1) as f64 {
            self.N - 1
        } else {
            jc as usize
        }
    }

    /// Range of charge indices summed for a point at `x`: `neighborhood`
    /// charges on either side of the nearest, cut to the lattice.
    pub fn window(&self, x: f64, neighborhood: usize)
        -> std::ops::RangeInclusive<usize>
    {
        let jc = self.nearest(x);
        let lo = jc.saturating_sub(neighborhood);
        let hi = jc.saturating_add(neighborhood).min(self.N - 1);
        lo..=hi
    }

    /// Potential energy (eV) at `x` from the charges within `neighborhood`
    /// sites of the charge nearest to `x`.
    ///
    /// Any `neighborhood ≥ N - 1` includes every charge for every `x`.
    pub fn potential(&self, x: f64, neighborhood: usize) -> f64 {
        self.window(x, neighborhood)
            .map(|j| coulomb_softened(x, self.position(j), self.Q, self.a))
            .sum()
    }

    /// Potential energy (eV) at `x` from every charge in the lattice.
    pub fn potential_all(&self, x: f64) -> f64 {
        self.potential(x, self.N)
    }

    /// Sample the potential over a coordinate array.
    ///
    /// If `clamp_edges` is `true`, the first and last samples are set to
    /// exactly zero, imposing the same boundary condition as the
    /// [discretizer][crate::discretize].
    pub fn sample<S>(&self, x: &Arr1<S>, neighborhood: usize, clamp_edges: bool)
        -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        debug!(
            points = x.len(),
            neighborhood,
            charges = self.N,
            "sampling lattice potential"
        );
        let mut V: nd::Array1<f64>
            = x.mapv(|xk| self.potential(xk, neighborhood));
        if clamp_edges && !V.is_empty() {
            let n = V.len();
            trace!(left = V[0], right = V[n - 1], "clamping sampled edges");
            V[0] = 0.0;
            V[n - 1] = 0.0;
        }
        V
    }

    /// Sample the potential over a "linspace-style" grid covering the lattice's
    /// full domain `[0, (N + 1) L]`, returning the coordinate and potential
    /// arrays.
    pub fn sample_linspace(
        &self,
        points: usize,
        neighborhood: usize,
        clamp_edges: bool,
    ) -> (nd::Array1<f64>, nd::Array1<f64>)
    {
        let x: nd::Array1<f64>
            = nd::Array1::linspace(0.0, self.extent(), points);
        let V = self.sample(&x, neighborhood, clamp_edges);
        (x, V)
    }
}

/// Potential energy (eV) at `x` due to a lattice of `N` charges `Q` with
/// softening length `a` and spacing `L`, summing `neighborhood` charges on each
/// side of the one nearest to `x`.
///
/// This validates the lattice parameters on every call; prefer
/// [`Lattice::potential`] when evaluating many points.
pub fn evaluate(x: f64, Q: f64, a: f64, L: f64, N: usize, neighborhood: usize)
    -> LResult<f64>
{
    Lattice::new(Q, a, L, N).map(|lattice| lattice.potential(x, neighborhood))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * a.abs().max(b.abs())
    }

    fn lattice() -> Lattice { Lattice::new(1.0, 0.01, 0.05, 10).unwrap() }

    #[test]
    fn single_charge_kernel() {
        // at zero distance the kernel is -Q e k / a
        let v0 = coulomb_softened(0.3, 0.3, 1.0, 0.01);
        assert!(rel_eq(v0, -e * k / 0.01, 1e-12));
        assert!(v0.is_finite());
        // symmetric about the charge
        assert!(rel_eq(
            coulomb_softened(0.3 + 0.02, 0.3, 2.0, 0.01),
            coulomb_softened(0.3 - 0.02, 0.3, 2.0, 0.01),
            1e-12,
        ));
        // repulsive for negative charge
        assert!(coulomb_softened(0.0, 0.1, -1.0, 0.01) > 0.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            Lattice::new(1.0, 0.0, 0.05, 10),
            Err(LatticeError::BadSoftening(0.0)),
        );
        assert_eq!(
            Lattice::new(1.0, 0.01, -0.05, 10),
            Err(LatticeError::BadSpacing(-0.05)),
        );
        assert_eq!(Lattice::new(1.0, 0.01, 0.05, 0), Err(LatticeError::NoCharges));
        assert!(evaluate(0.1, 1.0, 0.0, 0.05, 10, 1).is_err());
    }

    #[test]
    fn parameters_round_trip() {
        let lat = Lattice::new(-2.0, 0.02, 0.1, 4).unwrap();
        assert_eq!(lat.charge(), -2.0);
        assert_eq!(lat.softening(), 0.02);
        assert_eq!(lat.spacing(), 0.1);
        assert_eq!(lat.len(), 4);
        assert!(rel_eq(lat.extent(), 0.5, 1e-12));
    }

    #[test]
    fn nearest_index_is_clamped() {
        let lat = lattice();
        assert_eq!(lat.nearest(-1.0), 0);
        assert_eq!(lat.nearest(0.0), 0);
        assert_eq!(lat.nearest(f64::NAN), 0);
        // charge j sits at (j + 1) L
        assert_eq!(lat.nearest(lat.position(3)), 3);
        assert_eq!(lat.nearest(lat.position(3) + 0.024), 3);
        assert_eq!(lat.nearest(lat.position(3) + 0.026), 4);
        assert_eq!(lat.nearest(lat.extent()), 9);
        assert_eq!(lat.nearest(1e6), 9);
    }

    #[test]
    fn window_skips_out_of_range_neighbors() {
        let lat = lattice();
        assert_eq!(lat.window(0.0, 1), 0..=1);
        assert_eq!(lat.window(lat.position(5), 2), 3..=7);
        assert_eq!(lat.window(lat.extent(), 3), 6..=9);
        assert_eq!(lat.window(lat.position(5), usize::MAX), 0..=9);
    }

    #[test]
    fn finite_everywhere_including_on_charges() {
        let lat = lattice();
        for j in 0..lat.len() {
            let v = lat.potential(lat.position(j), 1);
            assert!(v.is_finite() && v < 0.0);
        }
        let (_, V) = lat.sample_linspace(400, 10, false);
        assert!(V.iter().all(|v| v.is_finite() && *v < 0.0));
    }

    #[test]
    fn neighborhood_saturates() {
        let lat = lattice();
        let full: f64
            = lat.positions().iter()
            .map(|xj| coulomb_softened(0.123, *xj, 1.0, 0.01))
            .sum();
        for nb in [9, 10, 11, 50] {
            assert!(rel_eq(lat.potential(0.123, nb), full, 1e-12));
        }
        assert_eq!(lat.potential(0.123, 9), lat.potential(0.123, 100));
        assert_eq!(lat.potential_all(0.123), lat.potential(0.123, 10));
        // a truncated neighborhood is strictly shallower
        assert!(lat.potential(0.123, 1) > full);
    }

    #[test]
    fn symmetric_about_midpoint() {
        let lat = lattice();
        let mid = lat.extent() / 2.0;
        for d in [0.0, 0.013, 0.05, 0.17, 0.3] {
            let vp = lat.potential_all(mid + d);
            let vm = lat.potential_all(mid - d);
            assert!(rel_eq(vp, vm, 1e-9));
        }
    }

    #[test]
    fn clamped_sample_edges_are_zero() {
        let lat = lattice();
        let (x, V) = lat.sample_linspace(400, 1, true);
        assert_eq!(x.len(), 400);
        assert!(rel_eq(x[399], lat.extent(), 1e-12));
        assert_eq!(V[0], 0.0);
        assert_eq!(V[399], 0.0);
        let vmin = V.iter().copied().fold(f64::INFINITY, f64::min);
        let vmax = V.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(vmin.is_finite() && vmin < vmax && vmax <= 0.0);
        assert!(V.iter().skip(1).take(398).all(|v| *v < 0.0));
    }
}
