//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray as nd;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from [`EnergyUnit`][crate::units::EnergyUnit] parsing when an
/// energy-unit tag is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported energy unit {0:?}; expected \"eV\" or \"J\"")]
pub struct UnitError(pub String);

/// Returned from lattice construction in [`lattice`][crate::lattice].
#[derive(Debug, Error, PartialEq)]
pub enum LatticeError {
    /// Returned when a non-positive or non-finite softening length is
    /// encountered.
    #[error("softening length must be finite and greater than 0; got {0}")]
    BadSoftening(f64),

    /// Returned when a non-positive or non-finite lattice spacing is
    /// encountered.
    #[error("lattice spacing must be finite and greater than 0; got {0}")]
    BadSpacing(f64),

    /// Returned when a non-finite charge is encountered.
    #[error("charge must be finite; got {0}")]
    BadCharge(f64),

    /// Returned when the lattice would hold no charges.
    #[error("lattice must hold at least one charge")]
    NoCharges,
}

impl LatticeError {
    pub(crate) fn check_softening(a: f64) -> Result<(), Self> {
        (a.is_finite() && a > 0.0).then_some(()).ok_or(Self::BadSoftening(a))
    }

    pub(crate) fn check_spacing(L: f64) -> Result<(), Self> {
        (L.is_finite() && L > 0.0).then_some(()).ok_or(Self::BadSpacing(L))
    }

    pub(crate) fn check_charge(Q: f64) -> Result<(), Self> {
        Q.is_finite().then_some(()).ok_or(Self::BadCharge(Q))
    }

    pub(crate) fn check_count(N: usize) -> Result<(), Self> {
        (N != 0).then_some(()).ok_or(Self::NoCharges)
    }
}

/// Returned from [`discretize`][crate::discretize::discretize].
#[derive(Debug, Error, PartialEq)]
pub enum DiscretizeError {
    /// Returned when the sample grid holds fewer than two points.
    #[error("sample grid must hold at least 2 points; got {0}")]
    ShortGrid(usize),

    /// Returned when the sample grid holds a NaN or infinite coordinate.
    #[error("sample grid must be finite; x[{0}] = {1}")]
    NonFinite(usize, f64),

    /// Returned when the sample grid is not strictly increasing.
    #[error("sample grid must be strictly increasing; x[{0}] = {1} follows {2}")]
    NotIncreasing(usize, f64, f64),

    /// Returned when zero interior bins are requested.
    #[error("at least one interior bin is required")]
    NoBins,

    /// Returned under [`EmptyBin::Error`][crate::discretize::EmptyBin::Error]
    /// when an interior bin contains no samples.
    #[error("interior bin {bin} over [{start}, {end}) contains no samples")]
    EmptyBin { bin: usize, start: f64, end: f64 },

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl DiscretizeError {
    pub(crate) fn check_grid<S>(x: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        let n = x.len();
        if n < 2 { return Err(Self::ShortGrid(n)); }
        if let Some((k, xk)) = x.iter().enumerate().find(|(_, xk)| !xk.is_finite()) {
            return Err(Self::NonFinite(k, *xk));
        }
        x.iter().zip(x.iter().skip(1)).enumerate()
            .find(|(_, (xk, xkp1))| !(xkp1 > xk))
            .map_or(Ok(()), |(k, (xk, xkp1))| {
                Err(Self::NotIncreasing(k + 1, *xkp1, *xk))
            })
    }

    pub(crate) fn check_bins(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::NoBins)
    }
}

/// Returned from functions in [`piecewise`][crate::piecewise].
#[derive(Debug, Error, PartialEq)]
pub enum PiecewiseError {
    /// Returned when fewer than two bin centers are given, so that no spacing
    /// can be inferred.
    #[error("at least 2 bin centers are required to infer a spacing; got {0}")]
    FewCenters(usize),

    /// Returned when the edge array is not exactly one longer than the height
    /// array.
    #[error("expected {0} + 1 bin edges; got {1}")]
    EdgeCount(usize, usize),

    /// Returned when there are no heights to look up.
    #[error("step profile has no bins")]
    NoBins,
}

impl PiecewiseError {
    pub(crate) fn check_centers(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::FewCenters(n))
    }

    pub(crate) fn check_edges(n_heights: usize, n_edges: usize)
        -> Result<(), Self>
    {
        if n_heights == 0 { return Err(Self::NoBins); }
        (n_edges == n_heights + 1).then_some(())
            .ok_or(Self::EdgeCount(n_heights, n_edges))
    }
}

/// Returned from [`PipelineConfig::validate`][crate::config::PipelineConfig::validate]
/// and the functions in [`pipeline`][crate::pipeline].
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Returned when the continuous grid holds fewer than two points.
    #[error("grid-points must be at least 2; got {0}")]
    BadGridPoints(usize),

    /// Returned when the query grid holds no points.
    #[error("query-points must be at least 1; got {0}")]
    BadQueryPoints(usize),

    /// [`UnitError`]
    #[error("unit error: {0}")]
    Unit(#[from] UnitError),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`LatticeError`]
    #[error("lattice error: {0}")]
    Lattice(#[from] LatticeError),

    /// [`DiscretizeError`]
    #[error("discretization error: {0}")]
    Discretize(#[from] DiscretizeError),

    /// [`PiecewiseError`]
    #[error("piecewise evaluation error: {0}")]
    Piecewise(#[from] PiecewiseError),
}

impl ConfigError {
    pub(crate) fn check_grid_points(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::BadGridPoints(n))
    }

    pub(crate) fn check_query_points(n: usize) -> Result<(), Self> {
        (n != 0).then_some(()).ok_or(Self::BadQueryPoints(n))
    }
}
