//! Reduction of a sampled potential to a piecewise-constant profile.
//!
//! The span of the sample grid is divided into `n + 2` bins of equal width. The
//! two outermost bins are pinned to zero, which acts as a hard-wall boundary
//! condition for any solver consuming the profile; each of the `n` interior
//! bins takes the mean of the samples falling inside it.
//!
//! ```
//! use ndarray as nd;
//! use stairpot::discretize::{ discretize, EmptyBin };
//!
//! let x: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 101);
//! let v = x.mapv(|xk| -1.0 - xk);
//! let steps = discretize(&x, &v, 3, EmptyBin::Error).unwrap();
//! assert_eq!(steps.len(), 5);
//! assert_eq!(steps.heights()[0], 0.0);
//! assert_eq!(steps.heights()[4], 0.0);
//! assert!(steps.heights().iter().skip(1).take(3).all(|h| *h < -1.0));
//! ```

use ndarray as nd;
use serde::{ Deserialize, Serialize };
use tracing::{ debug, warn };
use crate::{
    Arr1,
    error::{ DiscretizeError, LengthError },
};

pub type DResult<T> = Result<T, DiscretizeError>;

/// Specifies what to do with an interior bin that contains no samples, as
/// happens when the sample grid is coarse relative to the bin width.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyBin {
    /// Fail with [`DiscretizeError::EmptyBin`].
    #[default]
    Error,
    /// Take the linear interpolation of the samples at the bin center.
    Interpolate,
}

/// A piecewise-constant ("staircase") potential: an ordered sequence of
/// equal-width bins, each with a center and a constant height.
///
/// Profiles produced by [`discretize`] always have zero-height first and last
/// bins and uniformly spaced centers.
#[derive(Clone, Debug, PartialEq)]
pub struct StepProfile {
    // bin centers
    pub(crate) centers: nd::Array1<f64>,
    // bin heights
    pub(crate) heights: nd::Array1<f64>,
}

impl StepProfile {
    /// Create a new `StepProfile` from bare center and height arrays.
    ///
    /// The centers are assumed to be uniformly spaced; this is not checked.
    pub fn new(centers: nd::Array1<f64>, heights: nd::Array1<f64>)
        -> Result<Self, LengthError>
    {
        LengthError::check(&centers, &heights)?;
        Ok(Self { centers, heights })
    }

    /// Get a reference to the bin centers.
    pub fn centers(&self) -> &nd::Array1<f64> { &self.centers }

    /// Get a reference to the bin heights.
    pub fn heights(&self) -> &nd::Array1<f64> { &self.heights }

    /// Get the number of bins, including both boundary bins.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.centers.len() }

    /// Get the smallest and largest bin heights.
    pub fn height_range(&self) -> (f64, f64) {
        self.heights.iter()
            .fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), h| (lo.min(*h), hi.max(*h)),
            )
    }

    /// Decompose into `(centers, heights)`.
    pub fn into_parts(self) -> (nd::Array1<f64>, nd::Array1<f64>) {
        (self.centers, self.heights)
    }
}

// linear interpolation of sorted samples at `x`, saturating to the end values
fn interp_linear<S, T>(xs: &Arr1<S>, ys: &Arr1<T>, x: f64) -> f64
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    let n = xs.len();
    let k = xs.iter().take_while(|xk| **xk <= x).count();
    if k == 0 {
        ys[0]
    } else if k == n {
        ys[n - 1]
    } else {
        let t = (x - xs[k - 1]) / (xs[k] - xs[k - 1]);
        ys[k - 1] + t * (ys[k] - ys[k - 1])
    }
}

/// Discretize a sampled function into `n` interior bins of equal width plus
/// two zero-height boundary bins spanning `[x[0], x[x.len() - 1]]`.
///
/// Each bin collects the samples in its half-open interval `[start, end)`,
/// except for the last bin, which also includes the final sample. Interior
/// bins take the mean of their samples; empty interior bins are handled
/// according to `empty`.
///
/// Fails if `x` has fewer than two points, holds a non-finite value, or is not
/// strictly increasing, if `x` and `V` differ in length, or if `n` is zero.
pub fn discretize<S, T>(x: &Arr1<S>, V: &Arr1<T>, n: usize, empty: EmptyBin)
    -> DResult<StepProfile>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    DiscretizeError::check_bins(n)?;
    DiscretizeError::check_grid(x)?;
    LengthError::check(x, V)?;
    let npoints = x.len();
    let nbins = n + 2;
    let edges: nd::Array1<f64>
        = nd::Array1::linspace(x[0], x[npoints - 1], nbins + 1);
    let centers: nd::Array1<f64>
        = edges.iter().zip(edges.iter().skip(1))
        .map(|(start, end)| (start + end) / 2.0)
        .collect();
    debug!(
        points = npoints,
        bins = nbins,
        width = edges[1] - edges[0],
        "discretizing sampled potential"
    );

    let mut heights: nd::Array1<f64> = nd::Array1::zeros(nbins);
    // samples are sorted, so each bin takes the next run of them
    let mut j: usize = 0;
    for (i, hi) in heights.iter_mut().enumerate() {
        let last = i == nbins - 1;
        let end = edges[i + 1];
        let first = j;
        let mut acc: f64 = 0.0;
        while j < npoints && (last || x[j] < end) {
            acc += V[j];
            j += 1;
        }
        if i == 0 || last { continue; }
        let count = j - first;
        if count > 0 {
            *hi = acc / count as f64;
            continue;
        }
        match empty {
            EmptyBin::Error => {
                return Err(DiscretizeError::EmptyBin {
                    bin: i,
                    start: edges[i],
                    end,
                });
            },
            EmptyBin::Interpolate => {
                warn!(
                    bin = i,
                    center = centers[i],
                    "discretize: bin contains no samples; interpolating"
                );
                *hi = interp_linear(x, V, centers[i]);
            },
        }
    }
    Ok(StepProfile { centers, heights })
}
