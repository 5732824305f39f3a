//! Evaluation of a piecewise-constant profile at arbitrary points.
//!
//! Bin edges are rebuilt from bin centers under the assumption that the
//! centers are uniformly spaced, which holds for any profile produced by
//! [`discretize`][crate::discretize::discretize]. Queries are mapped to the
//! bin whose half-open interval `[edge_i, edge_{i+1})` contains them; queries
//! outside the profile saturate to the nearest boundary bin.
//!
//! ```
//! use ndarray as nd;
//! use stairpot::piecewise::{ evaluate_piecewise, reconstruct_edges };
//!
//! let centers = nd::array![0.5, 1.5, 2.5];
//! let heights = nd::array![0.0, -1.0, 0.0];
//! let edges = reconstruct_edges(&centers).unwrap();
//! assert_eq!(edges, nd::array![0.0, 1.0, 2.0, 3.0]);
//! let q = nd::array![-5.0, 1.0, 1.99, 2.0, 9.0];
//! let v = evaluate_piecewise(&q, &edges, &heights).unwrap();
//! assert_eq!(v, nd::array![0.0, -1.0, -1.0, 0.0, 0.0]);
//! ```

use ndarray as nd;
use crate::{
    Arr1,
    discretize::StepProfile,
    error::PiecewiseError,
};

pub type PResult<T> = Result<T, PiecewiseError>;

/// Rebuild the `centers.len() + 1` bin edges from uniformly spaced bin
/// centers.
///
/// The spacing is taken from the first two centers and is not verified
/// against the rest.
pub fn reconstruct_edges<S>(centers: &Arr1<S>) -> PResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    PiecewiseError::check_centers(centers.len())?;
    let half = (centers[1] - centers[0]) / 2.0;
    let edges: nd::Array1<f64>
        = std::iter::once(centers[0] - half)
        .chain(centers.iter().map(|c| c + half))
        .collect();
    Ok(edges)
}

/// Index of the bin containing `x`, clamped to `[0, nbins - 1]`.
///
/// This is the index of the rightmost edge `≤ x`, so that bins are closed on
/// the left.
pub fn bin_index<S>(edges: &Arr1<S>, nbins: usize, x: f64) -> usize
where S: nd::Data<Elem = f64>
{
    let k = match edges.as_slice() {
        Some(sl) => sl.partition_point(|edge| *edge <= x),
        None => edges.iter().take_while(|edge| **edge <= x).count(),
    };
    k.saturating_sub(1).min(nbins.saturating_sub(1))
}

/// Evaluate the step function defined by `edges` and `heights` at each query
/// point.
///
/// Every returned value is one of `heights`; queries left of the first edge
/// take the first height and queries at or right of the last edge take the
/// last. `edges` must be sorted and one longer than `heights`.
pub fn evaluate_piecewise<S, T, U, A>(
    query: &Arr1<S>,
    edges: &Arr1<T>,
    heights: &Arr1<U>,
) -> PResult<nd::Array1<A>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = A>,
    A: Clone,
{
    let nbins = heights.len();
    PiecewiseError::check_edges(nbins, edges.len())?;
    let values: nd::Array1<A>
        = query.iter()
        .map(|x| heights[bin_index(edges, nbins, *x)].clone())
        .collect();
    Ok(values)
}

impl StepProfile {
    /// Return the bin edges.
    pub fn edges(&self) -> PResult<nd::Array1<f64>> {
        reconstruct_edges(&self.centers)
    }

    /// Get the uniform bin width.
    pub fn width(&self) -> PResult<f64> {
        PiecewiseError::check_centers(self.centers.len())?;
        Ok(self.centers[1] - self.centers[0])
    }

    /// Evaluate the profile at a single point.
    pub fn eval(&self, x: f64) -> PResult<f64> {
        let edges = self.edges()?;
        Ok(self.heights[bin_index(&edges, self.heights.len(), x)])
    }

    /// Evaluate the profile at every query point.
    pub fn eval_many<S>(&self, query: &Arr1<S>) -> PResult<nd::Array1<f64>>
    where S: nd::Data<Elem = f64>
    {
        let edges = self.edges()?;
        evaluate_piecewise(query, &edges, &self.heights)
    }
}
