#![allow(non_snake_case)]

//! Provides functions and higher-level constructs to build the one-dimensional
//! electrostatic potential of a periodic lattice of softened point charges and
//! to reduce it to a piecewise-constant ("staircase") profile suitable as input
//! to a discretized solver of the one-dimensional Schrödinger equation.
//!
//! The pipeline has three stages:
//! - [`lattice`]: superposition of softened-Coulomb terms over a bounded
//!   neighborhood of charges
//! - [`discretize`]: equal-width binning with boundary bins clamped to zero
//! - [`piecewise`]: bin-edge reconstruction and step-function lookup
//!
//! [`pipeline`] strings these together for a given [`config::PipelineConfig`].
//!
//! ```
//! use stairpot::{ config::PipelineConfig, pipeline };
//!
//! let config = PipelineConfig::test().with_neighborhood(Some(1));
//! let out = pipeline::run(&config).unwrap();
//! assert_eq!(out.steps.len(), 102);
//! assert_eq!(out.steps.heights()[0], 0.0);
//! assert_eq!(out.steps.heights()[101], 0.0);
//! ```
//!
//! See [`docs`] for theoretical background.

pub mod error;
pub mod units;
pub mod lattice;
pub mod discretize;
pub mod piecewise;
pub mod config;
pub mod pipeline;

pub mod docs;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
