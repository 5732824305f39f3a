//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Neighborhoods](#neighborhoods)
//! - [Discretization](#discretization)
//! - [Units](#units)
//!
//! # Background
//! An electron moving along a line of fixed ions sees the superposition of the
//! ions' Coulomb potentials. In one dimension the bare 1/|*x*| kernel is not
//! integrable at the origin, so the usual practice[^1] is to regularize it with
//! a softening length *a* > 0:
//! ```text
//!              Q e² k
//! V(x) = - Σ  ------------------
//!          j  √((x - x_j)² + a²)
//! ```
//! with *k* = 1/(4*π* *ε*₀) and charges at *x*_j = (*j* + 1) *L* for
//! *j* ∊ {0, ..., *N* - 1}. The kernel is bounded by *Q* *e*² *k* / *a*, so
//! the potential is finite everywhere, including exactly on top of a charge.
//! Dividing through by *e* gives the energy in electron-volts.
//!
//! Placing the charges at (*j* + 1) *L* rather than *j* *L* leaves a margin of
//! one lattice spacing on either side, so that the domain [0, (*N* + 1) *L*]
//! is symmetric about its midpoint. With every charge included, the potential
//! then satisfies *V*(*m* + *d*) = *V*(*m* - *d*) about the midpoint *m*.
//!
//! # Neighborhoods
//! Rather than summing every charge, the sum can be restricted to the charge
//! nearest to *x*,
//! ```text
//! j_c = clamp(⌊x / L - 1/2⌋, 0, N - 1)
//! ```
//! and the `neighborhood` charges on either side of it. Indices falling off
//! either end of the lattice are skipped. This models a finite screening
//! range: with a neighborhood of 1, each point only feels its nearest three
//! charges. Any neighborhood of at least *N* - 1 recovers the full sum for
//! every *x*, and larger values change nothing.
//!
//! Because the window jumps when *x* crosses a midpoint between charges, a
//! truncated potential has small discontinuities there.
//!
//! # Discretization
//! Solvers for piecewise-constant potentials (e.g. transfer-matrix methods)
//! need the potential as a staircase. The sampled span [*x*₀, *x*_end] is cut
//! into *n* + 2 bins of width
//! ```text
//! Δ = (x_end - x₀) / (n + 2)
//! ```
//! Each bin collects the samples in [start, end), the last bin also taking the
//! final sample. Interior bins take the mean of their samples, while the first
//! and last bins are pinned to zero:
//! ```text
//!        ⎧ 0                 i = 0 or i = n + 1
//! V[i] = ⎨
//!        ⎩ mean{ V(x) : x ∊ bin i }  otherwise
//! ```
//! The zero boundary bins act as a reference level outside the lattice. A bin
//! can hold no samples at all when Δ is smaller than the sample spacing; this
//! is either an error or filled by linear interpolation at the bin center (see
//! [`EmptyBin`][crate::discretize::EmptyBin]).
//!
//! To evaluate the staircase at arbitrary points, edges are rebuilt from the
//! (uniform) bin centers *c*_i as *c*₀ - Δ/2 followed by *c*_i + Δ/2, and each
//! point is assigned the height of the bin whose rightmost edge lies at or
//! below it. Points outside the edges take the height of the nearest boundary
//! bin, i.e. zero for a profile from the discretizer.
//!
//! # Units
//! Energies are computed in electron-volts and may be reported in joules via
//! [`EnergyUnit`][crate::units::EnergyUnit]. Positions carry whatever length
//! unit *L* and *a* are given in; the electron-volt values above assume meters.
//!
//! [^1]: J. Javanainen, J. H. Eberly, and Q. Su, "Numerical simulations of
//! multiphoton ionization and above-threshold electron spectra." Phys. Rev. A
//! **38**, 3430 (1988).
