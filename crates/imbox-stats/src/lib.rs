//! imbox-stats - Statistical primitives for box plot layout
//!
//! This crate provides the numeric building blocks for imbox:
//!
//! - **Quantiles**: percentile estimation with linear or midpoint
//!   interpolation, quartile summaries, IQR fences
//! - **Outliers**: strict fence-based partition into trimmed data and
//!   outliers
//! - **Histogram**: equal-width binning with min-max width
//!   normalization for density silhouettes
//! - **Spline**: shape-preserving monotone cubic interpolation for
//!   smoothed silhouettes
//!
//! # Design Philosophy
//!
//! Every function here is a pure computation over `&[f64]`: no
//! mutation of inputs, no hidden state, and explicit errors for the
//! degenerate cases (empty datasets, flat histograms) that would
//! otherwise surface as NaN downstream.

pub mod error;
pub mod histogram;
pub mod outlier;
pub mod quantile;
pub mod spline;

pub use error::*;
pub use histogram::*;
pub use outlier::*;
pub use quantile::*;
pub use spline::*;
