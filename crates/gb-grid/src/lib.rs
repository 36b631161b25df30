//! # gb-grid
//!
//! Grid-based two-parameter Bayesian update engine.
//!
//! Discretizes the `[0,1] x [0,1]` parameter space of `(theta, mu)` into an
//! `N x N` grid of cell centers, evaluates a hierarchical prior and an
//! observation likelihood on it, and combines them into a posterior by
//! elementwise multiplication and a single global renormalization. The
//! normalizing mass of the unnormalized posterior is the model evidence.
//!
//! Every stage takes its inputs by reference and returns fresh values:
//! the pipeline is a linear DAG of immutable artifacts, deterministic and
//! idempotent for identical inputs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod grid;
pub mod marginal;
pub mod model;
pub mod normalize;
pub mod posterior;

pub use axis::Axis;
pub use grid::JointGrid;
pub use marginal::{axis_sums, marginalize, MarginalAxis};
pub use model::{HierarchicalBinomialModel, PosteriorUpdate};
pub use normalize::{normalize, normalize_vec};
pub use posterior::{combine, Posterior};
