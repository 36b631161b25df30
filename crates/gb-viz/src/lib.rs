//! # gb-viz
//!
//! Visualization data artifacts for GridBayes.
//!
//! This crate is intentionally dependency-light and focuses on emitting
//! plot-friendly JSON structures (arrays instead of nested objects).
//! Rendering itself (surface, contour, line plots) lives outside the repo.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Joint-grid surface artifacts.
pub mod surface;

/// Marginal curve artifacts.
pub mod marginal;

/// Full posterior report artifact.
pub mod report;

pub use marginal::MarginalArtifact;
pub use report::PosteriorReportArtifact;
pub use surface::SurfaceArtifact;
