//! Probability building blocks for GridBayes.
//!
//! This crate hosts the density primitives the grid engine evaluates:
//! - beta log-density/density with overflow clamping
//! - unnormalized binomial observation likelihood
//! - small numeric helpers (clamped exp)

pub mod beta;
pub mod binomial;
pub mod math;
