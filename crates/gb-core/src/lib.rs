//! # gb-core
//!
//! Shared error and result types for GridBayes.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{Error, Result};
