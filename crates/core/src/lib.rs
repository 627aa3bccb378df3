// Copyright 2025 AdPilot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared domain types for the AdPilot ad-spend projection engine.
//!
//! This crate defines the vocabulary the rest of the workspace speaks:
//! advertising channels, benchmark records, calculation inputs and results,
//! and the error taxonomy separating caller mistakes ([`ValidationError`])
//! from corrupted catalog data ([`DataIntegrityError`]).
//!
//! # Modules
//!
//! - [`types`] - Channels, benchmark records, inputs, results, formula steps
//! - [`error`] - The two-class error taxonomy and crate-level `Error`

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod error;
pub mod types;

pub use error::{DataIntegrityError, Error, FieldIssue, ValidationError};
pub use types::{
    BenchmarkRecord, CalculationInput, CalculationResult, Channel, FormulaStep, Projection,
};

/// Result type used across the AdPilot workspace.
pub type Result<T> = std::result::Result<T, Error>;
