// Copyright 2025 AdPilot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ad-spend projection engine for AdPilot.
//!
//! Given an industry, an advertising channel, an average order value, and an
//! ad budget, this crate resolves the matching benchmark record and runs the
//! five-step projection pipeline, producing headline metrics plus an ordered
//! step-by-step explanation trail.
//!
//! # Features
//!
//! - Pure, idempotent calculation with no hidden state
//! - Full input validation before any arithmetic runs
//! - Formula-step snapshots with the literal numbers used
//! - Currency and number formatting for presentation
//! - Shareable-link query codec for pre-filling and auto-running
//!
//! # Example
//!
//! ```
//! use adpilot_core::{CalculationInput, Channel};
//! use adpilot_projection::calculate;
//!
//! let input = CalculationInput {
//!     industry: "Fashion & Apparel".to_string(),
//!     channel: Channel::Google,
//!     aov: 75.0,
//!     ad_budget: 5000.0,
//! };
//!
//! let projection = calculate(&input).unwrap();
//! assert_eq!(projection.steps.len(), 5);
//! assert_eq!(projection.result.campaign_days, 30);
//! ```

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod engine;
pub mod format;
pub mod report;
pub mod share;

pub use engine::{calculate, project, MINIMUM_DAILY_SPEND};
pub use report::generate_report;
pub use share::{decode, encode, PartialInput};
