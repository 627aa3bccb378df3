// Copyright 2025 AdPilot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the projection engine.
//!
//! Two classes of failure exist:
//!
//! - [`ValidationError`]: the caller supplied missing or out-of-domain
//!   inputs. Surfaced directly with every offending field named; no partial
//!   computation is performed.
//! - [`DataIntegrityError`]: the static benchmark catalog itself violates
//!   its invariants. This is a data/programming error, fatal to the
//!   calculation but not to the process, and must never be reachable from
//!   user input alone.

use crate::types::Channel;
use thiserror::Error;

/// A single missing or invalid calculation input field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldIssue {
    /// The industry name does not match any catalog entry.
    #[error("unknown industry: {0:?}")]
    UnknownIndustry(String),

    /// The channel name is not one of facebook, instagram, google.
    #[error("unrecognized channel: {0:?}")]
    UnknownChannel(String),

    /// Average order value must be strictly positive.
    #[error("average order value must be positive, got {0}")]
    NonPositiveAov(f64),

    /// Ad budget must be strictly positive.
    #[error("ad budget must be positive, got {0}")]
    NonPositiveBudget(f64),
}

/// One or more calculation inputs are missing or out of domain.
///
/// Carries the complete list of offending fields so the caller can report
/// every deficiency at once rather than one per attempt.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid calculation input: {}", .issues.iter().map(|i| i.to_string()).collect::<Vec<_>>().join("; "))]
pub struct ValidationError {
    /// Every field that failed validation, in input-field order.
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Build a validation error from collected field issues.
    ///
    /// Callers must only construct this with at least one issue.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        debug_assert!(!issues.is_empty());
        Self { issues }
    }
}

/// A resolved benchmark record violates catalog invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataIntegrityError {
    /// Benchmark CPC must be strictly positive.
    #[error("benchmark CPC for {industry}/{channel} must be positive, got {value}")]
    NonPositiveCpc {
        /// Catalog industry key.
        industry: String,
        /// Channel within the industry entry.
        channel: Channel,
        /// The corrupt value.
        value: f64,
    },

    /// Benchmark conversion rate must lie in (0, 100].
    #[error("benchmark conversion rate for {industry}/{channel} must be in (0, 100], got {value}")]
    InvalidConversionRate {
        /// Catalog industry key.
        industry: String,
        /// Channel within the industry entry.
        channel: Channel,
        /// The corrupt value.
        value: f64,
    },

    /// Benchmark ROAS must be strictly positive.
    #[error("benchmark ROAS for {industry}/{channel} must be positive, got {value}")]
    NonPositiveRoas {
        /// Catalog industry key.
        industry: String,
        /// Channel within the industry entry.
        channel: Channel,
        /// The corrupt value.
        value: f64,
    },
}

/// Any error the projection engine can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Caller-supplied inputs were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The static benchmark catalog is corrupt.
    #[error(transparent)]
    DataIntegrity(#[from] DataIntegrityError),
}

impl Error {
    /// Whether this error identifies a caller mistake (as opposed to
    /// corrupted catalog data).
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_issue() {
        let err = ValidationError::new(vec![
            FieldIssue::NonPositiveAov(0.0),
            FieldIssue::NonPositiveBudget(-50.0),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("average order value"));
        assert!(msg.contains("ad budget"));
        assert!(msg.contains("; "));
    }

    #[test]
    fn test_unknown_industry_message() {
        let err = ValidationError::new(vec![FieldIssue::UnknownIndustry(
            "Underwater Basketweaving".to_string(),
        )]);
        assert!(err.to_string().contains("Underwater Basketweaving"));
    }

    #[test]
    fn test_integrity_error_names_record() {
        let err = DataIntegrityError::NonPositiveCpc {
            industry: "Fashion & Apparel".to_string(),
            channel: Channel::Google,
            value: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("Fashion & Apparel"));
        assert!(msg.contains("google"));
    }

    #[test]
    fn test_error_classification() {
        let validation: Error = ValidationError::new(vec![FieldIssue::NonPositiveAov(-1.0)]).into();
        assert!(validation.is_validation());

        let integrity: Error = DataIntegrityError::NonPositiveRoas {
            industry: "Electronics".to_string(),
            channel: Channel::Facebook,
            value: -2.0,
        }
        .into();
        assert!(!integrity.is_validation());
    }
}
