// Copyright 2025 AdPilot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shareable-link codec for calculator state.
//!
//! The four inputs serialize to the query parameters `industry`, `channel`,
//! `aov`, and `budget` (the shared key is `budget`, not `ad_budget`).
//! Decoding is field-by-field: any parameter may pre-fill on its own, but
//! only a complete set of four triggers an automatic calculation. An
//! unrecognized channel value is treated as absent, never as an error.

use adpilot_core::{CalculationInput, Channel};
use serde::Serialize;

#[derive(Serialize)]
struct ShareQuery<'a> {
    industry: &'a str,
    channel: &'a str,
    aov: f64,
    budget: f64,
}

/// Encode a calculation input as a URL query string (no leading `?`).
pub fn encode(input: &CalculationInput) -> String {
    serde_urlencoded::to_string(ShareQuery {
        industry: &input.industry,
        channel: input.channel.as_str(),
        aov: input.aov,
        budget: input.ad_budget,
    })
    .unwrap_or_default()
}

/// Calculator state decoded from a share URL; every field is independently
/// optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartialInput {
    /// Industry name, if present. Not validated against the catalog here.
    pub industry: Option<String>,
    /// Channel, if present and recognized.
    pub channel: Option<Channel>,
    /// Average order value, if present and numeric.
    pub aov: Option<f64>,
    /// Ad budget, if present and numeric (shared under the `budget` key).
    pub budget: Option<f64>,
}

impl PartialInput {
    /// Promote to a full [`CalculationInput`] iff all four fields decoded.
    ///
    /// Partial sets yield `None`: individual fields may still pre-fill a
    /// form, but auto-calculation is all-or-nothing.
    pub fn into_complete(self) -> Option<CalculationInput> {
        Some(CalculationInput {
            industry: self.industry?,
            channel: self.channel?,
            aov: self.aov?,
            ad_budget: self.budget?,
        })
    }
}

/// Decode calculator state from a query string.
///
/// Accepts the raw query with or without a leading `?`. Unknown parameters
/// are ignored; malformed values are treated as absent.
pub fn decode(query: &str) -> PartialInput {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

    let mut out = PartialInput::default();
    for (key, value) in pairs {
        match key.as_str() {
            "industry" if !value.is_empty() => out.industry = Some(value),
            "channel" => out.channel = value.parse().ok(),
            "aov" => out.aov = parse_number(&value),
            "budget" => out.budget = parse_number(&value),
            _ => {}
        }
    }
    out
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}
