// Copyright 2025 AdPilot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Domain types for ad-spend projections.
//!
//! The advertising channel is a closed enum rather than a free-form string:
//! unknown channel names are rejected at the boundary instead of silently
//! producing an empty lookup.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An advertising channel supported by the benchmark catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Facebook feed and retargeting placements.
    Facebook,
    /// Instagram feed, stories, and reels placements.
    Instagram,
    /// Google Search and Shopping campaigns.
    Google,
}

impl Channel {
    /// All channels in their fixed display order.
    pub const ALL: [Channel; 3] = [Channel::Facebook, Channel::Instagram, Channel::Google];

    /// The lowercase wire name, as used in share URLs and serialized forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Facebook => "facebook",
            Channel::Instagram => "instagram",
            Channel::Google => "google",
        }
    }

    /// Human-readable display label.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Facebook => "Facebook Ads",
            Channel::Instagram => "Instagram Ads",
            Channel::Google => "Google Ads",
        }
    }

    /// Icon glyph shown next to the channel in listings.
    pub fn icon(&self) -> &'static str {
        match self {
            Channel::Facebook => "📘",
            Channel::Instagram => "📸",
            Channel::Google => "🔍",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = crate::error::FieldIssue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "facebook" => Ok(Channel::Facebook),
            "instagram" => Ok(Channel::Instagram),
            "google" => Ok(Channel::Google),
            other => Err(crate::error::FieldIssue::UnknownChannel(other.to_string())),
        }
    }
}

/// Historical performance averages for one (industry, channel) pair.
///
/// Records are static catalog data; every field is expected to be strictly
/// positive, with `conversion_rate` additionally bounded by 100. Violations
/// surface as [`crate::DataIntegrityError`] at calculation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Historical return-on-ad-spend multiple.
    pub average_roas: f64,
    /// Average cost per click, in currency units.
    pub average_cpc: f64,
    /// Percentage of clicks converted to orders, in (0, 100].
    pub conversion_rate: f64,
    /// Click-through rate percentage. Informational only: the pipeline never
    /// consumes it, but it is copied through for display.
    pub average_ctr: f64,
}

/// One calculation request. Created from user-supplied values or decoded
/// from a share URL, validated, and discarded after producing a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Industry name; must exactly match a catalog key.
    pub industry: String,
    /// Advertising channel.
    pub channel: Channel,
    /// Average order value. Must be strictly positive.
    pub aov: f64,
    /// Total ad budget to allocate. Must be strictly positive.
    pub ad_budget: f64,
}

/// The computed projection metrics, produced fresh per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Reference CPC needed to hit the benchmark ROAS at the given AOV.
    ///
    /// Computed from the *benchmark* ROAS, not the derived `actual_roas`,
    /// and independent of the click/order/revenue chain.
    pub target_cpc: f64,
    /// Projected revenue across the full budget.
    pub expected_revenue: f64,
    /// Projected number of orders.
    pub expected_orders: f64,
    /// Projected number of ad clicks the budget buys.
    pub expected_clicks: f64,
    /// Projected return on ad spend (`expected_revenue / ad_budget`).
    pub actual_roas: f64,
    /// Whole days the budget lasts at `daily_spend`, rounded up.
    pub campaign_days: u32,
    /// Daily allocation: `ad_budget / 30`, floored at the minimum daily spend.
    pub daily_spend: f64,
    /// Benchmark ROAS, copied through for display.
    pub channel_roas: f64,
    /// Benchmark CPC, copied through for display.
    pub channel_cpc: f64,
    /// Benchmark conversion rate, copied through for display.
    pub channel_conversion_rate: f64,
    /// Benchmark CTR, copied through for display.
    pub channel_ctr: f64,
}

/// One stage of the calculation, captured for a step-by-step explanation.
///
/// The `substituted` expression holds the literal numeric values used at
/// calculation time; it is a snapshot, never re-derived at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaStep {
    /// Short name of the stage, e.g. "Expected Clicks".
    pub label: String,
    /// The symbolic formula, e.g. "Ad Budget ÷ Average CPC".
    pub formula: String,
    /// The formula with the actual numbers substituted in.
    pub substituted: String,
    /// The formatted result of this stage.
    pub result: String,
}

/// A complete projection: the result metrics plus the ordered explanation
/// trail. Step order matches pipeline dependency order and is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// The computed metrics.
    pub result: CalculationResult,
    /// The five pipeline stages, in execution order.
    pub steps: Vec<FormulaStep>,
}
