// Copyright 2025 AdPilot Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown report generation for projections.
//!
//! This module renders a projection into a markdown document suitable for
//! sharing or archiving: headline metrics, the step-by-step formula trail,
//! and the benchmark averages the calculation ran against.

use adpilot_core::{CalculationInput, Projection};
use std::fmt::Write;

use crate::format::{format_currency, format_percent, format_roas};

/// Generate a markdown report for a completed projection.
pub fn generate_report(input: &CalculationInput, projection: &Projection) -> String {
    let mut output = String::new();
    let r = &projection.result;

    writeln!(output, "# Ad Spend Projection").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "Generated: {}", chrono::Utc::now().to_rfc3339()).unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "**{}** via **{}**: AOV {}, budget {}",
        input.industry,
        input.channel.label(),
        format_currency(input.aov),
        format_currency(input.ad_budget)
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(output, "## Projected Performance").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "- Expected revenue: {}", format_currency(r.expected_revenue)).unwrap();
    writeln!(output, "- Projected ROAS: {}", format_roas(r.actual_roas)).unwrap();
    writeln!(
        output,
        "- Campaign length: {} days at {} per day",
        r.campaign_days,
        format_currency(r.daily_spend)
    )
    .unwrap();
    writeln!(output, "- Target CPC: {}", format_currency(r.target_cpc)).unwrap();
    writeln!(output).unwrap();

    writeln!(output, "## How It Was Calculated").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Step | Formula | Substitution | Result |").unwrap();
    writeln!(output, "|------|---------|--------------|--------|").unwrap();
    for step in &projection.steps {
        writeln!(
            output,
            "| {} | {} | {} | {} |",
            step.label, step.formula, step.substituted, step.result
        )
        .unwrap();
    }
    writeln!(output).unwrap();

    writeln!(output, "## Channel Benchmarks").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "- Average ROAS: {}", format_roas(r.channel_roas)).unwrap();
    writeln!(output, "- Average CPC: {}", format_currency(r.channel_cpc)).unwrap();
    writeln!(
        output,
        "- Conversion rate: {}",
        format_percent(r.channel_conversion_rate)
    )
    .unwrap();
    writeln!(output, "- Average CTR: {}", format_percent(r.channel_ctr)).unwrap();

    output
}
