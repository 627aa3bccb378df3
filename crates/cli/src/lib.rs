//! CLI for the AdPilot projection engine.
//!
//! This crate provides the command-line interface for AdPilot, exposing the
//! ad-spend projection calculator, the benchmark catalog listings, and the
//! share-link codec.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use adpilot_core::{CalculationInput, Channel};
use adpilot_projection::{calculate, decode, encode, generate_report, PartialInput};
use clap::{Parser, Subcommand};

/// AdPilot CLI.
#[derive(Parser, Debug)]
#[command(name = "adpilot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project ad-spend performance for an industry, channel, AOV, and budget.
    ///
    /// Inputs can come from flags, from a shared query string via
    /// --from-query, or both (flags win). All four inputs must be present
    /// one way or the other.
    Project {
        /// Industry name, exactly as listed by `adpilot industries`.
        #[arg(short, long)]
        industry: Option<String>,

        /// Advertising channel: facebook, instagram, or google.
        #[arg(short, long)]
        channel: Option<Channel>,

        /// Average order value, in dollars.
        #[arg(short, long)]
        aov: Option<f64>,

        /// Total ad budget, in dollars.
        #[arg(short, long)]
        budget: Option<f64>,

        /// Decode inputs from a shared query string
        /// (e.g. "industry=Pet+Supplies&channel=google&aov=40&budget=500").
        #[arg(long)]
        from_query: Option<String>,

        /// Output format: text, json, or markdown (default: text).
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Also print the shareable query string for these inputs.
        #[arg(short, long)]
        share: bool,
    },

    /// List the industries in the benchmark catalog, in display order.
    Industries,

    /// List the supported advertising channels.
    Channels,
}

/// Run the CLI with the given arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Project {
            industry,
            channel,
            aov,
            budget,
            from_query,
            format,
            share,
        } => {
            let decoded = from_query.as_deref().map(decode).unwrap_or_default();
            let merged = PartialInput {
                industry: industry.or(decoded.industry),
                channel: channel.or(decoded.channel),
                aov: aov.or(decoded.aov),
                budget: budget.or(decoded.budget),
            };
            let input = complete_input(merged)?;
            let projection = calculate(&input)?;

            match format.as_str() {
                "text" => print!("{}", render_text(&input, &projection)),
                "json" => println!("{}", serde_json::to_string_pretty(&projection)?),
                "markdown" => print!("{}", generate_report(&input, &projection)),
                other => return Err(format!("unknown output format: {other:?}").into()),
            }

            if share {
                println!("\nShare link query: {}", encode(&input));
            }

            Ok(())
        }
        Commands::Industries => {
            for industry in adpilot_benchmarks::industries() {
                println!("{industry}");
            }
            Ok(())
        }
        Commands::Channels => {
            for info in adpilot_benchmarks::channels() {
                println!("{} {} ({})", info.icon, info.label, info.channel);
            }
            Ok(())
        }
    }
}

fn complete_input(partial: PartialInput) -> Result<CalculationInput, Box<dyn std::error::Error>> {
    let mut missing = Vec::new();
    if partial.industry.is_none() {
        missing.push("--industry");
    }
    if partial.channel.is_none() {
        missing.push("--channel");
    }
    if partial.aov.is_none() {
        missing.push("--aov");
    }
    if partial.budget.is_none() {
        missing.push("--budget");
    }
    match partial.into_complete() {
        Some(input) => Ok(input),
        None => Err(format!("missing required inputs: {}", missing.join(", ")).into()),
    }
}

fn render_text(input: &CalculationInput, projection: &adpilot_core::Projection) -> String {
    use adpilot_projection::format::{format_currency, format_roas};
    use std::fmt::Write;

    let r = &projection.result;
    let mut output = String::new();
    writeln!(
        output,
        "{} via {}: AOV {}, budget {}",
        input.industry,
        input.channel.label(),
        format_currency(input.aov),
        format_currency(input.ad_budget)
    )
    .unwrap();
    writeln!(output).unwrap();
    for step in &projection.steps {
        writeln!(
            output,
            "  {:<18} {} = {} -> {}",
            step.label, step.formula, step.substituted, step.result
        )
        .unwrap();
    }
    writeln!(output).unwrap();
    writeln!(
        output,
        "Projected revenue {} at {} ROAS over {} days ({} / day), target CPC {}",
        format_currency(r.expected_revenue),
        format_roas(r.actual_roas),
        r.campaign_days,
        format_currency(r.daily_spend),
        format_currency(r.target_cpc)
    )
    .unwrap();
    output
}
