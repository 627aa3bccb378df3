//! The benchmark catalog: ten e-commerce verticals, three channels each.
//!
//! Values are historical platform averages per vertical. Every entry defines
//! all three channels structurally, so partial records are unrepresentable.

use adpilot_core::{BenchmarkRecord, Channel};
use serde::Serialize;

/// Benchmark records for one industry, covering all three channels.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct IndustryBenchmarks {
    /// Catalog key, e.g. "Fashion & Apparel".
    pub name: &'static str,
    /// Facebook channel averages.
    pub facebook: BenchmarkRecord,
    /// Instagram channel averages.
    pub instagram: BenchmarkRecord,
    /// Google channel averages.
    pub google: BenchmarkRecord,
}

impl IndustryBenchmarks {
    /// The record for the given channel.
    pub fn record(&self, channel: Channel) -> &BenchmarkRecord {
        match channel {
            Channel::Facebook => &self.facebook,
            Channel::Instagram => &self.instagram,
            Channel::Google => &self.google,
        }
    }
}

/// Static channel metadata for listings: the channel, its display label,
/// and its icon glyph.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ChannelInfo {
    /// The channel identifier.
    pub channel: Channel,
    /// Display label, e.g. "Google Ads".
    pub label: &'static str,
    /// Icon glyph shown next to the label.
    pub icon: &'static str,
}

const fn record(average_roas: f64, average_cpc: f64, conversion_rate: f64, average_ctr: f64) -> BenchmarkRecord {
    BenchmarkRecord {
        average_roas,
        average_cpc,
        conversion_rate,
        average_ctr,
    }
}

/// The full benchmark table, in display order.
static CATALOG: [IndustryBenchmarks; 10] = [
    IndustryBenchmarks {
        name: "Fashion & Apparel",
        facebook: record(4.1, 0.97, 2.6, 1.59),
        instagram: record(4.4, 1.12, 2.3, 0.93),
        google: record(4.2, 2.45, 4.1, 3.17),
    },
    IndustryBenchmarks {
        name: "Beauty & Cosmetics",
        facebook: record(4.5, 1.81, 3.2, 1.16),
        instagram: record(5.1, 1.70, 2.9, 0.98),
        google: record(3.8, 2.32, 3.3, 2.75),
    },
    IndustryBenchmarks {
        name: "Electronics & Gadgets",
        facebook: record(3.2, 1.27, 1.9, 1.04),
        instagram: record(2.9, 1.33, 1.6, 0.81),
        google: record(3.5, 1.16, 2.8, 2.09),
    },
    IndustryBenchmarks {
        name: "Home & Garden",
        facebook: record(3.6, 0.70, 2.2, 0.99),
        instagram: record(3.3, 0.89, 1.8, 0.72),
        google: record(4.0, 2.78, 2.7, 2.44),
    },
    IndustryBenchmarks {
        name: "Food & Beverage",
        facebook: record(4.2, 0.42, 3.1, 1.20),
        instagram: record(4.6, 0.63, 2.8, 1.06),
        google: record(3.9, 1.95, 4.9, 3.02),
    },
    IndustryBenchmarks {
        name: "Health & Wellness",
        facebook: record(3.9, 1.32, 2.5, 1.00),
        instagram: record(4.1, 1.25, 2.2, 0.88),
        google: record(4.3, 2.62, 3.4, 3.27),
    },
    IndustryBenchmarks {
        name: "Sports & Fitness",
        facebook: record(3.4, 1.05, 2.0, 1.01),
        instagram: record(3.7, 1.18, 1.9, 0.84),
        google: record(3.6, 1.46, 3.1, 2.71),
    },
    IndustryBenchmarks {
        name: "Jewelry & Accessories",
        facebook: record(4.8, 0.86, 1.5, 1.27),
        instagram: record(5.4, 1.08, 1.3, 1.10),
        google: record(4.5, 2.18, 2.1, 2.32),
    },
    IndustryBenchmarks {
        name: "Pet Supplies",
        facebook: record(4.0, 0.61, 2.7, 1.68),
        instagram: record(4.3, 0.76, 2.4, 1.23),
        google: record(4.1, 1.35, 4.4, 2.97),
    },
    IndustryBenchmarks {
        name: "Toys & Hobbies",
        facebook: record(3.8, 0.74, 2.4, 1.46),
        instagram: record(3.5, 0.91, 2.0, 1.05),
        google: record(3.7, 1.24, 3.6, 2.54),
    },
];

/// Look up the full catalog entry for an industry.
///
/// Industry keys are matched exactly; returns `None` for unknown names.
pub fn entry(industry: &str) -> Option<&'static IndustryBenchmarks> {
    CATALOG.iter().find(|e| e.name == industry)
}

/// Look up the benchmark record for an (industry, channel) pair.
///
/// The channel cannot miss once the industry resolves: every catalog entry
/// carries all three channels.
pub fn lookup(industry: &str, channel: Channel) -> Option<&'static BenchmarkRecord> {
    entry(industry).map(|e| e.record(channel))
}

/// Industry names in catalog declaration order; must stay in sync with
/// `CATALOG`.
static INDUSTRY_NAMES: [&str; 10] = [
    "Fashion & Apparel",
    "Beauty & Cosmetics",
    "Electronics & Gadgets",
    "Home & Garden",
    "Food & Beverage",
    "Health & Wellness",
    "Sports & Fitness",
    "Jewelry & Accessories",
    "Pet Supplies",
    "Toys & Hobbies",
];

/// All industry names, in catalog declaration order.
///
/// The order is stable across calls and releases so UI listings stay
/// deterministic.
pub fn industries() -> &'static [&'static str] {
    &INDUSTRY_NAMES
}

/// The fixed channel triple with display metadata, in display order.
pub fn channels() -> [ChannelInfo; 3] {
    [
        ChannelInfo {
            channel: Channel::Facebook,
            label: Channel::Facebook.label(),
            icon: Channel::Facebook.icon(),
        },
        ChannelInfo {
            channel: Channel::Instagram,
            label: Channel::Instagram.label(),
            icon: Channel::Instagram.icon(),
        },
        ChannelInfo {
            channel: Channel::Google,
            label: Channel::Google.label(),
            icon: Channel::Google.icon(),
        },
    ]
}
