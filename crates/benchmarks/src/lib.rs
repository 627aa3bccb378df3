//! Static advertising benchmark catalog for AdPilot.
//!
//! This crate holds the read-only table of historical performance averages
//! (ROAS, CPC, conversion rate, CTR) per e-commerce vertical and advertising
//! channel, and the lookup operations the projection engine resolves inputs
//! against.
//!
//! # Quick Start
//!
//! ```
//! use adpilot_benchmarks::{industries, lookup};
//! use adpilot_core::Channel;
//!
//! let record = lookup("Fashion & Apparel", Channel::Google).unwrap();
//! assert_eq!(record.average_cpc, 2.45);
//!
//! // Industries are listed in stable catalog declaration order.
//! assert!(industries().contains(&"Fashion & Apparel"));
//! ```
//!
//! The catalog is a process-wide constant. There is no loading step, no
//! mutation, and no locking; concurrent lookups are trivially safe.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod catalog;

pub use catalog::{channels, entry, industries, lookup, ChannelInfo, IndustryBenchmarks};
