//! Radiocall CLI - batch generation of radiocall practice content.
//!
//! This crate provides the `generate_radiocalls` binary and the pieces it is
//! built from:
//! - config: environment configuration
//! - reference: reference data loading with built-in fallback
//! - selector: weighted difficulty selection
//! - store: JSON-lines and dry-run record sinks
//! - batch: the generation loop
//! - report: end-of-run summary

pub mod batch;
pub mod config;
pub mod reference;
pub mod report;
pub mod selector;
pub mod store;

pub use batch::generate_batch;
pub use config::Config;
pub use reference::ReferenceData;
pub use report::RunSummary;
pub use selector::{DifficultyDistribution, DistributionError};
pub use store::{persist_bundle, DryRunSink, JsonLinesSink, RecordSink, StoreError};
