//! Benchmark utilities for the beacon dispatcher.
//!
//! This crate provides shared infrastructure for the Criterion benchmarks:
//!
//! - **Name generation**: Deterministic, realistic-looking event name
//!   workloads via a seeded RNG
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench -p beacon_bench
//!
//! # Run a specific benchmark group
//! cargo bench -p beacon_bench -- emit
//! ```
//!
//! Results are written to `target/criterion/` with HTML reports for
//! visualization.

pub mod names;
