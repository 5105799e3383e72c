//! charta-stress
//!
//! Command-line driver: config loading, single-chart generation and audit,
//! and the parallel self-audit sweep.

pub mod commands;
pub mod config;
pub mod sweep;
