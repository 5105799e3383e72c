//! charta-core
//!
//! Pure domain types shared by the generator and the validator: the clinical
//! context, per-visit state, the document shape audited by the validator,
//! and the chart policy both halves read. No engine logic lives here.

pub mod error;
pub mod models;
pub mod policy;
