//! Aggregation, severity classification, and site partitioning.
//!
//! Everything in this module is a pure function of the readings presented to
//! it. Statistics are recomputed fresh on every request; nothing is cached
//! or updated incrementally.

pub mod aggregate;
pub mod classify;
pub mod sites;
pub mod types;
pub mod utility;
