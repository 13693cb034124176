//! Seed quantity calculator shared by every farm-management component that
//! recommends seed amounts for a planting.
//!
//! The calculator itself ([`logic::compute_seed_totals`]) is pure and never
//! fails: bad input degrades to sentinel values and callers branch on
//! [`models::SeedTotalsResult::computed`].

pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod render;

pub use error::{Result, SeedRateError};
pub use logic::compute_seed_totals;
