//! Distributor and referral partner intake.
//!
//! The [`intake::scoring`] module holds the deterministic qualification engine; the
//! rest of [`intake`] wraps it with boundary validation, submission handling and
//! the HTTP surface.

pub mod config;
pub mod error;
pub mod intake;
pub mod telemetry;
