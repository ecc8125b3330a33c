//! Platform services consumed by the terminal core.
//!
//! Commands never reach for the host directly; anything that observes the
//! outside world goes through a trait defined here so tests can substitute
//! a deterministic implementation.

mod services;

pub use services::{Clock, FixedClock, SystemClock};
