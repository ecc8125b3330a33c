//! Platform service traits and desktop implementation.

use chrono::{DateTime, FixedOffset, Local};
use folio_types::error::Result;

// ---------------------------------------------------------------------------
// Time service
// ---------------------------------------------------------------------------

/// Abstraction over the wall clock.
pub trait Clock {
    /// Current wall-clock time with the local UTC offset.
    fn now(&self) -> Result<DateTime<FixedOffset>>;
}

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Result<DateTime<FixedOffset>> {
        Ok(Local::now().fixed_offset())
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime<FixedOffset>> {
        Ok(self.0)
    }
}
