#[cfg(not(feature = "std"))]
use core as std;

use std::fmt;

/// Status reported when no node identifier (hardware address) can be determined.
pub const STATUS_NO_NODE: u32 = 1;

/// Status reported when the system clock cannot be read as a time after the Unix epoch.
pub const STATUS_CLOCK: u32 = 2;

/// An error reported by a time-based UUID source.
///
/// This is the only failure a generator call can produce. It carries the status code of the
/// underlying source so that callers can distinguish causes; a call that fails returns no UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GeneratorError {
    status: u32,
}

impl GeneratorError {
    /// Creates an error from a non-ok status code of a time-based source.
    pub const fn new(status: u32) -> Self {
        Self { status }
    }

    /// Returns the status code reported by the source.
    pub const fn status(&self) -> u32 {
        self.status
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "time-based UUID generator failure: {}", self.status)?;
        match self.status {
            STATUS_NO_NODE => write!(f, " (no node identifier available)"),
            STATUS_CLOCK => write!(f, " (system clock before Unix epoch)"),
            _ => Ok(()),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for GeneratorError {}
