//! Tracks metadata for a hit testing session.

use crate::log;

/// Metadata for a hit testing session.
///
/// A [`crate::RegionMap`] carries one of these from the moment it is created, so that
/// code further down can decide whether to print diagnostics without looking at the
/// environment again.
#[derive(Clone, Debug)]
pub struct Session {
    log_enabled: bool,
}

impl Session {
    /// Creates a session whose logging follows the `SVGHIT_LOG` environment variable.
    pub fn new() -> Self {
        Self {
            log_enabled: log::log_enabled(),
        }
    }

    /// Creates a session that never logs, independent of the environment.
    pub fn new_for_test_suite() -> Self {
        Self { log_enabled: false }
    }

    /// Creates a session with logging forced on or off.
    pub fn with_logging(log_enabled: bool) -> Self {
        Self { log_enabled }
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_logging_flag_is_kept() {
        assert!(Session::with_logging(true).log_enabled());
        assert!(!Session::with_logging(false).log_enabled());
        assert!(!Session::new_for_test_suite().log_enabled());
    }
}
