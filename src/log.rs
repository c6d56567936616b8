//! Utilities for logging messages from the library.

use once_cell::sync::Lazy;

/// Name of the environment variable that turns on logging.
pub const LOG_ENV_VAR: &str = "SVGHIT_LOG";

/// Prints a message to stderr if the session has logging enabled.  Standard output
/// is left to results.
#[doc(hidden)]
#[macro_export]
macro_rules! svghit_log {
    (
        $session:expr,
        $($arg:tt)+
    ) => {
        if $session.log_enabled() {
            eprintln!("{}", format_args!($($arg)+));
        }
    };
}

/// Whether the `SVGHIT_LOG` environment variable was set when first queried.
pub fn log_enabled() -> bool {
    static ENABLED: Lazy<bool> = Lazy::new(|| ::std::env::var_os(LOG_ENV_VAR).is_some());

    *ENABLED
}
