use std::time::Duration;

use crate::is_ci;

/// CLI invocation timeout.
pub const CLI_RUN_SECS: u64 = 10;
pub const CLI_RUN_CI_SECS: u64 = 30;

/// Get CLI invocation timeout based on environment.
pub fn cli_run() -> Duration {
    if is_ci() {
        Duration::from_secs(CLI_RUN_CI_SECS)
    } else {
        Duration::from_secs(CLI_RUN_SECS)
    }
}
