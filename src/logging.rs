//! Diagnostics go through the `log` macros to stderr; results go to stdout.

use env_logger::{Builder, Env};

/// Filter variable, e.g. `PRIZE_PATH_LOG=debug`.
pub const LOG_ENV: &str = "PRIZE_PATH_LOG";

/// Install the stderr logger once. Later calls are ignored.
pub fn init() {
    let env = Env::default().filter_or(LOG_ENV, "warn");
    let _ = Builder::from_env(env).format_timestamp(None).try_init();
}
