mod misc;

pub use misc::*;

use env_logger::{Builder, Env};

/// Environment variable used to set the log level, `info` when not set
pub const BAYESBOX_LOG: &str = "BAYESBOX_LOG";

/// Installs a logger writing on stdout filtered by [`BAYESBOX_LOG`].
///
/// Acquisition functions only emit records through the `log` facade, calling
/// this function is up to the optimization driver. Subsequent calls are no-ops.
pub fn init_logger() {
    let env = Env::new().filter_or(BAYESBOX_LOG, "info");
    let mut builder = Builder::from_env(env);
    let builder = builder.target(env_logger::Target::Stdout);
    builder.try_init().ok();
}
