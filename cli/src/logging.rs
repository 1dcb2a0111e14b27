use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::commands::LoggingArgs;

/// Install the stderr subscriber. stdout is reserved for command output.
///
/// A second call is a no-op.
pub fn init(args: &LoggingArgs) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(args.log_level).into())
        .parse_lossy(args.log_filter.as_deref().unwrap_or(""));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
