use clap::{Args, Parser, Subcommand};
use tracing::Level;

/// Value that means "read from stdin" wherever an input argument is accepted.
pub const STDIN_MARKER: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "sectok", author, version, about = "Encode, parse and compare secret-token URIs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingArgs,

    /// Print results as a JSON object
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct LoggingArgs {
    /// Default log level (trace, debug, info, warn, error)
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        value_parser = clap::value_parser!(Level),
        global = true
    )]
    pub log_level: Level,

    /// Full `EnvFilter` directive string; overrides --log-level
    #[arg(long = "log-filter", env = "SECTOK_LOG", value_name = "FILTER", global = true)]
    pub log_filter: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a raw payload into its canonical secret-token URI
    Encode {
        /// Raw payload, or `-` to read bytes from stdin
        #[arg(value_name = "RAW")]
        input: String,
    },
    /// Decode a secret-token URI and print the raw payload
    Parse {
        /// Canonical URI, or `-` to read from stdin
        #[arg(value_name = "URI")]
        input: String,
    },
    /// Compare two secret-token URIs in fixed time (exit status 1 if different)
    Compare {
        #[arg(value_name = "URI_A")]
        left: String,
        /// Second URI, or `-` to read from stdin
        #[arg(value_name = "URI_B")]
        right: String,
    },
    /// Build or read an Authorization header value
    #[command(subcommand)]
    Header(HeaderCommand),
}

#[derive(Subcommand, Debug)]
pub enum HeaderCommand {
    /// Print the header value carrying a token
    Inject {
        /// Canonical URI, or `-` to read from stdin
        #[arg(value_name = "URI")]
        input: String,
    },
    /// Read a header value and print the canonical URI it carries
    Extract {
        /// Header value (`Bearer: secret-token:...`), or `-` to read from stdin
        #[arg(value_name = "VALUE")]
        input: String,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Encode { .. } => "encode",
            Commands::Parse { .. } => "parse",
            Commands::Compare { .. } => "compare",
            Commands::Header(HeaderCommand::Inject { .. }) => "header inject",
            Commands::Header(HeaderCommand::Extract { .. }) => "header extract",
        }
    }
}
