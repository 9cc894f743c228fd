use clap::{Parser, ValueEnum};
use shortlink_cli::link::DEFAULT_BASE_URL;
use shortlink_cli::OutputFormat;
use std::fmt::{Display, Formatter};

pub const BASE_URL_ENV: &str = "SHORTLINK_BASE_URL";
pub const TOKEN_LENGTH_ENV: &str = "SHORTLINK_TOKEN_LENGTH";
pub const MAX_ATTEMPTS_ENV: &str = "SHORTLINK_MAX_ATTEMPTS";
pub const OUTPUT_ENV: &str = "SHORTLINK_OUTPUT";
pub const LOG_FORMAT_ENV: &str = "SHORTLINK_LOG_FORMAT";

pub const DEFAULT_TOKEN_LENGTH: &str = "6";
pub const DEFAULT_MAX_ATTEMPTS: &str = "1000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for OutputArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputArg::Text => write!(f, "text"),
            OutputArg::Json => write!(f, "json"),
        }
    }
}

impl From<OutputArg> for OutputFormat {
    fn from(value: OutputArg) -> Self {
        match value {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

/// Shorten URLs interactively. Reads one command per line from stdin.
#[derive(Debug, Parser)]
#[command(name = "shortlink", version)]
pub struct CLI {
    /// Prefix put in front of tokens when displaying short URLs.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number of symbols in generated tokens.
    #[arg(long, env = TOKEN_LENGTH_ENV, default_value = DEFAULT_TOKEN_LENGTH)]
    pub token_length: usize,

    /// Candidate tokens to try before giving up on a shorten.
    #[arg(long, env = MAX_ATTEMPTS_ENV, default_value = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(long, env = OUTPUT_ENV, value_enum, default_value_t = OutputArg::Text)]
    pub output: OutputArg,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormatArg::Text)]
    pub log_format: LogFormatArg,
}
