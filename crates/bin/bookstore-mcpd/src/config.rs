use clap::{Parser, builder::BoolishValueParser};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_MCP_HTTP_ADDR: &str = "127.0.0.1:4030";
const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_SIMULATED_LATENCY_MS: u64 = 0;
const DEFAULT_SSE_KEEP_ALIVE_SECS: u64 = 15;
const DEFAULT_SSE_RETRY_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(name = "bookstore-mcpd", version, about = "Bookstore MCP daemon.")]
struct CliArgs {
    #[arg(
        long = "stdio",
        env = "BOOKSTORE_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "BOOKSTORE_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "BOOKSTORE_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,

    #[arg(
        long,
        env = "BOOKSTORE_STATEFUL_MODE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    stateful_mode: bool,

    /// SSE keep-alive ping interval in seconds; 0 disables pings.
    #[arg(long, env = "BOOKSTORE_SSE_KEEP_ALIVE_SECS", default_value_t = DEFAULT_SSE_KEEP_ALIVE_SECS)]
    sse_keep_alive_secs: u64,

    /// SSE reconnect hint in seconds; 0 omits it.
    #[arg(long, env = "BOOKSTORE_SSE_RETRY_SECS", default_value_t = DEFAULT_SSE_RETRY_SECS)]
    sse_retry_secs: u64,

    /// TOML fixture to load instead of the built-in sample data.
    #[arg(long, env = "BOOKSTORE_FIXTURE_PATH")]
    fixture_path: Option<PathBuf>,

    #[arg(
        long,
        env = "BOOKSTORE_SIMULATED_LATENCY_MS",
        default_value_t = DEFAULT_SIMULATED_LATENCY_MS
    )]
    simulated_latency_ms: u64,

    #[arg(long, env = "BOOKSTORE_LOG", default_value = DEFAULT_LOG_FILTER)]
    log_filter: String,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
#[derive(Debug, Clone)]
pub struct BookstoreConfig {
    pub enable_stdio: bool,
    pub mcp_serve: bool,
    pub mcp_http_addr: SocketAddr,
    pub stateful_mode: bool,
    pub sse_keep_alive: Option<Duration>,
    pub sse_retry: Option<Duration>,
    pub fixture_path: Option<PathBuf>,
    pub simulated_latency: Option<Duration>,
    pub log_filter: String,
}

#[derive(Debug)]
pub enum ConfigError {
    NoTransport,
    InvalidSetting { name: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTransport => write!(
                f,
                "no transport enabled: set BOOKSTORE_ENABLE_STDIO or BOOKSTORE_MCP_SERVE"
            ),
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value}")
            }
        }
    }
}

impl Error for ConfigError {}

impl BookstoreConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for BookstoreConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if !args.enable_stdio && !args.mcp_serve {
            return Err(ConfigError::NoTransport);
        }

        if args.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "BOOKSTORE_LOG",
                value: args.log_filter,
            });
        }

        let fixture_path = args
            .fixture_path
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty());

        let simulated_latency = nonzero(Duration::from_millis(args.simulated_latency_ms));

        Ok(Self {
            enable_stdio: args.enable_stdio,
            mcp_serve: args.mcp_serve,
            mcp_http_addr: args.mcp_http_addr,
            stateful_mode: args.stateful_mode,
            sse_keep_alive: nonzero(Duration::from_secs(args.sse_keep_alive_secs)),
            sse_retry: nonzero(Duration::from_secs(args.sse_retry_secs)),
            fixture_path,
            simulated_latency,
            log_filter: args.log_filter,
        })
    }
}

/// Zero means "off" for every interval setting.
const fn nonzero(duration: Duration) -> Option<Duration> {
    if duration.is_zero() { None } else { Some(duration) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> CliArgs {
        CliArgs {
            enable_stdio: false,
            mcp_serve: true,
            mcp_http_addr: DEFAULT_MCP_HTTP_ADDR.parse().expect("valid MCP addr"),
            stateful_mode: true,
            sse_keep_alive_secs: DEFAULT_SSE_KEEP_ALIVE_SECS,
            sse_retry_secs: DEFAULT_SSE_RETRY_SECS,
            fixture_path: None,
            simulated_latency_ms: DEFAULT_SIMULATED_LATENCY_MS,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[test]
    fn defaults_parse() {
        let config = BookstoreConfig::try_from(base_args()).expect("config should parse");

        assert!(config.mcp_serve);
        assert!(!config.enable_stdio);
        assert!(config.fixture_path.is_none());
        assert!(config.simulated_latency.is_none());
        assert_eq!(config.mcp_http_addr.port(), 4030);
    }

    #[test]
    fn rejects_config_without_transport() {
        let mut args = base_args();
        args.mcp_serve = false;
        args.enable_stdio = false;

        let err = BookstoreConfig::try_from(args).expect_err("no transport should fail");
        assert!(matches!(err, ConfigError::NoTransport));
    }

    #[test]
    fn blank_fixture_path_falls_back_to_builtin() {
        let mut args = base_args();
        args.fixture_path = Some(PathBuf::from("  "));

        let config = BookstoreConfig::try_from(args).expect("config should parse");
        assert!(config.fixture_path.is_none());
    }

    #[test]
    fn latency_is_opt_in() {
        let mut args = base_args();
        args.simulated_latency_ms = 500;

        let config = BookstoreConfig::try_from(args).expect("config should parse");
        assert_eq!(config.simulated_latency, Some(Duration::from_millis(500)));
    }

    #[test]
    fn zero_sse_intervals_disable_them() {
        let config = BookstoreConfig::try_from(base_args()).expect("config should parse");
        assert_eq!(config.sse_keep_alive, Some(Duration::from_secs(15)));
        assert_eq!(config.sse_retry, Some(Duration::from_secs(3)));

        let mut args = base_args();
        args.sse_keep_alive_secs = 0;
        args.sse_retry_secs = 0;
        let config = BookstoreConfig::try_from(args).expect("config should parse");
        assert!(config.sse_keep_alive.is_none());
        assert!(config.sse_retry.is_none());
    }

    #[test]
    fn rejects_blank_log_filter() {
        let mut args = base_args();
        args.log_filter = " ".to_string();

        let err = BookstoreConfig::try_from(args).expect_err("blank filter should fail");
        assert!(matches!(err, ConfigError::InvalidSetting { name: "BOOKSTORE_LOG", .. }));
    }
}
