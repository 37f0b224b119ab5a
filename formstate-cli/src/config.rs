//! Command-line configuration

use std::path::PathBuf;

use clap::Parser;
use simplelog::LevelFilter;

/// Replay a recorded event script against the sign-up form.
#[derive(Parser, Debug)]
#[command(name = "formstate-cli", version, about)]
pub struct Args {
    /// JSON event script to replay.
    pub script: PathBuf,

    /// Minimum level written to the log file (off, error, warn, info, debug, trace).
    #[arg(long, env = "FORMSTATE_LOG")]
    pub log_level: Option<LevelFilter>,

    /// Do not write a log file.
    #[arg(long)]
    pub no_log: bool,
}

/// Settings for one CLI run.
///
/// Precedence: `--log-level` flag, then `FORMSTATE_LOG`, then the default.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Event script to replay.
    pub script: PathBuf,

    /// Minimum level written to the log file.
    ///
    /// Default: `Debug`
    pub log_level: LevelFilter,

    /// Where to write the log. `None` disables file logging.
    ///
    /// Default: `latest.log` in the platform cache directory
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    /// Creates a config for `script` with default values.
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            log_level: LevelFilter::Debug,
            log_file: crate::paths::log_file(),
        }
    }

    /// Sets the log level.
    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    /// Sets the log file.
    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

impl From<Args> for CliConfig {
    fn from(args: Args) -> Self {
        let mut config = Self::new(args.script);
        if let Some(level) = args.log_level {
            config = config.with_log_level(level);
        }
        if args.no_log {
            config = config.with_log_file(None);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliConfig, clap::Error> {
        Args::try_parse_from(std::iter::once("formstate-cli").chain(args.iter().copied()))
            .map(CliConfig::from)
    }

    #[test]
    fn test_script_and_level() {
        let config = parse(&["run.json", "--log-level", "trace"]).unwrap();
        assert_eq!(config.script, PathBuf::from("run.json"));
        assert_eq!(config.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_no_log() {
        let config = parse(&["--no-log", "run.json"]).unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert!(parse(&["a.json", "--log-level", "loud"]).is_err());
    }
}
