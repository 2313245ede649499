// ⚙️ Configuration - command line flags with environment fallbacks

use crate::export::DEFAULT_LOG_FILE;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "medical-appointments")]
#[command(about = "Interactive medical appointment bookkeeping")]
pub struct Args {
    /// File the appointment log is appended to (and cleared on exit)
    #[arg(long, env = "APPOINTMENTS_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Tracing filter, e.g. "info" or "medical_appointments=debug"
    #[arg(long, env = "APPOINTMENTS_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_file: PathBuf,
    pub log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            log_file: args.log_file,
            log_level: args.log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "medical-appointments",
            "--log-file",
            "/tmp/appointments.log",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let config = Config::from(args);
        assert_eq!(config.log_file, PathBuf::from("/tmp/appointments.log"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_file, PathBuf::from("Appointments.csv"));
        assert_eq!(config.log_level, "warn");
    }
}
