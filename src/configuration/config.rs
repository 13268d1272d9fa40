use clap::Parser;
use std::path::PathBuf;

/// Runtime configuration for the QR artifact service.
///
/// Every field can be set on the command line or through an environment
/// variable, and every field has a default, so `qrforge serve` with no
/// arguments starts a working instance. Command-line flags win over
/// environment variables.
///
/// # Fields Overview
///
/// - `port`: TCP port the HTTP server listens on
/// - `downloads_dir`: directory where generated artifacts are written
/// - `retention_secs`: how long an artifact may live before the
///   retention sweeper removes it
/// - `sweep_interval_secs`: how often the retention sweeper runs
#[derive(Parser, Debug, Clone)]
pub struct Config {
    /// Port number for the HTTP server.
    ///
    /// # Command Line
    /// Use `--port <PORT>` or the `QRFORGE_PORT` environment variable
    #[arg(long, env = "QRFORGE_PORT", default_value_t = 3000)]
    pub port: u16,

    /// File system path for generated artifacts.
    ///
    /// The directory is created on the first successful generation, not at
    /// startup. Relative paths are resolved against the working directory.
    ///
    /// # Command Line
    /// Use `--downloads-dir <PATH>` or the `QRFORGE_DOWNLOADS_DIR`
    /// environment variable
    #[arg(long, env = "QRFORGE_DOWNLOADS_DIR", default_value = "downloads")]
    pub downloads_dir: PathBuf,

    /// Artifact retention age in seconds.
    ///
    /// Artifacts strictly older than this are deleted by the retention
    /// sweeper. The sweeper adds a small grace margin on top so a file
    /// cannot vanish between the generation response and the download click.
    ///
    /// # Command Line
    /// Use `--retention-secs <SECONDS>` or the `QRFORGE_RETENTION_SECS`
    /// environment variable
    #[arg(long, env = "QRFORGE_RETENTION_SECS", default_value_t = 3600)]
    pub retention_secs: u64,

    /// Interval between retention sweeps in seconds.
    ///
    /// Must be at least 1.
    ///
    /// # Command Line
    /// Use `--sweep-interval-secs <SECONDS>` or the
    /// `QRFORGE_SWEEP_INTERVAL_SECS` environment variable
    #[arg(
        long,
        env = "QRFORGE_SWEEP_INTERVAL_SECS",
        default_value_t = 3600,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,
}

impl Config {
    /// Retention age as a chrono duration, ready for timestamp arithmetic.
    pub fn retention_age(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.retention_secs as i64)
    }

    /// Sweep interval as a std duration, ready for a tokio interval.
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(args)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["qrforge"]).unwrap_or_else(|e| panic!("{}", e));

        assert_eq!(config.port, 3000);
        assert_eq!(config.downloads_dir, PathBuf::from("downloads"));
        assert_eq!(config.retention_secs, 3600);
        assert_eq!(config.sweep_interval_secs, 3600);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = parse(&[
            "qrforge",
            "--port",
            "8080",
            "--downloads-dir",
            "/tmp/artifacts",
            "--retention-secs",
            "60",
            "--sweep-interval-secs",
            "15",
        ])
        .unwrap_or_else(|e| panic!("{}", e));

        assert_eq!(config.port, 8080);
        assert_eq!(config.downloads_dir, PathBuf::from("/tmp/artifacts"));
        assert_eq!(config.retention_secs, 60);
        assert_eq!(config.sweep_interval_secs, 15);
    }

    #[test]
    fn test_zero_sweep_interval_rejected() {
        assert!(parse(&["qrforge", "--sweep-interval-secs", "0"]).is_err());
    }

    #[test]
    fn test_duration_helpers() {
        let config = parse(&["qrforge", "--retention-secs", "90", "--sweep-interval-secs", "5"])
            .unwrap_or_else(|e| panic!("{}", e));

        assert_eq!(config.retention_age(), chrono::Duration::seconds(90));
        assert_eq!(config.sweep_interval(), std::time::Duration::from_secs(5));
    }
}
