use crate::config::toml_config::FleetConfig;
use crate::core::fleet::DispatchMode;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "truck-fleet")]
#[command(about = "Load and unload a fleet of trucks, one task per truck")]
#[command(version)]
pub struct CliConfig {
    /// Path to a TOML fleet definition (defaults to the built-in demo fleet)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the dispatch mode from the config file
    #[arg(long, value_enum)]
    pub mode: Option<DispatchMode>,

    /// Override the simulated work time per truck, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Collect per-truck failures and exit non-zero if any truck failed (concurrent only)
    #[arg(long, conflicts_with = "mode")]
    pub strict: bool,

    /// Final report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    /// 載入車隊配置並套用命令列覆蓋設定
    pub fn load_fleet_config(&self) -> Result<FleetConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading fleet configuration from: {}", path.display());
                FleetConfig::from_file(path)?
            }
            None => {
                tracing::debug!("No config file given, using demo fleet");
                FleetConfig::default()
            }
        };

        if let Some(mode) = self.mode {
            tracing::info!("🔧 Dispatch mode overridden to: {}", mode);
            config.dispatch.mode = mode;
        }

        if let Some(delay_ms) = self.delay_ms {
            tracing::info!("🔧 Delay overridden to: {}ms", delay_ms);
            config.dispatch.delay_ms = Some(delay_ms);
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cli = CliConfig::try_parse_from(["truck-fleet"]).unwrap();

        assert!(cli.config.is_none());
        assert!(!cli.strict);
        assert_eq!(cli.format, OutputFormat::Text);

        let config = cli.load_fleet_config().unwrap();
        assert_eq!(config, FleetConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let cli = CliConfig::try_parse_from([
            "truck-fleet",
            "--mode",
            "sequential",
            "--delay-ms",
            "10",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(!cli.strict);

        let config = cli.load_fleet_config().unwrap();
        assert_eq!(config.mode(), DispatchMode::Sequential);
        assert_eq!(config.delay(), Duration::from_millis(10));
    }

    #[test]
    fn test_strict_conflicts_with_mode() {
        let err = CliConfig::try_parse_from(["truck-fleet", "--strict", "--mode", "sequential"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        let cli = CliConfig::try_parse_from(["truck-fleet", "--strict"]).unwrap();
        assert!(cli.strict);
        assert_eq!(cli.load_fleet_config().unwrap().mode(), DispatchMode::Concurrent);
    }

    #[test]
    fn test_invalid_mode_is_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["truck-fleet", "--mode", "parallel"]).is_err());
    }

    #[test]
    fn test_config_file_is_validated() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[[trucks]]
id = "DUP"
kind = "normal"

[[trucks]]
id = "DUP"
kind = "electric"
"#,
            )
            .unwrap();

        let path = temp_file.path().to_str().unwrap().to_string();
        let cli = CliConfig::try_parse_from(["truck-fleet", "--config", &path]).unwrap();

        let err = cli.load_fleet_config().unwrap_err();
        assert!(err.is_config_error());
    }
}
