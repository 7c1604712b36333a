//! Configuration management.
//!
//! Everything the original run hard-wired in source (symbol count, sort
//! order, month, strategy parameters, output paths) is an explicit,
//! validated configuration here, loaded from TOML with environment
//! overrides.

mod settings;

pub use settings::{
    AppConfig, AppSettings, BacktestSettings, DataSettings, LoggingConfig, ReportSettings,
    StrategySettings,
};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables use the `PAIRBENCH__` prefix with `__` as the
/// section separator, e.g. `PAIRBENCH__DATA__NUM_SYMBOLS=10`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("PAIRBENCH")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_minimal_config() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[data]
year = 2025
month = 2
num_symbols = 5
"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.data.num_symbols, 5);
        assert_eq!(config.data.year, 2025);
        // Untouched sections fall back to defaults
        assert_eq!(config.app.name, "pairbench");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(load_config(Path::new("/nonexistent/config.toml")).is_err());
    }
}
