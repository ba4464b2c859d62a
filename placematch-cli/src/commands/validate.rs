//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::from_file(&self.config).and_then(|config| {
            config.validate()?;
            Ok(config)
        }) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Strategy: {}", config.matching.strategy);
                println!("  Anchor policy: {}", config.matching.anchor);
                println!("  Output format: {}", config.output.format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            config: PathBuf::from("placematch.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("placematch.toml"));
    }

    #[test]
    fn test_validate_valid_config() {
        let toml_content = r#"
[matching]
strategy = "phonetic"
anchor = "in-order"

[output]
format = "jsonl"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_out_of_range_value() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[matching]\nngram_threshold = -0.5\n").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("ngram_threshold"));
    }

    #[test]
    fn test_validate_malformed_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "[matching\nstrategy = ").unwrap();

        let args = ValidateArgs {
            config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }
}
