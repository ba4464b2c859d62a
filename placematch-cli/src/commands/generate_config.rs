//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use placematch_core::config::defaults;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the thresholds and strategy to suit your corpus");
        println!("2. Validate your configuration:");
        println!("   placematch validate -c {}", self.output.display());
        println!("3. Use it for searching:");
        println!(
            "   placematch search -m messages.txt -p places.txt -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        format!(
            r#"# placematch configuration

[matching]
# Token similarity: "edit-distance", "phonetic" or "ngram"
strategy = "edit-distance"

# Minimum normalized Levenshtein similarity (edit-distance)
edit_distance_threshold = {edit}

# Character n-gram size and minimum Dice coefficient (ngram)
ngram_size = {size}
ngram_threshold = {ngram}

# Check order inside a window: "first-last", "longest-first" or "in-order"
anchor = "first-last"

[output]
# "text", "json" or "jsonl"
format = "text"

# Words of context on each side of a match
snippet_context = {context}

pretty_json = true

[performance]
# Worker threads (0 = one per CPU)
worker_threads = 0

# Map the corpus into memory once instead of streaming it per place
mmap = false

# Corpus encoding: "ascii" or "utf8"
encoding = "ascii"
"#,
            edit = defaults::EDIT_DISTANCE_THRESHOLD,
            size = defaults::NGRAM_SIZE,
            ngram = defaults::NGRAM_THRESHOLD,
            context = placematch_engine::config::DEFAULT_SNIPPET_CONTEXT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("placematch.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("placematch.toml"));
    }

    #[test]
    fn test_template_parses_to_defaults() {
        let template = GenerateConfigArgs::generate_template();
        assert!(template.contains("[matching]"));
        assert!(template.contains("edit_distance_threshold = 0.85"));

        let config = CliConfig::from_toml(&template).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("placematch.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("strategy = \"edit-distance\""));
    }
}
