//! placematch command-line entry point

use clap::Parser;
use placematch_cli::commands::Commands;

/// Fuzzy place-name search over short-message corpora
#[derive(Debug, Parser)]
#[command(name = "placematch", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search_arguments() {
        let cli = Cli::try_parse_from([
            "placematch",
            "search",
            "-m",
            "messages.txt",
            "-P",
            "New York",
            "-P",
            "Paris",
            "--strategy",
            "soundex",
            "--anchor",
            "longest-first",
            "-vv",
        ])
        .unwrap();

        match cli.command {
            Commands::Search(args) => {
                assert_eq!(args.place, ["New York", "Paris"]);
                assert_eq!(args.strategy, Some(placematch_core::StrategyKind::Phonetic));
                assert_eq!(args.anchor, Some(placematch_core::AnchorPolicy::LongestFirst));
                assert_eq!(args.verbose, 2);
            }
            other => panic!("expected search, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let result = Cli::try_parse_from(["placematch", "search", "-m", "m.txt", "-s", "metaphone"]);
        assert!(result.is_err());
    }
}
