//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use kitbag_core::archive::config::DEFAULT_DEST_NAME;
use kitbag_core::archive::config::DEFAULT_EXTENSION;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kitbag")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output and debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Wait for Enter before exiting
    #[arg(long, global = true)]
    pub pause: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a random substitution key
    Keygen(KeygenArgs),
    /// Zip matching source files and count their lines
    Archive(ArchiveArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

impl Commands {
    /// Operation name used in structured output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Keygen(_) => "keygen",
            Self::Archive(_) => "archive",
            Self::Completion(_) => "completion",
        }
    }
}

#[derive(clap::Args)]
pub struct KeygenArgs {
    /// Characters to permute (default: the built-in 89-character alphabet)
    #[arg(long, value_name = "CHARS")]
    pub alphabet: Option<String>,

    /// Seed for a reproducible key
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(clap::Args)]
pub struct ArchiveArgs {
    /// Directory to archive (default: current directory)
    #[arg(value_name = "SOURCE")]
    pub source: Option<PathBuf>,

    /// Archive base name; ".zip" is appended
    #[arg(short, long, value_name = "NAME", default_value = DEFAULT_DEST_NAME)]
    pub name: String,

    /// Directory the archive is written into
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// File extension to include
    #[arg(short, long, value_name = "EXT", default_value = DEFAULT_EXTENSION)]
    pub ext: String,

    /// Top-level directory to skip (repeatable, replaces the defaults)
    #[arg(long = "exclude", short = 'x', value_name = "DIR")]
    pub exclude: Vec<String>,

    /// Compression level (0 stores entries, 1-9 deflate)
    #[arg(
        short = 'l',
        long,
        default_value = "6",
        value_parser = clap::value_parser!(u8).range(0..=9)
    )]
    pub compression_level: u8,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_archive_defaults() {
        let cli = Cli::try_parse_from(["kitbag", "archive"]).unwrap();
        let Commands::Archive(args) = cli.command else {
            panic!("expected archive command");
        };
        assert_eq!(args.source, None);
        assert_eq!(args.name, "PoodleChanBD");
        assert_eq!(args.ext, ".cs");
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.exclude.is_empty());
        assert_eq!(args.compression_level, 6);
    }

    #[test]
    fn test_archive_repeated_excludes() {
        let argv = ["kitbag", "archive", "src", "-x", "target", "-x", "dist"];
        let cli = Cli::try_parse_from(argv).unwrap();
        let Commands::Archive(args) = cli.command else {
            panic!("expected archive command");
        };
        assert_eq!(args.source, Some(PathBuf::from("src")));
        assert_eq!(args.exclude, vec!["target", "dist"]);
    }

    #[test]
    fn test_compression_level_range() {
        assert!(Cli::try_parse_from(["kitbag", "archive", "-l", "0"]).is_ok());
        assert!(Cli::try_parse_from(["kitbag", "archive", "-l", "10"]).is_err());
    }

    #[test]
    fn test_command_names() {
        let name = |argv: &[&str]| Cli::try_parse_from(argv).unwrap().command.name();
        assert_eq!(name(&["kitbag", "keygen"]), "keygen");
        assert_eq!(name(&["kitbag", "archive"]), "archive");
        assert_eq!(name(&["kitbag", "completion", "bash"]), "completion");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["kitbag", "-q", "-v", "keygen"]).is_err());
    }

    #[test]
    fn test_keygen_seed() {
        let cli = Cli::try_parse_from(["kitbag", "keygen", "--seed", "42", "--pause"]).unwrap();
        assert!(cli.pause);
        let Commands::Keygen(args) = cli.command else {
            panic!("expected keygen command");
        };
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.alphabet, None);
    }
}
