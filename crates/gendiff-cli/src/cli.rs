use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gendiff",
    about = "Compares two configuration files and shows a difference.",
    version,
)]
pub struct Cli {
    /// First configuration file (.json, .yml or .yaml)
    pub file1: PathBuf,

    /// Second configuration file (.json, .yml or .yaml)
    pub file2: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "stylish")]
    pub format: String,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_files() {
        let cli = Cli::try_parse_from(["gendiff", "a.json", "b.yml"]).unwrap();
        assert_eq!(cli.file1, PathBuf::from("a.json"));
        assert_eq!(cli.file2, PathBuf::from("b.yml"));
        assert_eq!(cli.format, "stylish");
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_format_long_and_short() {
        let cli = Cli::try_parse_from(["gendiff", "--format", "stylish", "a.json", "b.json"]).unwrap();
        assert_eq!(cli.format, "stylish");

        let cli = Cli::try_parse_from(["gendiff", "a.json", "b.json", "-f", "plain"]).unwrap();
        assert_eq!(cli.format, "plain");
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["gendiff", "-v", "a.json", "b.json"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn one_file_is_an_error() {
        assert!(Cli::try_parse_from(["gendiff", "a.json"]).is_err());
    }

    #[test]
    fn three_files_is_an_error() {
        assert!(Cli::try_parse_from(["gendiff", "a.json", "b.json", "c.json"]).is_err());
    }

    #[test]
    fn no_arguments_is_an_error() {
        assert!(Cli::try_parse_from(["gendiff"]).is_err());
    }
}
