//! CLI argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tls")]
#[command(version)]
#[command(about = "A friendly TLS certificate inspector", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (defaults to config/default.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose logging to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read a certificate from a host or file
    #[command(long_about = READ_LONG_ABOUT)]
    Read(ReadArgs),
}

const READ_LONG_ABOUT: &str = "Read a certificate from a remote TLS endpoint or a local file.

Target can be:
  - hostname[:port]         e.g. example.com or example.com:8443
  - URL                     e.g. https://example.com
  - file path               e.g. ./cert.pem
  - \"-\" (stdin)             e.g. cat cert.pem | tls read -

Mode controls how target is interpreted:
  auto   - detect host vs file (default)
  file   - treat target as a file path
  server - treat target as a remote server";

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Host, host:port, URL, file path or "-"
    #[arg(value_name = "TARGET", allow_hyphen_values = true)]
    pub target: String,

    /// Input mode: auto, file, or server
    #[arg(long, default_value = "auto")]
    pub mode: String,

    /// Connect and handshake timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Print JSON instead of the text view
    #[arg(long)]
    pub json: bool,
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
    fn test_read_defaults() {
        let cli = Cli::try_parse_from(["tls", "read", "example.com"]).unwrap();
        let Commands::Read(args) = cli.command;
        assert_eq!(args.target, "example.com");
        assert_eq!(args.mode, "auto");
        assert_eq!(args.timeout, None);
        assert!(!args.json);
    }

    #[test]
    fn test_read_stdin_and_flags() {
        let cli = Cli::try_parse_from([
            "tls", "read", "-", "--mode", "FILE", "--json", "--no-color",
        ])
        .unwrap();
        assert!(cli.no_color);
        let Commands::Read(args) = cli.command;
        assert_eq!(args.target, "-");
        assert_eq!(args.mode, "FILE");
        assert!(args.json);
    }

    #[test]
    fn test_read_requires_target() {
        assert!(Cli::try_parse_from(["tls", "read"]).is_err());
    }
}
