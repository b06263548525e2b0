use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tyb")]
#[command(about = "Secret-redacting API proxy for the ty task board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "TYB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the board API server
    Serve {
        /// Address to bind (default from config: 0.0.0.0)
        #[arg(long, env = "TYB_HOST")]
        host: Option<String>,

        /// Port to listen on (default from config: 3080)
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Path to the ty binary
        #[arg(long, env = "TY_PATH")]
        upstream: Option<String>,
    },

    /// Redact secrets from stdin and print the result
    Redact {
        /// Treat input as JSON and redact every string inside it
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "tyb",
            "serve",
            "--port",
            "4000",
            "--upstream",
            "/usr/local/bin/ty",
        ])
        .unwrap();

        match cli.command {
            Commands::Serve { port, upstream, .. } => {
                assert_eq!(port, Some(4000));
                assert_eq!(upstream.as_deref(), Some("/usr/local/bin/ty"));
            }
            _ => panic!("expected serve"),
        }
    }

    #[test]
    fn test_redact_json_flag() {
        let cli = Cli::try_parse_from(["tyb", "redact", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::Redact { json: true }));
    }
}
