//! CLI argument definitions.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use settings::LoadOptions;

/// Load, validate and inspect backend settings, or serve with them.
#[derive(Parser, Debug)]
#[command(name = "app-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override file path (defaults to <base-dir>/.env)
    #[arg(long, global = true, env = "APP_ENV_FILE")]
    pub env_file: Option<PathBuf>,

    /// Base directory for the sqlite file and default paths
    #[arg(long, global = true, env = "APP_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate settings and report the result
    Check,

    /// Print settings as JSON (secrets omitted)
    Show,

    /// Print connection strings
    Urls(UrlsArgs),

    /// Connect to the database and cache
    Ping,

    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the urls command
#[derive(Parser, Debug)]
pub struct UrlsArgs {
    /// Show passwords instead of masking them
    #[arg(long)]
    pub reveal: bool,
}

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to (defaults to HOST)
    #[arg(short = 'H', long)]
    pub host: Option<IpAddr>,

    /// Port to listen on (defaults to PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl Cli {
    /// Where settings should be loaded from.
    pub fn load_options(&self) -> LoadOptions {
        let options = match &self.base_dir {
            Some(dir) => LoadOptions::new(dir),
            None => LoadOptions::default(),
        };
        match &self.env_file {
            Some(env_file) => options.with_env_file(env_file),
            None => options,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_default_env_file_is_under_base_dir() {
        let cli = Cli::try_parse_from(["app-settings", "--base-dir", "/srv/app", "check"]).unwrap();

        let options = cli.load_options();

        assert_eq!(options.base_dir, Path::new("/srv/app"));
        assert_eq!(options.env_file, Path::new("/srv/app/.env"));
    }

    #[test]
    fn test_explicit_env_file() {
        let cli = Cli::try_parse_from([
            "app-settings",
            "--base-dir",
            "/srv/app",
            "--env-file",
            "/etc/app/prod.env",
            "show",
        ])
        .unwrap();

        assert_eq!(cli.load_options().env_file, Path::new("/etc/app/prod.env"));
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from(["app-settings", "serve", "-H", "127.0.0.1", "-p", "8000"])
            .unwrap();

        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, Some("127.0.0.1".parse().unwrap()));
                assert_eq!(args.port, Some(8000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_rejects_bad_host() {
        assert!(Cli::try_parse_from(["app-settings", "serve", "-H", "localhost"]).is_err());
    }
}
