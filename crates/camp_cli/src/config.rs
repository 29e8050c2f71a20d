//! Command-line and environment configuration.
//!
//! Every flag can also come from a `CAMP_*` variable; a `.env` file in the
//! working directory is loaded before parsing.

use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5555;

#[derive(Debug, Parser)]
#[command(name = "camp", version, about = "Summer camp records service")]
pub struct Cli {
    /// SQLite database file. Created and migrated on first use.
    #[arg(long, env = "CAMP_DB_PATH", default_value = "app.db", global = true)]
    pub db_path: PathBuf,

    /// trace|debug|info|warn|error. Defaults by build mode.
    #[arg(long, env = "CAMP_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files. Logs go to stderr when unset.
    #[arg(long, env = "CAMP_LOG_DIR", global = true)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API until interrupted.
    Serve(ServeArgs),
    /// Replace all records with a fixed sample set.
    Seed,
}

#[derive(Debug, Args)]
pub struct ServeArgs {
    #[arg(long, env = "CAMP_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    #[arg(long, env = "CAMP_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServeArgs {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Cli {
    pub fn log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(camp_core::default_log_level())
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command, DEFAULT_PORT};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_parses_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "camp",
            "serve",
            "--port",
            "8080",
            "--db-path",
            "/tmp/camp.db",
        ])
        .unwrap();
        assert_eq!(cli.db_path.to_str(), Some("/tmp/camp.db"));
        match cli.command {
            Command::Serve(args) => {
                assert_eq!(args.port, 8080);
                assert_eq!(args.addr().to_string(), "127.0.0.1:8080");
            }
            Command::Seed => panic!("expected serve"),
        }
    }

    #[test]
    fn seed_accepts_global_flags() {
        let cli = Cli::try_parse_from(["camp", "seed", "--log-level", "warn"]).unwrap();
        assert!(matches!(cli.command, Command::Seed));
        assert_eq!(cli.log_level(), "warn");
    }

    #[test]
    fn log_level_falls_back_to_build_default() {
        if std::env::var_os("CAMP_LOG_LEVEL").is_some() {
            return;
        }
        let cli = Cli::try_parse_from(["camp", "seed"]).unwrap();
        assert_eq!(cli.log_level, None);
        assert_eq!(cli.log_level(), camp_core::default_log_level());
    }

    #[test]
    fn serve_defaults_to_local_port() {
        let cli = Cli::try_parse_from(["camp", "serve"]).unwrap();
        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, DEFAULT_PORT);
        assert!(args.host.is_loopback());
    }
}
