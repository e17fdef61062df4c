//! Command-line and environment configuration.

use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_TITLE: &str = "Dan Santivañez Master Model Experiments";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "xdash-server",
    version,
    about = "Serve the ML experiment dashboard over HTTP"
)]
pub struct ServerConfig {
    /// Experiment log CSV, loaded once at startup
    #[arg(short = 'd', long, env = "DASHBOARD_DATA", default_value = "datos.csv")]
    pub data: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short = 'p', long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Browser tab title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_arguments_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "xdash-server",
            "--data",
            "runs.csv",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--title",
            "Ablations",
        ])
        .unwrap();
        assert_eq!(config.data, PathBuf::from("runs.csv"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.title, "Ablations");
    }

    #[test]
    fn host_and_title_defaults() {
        let config = ServerConfig::try_parse_from(["xdash-server"]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn rejects_non_numeric_port() {
        assert!(ServerConfig::try_parse_from(["xdash-server", "--port", "web"]).is_err());
    }
}
