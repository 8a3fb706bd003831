use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::catalog::DEFAULT_API_URL;
use crate::app::route::Route;

/// Browse the movie catalog from the terminal.
#[derive(Debug, Parser)]
#[command(name = "moviedb-tui", version, about)]
pub struct Config {
    /// Base URL of the catalog API
    #[arg(long, env = "MOVIEDB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Route to open on start, e.g. "/?page=3", "/genres/2/movies" or "/movie/42"
    #[arg(long, default_value = "/")]
    pub route: Route,

    /// Per-request timeout in seconds
    #[arg(long, env = "MOVIEDB_TIMEOUT", default_value_t = 15)]
    pub timeout_secs: u64,

    /// Directory for log files (defaults to the user cache directory)
    #[arg(long, env = "MOVIEDB_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Skip poster downloads and image protocol detection
    #[arg(long)]
    pub no_posters: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("moviedb-tui")
                .join("logs")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_flag_accepts_shareable_routes() {
        let config =
            Config::try_parse_from(["moviedb-tui", "--route", "/genres/3/movies?page=2"]).unwrap();
        assert_eq!(config.route, Route::Genre { id: 3, page: 2 });
        assert!(!config.no_posters);
    }

    #[test]
    fn rejects_unknown_routes() {
        assert!(Config::try_parse_from(["moviedb-tui", "--route", "/actors"]).is_err());
    }

    #[test]
    fn explicit_flags_win() {
        let config = Config::try_parse_from([
            "moviedb-tui",
            "--api-url",
            "http://localhost:8080/api/v1",
            "--timeout-secs",
            "0",
            "--log-dir",
            "/tmp/moviedb-logs",
            "--no-posters",
        ])
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/api/v1");
        assert_eq!(config.timeout(), Duration::from_secs(1));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/moviedb-logs"));
        assert!(config.no_posters);
        assert_eq!(config.route, Route::home());
    }
}
