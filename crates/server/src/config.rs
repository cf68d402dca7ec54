//! Command-line and environment configuration for the API server.

use clap::Parser;
use std::path::PathBuf;

/// Movie API - read-only HTTP lookups over a static movie dataset
#[derive(Debug, Clone, Parser)]
#[command(name = "movie-api")]
#[command(about = "Read-only HTTP query service over a static movie dataset", long_about = None)]
pub struct ServerConfig {
    /// Path to the JSON movie dataset
    #[arg(long, env = "MOVIE_API_DATA_FILE", default_value = "data/movies.json")]
    pub data_file: PathBuf,

    /// Interface to listen on
    #[arg(long, env = "MOVIE_API_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "MOVIE_API_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl ServerConfig {
    /// Address handed to the TCP listener
    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arguments_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "movie-api",
            "--data-file",
            "fixtures/other.json",
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
        ])
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("fixtures/other.json"));
        assert_eq!(config.bind_addr(), ("127.0.0.1", 8080));
    }

    #[test]
    fn test_rejects_invalid_port() {
        assert!(ServerConfig::try_parse_from(["movie-api", "--port", "http"]).is_err());
        assert!(ServerConfig::try_parse_from(["movie-api", "--port", "70000"]).is_err());
    }
}
