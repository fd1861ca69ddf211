use std::env;
use std::path::PathBuf;

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub data_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            data_file: PathBuf::from("data/donors.json"),
        }
    }
}

impl ServerConfig {
    /// `PORT` (default 3000) and `DONOR_DATA_FILE` (default `data/donors.json`).
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let data_file = env::var("DONOR_DATA_FILE")
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_file);

        Self { port, data_file }
    }
}
