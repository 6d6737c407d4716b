use clap::Parser;

/// Runtime settings. Every flag can also be set through its environment variable.
#[derive(Debug, Clone, Parser)]
#[command(name = "datapool-generator", about = "Synthetic data pool generator")]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "DATAPOOL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind
    #[arg(long, env = "DATAPOOL_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file
    #[arg(long, env = "DATAPOOL_DATABASE", default_value = "datapools.sqlite")]
    pub database: String,

    /// Upper bound for the row count of a generation request
    #[arg(long, env = "DATAPOOL_MAX_ROWS", default_value_t = 100_000)]
    pub max_rows: usize,

    /// Maximum accepted JSON payload, in bytes
    #[arg(long, env = "DATAPOOL_JSON_LIMIT", default_value_t = 10 * 1024 * 1024)]
    pub json_limit: usize,

    /// Open the UI in the default browser once the server is up
    #[arg(long, env = "DATAPOOL_OPEN_BROWSER", default_value_t = false)]
    pub open_browser: bool,
}

impl Config {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
