/// Server configuration loaded from environment variables.
///
/// All fields except the connection string have defaults suitable for
/// local development. Read once at startup; handlers never touch the
/// environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// MongoDB connection string. Required.
    pub mongo_url: String,
    /// Database holding the submissions collection.
    pub mongo_db: String,
    /// Collection submissions are written to.
    pub mongo_collection: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// MongoDB server-selection timeout in seconds (default: `5`).
    /// Bounds how long an operation waits for a reachable server, so the
    /// health endpoint answers well inside the request timeout.
    pub mongo_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `3000`     |
    /// | `MONGO_URL`            | (required) |
    /// | `MONGO_DB`             | `number`   |
    /// | `MONGO_COLLECTION`     | `login`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    /// | `MONGO_TIMEOUT_SECS`   | `5`        |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let mongo_url = std::env::var("MONGO_URL").expect("MONGO_URL must be set");

        let mongo_db = std::env::var("MONGO_DB").unwrap_or_else(|_| "number".into());

        let mongo_collection =
            std::env::var("MONGO_COLLECTION").unwrap_or_else(|_| "login".into());

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let mongo_timeout_secs: u64 = std::env::var("MONGO_TIMEOUT_SECS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("MONGO_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            mongo_url,
            mongo_db,
            mongo_collection,
            request_timeout_secs,
            mongo_timeout_secs,
        }
    }
}
