use std::env;

/// Process-wide settings, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address, e.g. "127.0.0.1:8080".
    pub addr: String,
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Path to the schema applied at startup.
    pub schema_path: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:8080".to_string(),
            db_path: "roost.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by ROOST_ADDR / ROOST_DB when set.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(addr) = env::var("ROOST_ADDR") {
            cfg.addr = addr;
        }
        if let Ok(db) = env::var("ROOST_DB") {
            cfg.db_path = db;
        }
        cfg
    }
}
