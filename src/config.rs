//! Settings read from the process environment. An optional `.env` file is
//! loaded by `dotenvy` before these are resolved.

pub struct Settings {
    pub database_path: String,
    pub bind_addr: String,
}

impl Settings {
    pub fn from_env() -> Self {
        let database_path = match std::env::var("DATABASE_PATH") {
            Ok(val) if !val.is_empty() => val,
            _ => {
                log::warn!("No DATABASE_PATH set — using data/app.db");
                "data/app.db".to_string()
            }
        };
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(val) if !val.is_empty() => val,
            _ => "127.0.0.1:8080".to_string(),
        };
        Settings {
            database_path,
            bind_addr,
        }
    }
}
