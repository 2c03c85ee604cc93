use std::env;
use crate::error::AppError;

pub const DEFAULT_SESSION_SECRET: &str = "your-secret-key-here";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub tours_file: String,
    pub bookings_file: String,
    pub static_dir: String,
    pub log_dir: String,
    pub session_secret: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        let port = port.parse::<u16>()
            .map_err(|_| AppError::Config(format!("PORT must be a number, got {:?}", port)))?;

        Ok(Self {
            port,
            tours_file: env::var("TOURS_FILE").unwrap_or_else(|_| "tours.json".to_string()),
            bookings_file: env::var("BOOKINGS_FILE").unwrap_or_else(|_| "bookings.json".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            session_secret: env::var("SESSION_SECRET").unwrap_or_else(|_| DEFAULT_SESSION_SECRET.to_string()),
        })
    }

    /// True when `SESSION_SECRET` was not provided and the built-in fallback is in effect.
    pub fn uses_default_secret(&self) -> bool {
        self.session_secret == DEFAULT_SESSION_SECRET
    }
}
