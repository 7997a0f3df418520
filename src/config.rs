// src/config.rs

use std::env;

use dotenvy::dotenv;

use crate::utils::hash::hash_password;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub admin_username: String,
    /// Argon2 PHC string the admin password is verified against.
    pub admin_password_hash: String,
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let admin_username =
            env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string());

        // Prefer a pre-hashed credential; fall back to hashing a
        // plaintext password at startup.
        let admin_password_hash = match env::var("ADMIN_PASSWORD_HASH") {
            Ok(hash) => hash,
            Err(_) => {
                let plain =
                    env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "password".to_string());
                hash_password(&plain).expect("Failed to hash admin password")
            }
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            admin_username,
            admin_password_hash,
            rust_log,
            port,
        }
    }
}
