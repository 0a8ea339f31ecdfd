use std::net::SocketAddr;

use axum::http::HeaderValue;
use secrecy::SecretString;
use time::Duration;

pub struct AppConfig {
    pub jwt_secret: SecretString,
    pub access_token_ttl: Duration,
    pub cors_origin: HeaderValue,
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// Directory uploaded images are written to; served under `/uploads`.
    pub upload_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let jwt_secret: SecretString = SecretString::new(
            std::env::var("JWT_SECRET")
                .expect("JWT_SECRET must be set")
                .into(),
        );

        let access_token_ttl_secs: i64 = env_default("ACCESS_TOKEN_TTL_SECS", 86_400);

        let cors_origin: HeaderValue = std::env::var("CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        let bind_addr: SocketAddr = env_default("BIND_ADDR", "127.0.0.1:3001".parse().unwrap());
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".into());

        Self {
            jwt_secret,
            access_token_ttl: Duration::seconds(access_token_ttl_secs),
            cors_origin,
            bind_addr,
            database_url,
            upload_dir,
        }
    }
}

fn env_default<T: std::str::FromStr>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(value) => value
            .parse()
            .unwrap_or_else(|_| panic!("{name} could not be parsed")),
        Err(_) => default,
    }
}
