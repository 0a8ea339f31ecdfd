use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::role::{Actor, Role};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub team_id: String,
    pub exp: i64,
    pub iat: i64,
}

pub fn issue(actor: &Actor, secret: &secrecy::SecretString, ttl: Duration) -> AppResult<String> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let exp = now + ttl.whole_seconds();
    let claims = Claims {
        sub: actor.id().to_string(),
        role: actor.role(),
        team_id: actor.team_id().to_string(),
        iat: now,
        exp,
    };
    let header = Header::new(Algorithm::HS256);
    encode(
        &header,
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|e| AppError::Internal(e.to_string()))
}

pub fn verify(token: &str, secret: &secrecy::SecretString) -> AppResult<Actor> {
    let validation = Validation::new(Algorithm::HS256);
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidCredentials)?;

    let id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidCredentials)?;
    let team_id = Uuid::parse_str(&claims.team_id).map_err(|_| AppError::InvalidCredentials)?;

    Ok(match claims.role {
        Role::Admin => Actor::Admin { id, team_id },
        Role::Coach => Actor::Coach { id, team_id },
        Role::Player => Actor::Player { id, team_id },
    })
}
