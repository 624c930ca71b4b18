use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

/// Claims carried by every issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    pub app_name: String,
    pub admin: bool,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(email: String, app_name: String) -> Self {
        let security = &config::config().security;
        Self::with_policy(email, app_name, &security.admin_email_domain, security.jwt_expiry_hours)
    }

    pub fn with_policy(email: String, app_name: String, admin_domain: &str, expiry_hours: u64) -> Self {
        let now = Utc::now();
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();
        let admin = is_admin_email(&email, admin_domain);

        Self {
            email,
            app_name,
            admin,
            exp,
            iat: now.timestamp(),
        }
    }
}

/// An address is administrative when its domain is exactly `admin_domain`
pub fn is_admin_email(email: &str, admin_domain: &str) -> bool {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.eq_ignore_ascii_case(admin_domain),
        None => false,
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid JWT secret")]
    InvalidSecret,
    #[error("JWT token has expired")]
    Expired,
    #[error("Invalid JWT token: {0}")]
    Invalid(String),
}

pub fn generate_jwt(claims: &Claims) -> Result<String, JwtError> {
    generate_jwt_with_secret(claims, &config::config().security.jwt_secret)
}

pub fn generate_jwt_with_secret(claims: &Claims, secret: &str) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify signature and expiry, returning the decoded claims
pub fn validate_jwt(token: &str) -> Result<Claims, JwtError> {
    validate_jwt_with_secret(token, &config::config().security.jwt_secret)
}

pub fn validate_jwt_with_secret(token: &str, secret: &str) -> Result<Claims, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(|e| {
        match e.kind() {
            ErrorKind::ExpiredSignature => JwtError::Expired,
            _ => JwtError::Invalid(e.to_string()),
        }
    })?;

    Ok(token_data.claims)
}
