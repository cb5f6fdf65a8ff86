//! JWT session issuing, verification, and refresh rotation.
//!
//! Access tokens are short-lived; refresh tokens rotate on every use and
//! the retired id is blacklisted for the rest of its lifetime, so a replayed
//! refresh token is detected as reuse and rejected.

mod blacklist;

use std::sync::Mutex;

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use common::auth::{AccountProfile, RegisterRequest, TokenPair};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use blacklist::RetiredTokens;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already exists")]
    EmailExists,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("refresh token already used")]
    TokenReuse,

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: account id.
    pub sub: String,
    pub role: String,
    /// Token id, unique per token; retired on refresh rotation.
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

struct Account {
    user_id: String,
    first_name: String,
    last_name: String,
    email: String,
    password_hash: String,
    role: String,
}

impl Account {
    fn profile(&self) -> AccountProfile {
        AccountProfile {
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
        }
    }
}

pub struct SessionService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
    accounts: Mutex<Vec<Account>>,
    retired: RetiredTokens,
}

impl SessionService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            access_ttl: Duration::seconds(config.access_token_ttl),
            refresh_ttl: Duration::seconds(config.refresh_token_ttl),
            accounts: Mutex::new(Vec::new()),
            retired: RetiredTokens::default(),
        }
    }

    pub fn register(&self, request: &RegisterRequest) -> Result<AccountProfile, SessionError> {
        let mut accounts = self.lock_accounts();
        if accounts
            .iter()
            .any(|account| account.email == request.email)
        {
            return Err(SessionError::EmailExists);
        }

        let account = Account {
            user_id: Uuid::new_v4().to_string(),
            first_name: request.first_name.clone(),
            last_name: request.last_name.clone(),
            email: request.email.clone(),
            password_hash: hash_password(&request.password)?,
            role: "user".to_string(),
        };
        let profile = account.profile();
        accounts.push(account);
        Ok(profile)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<TokenPair, SessionError> {
        let accounts = self.lock_accounts();
        let account = accounts
            .iter()
            .find(|account| account.email == email)
            .ok_or(SessionError::InvalidCredentials)?;
        if !verify_password(password, &account.password_hash) {
            return Err(SessionError::InvalidCredentials);
        }
        let (user_id, role) = (account.user_id.clone(), account.role.clone());
        drop(accounts);
        self.issue_tokens(&user_id, &role)
    }

    /// Sign a fresh access/refresh pair. Each token gets its own id.
    pub fn issue_tokens(&self, user_id: &str, role: &str) -> Result<TokenPair, SessionError> {
        let now = Utc::now();
        let access_claims = Claims {
            sub: user_id.to_string(),
            role: role.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + self.access_ttl).timestamp(),
        };
        let refresh_claims = Claims {
            jti: Uuid::new_v4().to_string(),
            exp: (now + self.refresh_ttl).timestamp(),
            ..access_claims.clone()
        };

        let access_token = self.sign(&access_claims)?;
        let refresh_token = self.sign(&refresh_claims)?;
        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: self.access_ttl.num_seconds(),
        })
    }

    /// Verify and decode a token (access or refresh).
    pub fn verify(&self, token: &str) -> Result<Claims, SessionError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|err| SessionError::InvalidToken(err.to_string()))?;
        Ok(data.claims)
    }

    /// Rotate a refresh token: retire the presented token's id and issue a
    /// new pair. A token that was already retired is reuse and is rejected.
    pub fn refresh(&self, refresh_token: &str) -> Result<TokenPair, SessionError> {
        let claims = self.verify(refresh_token)?;
        if self.retired.contains(&claims.jti) {
            return Err(SessionError::TokenReuse);
        }
        self.retire(&claims);
        self.issue_tokens(&claims.sub, &claims.role)
    }

    /// End the session: the refresh token can never be used again.
    pub fn logout(&self, refresh_token: &str) -> Result<(), SessionError> {
        let claims = self.verify(refresh_token)?;
        self.retire(&claims);
        Ok(())
    }

    fn retire(&self, claims: &Claims) {
        let expires_at = chrono::DateTime::from_timestamp(claims.exp, 0)
            .unwrap_or_else(|| Utc::now() + self.refresh_ttl);
        self.retired.retire(&claims.jti, expires_at);
    }

    fn sign(&self, claims: &Claims) -> Result<String, SessionError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|err| SessionError::Internal(format!("JWT encode failed: {err}")))
    }

    fn lock_accounts(&self) -> std::sync::MutexGuard<'_, Vec<Account>> {
        self.accounts.lock().expect("account table poisoned")
    }
}

/// Hash a plain password with argon2id.
fn hash_password(password: &str) -> Result<String, SessionError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| SessionError::Internal(format!("password hash failed: {err}")))
}

/// Verify a password against an argon2id hash.
fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new(&Config {
            port: 0,
            jwt_secret: "test-secret".to_string(),
            access_token_ttl: 900,
            refresh_token_ttl: 604_800,
        })
    }

    fn register(service: &SessionService) -> AccountProfile {
        service
            .register(&RegisterRequest {
                first_name: "Fatima".to_string(),
                last_name: "Rahman".to_string(),
                email: "fatima@example.com".to_string(),
                password: "hunter2hunter2".to_string(),
            })
            .unwrap()
    }

    #[test]
    fn register_then_login_issues_verifiable_tokens() {
        let service = service();
        let profile = register(&service);
        assert_eq!(profile.role, "user");

        let pair = service.login("fatima@example.com", "hunter2hunter2").unwrap();
        let claims = service.verify(&pair.access_token).unwrap();
        assert_eq!(claims.sub, profile.user_id);
        assert_eq!(claims.role, "user");
        assert_eq!(pair.expires_in, 900);
    }

    #[test]
    fn duplicate_email_and_bad_password_are_rejected() {
        let service = service();
        register(&service);
        let duplicate = service.register(&RegisterRequest {
            first_name: "F".to_string(),
            last_name: "R".to_string(),
            email: "fatima@example.com".to_string(),
            password: "other-password".to_string(),
        });
        assert!(matches!(duplicate, Err(SessionError::EmailExists)));

        let login = service.login("fatima@example.com", "wrong");
        assert!(matches!(login, Err(SessionError::InvalidCredentials)));
    }

    #[test]
    fn refresh_rotates_and_detects_reuse() {
        let service = service();
        register(&service);
        let pair = service.login("fatima@example.com", "hunter2hunter2").unwrap();

        let rotated = service.refresh(&pair.refresh_token).unwrap();
        assert_ne!(rotated.refresh_token, pair.refresh_token);
        assert!(service.verify(&rotated.access_token).is_ok());

        // Presenting the retired token again is reuse.
        let replay = service.refresh(&pair.refresh_token);
        assert!(matches!(replay, Err(SessionError::TokenReuse)));

        // The rotated token still works.
        assert!(service.refresh(&rotated.refresh_token).is_ok());
    }

    #[test]
    fn logout_retires_the_refresh_token() {
        let service = service();
        register(&service);
        let pair = service.login("fatima@example.com", "hunter2hunter2").unwrap();
        service.logout(&pair.refresh_token).unwrap();
        assert!(matches!(
            service.refresh(&pair.refresh_token),
            Err(SessionError::TokenReuse)
        ));
    }

    #[test]
    fn garbage_tokens_are_invalid() {
        let service = service();
        assert!(matches!(
            service.verify("not-a-token"),
            Err(SessionError::InvalidToken(_))
        ));
    }
}
