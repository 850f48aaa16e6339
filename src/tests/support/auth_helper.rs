//! Token providers for tests.
use actix_web::web;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, TokenSubject, ACCESS_TOKEN, REFRESH_TOKEN,
};

/// Accepts any bearer token as an access token for a fixed user.
#[derive(Clone)]
pub struct StubTokenProvider {
    pub user_id: Uuid,
    pub is_verified: bool,
    pub is_staff: bool,
}

impl StubTokenProvider {
    pub fn customer(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_verified: true,
            is_staff: false,
        }
    }

    pub fn staff(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_verified: true,
            is_staff: true,
        }
    }

    pub fn into_data(self) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(self);
        web::Data::new(provider)
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _subject: TokenSubject) -> Result<String, TokenError> {
        unimplemented!("not used by route tests")
    }

    fn generate_refresh_token(&self, _subject: TokenSubject) -> Result<String, TokenError> {
        unimplemented!("not used by route tests")
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: ACCESS_TOKEN.to_string(),
            is_verified: self.is_verified,
            is_staff: self.is_staff,
        })
    }

    fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
        unimplemented!("not used by route tests")
    }
}

/// Readable tokens of the form `{type}:{user_id}`; `"expired"` is always expired.
#[derive(Clone, Default)]
pub struct EchoTokenProvider;

impl TokenProvider for EchoTokenProvider {
    fn generate_access_token(&self, subject: TokenSubject) -> Result<String, TokenError> {
        Ok(format!("{ACCESS_TOKEN}:{}", subject.user_id))
    }

    fn generate_refresh_token(&self, subject: TokenSubject) -> Result<String, TokenError> {
        Ok(format!("{REFRESH_TOKEN}:{}", subject.user_id))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token == "expired" {
            return Err(TokenError::TokenExpired);
        }

        let (token_type, id) = token.split_once(':').ok_or(TokenError::MalformedToken)?;
        let sub = Uuid::parse_str(id).map_err(|_| TokenError::MalformedToken)?;
        let now = Utc::now().timestamp();

        Ok(TokenClaims {
            sub,
            exp: now + 3600,
            iat: now,
            nbf: now,
            token_type: token_type.to_string(),
            is_verified: true,
            is_staff: false,
        })
    }

    fn refresh_access_token(&self, refresh_token: &str) -> Result<String, TokenError> {
        let claims = self.verify_token(refresh_token)?;
        Ok(format!("{ACCESS_TOKEN}:{}", claims.sub))
    }
}

pub fn bearer() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
