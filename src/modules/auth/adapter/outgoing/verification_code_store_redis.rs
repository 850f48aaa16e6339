use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use std::time::Duration;

use crate::auth::application::ports::outgoing::verification_code_store::{
    VerificationCodeStore, VerificationCodeStoreError,
};

/// One-time email verification codes, `verification:{email} -> code` with a TTL.
#[derive(Clone)]
pub struct RedisVerificationCodeStore {
    pool: Arc<Pool>,
}

impl RedisVerificationCodeStore {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn code_key(email: &str) -> String {
        format!("verification:{email}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, VerificationCodeStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| VerificationCodeStoreError::StoreError(format!("Pool error: {}", e)))
    }
}

fn store_err(e: deadpool_redis::redis::RedisError) -> VerificationCodeStoreError {
    VerificationCodeStoreError::StoreError(e.to_string())
}

#[async_trait]
impl VerificationCodeStore for RedisVerificationCodeStore {
    async fn store_code(
        &self,
        email: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<(), VerificationCodeStoreError> {
        let mut conn = self.get_conn().await?;

        // SET EX replaces any earlier code and restarts the clock
        conn.set_ex::<_, _, ()>(Self::code_key(email), code, ttl.as_secs().max(1))
            .await
            .map_err(store_err)
    }

    async fn get_code(&self, email: &str) -> Result<Option<String>, VerificationCodeStoreError> {
        let mut conn = self.get_conn().await?;

        conn.get(Self::code_key(email)).await.map_err(store_err)
    }

    async fn delete_code(&self, email: &str) -> Result<(), VerificationCodeStoreError> {
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(Self::code_key(email))
            .await
            .map_err(store_err)
    }
}
