//! In-memory implementations of the account ports for service tests.
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenRepository, TokenRepositoryError,
    UpdateProfileData, UserQuery, UserQueryError, UserQueryResult, UserRepository,
    UserRepositoryError, UserResult, VerificationCodeStore, VerificationCodeStoreError,
};
use crate::email::application::ports::outgoing::{AccountNotificationError, AccountNotifier};

// ============================================================
// Users
// ============================================================

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    users: Arc<Mutex<Vec<UserQueryResult>>>,
    fail: bool,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call returns a database error.
    pub fn failing() -> Self {
        Self {
            users: Arc::default(),
            fail: true,
        }
    }

    pub fn seed(&self, email: &str, password_hash: &str, is_verified: bool) -> Uuid {
        let now = Utc::now();
        let user = UserQueryResult {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: "Jane Shopper".to_string(),
            password_hash: password_hash.to_string(),
            is_verified,
            is_staff: false,
            created_at: now,
            updated_at: now,
        };
        let id = user.id;
        self.users.lock().unwrap().push(user);
        id
    }

    pub fn get(&self, id: Uuid) -> Option<UserQueryResult> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn get_by_email(&self, email: &str) -> Option<UserQueryResult> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    pub fn set_staff(&self, id: Uuid, is_staff: bool) {
        if let Some(user) = self.users.lock().unwrap().iter_mut().find(|u| u.id == id) {
            user.is_staff = is_staff;
        }
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), String> {
        if self.fail {
            Err("db down".to_string())
        } else {
            Ok(())
        }
    }

    fn with_user<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut UserQueryResult) -> T,
    ) -> Result<T, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = self.users.lock().unwrap();
        users
            .iter_mut()
            .find(|u| u.id == id)
            .map(f)
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

fn to_result(user: &UserQueryResult) -> UserResult {
    UserResult {
        id: user.id,
        name: user.name.clone(),
        email: user.email.clone(),
        is_verified: user.is_verified,
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        self.check().map_err(UserQueryError::DatabaseError)?;
        Ok(self.get_by_email(email))
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        if self.get_by_email(&data.email).is_some() {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }
        let id = self.seed(&data.email, &data.password_hash, false);
        let result = self.with_user(id, |u| {
            u.name = data.name.clone();
            to_result(u)
        })?;
        Ok(result)
    }

    async fn update_profile(
        &self,
        user_id: Uuid,
        data: UpdateProfileData,
    ) -> Result<UserResult, UserRepositoryError> {
        if let Some(email) = &data.email {
            if let Some(other) = self.get_by_email(email) {
                if other.id != user_id {
                    return Err(UserRepositoryError::EmailAlreadyExists);
                }
            }
        }
        self.with_user(user_id, |u| {
            if let Some(name) = data.name {
                u.name = name;
            }
            if let Some(email) = data.email {
                u.email = email;
            }
            to_result(u)
        })
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.with_user(user_id, |u| u.password_hash = new_password_hash)
    }

    async fn mark_verified(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.with_user(user_id, |u| u.is_verified = true)
    }

    async fn delete_user(&self, user_id: Uuid) -> Result<(), UserRepositoryError> {
        self.check().map_err(UserRepositoryError::DatabaseError)?;
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != user_id);
        if users.len() == before {
            return Err(UserRepositoryError::UserNotFound);
        }
        Ok(())
    }
}

// ============================================================
// Verification codes
// ============================================================

#[derive(Clone, Default)]
pub struct InMemoryCodes {
    codes: Arc<Mutex<HashMap<String, (String, Duration)>>>,
}

impl InMemoryCodes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, email: &str, code: &str) {
        self.codes.lock().unwrap().insert(
            email.to_string(),
            (code.to_string(), Duration::from_secs(600)),
        );
    }

    pub fn code_for(&self, email: &str) -> Option<String> {
        self.codes
            .lock()
            .unwrap()
            .get(email)
            .map(|(c, _)| c.clone())
    }

    pub fn ttl_for(&self, email: &str) -> Option<Duration> {
        self.codes.lock().unwrap().get(email).map(|(_, ttl)| *ttl)
    }
}

#[async_trait]
impl VerificationCodeStore for InMemoryCodes {
    async fn store_code(
        &self,
        email: &str,
        code: &str,
        ttl: Duration,
    ) -> Result<(), VerificationCodeStoreError> {
        self.codes
            .lock()
            .unwrap()
            .insert(email.to_string(), (code.to_string(), ttl));
        Ok(())
    }

    async fn get_code(&self, email: &str) -> Result<Option<String>, VerificationCodeStoreError> {
        Ok(self.code_for(email))
    }

    async fn delete_code(&self, email: &str) -> Result<(), VerificationCodeStoreError> {
        self.codes.lock().unwrap().remove(email);
        Ok(())
    }
}

// ============================================================
// Token blacklist
// ============================================================

#[derive(Clone, Default)]
pub struct InMemoryBlacklist {
    entries: Arc<Mutex<HashMap<String, (Uuid, DateTime<Utc>)>>>,
}

impl InMemoryBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, token_hash: &str) -> bool {
        self.entries.lock().unwrap().contains_key(token_hash)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenRepository for InMemoryBlacklist {
    async fn blacklist_token(
        &self,
        token_hash: String,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenRepositoryError> {
        self.entries
            .lock()
            .unwrap()
            .insert(token_hash, (user_id, expires_at));
        Ok(())
    }

    async fn is_token_blacklisted(&self, token_hash: &str) -> Result<bool, TokenRepositoryError> {
        Ok(self.contains(token_hash))
    }
}

// ============================================================
// Password hasher
// ============================================================

/// Reversible "hash" so tests can assert on stored values.
#[derive(Clone, Default)]
pub struct FakeHasher;

impl FakeHasher {
    pub fn hash_of(password: &str) -> String {
        format!("hashed:{password}")
    }
}

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(Self::hash_of(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if !hash.starts_with("hashed:") {
            return Err(HashError::VerifyFailed);
        }
        Ok(hash == Self::hash_of(password))
    }
}

// ============================================================
// Notifier
// ============================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SentNotification {
    VerificationCode { email: String, code: String },
    PasswordReset { email: String, token: String },
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<SentNotification>>>,
    attempts: Arc<Mutex<usize>>,
    fail_with: Option<String>,
    notify: Arc<Notify>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            fail_with: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentNotification> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }

    pub async fn wait_for_attempt(&self) {
        self.notify.notified().await;
    }

    fn record(&self, notification: SentNotification) -> Result<(), AccountNotificationError> {
        *self.attempts.lock().unwrap() += 1;
        self.notify.notify_one();
        if let Some(reason) = &self.fail_with {
            return Err(AccountNotificationError::EmailSendingFailed(reason.clone()));
        }
        self.sent.lock().unwrap().push(notification);
        Ok(())
    }
}

#[async_trait]
impl AccountNotifier for RecordingNotifier {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), AccountNotificationError> {
        self.record(SentNotification::VerificationCode {
            email: email.to_string(),
            code: code.to_string(),
        })
    }

    async fn send_password_reset(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), AccountNotificationError> {
        self.record(SentNotification::PasswordReset {
            email: email.to_string(),
            token: token.to_string(),
        })
    }
}
