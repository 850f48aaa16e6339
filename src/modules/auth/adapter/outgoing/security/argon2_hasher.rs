use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::password_hasher::{
    HashError, PasswordHasher as HasherTrait,
};
use crate::config::ConfigError;

// Small VPS profile: 19 MiB, 2 passes, 1 lane.
const PRODUCTION_MEMORY_KIB: u32 = 19 * 1024;
const PRODUCTION_ITERATIONS: u32 = 2;
// Development and test profile.
const FAST_MEMORY_KIB: u32 = 4 * 1024;
const FAST_ITERATIONS: u32 = 1;

/// Argon2id hashing on the blocking thread pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Argon2Hasher {
    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, ConfigError> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            ConfigError::Invalid {
                key: "ARGON2_PARAMS",
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    pub fn from_env(is_production: bool) -> Result<Self, ConfigError> {
        Self::from_lookup(is_production, |key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(is_production: bool, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (default_memory, default_iterations) = if is_production {
            (PRODUCTION_MEMORY_KIB, PRODUCTION_ITERATIONS)
        } else {
            (FAST_MEMORY_KIB, FAST_ITERATIONS)
        };

        let read = |key: &'static str, default: u32| -> Result<u32, ConfigError> {
            match lookup(key) {
                Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                    key,
                    reason: format!("expected a positive integer, got '{}'", raw),
                }),
                None => Ok(default),
            }
        };

        Self::with_params(
            read("ARGON2_MEMORY_KIB", default_memory)?,
            read("ARGON2_ITERATIONS", default_iterations)?,
            read("ARGON2_PARALLELISM", 1)?,
        )
    }

    #[cfg(test)]
    fn with_fixed_salt(salt: SaltString) -> Self {
        Self {
            params: Params::new(FAST_MEMORY_KIB, FAST_ITERATIONS, 1, None)
                .expect("valid test params"),
            salt_override: Some(salt),
        }
    }
}

#[async_trait]
impl HasherTrait for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::VerifyFailed)?;

            // params are read back from the PHC string
            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
