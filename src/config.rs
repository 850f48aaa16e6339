use std::env;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Where outgoing mail is delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum SmtpSettings {
    /// Authenticated relay (production).
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as Mailpit (test environment).
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub database_url: String,
    pub redis_url: String,
    pub host: String,
    pub port: u16,
    pub email_from: String,
    pub frontend_url: String,
    pub smtp: SmtpSettings,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Load `.env.{RUST_ENV}` first and fall back to `.env`.
    pub fn load_dotenv() -> String {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        environment
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let port = parse_port("PORT", &required("PORT")?)?;

        let smtp = if environment == "test" {
            let host = lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = match lookup("SMTP_PORT") {
                Some(raw) => parse_port("SMTP_PORT", &raw)?,
                None => 1025,
            };
            SmtpSettings::Local { host, port }
        } else {
            SmtpSettings::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(raw) => parse_bool("RUN_MIGRATIONS", &raw)?,
            None => false,
        };

        let frontend_url = lookup("FRONTEND_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            environment,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            host: required("HOST")?,
            port,
            email_from: required("EMAIL_FROM")?,
            frontend_url,
            smtp,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn parse_port(key: &'static str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::Invalid {
            key,
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}
