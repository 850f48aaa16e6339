//! Field rules shared by registration, profile updates and password changes.
use email_address::EmailAddress;

pub const NAME_MAX_LEN: usize = 100;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 128;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountPolicyError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Name must not exceed 100 characters")]
    NameTooLong,

    #[error("Password must be at least 8 characters")]
    PasswordTooShort,

    #[error("Password must not exceed 128 characters")]
    PasswordTooLong,
}

/// Trim, validate and lower-case an email address.
pub fn normalize_email(raw: &str) -> Result<String, AccountPolicyError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(AccountPolicyError::EmptyEmail);
    }

    if !EmailAddress::is_valid(email) {
        return Err(AccountPolicyError::InvalidEmailFormat);
    }

    Ok(email.to_lowercase())
}

pub fn normalize_name(raw: &str) -> Result<String, AccountPolicyError> {
    let name = raw.trim();

    if name.chars().count() > NAME_MAX_LEN {
        return Err(AccountPolicyError::NameTooLong);
    }

    Ok(name.to_string())
}

pub fn check_password(password: &str) -> Result<(), AccountPolicyError> {
    let len = password.chars().count();

    if len < PASSWORD_MIN_LEN {
        return Err(AccountPolicyError::PasswordTooShort);
    }

    if len > PASSWORD_MAX_LEN {
        return Err(AccountPolicyError::PasswordTooLong);
    }

    Ok(())
}
