pub mod address_service;
pub mod change_password_service;
pub mod check_email_service;
pub mod dashboard_service;
pub mod login_user_service;
pub mod logout_user_service;
pub mod password_reset_service;
pub mod profile_service;
pub mod refresh_token_service;
pub mod register_user_service;
pub mod resend_verification_service;
pub mod secrets;
pub mod token_hasher;
pub mod verify_email_service;

use std::time::Duration;

/// Lifetime of an email verification code.
pub const VERIFICATION_CODE_TTL: Duration = Duration::from_secs(600);
/// Lifetime of a password reset token.
pub const RESET_TOKEN_TTL_HOURS: i64 = 24;

pub use address_service::AddressService;
pub use change_password_service::ChangePasswordService;
pub use check_email_service::CheckEmailService;
pub use dashboard_service::DashboardService;
pub use login_user_service::LoginUserService;
pub use logout_user_service::LogoutUserService;
pub use password_reset_service::{ConfirmPasswordResetService, RequestPasswordResetService};
pub use profile_service::{DeleteAccountService, FetchProfileService, UpdateProfileService};
pub use refresh_token_service::RefreshTokenService;
pub use register_user_service::RegisterUserService;
pub use resend_verification_service::ResendVerificationService;
pub use verify_email_service::VerifyEmailService;
