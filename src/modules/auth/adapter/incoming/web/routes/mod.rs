pub mod account;
pub mod addresses;
pub mod change_password;
pub mod check_email;
pub mod dashboard;
pub mod login_user;
pub mod logout_user;
pub mod password_reset;
pub mod refresh_token;
pub mod register_user;
pub mod verify_email;

pub use account::{
    delete_account_handler, get_account_handler, update_account_handler, ProfileResponse,
    UpdateProfileRequest,
};
pub use addresses::{
    create_address_handler, delete_address_handler, get_address_handler, list_addresses_handler,
    patch_address_handler, replace_address_handler, AddressRequest, AddressResponse,
};
pub use change_password::{change_password_handler, ChangePasswordRequest};
pub use check_email::{check_email_handler, CheckEmailResponse};
pub use dashboard::dashboard_handler;
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use logout_user::{logout_user_handler, LogoutRequestDto};
pub use password_reset::{
    confirm_password_reset_handler, request_password_reset_handler, ConfirmPasswordResetRequest,
};
pub use refresh_token::{refresh_token_handler, RefreshTokenRequestDto, RefreshTokenResponseBody};
pub use register_user::{signup_handler, SignupRequest, SignupResponse};
pub use verify_email::{
    resend_verification_handler, verify_email_handler, EmailRequest, VerifyEmailRequest,
};
