mod addresses;
mod change_password;
mod check_email;
mod dashboard;
mod login_user;
mod logout_user;
mod password_reset;
mod profile;
mod refresh_token;
mod register_user;
mod resend_verification;
mod verify_email;

pub use addresses::{
    AddressCommandError, AddressError, AddressFields, CreateAddressCommand, CreateAddressUseCase,
    DeleteAddressUseCase, GetAddressUseCase, ListAddressesUseCase, UpdateAddressCommand,
    UpdateAddressUseCase,
};
pub use change_password::{
    ChangePasswordCommand, ChangePasswordCommandError, ChangePasswordError, ChangePasswordUseCase,
};
pub use check_email::{CheckEmailError, CheckEmailUseCase};
pub use dashboard::{Dashboard, DashboardError, DashboardUseCase, MonthlySpend, RecentOrder};
pub use login_user::{LoginCommand, LoginCommandError, LoginError, LoginResult, LoginUserUseCase};
pub use logout_user::{LogoutError, LogoutUserUseCase};
pub use password_reset::{
    ConfirmPasswordResetCommand, ConfirmPasswordResetCommandError, ConfirmPasswordResetError,
    ConfirmPasswordResetUseCase, RequestPasswordResetError, RequestPasswordResetUseCase,
};
pub use profile::{
    DeleteAccountError, DeleteAccountUseCase, FetchProfileError, FetchProfileUseCase,
    UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};
pub use refresh_token::{RefreshTokenError, RefreshTokenUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserCommandError, RegisterUserError, RegisterUserUseCase,
    RegisteredUser,
};
pub use resend_verification::{ResendVerificationError, ResendVerificationUseCase};
pub use verify_email::{
    VerifyEmailCommand, VerifyEmailCommandError, VerifyEmailError, VerifyEmailUseCase,
};
