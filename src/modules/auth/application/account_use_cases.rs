use std::sync::Arc;

use crate::auth::application::orchestrator::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    ChangePasswordUseCase, CheckEmailUseCase, ConfirmPasswordResetUseCase, CreateAddressUseCase,
    DashboardUseCase, DeleteAccountUseCase, DeleteAddressUseCase, FetchProfileUseCase,
    GetAddressUseCase, ListAddressesUseCase, LoginUserUseCase, LogoutUserUseCase,
    RefreshTokenUseCase, RequestPasswordResetUseCase, ResendVerificationUseCase,
    UpdateAddressUseCase, UpdateProfileUseCase, VerifyEmailUseCase,
};

#[derive(Clone)]
pub struct AccountUseCases {
    pub register: Arc<UserRegistrationOrchestrator>,
    pub verify_email: Arc<dyn VerifyEmailUseCase + Send + Sync>,
    pub resend_verification: Arc<dyn ResendVerificationUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub refresh_token: Arc<dyn RefreshTokenUseCase + Send + Sync>,
    pub logout: Arc<dyn LogoutUserUseCase + Send + Sync>,
    pub check_email: Arc<dyn CheckEmailUseCase + Send + Sync>,
    pub fetch_profile: Arc<dyn FetchProfileUseCase + Send + Sync>,
    pub update_profile: Arc<dyn UpdateProfileUseCase + Send + Sync>,
    pub delete_account: Arc<dyn DeleteAccountUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub request_password_reset: Arc<dyn RequestPasswordResetUseCase + Send + Sync>,
    pub confirm_password_reset: Arc<dyn ConfirmPasswordResetUseCase + Send + Sync>,
    pub dashboard: Arc<dyn DashboardUseCase + Send + Sync>,
    pub list_addresses: Arc<dyn ListAddressesUseCase + Send + Sync>,
    pub get_address: Arc<dyn GetAddressUseCase + Send + Sync>,
    pub create_address: Arc<dyn CreateAddressUseCase + Send + Sync>,
    pub update_address: Arc<dyn UpdateAddressUseCase + Send + Sync>,
    pub delete_address: Arc<dyn DeleteAddressUseCase + Send + Sync>,
}
