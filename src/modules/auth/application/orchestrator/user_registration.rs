use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegisteredUser,
};
use crate::email::application::ports::outgoing::AccountNotifier;

const MAX_EMAIL_ATTEMPTS: u32 = 3;

// ============================================================================
// Registration Output
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationOutput {
    pub user_id: Uuid,
    pub email: String,
    pub message: String,
}

impl From<RegisteredUser> for RegistrationOutput {
    fn from(user: RegisteredUser) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email,
            message: "Registration successful. Please check your email for the verification code."
                .to_string(),
        }
    }
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Creates the account, then mails the verification code in the background.
/// A failed mail never fails the registration; the user can ask for a resend.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
    notifier: Arc<dyn AccountNotifier + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        register_user: Arc<dyn RegisterUserUseCase + Send + Sync>,
        notifier: Arc<dyn AccountNotifier + Send + Sync>,
    ) -> Self {
        Self {
            register_user,
            notifier,
        }
    }

    pub async fn register(
        &self,
        command: RegisterUserCommand,
    ) -> Result<RegistrationOutput, RegisterUserError> {
        let registered = self.register_user.execute(command).await?;

        let notifier = self.notifier.clone();
        let email = registered.email.clone();
        let code = registered.verification_code.clone();
        let user_id = registered.user_id;

        tokio::spawn(async move {
            for attempt in 1..=MAX_EMAIL_ATTEMPTS {
                match notifier.send_verification_code(&email, &code).await {
                    Ok(()) => return,
                    Err(e) if attempt < MAX_EMAIL_ATTEMPTS => {
                        tracing::warn!(
                            user_id = %user_id,
                            attempt,
                            error = %e,
                            "Verification email failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            user_id = %user_id,
                            error = %e,
                            "All {} verification email attempts failed",
                            MAX_EMAIL_ATTEMPTS
                        );
                    }
                }
            }
        });

        Ok(registered.into())
    }
}
