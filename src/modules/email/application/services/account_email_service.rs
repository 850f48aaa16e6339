use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    AccountNotificationError, AccountNotifier, EmailSender,
};

#[derive(Clone)]
pub struct AccountEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    frontend_url: String,
}

impl fmt::Debug for AccountEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("frontend_url", &self.frontend_url)
            .finish()
    }
}

impl AccountEmailService {
    pub fn new(
        sender: Arc<dyn EmailSender + Send + Sync>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            frontend_url: frontend_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn reset_link(&self, token: &str) -> String {
        format!("{}/forgot-password?token={}", self.frontend_url, token)
    }
}

#[async_trait]
impl AccountNotifier for AccountEmailService {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), AccountNotificationError> {
        let subject = "Your verification code";
        let body = format!(
            "<p>Welcome!</p>\
             <p>Your verification code is <strong>{}</strong>.</p>\
             <p>The code expires in 10 minutes.</p>",
            code
        );

        self.sender
            .send_email(email, subject, &body)
            .await
            .map_err(|e| AccountNotificationError::EmailSendingFailed(e.to_string()))
    }

    async fn send_password_reset(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), AccountNotificationError> {
        let link = self.reset_link(token);
        let subject = "Reset your password";
        let body = format!(
            "<p>We received a request to reset your password.</p>\
             <p><a href=\"{link}\">Reset password</a></p>\
             <p>If the button does not work, copy this link into your browser:<br>{link}</p>\
             <p>The link is valid for 24 hours. If you did not request a reset, ignore this email.</p>"
        );

        self.sender
            .send_email(email, subject, &body)
            .await
            .map_err(|e| AccountNotificationError::EmailSendingFailed(e.to_string()))
    }
}
