#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccountNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

/// Account mails: verification codes and password reset links.
#[async_trait::async_trait]
pub trait AccountNotifier: Send + Sync {
    async fn send_verification_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), AccountNotificationError>;

    /// `token` is the raw reset token; the notifier builds the link around it.
    async fn send_password_reset(
        &self,
        email: &str,
        token: &str,
    ) -> Result<(), AccountNotificationError>;
}
