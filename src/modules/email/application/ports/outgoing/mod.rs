pub mod account_notifier;
pub mod email_sender;

pub use account_notifier::{AccountNotificationError, AccountNotifier};
pub use email_sender::{EmailSendError, EmailSender};
