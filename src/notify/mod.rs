//! Notification layer for reporting IP changes to external services.
//!
//! This module provides:
//! - The notifier abstraction ([`ChangeNotifier`])
//! - The Discord webhook implementation ([`DiscordWebhook`])
//! - The message payload ([`WebhookPayload`])

mod error;
mod message;
mod sender;


pub use error::NotifyError;
pub use message::{WebhookPayload, change_content};
pub use sender::{ChangeNotifier, DiscordWebhook};
