//! Gateway surface error type
//!
//! Distinguishes expected domain outcomes (hierarchy violations, bad input)
//! from persistence failures and raw platform faults, so the error handler
//! can phrase each for the moderator.

use poise::serenity_prelude as serenity;
use thiserror::Error;

use warden_core::DomainError;
use warden_service::ServiceError;
use warden_store::StoreError;

/// Errors surfaced by command handlers
#[derive(Debug, Error)]
pub enum BotError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Service layer failure
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Platform API failure
    #[error("Discord API error: {0}")]
    Discord(#[from] serenity::Error),
}

impl BotError {
    /// Message shown to the invoking moderator
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(e) | Self::Service(ServiceError::Domain(e)) => e.to_string(),
            Self::Store(e) | Self::Service(ServiceError::Store(e)) => {
                format!("Failed to save configuration: {e}")
            }
            Self::Discord(e) => format!("An error occurred: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_keep_their_wording() {
        let err = BotError::from(DomainError::RoleHierarchy);
        assert_eq!(
            err.user_message(),
            "You cannot act on a member with a role higher than or equal to yours"
        );
    }

    #[test]
    fn test_store_errors_mention_persistence() {
        let source = serde_json_error();
        let err = BotError::from(StoreError::Encode(source));
        assert!(err.user_message().contains("Failed to save configuration"));
    }

    fn serde_json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("not json").unwrap_err()
    }
}
