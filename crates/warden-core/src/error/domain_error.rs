//! Domain errors - error types for the domain layer
//!
//! These are the expected, enumerable outcomes a command handler pattern
//! matches on. Infrastructure faults (file I/O, gateway transport) live in
//! their own layers' error types.

use thiserror::Error;

use crate::value_objects::{DurationParseError, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You cannot act on a member with a role higher than or equal to yours")]
    RoleHierarchy,

    #[error("Missing permission: {0}")]
    MissingPermission(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("'{0}' is not a valid user ID")]
    InvalidUserId(String),

    #[error(transparent)]
    InvalidDuration(#[from] DurationParseError),

    #[error("Please provide a number between 1 and {max}")]
    InvalidMessageCount { max: u8 },

    // =========================================================================
    // State Errors
    // =========================================================================
    #[error("User {0} is not banned")]
    NotBanned(UserId),

    // =========================================================================
    // Platform Errors (wrapped)
    // =========================================================================
    #[error("The messaging platform rejected the request: {0}")]
    Platform(String),
}

impl DomainError {
    /// Get an error code string for structured log fields
    pub fn code(&self) -> &'static str {
        match self {
            Self::RoleHierarchy => "ROLE_HIERARCHY",
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::InvalidUserId(_) => "INVALID_USER_ID",
            Self::InvalidDuration(_) => "INVALID_DURATION",
            Self::InvalidMessageCount { .. } => "INVALID_MESSAGE_COUNT",
            Self::NotBanned(_) => "NOT_BANNED",
            Self::Platform(_) => "PLATFORM_ERROR",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidUserId(_) | Self::InvalidDuration(_) | Self::InvalidMessageCount { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::RoleHierarchy | Self::MissingPermission(_))
    }
}
