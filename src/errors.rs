//! Unified error types for the Donify core.
//!
//! Every fallible operation returns the crate-wide [`Result`] alias. Errors
//! are recovered at the point of the user action that triggered them; none
//! are fatal to the session.

use thiserror::Error;

use crate::wallet::WalletError;

/// Top-level error type covering validation, lookup, store, and
/// collaborator failures.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was wrong
        message: String,
    },

    #[error("Validation error: {message}")]
    Validation {
        /// Which field or rule was violated
        message: String,
    },

    #[error("Invalid donation amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    #[error("Organization not found: {id}")]
    OrganizationNotFound {
        /// Identifier or name used for the lookup
        id: String,
    },

    #[error("Donation not found: {id}")]
    DonationNotFound {
        /// Identifier used for the lookup
        id: i64,
    },

    #[error("Milestone not found: {id}")]
    MilestoneNotFound {
        /// Identifier used for the lookup
        id: i64,
    },

    #[error("Task not found: {id}")]
    TaskNotFound {
        /// Identifier used for the lookup
        id: i64,
    },

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
