//! Wallet connector - integration point with an injected account provider.
//!
//! A single best-effort request for account addresses. The provider is
//! behind a trait so tests and future real integrations can supply their
//! own; absence of a provider, an errored request, and an empty account
//! list all fail softly with a user-presentable [`WalletError`].

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};

/// How long to wait for the provider before giving up. The provider call
/// would otherwise suspend indefinitely if the extension hangs.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// User-facing wallet connection failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    /// No provider is available in this session
    #[error("no wallet provider is installed; please install one to connect a wallet")]
    NotInstalled,

    /// The provider errored or returned no accounts
    #[error("wallet connection was rejected: {reason}")]
    Rejected {
        /// Provider-supplied reason, if any
        reason: String,
    },

    /// The provider did not answer within [`CONNECT_TIMEOUT`]
    #[error("wallet provider did not respond within {seconds}s")]
    TimedOut {
        /// The timeout that elapsed
        seconds: u64,
    },
}

/// Failure reported by the provider itself.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    /// Provider-supplied failure description
    pub message: String,
}

/// An injected account provider (browser-extension style).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Requests the ordered list of account addresses from the provider.
    ///
    /// # Errors
    /// Returns a [`ProviderError`] if the user rejects the request or the
    /// provider fails internally.
    async fn request_accounts(&self) -> std::result::Result<Vec<String>, ProviderError>;
}

/// Requests an address from the provider, applying the default timeout.
///
/// # Errors
/// See [`WalletError`] for the failure modes.
pub async fn connect(
    provider: Option<&dyn WalletProvider>,
) -> std::result::Result<String, WalletError> {
    connect_with_timeout(provider, CONNECT_TIMEOUT).await
}

/// Requests an address from the provider with an explicit timeout.
///
/// On success returns the first address the provider reports.
///
/// # Errors
/// See [`WalletError`] for the failure modes.
pub async fn connect_with_timeout(
    provider: Option<&dyn WalletProvider>,
    limit: Duration,
) -> std::result::Result<String, WalletError> {
    let Some(provider) = provider else {
        warn!("wallet connection requested but no provider is installed");
        return Err(WalletError::NotInstalled);
    };

    let accounts = timeout(limit, provider.request_accounts())
        .await
        .map_err(|_| WalletError::TimedOut {
            seconds: limit.as_secs(),
        })?
        .map_err(|e| {
            warn!("wallet provider rejected the request: {e}");
            WalletError::Rejected {
                reason: e.to_string(),
            }
        })?;

    accounts
        .into_iter()
        .next()
        .map(|address| {
            debug!("wallet connected: {address}");
            address
        })
        .ok_or_else(|| WalletError::Rejected {
            reason: "provider returned no accounts".to_string(),
        })
}
