//! Session state - the current user and wallet link.
//!
//! Users are session-only: created at login or registration, mutated when a
//! wallet is linked, and dropped at logout. Nothing here touches the store.

use tracing::info;

use crate::wallet::{self, WalletError, WalletProvider};

/// What kind of account the current user holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A donor browsing organizations and pledging funds
    Donor,
    /// An organization managing milestones, tasks, and proofs
    Organization,
}

/// Organization-specific profile carried by organization users.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationProfile {
    /// Mission statement
    pub mission: String,
    /// Cause category
    pub category: String,
    /// Where the organization operates
    pub location: String,
    /// Whether the platform has verified this organization
    pub verified: bool,
    /// Total funds released to the organization
    pub total_received: f64,
    /// Number of completed donations
    pub donor_count: i32,
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Session-scoped identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Donor or organization
    pub role: Role,
    /// Linked wallet address, once connected
    pub wallet_address: Option<String>,
    /// Present only for organization users
    pub organization: Option<OrganizationProfile>,
}

impl User {
    /// Creates a donor user from registration/login input.
    #[must_use]
    pub const fn donor(id: String, name: String, email: String) -> Self {
        Self {
            id,
            name,
            email,
            role: Role::Donor,
            wallet_address: None,
            organization: None,
        }
    }

    /// Creates an organization user from registration/login input.
    #[must_use]
    pub const fn organization(
        id: String,
        name: String,
        email: String,
        profile: OrganizationProfile,
    ) -> Self {
        Self {
            id,
            name,
            email,
            role: Role::Organization,
            wallet_address: None,
            organization: Some(profile),
        }
    }
}

/// Per-session mutable state: the current user and whether a wallet is
/// linked. Initialized empty at session start, cleared at logout.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    wallet_connected: bool,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            user: None,
            wallet_connected: false,
        }
    }

    /// Signs a user in, replacing any previous user.
    pub fn login(&mut self, user: User) {
        info!("user logged in: {} ({:?})", user.name, user.role);
        self.user = Some(user);
        self.wallet_connected = false;
    }

    /// Signs the current user out, dropping the user and wallet link.
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("user logged out: {}", user.name);
        }
        self.wallet_connected = false;
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a wallet has been linked this session.
    #[must_use]
    pub const fn is_wallet_connected(&self) -> bool {
        self.wallet_connected
    }

    /// Requests an address from the provider and merges it into the current
    /// user. On any failure the session is left untouched and
    /// `wallet_connected` stays false.
    ///
    /// # Errors
    /// Propagates the [`WalletError`] from the connector.
    pub async fn connect_wallet(
        &mut self,
        provider: Option<&dyn WalletProvider>,
    ) -> std::result::Result<String, WalletError> {
        let address = wallet::connect(provider).await?;

        if let Some(user) = self.user.as_mut() {
            user.wallet_address = Some(address.clone());
        }
        self.wallet_connected = true;

        Ok(address)
    }
}
