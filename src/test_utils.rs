//! Shared test utilities for Donify.
//!
//! This module provides common helper functions for setting up test stores
//! and creating test entities with sensible defaults, plus a deterministic
//! oracle double for lifecycle tests.

use crate::{
    core::{donation, milestone, organization},
    entities,
    errors::Result,
    oracle::{ProofInput, VerificationOracle, VerificationResult},
};
use async_trait::async_trait;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` store with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test organization with sensible defaults.
///
/// # Defaults
/// * `mission`: "Test mission"
/// * `category`: "Water & Sanitation"
/// * `location`: "Kenya, Africa"
pub async fn create_test_organization(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::organization::Model> {
    organization::create_organization(
        db,
        name.to_string(),
        "Test mission".to_string(),
        "Water & Sanitation".to_string(),
        "Kenya, Africa".to_string(),
        None,
    )
    .await
}

/// Creates a test donation with a default usage string.
pub async fn create_test_donation(
    db: &DatabaseConnection,
    organization_id: i64,
    amount: f64,
) -> Result<entities::donation::Model> {
    donation::create_donation(
        db,
        organization_id,
        amount,
        "Clean water systems".to_string(),
    )
    .await
}

/// Creates a test milestone, optionally scoped to a donation.
pub async fn create_test_milestone(
    db: &DatabaseConnection,
    organization_id: i64,
    donation_id: Option<i64>,
    title: &str,
) -> Result<entities::milestone::Model> {
    milestone::add_milestone(
        db,
        organization_id,
        donation_id,
        title.to_string(),
        "Test milestone description".to_string(),
    )
    .await
}

/// Sets up a complete test environment with an organization.
/// Returns (db, organization) for common test scenarios.
pub async fn setup_with_organization()
-> Result<(DatabaseConnection, entities::organization::Model)> {
    let db = setup_test_db().await?;
    let organization = create_test_organization(&db, "Test Organization").await?;
    Ok((db, organization))
}

/// Deterministic oracle double returning a fixed verdict.
#[derive(Debug, Clone, Copy)]
pub struct FixedOracle {
    verified: bool,
    score: i32,
}

impl FixedOracle {
    /// An oracle that verifies everything with a score of 95.
    #[must_use]
    pub const fn passing() -> Self {
        Self {
            verified: true,
            score: 95,
        }
    }

    /// An oracle that rejects everything with a score of 80.
    #[must_use]
    pub const fn failing() -> Self {
        Self {
            verified: false,
            score: 80,
        }
    }

    /// An oracle with an arbitrary verdict, for contract-violation tests.
    #[must_use]
    pub const fn with_score(verified: bool, score: i32) -> Self {
        Self { verified, score }
    }
}

#[async_trait]
impl VerificationOracle for FixedOracle {
    async fn verify(&self, _input: &ProofInput) -> Result<VerificationResult> {
        Ok(VerificationResult {
            verified: self.verified,
            score: self.score,
        })
    }
}
