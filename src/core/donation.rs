//! Donation business logic - Handles all donation-related operations.
//!
//! This module provides functions for creating, retrieving, and summarizing
//! donations. Creation validates the amount, the usage text, and that the
//! recipient organization exists; a new donation always starts in the
//! `pending` state with no milestones or proofs attached. Status changes are
//! the lifecycle module's job and never happen here.

use crate::{
    entities::{Donation, DonationStatus, donation},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// The enumerated usage options offered on the donation form. Choosing
/// `"Others"` requires a custom usage string instead.
pub const USAGE_OPTIONS: [&str; 11] = [
    "Rice and basic food supplies",
    "Clean water systems",
    "Medical supplies and equipment",
    "Educational materials and books",
    "Emergency shelter materials",
    "Clothing and blankets",
    "Baby supplies (diapers, formula)",
    "Agricultural tools and seeds",
    "Solar panels and batteries",
    "Wheelchairs and mobility aids",
    "Others",
];

/// Resolves the donor's usage selection into the final usage string.
///
/// A selection of `"Others"` requires a non-empty custom string; any other
/// non-empty selection is taken as-is.
///
/// # Errors
/// Returns a validation error when the selection is empty, or when
/// `"Others"` is chosen without a custom usage.
pub fn resolve_usage(selection: &str, custom: Option<&str>) -> Result<String> {
    if selection.trim().is_empty() {
        return Err(Error::Validation {
            message: "Donation usage must be selected".to_string(),
        });
    }

    if selection == "Others" {
        let custom = custom.unwrap_or_default().trim();
        if custom.is_empty() {
            return Err(Error::Validation {
                message: "A custom usage is required when \"Others\" is selected".to_string(),
            });
        }
        return Ok(custom.to_string());
    }

    Ok(selection.trim().to_string())
}

/// Creates a new donation pledge against an organization.
///
/// Validates that the amount is positive and finite, the usage is non-empty,
/// and the organization exists. The donation starts `pending`, dated today,
/// with no milestones or proofs attached.
pub async fn create_donation(
    db: &DatabaseConnection,
    organization_id: i64,
    amount: f64,
    usage: String,
) -> Result<donation::Model> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount { amount });
    }

    if usage.trim().is_empty() {
        return Err(Error::Validation {
            message: "Donation usage cannot be empty".to_string(),
        });
    }

    crate::core::organization::get_organization_by_id(db, organization_id)
        .await?
        .ok_or_else(|| Error::OrganizationNotFound {
            id: organization_id.to_string(),
        })?;

    let donation = donation::ActiveModel {
        organization_id: Set(organization_id),
        amount: Set(amount),
        usage: Set(usage.trim().to_string()),
        status: Set(DonationStatus::Pending),
        date: Set(chrono::Utc::now().date_naive()),
        ..Default::default()
    };

    let result = donation.insert(db).await?;
    Ok(result)
}

/// Finds a donation by its unique ID, returning None if not found.
///
/// Missing donations are a normal condition (e.g., a stale detail-view
/// link) and are reported as None rather than an error.
pub async fn get_donation_by_id(
    db: &DatabaseConnection,
    donation_id: i64,
) -> Result<Option<donation::Model>> {
    Donation::find_by_id(donation_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a donation together with its recipient organization.
///
/// A dangling organization reference is reported as a not-found error, the
/// same way a missing donation is.
pub async fn get_donation_with_organization(
    db: &DatabaseConnection,
    donation_id: i64,
) -> Result<(
    donation::Model,
    crate::entities::organization::Model,
)> {
    let donation = get_donation_by_id(db, donation_id)
        .await?
        .ok_or(Error::DonationNotFound { id: donation_id })?;

    let organization =
        crate::core::organization::get_organization_by_id(db, donation.organization_id)
            .await?
            .ok_or_else(|| Error::OrganizationNotFound {
                id: donation.organization_id.to_string(),
            })?;

    Ok((donation, organization))
}

/// Retrieves all donations in insertion order.
pub async fn list_donations(db: &DatabaseConnection) -> Result<Vec<donation::Model>> {
    Donation::find()
        .order_by_asc(donation::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all donations pledged to a specific organization, in
/// insertion order.
pub async fn list_donations_for_organization(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<donation::Model>> {
    Donation::find()
        .filter(donation::Column::OrganizationId.eq(organization_id))
        .order_by_asc(donation::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Donor-dashboard aggregates over all donations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonationSummary {
    /// Sum of all pledged amounts
    pub total_donated: f64,
    /// Donations that have reached `completed`
    pub completed: usize,
    /// Donations still `pending` or `verified`
    pub active: usize,
}

/// Computes the donor-dashboard summary: total donated, completed count,
/// and active (not yet completed) count.
pub async fn donation_summary(db: &DatabaseConnection) -> Result<DonationSummary> {
    let donations = list_donations(db).await?;

    let total_donated = donations.iter().map(|d| d.amount).sum();
    let completed = donations
        .iter()
        .filter(|d| d.status == DonationStatus::Completed)
        .count();
    let active = donations.len() - completed;

    Ok(DonationSummary {
        total_donated,
        completed,
        active,
    })
}
