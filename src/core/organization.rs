//! Organization business logic - Handles all organization-related operations.
//!
//! Provides functions for registering, retrieving, and listing organizations,
//! plus the fund-release aggregate update invoked when a donation completes.
//! All functions are async and return Result types for error handling.

use crate::{
    entities::{Organization, organization},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Fallback cover image for categories without a dedicated one.
const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=400";

/// Picks a cover image for an organization based on its cause category.
///
/// Used when a registration or seed entry does not supply its own image.
#[must_use]
pub fn image_for_category(category: &str) -> &'static str {
    match category {
        "Water & Sanitation" => "https://images.unsplash.com/photo-1594736797933-d0401ba2fe65?w=400",
        "Education" => "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=400",
        "Healthcare" => "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=400",
        "Disaster Relief" => "https://images.unsplash.com/photo-1469571486292-0ba58a3f068b?w=400",
        "Old Folks Home" => "https://images.unsplash.com/photo-1559027615-cd4628902d4a?w=400",
        "Environmental" => "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=400",
        "Food Security" => "https://images.unsplash.com/photo-1488459716781-31db52582fe9?w=400",
        "Housing" => "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=400",
        _ => DEFAULT_IMAGE,
    }
}

/// Retrieves all organizations in insertion order, for donor-facing listings.
pub async fn list_organizations(db: &DatabaseConnection) -> Result<Vec<organization::Model>> {
    Organization::find()
        .order_by_asc(organization::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an organization by its unique ID, returning None if not found.
pub async fn get_organization_by_id(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Option<organization::Model>> {
    Organization::find_by_id(organization_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an organization by its display name, returning None if not found.
///
/// Used by the seeder to keep startup seeding idempotent.
pub async fn get_organization_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<organization::Model>> {
    Organization::find()
        .filter(organization::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Registers a new organization, performing input validation.
///
/// Aggregates start at zero and the verified flag starts false; platform
/// verification is a separate step. When no image is supplied a
/// category-appropriate one is chosen.
pub async fn create_organization(
    db: &DatabaseConnection,
    name: String,
    mission: String,
    category: String,
    location: String,
    image_url: Option<String>,
) -> Result<organization::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Organization name cannot be empty".to_string(),
        });
    }

    if mission.trim().is_empty() {
        return Err(Error::Validation {
            message: "Organization mission cannot be empty".to_string(),
        });
    }

    let image_url = image_url.unwrap_or_else(|| image_for_category(&category).to_string());

    let organization = organization::ActiveModel {
        name: Set(name.trim().to_string()),
        mission: Set(mission.trim().to_string()),
        category: Set(category),
        location: Set(location),
        verified: Set(false),
        total_received: Set(0.0),
        donor_count: Set(0),
        image_url: Set(image_url),
        ..Default::default()
    };

    let result = organization.insert(db).await?;
    Ok(result)
}

/// Atomically credits a completed donation to the organization's aggregates.
///
/// Performs a single database-level update so the aggregates only ever
/// increase: `total_received = total_received + amount` and
/// `donor_count = donor_count + 1`. Called exactly once per donation, on
/// the transition into `completed`.
pub async fn record_fund_release<C>(
    db: &C,
    organization_id: i64,
    amount: f64,
) -> Result<organization::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    let _organization = Organization::find_by_id(organization_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::OrganizationNotFound {
            id: organization_id.to_string(),
        })?;

    Organization::update_many()
        .col_expr(
            organization::Column::TotalReceived,
            Expr::col(organization::Column::TotalReceived).add(amount),
        )
        .col_expr(
            organization::Column::DonorCount,
            Expr::col(organization::Column::DonorCount).add(1),
        )
        .filter(organization::Column::Id.eq(organization_id))
        .exec(db)
        .await?;

    Organization::find_by_id(organization_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::OrganizationNotFound {
            id: organization_id.to_string(),
        })
}
