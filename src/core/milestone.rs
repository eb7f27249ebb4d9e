//! Milestone business logic - progress checkpoints and one-way completion.
//!
//! Milestones are created by organizations and optionally scoped to a
//! donation. Completing a milestone is idempotent: the first call stamps
//! the completion date, later calls are no-ops. Completion of a
//! donation-scoped milestone cascades into the donation's lifecycle.

use crate::{
    entities::{Milestone, milestone},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new milestone owned by an organization, optionally scoped to a
/// donation. The donation, when given, must belong to the same organization.
pub async fn add_milestone(
    db: &DatabaseConnection,
    organization_id: i64,
    donation_id: Option<i64>,
    title: String,
    description: String,
) -> Result<milestone::Model> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "Milestone title cannot be empty".to_string(),
        });
    }

    crate::core::organization::get_organization_by_id(db, organization_id)
        .await?
        .ok_or_else(|| Error::OrganizationNotFound {
            id: organization_id.to_string(),
        })?;

    if let Some(donation_id) = donation_id {
        let donation = crate::core::donation::get_donation_by_id(db, donation_id)
            .await?
            .ok_or(Error::DonationNotFound { id: donation_id })?;

        if donation.organization_id != organization_id {
            return Err(Error::Validation {
                message: format!(
                    "Donation {donation_id} belongs to a different organization"
                ),
            });
        }
    }

    let milestone = milestone::ActiveModel {
        organization_id: Set(organization_id),
        donation_id: Set(donation_id),
        title: Set(title.trim().to_string()),
        description: Set(description),
        completed: Set(false),
        completed_date: Set(None),
        ..Default::default()
    };

    let result = milestone.insert(db).await?;
    Ok(result)
}

/// Finds a milestone by its unique ID, returning None if not found.
pub async fn get_milestone_by_id(
    db: &DatabaseConnection,
    milestone_id: i64,
) -> Result<Option<milestone::Model>> {
    Milestone::find_by_id(milestone_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all milestones owned by an organization, in insertion order.
pub async fn list_milestones_for_organization(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<milestone::Model>> {
    Milestone::find()
        .filter(milestone::Column::OrganizationId.eq(organization_id))
        .order_by_asc(milestone::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the milestones scoped to a donation, in insertion order.
pub async fn list_milestones_for_donation(
    db: &DatabaseConnection,
    donation_id: i64,
) -> Result<Vec<milestone::Model>> {
    Milestone::find()
        .filter(milestone::Column::DonationId.eq(donation_id))
        .order_by_asc(milestone::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Marks a milestone complete, stamping today's date.
///
/// Idempotent: a milestone that is already completed is returned unchanged
/// and its completion date is never rewritten. When the milestone is scoped
/// to a donation, the donation's status is recomputed afterwards.
pub async fn complete_milestone(
    db: &DatabaseConnection,
    milestone_id: i64,
) -> Result<milestone::Model> {
    let milestone = Milestone::find_by_id(milestone_id)
        .one(db)
        .await?
        .ok_or(Error::MilestoneNotFound { id: milestone_id })?;

    if milestone.completed {
        return Ok(milestone);
    }

    let donation_id = milestone.donation_id;

    let mut active: milestone::ActiveModel = milestone.into();
    active.completed = Set(true);
    active.completed_date = Set(Some(chrono::Utc::now().date_naive()));
    let updated = active.update(db).await?;

    if let Some(donation_id) = donation_id {
        crate::core::lifecycle::refresh_donation_status(db, donation_id).await?;
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_add_milestone_integration() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;

        let milestone = add_milestone(
            &db,
            organization.id,
            None,
            "Water pump installation".to_string(),
            "Install new water pumps in rural areas".to_string(),
        )
        .await?;

        assert_eq!(milestone.organization_id, organization.id);
        assert!(!milestone.completed);
        assert!(milestone.completed_date.is_none());
        assert!(milestone.donation_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_add_milestone_title_required() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;

        let result = add_milestone(
            &db,
            organization.id,
            None,
            "  ".to_string(),
            "description".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_milestone_rejects_foreign_donation() -> Result<()> {
        let db = setup_test_db().await?;
        let water = create_test_organization(&db, "Global Water Initiative").await?;
        let education = create_test_organization(&db, "Education for All").await?;
        let donation = create_test_donation(&db, water.id, 0.5).await?;

        let result = add_milestone(
            &db,
            education.id,
            Some(donation.id),
            "School supplies purchase".to_string(),
            "Buy books and materials".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_add_milestone_missing_donation() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;

        let result = add_milestone(
            &db,
            organization.id,
            Some(999),
            "Community training".to_string(),
            "Train local community".to_string(),
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::DonationNotFound { id: 999 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_complete_milestone_sets_date_once() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;
        let milestone =
            create_test_milestone(&db, organization.id, None, "Community training").await?;

        let completed = complete_milestone(&db, milestone.id).await?;
        assert!(completed.completed);
        let first_date = completed.completed_date.unwrap();

        // A second completion is a no-op and keeps the original date.
        let again = complete_milestone(&db, milestone.id).await?;
        assert!(again.completed);
        assert_eq!(again.completed_date, Some(first_date));

        Ok(())
    }

    #[tokio::test]
    async fn test_complete_milestone_not_found() -> Result<()> {
        let db = setup_test_db().await?;

        let result = complete_milestone(&db, 42).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::MilestoneNotFound { id: 42 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_milestones_for_organization() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;

        let first =
            create_test_milestone(&db, organization.id, None, "Water pump installation").await?;
        let second =
            create_test_milestone(&db, organization.id, None, "Community training").await?;

        let milestones = list_milestones_for_organization(&db, organization.id).await?;
        assert_eq!(milestones, vec![first, second]);

        Ok(())
    }
}
