//! Donation lifecycle - the status state machine.
//!
//! A donation's status is derived from its milestones and their proofs:
//!
//! - `verified` once the donation has at least one milestone and all of
//!   them are completed;
//! - `completed` once, additionally, at least one proof is attached to
//!   those milestones and every attached proof passed verification.
//!
//! The recompute merges the derived status with the current one by taking
//! the maximum, so status only ever moves forward. The transition into
//! `completed` releases funds to the organization exactly once, inside the
//! same store transaction as the status write.

use crate::{
    entities::{Donation, DonationStatus, Milestone, Proof, donation, milestone, proof},
    errors::{Error, Result},
};
use sea_orm::{Set, TransactionTrait, prelude::*};
use tracing::info;

/// Derives the status a donation has earned from its milestones and the
/// proofs attached to them. Returns `Pending` when nothing is earned yet.
fn derive_status(milestones: &[milestone::Model], proofs: &[proof::Model]) -> DonationStatus {
    if milestones.is_empty() || !milestones.iter().all(|m| m.completed) {
        return DonationStatus::Pending;
    }

    if !proofs.is_empty() && proofs.iter().all(|p| p.verified == Some(true)) {
        return DonationStatus::Completed;
    }

    DonationStatus::Verified
}

/// Recomputes and persists a donation's status from its milestones and
/// proofs. Called after every milestone completion and proof upload that
/// touches the donation.
///
/// The merge is monotonic: a donation never moves backward even if the
/// derived status is lower (e.g., after a milestone is added to an already
/// verified donation). Fund release happens on the transition into
/// `completed` and nowhere else.
pub async fn refresh_donation_status(
    db: &DatabaseConnection,
    donation_id: i64,
) -> Result<donation::Model> {
    let txn = db.begin().await?;

    let donation = Donation::find_by_id(donation_id)
        .one(&txn)
        .await?
        .ok_or(Error::DonationNotFound { id: donation_id })?;

    let milestones = Milestone::find()
        .filter(milestone::Column::DonationId.eq(donation_id))
        .all(&txn)
        .await?;

    let milestone_ids: Vec<i64> = milestones.iter().map(|m| m.id).collect();
    let proofs = if milestone_ids.is_empty() {
        Vec::new()
    } else {
        Proof::find()
            .filter(proof::Column::MilestoneId.is_in(milestone_ids))
            .all(&txn)
            .await?
    };

    let current = donation.status;
    let next = current.max(derive_status(&milestones, &proofs));

    if next == current {
        txn.commit().await?;
        return Ok(donation);
    }

    info!(
        "donation {} advanced: {:?} -> {:?}",
        donation_id, current, next
    );

    let organization_id = donation.organization_id;
    let amount = donation.amount;

    let mut active: donation::ActiveModel = donation.into();
    active.status = Set(next);
    let updated = active.update(&txn).await?;

    if next == DonationStatus::Completed {
        crate::core::organization::record_fund_release(&txn, organization_id, amount).await?;
        info!(
            "funds released: {} to organization {}",
            amount, organization_id
        );
    }

    txn.commit().await?;

    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{milestone::complete_milestone, organization::get_organization_by_id};
    use crate::entities::ProofKind;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_refresh_without_milestones_stays_pending() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;
        let donation = create_test_donation(&db, organization.id, 0.5).await?;

        let refreshed = refresh_donation_status(&db, donation.id).await?;
        assert_eq!(refreshed.status, DonationStatus::Pending);

        Ok(())
    }

    #[tokio::test]
    async fn test_all_milestones_complete_moves_to_verified() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;
        let donation = create_test_donation(&db, organization.id, 0.5).await?;

        let first = create_test_milestone(
            &db,
            organization.id,
            Some(donation.id),
            "Water pump installation",
        )
        .await?;
        let second = create_test_milestone(
            &db,
            organization.id,
            Some(donation.id),
            "Community training",
        )
        .await?;

        // One of two milestones complete: still pending.
        complete_milestone(&db, first.id).await?;
        let donation_now = crate::core::donation::get_donation_by_id(&db, donation.id)
            .await?
            .unwrap();
        assert_eq!(donation_now.status, DonationStatus::Pending);

        // All milestones complete: verified, but not yet completed
        // because no proof has been uploaded.
        complete_milestone(&db, second.id).await?;
        let donation_now = crate::core::donation::get_donation_by_id(&db, donation.id)
            .await?
            .unwrap();
        assert_eq!(donation_now.status, DonationStatus::Verified);

        Ok(())
    }

    #[tokio::test]
    async fn test_verified_proofs_complete_and_release_funds() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;
        let donation = create_test_donation(&db, organization.id, 0.5).await?;
        let milestone = create_test_milestone(
            &db,
            organization.id,
            Some(donation.id),
            "Water pump installation",
        )
        .await?;

        complete_milestone(&db, milestone.id).await?;

        let oracle = FixedOracle::passing();
        crate::core::proof::upload_proof(
            &db,
            &oracle,
            organization.id,
            Some(milestone.id),
            ProofKind::Photo,
            "Water pump installation progress".to_string(),
            "https://example.com/pump.jpg".to_string(),
        )
        .await?;

        let donation_now = crate::core::donation::get_donation_by_id(&db, donation.id)
            .await?
            .unwrap();
        assert_eq!(donation_now.status, DonationStatus::Completed);

        // Fund release happened exactly once.
        let org = get_organization_by_id(&db, organization.id).await?.unwrap();
        assert_eq!(org.total_received, 0.5);
        assert_eq!(org.donor_count, 1);

        // A redundant refresh neither regresses nor double-releases.
        refresh_donation_status(&db, donation.id).await?;
        let org = get_organization_by_id(&db, organization.id).await?.unwrap();
        assert_eq!(org.total_received, 0.5);
        assert_eq!(org.donor_count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_failed_proof_blocks_completion() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;
        let donation = create_test_donation(&db, organization.id, 0.8).await?;
        let milestone = create_test_milestone(
            &db,
            organization.id,
            Some(donation.id),
            "Emergency supplies distribution",
        )
        .await?;

        complete_milestone(&db, milestone.id).await?;

        let oracle = FixedOracle::failing();
        crate::core::proof::upload_proof(
            &db,
            &oracle,
            organization.id,
            Some(milestone.id),
            ProofKind::Receipt,
            "Blurry receipt".to_string(),
            "https://example.com/receipt.jpg".to_string(),
        )
        .await?;

        let donation_now = crate::core::donation::get_donation_by_id(&db, donation.id)
            .await?
            .unwrap();
        assert_eq!(donation_now.status, DonationStatus::Verified);

        let org = get_organization_by_id(&db, organization.id).await?.unwrap();
        assert_eq!(org.total_received, 0.0);
        assert_eq!(org.donor_count, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_status_never_regresses_when_milestone_added_later() -> Result<()> {
        let (db, organization) = setup_with_organization().await?;
        let donation = create_test_donation(&db, organization.id, 0.5).await?;
        let milestone = create_test_milestone(
            &db,
            organization.id,
            Some(donation.id),
            "School supplies purchase",
        )
        .await?;

        complete_milestone(&db, milestone.id).await?;
        let donation_now = crate::core::donation::get_donation_by_id(&db, donation.id)
            .await?
            .unwrap();
        assert_eq!(donation_now.status, DonationStatus::Verified);

        // A new incomplete milestone derives Pending, but the merge keeps
        // the donation at Verified.
        create_test_milestone(&db, organization.id, Some(donation.id), "Extra milestone").await?;
        let refreshed = refresh_donation_status(&db, donation.id).await?;
        assert_eq!(refreshed.status, DonationStatus::Verified);

        Ok(())
    }

    #[tokio::test]
    async fn test_refresh_missing_donation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = refresh_donation_status(&db, 999).await;
        assert!(matches!(
            result.unwrap_err(),
            Error::DonationNotFound { id: 999 }
        ));

        Ok(())
    }
}
