//! Proof business logic - evidence upload and oracle verdicts.
//!
//! Uploading a proof invokes the verification oracle and stores the verdict
//! on the new record; verdict and score are never rewritten afterwards.
//! When the proof substantiates a milestone scoped to a donation, the
//! donation's lifecycle is recomputed.

use crate::{
    entities::{Proof, ProofKind, proof},
    errors::{Error, Result},
    oracle::{ProofInput, VerificationOracle},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::debug;

/// Uploads a proof artifact for an organization, obtaining a verdict from
/// the oracle and cascading into the affected donation's lifecycle.
///
/// Validates that the description is non-empty, the organization exists,
/// and the milestone (when given) belongs to that organization. An oracle
/// score outside `0..=100` is treated as an oracle contract violation.
pub async fn upload_proof(
    db: &DatabaseConnection,
    oracle: &dyn VerificationOracle,
    organization_id: i64,
    milestone_id: Option<i64>,
    kind: ProofKind,
    description: String,
    url: String,
) -> Result<proof::Model> {
    if description.trim().is_empty() {
        return Err(Error::Validation {
            message: "Proof description cannot be empty".to_string(),
        });
    }

    crate::core::organization::get_organization_by_id(db, organization_id)
        .await?
        .ok_or_else(|| Error::OrganizationNotFound {
            id: organization_id.to_string(),
        })?;

    let cascade_donation = match milestone_id {
        Some(milestone_id) => {
            let milestone = crate::core::milestone::get_milestone_by_id(db, milestone_id)
                .await?
                .ok_or(Error::MilestoneNotFound { id: milestone_id })?;

            if milestone.organization_id != organization_id {
                return Err(Error::Validation {
                    message: format!(
                        "Milestone {milestone_id} belongs to a different organization"
                    ),
                });
            }

            milestone.donation_id
        }
        None => None,
    };

    let verdict = oracle
        .verify(&ProofInput {
            kind,
            description: description.clone(),
        })
        .await?;

    if !(0..=100).contains(&verdict.score) {
        return Err(Error::Validation {
            message: format!("Oracle returned out-of-range score {}", verdict.score),
        });
    }

    debug!(
        "proof verdict for organization {organization_id}: verified={} score={}",
        verdict.verified, verdict.score
    );

    let proof = proof::ActiveModel {
        organization_id: Set(organization_id),
        milestone_id: Set(milestone_id),
        kind: Set(kind),
        description: Set(description.trim().to_string()),
        url: Set(url),
        upload_date: Set(chrono::Utc::now().date_naive()),
        verified: Set(Some(verdict.verified)),
        score: Set(Some(verdict.score)),
        ..Default::default()
    };

    let result = proof.insert(db).await?;

    if let Some(donation_id) = cascade_donation {
        crate::core::lifecycle::refresh_donation_status(db, donation_id).await?;
    }

    Ok(result)
}

/// Retrieves all proofs uploaded by an organization, newest first.
pub async fn list_proofs_for_organization(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<proof::Model>> {
    Proof::find()
        .filter(proof::Column::OrganizationId.eq(organization_id))
        .order_by_desc(proof::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
