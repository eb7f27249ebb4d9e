//! Donation entity - A pledge of funds from a donor to one organization.
//!
//! A donation moves through a linear status lifecycle as the organization's
//! milestones complete and their proofs verify. Status never moves backward.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a donation. Ordering of the variants is the
/// lifecycle order, so `Ord` comparisons give the monotonic merge.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, EnumIter, DeriveActiveEnum, Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum DonationStatus {
    /// Pledged, no verified progress yet
    #[sea_orm(string_value = "pending")]
    Pending,
    /// All of the donation's milestones are completed
    #[sea_orm(string_value = "verified")]
    Verified,
    /// Every proof on those milestones verified; funds released
    #[sea_orm(string_value = "completed")]
    Completed,
}

/// Donation database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "donations")]
pub struct Model {
    /// Unique identifier for the donation
    #[sea_orm(primary_key)]
    pub id: i64,
    /// The recipient organization
    pub organization_id: i64,
    /// Pledged amount in the platform currency
    pub amount: f64,
    /// Donor-specified fund usage (e.g., "Clean water systems")
    pub usage: String,
    /// Current lifecycle status
    pub status: DonationStatus,
    /// Date the pledge was made
    pub date: Date,
}

/// Defines relationships between Donation and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each donation belongs to exactly one organization
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
    /// Milestones scoped to this donation via back-reference
    #[sea_orm(has_many = "super::milestone::Entity")]
    Milestones,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestones.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
