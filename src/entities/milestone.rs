//! Milestone entity - A discrete project-progress checkpoint.
//!
//! Milestones are owned by the organization; those scoped to a particular
//! donation carry a `donation_id` back-reference instead of being copied
//! onto the donation. Completion is one-way.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Milestone database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "milestones")]
pub struct Model {
    /// Unique identifier for the milestone
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning organization
    pub organization_id: i64,
    /// Donation this milestone tracks progress for, if donation-scoped
    pub donation_id: Option<i64>,
    /// Short title (e.g., "Water pump installation")
    pub title: String,
    /// What completing this milestone means
    pub description: String,
    /// Whether the milestone has been completed (one-way)
    pub completed: bool,
    /// Date of completion, set exactly once at the transition
    pub completed_date: Option<Date>,
}

/// Defines relationships between Milestone and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each milestone is owned by exactly one organization
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
    /// Optional back-reference to the donation it tracks
    #[sea_orm(
        belongs_to = "super::donation::Entity",
        from = "Column::DonationId",
        to = "super::donation::Column::Id"
    )]
    Donation,
    /// Proofs attached to this milestone
    #[sea_orm(has_many = "super::proof::Entity")]
    Proofs,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donation.def()
    }
}

impl Related<super::proof::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proofs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
