//! Proof entity - Evidence of fund usage uploaded by an organization.
//!
//! The verification verdict and score are produced by the oracle at upload
//! time and never change afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The kind of evidence artifact.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum ProofKind {
    /// Purchase receipt
    #[sea_orm(string_value = "receipt")]
    Receipt,
    /// Photo of work in progress or delivered goods
    #[sea_orm(string_value = "photo")]
    Photo,
    /// Video evidence
    #[sea_orm(string_value = "video")]
    Video,
}

/// Proof database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "proofs")]
pub struct Model {
    /// Unique identifier for the proof
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning organization
    pub organization_id: i64,
    /// Milestone this proof substantiates, if attached to one
    pub milestone_id: Option<i64>,
    /// Evidence type
    pub kind: ProofKind,
    /// What the artifact shows
    pub description: String,
    /// Where the artifact is hosted
    pub url: String,
    /// Date the proof was uploaded
    pub upload_date: Date,
    /// Oracle verdict, set once at upload
    pub verified: Option<bool>,
    /// Oracle confidence score (0-100), set once at upload
    pub score: Option<i32>,
}

/// Defines relationships between Proof and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each proof is owned by exactly one organization
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
    /// Optional back-reference to the milestone it substantiates
    #[sea_orm(
        belongs_to = "super::milestone::Entity",
        from = "Column::MilestoneId",
        to = "super::milestone::Column::Id"
    )]
    Milestone,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
