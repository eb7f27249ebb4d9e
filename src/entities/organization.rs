//! Organization entity - Represents a recipient organization.
//!
//! Each organization has a mission, category, location, and verification
//! status, plus running aggregates of funds released to it. Milestones,
//! proofs, and tasks are owned by the organization; donations reference it.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Organization database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    /// Unique identifier for the organization
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Global Water Initiative")
    pub name: String,
    /// Mission statement shown to donors
    pub mission: String,
    /// Cause category (e.g., "Water & Sanitation", "Education")
    pub category: String,
    /// Where the organization operates
    pub location: String,
    /// Whether the platform has verified this organization
    pub verified: bool,
    /// Total funds released to the organization, in the platform currency
    pub total_received: f64,
    /// Number of donations that have completed and released funds
    pub donor_count: i32,
    /// Cover image URL for listings
    pub image_url: String,
}

/// Defines relationships between Organization and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One organization receives many donations
    #[sea_orm(has_many = "super::donation::Entity")]
    Donations,
    /// One organization owns many milestones
    #[sea_orm(has_many = "super::milestone::Entity")]
    Milestones,
    /// One organization owns many proofs
    #[sea_orm(has_many = "super::proof::Entity")]
    Proofs,
    /// One organization owns many internal tasks
    #[sea_orm(has_many = "super::task::Entity")]
    Tasks,
}

impl Related<super::donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donations.def()
    }
}

impl Related<super::milestone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Milestones.def()
    }
}

impl Related<super::proof::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Proofs.def()
    }
}

impl Related<super::task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tasks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
