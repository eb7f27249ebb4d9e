//! Task entity - An organization-internal work item.
//!
//! Tasks share the milestone completion semantics (one-way, date stamped
//! once) but never feed into any donation's lifecycle.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Task database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tasks")]
pub struct Model {
    /// Unique identifier for the task
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Owning organization
    pub organization_id: i64,
    /// Short title (e.g., "Purchase rice supplies")
    pub title: String,
    /// What the task involves
    pub description: String,
    /// Whether the task has been completed (one-way)
    pub completed: bool,
    /// Date of completion, set exactly once at the transition
    pub completed_date: Option<Date>,
}

/// Defines relationships between Task and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each task belongs to exactly one organization
    #[sea_orm(
        belongs_to = "super::organization::Entity",
        from = "Column::OrganizationId",
        to = "super::organization::Column::Id"
    )]
    Organization,
}

impl Related<super::organization::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Organization.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
