//! Entity module - Contains all SeaORM entity definitions for the store.
//! These entities represent the session store tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod donation;
pub mod milestone;
pub mod organization;
pub mod proof;
pub mod task;

// Re-export specific types to avoid conflicts
pub use donation::{
    Column as DonationColumn, DonationStatus, Entity as Donation, Model as DonationModel,
};
pub use milestone::{Column as MilestoneColumn, Entity as Milestone, Model as MilestoneModel};
pub use organization::{
    Column as OrganizationColumn, Entity as Organization, Model as OrganizationModel,
};
pub use proof::{Column as ProofColumn, Entity as Proof, Model as ProofModel, ProofKind};
pub use task::{Column as TaskColumn, Entity as Task, Model as TaskModel};
