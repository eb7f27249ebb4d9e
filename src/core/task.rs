//! Task business logic - organization-internal work items.
//!
//! Tasks carry the same one-way idempotent completion semantics as
//! milestones but never feed into any donation's lifecycle.

use crate::{
    entities::{Task, task},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new task for an organization.
pub async fn add_task(
    db: &DatabaseConnection,
    organization_id: i64,
    title: String,
    description: String,
) -> Result<task::Model> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "Task title cannot be empty".to_string(),
        });
    }

    crate::core::organization::get_organization_by_id(db, organization_id)
        .await?
        .ok_or_else(|| Error::OrganizationNotFound {
            id: organization_id.to_string(),
        })?;

    let task = task::ActiveModel {
        organization_id: Set(organization_id),
        title: Set(title.trim().to_string()),
        description: Set(description),
        completed: Set(false),
        completed_date: Set(None),
        ..Default::default()
    };

    let result = task.insert(db).await?;
    Ok(result)
}

/// Retrieves all tasks for an organization, in insertion order.
pub async fn list_tasks_for_organization(
    db: &DatabaseConnection,
    organization_id: i64,
) -> Result<Vec<task::Model>> {
    Task::find()
        .filter(task::Column::OrganizationId.eq(organization_id))
        .order_by_asc(task::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Marks a task complete, stamping today's date.
///
/// Idempotent: an already-completed task is returned unchanged and its
/// completion date is never rewritten.
pub async fn complete_task(db: &DatabaseConnection, task_id: i64) -> Result<task::Model> {
    let task = Task::find_by_id(task_id)
        .one(db)
        .await?
        .ok_or(Error::TaskNotFound { id: task_id })?;

    if task.completed {
        return Ok(task);
    }

    let mut active: task::ActiveModel = task.into();
    active.completed = Set(true);
    active.completed_date = Set(Some(chrono::Utc::now().date_naive()));
    let updated = active.update(db).await?;

    Ok(updated)
}
