//! Organization fixture loading from config.toml.
//!
//! The organizations shown to donors at session start are defined in a TOML
//! file together with their initial milestones and tasks. Seeding is
//! idempotent by organization name so a reused store is never double-seeded.

use crate::{
    core::organization::image_for_category,
    entities::{milestone, organization, task},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, Set, prelude::*};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of organization fixtures to seed
    pub organizations: Vec<OrganizationConfig>,
}

/// Fixture for a single organization
#[derive(Debug, Deserialize, Clone)]
pub struct OrganizationConfig {
    /// Display name
    pub name: String,
    /// Mission statement
    pub mission: String,
    /// Cause category
    pub category: String,
    /// Where the organization operates
    pub location: String,
    /// Whether the fixture is platform-verified
    #[serde(default)]
    pub verified: bool,
    /// Funds already released to the organization
    #[serde(default)]
    pub total_received: f64,
    /// Completed donations already credited
    #[serde(default)]
    pub donor_count: i32,
    /// Cover image URL; derived from the category when absent
    #[serde(default)]
    pub image: Option<String>,
    /// Initial milestones
    #[serde(default)]
    pub milestones: Vec<CheckpointConfig>,
    /// Initial tasks
    #[serde(default)]
    pub tasks: Vec<CheckpointConfig>,
}

/// Fixture for a milestone or task (same shape for both)
#[derive(Debug, Deserialize, Clone)]
pub struct CheckpointConfig {
    /// Short title
    pub title: String,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Whether it is already completed in the fixture
    #[serde(default)]
    pub completed: bool,
    /// Completion date for completed fixtures (YYYY-MM-DD)
    #[serde(default)]
    pub completed_date: Option<NaiveDate>,
}

/// Loads the seed configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the seed configuration from the default location (./config.toml)
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

/// Seeds the store with the configured organizations, their milestones, and
/// their tasks. Organizations whose name already exists are skipped.
pub async fn seed_initial_organizations(db: &DatabaseConnection, config: &Config) -> Result<()> {
    for fixture in &config.organizations {
        if crate::core::organization::get_organization_by_name(db, &fixture.name)
            .await?
            .is_some()
        {
            debug!("organization already seeded: {}", fixture.name);
            continue;
        }

        let image_url = fixture
            .image
            .clone()
            .unwrap_or_else(|| image_for_category(&fixture.category).to_string());

        let organization = organization::ActiveModel {
            name: Set(fixture.name.clone()),
            mission: Set(fixture.mission.clone()),
            category: Set(fixture.category.clone()),
            location: Set(fixture.location.clone()),
            verified: Set(fixture.verified),
            total_received: Set(fixture.total_received),
            donor_count: Set(fixture.donor_count),
            image_url: Set(image_url),
            ..Default::default()
        };
        let organization = organization.insert(db).await?;

        for m in &fixture.milestones {
            let milestone = milestone::ActiveModel {
                organization_id: Set(organization.id),
                donation_id: Set(None),
                title: Set(m.title.clone()),
                description: Set(m.description.clone()),
                completed: Set(m.completed),
                completed_date: Set(m.completed_date),
                ..Default::default()
            };
            milestone.insert(db).await?;
        }

        for t in &fixture.tasks {
            let task = task::ActiveModel {
                organization_id: Set(organization.id),
                title: Set(t.title.clone()),
                description: Set(t.description.clone()),
                completed: Set(t.completed),
                completed_date: Set(t.completed_date),
                ..Default::default()
            };
            task.insert(db).await?;
        }

        info!(
            "seeded organization: {} ({} milestones, {} tasks)",
            organization.name,
            fixture.milestones.len(),
            fixture.tasks.len()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::core::{
        milestone::list_milestones_for_organization, organization::list_organizations,
        task::list_tasks_for_organization,
    };
    use crate::test_utils::setup_test_db;

    const FIXTURE: &str = r#"
        [[organizations]]
        name = "Global Water Initiative"
        mission = "Providing clean water access to underserved communities worldwide"
        category = "Water & Sanitation"
        location = "Kenya, Africa"
        verified = true
        total_received = 12.5
        donor_count = 45

        [[organizations.milestones]]
        title = "Water pump installation"
        description = "Install new water pumps in rural areas"
        completed = true
        completed_date = "2024-01-20"

        [[organizations.tasks]]
        title = "Renovate community center"
        description = "Complete renovation of main hall"

        [[organizations]]
        name = "Education for All"
        mission = "Ensuring quality education reaches every child in remote areas"
        category = "Education"
        location = "Bangladesh"
        verified = true
    "#;

    #[test]
    fn test_parse_seed_config() {
        let config: Config = toml::from_str(FIXTURE).unwrap();
        assert_eq!(config.organizations.len(), 2);

        let water = &config.organizations[0];
        assert_eq!(water.name, "Global Water Initiative");
        assert_eq!(water.total_received, 12.5);
        assert_eq!(water.donor_count, 45);
        assert!(water.verified);
        assert_eq!(water.milestones.len(), 1);
        assert!(water.milestones[0].completed);
        assert_eq!(
            water.milestones[0].completed_date,
            NaiveDate::from_ymd_opt(2024, 1, 20)
        );
        assert!(!water.tasks[0].completed);

        let education = &config.organizations[1];
        assert_eq!(education.total_received, 0.0);
        assert!(education.milestones.is_empty());
    }

    #[tokio::test]
    async fn test_seed_initial_organizations() -> Result<()> {
        let db = setup_test_db().await?;
        let config: Config = toml::from_str(FIXTURE).unwrap();

        seed_initial_organizations(&db, &config).await?;

        let organizations = list_organizations(&db).await?;
        assert_eq!(organizations.len(), 2);
        assert_eq!(organizations[0].name, "Global Water Initiative");
        assert_eq!(organizations[0].total_received, 12.5);

        let milestones = list_milestones_for_organization(&db, organizations[0].id).await?;
        assert_eq!(milestones.len(), 1);
        assert!(milestones[0].completed);

        let tasks = list_tasks_for_organization(&db, organizations[0].id).await?;
        assert_eq!(tasks.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_seed_is_idempotent_by_name() -> Result<()> {
        let db = setup_test_db().await?;
        let config: Config = toml::from_str(FIXTURE).unwrap();

        seed_initial_organizations(&db, &config).await?;
        seed_initial_organizations(&db, &config).await?;

        let organizations = list_organizations(&db).await?;
        assert_eq!(organizations.len(), 2);

        Ok(())
    }
}
