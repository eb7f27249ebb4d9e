//! Store configuration for Donify.
//!
//! The session store is an `SQLite` database managed through `SeaORM`; by
//! default it lives in memory and is discarded when the session ends, per
//! the platform's volatile-data model. Table creation uses `SeaORM`'s
//! `Schema::create_table_from_entity` so the schema always matches the
//! entity definitions without hand-written SQL.

use crate::entities::{Donation, Milestone, Organization, Proof, Task};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// In-memory store used unless `DATABASE_URL` overrides it.
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Gets the store URL from the `DATABASE_URL` environment variable,
/// falling back to the in-memory default.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Opens the session store connection.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all store tables from the entity definitions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let organization_table = schema.create_table_from_entity(Organization);
    let donation_table = schema.create_table_from_entity(Donation);
    let milestone_table = schema.create_table_from_entity(Milestone);
    let proof_table = schema.create_table_from_entity(Proof);
    let task_table = schema.create_table_from_entity(Task);

    db.execute(builder.build(&organization_table)).await?;
    db.execute(builder.build(&donation_table)).await?;
    db.execute(builder.build(&milestone_table)).await?;
    db.execute(builder.build(&proof_table)).await?;
    db.execute(builder.build(&task_table)).await?;

    Ok(())
}
