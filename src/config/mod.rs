/// Store connection and table creation
pub mod database;

/// Organization fixture loading and seeding from config.toml
pub mod seed;
