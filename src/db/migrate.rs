//! Embedded database migrations.
//!
//! Each service owns its own database, so the migration directories are
//! embedded separately and applied by the matching binary.

use diesel_migrations::{EmbeddedMigrations, embed_migrations};

/// Migrations for the app-store database.
pub const STORE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/appstore");

/// Migrations for the CMS database.
pub const CMS_MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations/cms");
