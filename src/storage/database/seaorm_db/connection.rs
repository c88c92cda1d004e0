use crate::config::DatabaseConfig;
use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::super::entities::{self, print_queue};
use super::super::migration::Migrator;
use super::types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let backend_type = if config.url.starts_with("sqlite") {
            DatabaseBackendType::SQLite
        } else {
            DatabaseBackendType::PostgreSQL
        };

        let db = Self::try_connect(config).await?;
        info!("Database connection established ({:?})", backend_type);

        Ok(Self { db, backend_type })
    }

    /// Try to connect to a database
    async fn try_connect(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        // An in-memory SQLite database lives and dies with its connection
        let max_connections = if config.is_in_memory() {
            1
        } else {
            config.max_connections
        };

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(3600))
            .sqlx_logging(config.sql_logging)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| AdminError::Config(format!("Failed to connect to database: {}", e)))
    }

    /// Get the current backend type
    pub fn backend_type(&self) -> DatabaseBackendType {
        self.backend_type
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            AdminError::RemoteMutationFailed(e)
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await?;
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        debug!("Performing database health check");

        // Simple query to check database connectivity
        let _result = entities::Member::find().limit(1).all(&self.db).await?;

        debug!("Database health check passed");
        Ok(())
    }

    /// Row counts for the health report
    pub async fn stats(&self) -> Result<DatabaseStats> {
        let total_members = entities::Member::find().count(&self.db).await?;
        let pending_print_jobs = entities::PrintQueue::find()
            .filter(print_queue::Column::Completed.eq(false))
            .filter(print_queue::Column::ErrorMsg.is_null())
            .count(&self.db)
            .await?;

        Ok(DatabaseStats {
            total_members,
            pending_print_jobs,
        })
    }
}
