use crate::core::models::{Application, ApplicationStatus};
use crate::utils::error::{AdminError, Result};
use sea_orm::*;
use tracing::debug;
use uuid::Uuid;

use super::super::entities::{self, application};
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Insert a certification application
    pub async fn insert_application(&self, app: &Application) -> Result<()> {
        debug!(
            "Inserting application {} for member {}",
            app.id, app.member_id
        );

        let active_model = application::ActiveModel {
            id: Set(app.id),
            member_id: Set(app.member_id),
            certification: Set(app.certification.clone()),
            status: Set(app.status.to_string()),
            reason: Set(app.reason.clone()),
            reviewed_by: Set(app.reviewed_by),
            reviewed_at: Set(app.reviewed_at.map(|dt| dt.into())),
            created_at: Set(app.created_at.into()),
        };

        entities::Application::insert(active_model)
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Find application by ID
    pub async fn find_application(&self, application_id: Uuid) -> Result<Option<Application>> {
        entities::Application::find_by_id(application_id)
            .one(&self.db)
            .await?
            .map(|model| model.to_domain_application())
            .transpose()
    }

    /// List applications in the given status, oldest first
    pub async fn list_applications(&self, status: ApplicationStatus) -> Result<Vec<Application>> {
        entities::Application::find()
            .filter(application::Column::Status.eq(status.to_string()))
            .order_by_asc(application::Column::CreatedAt)
            .all(&self.db)
            .await?
            .iter()
            .map(application::Model::to_domain_application)
            .collect()
    }

    /// Record the review decision on an application
    pub async fn update_application_review(
        &self,
        application_id: Uuid,
        status: ApplicationStatus,
        reviewer: Uuid,
        reason: Option<String>,
    ) -> Result<Application> {
        debug!("Reviewing application {} -> {}", application_id, status);

        let mut app: application::ActiveModel = entities::Application::find_by_id(application_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AdminError::not_found(format!("Application {}", application_id)))?
            .into();

        app.status = Set(status.to_string());
        app.reason = Set(reason);
        app.reviewed_by = Set(Some(reviewer));
        app.reviewed_at = Set(Some(chrono::Utc::now().into()));

        let model = app.update(&self.db).await?;
        model.to_domain_application()
    }
}
