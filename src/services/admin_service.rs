use serde_json::Value;
use tracing::{info, instrument};

use crate::access::{can, Action, Resource};
use crate::dto::admin_dto::{ChangeRoleRequest, ReportType, UpdateUserRequest};
use crate::dto::page::{Page, PageRequest};
use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::models::analytics::SystemStats;
use crate::models::application::Application;
use crate::models::job::Job;
use crate::models::user::{Role, User};

/// System-wide management surface. Every operation is admin-gated
/// client-side against the capability table before a request is issued; the
/// server enforces the same rule authoritatively.
#[derive(Clone)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn users(&self, page: PageRequest) -> Result<Page<User>> {
        self.require_admin()?;
        self.api.get_query("/admin/users", &page.to_query()).await
    }

    pub async fn user(&self, id: &str) -> Result<User> {
        self.require_admin()?;
        self.api.get(&format!("/admin/users/{}", id)).await
    }

    #[instrument(skip(self, payload))]
    pub async fn update_user(&self, id: &str, payload: UpdateUserRequest) -> Result<User> {
        self.require_admin()?;
        let user: User = self
            .api
            .put(&format!("/admin/users/{}", id), &payload)
            .await?;
        info!(user_id = %id, "Updated user");
        Ok(user)
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.require_admin()?;
        self.api.delete(&format!("/admin/users/{}", id)).await
    }

    /// Only an admin may change another user's role.
    #[instrument(skip(self), fields(user_id = %id, role = %role))]
    pub async fn change_role(&self, id: &str, role: Role) -> Result<User> {
        self.require_admin()?;
        self.api
            .put(
                &format!("/admin/users/{}/role", id),
                &ChangeRoleRequest { role },
            )
            .await
    }

    /// Flips `isActive`. A deactivated user fails their next login; an
    /// existing session is only invalidated when it next hits the server.
    #[instrument(skip(self))]
    pub async fn toggle_user_status(&self, id: &str) -> Result<User> {
        self.require_admin()?;
        let user: User = self
            .api
            .put(
                &format!("/admin/users/{}/toggle-status", id),
                &serde_json::json!({}),
            )
            .await?;
        info!(user_id = %id, is_active = user.is_active, "Toggled user status");
        Ok(user)
    }

    pub async fn stats(&self) -> Result<SystemStats> {
        self.require_admin()?;
        self.api.get("/admin/stats").await
    }

    pub async fn jobs(&self, page: PageRequest) -> Result<Page<Job>> {
        self.require_admin()?;
        self.api.get_query("/admin/jobs", &page.to_query()).await
    }

    #[instrument(skip(self))]
    pub async fn close_job(&self, job_id: &str) -> Result<()> {
        self.require_admin()?;
        self.api
            .post_empty(&format!("/admin/jobs/{}/close", job_id), &[])
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_job(&self, job_id: &str) -> Result<()> {
        self.require_admin()?;
        self.api.delete(&format!("/admin/jobs/{}", job_id)).await
    }

    pub async fn applications(&self, page: PageRequest) -> Result<Page<Application>> {
        self.require_admin()?;
        self.api
            .get_query("/admin/applications", &page.to_query())
            .await
    }

    /// Shape varies per deployment, so the dashboard stays untyped.
    pub async fn dashboard(&self) -> Result<Value> {
        self.require_admin()?;
        self.api.get("/admin/analytics/dashboard").await
    }

    pub async fn report(&self, report_type: ReportType) -> Result<Value> {
        self.require_admin()?;
        self.api
            .get(&format!(
                "/admin/analytics/reports/{}",
                report_type.as_str()
            ))
            .await
    }

    fn require_admin(&self) -> Result<()> {
        match self.api.session().role() {
            Some(role) if can(role, Resource::Users, Action::Manage) => Ok(()),
            Some(_) => Err(Error::Authorization(
                "Admin capability required".to_string(),
            )),
            None => Err(Error::Auth("Not logged in".to_string())),
        }
    }
}
