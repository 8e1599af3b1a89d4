use tracing::{info, instrument, warn};
use validator::Validate;

use crate::access::{can, Action, Resource};
use crate::dto::application_dto::ApplicationCreateRequest;
use crate::dto::page::{Page, PageRequest};
use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::models::application::{Application, ApplicationStatus};

#[derive(Clone)]
pub struct ApplicationService {
    api: ApiClient,
}

impl ApplicationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Candidate applies to a published job. One application per
    /// (candidate, job) pair; duplicates and non-published jobs are rejected
    /// server-side and propagate as errors.
    #[instrument(skip(self, payload), fields(job_id = %payload.job_id))]
    pub async fn create(&self, payload: ApplicationCreateRequest) -> Result<Application> {
        payload.validate()?;
        let application: Application = self.api.post("/applications", &payload).await?;
        info!(application_id = %application.id, "Submitted application");
        Ok(application)
    }

    pub async fn my_applications(&self, page: PageRequest) -> Result<Page<Application>> {
        self.api
            .get_query("/applications/my-applications", &page.to_query())
            .await
    }

    pub async fn recruiter_applications(&self, page: PageRequest) -> Result<Page<Application>> {
        self.api
            .get_query("/applications/recruiter/my-applications", &page.to_query())
            .await
    }

    pub async fn by_job(&self, job_id: &str, page: PageRequest) -> Result<Page<Application>> {
        self.api
            .get_query(&format!("/applications/job/{}", job_id), &page.to_query())
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Application> {
        self.api.get(&format!("/applications/{}", id)).await
    }

    /// Moves an application to `target`. Only recruiters/admins may change
    /// status directly; a candidate caller is refused before any request goes
    /// out. Repeating the current status is a no-op success, and a target the
    /// transition model forbids is refused locally so the caller sees the
    /// failure without a round-trip. The server stays authoritative for
    /// everything else and its rejections propagate unswallowed.
    #[instrument(skip(self), fields(application_id = %id, target = %target))]
    pub async fn update_status(
        &self,
        id: &str,
        target: ApplicationStatus,
    ) -> Result<Application> {
        match self.api.session().role() {
            Some(role) if can(role, Resource::Applications, Action::ChangeStatus) => {}
            Some(_) => {
                return Err(Error::Authorization(
                    "Only recruiters and admins may change application status".to_string(),
                ))
            }
            None => return Err(Error::Auth("Not logged in".to_string())),
        }

        let current = self.get(id).await?;
        if current.status == target {
            info!("Status already set, nothing to do");
            return Ok(current);
        }
        if !current.status.can_transition_to(target) {
            warn!(from = %current.status, "Refusing illegal status transition");
            return Err(Error::InvalidState(format!(
                "Cannot move application from {} to {}",
                current.status, target
            )));
        }

        let updated: Application = self
            .api
            .patch_query(
                &format!("/applications/{}/status", id),
                &[("status", target.as_str().to_string())],
            )
            .await?;
        info!(status = %updated.status, "Updated application status");
        Ok(updated)
    }
}
