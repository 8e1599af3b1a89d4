use tracing::{info, instrument};
use validator::Validate;

use crate::dto::job_dto::{JobCreateRequest, JobListQuery};
use crate::dto::page::{Page, PageRequest};
use crate::error::Result;
use crate::http::ApiClient;
use crate::models::job::Job;

#[derive(Clone)]
pub struct JobService {
    api: ApiClient,
}

impl JobService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Paged listing with optional AND-combined title/location/status filters
    /// and field/direction sorting.
    #[instrument(skip(self, query))]
    pub async fn list(&self, query: &JobListQuery) -> Result<Page<Job>> {
        self.api.get_query("/jobs", &query.to_query()).await
    }

    pub async fn get(&self, id: &str) -> Result<Job> {
        self.api.get(&format!("/jobs/{}", id)).await
    }

    /// Creates a job in DRAFT; it is invisible to candidates until published.
    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create(&self, payload: JobCreateRequest) -> Result<Job> {
        payload.validate()?;
        let job: Job = self.api.post("/jobs", &payload).await?;
        info!(job_id = %job.id, "Created job");
        Ok(job)
    }

    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: &str, payload: JobCreateRequest) -> Result<Job> {
        payload.validate()?;
        self.api.put(&format!("/jobs/{}", id), &payload).await
    }

    /// DRAFT -> PUBLISHED. Forward-only; the server rejects anything else.
    #[instrument(skip(self))]
    pub async fn publish(&self, id: &str) -> Result<()> {
        self.api
            .post_empty(&format!("/jobs/{}/publish", id), &[])
            .await?;
        info!(job_id = %id, "Published job");
        Ok(())
    }

    /// PUBLISHED -> CLOSED.
    #[instrument(skip(self))]
    pub async fn close(&self, id: &str) -> Result<()> {
        self.api
            .post_empty(&format!("/jobs/{}/close", id), &[])
            .await?;
        info!(job_id = %id, "Closed job");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.api.delete(&format!("/jobs/{}", id)).await
    }

    /// The calling recruiter's own postings.
    pub async fn my_jobs(&self, page: PageRequest) -> Result<Page<Job>> {
        self.api
            .get_query("/jobs/recruiter/my-jobs", &page.to_query())
            .await
    }
}
