use tracing::{info, instrument, warn};
use validator::Validate;

use crate::access::{can, Action, Resource};
use crate::dto::interview_dto::{InterviewCreateRequest, InterviewResponseRequest};
use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::models::interview::Interview;

#[derive(Clone)]
pub struct InterviewService {
    api: ApiClient,
}

impl InterviewService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Schedules an interview against an application. `scheduled_at` is
    /// required and checked before any request is issued, so a missing value
    /// never reaches the server and the application's status is untouched.
    /// On success the server moves the application to INTERVIEW_SCHEDULED.
    #[instrument(skip(self, payload), fields(application_id = %payload.application_id))]
    pub async fn schedule(&self, payload: InterviewCreateRequest) -> Result<Interview> {
        self.require_staff()?;
        payload.validate()?;

        let interview: Interview = self.api.post("/interviews", &payload).await?;
        info!(interview_id = %interview.id, "Scheduled interview");
        Ok(interview)
    }

    /// The calling candidate's interviews.
    pub async fn my_interviews(&self) -> Result<Vec<Interview>> {
        self.api.get("/interviews/my-interviews").await
    }

    /// The calling recruiter's interviews.
    pub async fn recruiter_interviews(&self) -> Result<Vec<Interview>> {
        self.api.get("/interviews/recruiter/my-interviews").await
    }

    pub async fn get(&self, id: &str) -> Result<Interview> {
        self.api.get(&format!("/interviews/{}", id)).await
    }

    /// Revises schedule details on an open interview. A completed interview
    /// cannot be rescheduled. The server resets the candidate response to
    /// PENDING so the new slot gets re-confirmed.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: &str, payload: InterviewCreateRequest) -> Result<Interview> {
        self.require_staff()?;
        payload.validate()?;

        let current = self.get(id).await?;
        if !current.can_update() {
            warn!(interview_id = %id, "Refusing update of completed interview");
            return Err(Error::InvalidState(
                "Cannot update a completed interview".to_string(),
            ));
        }

        self.api.put(&format!("/interviews/{}", id), &payload).await
    }

    /// Candidate accepts or declines. Allowed exactly once, and only while
    /// the interview is open; a second attempt is refused locally so the
    /// stored response cannot change.
    #[instrument(skip(self, payload), fields(interview_id = %id))]
    pub async fn respond(
        &self,
        id: &str,
        payload: InterviewResponseRequest,
    ) -> Result<Interview> {
        match self.api.session().role() {
            Some(role) if can(role, Resource::Interviews, Action::Respond) => {}
            Some(_) => {
                return Err(Error::Authorization(
                    "Only the candidate may respond to an interview".to_string(),
                ))
            }
            None => return Err(Error::Auth("Not logged in".to_string())),
        }

        let current = self.get(id).await?;
        if !current.can_respond() {
            warn!("Interview response already resolved");
            return Err(Error::InvalidState(
                "Interview response is already resolved".to_string(),
            ));
        }

        let interview: Interview = self
            .api
            .post(&format!("/interviews/{}/respond", id), &payload)
            .await?;
        info!(response = %interview.candidate_response_status.as_str(), "Recorded interview response");
        Ok(interview)
    }

    /// Marks the interview completed, stamping `completedAt`. One-way.
    #[instrument(skip(self, notes))]
    pub async fn complete(&self, id: &str, notes: Option<&str>) -> Result<Interview> {
        self.require_staff()?;

        let mut query = Vec::new();
        if let Some(notes) = notes {
            query.push(("notes", notes.to_string()));
        }
        let interview: Interview = self
            .api
            .post_query(&format!("/interviews/{}/complete", id), &query)
            .await?;
        info!(interview_id = %id, "Completed interview");
        Ok(interview)
    }

    fn require_staff(&self) -> Result<()> {
        match self.api.session().role() {
            Some(role) if can(role, Resource::Interviews, Action::Schedule) => Ok(()),
            Some(_) => Err(Error::Authorization(
                "Only recruiters and admins may manage interviews".to_string(),
            )),
            None => Err(Error::Auth("Not logged in".to_string())),
        }
    }
}
