use crate::access::{can, Action, Resource};
use crate::error::{Error, Result};
use crate::http::ApiClient;
use crate::models::analytics::Analytics;

#[derive(Clone)]
pub struct AnalyticsService {
    api: ApiClient,
}

impl AnalyticsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Dashboard figures for recruiters and admins.
    pub async fn dashboard(&self) -> Result<Analytics> {
        match self.api.session().role() {
            Some(role) if can(role, Resource::Analytics, Action::View) => {}
            Some(_) => {
                return Err(Error::Authorization(
                    "Analytics are limited to recruiters and admins".to_string(),
                ))
            }
            None => return Err(Error::Auth("Not logged in".to_string())),
        }
        self.api.get("/analytics/dashboard").await
    }
}
