use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::job::JobStatus;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobCreateRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub location: String,
    pub department: Option<String>,
    pub employment_type: Option<String>,
    pub salary_min: Option<Decimal>,
    pub salary_max: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Listing query for `GET /jobs`. Filters combine with AND semantics when
/// several are supplied; sorting is only supported on this listing.
#[derive(Debug, Clone)]
pub struct JobListQuery {
    pub page: i64,
    pub size: i64,
    pub sort_by: String,
    pub sort_dir: SortDirection,
    pub title: Option<String>,
    pub location: Option<String>,
    pub status: Option<JobStatus>,
}

impl Default for JobListQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: 10,
            sort_by: "createdAt".to_string(),
            sort_dir: SortDirection::Desc,
            title: None,
            location: None,
            status: None,
        }
    }
}

impl JobListQuery {
    pub fn published() -> Self {
        Self {
            status: Some(JobStatus::Published),
            ..Self::default()
        }
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("size", self.size.to_string()),
            ("sortBy", self.sort_by.clone()),
            ("sortDir", self.sort_dir.as_str().to_string()),
        ];
        if let Some(title) = &self.title {
            params.push(("title", title.clone()));
        }
        if let Some(location) = &self.location {
            params.push(("location", location.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        params
    }
}
