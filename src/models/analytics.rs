use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Recruiter/admin dashboard figures from `GET /analytics/dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_jobs: i64,
    pub total_applications: i64,
    pub total_interviews: i64,
    pub total_users: i64,
    pub active_recruiters: i64,
    pub active_candidates: i64,
    #[serde(default)]
    pub applications_by_status: HashMap<String, i64>,
    #[serde(default)]
    pub interviews_by_month: HashMap<String, i64>,
    #[serde(default)]
    pub jobs_by_status: HashMap<String, i64>,
    pub conversion_rate: f64,
}

/// System-wide counters from `GET /admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStats {
    pub total_users: i64,
    pub total_candidates: i64,
    pub total_recruiters: i64,
    pub total_admins: i64,
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub pending_applications: i64,
    pub total_interviews: i64,
    pub upcoming_interviews: i64,
}
