use serde::{Deserialize, Serialize};

use crate::models::user::Role;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: Role,
}

/// Report families served by `GET /admin/analytics/reports/{type}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportType {
    Users,
    Jobs,
    Applications,
    Interviews,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Users => "users",
            ReportType::Jobs => "jobs",
            ReportType::Applications => "applications",
            ReportType::Interviews => "interviews",
        }
    }
}
