pub mod admin_service;
pub mod analytics_service;
pub mod application_service;
pub mod auth_service;
pub mod file_service;
pub mod interview_service;
pub mod job_service;
pub mod message_service;
