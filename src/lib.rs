//! Typed client for the Recruito recruitment platform REST API.
//!
//! Owns the pieces a client must get right: the session (identity + token),
//! role-based access control, the application/interview status-transition
//! models, one typed resource client per REST family, and a cancellable
//! polling primitive for chat freshness. The backend stays authoritative for
//! all state; entities held here are possibly-stale fetched copies.

pub mod access;
pub mod config;
pub mod dto;
pub mod error;
pub mod http;
pub mod models;
pub mod polling;
pub mod services;
pub mod session;
pub mod utils;

use crate::config::Config;
use crate::error::Result;
use crate::http::ApiClient;
use crate::services::{
    admin_service::AdminService, analytics_service::AnalyticsService,
    application_service::ApplicationService, auth_service::AuthService,
    file_service::FileService, interview_service::InterviewService, job_service::JobService,
    message_service::MessageService,
};
use crate::session::SessionStore;

/// One client per REST resource family, all sharing a session store and HTTP
/// transport. Cloning is cheap and every clone observes the same session.
#[derive(Clone)]
pub struct RecruitoClient {
    pub config: Config,
    pub session: SessionStore,
    pub auth: AuthService,
    pub jobs: JobService,
    pub applications: ApplicationService,
    pub interviews: InterviewService,
    pub chat: MessageService,
    pub files: FileService,
    pub admin: AdminService,
    pub analytics: AnalyticsService,
}

impl RecruitoClient {
    pub fn new(config: Config) -> Result<Self> {
        let session = match &config.session_file {
            Some(path) => SessionStore::with_persistence(path.clone()),
            None => SessionStore::in_memory(),
        };
        Self::with_session(config, session)
    }

    /// Builds against an explicit session store, the seam tests and embedders
    /// use to inject identity.
    pub fn with_session(config: Config, session: SessionStore) -> Result<Self> {
        let api = ApiClient::new(&config, session.clone())?;

        Ok(Self {
            auth: AuthService::new(api.clone()),
            jobs: JobService::new(api.clone()),
            applications: ApplicationService::new(api.clone()),
            interviews: InterviewService::new(api.clone()),
            chat: MessageService::new(api.clone()),
            files: FileService::new(api.clone()),
            admin: AdminService::new(api.clone()),
            analytics: AnalyticsService::new(api),
            config,
            session,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Chat conversation poller wired with the configured interval.
    pub fn watch_conversation<U>(
        &self,
        other_user_email: &str,
        on_messages: U,
    ) -> polling::SubscriptionHandle
    where
        U: Fn(Vec<models::message::Message>) + Send + Sync + 'static,
    {
        polling::watch_conversation(
            self.chat.clone(),
            other_user_email.to_string(),
            self.config.chat_poll_interval,
            on_messages,
        )
    }
}
