use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::SessionStore;

/// Thin wrapper over `reqwest` shared by every resource client. Centralizes
/// the base URL, attaches the bearer token from the session store, and maps
/// non-success statuses into the client error taxonomy.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(config: &Config, session: SessionStore) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.http_timeout)
            .build()
            .map_err(Error::Network)?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let builder = self.authorize(self.http.get(self.url(path)));
        self.expect_json(builder).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.authorize(self.http.get(self.url(path)).query(query));
        self.expect_json(builder).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.authorize(self.http.post(self.url(path)).json(body));
        self.expect_json(builder).await
    }

    /// POST without a body, returning the entity (e.g. `/complete?notes=`).
    pub async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.authorize(self.http.post(self.url(path)).query(query));
        self.expect_json(builder).await
    }

    /// POST without a body where the response carries nothing of interest
    /// (publish, close, mark-read).
    pub async fn post_empty(&self, path: &str, query: &[(&str, String)]) -> Result<()> {
        let builder = self.authorize(self.http.post(self.url(path)).query(query));
        self.expect_ok(builder).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let builder = self.authorize(self.http.put(self.url(path)).json(body));
        self.expect_json(builder).await
    }

    pub async fn patch_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let builder = self.authorize(self.http.patch(self.url(path)).query(query));
        self.expect_json(builder).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        let builder = self.authorize(self.http.delete(self.url(path)));
        self.expect_ok(builder).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        let builder = self.authorize(self.http.post(self.url(path)).multipart(form));
        self.expect_json(builder).await
    }

    async fn expect_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(Error::Network)?;
        let response = self.check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn expect_ok(&self, builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await.map_err(Error::Network)?;
        self.check_status(response).await?;
        Ok(())
    }

    /// Turns a non-success response into an `Error`, pulling the message out
    /// of the server's JSON body where one exists. An expired or rejected
    /// token force-logs-out the session before the error surfaces.
    async fn check_status(&self, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = extract_message(response).await;
        debug!(%status, %message, "Request rejected by server");

        if status == reqwest::StatusCode::UNAUTHORIZED {
            warn!("Token rejected, clearing session");
            self.session.clear();
        }

        Err(Error::from_status(status, message))
    }
}

async fn extract_message(response: Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        for key in ["error", "message"] {
            if let Some(msg) = json.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string()
    } else {
        body
    }
}
