use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use tracing::{info, instrument};

use crate::dto::file_dto::UploadResponse;
use crate::error::Result;
use crate::http::ApiClient;

#[derive(Clone)]
pub struct FileService {
    api: ApiClient,
}

impl FileService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Uploads a resume as multipart form data and returns the stored URL,
    /// ready to attach to an application payload.
    #[instrument(skip(self, content), fields(file_name = %file_name, bytes = content.len()))]
    pub async fn upload_resume(&self, file_name: &str, content: Bytes) -> Result<UploadResponse> {
        let part = Part::stream(content).file_name(file_name.to_string());
        let form = Form::new().part("file", part);

        let uploaded: UploadResponse = self.api.post_multipart("/files/upload", form).await?;
        info!(url = %uploaded.url, "Uploaded resume");
        Ok(uploaded)
    }
}
