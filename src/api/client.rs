use crate::api::types::{ErrorBody, FileRecord, UploadCandidate, UploadReceipt};
use crate::config::ApiConfig;
use crate::error::{ListError, UploadError};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::{debug, info, warn};

/// The two calls the dashboard makes against the file processing API.
#[async_trait]
pub trait FilesApi: Send + Sync {
    async fn list_files(&self) -> Result<Vec<FileRecord>, ListError>;

    async fn upload(&self, candidate: UploadCandidate) -> Result<UploadReceipt, UploadError>;
}

#[derive(Clone)]
pub struct HttpFilesApi {
    client: Client,
    config: ApiConfig,
}

impl HttpFilesApi {
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl FilesApi for HttpFilesApi {
    async fn list_files(&self) -> Result<Vec<FileRecord>, ListError> {
        let url = self.config.files_url();
        debug!("Fetching file list from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ListError::Status(status));
        }

        Ok(response.json::<Vec<FileRecord>>().await?)
    }

    async fn upload(&self, candidate: UploadCandidate) -> Result<UploadReceipt, UploadError> {
        let url = self.config.upload_url();
        info!(
            "Uploading '{}' ({} bytes) to {}",
            candidate.file_name,
            candidate.len(),
            url
        );

        let part = Part::bytes(candidate.bytes).file_name(candidate.file_name);
        let form = Form::new().part("file", part);

        let mut request = self.client.post(&url).multipart(form);
        if let Some(timeout) = self.config.upload_timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let detail = ErrorBody::detail_from_bytes(&body);
            warn!("Upload rejected with status {}: {:?}", status, detail);
            return Err(UploadError::from_response(status, detail));
        }

        let body = response.bytes().await.unwrap_or_default();
        Ok(UploadReceipt::from_body(&body).unwrap_or_else(|e| {
            warn!("Upload succeeded with status {} but the body was not JSON: {}", status, e);
            UploadReceipt::default()
        }))
    }
}
