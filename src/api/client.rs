use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use tracing::{debug, info};
use uuid::Uuid;

use super::types::PublishError;
use crate::vault::{FileRef, Vault};

/// Default CLI version (from Cargo.toml)
const DEFAULT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Form field carrying the file name
const FILE_NAME_FIELD: &str = "file_name";

/// Form field carrying the file content
const CONTENT_FIELD: &str = "content";

fn build_user_agent() -> String {
    format!("filepush/{}", DEFAULT_VERSION)
}

/// Pick the part type for the file content: text when it decodes as UTF-8.
fn content_mime(content: &[u8]) -> &'static str {
    if std::str::from_utf8(content).is_ok() {
        "text/plain; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

fn build_form(file_name: &str, content: Vec<u8>) -> Result<Form, PublishError> {
    let mime = content_mime(&content);
    let content = Part::bytes(content).mime_str(mime)?;

    Ok(Form::new()
        .text(FILE_NAME_FIELD, file_name.to_string())
        .part(CONTENT_FIELD, content))
}

/// HTTP client that pushes files to the publisher endpoint.
///
/// Exactly one attempt per publish, with the HTTP client's default (absent)
/// timeout.
pub struct PublishClient {
    client: Client,
}

impl PublishClient {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(build_user_agent())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// POST with the publish headers. The multipart body sets
    /// `Content-Type: multipart/form-data` together with its boundary.
    fn request(&self, url: &str, token: &str, request_id: &str) -> RequestBuilder {
        self.client
            .post(url)
            .header("Authorization", format!("Bearer {}", token))
            .header("x-request-id", request_id)
    }

    /// Publish one file.
    ///
    /// Steps run in order and the first failure ends the publish: check the
    /// reference, read the content, build the form, send, classify the status.
    /// On success the original file reference comes back.
    pub async fn publish_file<V: Vault>(
        &self,
        vault: &V,
        url: &str,
        token: &str,
        file: Option<&FileRef>,
    ) -> Result<FileRef, PublishError> {
        info!("Syncing file...");

        let file = file.ok_or(PublishError::NotFound)?;
        let content = vault.read(file).await?;
        debug!("Read {} bytes from {:?}", content.len(), file.path());

        let form = build_form(file.name(), content)?;
        let request_id = Uuid::new_v4().to_string();

        debug!("=== Publish Request ===");
        debug!("URL: {}", url);
        debug!("Request ID: {}", request_id);

        let response = self
            .request(url, token, &request_id)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        debug!("=== Publish Response ===");
        debug!("Status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PublishError::Response { status, body });
        }

        Ok(file.clone())
    }
}
