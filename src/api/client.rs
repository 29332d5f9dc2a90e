use super::types::*;
use crate::{Error, Result, config::ServerConfig, page::SelectedFile};
use async_trait::async_trait;
use reqwest::{
    Response,
    header::{HeaderMap, HeaderName, HeaderValue},
    multipart,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// The two endpoints of the document service.
#[async_trait]
pub trait DocumentApi: Send + Sync {
    async fn upload(&self, file: SelectedFile) -> Result<UploadResponse>;

    async fn ask(&self, question: &str) -> Result<AskResponse>;
}

pub struct HttpDocumentApi {
    client: reqwest::Client,
    upload_url: String,
    ask_url: String,
}

impl HttpDocumentApi {
    pub fn new(config: ServerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            headers.insert(
                HeaderName::from_bytes(key.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let base_url = config.base_url.trim_end_matches('/');

        debug!("Creating document API client for: {}", base_url);

        Ok(Self {
            client,
            upload_url: format!("{}{}", base_url, config.upload_path),
            ask_url: format!("{}{}", base_url, config.ask_path),
        })
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }

    pub fn ask_url(&self) -> &str {
        &self.ask_url
    }
}

/// Decodes a JSON body whatever the status code; the service reports
/// rejections in the same shape as successes.
async fn decode_body<T: DeserializeOwned>(response: Response, endpoint: &str) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        warn!("{} responded with status {}", endpoint, status);
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        Error::malformed(format!(
            "Failed to parse {} response ({}): {}",
            endpoint, status, e
        ))
    })
}

#[async_trait]
impl DocumentApi for HttpDocumentApi {
    async fn upload(&self, file: SelectedFile) -> Result<UploadResponse> {
        debug!(
            "Uploading {} ({} bytes) to {}",
            file.file_name,
            file.bytes.len(),
            self.upload_url
        );

        let mime = file.mime_type();
        let part = multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(mime)?;
        let form = multipart::Form::new().part(UPLOAD_FIELD, part);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        decode_body(response, "upload").await
    }

    async fn ask(&self, question: &str) -> Result<AskResponse> {
        debug!("Asking {}: {}", self.ask_url, question);

        let request = AskRequest {
            question: question.to_string(),
        };

        let response = self
            .client
            .post(&self.ask_url)
            .json(&request)
            .send()
            .await?;

        decode_body(response, "ask").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn create_test_config() -> ServerConfig {
        ServerConfig {
            base_url: "http://localhost:5000/".to_string(),
            upload_path: "/upload".to_string(),
            ask_path: "/ask".to_string(),
            headers: HashMap::new(),
        }
    }

    #[test]
    fn test_urls_join_without_double_slash() {
        let api = HttpDocumentApi::new(create_test_config()).unwrap();
        assert_eq!(api.upload_url(), "http://localhost:5000/upload");
        assert_eq!(api.ask_url(), "http://localhost:5000/ask");
    }

    #[test]
    fn test_invalid_header_name_is_rejected() {
        let mut config = create_test_config();
        config
            .headers
            .insert("bad header".to_string(), "value".to_string());

        assert!(matches!(
            HttpDocumentApi::new(config),
            Err(Error::HeaderName(_))
        ));
    }
}
