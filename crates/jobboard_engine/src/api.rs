use std::sync::Arc;
use std::time::Duration;

use futures_util::StreamExt;
use jobboard_core::{Job, JobPage, DEFAULT_PAGE_SIZE};
use jobboard_logging::{board_debug, board_warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{FailureKind, FetchError};

pub const DEFAULT_BASE_URL: &str = "https://www.coople.com/ch/resources/api/";

const LIST_PATH: &str = "work-assignments/public-jobs/list";
const DETAILS_PATH: &str = "work-assignments/public-jobs/";
const ENVELOPE_OK: i64 = 200;

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub page_size: u32,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "application/json".to_string(),
                "text/json".to_string(),
            ],
        }
    }
}

/// Read-only access to the remote job listing.
#[async_trait::async_trait]
pub trait JobSource: Send + Sync {
    /// Fetches page `page_num` (zero-based) of `page_size` jobs.
    async fn fetch_page(&self, page_num: u32, page_size: u32) -> Result<JobPage, FetchError>;

    /// Fetches one job; `Ok(None)` when the service does not know the id.
    async fn fetch_details(&self, id: &str) -> Result<Option<Job>, FetchError>;
}

#[async_trait::async_trait]
impl<T: JobSource + ?Sized> JobSource for Arc<T> {
    async fn fetch_page(&self, page_num: u32, page_size: u32) -> Result<JobPage, FetchError> {
        (**self).fetch_page(page_num, page_size).await
    }

    async fn fetch_details(&self, id: &str) -> Result<Option<Job>, FetchError> {
        (**self).fetch_details(id).await
    }
}

/// Response wrapper used by every endpoint of the listing service.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    status: i64,
    data: Option<T>,
}

#[derive(Debug, Clone)]
pub struct HttpJobSource {
    settings: ApiSettings,
    base_url: Url,
    client: reqwest::Client,
}

impl HttpJobSource {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            base_url,
            client,
        })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    fn list_url(&self, page_num: u32, page_size: u32) -> Result<Url, FetchError> {
        let mut url = self
            .base_url
            .join(LIST_PATH)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.query_pairs_mut()
            .append_pair("pageNum", &page_num.to_string())
            .append_pair("pageSize", &page_size.to_string());
        Ok(url)
    }

    fn details_url(&self, id: &str) -> Result<Url, FetchError> {
        if id.trim().is_empty() {
            return Err(FetchError::new(FailureKind::InvalidUrl, "empty job id"));
        }
        let mut url = self
            .base_url
            .join(DETAILS_PATH)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| FetchError::new(FailureKind::InvalidUrl, "base url cannot have a path"))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    /// GETs `url` and returns the body, enforcing status, content type and size limits.
    async fn get_body(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        board_debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }

    async fn load_page(&self, page_num: u32, page_size: u32) -> Result<JobPage, FetchError> {
        let url = self.list_url(page_num, page_size)?;
        let bytes = self.get_body(url).await?;
        match decode::<Envelope<JobPage>>(&bytes)? {
            Envelope {
                status: ENVELOPE_OK,
                data: Some(page),
            } => Ok(page),
            Envelope { status, .. } => Err(FetchError::new(
                FailureKind::MalformedPayload,
                format!("listing answered with status {status} and no data"),
            )),
        }
    }
}

#[async_trait::async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_page(&self, page_num: u32, page_size: u32) -> Result<JobPage, FetchError> {
        let result = self.load_page(page_num, page_size).await;

        match &result {
            Ok(page) => board_debug!(
                "Fetched page {} ({} items, total {})",
                page_num,
                page.items.len(),
                page.total
            ),
            Err(err) => board_warn!("Failed to fetch page {}: {}", page_num, err),
        }
        result
    }

    async fn fetch_details(&self, id: &str) -> Result<Option<Job>, FetchError> {
        let url = self.details_url(id)?;
        let bytes = match self.get_body(url).await {
            Ok(bytes) => bytes,
            Err(FetchError {
                kind: FailureKind::HttpStatus(code),
                ..
            }) if code == StatusCode::NOT_FOUND.as_u16() => {
                board_debug!("Job {} not found", id);
                return Ok(None);
            }
            Err(err) => {
                board_warn!("Failed to fetch job {}: {}", id, err);
                return Err(err);
            }
        };

        let envelope: Envelope<Job> = decode(&bytes).inspect_err(|err| {
            board_warn!("Failed to decode job {}: {}", id, err);
        })?;
        if envelope.status != ENVELOPE_OK {
            board_debug!("Job {} answered with status {}", id, envelope.status);
            return Ok(None);
        }
        Ok(envelope.data)
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, FetchError> {
    serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))
}

fn parse_base_url(raw: &str) -> Result<Url, FetchError> {
    // `Url::join` replaces the last segment unless the base ends with a slash.
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&normalized)
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(FetchError::new(
            FailureKind::InvalidUrl,
            format!("{raw} cannot be used as a base url"),
        ));
    }
    Ok(url)
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
