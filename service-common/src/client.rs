//! A typed GET helper shared by every sibling-service client.
use std::sync::Arc;
use std::time;

use http::StatusCode;
use reqwest::header;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::discovery::ServiceResolver;
use crate::error::{ClientError, TemplateError};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A request path with a single `{placeholder}` segment, e.g. `/api/residents/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    segments: Vec<Segment>,
}

impl PathTemplate {
    pub fn new(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();

        for segment in template.split('/').filter(|s| !s.is_empty()) {
            let is_placeholder = segment.len() > 2
                && segment.starts_with('{')
                && segment.ends_with('}')
                && !segment[1..segment.len() - 1].contains(['{', '}']);

            if is_placeholder {
                segments.push(Segment::Placeholder(
                    segment[1..segment.len() - 1].to_owned(),
                ));
            } else if segment.contains(['{', '}']) {
                return Err(TemplateError::MalformedPlaceholder(template.to_owned()));
            } else {
                segments.push(Segment::Literal(segment.to_owned()));
            }
        }

        let placeholders = segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder(_)))
            .count();
        if placeholders != 1 {
            return Err(TemplateError::PlaceholderCount(template.to_owned()));
        }

        Ok(Self { segments })
    }

    /// Name of the placeholder, without braces.
    pub fn placeholder(&self) -> &str {
        self.segments
            .iter()
            .find_map(|s| match s {
                Segment::Placeholder(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .unwrap_or_default()
    }

    /// Append this template to `base`, substituting `id` as one percent-encoded path segment.
    /// Any path prefix already present on `base` is kept.
    pub fn expand(&self, base: &Url, id: &str) -> Result<Url, ClientError> {
        // `.` and `..` would be dropped by path normalization and address the collection.
        if id.is_empty() || id == "." || id == ".." {
            return Err(ClientError::InvalidId);
        }

        let mut url = base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| ClientError::InvalidUrl(base.to_string()))?;
            path.pop_if_empty();
            for segment in &self.segments {
                match segment {
                    Segment::Literal(literal) => path.push(literal),
                    Segment::Placeholder(_) => path.push(id),
                };
            }
        }

        Ok(url)
    }
}

/// Client for one logical sibling service. Every call resolves the service address,
/// sends a single GET and decodes the JSON body. Nothing is retried or cached.
#[derive(Clone)]
pub struct ServiceClient {
    /// The logical name the resolver knows this service by.
    service: String,
    resolver: Arc<dyn ServiceResolver + Send + Sync>,
    http_client: reqwest::Client,
}

impl ServiceClient {
    pub fn new(
        service: &str,
        resolver: Arc<dyn ServiceResolver + Send + Sync>,
        request_timeout: time::Duration,
    ) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent("Community Service Client")
            .timeout(request_timeout)
            .build()
            .expect("failed to construct reqwest client for service client");

        Self {
            service: service.to_owned(),
            resolver,
            http_client,
        }
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    /// Fetch the record at `template` expanded with `id`.
    #[instrument(skip(self, template), fields(service = %self.service))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        template: &PathTemplate,
        id: &str,
    ) -> Result<T, ClientError> {
        let labels = [("service", self.service.clone())];
        metrics::counter!("service_client_requests_total", &labels).increment(1);

        let now = time::Instant::now();
        let result = self.fetch(template, id).await;
        metrics::histogram!("service_client_request_duration_seconds", &labels)
            .record(now.elapsed().as_secs_f64());

        if let Err(error) = &result {
            let labels = [
                ("service", self.service.clone()),
                ("kind", error.kind().to_owned()),
            ];
            metrics::counter!("service_client_request_errors_total", &labels).increment(1);
            warn!("lookup failed: {}", error);
        }

        result
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        template: &PathTemplate,
        id: &str,
    ) -> Result<T, ClientError> {
        let base = self.resolver.resolve(&self.service).await?;
        let url = template.expand(&base, id)?;

        debug!("sending GET {}", url);

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|source| ClientError::ConnectionFailure {
                service: self.service.clone(),
                source,
            })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                service: self.service.clone(),
                id: id.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                service: self.service.clone(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::ConnectionFailure {
                service: self.service.clone(),
                source,
            })?;

        let record = serde_json::from_slice(&body).map_err(|source| ClientError::DecodeFailure {
            service: self.service.clone(),
            source,
        })?;

        debug!("decoded {} byte response", body.len());

        Ok(record)
    }
}
