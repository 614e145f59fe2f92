//! HTTP Connection Manager
//!
//! Implements ConnectionManager for Elasticsearch/OpenSearch over HTTP.
//! The probe is the engines' ping: `HEAD /` on the cluster endpoint.

use crate::domain::ports::{ConnectionManager, ConnectionProbe, ProbeError};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;

/// Basic auth credentials for the search cluster.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: Option<String>,
}

/// reqwest-backed connection manager.
///
/// One client is built up front and shared by every connection handed out,
/// so connection pooling stays with reqwest.
pub struct HttpConnectionManager {
    client: reqwest::Client,
    endpoint: String,
    credentials: Option<Credentials>,
}

impl HttpConnectionManager {
    /// Create a manager for `endpoint`, bounding each probe by `timeout`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()
            .map_err(|e| ProbeError::Protocol(format!("client error: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            credentials: None,
        })
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ConnectionManager for HttpConnectionManager {
    async fn connection(&self) -> Arc<dyn ConnectionProbe> {
        Arc::new(HttpConnection {
            client: self.client.clone(),
            url: format!("{}/", self.endpoint.trim_end_matches('/')),
            credentials: self.credentials.clone(),
        })
    }
}

/// A single ping-capable connection.
struct HttpConnection {
    client: reqwest::Client,
    url: String,
    credentials: Option<Credentials>,
}

#[async_trait]
impl ConnectionProbe for HttpConnection {
    async fn test_connection(&self) -> Result<bool, ProbeError> {
        let mut request = self.client.head(&self.url);
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, creds.password.as_ref());
        }

        let resp = request.send().await.map_err(classify_error)?;
        status_to_result(resp.status())
    }
}

fn classify_error(e: reqwest::Error) -> ProbeError {
    if e.is_timeout() {
        ProbeError::Timeout
    } else if e.is_connect() {
        ProbeError::Connect(e.to_string())
    } else {
        ProbeError::Protocol(e.to_string())
    }
}

fn status_to_result(status: StatusCode) -> Result<bool, ProbeError> {
    match status {
        s if s.is_success() => Ok(true),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            Err(ProbeError::Unauthorized(status.as_u16()))
        }
        _ => Ok(false),
    }
}
