use std::time::{Duration, Instant};

use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{build_auth_header, ApiConfig, AuthScheme, SecureString};
use crate::model::{
    AnyRecord, Brand, Credentials, Profile, Record, RecordId, RecordKind, Records, Segment,
    Vehicle,
};

use super::endpoints;
use super::error::GatewayError;

/// Longest server error body carried into a `Status` error.
const MAX_ERROR_BODY: usize = 200;

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

/// Client for the records API.
///
/// Cheap to clone; clones share the underlying connection pool. The token is
/// per-clone, so a worker can hold its own copy and swap it on login/logout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    scheme: AuthScheme,
    timeout: Duration,
    token: Option<SecureString>,
}

impl ApiClient {
    pub fn new(api: &ApiConfig) -> Result<Self, GatewayError> {
        let timeout = Duration::from_secs(u64::from(api.timeout_seconds));
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(u64::from(api.connect_timeout_seconds)))
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: endpoints::parse_base(&api.base_url)?,
            scheme: api.auth_scheme(),
            timeout,
            token: None,
        })
    }

    pub fn with_token(mut self, token: Option<SecureString>) -> Self {
        self.token = token;
        self
    }

    pub fn set_token(&mut self, token: Option<SecureString>) {
        self.token = token;
    }

    pub fn has_token(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_empty())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Exchange credentials for a token. Does not store it on the client.
    pub async fn login(&self, credentials: &Credentials) -> Result<SecureString, GatewayError> {
        let body = to_body(endpoints::LOGIN, credentials)?;
        let response: TokenResponse = self
            .call(Method::POST, endpoints::LOGIN, Some(body), false)
            .await?;
        Ok(SecureString::new(response.token))
    }

    /// Create an account. The response body is ignored.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), GatewayError> {
        let body = to_body(endpoints::REGISTER, credentials)?;
        self.send(Method::POST, endpoints::REGISTER, Some(body), false)
            .await
            .map(|_| ())
    }

    pub async fn profile(&self) -> Result<Profile, GatewayError> {
        self.call(Method::GET, endpoints::PROFILE, None, true).await
    }

    pub async fn list<R: Record>(&self) -> Result<Vec<R>, GatewayError> {
        self.call(Method::GET, &endpoints::collection(R::KIND), None, true)
            .await
    }

    pub async fn create<R: Record>(&self, record: &R) -> Result<R, GatewayError> {
        let path = endpoints::collection(R::KIND);
        let body = to_body(&path, record)?;
        self.call(Method::POST, &path, Some(body), true).await
    }

    pub async fn update<R: Record>(&self, record: &R) -> Result<R, GatewayError> {
        if record.is_new() {
            return Err(GatewayError::UnsavedRecord { kind: R::KIND });
        }
        let path = endpoints::record(R::KIND, record.id());
        let body = to_body(&path, record)?;
        self.call(Method::PUT, &path, Some(body), true).await
    }

    pub async fn delete(&self, kind: RecordKind, id: RecordId) -> Result<(), GatewayError> {
        if id == 0 {
            return Err(GatewayError::UnsavedRecord { kind });
        }
        self.send(Method::DELETE, &endpoints::record(kind, id), None, true)
            .await
            .map(|_| ())
    }

    /// Fetch a whole collection when the kind is only known at runtime.
    pub async fn list_kind(&self, kind: RecordKind) -> Result<Records, GatewayError> {
        Ok(match kind {
            RecordKind::Segment => Records::Segments(self.list::<Segment>().await?),
            RecordKind::Brand => Records::Brands(self.list::<Brand>().await?),
            RecordKind::Vehicle => Records::Vehicles(self.list::<Vehicle>().await?),
        })
    }

    pub async fn create_any(&self, record: &AnyRecord) -> Result<AnyRecord, GatewayError> {
        Ok(match record {
            AnyRecord::Segment(r) => self.create(r).await?.into_any(),
            AnyRecord::Brand(r) => self.create(r).await?.into_any(),
            AnyRecord::Vehicle(r) => self.create(r).await?.into_any(),
        })
    }

    pub async fn update_any(&self, record: &AnyRecord) -> Result<AnyRecord, GatewayError> {
        Ok(match record {
            AnyRecord::Segment(r) => self.update(r).await?.into_any(),
            AnyRecord::Brand(r) => self.update(r).await?.into_any(),
            AnyRecord::Vehicle(r) => self.update(r).await?.into_any(),
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        authenticated: bool,
    ) -> Result<T, GatewayError> {
        let (url, text) = self.send(method, path, body, authenticated).await?;
        serde_json::from_str(&text).map_err(|source| GatewayError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Send one request and return the response body of a 2xx answer.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        authenticated: bool,
    ) -> Result<(Url, String), GatewayError> {
        let auth = if authenticated {
            Some(build_auth_header(self.scheme, self.token.as_ref()).ok_or(GatewayError::MissingToken)?)
        } else {
            None
        };

        let url = endpoints::join(&self.base_url, path)?;
        let request_id = uuid::Uuid::new_v4();
        let started = Instant::now();

        let mut builder = self.http.request(method.clone(), url.clone());
        if let Some((name, value)) = auth {
            builder = builder.header(name, value);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = self.transport_error(&url, e);
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error_type = err.error_type(),
                    "request failed: {}",
                    err
                );
                return Err(err);
            }
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| self.transport_error(&url, e))?;

        tracing::info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api request"
        );

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                message: error_message(&text, status.canonical_reason()),
            });
        }
        Ok((url, text))
    }

    fn transport_error(&self, url: &Url, source: reqwest::Error) -> GatewayError {
        if source.is_timeout() {
            GatewayError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            GatewayError::Connection {
                url: url.to_string(),
                source,
            }
        }
    }
}

fn to_body<T: serde::Serialize>(
    path: &str,
    value: &T,
) -> Result<serde_json::Value, GatewayError> {
    serde_json::to_value(value).map_err(|source| GatewayError::Encode {
        path: path.to_string(),
        source,
    })
}

/// Best human-readable message from an error body.
///
/// Django-style APIs answer `{"detail": "..."}` or a map of field errors;
/// anything else is passed through, shortened.
fn error_message(body: &str, reason: Option<&str>) -> String {
    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = map.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
        if let Some(first) = map
            .get("non_field_errors")
            .and_then(|v| v.as_array())
            .and_then(|v| v.first())
            .and_then(|v| v.as_str())
        {
            return first.to_string();
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return reason.unwrap_or("no response body").to_string();
    }
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
