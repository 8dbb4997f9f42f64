use std::sync::Arc;
use std::time::Instant;

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::auth::TokenManager;
use crate::cache::AccessToken;
use crate::client::response::classify_status;
use crate::error::{RadeError, Result};
use crate::observability::metrics::get_metrics;
use crate::resilience::retry::RetrySettings;
use crate::services::kind::ServiceKind;
use crate::utils::constants::{APPLICANT_QUERY_KEY, APPLICANT_QUERY_VALUE};

static SUCCESS_MSG: &str = "success";

/// Per-call extras: headers merged over the defaults and an optional JSON body.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub json: Option<Value>,
}

impl RequestOptions {
    pub fn json(body: Value) -> Self {
        Self { headers: HeaderMap::new(), json: Some(body) }
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Authenticated gateway calls for one [`ServiceKind`].
pub struct RequestExecutor {
    kind: ServiceKind,
    client: Client,
    base_url: String,
    token_manager: Arc<TokenManager>,
    retry: RetrySettings,
}

impl RequestExecutor {
    pub fn new(kind: ServiceKind, client: Client, token_manager: Arc<TokenManager>) -> Self {
        let base_url = token_manager.credentials().base_url().to_owned();
        Self {
            kind,
            client,
            base_url,
            token_manager,
            retry: RetrySettings::default(),
        }
    }

    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Send `method` to `{base_url}{path}` with a bearer token and return the
    /// decoded JSON body. A 401 triggers one token refresh and one retry.
    pub async fn execute(&self, method: Method, path: &str, options: &RequestOptions) -> Result<Value> {
        let metrics = get_metrics().await;
        let start = Instant::now();

        let result = self.execute_with_retry(method, path, options).await;

        metrics
            .request_duration
            .with_label_values(&[self.kind.as_str()])
            .observe(start.elapsed().as_secs_f64());
        let outcome = match &result {
            Ok(_) => SUCCESS_MSG,
            Err(err) => {
                warn!(service = %self.kind, kind = err.kind(), error = %err, "gateway call failed");
                err.kind()
            }
        };
        metrics.requests.with_label_values(&[self.kind.as_str(), outcome]).inc();
        result
    }

    async fn execute_with_retry(&self, method: Method, path: &str, options: &RequestOptions) -> Result<Value> {
        let url = format!("{}{}?{}={}", self.base_url, path, APPLICANT_QUERY_KEY, APPLICANT_QUERY_VALUE);
        let mut attempt = 0;
        let mut token = self.token_manager.ensure_valid_token().await?;

        loop {
            let response = self.send(method.clone(), &url, options, &token).await?;
            let status = response.status();

            if self.retry.should_retry(status, attempt) {
                get_metrics().await.auth_retries.with_label_values(&[self.kind.as_str()]).inc();
                // the retry carries exactly the token this refresh issued
                token = self.token_manager.refresh_token().await?;
                attempt += 1;
                continue;
            }

            let body = response.text().await.map_err(|e| self.protocol(e))?;
            if !status.is_success() {
                return Err(classify_status(status, &body, self.kind.as_str()));
            }

            debug!(service = %self.kind, %status, "gateway call succeeded");
            return serde_json::from_str(&body).map_err(|e| self.protocol(e));
        }
    }

    async fn send(&self, method: Method, url: &str, options: &RequestOptions, token: &AccessToken) -> Result<Response> {
        info!(service = %self.kind, %method, "calling gateway");
        let mut request = self
            .client
            .request(method, url)
            .headers(self.headers(options, token)?);
        if let Some(body) = &options.json {
            request = request.json(body);
        }
        request.send().await.map_err(|e| self.protocol(e))
    }

    /// Defaults, then caller headers, then the bearer token, which always wins.
    fn headers(&self, options: &RequestOptions, token: &AccessToken) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.extend(options.headers.clone());

        let bearer = HeaderValue::from_str(&token.bearer()).map_err(|e| self.protocol(e))?;
        headers.insert(AUTHORIZATION, bearer);
        Ok(headers)
    }

    fn protocol(&self, err: impl ToString) -> RadeError {
        RadeError::protocol(self.kind.as_str(), err)
    }
}
