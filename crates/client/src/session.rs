use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, header};
use roomly_core::errors::{ApiError, ApiResult};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;

/// Header carrying the anti-forgery token on state-changing requests.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// The client-session context for one run's worth of work.
///
/// One HTTP client, the configuration and the CSRF token, captured at
/// construction. Callers receive it explicitly; there is no module-level
/// shared state.
pub struct Session {
    http: Client,
    config: ClientConfig,
}

impl Session {
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(transport)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The login surface to navigate to after an `AuthRequired` failure.
    pub fn login_url(&self) -> String {
        self.config.login_url()
    }

    /// Builds a request against the API root with the shared headers.
    ///
    /// The CSRF token rides along whenever it is known; the backend only
    /// checks it on state-changing methods but tolerates it elsewhere.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, self.config.endpoint(path))
            .header(header::ACCEPT, "application/json");
        if let Some(token) = &self.config.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        request
    }

    /// Sends a request and decodes a JSON body.
    ///
    /// 401/403 map to `AuthRequired`, any other non-2xx to `Http`, and an
    /// undecodable body to `Parse`. Nothing is retried here.
    pub(crate) async fn send_json<T>(&self, request: RequestBuilder) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(login = %self.login_url(), "access denied by backend");
            return Err(ApiError::AuthRequired);
        }
        if let Some(err) = ApiError::from_status(status.as_u16()) {
            return Err(err);
        }

        let body = response.text().await.map_err(transport)?;
        debug!(%status, bytes = body.len(), "decoding response body");
        Ok(serde_json::from_str(&body)?)
    }

    /// Sends a request where any response at all counts as success.
    ///
    /// Deletes follow this contract: only a network-level failure is
    /// reported, the status code is ignored.
    pub(crate) async fn send_expect_any(&self, request: RequestBuilder) -> ApiResult<()> {
        let response = request.send().await.map_err(transport)?;
        debug!(status = %response.status(), "response status ignored for this endpoint");
        Ok(())
    }
}

pub(crate) fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(Box::new(err))
}

/// Pulls the named cookie's value out of a `Cookie`-header string,
/// percent-decoding it on the way out.
pub fn csrf_from_cookie_header(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').map(str::trim).find_map(|cookie| {
        let (key, value) = cookie.split_once('=')?;
        if key != name {
            return None;
        }
        urlencoding::decode(value).ok().map(|token| token.into_owned())
    })
}
