use eyre::{Result, eyre};
use std::env;

use crate::session::csrf_from_cookie_header;

/// Configuration for the booking client.
///
/// The base URL is the only required setting; everything else has the
/// defaults the backend ships with. Exactly one API root is used — the
/// historical `/api` vs `/api/v1` split is resolved here, not by probing.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. "https://salas.example.com"
    pub base_url: String,
    /// Path prefix for the REST surface (defaults to "/api")
    pub api_root: String,
    /// Where to send the user on 401/403 (defaults to "/login/")
    pub login_path: String,
    /// Name of the cookie carrying the CSRF token (defaults to "csrftoken")
    pub csrf_cookie: String,
    /// CSRF token for state-changing requests, if already known
    pub csrf_token: Option<String>,
    /// Request timeout in seconds (defaults to 30)
    pub request_timeout: u64,
}

const DEFAULT_API_ROOT: &str = "/api";
const DEFAULT_LOGIN_PATH: &str = "/login/";
const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

impl ClientConfig {
    /// A configuration with all defaults for the given backend origin.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_origin(base_url.into()),
            api_root: DEFAULT_API_ROOT.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            csrf_token: None,
            request_timeout: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `ROOMLY_BASE_URL` is required. The CSRF token may arrive directly
    /// via `ROOMLY_CSRF_TOKEN` or be extracted from a `ROOMLY_COOKIES`
    /// cookie-header string, in that order of preference.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// `from_env` passes the process environment; tests pass a closure
    /// over fixed values so nothing mutates shared state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("ROOMLY_BASE_URL")
            .ok_or_else(|| eyre!("ROOMLY_BASE_URL environment variable not set"))?;

        let api_root = lookup("ROOMLY_API_ROOT").unwrap_or_else(|| DEFAULT_API_ROOT.to_string());
        let login_path =
            lookup("ROOMLY_LOGIN_PATH").unwrap_or_else(|| DEFAULT_LOGIN_PATH.to_string());
        let csrf_cookie =
            lookup("ROOMLY_CSRF_COOKIE").unwrap_or_else(|| DEFAULT_CSRF_COOKIE.to_string());

        // A directly supplied token wins over one scanned from cookies.
        let csrf_token = lookup("ROOMLY_CSRF_TOKEN").or_else(|| {
            lookup("ROOMLY_COOKIES")
                .and_then(|cookies| csrf_from_cookie_header(&cookies, &csrf_cookie))
        });

        let request_timeout = lookup("ROOMLY_REQUEST_TIMEOUT_SECONDS")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Ok(Self {
            base_url: normalize_origin(base_url),
            api_root,
            login_path,
            csrf_cookie,
            csrf_token,
            request_timeout,
        })
    }

    pub fn with_csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// The login surface users are sent to on an auth failure.
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url, self.login_path)
    }

    /// Absolute URL for a path under the API root.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_root, path)
    }
}

fn normalize_origin(base_url: String) -> String {
    base_url.trim_end_matches('/').to_string()
}
