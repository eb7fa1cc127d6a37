use std::time::Duration;

use crate::error::{Result, SkillGistError};

const REQUEST_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("skill-gist/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

/// A request as seen by [`HttpClient`]: method, URL, headers and an optional
/// JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
    pub bearer_token: Option<String>,
    pub body: Option<String>,
}

impl HttpRequest {
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            bearer_token: None,
            body: None,
        }
    }

    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::Post, url)
    }

    #[must_use]
    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::Patch, url)
    }

    #[must_use]
    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Attaches a JSON body and the matching content type.
    #[must_use]
    pub fn json(self, body: &serde_json::Value) -> Self {
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(body.to_string());
        request
    }
}

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Sends the request and returns the body of a 2xx response.
    ///
    /// # Errors
    /// Returns an error on connection failure, timeout, or a non-2xx status.
    fn send(&self, request: &HttpRequest) -> Result<String>;
}

impl<C: HttpClient + ?Sized> HttpClient for &C {
    fn send(&self, request: &HttpRequest) -> Result<String> {
        (**self).send(request)
    }
}

/// Production HTTP client using blocking reqwest.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug, Default)]
pub struct ReqwestClient;

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn send(&self, request: &HttpRequest) -> Result<String> {
        let url = request.url.as_str();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| SkillGistError::Http(format!("Failed to create HTTP client: {e}")))?;

        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        };
        let mut builder = client.request(method, url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().map_err(|e| {
            if e.is_timeout() {
                SkillGistError::Http(format!("Request timeout: {url}"))
            } else if e.is_connect() {
                SkillGistError::Http(format!("Failed to connect to {url}"))
            } else {
                SkillGistError::Http(format!("Request to {url} failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkillGistError::Http(format!(
                "{} {url}: HTTP {status}",
                request.method.as_str()
            )));
        }

        response
            .text()
            .map_err(|e| SkillGistError::Http(format!("Failed to read response from {url}: {e}")))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
