//! Publish sinks: the GitHub gist the chart lives in, and stdout for dry runs.

use std::io::Write;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SkillGistError};

use super::{HttpClient, HttpRequest};

pub const GITHUB_API_URL: &str = "https://api.github.com";

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Destination that receives the rendered chart.
pub trait PublishSink {
    /// Replaces the whole content at `target` with `payload`.
    ///
    /// # Errors
    /// Returns [`SkillGistError::Publish`] if the content could not be written.
    fn publish(&self, target: &str, payload: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
struct GistResponse {
    files: IndexMap<String, serde_json::Value>,
}

/// Overwrites the first file of a GitHub gist.
pub struct GistSink<C> {
    client: C,
    token: String,
    api_base: String,
}

impl<C: HttpClient> GistSink<C> {
    pub fn new(client: C, token: impl Into<String>) -> Self {
        Self {
            client,
            token: token.into(),
            api_base: GITHUB_API_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn gist_url(&self, gist_id: &str) -> String {
        format!("{}/gists/{gist_id}", self.api_base.trim_end_matches('/'))
    }

    fn send(&self, request: HttpRequest) -> Result<String> {
        let request = request
            .header("Accept", GITHUB_ACCEPT)
            .bearer(self.token.as_str());
        self.client
            .send(&request)
            .map_err(|e| SkillGistError::Publish(e.message()))
    }

    /// Name of the gist's first file, in the order GitHub lists them.
    fn first_file_name(&self, gist_id: &str) -> Result<String> {
        let body = self.send(HttpRequest::get(self.gist_url(gist_id)))?;
        let gist: GistResponse = serde_json::from_str(&body)
            .map_err(|e| SkillGistError::Publish(format!("malformed gist response: {e}")))?;
        gist.files
            .into_keys()
            .next()
            .ok_or_else(|| SkillGistError::Publish(format!("gist {gist_id} has no files")))
    }
}

impl<C: HttpClient> PublishSink for GistSink<C> {
    /// Overwrites the first file and resets the gist description to its name.
    fn publish(&self, target: &str, payload: &str) -> Result<()> {
        let file_name = self.first_file_name(target)?;
        let mut files = serde_json::Map::new();
        files.insert(file_name.clone(), json!({ "content": payload }));
        let body = json!({ "description": file_name, "files": files });
        self.send(HttpRequest::patch(self.gist_url(target)).json(&body))?;
        Ok(())
    }
}

/// Writes the chart to stdout instead of publishing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl PublishSink for StdoutSink {
    fn publish(&self, _target: &str, payload: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(payload.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "gist_tests.rs"]
mod tests;
