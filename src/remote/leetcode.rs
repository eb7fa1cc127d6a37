//! LeetCode GraphQL stats provider.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SkillGistError};
use crate::stats::{CategorizedCounts, Category, TagCount};

use super::{HttpClient, HttpRequest};

pub const LEETCODE_GRAPHQL_URL: &str = "https://leetcode.com/graphql";

const SKILLS_QUERY: &str = "
query Skills($username: String!) {
  matchedUser(username: $username) {
    tagProblemCounts {
      advanced { tagName problemsSolved }
      intermediate { tagName problemsSolved }
      fundamental { tagName problemsSolved }
    }
  }
}
";

/// Source of per-tag solved counts for a user.
pub trait StatsProvider {
    /// Fetches the categorized tag counts for `username`.
    ///
    /// # Errors
    /// Returns [`SkillGistError::Fetch`] when the user is unknown or the
    /// response is incomplete, and transport errors as they occur.
    fn fetch(&self, username: &str) -> Result<CategorizedCounts>;
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseData {
    matched_user: Option<MatchedUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MatchedUser {
    tag_problem_counts: TagProblemCounts,
}

#[derive(Debug, Deserialize)]
struct TagProblemCounts {
    advanced: Vec<TagRecord>,
    intermediate: Vec<TagRecord>,
    fundamental: Vec<TagRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TagRecord {
    tag_name: String,
    problems_solved: u64,
}

impl From<TagProblemCounts> for CategorizedCounts {
    fn from(counts: TagProblemCounts) -> Self {
        let convert = |records: Vec<TagRecord>| {
            records
                .into_iter()
                .map(|r| TagCount::new(r.tag_name, r.problems_solved))
                .collect()
        };
        Self::new()
            .with(Category::Advanced, convert(counts.advanced))
            .with(Category::Intermediate, convert(counts.intermediate))
            .with(Category::Fundamental, convert(counts.fundamental))
    }
}

/// Parses a `tagProblemCounts` GraphQL response body.
///
/// # Errors
/// Returns [`SkillGistError::Fetch`] for malformed JSON, GraphQL errors, a
/// missing bucket, or a null `matchedUser`.
pub fn parse_stats_response(body: &str) -> Result<CategorizedCounts> {
    let response: GraphQlResponse = serde_json::from_str(body)
        .map_err(|e| SkillGistError::Fetch(format!("malformed stats response: {e}")))?;

    if !response.errors.is_empty() {
        let messages: Vec<_> = response.errors.into_iter().map(|e| e.message).collect();
        return Err(SkillGistError::Fetch(messages.join("; ")));
    }

    response
        .data
        .and_then(|data| data.matched_user)
        .map(|user| user.tag_problem_counts.into())
        .ok_or_else(|| SkillGistError::Fetch("no matching user in stats response".to_string()))
}

/// Queries the LeetCode GraphQL endpoint.
pub struct LeetCodeProvider<C> {
    client: C,
    endpoint: String,
}

impl<C: HttpClient> LeetCodeProvider<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            endpoint: LEETCODE_GRAPHQL_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request(&self, username: &str) -> HttpRequest {
        HttpRequest::post(&self.endpoint)
            .header("Referer", "https://leetcode.com")
            .json(&json!({
                "query": SKILLS_QUERY,
                "variables": { "username": username },
            }))
    }
}

impl<C: HttpClient> StatsProvider for LeetCodeProvider<C> {
    fn fetch(&self, username: &str) -> Result<CategorizedCounts> {
        let body = self
            .client
            .send(&self.request(username))
            .map_err(|e| SkillGistError::Fetch(e.message()))?;
        parse_stats_response(&body)
    }
}

/// Reads a saved GraphQL response from disk instead of querying the network.
#[derive(Debug, Clone)]
pub struct FileStatsProvider {
    path: PathBuf,
}

impl FileStatsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsProvider for FileStatsProvider {
    fn fetch(&self, _username: &str) -> Result<CategorizedCounts> {
        let body = std::fs::read_to_string(&self.path).map_err(|source| SkillGistError::FileRead {
            path: self.path.clone(),
            source,
        })?;
        parse_stats_response(&body)
    }
}

#[cfg(test)]
#[path = "leetcode_tests.rs"]
mod tests;
