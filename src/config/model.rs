use serde::{Deserialize, Deserializer};

use crate::error::{Result, SkillGistError};
use crate::output::{DEFAULT_WIDTH, MIN_WIDTH};
use crate::stats::IgnoreSet;

use super::{ENV_GH_TOKEN, ENV_GIST_ID, ENV_LEETCODE_USERNAME};

/// One layer of configuration as read from a file, the environment, or the
/// command line. Every field is optional; empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    pub leetcode_username: Option<String>,
    pub ignored_skills: Option<String>,
    #[serde(default, deserialize_with = "bool_or_string")]
    pub hide_difficulty: Option<String>,
    pub gh_token: Option<String>,
    pub gist_id: Option<String>,
    pub width: Option<usize>,
}

/// Accepts `hide_difficulty = true` as well as `hide_difficulty = "t"`.
fn bool_or_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(Option::<Flag>::deserialize(deserializer)?.map(|flag| match flag {
        Flag::Bool(b) => b.to_string(),
        Flag::Text(s) => s,
    }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl RawConfig {
    /// Layers `higher` on top of `self`: any value set in `higher` wins.
    #[must_use]
    pub fn merge(self, higher: Self) -> Self {
        Self {
            leetcode_username: non_empty(higher.leetcode_username)
                .or_else(|| non_empty(self.leetcode_username)),
            ignored_skills: non_empty(higher.ignored_skills)
                .or_else(|| non_empty(self.ignored_skills)),
            hide_difficulty: non_empty(higher.hide_difficulty)
                .or_else(|| non_empty(self.hide_difficulty)),
            gh_token: non_empty(higher.gh_token).or_else(|| non_empty(self.gh_token)),
            gist_id: non_empty(higher.gist_id).or_else(|| non_empty(self.gist_id)),
            width: higher.width.or(self.width),
        }
    }

    /// Names of required values that are missing, in reporting order.
    #[must_use]
    pub fn missing(&self, dry_run: bool) -> Vec<String> {
        let mut required = Vec::new();
        if !dry_run {
            required.push((ENV_GH_TOKEN, &self.gh_token));
            required.push((ENV_GIST_ID, &self.gist_id));
        }
        required.push((ENV_LEETCODE_USERNAME, &self.leetcode_username));

        required
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Checks required values and builds the run settings.
    ///
    /// In a dry run the publish credentials are not required.
    ///
    /// # Errors
    /// Returns [`SkillGistError::MissingConfig`] naming every missing value, or
    /// [`SkillGistError::Config`] for a width below [`MIN_WIDTH`].
    pub fn resolve(self, dry_run: bool) -> Result<Settings> {
        let missing = self.missing(dry_run);
        if !missing.is_empty() {
            return Err(SkillGistError::MissingConfig { names: missing });
        }

        let width = self.width.unwrap_or(DEFAULT_WIDTH);
        if width < MIN_WIDTH {
            return Err(SkillGistError::Config(format!(
                "chart width must be at least {MIN_WIDTH}, got {width}"
            )));
        }

        let publish = match (non_empty(self.gh_token), non_empty(self.gist_id)) {
            (Some(token), Some(gist_id)) if !dry_run => Some(PublishTarget { token, gist_id }),
            _ => None,
        };

        Ok(Settings {
            username: self.leetcode_username.unwrap_or_default(),
            ignore: IgnoreSet::parse(self.ignored_skills.as_deref()),
            hide_category: parse_flag(self.hide_difficulty.as_deref()),
            width,
            publish,
        })
    }
}

/// Interprets a boolean-like setting: `true`, `1` and `t` (any case) are true,
/// everything else, including absence, is false.
#[must_use]
pub fn parse_flag(value: Option<&str>) -> bool {
    value.is_some_and(|v| {
        let v = v.to_ascii_lowercase();
        matches!(v.as_str(), "true" | "1" | "t")
    })
}

/// Where the chart is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishTarget {
    pub token: String,
    pub gist_id: String,
}

/// Validated settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub username: String,
    pub ignore: IgnoreSet,
    pub hide_category: bool,
    pub width: usize,
    /// `None` in a dry run.
    pub publish: Option<PublishTarget>,
}

impl Settings {
    /// Identifier handed to the publish sink: the gist id, or `-` for stdout.
    #[must_use]
    pub fn target(&self) -> &str {
        self.publish.as_ref().map_or("-", |p| p.gist_id.as_str())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
