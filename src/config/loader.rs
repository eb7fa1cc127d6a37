use std::path::{Path, PathBuf};

use crate::error::{Result, SkillGistError};

use super::filesystem::{Environment, FileSystem, ProcessEnvironment, RealFileSystem};
use super::model::RawConfig;
use super::{
    ENV_CHART_WIDTH, ENV_GH_TOKEN, ENV_GIST_ID, ENV_HIDE_DIFFICULTY, ENV_IGNORED_SKILLS,
    ENV_LEETCODE_USERNAME,
};

pub const LOCAL_CONFIG_NAME: &str = ".skill-gist.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Loads the file and environment layers of the configuration.
///
/// File search order:
/// 1. the explicit `--config` path (must exist)
/// 2. `.skill-gist.toml` in the current directory
/// 3. `config.toml` in the platform user config directory
/// 4. nothing: an empty layer
///
/// Environment variables override file values.
#[derive(Debug)]
pub struct ConfigLoader<F = RealFileSystem, E = ProcessEnvironment> {
    fs: F,
    env: E,
}

impl ConfigLoader {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fs: RealFileSystem,
            env: ProcessEnvironment,
        }
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem, E: Environment> ConfigLoader<F, E> {
    pub const fn with_sources(fs: F, env: E) -> Self {
        Self { fs, env }
    }

    /// Loads the file layer (unless `no_config`) and layers the environment on top.
    ///
    /// # Errors
    /// Returns an error if a config file cannot be read or parsed, or if an
    /// environment value is malformed.
    pub fn load(&self, explicit: Option<&Path>, no_config: bool) -> Result<RawConfig> {
        let file_layer = if no_config {
            RawConfig::default()
        } else {
            self.load_file(explicit)?
        };
        Ok(file_layer.merge(self.load_env()?))
    }

    /// The path of the config file that would be read, if any.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn discover(&self) -> Result<Option<PathBuf>> {
        let local = self.fs.current_dir()?.join(LOCAL_CONFIG_NAME);
        if self.fs.exists(&local) {
            return Ok(Some(local));
        }
        Ok(self
            .fs
            .config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME))
            .filter(|path| self.fs.exists(path)))
    }

    fn load_file(&self, explicit: Option<&Path>) -> Result<RawConfig> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match self.discover()? {
                Some(path) => path,
                None => return Ok(RawConfig::default()),
            },
        };
        self.load_from_path(&path)
    }

    /// Reads and parses one TOML config file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| SkillGistError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(toml::from_str(&content)?)
    }

    /// Reads the environment layer.
    ///
    /// # Errors
    /// Returns an error if `CHART_WIDTH` is set but is not a number.
    pub fn load_env(&self) -> Result<RawConfig> {
        let width = match self.env.var(ENV_CHART_WIDTH).filter(|v| !v.is_empty()) {
            Some(raw) => Some(raw.trim().parse::<usize>().map_err(|_| {
                SkillGistError::Config(format!(
                    "{ENV_CHART_WIDTH} must be a positive integer, got '{raw}'"
                ))
            })?),
            None => None,
        };

        Ok(RawConfig {
            leetcode_username: self.env.var(ENV_LEETCODE_USERNAME),
            ignored_skills: self.env.var(ENV_IGNORED_SKILLS),
            hide_difficulty: self.env.var(ENV_HIDE_DIFFICULTY),
            gh_token: self.env.var(ENV_GH_TOKEN),
            gist_id: self.env.var(ENV_GIST_ID),
            width,
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
