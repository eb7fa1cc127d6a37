mod filesystem;
mod loader;
mod model;

#[cfg(test)]
pub(crate) mod mock;

pub use filesystem::{Environment, FileSystem, ProcessEnvironment, RealFileSystem};
pub use loader::{ConfigLoader, LOCAL_CONFIG_NAME, USER_CONFIG_NAME};
pub use model::{PublishTarget, RawConfig, Settings, parse_flag};

pub const ENV_LEETCODE_USERNAME: &str = "LEETCODE_USERNAME";
pub const ENV_IGNORED_SKILLS: &str = "IGNORED_SKILLS";
pub const ENV_HIDE_DIFFICULTY: &str = "HIDE_DIFFICULTY";
/// Token with the `gist` scope.
pub const ENV_GH_TOKEN: &str = "GH_TOKEN";
/// The id part of the gist URL.
pub const ENV_GIST_ID: &str = "GIST_ID";
pub const ENV_CHART_WIDTH: &str = "CHART_WIDTH";
