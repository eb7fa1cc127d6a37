#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the skill-gist binary with none of the
/// skill-gist environment variables inherited from the caller.
#[macro_export]
macro_rules! skill_gist {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("skill-gist"));
        for var in $crate::common::ENV_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }};
}

pub const ENV_VARS: [&str; 6] = [
    "LEETCODE_USERNAME",
    "IGNORED_SKILLS",
    "HIDE_DIFFICULTY",
    "GH_TOKEN",
    "GIST_ID",
    "CHART_WIDTH",
];

/// A saved stats response with tags in all three categories.
pub const SAMPLE_STATS: &str = r#"{
  "data": {
    "matchedUser": {
      "tagProblemCounts": {
        "advanced": [
          {"tagName": "Dynamic Programming", "problemsSolved": 30},
          {"tagName": "Backtracking", "problemsSolved": 12}
        ],
        "intermediate": [
          {"tagName": "Math", "problemsSolved": 25},
          {"tagName": "Array", "problemsSolved": 8}
        ],
        "fundamental": [
          {"tagName": "Array", "problemsSolved": 60},
          {"tagName": "String", "problemsSolved": 40},
          {"tagName": "Sorting", "problemsSolved": 15}
        ]
      }
    }
  }
}"#;

/// Two fundamental tags.
pub const SMALL_STATS: &str = r#"{"data":{"matchedUser":{"tagProblemCounts":{
  "advanced":[],
  "intermediate":[],
  "fundamental":[
    {"tagName":"Array","problemsSolved":50},
    {"tagName":"Hash Table","problemsSolved":10}
  ]
}}}}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a local `.skill-gist.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".skill-gist.toml", content);
    }

    /// Writes a saved stats response and returns its path as a string.
    pub fn create_stats(&self, content: &str) -> String {
        self.create_file("stats.json", content)
            .to_string_lossy()
            .into_owned()
    }
}
