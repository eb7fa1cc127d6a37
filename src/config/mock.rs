//! In-memory filesystem and environment for config tests.

use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::{Environment, FileSystem};

pub struct MockFileSystem {
    files: HashMap<String, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

pub fn key(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/skill-gist")),
        }
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    pub fn without_config_dir(mut self) -> Self {
        self.config_dir = None;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(&key(path))
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(&key(path))
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[derive(Default)]
pub struct MockEnvironment {
    vars: HashMap<&'static str, String>,
}

impl MockEnvironment {
    pub fn with(mut self, key: &'static str, value: &str) -> Self {
        self.vars.insert(key, value.to_string());
        self
    }
}

impl Environment for MockEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
