//! Resolution of graphic identifiers to public asset URLs.

use std::path::{Component, Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetRef {
    Found(String),
    Missing,
}

#[derive(Clone, Debug)]
pub struct AssetResolver {
    base_url: String,
    static_root: Option<PathBuf>,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new("/")
    }
}

impl AssetResolver {
    /// `base_url` is expected to start and end with `/`, see
    /// [`crate::config::normalize_base_url`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            static_root: None,
        }
    }

    /// Only identifiers naming an existing file under `dir` resolve.
    pub fn with_static_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_root = Some(dir.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resolve(&self, id: &str) -> AssetRef {
        let id = id.trim();
        if !is_safe_relative(id) {
            return AssetRef::Missing;
        }

        if let Some(root) = &self.static_root {
            if !root.join(id).is_file() {
                return AssetRef::Missing;
            }
        }

        AssetRef::Found(format!("{}static/{}", self.base_url, id))
    }
}

fn is_safe_relative(id: &str) -> bool {
    if id.is_empty() || id.starts_with('/') || id.contains('\\') {
        return false;
    }
    Path::new(id)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}
