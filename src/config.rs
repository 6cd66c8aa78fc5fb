use std::path::PathBuf;

use crate::assets::AssetResolver;
use crate::common::ConfigError;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STATIC_DIR: &str = "./static";

/// Site settings, read from the environment (and `.env` via `dotenvy`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// `host:port`; hostnames are resolved by the server when binding.
    pub bind_addr: String,
    pub base_url: String,
    pub static_dir: PathBuf,
    pub title: String,
    pub tagline: String,
    pub docs_url: String,
    pub repository_url: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        if !is_host_port(&bind_addr) {
            return Err(ConfigError::InvalidBindAddr(bind_addr));
        }

        let base_url = match get("BASE_URL") {
            Some(raw) => normalize_base_url(&raw).ok_or(ConfigError::InvalidValue {
                var: "BASE_URL",
                value: raw,
                reason: "must be a path such as /docs/",
            })?,
            None => "/".to_string(),
        };

        let title = get("SITE_TITLE").unwrap_or_else(|| "Ramsha".to_string());
        let tagline = get("SITE_TAGLINE").unwrap_or_else(|| {
            "A modular, Clean Architecture first framework for .NET backends".to_string()
        });
        let docs_url = get("DOCS_URL").unwrap_or_else(|| format!("{base_url}docs/intro"));

        Ok(Self {
            bind_addr,
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            title,
            tagline,
            docs_url,
            repository_url: get("REPOSITORY_URL")
                .unwrap_or_else(|| "https://github.com/ramsha-framework/ramsha".to_string()),
            base_url,
        })
    }

    pub fn asset_resolver(&self) -> AssetResolver {
        AssetResolver::new(self.base_url.clone()).with_static_root(self.static_dir.clone())
    }
}

fn is_host_port(raw: &str) -> bool {
    let Some((host, port)) = raw.rsplit_once(':') else {
        return false;
    };
    let host = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);
    !host.is_empty() && !host.contains(char::is_whitespace) && port.parse::<u16>().is_ok()
}

/// Normalizes a base URL path to a leading and trailing `/`.
///
/// Returns `None` for values that are not plain paths (schemes, queries,
/// fragments, whitespace).
pub fn normalize_base_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.contains("://") || raw.contains(['?', '#', ' ', '\\']) {
        return None;
    }

    let inner = raw.trim_matches('/');
    if inner.is_empty() {
        return Some("/".to_string());
    }
    if inner.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..") {
        return None;
    }
    Some(format!("/{inner}/"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = SiteConfig::from_lookup(lookup(&[])).expect("default config");
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.base_url, "/");
        assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(cfg.title, "Ramsha");
        assert_eq!(cfg.docs_url, "/docs/intro");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = SiteConfig::from_lookup(lookup(&[("SITE_TITLE", "   "), ("BASE_URL", "")]))
            .expect("config");
        assert_eq!(cfg.title, "Ramsha");
        assert_eq!(cfg.base_url, "/");
    }

    #[test]
    fn base_url_is_normalized_and_feeds_docs_url() {
        let cfg = SiteConfig::from_lookup(lookup(&[("BASE_URL", "ramsha")])).expect("config");
        assert_eq!(cfg.base_url, "/ramsha/");
        assert_eq!(cfg.docs_url, "/ramsha/docs/intro");
    }

    #[test]
    fn invalid_bind_addr_is_rejected() {
        let err = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(ref v) if v == "localhost"));
    }

    #[test]
    fn hostname_bind_addr_is_accepted() {
        for addr in ["localhost:8080", "docs.internal:80", "127.0.0.1:3000", "[::1]:8080"] {
            let cfg = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", addr)])).expect(addr);
            assert_eq!(cfg.bind_addr, addr);
        }
    }

    #[test]
    fn bind_addr_needs_host_and_valid_port() {
        for addr in [":8080", "localhost:http", "localhost:70000", "[]:80"] {
            let err = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", addr)])).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidBindAddr(_)), "{addr}");
        }
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = SiteConfig::from_lookup(lookup(&[("BASE_URL", "https://x.dev/")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "BASE_URL", .. }));
    }

    #[test]
    fn normalize_base_url_cases() {
        assert_eq!(normalize_base_url("/").as_deref(), Some("/"));
        assert_eq!(normalize_base_url("/a/b").as_deref(), Some("/a/b/"));
        assert_eq!(normalize_base_url("a/b/").as_deref(), Some("/a/b/"));
        assert_eq!(normalize_base_url("/a//b/"), None);
        assert_eq!(normalize_base_url("/a/../b"), None);
        assert_eq!(normalize_base_url("/a?x=1"), None);
    }
}
