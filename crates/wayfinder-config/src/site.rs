//! The site configuration record and its loader.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::head::HeadTag;
use crate::theme::ThemeConfig;
use crate::validate::{self, Issue};

/// Errors from loading or serializing a site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Unsupported config format: {0:?} (expected toml, json, yaml, or yml)")]
    UnsupportedFormat(String),

    #[error("Failed to serialize config: {0}")]
    Serialize(String),
}

/// The whole configuration of a documentation site.
///
/// Field names in config files are camelCase across all three supported
/// formats, so a record exported to JSON parses back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the nav bar and page titles. Required.
    pub title: String,

    /// Meta description for every page.
    #[serde(default)]
    pub description: String,

    /// BCP 47 language tag for the `<html lang>` attribute.
    #[serde(default = "default_lang")]
    pub lang: String,

    /// URL prefix the site is served under. Must start and end with `/`.
    #[serde(default = "default_base")]
    pub base: String,

    /// Demote dead internal links from errors to warnings.
    #[serde(default)]
    pub ignore_dead_links: bool,

    /// Extra tags for the `<head>` of every page.
    #[serde(default)]
    pub head: Vec<HeadTag>,

    /// Theme configuration.
    #[serde(default, rename = "themeConfig")]
    pub theme: ThemeConfig,
}

fn default_lang() -> String {
    "en-US".to_string()
}

fn default_base() -> String {
    "/".to_string()
}

impl SiteConfig {
    /// Load a configuration from a TOML, JSON, or YAML file, picking the
    /// parser from the file extension.
    pub fn load(path: &Path) -> Result<SiteConfig, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let format = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
        tracing::debug!("Loading {} config from {}", format, path.display());

        let parse_error = |message: String| ConfigError::Parse {
            path: path.display().to_string(),
            message,
        };

        match format {
            "toml" => toml::from_str(&raw).map_err(|e| parse_error(e.to_string())),
            "json" => serde_json::from_str(&raw).map_err(|e| parse_error(e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(&raw).map_err(|e| parse_error(e.to_string()))
            }
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Check the record against the rules the generator assumes and collect
    /// every violation.
    pub fn validate(&self) -> Vec<Issue> {
        validate::validate(self)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: SiteConfig = toml::from_str(r#"title = "Apex Admin""#).unwrap();

        assert_eq!(config.title, "Apex Admin");
        assert_eq!(config.description, "");
        assert_eq!(config.lang, "en-US");
        assert_eq!(config.base, "/");
        assert!(!config.ignore_dead_links);
        assert!(config.head.is_empty());
        assert!(config.theme.nav.is_empty());
    }

    #[test]
    fn missing_title_is_an_error() {
        let result: Result<SiteConfig, _> = toml::from_str(r#"lang = "zh-CN""#);

        assert!(result.is_err());
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
title = "Apex Admin"
titel = "oops"
"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn loads_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.json");
        fs::write(&path, r#"{"title": "Apex Admin", "lang": "zh-CN"}"#).unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.title, "Apex Admin");
        assert_eq!(config.lang, "zh-CN");
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.ini");
        fs::write(&path, "title = x").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "ini"));
    }

    #[test]
    fn toml_round_trip_is_identity() {
        let config: SiteConfig = toml::from_str(
            r#"
title = "Apex Admin"
description = "Apex Admin 开发文档"
lang = "zh-CN"
ignoreDeadLinks = true
head = [["meta", { name = "keywords", content = "admin" }]]

[[themeConfig.nav]]
text = "首页"
link = "/"
"#,
        )
        .unwrap();

        let rendered = config.to_toml().unwrap();
        let reparsed: SiteConfig = toml::from_str(&rendered).unwrap();

        assert_eq!(config, reparsed);
    }

    #[test]
    fn json_round_trip_is_identity() {
        let config: SiteConfig = toml::from_str(
            r#"
title = "Apex Admin"

[themeConfig.editLink]
pattern = "https://example.com/edit/:path"
"#,
        )
        .unwrap();

        let json = config.to_json().unwrap();
        let reparsed: SiteConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, reparsed);
    }
}
