//! Re-serialize the configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use wayfinder_config::{Severity, SiteConfig};

/// Output format for the export command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Toml,
    Json,
    Yaml,
}

/// Run the export command.
pub async fn run(
    config_path: PathBuf,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let config = SiteConfig::load(&config_path)?;

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => tracing::error!("{}", issue),
            Severity::Warning => tracing::warn!("{}", issue),
        }
    }
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("Configuration has {} errors", errors);
    }

    let rendered = match format {
        ExportFormat::Toml => config.to_toml()?,
        ExportFormat::Json => config.to_json()?,
        ExportFormat::Yaml => config.to_yaml()?,
    };

    match output {
        Some(path) => {
            fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_config_is_not_exported() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        let out_path = temp.path().join("site.json");
        fs::write(&config_path, "title = \"\"\nbase = \"docs\"\n").unwrap();

        let result = run(config_path, ExportFormat::Json, Some(out_path.clone())).await;

        assert!(result.is_err());
        assert!(!out_path.exists());
    }

    #[tokio::test]
    async fn valid_config_exports_to_file() {
        let temp = tempfile::tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        let out_path = temp.path().join("site.json");
        fs::write(&config_path, "title = \"Apex Admin\"\n").unwrap();

        run(config_path, ExportFormat::Json, Some(out_path.clone()))
            .await
            .unwrap();

        let exported = SiteConfig::load(&out_path).unwrap();
        assert_eq!(exported.title, "Apex Admin");
    }
}
