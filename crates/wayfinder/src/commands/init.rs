//! Scaffold a new site.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(config_path: PathBuf, yes: bool) -> Result<()> {
    tracing::info!("Initializing wayfinder site...");

    let docs_dir = Path::new("docs");

    // Check if docs already exists
    if docs_dir.exists() {
        if !yes {
            tracing::warn!("docs/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(docs_dir).context("Failed to create docs directory")?;
    }

    if !config_path.exists() || yes {
        fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    let guide_dir = docs_dir.join("guide");
    fs::create_dir_all(&guide_dir).context("Failed to create guide directory")?;

    let pages = [
        (docs_dir.join("index.md"), DEFAULT_INDEX),
        (guide_dir.join("introduction.md"), DEFAULT_INTRODUCTION),
        (guide_dir.join("getting-started.md"), DEFAULT_GETTING_STARTED),
    ];

    for (path, content) in pages {
        if !path.exists() || yes {
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created {}", path.display());
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'wayfinder check' to audit the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Wayfinder site configuration

title = "My Docs"
description = "Documentation for my project"
lang = "en-US"
base = "/"

[[themeConfig.nav]]
text = "Home"
link = "/"

[[themeConfig.nav]]
text = "Guide"
link = "/guide/introduction"
activeMatch = "^/guide/"

[[themeConfig.sidebar."/guide/"]]
text = "Getting Started"
items = [
  { text = "Introduction", link = "/guide/introduction" },
  { text = "Quick Start", link = "/guide/getting-started" },
]

[themeConfig.footer]
message = "Released under the MIT License"
"#;

const DEFAULT_INDEX: &str = r#"---
title: Home
---

# My Docs

Welcome. Start with the [introduction](/guide/introduction).
"#;

const DEFAULT_INTRODUCTION: &str = r#"# Introduction

What this project is and why it exists.

Continue with the [quick start](./getting-started).
"#;

const DEFAULT_GETTING_STARTED: &str = r#"# Quick Start

Install, configure, run.

Back to the [introduction](./introduction).
"#;
