//! Resolve the configuration for a single route.

use std::path::{Path, PathBuf};

use anyhow::Result;
use wayfinder_config::sidebar::ItemView;
use wayfinder_config::{NavItem, SiteConfig};
use wayfinder_content::routes::source_for;
use wayfinder_content::scan_docs;

/// Run the inspect command.
pub async fn run(config_path: PathBuf, route: String, docs: Option<PathBuf>) -> Result<()> {
    let config = SiteConfig::load(&config_path)?;

    if !route.starts_with('/') {
        anyhow::bail!("Route must start with '/': {}", route);
    }

    println!("Site:  {}", config.title);
    println!("Route: {}", route);
    if let Some(docs_dir) = &docs {
        print_source(docs_dir, &route)?;
    }
    println!();

    println!("Nav:");
    for item in &config.theme.nav {
        print_nav_item(item, &route);
    }
    println!();

    match config.theme.sidebar.resolve(&route) {
        Some(view) => {
            println!("Sidebar ({}):", view.prefix);
            for section in &view.sections {
                let suffix = if section.collapsed { " (collapsed)" } else { "" };
                println!("  {}{}", section.text, suffix);
                for item in &section.items {
                    print_item(item, 2);
                }
            }
        }
        None => println!("Sidebar: no tree matches this route"),
    }

    if let Some(edit) = &config.theme.edit_link {
        println!();
        println!("Edit:  {}", edit.resolve(&source_for(&route)));
    }

    Ok(())
}

fn print_source(docs_dir: &Path, route: &str) -> Result<()> {
    let tree = scan_docs(docs_dir)?;

    match tree.pages.iter().find(|p| p.route == route) {
        Some(page) => println!("Source: {} ({})", page.rel_path, page.title),
        None if tree.routes.contains(route) => {
            println!("Source: {} (failed to parse)", source_for(route));
        }
        None => println!("Source: {} (missing)", source_for(route)),
    }

    Ok(())
}

fn print_nav_item(item: &NavItem, route: &str) {
    let marker = if item.is_active(route) { '*' } else { ' ' };

    match item {
        NavItem::Link(link) => println!("  {} {} -> {}", marker, link.text, link.link),
        NavItem::Group(group) => {
            println!("  {} {}", marker, group.text);
            for link in item.links() {
                println!("      {} -> {}", link.text, link.link);
            }
        }
    }
}

fn print_item(item: &ItemView, depth: usize) {
    let indent = "  ".repeat(depth);
    let marker = if item.active { '*' } else { ' ' };

    match &item.link {
        Some(link) => println!("{}{} {} -> {}", indent, marker, item.text, link),
        None => println!("{}{} {}", indent, marker, item.text),
    }

    for child in &item.children {
        print_item(child, depth + 1);
    }
}
