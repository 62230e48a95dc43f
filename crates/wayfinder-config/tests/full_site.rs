//! End-to-end checks against the full Apex Admin site configuration.

use std::path::Path;

use pretty_assertions::assert_eq;
use wayfinder_config::SiteConfig;

fn fixture() -> SiteConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/site.toml");
    SiteConfig::load(&path).unwrap()
}

#[test]
fn fixture_parses_with_expected_shape() {
    let config = fixture();

    assert_eq!(config.title, "Apex Admin");
    assert_eq!(config.lang, "zh-CN");
    assert_eq!(config.base, "/");
    assert!(config.ignore_dead_links);
    assert_eq!(config.head.len(), 3);
    assert_eq!(config.theme.nav.len(), 4);
    assert_eq!(config.theme.sidebar.get("/guide/").unwrap().len(), 5);
    assert_eq!(config.theme.sidebar.get("/dev/").unwrap().len(), 8);
}

#[test]
fn fixture_validates_clean() {
    let issues = fixture().validate();

    assert!(issues.is_empty(), "unexpected issues: {:?}", issues);
}

#[test]
fn sidebar_trees_carry_every_documented_route() {
    let config = fixture();

    let links = config.theme.sidebar.links();
    let guide = links.iter().filter(|l| l.url.starts_with("/guide/")).count();
    let dev = links.iter().filter(|l| l.url.starts_with("/dev/")).count();

    assert_eq!(guide, 31);
    assert_eq!(dev, 37);
}

#[test]
fn dev_route_selects_core_concepts_section() {
    let config = fixture();

    let view = config.theme.sidebar.resolve("/dev/core/modules").unwrap();

    assert_eq!(view.prefix, "/dev/");
    let section = view
        .sections
        .iter()
        .find(|s| s.text == "核心概念")
        .unwrap();
    assert!(!section.collapsed);

    let active: Vec<_> = section.items.iter().filter(|i| i.active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].text, "模块系统");
    assert_eq!(active[0].link.as_deref(), Some("/dev/core/modules"));

    let total_active = view
        .sections
        .iter()
        .flat_map(|s| &s.items)
        .filter(|i| i.active)
        .count();
    assert_eq!(total_active, 1);
}

#[test]
fn guide_route_uses_guide_tree() {
    let config = fixture();

    let view = config.theme.sidebar.resolve("/guide/event-system").unwrap();

    assert_eq!(view.prefix, "/guide/");
    let section = view.sections.iter().find(|s| s.text == "进阶开发").unwrap();
    assert!(section.collapsed);
    assert!(section.items.iter().any(|i| i.active && i.text == "事件系统"));
}

#[test]
fn nav_active_states_follow_active_match() {
    let config = fixture();

    let active: Vec<&str> = config
        .theme
        .nav
        .iter()
        .filter(|item| item.is_active("/dev/core/modules"))
        .map(|item| item.text())
        .collect();

    assert_eq!(active, vec!["开发手册"]);
}

#[test]
fn root_locale_overrides_every_widget_string() {
    let config = fixture();

    let root = &config.theme.search.options.locales["root"];
    let entries = root.translations.entries();

    assert_eq!(entries.len(), 9);
    assert!(entries.iter().all(|(_, value)| !value.is_empty()));
    assert_eq!(root.translations.button.button_text, "搜索文档");
    assert_eq!(root.translations.modal.no_results_text, "无法找到相关结果");
    assert_eq!(root.translations.modal.footer.navigate_text, "切换");
}

#[test]
fn edit_link_resolves_page_source_path() {
    let config = fixture();

    let edit = config.theme.edit_link.as_ref().unwrap();

    assert_eq!(edit.text, "在 GitHub 上编辑此页");
    assert_eq!(
        edit.resolve("dev/core/modules.md"),
        "https://github.com/apex-admin/docs/edit/main/docs/dev/core/modules.md"
    );
}

#[test]
fn head_tags_render_with_sorted_attributes() {
    let config = fixture();

    assert_eq!(
        config.head[2].to_html(),
        r#"<link href="/favicon.ico" rel="icon">"#
    );
}

#[test]
fn json_export_round_trips() {
    let config = fixture();

    let json = config.to_json().unwrap();
    let reparsed: SiteConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(config, reparsed);
}

#[test]
fn toml_export_round_trips() {
    let config = fixture();

    let rendered = config.to_toml().unwrap();
    let reparsed: SiteConfig = toml::from_str(&rendered).unwrap();

    assert_eq!(config, reparsed);
}

#[test]
fn yaml_export_round_trips() {
    let config = fixture();

    let yaml = config.to_yaml().unwrap();
    let reparsed: SiteConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(config, reparsed);
}
