#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::wildcard_imports,
    clippy::indexing_slicing
)]
//! Integration tests for the `build` command pipeline.
//!
//! These tests run the same steps as `heroicons build` against a temporary
//! project: content scanning, rule generation, stylesheet rendering and
//! output writing.

mod common;

use std::collections::BTreeSet;

use common::{IntegrationTestContext, TestContextBuilder};
use heroicons_css::commands::build::{generate, requested_names, write_stylesheet};
use heroicons_css::icons::{DiskFs, IconRule, IconStyle, render_stylesheet, scan};
use heroicons_css::logging::{IconStatus, Logger};

const CONFIG: &str = r#"
icons_dir = "icons"
output = "priv/static/icons.css"
content = ["lib/**/*.ex", "js/**/*.js"]
"#;

const TEMPLATE: &str = r#"
<button class="btn hero-home">Home</button>
<.icon name="hero-bolt-mini" class="size-5" />
<span class="hero-missing"></span>
"#;

fn project() -> IntegrationTestContext {
    TestContextBuilder::new()
        .with_icon(IconStyle::Outline, "home", "<svg>\n<path/>\n</svg>\n")
        .with_icon(
            IconStyle::Mini,
            "bolt",
            "<svg viewBox=\"0 0 20 20\"><path d=\"M1 1\"/></svg>\n",
        )
        .with_icon(IconStyle::Micro, "bolt", "<svg/>")
        .with_content_file("lib/app_web/components.ex", TEMPLATE)
        .with_config(CONFIG)
        .build()
}

fn rules_for(ctx: &IntegrationTestContext, log: &Logger) -> Vec<IconRule> {
    let config = ctx.load_config();
    let icons = scan(&config.icons_dir, &DiskFs).unwrap();
    let names = requested_names(&config, log).unwrap();
    generate(&icons, &DiskFs, &config, &names, log)
}

// ---------------------------------------------------------------------------
// Snapshot: generated rules
// ---------------------------------------------------------------------------

/// Snapshot of the rule blocks generated for the referenced icons.
#[test]
fn stylesheet_rules() {
    let ctx = project();
    let rules = rules_for(&ctx, &Logger::new());
    let body: Vec<String> = rules.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!("stylesheet_rules", body.join("\n\n"));
}

// ---------------------------------------------------------------------------
// Content scanning and generation
// ---------------------------------------------------------------------------

#[test]
fn only_referenced_icons_are_requested() {
    let ctx = project();
    let names = requested_names(&ctx.load_config(), &Logger::new()).unwrap();
    let expected: BTreeSet<String> = ["bolt-mini", "home", "missing"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn unknown_references_are_recorded_not_fatal() {
    let ctx = project();
    let log = Logger::new();
    let rules = rules_for(&ctx, &log);

    assert_eq!(rules.len(), 2);
    assert_eq!(log.count(IconStatus::Generated), 2);
    assert_eq!(log.count(IconStatus::Unknown), 1);
    assert!(!log.has_failures());
}

#[test]
fn all_names_generates_every_icon() {
    let ctx = project();
    let config = ctx.load_config();
    let icons = scan(&config.icons_dir, &DiskFs).unwrap();
    let names: BTreeSet<String> = icons.names().map(String::from).collect();

    let rules = generate(&icons, &DiskFs, &config, &names, &Logger::new());
    let classes: Vec<&str> = rules.iter().map(|r| r.class.as_str()).collect();
    assert_eq!(classes, vec!["hero-bolt-micro", "hero-bolt-mini", "hero-home"]);
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[test]
fn stylesheet_written_to_configured_output() {
    let ctx = project();
    let log = Logger::new();
    let config = ctx.load_config();
    let css = render_stylesheet(&rules_for(&ctx, &log));

    let output = config.output.clone().unwrap();
    write_stylesheet(&css, Some(&output), false, &log).unwrap();

    let written = std::fs::read_to_string(ctx.root_path().join("priv/static/icons.css")).unwrap();
    assert_eq!(written, css);
    assert!(written.starts_with("/* Generated by heroicons "));
    assert!(written.contains(".hero-home {\n"));
    assert!(!written.contains(".hero-missing"));
}

#[test]
fn rebuilding_produces_identical_output() {
    let ctx = project();
    let first = render_stylesheet(&rules_for(&ctx, &Logger::new()));
    let second = render_stylesheet(&rules_for(&ctx, &Logger::new()));
    assert_eq!(first, second);
}

#[test]
fn dry_run_leaves_output_absent() {
    let ctx = project();
    let log = Logger::new();
    let config = ctx.load_config();
    let css = render_stylesheet(&rules_for(&ctx, &log));

    let output = config.output.clone().unwrap();
    write_stylesheet(&css, Some(&output), true, &log).unwrap();
    assert!(!output.exists());
}
