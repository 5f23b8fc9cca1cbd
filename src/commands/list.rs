//! apex list コマンド
//!
//! レジストリのコンポーネントをカテゴリごとに表示する。

use crate::error::Result;
use crate::fs::RealFs;
use crate::output;
use crate::registry::{
    group_by_category, resolve_registry_root, ComponentRecord, RegistryIndex, RegistryStore,
};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long, short = 'j')]
    pub json: bool,
}

/// カテゴリの表示順と見出し
const CATEGORIES: [(&str, &str); 9] = [
    ("inputs", "Inputs"),
    ("display", "Display"),
    ("feedback", "Feedback"),
    ("overlay", "Overlay"),
    ("navigation", "Navigation"),
    ("data-display", "Data Display"),
    ("utility", "Utility"),
    ("lib", "Utilities"),
    ("hooks", "Hooks"),
];

pub async fn run(args: Args, registry: Option<&Path>) -> Result<()> {
    let root = resolve_registry_root(registry)?;
    let store = RegistryStore::new(&RealFs, root);

    let spinner = output::spinner("Loading registry...");
    let loaded = store
        .load_index()
        .map(|index| {
            let (catalog, warnings) = store.load_catalog(&index);
            (index, catalog, warnings)
        });
    spinner.finish_and_clear();
    let (index, catalog, warnings) = loaded?;

    for warning in &warnings {
        output::warn(&warning.to_string());
    }

    if args.json {
        // 空の場合も [] を出力
        println!("{}", serde_json::to_string_pretty(catalog.records())?);
        return Ok(());
    }

    print_catalog(&index, catalog.records());
    Ok(())
}

fn print_catalog(index: &RegistryIndex, records: &[ComponentRecord]) {
    println!();
    println!(
        "  {} {}",
        "APEX Design System".bold().cyan(),
        format!("v{}", index.version).dimmed()
    );
    println!("  {}", format!("{} components available", records.len()).dimmed());
    println!();

    for (category, items) in ordered_categories(records) {
        println!("  {}", category_label(&category).to_uppercase().bold().yellow());
        println!("{}", build_table(&items));
        println!();
    }

    println!("  {}", "Usage:".dimmed());
    println!("    {}", "apex add <component-name>".cyan());
    println!("    {}", "apex add button input card".cyan());
    println!();
}

/// 既知カテゴリは固定順、未知カテゴリはその後にアルファベット順
fn ordered_categories(records: &[ComponentRecord]) -> Vec<(String, Vec<&ComponentRecord>)> {
    let mut groups = group_by_category(records);
    groups.sort_by(|(a, _), (b, _)| {
        let rank = |c: &str| CATEGORIES.iter().position(|(key, _)| *key == c);
        match (rank(a), rank(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.cmp(b),
        }
    });
    groups
}

/// カテゴリの見出し（未知のカテゴリはそのまま）
fn category_label(category: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, label)| *label)
        .unwrap_or(category)
}

/// 依存パッケージから導くバッジ
fn badges(record: &ComponentRecord) -> Vec<&'static str> {
    let mut badges = Vec::new();
    if record.dependencies.iter().any(|d| d.starts_with("@radix-ui")) {
        badges.push("Radix");
    }
    if record
        .dependencies
        .iter()
        .any(|d| d.starts_with("class-variance-authority"))
    {
        badges.push("CVA");
    }
    badges
}

fn build_table(items: &[&ComponentRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Badges", "Description"]);

    for item in items {
        let badges = badges(item).join(" ");
        table.add_row(vec![item.name.as_str(), badges.as_str(), item.description.as_str()]);
    }

    table
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
