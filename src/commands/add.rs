//! apex add コマンド
//!
//! レジストリからコンポーネントを取得し、依存を含めてプロジェクトに追加する。

use super::prompt::{Prompt, StdinPrompt};
use crate::config::ProjectConfig;
use crate::error::{ApexError, Result};
use crate::fs::{FileSystem, RealFs};
use crate::install::{
    collect_external_dependencies, manual_install_command, Collision, DependencyInstaller,
    InstallExecutor, InstallPlan, InstallResult, ProcessInstaller,
};
use crate::output::{self, CommandSummary};
use crate::placement::{import_path, project_dir};
use crate::registry::{normalize_component_name, resolve_registry_root, ComponentKind, RegistryStore};
use crate::resolve::{resolve, MissingReference};
use clap::Parser;
use owo_colors::OwoColorize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
pub struct Args {
    /// Component names (e.g. button date-range-picker)
    #[arg(required = true)]
    pub components: Vec<String>,

    /// Overwrite existing files without asking
    #[arg(long, short = 'o')]
    pub overwrite: bool,

    /// Install every file into this directory instead of the configured paths
    #[arg(long, short = 'p', value_name = "DIR")]
    pub path: Option<PathBuf>,
}

/// 追加処理の結果
#[derive(Debug)]
pub enum AddOutcome {
    /// 有効なコンポーネント名がなかった
    NothingToAdd { unknown: Vec<String> },
    /// 上書き確認で中止した
    Cancelled { conflicts: Vec<PathBuf> },
    /// ファイルを書き込んだ
    Installed(AddReport),
}

/// 追加処理の詳細
#[derive(Debug, Default)]
pub struct AddReport {
    /// 見つからなかった要求名
    pub unknown: Vec<String>,
    /// 直接要求されたコンポーネント
    pub requested: Vec<String>,
    /// 依存として追加されたコンポーネント
    pub auto_included: Vec<String>,
    pub missing: Vec<MissingReference>,
    pub collisions: Vec<Collision>,
    /// 外部パッケージ
    pub packages: Vec<String>,
    /// パッケージインストールの失敗内容
    pub package_error: Option<String>,
    pub result: InstallResult,
    /// 利用例として表示するインポート文
    pub imports: Vec<ImportExample>,
}

/// `import { names } from 'path'` の1行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportExample {
    pub names: Vec<String>,
    pub path: String,
}

pub async fn run(args: Args, registry: Option<&Path>) -> Result<()> {
    let project_root = env::current_dir()?;
    let registry_root = resolve_registry_root(registry)?;
    let store = RegistryStore::new(&RealFs, registry_root);

    let outcome = add_components(
        &args,
        &project_root,
        &store,
        &RealFs,
        &ProcessInstaller,
        &mut StdinPrompt,
    )
    .await?;
    print_outcome(&outcome);
    Ok(())
}

/// コンポーネントを追加
///
/// 上書き確認で拒否された場合はファイルに一切触れずに `Cancelled` を返す。
pub async fn add_components<I: DependencyInstaller>(
    args: &Args,
    project_root: &Path,
    store: &RegistryStore<'_>,
    fs: &dyn FileSystem,
    installer: &I,
    prompt: &mut dyn Prompt,
) -> Result<AddOutcome> {
    // 1. 設定の読み込み
    let config = ProjectConfig::try_load(fs, project_root)?
        .ok_or_else(|| ApexError::ConfigNotFound(project_root.to_path_buf()))?;

    if let Some(dir) = &args.path {
        let dir = project_dir(project_root, dir);
        if fs.exists(&dir) && !fs.is_dir(&dir) {
            return Err(ApexError::InvalidArgument(format!(
                "--path {} is not a directory",
                dir.display()
            )));
        }
    }

    // 2. レジストリの読み込み
    let spinner = output::spinner("Loading registry...");
    let index = store.load_index();
    spinner.finish_and_clear();
    let index = index?;

    // 3. 要求名の検証
    let mut valid: Vec<String> = Vec::new();
    let mut unknown: Vec<String> = Vec::new();
    for name in &args.components {
        let normalized = normalize_component_name(name);
        if index.contains(&normalized) {
            if !valid.contains(&normalized) {
                valid.push(normalized);
            }
        } else {
            output::warn(&format!("Component \"{}\" not found. Skipping.", name));
            unknown.push(name.clone());
        }
    }

    if valid.is_empty() {
        return Ok(AddOutcome::NothingToAdd { unknown });
    }

    // 4. 依存解決
    let resolved = resolve(&valid, store);
    let auto_included: Vec<String> = resolved
        .auto_included()
        .iter()
        .map(|c| c.name.clone())
        .collect();
    for component in resolved.auto_included() {
        output::info(&format!(
            "Auto-including {} (required dependency)",
            component.display_title().cyan()
        ));
    }
    for missing in resolved.missing() {
        output::warn(&format!("Skipping {}", missing));
    }
    if resolved.is_empty() {
        return Ok(AddOutcome::NothingToAdd { unknown });
    }
    output::info(&format!(
        "Resolved {} component(s): {}",
        resolved.len(),
        resolved.names().join(", ")
    ));

    // 5. 配置計画と衝突検出
    let plan = InstallPlan::build(&resolved, &config, args.path.as_deref(), project_root, fs);
    for collision in plan.collisions() {
        output::warn(&format!("Target collision: {}", collision));
    }

    if plan.has_conflicts() && !args.overwrite {
        output::warn(&format!("{} file(s) already exist:", plan.conflicts().len()));
        for conflict in plan.conflicts() {
            let shown = conflict.strip_prefix(project_root).unwrap_or(conflict);
            println!("  {}", shown.display().dimmed());
        }
        if !prompt.confirm("Overwrite existing files?", false)? {
            return Ok(AddOutcome::Cancelled {
                conflicts: plan.conflicts().to_vec(),
            });
        }
    }

    // 6. 外部パッケージのインストール
    let packages = collect_external_dependencies(&resolved);
    let mut package_error = None;
    if !packages.is_empty() {
        let manager = config.project.package_manager;
        let spinner = output::spinner("Installing npm dependencies...");
        let installed = installer.install(&packages, manager, project_root).await;
        spinner.finish_and_clear();

        match installed {
            Ok(()) => output::success(&format!("Installed {} dependencies", packages.len())),
            Err(e) => {
                output::warn(&format!("Could not install dependencies automatically: {}", e));
                output::info(&format!(
                    "Install manually: {}",
                    manual_install_command(manager, &packages)
                ));
                package_error = Some(e.to_string());
            }
        }
    }

    // 7. ファイルのコピーと書き換え
    let progress = output::file_progress(plan.len());
    let result = InstallExecutor::new(store, fs, &config).execute(&plan, |file| {
        progress.set_message(file.file.target_file_name().to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();

    let imports = resolved
        .requested()
        .into_iter()
        .filter(|c| c.kind == ComponentKind::Ui && !c.exports.is_empty())
        .map(|c| ImportExample {
            names: output::example_exports(&c.exports),
            path: import_path(c, &config),
        })
        .collect();

    Ok(AddOutcome::Installed(AddReport {
        unknown,
        requested: resolved.requested().iter().map(|c| c.name.clone()).collect(),
        auto_included,
        missing: resolved.missing().to_vec(),
        collisions: plan.collisions().to_vec(),
        packages,
        package_error,
        result,
        imports,
    }))
}

/// 追加処理の結果を表示
fn print_outcome(outcome: &AddOutcome) {
    match outcome {
        AddOutcome::NothingToAdd { unknown } => {
            output::error("No valid components found.");
            if !unknown.is_empty() {
                output::info(&format!("Not in the registry: {}", unknown.join(", ")));
            }
            println!(
                "  Run {} to see available components.",
                "apex list".cyan()
            );
        }
        AddOutcome::Cancelled { conflicts } => {
            output::info(&format!(
                "Cancelled. {} existing file(s) left untouched.",
                conflicts.len()
            ));
        }
        AddOutcome::Installed(report) => print_summary(report),
    }
}

fn print_summary(report: &AddReport) {
    CommandSummary::format(report.result.written_count(), report.result.failure_count()).print();
    if !report.result.is_success() {
        for failure in &report.result.failed {
            output::error(&format!(
                "Could not copy {}: {}",
                failure.file.file.target, failure.error
            ));
        }
    }

    // 1ファイルも書き込めなかったコンポーネントは一覧に出さない
    let written = report.result.written_components();
    output::title("Added:");
    for name in &report.requested {
        if written.contains(&name.as_str()) {
            output::step(&name.cyan().to_string());
        }
    }
    for name in &report.auto_included {
        if written.contains(&name.as_str()) {
            output::step(&format!("{} (auto-installed)", name).dimmed().to_string());
        }
    }

    if !report.unknown.is_empty() {
        output::warn(&format!("Not in the registry: {}", report.unknown.join(", ")));
    }
    if !report.missing.is_empty() || !report.collisions.is_empty() {
        output::warn(&format!(
            "{} unresolved reference(s), {} target collision(s); see the warnings above",
            report.missing.len(),
            report.collisions.len()
        ));
    }
    if let Some(error) = &report.package_error {
        output::warn(&format!(
            "Packages not installed ({}): {}",
            error,
            report.packages.join(" ")
        ));
    }

    if !report.imports.is_empty() {
        output::title("Import in your app:");
        for example in &report.imports {
            output::import_example(&example.names, &example.path);
        }
    }
    println!();
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
