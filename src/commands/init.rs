//! apex init コマンド
//!
//! プロジェクトを検出して apex.config.json を作成し、
//! コンポーネントが依存する土台（ディレクトリ、utils、デザイントークン、
//! パスエイリアス、基本パッケージ）を用意する。

mod templates;

pub use templates::{BASE_PACKAGES, DESIGN_TOKENS_CSS, TOKEN_MARKER, UTILS_TS};

use super::prompt::{Prompt, StdinPrompt};
use crate::config::{config_path, DirPaths, ProjectConfig, CONFIG_FILE};
use crate::error::Result;
use crate::fs::{FileSystem, RealFs};
use crate::install::{manual_install_command, DependencyInstaller, ProcessInstaller};
use crate::output;
use crate::placement::project_dir;
use crate::project::{self, ProjectInfo};
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::{json, Map, Value};
use std::env;
use std::path::Path;

#[derive(Debug, Parser)]
pub struct Args {
    /// Accept all defaults and overwrite an existing configuration
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// tsconfig.json に追加するパスエイリアス
const TSCONFIG_ALIAS: &str = "@/*";
const TSCONFIG_ALIAS_TARGET: &str = "./src/*";

/// 初期化の結果
#[derive(Debug)]
pub enum InitOutcome {
    /// 既存設定の上書きを拒否した
    Cancelled,
    Initialized(InitReport),
}

/// 初期化の詳細
#[derive(Debug)]
pub struct InitReport {
    pub config: ProjectConfig,
    /// utils ファイルを新規作成したか
    pub utils_created: bool,
    pub css: CssChange,
    pub tsconfig: TsconfigChange,
    /// パッケージインストールの失敗内容
    pub package_error: Option<String>,
}

/// CSS ファイルへの変更
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssChange {
    Created,
    Appended,
    AlreadyPresent,
}

/// tsconfig.json への変更
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsconfigChange {
    Updated,
    /// エイリアス無効
    NotNeeded,
    /// tsconfig.json がない
    Missing,
    /// 解析できなかった
    Unparsable,
}

pub async fn run(args: Args) -> Result<()> {
    let project_root = env::current_dir()?;
    let outcome = initialize(&args, &project_root, &RealFs, &ProcessInstaller, &mut StdinPrompt).await?;
    print_outcome(&outcome);
    Ok(())
}

/// プロジェクトを初期化
pub async fn initialize<I: DependencyInstaller>(
    args: &Args,
    project_root: &Path,
    fs: &dyn FileSystem,
    installer: &I,
    prompt: &mut dyn Prompt,
) -> Result<InitOutcome> {
    println!();
    println!("  {}", "APEX Design System".bold().cyan());
    println!("  {}", "Initialize your project".dimmed());
    println!();

    // 既存設定の確認（読める設定は対話の既定値に使う）
    let previous = ProjectConfig::load(fs, project_root);
    if fs.exists(&config_path(project_root))
        && !args.yes
        && !prompt.confirm(&format!("{} already exists. Overwrite?", CONFIG_FILE), false)?
    {
        return Ok(InitOutcome::Cancelled);
    }

    // プロジェクト検出
    let info = project::detect(fs, project_root);
    output::success(&format!(
        "Detected: {} ({}) with {}",
        info.kind,
        if info.typescript { "TypeScript" } else { "JavaScript" },
        info.package_manager
    ));

    let config = if args.yes {
        ProjectConfig::default_for(&info)
    } else {
        ask_config(&info, previous.as_ref(), prompt)?
    };

    // 1. 設定ファイル
    config.write(fs, project_root)?;
    output::success(&format!("Created {}", CONFIG_FILE));

    // 2. 配置先ディレクトリ
    for dir in [&config.paths.components, &config.paths.lib, &config.paths.hooks] {
        fs.create_dir_all(&project_dir(project_root, dir))?;
    }

    // 3. utils
    let utils_path = project_dir(project_root, &config.paths.lib).join("utils.ts");
    let utils_created = !fs.exists(&utils_path);
    if utils_created {
        fs.write(&utils_path, UTILS_TS.as_bytes())?;
    }

    // 4. デザイントークン
    let css = add_design_tokens(fs, &project_dir(project_root, &config.tailwind.css))?;

    // 5. パスエイリアス
    let tsconfig = if config.aliases.enabled {
        add_tsconfig_alias(fs, &project_root.join("tsconfig.json"))?
    } else {
        TsconfigChange::NotNeeded
    };
    output::success("Project configured");

    // 6. 基本パッケージ
    let packages: Vec<String> = BASE_PACKAGES.iter().map(|p| p.to_string()).collect();
    let manager = config.project.package_manager;
    let spinner = output::spinner("Installing base dependencies...");
    let installed = installer.install(&packages, manager, project_root).await;
    spinner.finish_and_clear();

    let package_error = match installed {
        Ok(()) => {
            output::success("Base dependencies installed");
            None
        }
        Err(e) => {
            output::warn("Could not install dependencies automatically. Install manually:");
            output::step(&manual_install_command(manager, &packages));
            Some(e.to_string())
        }
    };

    Ok(InitOutcome::Initialized(InitReport {
        config,
        utils_created,
        css,
        tsconfig,
        package_error,
    }))
}

/// 初期化の結果を表示
fn print_outcome(outcome: &InitOutcome) {
    let report = match outcome {
        InitOutcome::Cancelled => {
            output::info("Cancelled.");
            return;
        }
        InitOutcome::Initialized(report) => report,
    };

    let config = &report.config;
    output::title("Changes:");
    output::step(&format!("{} ({})", CONFIG_FILE, config.project.kind));
    if report.utils_created {
        output::step(&format!("{}/utils.ts", config.paths.lib.trim_end_matches('/')));
    }
    match report.css {
        CssChange::Created => output::step(&format!("{} (created with design tokens)", config.tailwind.css)),
        CssChange::Appended => output::step(&format!("{} (design tokens appended)", config.tailwind.css)),
        CssChange::AlreadyPresent => {}
    }
    match report.tsconfig {
        TsconfigChange::Updated => output::step("tsconfig.json (\"@/*\" path alias)"),
        TsconfigChange::Unparsable => {
            output::warn("Could not parse tsconfig.json. Add the \"@/*\" path alias manually.")
        }
        TsconfigChange::Missing | TsconfigChange::NotNeeded => {}
    }
    if let Some(error) = &report.package_error {
        output::warn(&format!("Base dependencies were not installed: {}", error));
    }

    println!();
    println!("  {}", "APEX Design System initialized!".bold().green());
    println!();
    println!("  {}", "Next steps:".dimmed());
    println!("    {}  {}", "apex list".cyan(), "Browse available components".dimmed());
    println!("    {}  {}", "apex add button".cyan(), "Install your first component".dimmed());
    println!();
}

/// 配置先とエイリアスを対話で決める
///
/// 既存の設定があればその値を既定値にする。
fn ask_config(
    info: &ProjectInfo,
    previous: Option<&ProjectConfig>,
    prompt: &mut dyn Prompt,
) -> Result<ProjectConfig> {
    let base = ProjectConfig::default_for(info);
    let defaults = previous.map_or_else(DirPaths::default, |p| p.paths.clone());
    let paths = DirPaths {
        components: prompt.text("Where should components be installed?", &defaults.components)?,
        lib: prompt.text("Where should utilities go?", &defaults.lib)?,
        hooks: prompt.text("Where should hooks be installed?", &defaults.hooks)?,
    };
    let use_aliases = prompt.confirm(
        "Use path aliases (@/)?",
        previous.map_or(info.typescript, |p| p.aliases.enabled),
    )?;

    let tailwind = previous.map_or_else(|| base.tailwind.clone(), |p| p.tailwind.clone());
    let mut config = base.with_layout(paths, use_aliases);
    config.tailwind.config = prompt.text("Path to tailwind config?", &tailwind.config)?;
    let css = prompt.text("Path to global CSS file?", &tailwind.css)?;
    Ok(config.with_tailwind_css(css))
}

/// デザイントークンを CSS ファイルに追加
///
/// 既にトークンがあれば何もしない。ファイルがなければ作成する。
fn add_design_tokens(fs: &dyn FileSystem, css_path: &Path) -> Result<CssChange> {
    if !fs.exists(css_path) {
        fs.write(css_path, DESIGN_TOKENS_CSS.as_bytes())?;
        return Ok(CssChange::Created);
    }

    let existing = fs.read_to_string(css_path)?;
    if existing.contains(TOKEN_MARKER) {
        return Ok(CssChange::AlreadyPresent);
    }

    let content = format!("{}\n{}", existing, DESIGN_TOKENS_CSS);
    fs.write(css_path, content.as_bytes())?;
    Ok(CssChange::Appended)
}

/// tsconfig.json に `@/*` エイリアスを追加
///
/// 既存の `paths` の他のエントリと `baseUrl` は保持する。
fn add_tsconfig_alias(fs: &dyn FileSystem, tsconfig_path: &Path) -> Result<TsconfigChange> {
    if !fs.exists(tsconfig_path) {
        return Ok(TsconfigChange::Missing);
    }

    let content = fs.read_to_string(tsconfig_path)?;
    let Ok(mut tsconfig) = serde_json::from_str::<Value>(&content) else {
        return Ok(TsconfigChange::Unparsable);
    };
    let Some(root) = tsconfig.as_object_mut() else {
        return Ok(TsconfigChange::Unparsable);
    };

    let compiler_options = root
        .entry("compilerOptions")
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(compiler_options) = compiler_options.as_object_mut() else {
        return Ok(TsconfigChange::Unparsable);
    };

    let has_base_url = compiler_options
        .get("baseUrl")
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty());
    if !has_base_url {
        compiler_options.insert("baseUrl".to_string(), json!("."));
    }

    let paths = compiler_options
        .entry("paths")
        .or_insert_with(|| Value::Object(Map::new()));
    let Some(paths) = paths.as_object_mut() else {
        return Ok(TsconfigChange::Unparsable);
    };
    paths.insert(TSCONFIG_ALIAS.to_string(), json!([TSCONFIG_ALIAS_TARGET]));

    let mut json = serde_json::to_string_pretty(&tsconfig)?;
    json.push('\n');
    fs.write(tsconfig_path, json.as_bytes())?;
    Ok(TsconfigChange::Updated)
}

#[cfg(test)]
#[path = "init_test.rs"]
mod tests;
