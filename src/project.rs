//! プロジェクト環境の検出
//!
//! ロックファイル、tsconfig、package.json からパッケージマネージャ、
//! TypeScript の有無、フレームワークを判定する。

use crate::fs::FileSystem;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// プロジェクト種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    React,
    Next,
    Vite,
    Other,
}

impl ProjectKind {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKind::React => "react",
            ProjectKind::Next => "next",
            ProjectKind::Vite => "vite",
            ProjectKind::Other => "other",
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// パッケージマネージャ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }

    /// 追加インストールのコマンドと引数
    pub fn install_command(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            PackageManager::Npm => ("npm", &["install"]),
            PackageManager::Yarn => ("yarn", &["add"]),
            PackageManager::Pnpm => ("pnpm", &["add"]),
            PackageManager::Bun => ("bun", &["add"]),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 検出結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectInfo {
    pub kind: ProjectKind,
    pub typescript: bool,
    pub package_manager: PackageManager,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            kind: ProjectKind::React,
            typescript: true,
            package_manager: PackageManager::Npm,
        }
    }
}

/// ロックファイルとパッケージマネージャの対応（優先順）
const LOCK_FILES: [(&str, PackageManager); 3] = [
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
];

const TSCONFIG_FILES: [&str; 2] = ["tsconfig.json", "tsconfig.app.json"];

/// プロジェクトを検出
pub fn detect(fs: &dyn FileSystem, dir: &Path) -> ProjectInfo {
    ProjectInfo {
        kind: detect_kind(fs, dir),
        typescript: TSCONFIG_FILES.iter().any(|f| fs.exists(&dir.join(f))),
        package_manager: detect_package_manager(fs, dir),
    }
}

fn detect_package_manager(fs: &dyn FileSystem, dir: &Path) -> PackageManager {
    LOCK_FILES
        .iter()
        .find(|(file, _)| fs.exists(&dir.join(file)))
        .map(|(_, pm)| *pm)
        .unwrap_or(PackageManager::Npm)
}

/// package.json の依存からフレームワークを判定
///
/// package.json がない、または読めない場合は `Other`。
fn detect_kind(fs: &dyn FileSystem, dir: &Path) -> ProjectKind {
    let Ok(content) = fs.read_to_string(&dir.join("package.json")) else {
        return ProjectKind::Other;
    };
    let Ok(pkg) = serde_json::from_str::<serde_json::Value>(&content) else {
        return ProjectKind::Other;
    };

    let has_dep = |name: &str| {
        ["dependencies", "devDependencies"]
            .iter()
            .any(|section| pkg.get(section).and_then(|deps| deps.get(name)).is_some())
    };

    if has_dep("next") {
        ProjectKind::Next
    } else if has_dep("vite") {
        ProjectKind::Vite
    } else if has_dep("react") {
        ProjectKind::React
    } else {
        ProjectKind::Other
    }
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
