//! プロジェクト設定（apex.config.json）
//!
//! `apex init` が書き出し、`apex add` が読み込む。
//! 読み込みは fail closed: 壊れた設定は「設定なし」として扱う。

use crate::error::{ApexError, Result};
use crate::fs::FileSystem;
use crate::project::{PackageManager, ProjectInfo, ProjectKind};
use crate::transform::ImportLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 設定ファイル名
pub const CONFIG_FILE: &str = "apex.config.json";

/// 設定スキーマの URL
pub const SCHEMA_URL: &str = "https://apex-design.dev/schema.json";

/// 現在の設定バージョン
pub const CONFIG_VERSION: &str = "1.0.0";

/// プロジェクト設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub version: String,
    pub project: ProjectSection,
    pub paths: DirPaths,
    pub aliases: Aliases,
    pub tailwind: TailwindPaths,
}

/// プロジェクト情報
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSection {
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    pub typescript: bool,
    pub package_manager: PackageManager,
}

/// 配置先ディレクトリ（プロジェクトルートからの相対パス）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirPaths {
    pub components: String,
    pub lib: String,
    pub hooks: String,
}

impl Default for DirPaths {
    fn default() -> Self {
        Self {
            components: "./src/components/ui".to_string(),
            lib: "./src/lib".to_string(),
            hooks: "./src/hooks".to_string(),
        }
    }
}

/// インポートエイリアス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aliases {
    pub enabled: bool,
    pub components: String,
    pub lib: String,
    pub hooks: String,
}

impl Default for Aliases {
    fn default() -> Self {
        Self {
            enabled: true,
            components: "@/components/ui".to_string(),
            lib: "@/lib".to_string(),
            hooks: "@/hooks".to_string(),
        }
    }
}

/// Tailwind 関連ファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindPaths {
    pub config: String,
    pub css: String,
}

impl Default for TailwindPaths {
    fn default() -> Self {
        Self {
            config: "./tailwind.config.js".to_string(),
            css: "./src/index.css".to_string(),
        }
    }
}

/// 設定ファイルのパス
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

impl ProjectConfig {
    /// 検出結果から既定の設定を生成
    pub fn default_for(info: &ProjectInfo) -> Self {
        Self {
            schema: Some(SCHEMA_URL.to_string()),
            version: CONFIG_VERSION.to_string(),
            project: ProjectSection {
                kind: info.kind,
                typescript: info.typescript,
                package_manager: info.package_manager,
            },
            paths: DirPaths::default(),
            aliases: Aliases::default(),
            tailwind: TailwindPaths::default(),
        }
    }

    /// 配置先とエイリアス設定を差し替える
    ///
    /// エイリアスを使わない場合、エイリアス欄には配置先パスをそのまま入れる。
    pub fn with_layout(mut self, paths: DirPaths, use_aliases: bool) -> Self {
        self.aliases = if use_aliases {
            Aliases::default()
        } else {
            Aliases {
                enabled: false,
                components: paths.components.clone(),
                lib: paths.lib.clone(),
                hooks: paths.hooks.clone(),
            }
        };
        self.paths = paths;
        self
    }

    /// Tailwind の CSS ファイルを差し替える
    pub fn with_tailwind_css(mut self, css: impl Into<String>) -> Self {
        self.tailwind.css = css.into();
        self
    }

    /// 設定を読み込む
    ///
    /// ファイルがない、または不正な場合は `None`。
    pub fn load(fs: &dyn FileSystem, dir: &Path) -> Option<Self> {
        Self::try_load(fs, dir).ok().flatten()
    }

    /// 設定を読み込む（不正な場合はエラー）
    pub fn try_load(fs: &dyn FileSystem, dir: &Path) -> Result<Option<Self>> {
        let path = config_path(dir);
        if !fs.exists(&path) {
            return Ok(None);
        }

        let content = fs.read_to_string(&path)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| ApexError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(Some(config))
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(ApexError::InvalidConfig("version is empty".to_string()));
        }

        let paths = [
            ("paths.components", &self.paths.components),
            ("paths.lib", &self.paths.lib),
            ("paths.hooks", &self.paths.hooks),
        ];
        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(ApexError::InvalidConfig(format!("{} is empty", key)));
            }
        }

        if self.aliases.enabled {
            let aliases = [
                ("aliases.components", &self.aliases.components),
                ("aliases.lib", &self.aliases.lib),
                ("aliases.hooks", &self.aliases.hooks),
            ];
            for (key, value) in aliases {
                if value.trim().is_empty() {
                    return Err(ApexError::InvalidConfig(format!(
                        "{} is empty while aliases are enabled",
                        key
                    )));
                }
            }
        }

        Ok(())
    }

    /// 設定を書き出す（2スペースインデント）
    pub fn write(&self, fs: &dyn FileSystem, dir: &Path) -> Result<()> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        fs.write(&config_path(dir), json.as_bytes())
    }

    /// インポート書き換え用のビュー
    pub fn import_layout(&self) -> ImportLayout {
        ImportLayout {
            aliases_enabled: self.aliases.enabled,
            components: self.aliases.components.clone(),
            lib: self.aliases.lib.clone(),
            hooks: self.aliases.hooks.clone(),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
