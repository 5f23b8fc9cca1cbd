//! レジストリの値オブジェクト

use serde::{Deserialize, Serialize};

/// registry.json のスキーマ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryIndex {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub components: Vec<String>,
}

impl RegistryIndex {
    /// カタログに含まれるか
    pub fn contains(&self, name: &str) -> bool {
        self.components.iter().any(|c| c == name)
    }
}

/// 配置種別
///
/// 未知の値はエラーにせず `Other` として保持する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentKind {
    /// UIコンポーネント（registry:ui）
    Ui,
    /// ユーティリティ（registry:lib）
    Lib,
    /// フック（registry:hook）
    Hook,
    /// 未知の種別
    Other(String),
}

impl ComponentKind {
    /// 識別子文字列を取得
    pub fn as_str(&self) -> &str {
        match self {
            ComponentKind::Ui => "registry:ui",
            ComponentKind::Lib => "registry:lib",
            ComponentKind::Hook => "registry:hook",
            ComponentKind::Other(raw) => raw,
        }
    }

    /// 表示名を取得
    pub fn display_name(&self) -> &str {
        match self {
            ComponentKind::Ui => "UI",
            ComponentKind::Lib => "Library",
            ComponentKind::Hook => "Hook",
            ComponentKind::Other(raw) => raw,
        }
    }
}

impl From<String> for ComponentKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "registry:ui" => ComponentKind::Ui,
            "registry:lib" => ComponentKind::Lib,
            "registry:hook" => ComponentKind::Hook,
            _ => ComponentKind::Other(raw),
        }
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// コンポーネントに含まれるファイル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFile {
    /// レジストリルートからの相対パス
    pub path: String,
    /// 配置先ファイル名（ベース名のみ使用される）
    pub target: String,
}

impl ComponentFile {
    /// 配置先のベース名
    pub fn target_file_name(&self) -> &str {
        self.target
            .rsplit(['/', '\\'])
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.target)
    }
}

/// components/<name>.json のスキーマ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub files: Vec<ComponentFile>,
    /// 外部パッケージ（"name" または "name@version"）
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub exports: Vec<String>,
}

impl ComponentRecord {
    /// 外部依存をパースして取得
    pub fn external_dependencies(&self) -> Vec<ExternalDependency> {
        self.dependencies
            .iter()
            .map(|d| ExternalDependency::parse(d))
            .collect()
    }

    /// 表示用タイトル（未設定なら name）
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            &self.name
        } else {
            &self.title
        }
    }
}

/// 外部パッケージ指定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalDependency {
    pub name: String,
    pub version: Option<String>,
}

impl ExternalDependency {
    /// "name@version" をパース
    ///
    /// 先頭の `@`（スコープ）はバージョン区切りとして扱わない。
    ///
    /// # Edge Cases
    /// * `"clsx"` → `clsx`, None
    /// * `"clsx@2.1.0"` → `clsx`, `2.1.0`
    /// * `"@radix-ui/react-dialog"` → `@radix-ui/react-dialog`, None
    /// * `"@radix-ui/react-dialog@1.0.5"` → `@radix-ui/react-dialog`, `1.0.5`
    pub fn parse(spec: &str) -> Self {
        match spec.rfind('@') {
            Some(idx) if idx > 0 => Self {
                name: spec[..idx].to_string(),
                version: Some(spec[idx + 1..].to_string()),
            },
            _ => Self {
                name: spec.to_string(),
                version: None,
            },
        }
    }
}

/// ユーザー入力のコンポーネント名を正規化（小文字化、空白をハイフンに）
pub fn normalize_component_name(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// カテゴリごとにグループ化
///
/// カテゴリの出現順、カテゴリ内はレコード順を保持する。
pub fn group_by_category(records: &[ComponentRecord]) -> Vec<(String, Vec<&ComponentRecord>)> {
    let mut groups: Vec<(String, Vec<&ComponentRecord>)> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, items)) => items.push(record),
            None => groups.push((record.category.clone(), vec![record])),
        }
    }
    groups
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
