//! レジストリストア
//!
//! レジストリルート（注入されたベースディレクトリ）配下の
//! `registry/registry.json` と `registry/components/<name>.json` を読み込む。
//! コンポーネントのソースパスはレジストリルートからの相対パスとして解決する。

use super::model::{ComponentFile, ComponentRecord, RegistryIndex};
use crate::env::{EnvVar, REGISTRY_ENV};
use crate::error::{ApexError, Result};
use crate::fs::FileSystem;
use crate::resolve::{ComponentSource, Lookup};
use std::path::{Path, PathBuf};

/// レジストリディレクトリ名
pub(crate) const REGISTRY_DIR: &str = "registry";
/// カタログファイル名
pub(crate) const INDEX_FILE: &str = "registry.json";
/// コンポーネントレコードのディレクトリ名
pub(crate) const COMPONENTS_DIR: &str = "components";

/// レジストリルートを決定
///
/// 優先順位: 1. `--registry` 引数, 2. `APEX_REGISTRY` 環境変数, 3. 実行ファイルのディレクトリ
pub fn resolve_registry_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = EnvVar::get(REGISTRY_ENV) {
        return Ok(PathBuf::from(path));
    }
    std::env::current_exe()?
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| ApexError::Registry("could not determine the registry location".to_string()))
}

/// レコード読み込み時の警告
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// カタログに載っているがレコードファイルがない
    Missing(String),
    /// レコードファイルが壊れている
    Invalid { name: String, message: String },
}

impl std::fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadWarning::Missing(name) => {
                write!(f, "Component \"{}\" is listed but has no record", name)
            }
            LoadWarning::Invalid { name, message } => {
                write!(f, "Component \"{}\" has an invalid record: {}", name, message)
            }
        }
    }
}

/// ファイルシステム上のレジストリ
pub struct RegistryStore<'a> {
    fs: &'a dyn FileSystem,
    root: PathBuf,
}

impl<'a> RegistryStore<'a> {
    pub fn new(fs: &'a dyn FileSystem, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
        }
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(REGISTRY_DIR).join(INDEX_FILE)
    }

    fn component_path(&self, name: &str) -> PathBuf {
        self.root
            .join(REGISTRY_DIR)
            .join(COMPONENTS_DIR)
            .join(format!("{}.json", name))
    }

    /// カタログを読み込み
    pub fn load_index(&self) -> Result<RegistryIndex> {
        let path = self.index_path();
        if !self.fs.exists(&path) {
            return Err(ApexError::Registry(format!(
                "registry index not found at {}",
                path.display()
            )));
        }

        let content = self.fs.read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| {
            ApexError::Registry(format!("invalid registry index {}: {}", path.display(), e))
        })
    }

    /// コンポーネントレコードを読み込み
    ///
    /// レコードファイルが存在しない場合は `Ok(None)`。
    /// パス区切りを含む名前はレジストリ外を指しうるため `Ok(None)` とする。
    pub fn load_component(&self, name: &str) -> Result<Option<ComponentRecord>> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Ok(None);
        }

        let path = self.component_path(name);
        if !self.fs.exists(&path) {
            return Ok(None);
        }

        let content = self.fs.read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// ソースファイルの絶対パス
    pub fn source_path(&self, file: &ComponentFile) -> PathBuf {
        self.root.join(&file.path)
    }

    /// ソースファイルを読み込み
    pub fn read_source(&self, file: &ComponentFile) -> Result<String> {
        let path = self.source_path(file);
        if !self.fs.exists(&path) {
            return Err(ApexError::SourceNotFound { path });
        }
        self.fs.read_to_string(&path)
    }

    /// カタログに載っている全レコードを読み込み
    ///
    /// 読み込めないレコードは警告として返し、処理は継続する。
    pub fn load_catalog(&self, index: &RegistryIndex) -> (Catalog, Vec<LoadWarning>) {
        let mut records = Vec::new();
        let mut warnings = Vec::new();

        for name in &index.components {
            match self.load_component(name) {
                Ok(Some(record)) => records.push(record),
                Ok(None) => warnings.push(LoadWarning::Missing(name.clone())),
                Err(e) => warnings.push(LoadWarning::Invalid {
                    name: name.clone(),
                    message: e.to_string(),
                }),
            }
        }

        (Catalog::from_records(records), warnings)
    }
}

impl ComponentSource for RegistryStore<'_> {
    fn lookup(&self, name: &str) -> Lookup {
        match self.load_component(name) {
            Ok(Some(record)) => Lookup::Found(record),
            Ok(None) => Lookup::Absent,
            Err(e) => Lookup::Invalid(e.to_string()),
        }
    }
}

/// メモリ上のカタログ
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ComponentRecord>,
}

impl Catalog {
    pub fn from_records(records: Vec<ComponentRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ComponentRecord] {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&ComponentRecord> {
        self.records.iter().find(|r| r.name == name)
    }
}

impl ComponentSource for Catalog {
    fn lookup(&self, name: &str) -> Lookup {
        match self.get(name) {
            Some(record) => Lookup::Found(record.clone()),
            None => Lookup::Absent,
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
