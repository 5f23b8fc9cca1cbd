//! 配置計画

use crate::config::ProjectConfig;
use crate::fs::FileSystem;
use crate::placement::{destination_dir, target_path};
use crate::registry::ComponentFile;
use crate::resolve::ResolvedSet;
use std::path::{Path, PathBuf};

/// 書き込み予定のファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// 所属コンポーネント名
    pub component: String,
    /// レジストリ上のファイル定義
    pub file: ComponentFile,
    /// 書き込み先（絶対パス）
    pub target: PathBuf,
}

/// 複数のファイルが同じ書き込み先を指している
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub target: PathBuf,
    /// (コンポーネント名, ソースパス) の一覧（計画順）
    pub claimants: Vec<(String, String)>,
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let claimants: Vec<String> = self
            .claimants
            .iter()
            .map(|(component, path)| format!("{} ({})", component, path))
            .collect();
        write!(
            f,
            "{} is written by {}",
            self.target.display(),
            claimants.join(", ")
        )
    }
}

/// 配置計画
///
/// 書き込み前に既存ファイルとの衝突を検出する。
#[derive(Debug, Clone, Default)]
pub struct InstallPlan {
    files: Vec<PlannedFile>,
    conflicts: Vec<PathBuf>,
    collisions: Vec<Collision>,
}

impl InstallPlan {
    /// 解決済みコンポーネントの全ファイルについて計画を立てる
    pub fn build(
        resolved: &ResolvedSet,
        config: &ProjectConfig,
        override_dir: Option<&Path>,
        project_root: &Path,
        fs: &dyn FileSystem,
    ) -> Self {
        let mut plan = Self::default();

        for component in resolved.components() {
            let dir = destination_dir(&component.kind, &config.paths, override_dir);
            for file in &component.files {
                plan.files.push(PlannedFile {
                    component: component.name.clone(),
                    file: file.clone(),
                    target: target_path(project_root, &dir, file),
                });
            }
        }

        for planned in &plan.files {
            if fs.exists(&planned.target) && !plan.conflicts.contains(&planned.target) {
                plan.conflicts.push(planned.target.clone());
            }
        }

        plan.collisions = find_collisions(&plan.files);
        plan
    }

    pub fn files(&self) -> &[PlannedFile] {
        &self.files
    }

    /// 既に存在する書き込み先（重複なし、計画順）
    pub fn conflicts(&self) -> &[PathBuf] {
        &self.conflicts
    }

    /// 同じ書き込み先を指すファイルの組
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

fn find_collisions(files: &[PlannedFile]) -> Vec<Collision> {
    let mut collisions: Vec<Collision> = Vec::new();

    for (i, planned) in files.iter().enumerate() {
        if collisions.iter().any(|c| c.target == planned.target) {
            continue;
        }

        let claimants: Vec<(String, String)> = files[i..]
            .iter()
            .filter(|other| other.target == planned.target)
            .map(|other| (other.component.clone(), other.file.path.clone()))
            .collect();

        if claimants.len() > 1 {
            collisions.push(Collision {
                target: planned.target.clone(),
                claimants,
            });
        }
    }

    collisions
}
