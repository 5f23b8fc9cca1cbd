//! インストール Feature
//!
//! 解決済みコンポーネントを配置計画に変換し、ソースを書き換えて
//! プロジェクトへ書き込む。外部パッケージはパッケージマネージャに委譲する。
//!
//! ## 使い方
//!
//! ```ignore
//! use apex::install::{InstallExecutor, InstallPlan};
//!
//! let plan = InstallPlan::build(&resolved, &config, None, &project_root, &RealFs);
//! if plan.has_conflicts() && !overwrite {
//!     // 確認を取る
//! }
//!
//! let result = InstallExecutor::new(&store, &RealFs, &config).execute(&plan, |_| {});
//! println!("Written: {}", result.written_count());
//! ```

mod installer;
mod plan;
mod result;

pub use installer::{manual_install_command, DependencyInstaller, ProcessInstaller};
pub use plan::{Collision, InstallPlan, PlannedFile};
pub use result::{FileFailure, InstallResult};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::registry::RegistryStore;
use crate::resolve::ResolvedSet;
use crate::transform::{rewrite_imports, ImportLayout};

/// 外部パッケージ名を収集（バージョン除去、重複除去、初出順）
pub fn collect_external_dependencies(resolved: &ResolvedSet) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for component in resolved.components() {
        for dep in component.external_dependencies() {
            if !names.contains(&dep.name) {
                names.push(dep.name);
            }
        }
    }
    names
}

/// 配置計画の実行
pub struct InstallExecutor<'a> {
    store: &'a RegistryStore<'a>,
    fs: &'a dyn FileSystem,
    layout: ImportLayout,
}

impl<'a> InstallExecutor<'a> {
    pub fn new(store: &'a RegistryStore<'a>, fs: &'a dyn FileSystem, config: &ProjectConfig) -> Self {
        Self {
            store,
            fs,
            layout: config.import_layout(),
        }
    }

    /// 計画の全ファイルを書き込む
    ///
    /// 1ファイルごとに `on_file` を呼ぶ。
    /// 失敗したファイルは `failed` に記録し、残りのファイルの処理を続ける。
    pub fn execute<F>(&self, plan: &InstallPlan, mut on_file: F) -> InstallResult
    where
        F: FnMut(&PlannedFile),
    {
        let mut result = InstallResult::default();

        for planned in plan.files() {
            on_file(planned);
            match self.install_file(planned) {
                Ok(()) => result.written.push(planned.clone()),
                Err(e) => result
                    .failed
                    .push(FileFailure::new(planned.clone(), e.to_string())),
            }
        }

        result
    }

    fn install_file(&self, planned: &PlannedFile) -> Result<()> {
        let source = self.store.read_source(&planned.file)?;
        let rewritten = rewrite_imports(&source, &self.layout);

        if let Some(parent) = planned.target.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write(&planned.target, rewritten.as_bytes())
    }
}

#[cfg(test)]
#[path = "install_test.rs"]
mod tests;
