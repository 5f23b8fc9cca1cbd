//! 配置先の決定
//!
//! コンポーネント種別と設定から、ファイルの書き込み先と
//! 利用例に表示するインポート指定子を求める。

use crate::config::{DirPaths, ProjectConfig};
use crate::registry::{ComponentFile, ComponentKind, ComponentRecord};
use std::path::{Component, Path, PathBuf};

/// 配置先ディレクトリ（プロジェクトルートからの相対）
///
/// `override_dir` が指定されていれば種別に関係なくそれを使う。
/// 未知の種別は UI と同じ扱い。
pub fn destination_dir(kind: &ComponentKind, paths: &DirPaths, override_dir: Option<&Path>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }

    match kind {
        ComponentKind::Lib => PathBuf::from(&paths.lib),
        ComponentKind::Hook => PathBuf::from(&paths.hooks),
        ComponentKind::Ui | ComponentKind::Other(_) => PathBuf::from(&paths.components),
    }
}

/// プロジェクトルート基準のディレクトリ
///
/// `dir` の `./` は取り除く。絶対パスの `dir` はプロジェクトルートを置き換える。
pub fn project_dir(project_root: &Path, dir: impl AsRef<Path>) -> PathBuf {
    let mut path = project_root.to_path_buf();
    path.extend(
        dir.as_ref()
            .components()
            .filter(|c| !matches!(c, Component::CurDir)),
    );
    path
}

/// ファイルの書き込み先
///
/// 宣言された target のディレクトリ部分は無視し、ベース名だけを使う。
pub fn target_path(project_root: &Path, dir: &Path, file: &ComponentFile) -> PathBuf {
    project_dir(project_root, dir).join(file.target_file_name())
}

/// 利用例に表示するインポート指定子
pub fn import_path(record: &ComponentRecord, config: &ProjectConfig) -> String {
    let base = if config.aliases.enabled {
        &config.aliases.components
    } else {
        &config.paths.components
    };
    format!("{}/{}", base.trim_end_matches('/'), record.name)
}

#[cfg(test)]
#[path = "placement_test.rs"]
mod tests;
