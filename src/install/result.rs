//! インストール結果の定義

use super::plan::PlannedFile;

/// ファイル書き込みの結果
#[derive(Debug, Clone, Default)]
pub struct InstallResult {
    /// 書き込まれたファイル
    pub written: Vec<PlannedFile>,
    /// 失敗したファイル
    pub failed: Vec<FileFailure>,
}

impl InstallResult {
    pub fn written_count(&self) -> usize {
        self.written.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// 全て成功したか
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// 1ファイル以上書き込まれたコンポーネント名（計画順、重複なし）
    pub fn written_components(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for planned in &self.written {
            if !names.contains(&planned.component.as_str()) {
                names.push(&planned.component);
            }
        }
        names
    }
}

/// 書き込み失敗
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub file: PlannedFile,
    /// エラーメッセージ
    pub error: String,
}

impl FileFailure {
    pub fn new(file: PlannedFile, error: impl Into<String>) -> Self {
        Self {
            file,
            error: error.into(),
        }
    }
}
