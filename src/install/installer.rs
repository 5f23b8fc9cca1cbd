//! 外部パッケージのインストール

use crate::error::{ApexError, Result};
use crate::project::PackageManager;
use std::future::Future;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// パッケージインストールの実行者
pub trait DependencyInstaller {
    /// パッケージを追加する（空リストは何もしない）
    fn install(
        &self,
        packages: &[String],
        manager: PackageManager,
        cwd: &Path,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// パッケージマネージャをサブプロセスとして実行する
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessInstaller;

impl DependencyInstaller for ProcessInstaller {
    async fn install(&self, packages: &[String], manager: PackageManager, cwd: &Path) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        let (program, args) = manager.install_command();
        let output = Command::new(program)
            .args(args)
            .args(packages)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ApexError::Install {
                manager: program.to_string(),
                message: format!("failed to start: {}", e),
            })?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .map(|l| l.trim().to_string())
            .unwrap_or_else(|| output.status.to_string());

        Err(ApexError::Install {
            manager: program.to_string(),
            message: detail,
        })
    }
}

/// 手動インストール用のコマンドライン
pub fn manual_install_command(manager: PackageManager, packages: &[String]) -> String {
    let (program, args) = manager.install_command();
    let mut parts: Vec<&str> = vec![program];
    parts.extend(args.iter().copied());
    parts.extend(packages.iter().map(String::as_str));
    parts.join(" ")
}
