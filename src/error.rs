mod code;
mod formatter;
mod rich;

pub use code::ErrorCode;
pub use formatter::ErrorFormatter;
pub use rich::{ErrorContext, RichError};

use std::path::PathBuf;
use thiserror::Error;

/// APEX統一エラー型
#[derive(Debug, Error)]
pub enum ApexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("apex.config.json not found in {}. Run 'apex init' first", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration: {0}. Run 'apex init' to regenerate it")]
    InvalidConfig(String),

    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("{manager} failed: {message}")]
    Install { manager: String, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ApexError>;

impl ApexError {
    /// エラーコードを取得
    pub fn code(&self) -> ErrorCode {
        match self {
            ApexError::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::Io001,
                std::io::ErrorKind::PermissionDenied => ErrorCode::Io002,
                _ => ErrorCode::Int001,
            },
            ApexError::Json(_) => ErrorCode::Reg002,
            ApexError::ConfigNotFound(_) => ErrorCode::Cfg001,
            ApexError::InvalidConfig(_) => ErrorCode::Cfg002,
            ApexError::Registry(_) => ErrorCode::Reg001,
            ApexError::SourceNotFound { .. } => ErrorCode::Io001,
            ApexError::Install { .. } => ErrorCode::Ins001,
            ApexError::InvalidArgument(_) => ErrorCode::Val001,
        }
    }

    /// CLI表示用の RichError に変換
    pub fn to_rich(&self) -> RichError {
        let context = match self {
            ApexError::ConfigNotFound(dir) => ErrorContext::new().with_file_path(dir),
            ApexError::SourceNotFound { path } => ErrorContext::new().with_file_path(path),
            ApexError::Install { manager, .. } => {
                ErrorContext::new().with_additional("package manager", manager)
            }
            _ => ErrorContext::new(),
        };
        RichError::new(self.code(), self.to_string()).with_context(context)
    }
}
