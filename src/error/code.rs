/// Error codes with category prefix
///
/// Categories:
/// - CFG: Project configuration (apex.config.json)
/// - REG: Component registry
/// - IO: File system operations
/// - INS: Package manager invocation
/// - VAL: Input validation errors
/// - INT: Unexpected internal errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Config errors (CFG001-CFG099)
    /// Config file not found
    Cfg001,
    /// Invalid config format
    Cfg002,

    // Registry errors (REG001-REG099)
    /// Registry index unavailable
    Reg001,
    /// Invalid component record
    Reg002,

    // I/O errors (IO001-IO099)
    /// File not found
    Io001,
    /// Permission denied
    Io002,

    // Install errors (INS001-INS099)
    /// Package manager failed
    Ins001,

    // Validation errors (VAL001-VAL099)
    /// Invalid argument
    Val001,

    // Internal errors (INT001-INT099)
    /// Unexpected internal error
    Int001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "CFG001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Reg001 => "REG001",
            ErrorCode::Reg002 => "REG002",
            ErrorCode::Io001 => "IO001",
            ErrorCode::Io002 => "IO002",
            ErrorCode::Ins001 => "INS001",
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Int001 => "INT001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            ErrorCode::Cfg001 => "The project has not been initialized for APEX",
            ErrorCode::Cfg002 => "The configuration file has an invalid format",
            ErrorCode::Reg001 => "The component registry could not be read",
            ErrorCode::Reg002 => "A registry record is invalid or corrupted",
            ErrorCode::Io001 => "The specified file or directory was not found",
            ErrorCode::Io002 => "Permission denied when accessing the file or directory",
            ErrorCode::Ins001 => "The package manager exited with an error",
            ErrorCode::Val001 => "An invalid argument was provided",
            ErrorCode::Int001 => "An unexpected internal error occurred",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            ErrorCode::Cfg001 => "1. Run 'apex init' in the project root\n2. Make sure you are in the right directory",
            ErrorCode::Cfg002 => "1. Check the apex.config.json syntax\n2. Re-run 'apex init' to regenerate it",
            ErrorCode::Reg001 => "1. Pass --registry <DIR> pointing at the registry root\n2. Or set APEX_REGISTRY\n3. Reinstall apex if the bundled registry is missing",
            ErrorCode::Reg002 => "1. Reinstall apex\n2. Report the broken record to the catalog maintainers",
            ErrorCode::Io001 => "1. Verify the file path is correct\n2. Check if the file was moved or deleted",
            ErrorCode::Io002 => "1. Check file/directory permissions\n2. Verify ownership of the destination directory",
            ErrorCode::Ins001 => "1. Install the listed packages manually\n2. Check that the package manager is on PATH",
            ErrorCode::Val001 => "1. Check the argument format\n2. Use 'apex --help' for usage information",
            ErrorCode::Int001 => "1. Try the operation again\n2. Report the issue with --verbose output",
        }
    }

    /// 全エラーコードを取得
    #[cfg(test)]
    pub fn all() -> &'static [ErrorCode] {
        &[
            ErrorCode::Cfg001,
            ErrorCode::Cfg002,
            ErrorCode::Reg001,
            ErrorCode::Reg002,
            ErrorCode::Io001,
            ErrorCode::Io002,
            ErrorCode::Ins001,
            ErrorCode::Val001,
            ErrorCode::Int001,
        ]
    }
}
