//! Custom exit codes for the m365 application
//!
//! Each failure class maps to a distinct exit code so that scripts can tell a
//! rejected invocation apart from a failed remote call.

/// Exit codes reported by `m365`
///
/// These codes follow the BSD sysexits.h conventions where possible:
/// - 0: Success
/// - 64-78: Standard exit codes from sysexits.h
/// - 100+: Custom application-specific codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum M365ExitCode {
    /// Success (0) - Command completed successfully
    Success = 0,

    /// Command line usage error (64) - invalid or conflicting options
    UsageError = 64,

    /// Data format error (65) - output could not be rendered
    DataError = 65,

    /// Internal software error (70) - Unexpected application error
    SoftwareError = 70,

    /// Configuration error (78) - Application configuration issue
    ConfigError = 78,

    /// Authentication error (100) - no usable access token
    AuthError = 100,

    /// API error (102) - Remote API returned an error
    ApiError = 102,
}

impl M365ExitCode {
    /// Convert to numeric exit code
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<M365ExitCode> for i32 {
    fn from(code: M365ExitCode) -> Self {
        code.code()
    }
}
