//! Unified error types for the monitor.
//!
//! Commands return [`MonResult`], an alias for `anyhow::Result`. Structured
//! failures are described by [`MonError`] and converted with `?`; ad-hoc ones
//! use `anyhow::bail!`. Only the dispatcher turns an error into console output,
//! so a failing command never stops the monitor.
//!
//! ```ignore
//! anyhow::ensure!(ctx.args.len() == 2, MonError::Usage(USAGE));
//! let addr = parse_number(token)?;
//! ```

use alloc::string::String;
use core::fmt;

/// Result type alias using anyhow::Error.
pub type MonResult<T> = anyhow::Result<T>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonError {
    /// Wrong argument count or shape; carries the usage line.
    Usage(&'static str),
    /// The line holds more tokens than the argument vector can take.
    TooManyArgs(usize),
    UnknownCommand(String),
    InvalidNumber(String),
    LoggerInitFailed,
}

impl fmt::Display for MonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(usage) => write!(f, "Usage: {usage}"),
            Self::TooManyArgs(max) => write!(f, "Too many arguments (max {max})"),
            Self::UnknownCommand(name) => write!(f, "Unknown command '{name}'"),
            Self::InvalidNumber(token) => write!(f, "Invalid number '{token}'"),
            Self::LoggerInitFailed => write!(f, "logger already initialized"),
        }
    }
}

impl core::error::Error for MonError {}

/// Parse a number the way C `strtol(s, NULL, 0)` does: `0x`/`0X` selects hex,
/// a leading `0` selects octal, anything else is decimal.
pub fn parse_number(token: &str) -> MonResult<usize> {
    let (digits, radix) = if let Some(hex) = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
    {
        (hex, 16)
    } else if token.len() > 1 && token.starts_with('0') {
        (&token[1..], 8)
    } else {
        (token, 10)
    };

    // A sign is only accepted in front of the whole number.
    if radix != 10 && digits.starts_with(['+', '-']) {
        return Err(MonError::InvalidNumber(String::from(token)).into());
    }
    usize::from_str_radix(digits, radix)
        .map_err(|_| MonError::InvalidNumber(String::from(token)).into())
}
