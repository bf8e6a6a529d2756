use std::path::PathBuf;

use crate::level::SemLevel;

/// Errors raised while parsing or bumping a [`Version`](crate::Version).
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    /// The text holds no `major.minor` digit pair, or a number does not fit.
    #[error("Version string `{input}` is not of semantic versioning format")]
    InvalidFormat {
        /// The text that failed to parse.
        input: String,
    },

    /// An argument was out of its accepted range, such as a bump amount below one.
    #[error("{reason}")]
    InvalidArgument {
        /// Human-readable reason.
        reason: String,
    },

    /// Bumping would overflow the numeric field.
    #[error("Bumping `{level}` would overflow")]
    Overflow {
        /// The level being bumped.
        level: SemLevel,
    },
}

/// Errors raised while building a [`Date`](crate::Date) or a
/// [`DateFormat`](crate::DateFormat).
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DateError {
    /// The date string was not `YYYY-MM-DD`, or does not name a real date.
    #[error("Unparseable date: {0}")]
    UnparseableDate(#[from] chrono::ParseError),

    /// Explicit arguments do not make a real date/time.
    #[error("Explicit year ({year}), month ({month}), and day ({day}) arguments cannot be made into a valid date")]
    InvalidDateArguments {
        /// Year argument.
        year: i32,
        /// Month argument.
        month: u32,
        /// Day argument.
        day: u32,
    },

    /// The display pattern holds an unknown or unterminated `%` directive.
    #[error("Date format `{format}` is not a valid strftime pattern")]
    InvalidFormat {
        /// The rejected pattern.
        format: String,
    },
}

/// Errors raised by the [`VersionStore`](crate::VersionStore).
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    /// The store directory or the blob file does not exist.
    #[error("Version path does not exist: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path exists but is of the wrong kind (a file where a directory was expected, or vice
    /// versa).
    #[error("Version path is not of the expected kind: {}", path.display())]
    InvalidState {
        /// The offending path.
        path: PathBuf,
    },

    /// The blob exists but could not be decoded.
    #[error("Version blob is corrupt: {reason}")]
    Corrupt {
        /// What was wrong with the blob.
        reason: String,
    },

    /// Any other I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while injecting into a file. Any of them aborts the whole file: nothing is
/// written.
#[derive(thiserror::Error, Debug)]
pub enum InjectError {
    /// No line in the file contains the marker (or every marker was on the last line).
    #[error("Marker `{marker}` was not found")]
    MarkerNotFound {
        /// The marker that was searched for.
        marker: String,
    },

    /// The line below a version marker holds no version token.
    #[error("No valid version pattern found in line under version marker: {line:?}")]
    NoVersionToken {
        /// The line that was inspected.
        line: String,
    },

    /// The line below a date marker holds no recognizable date.
    #[error("No valid date format was found in marked line: {line:?}")]
    NoDateFound {
        /// The line that was inspected.
        line: String,
    },

    /// Reading or writing the file failed.
    #[error("Could not access {}: {source}", path.display())]
    Io {
        /// The file being injected.
        path: PathBuf,
        /// The underlying failure.
        source: std::io::Error,
    },
}

/// Errors raised by a [`Program`](crate::Program).
#[derive(thiserror::Error, Debug)]
pub enum ProgramError {
    /// The command name was empty.
    #[error("Program executable cannot be empty")]
    InvalidArgument,

    /// The program is required but was not found in `PATH`.
    #[error("{name} was not found within the PATH. Ensure `{command}` is installed")]
    NotFound {
        /// Formal name of the program.
        name: String,
        /// The command that was looked up.
        command: String,
    },

    /// The program is required but did not exit successfully.
    #[error("{name} was not runnable. Ensure `{command}` is configured")]
    NotRunnable {
        /// Formal name of the program.
        name: String,
        /// The command that was run.
        command: String,
    },

    /// Spawning or waiting on the process failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
