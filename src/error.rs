//! Error taxonomy: definition errors vs usage errors
//!
//! Definition errors are programmer mistakes surfaced synchronously while
//! building a registry. Usage errors are user-input failures during loading;
//! they carry the exit status a process shell should terminate with.

use thiserror::Error;

/// Registry construction/mutation failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// Parameter names must not contain whitespace.
    #[error("parameter name {name:?} contains whitespace")]
    InvalidName { name: String },

    /// Database names are unique; the offending name is reported.
    #[error("duplicated parameter name {name:?} found")]
    DuplicateName { name: String },

    /// Explicit flag spellings must be `-c` or `--long`.
    #[error("invalid flag spelling {flag:?} (expected '-c' or '--long')")]
    InvalidFlag { flag: String },
}

/// A user-input failure during loading.
///
/// Unknown flags, conversion failures, and choice violations all carry
/// status 2 with the parser's rendered diagnostic; help output carries
/// status 0. Callers that need process termination call [`UsageError::exit`];
/// `load` itself never exits, so the contract stays testable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UsageError {
    status: i32,
    message: String,
}

impl UsageError {
    pub(crate) fn new(status: i32, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Exit status the process shell should terminate with (2 for usage
    /// errors, 0 for help output).
    pub fn status(&self) -> i32 {
        self.status
    }

    /// The rendered diagnostic.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Emit the diagnostic and terminate the process with the carried status.
    ///
    /// Nonzero statuses write to stderr, status 0 (help text) to stdout.
    pub fn exit(&self) -> ! {
        if self.status == 0 {
            print!("{}", self.message);
        } else {
            eprint!("{}", self.message);
        }
        std::process::exit(self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_message_names_offender() {
        let err = DefinitionError::DuplicateName { name: "param1".into() };
        assert!(err.to_string().contains("param1"));
    }

    #[test]
    fn test_usage_error_carries_status() {
        let err = UsageError::new(2, "unrecognized arguments: --nope\n");
        assert_eq!(err.status(), 2);
        assert!(err.message().contains("--nope"));
    }
}
