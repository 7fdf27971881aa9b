//! Process command line acquisition
//!
//! The argument vector can come from the runtime (`std::env::args_os`) or,
//! on Linux, from the kernel's per-process record at `/proc/self/cmdline`,
//! which holds every argument terminated by a NUL byte.

use std::path::Path;

use tracing::{debug, warn};

use crate::errors::Result;

/// Path of the per-process command line record
pub const PROC_CMDLINE: &str = "/proc/self/cmdline";

/// Arguments as supplied by the runtime, lossily converted to UTF-8
pub fn env_args() -> Vec<String> {
    std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Split a NUL-separated command line record into tokens
///
/// A single trailing NUL terminates the last token. Interior runs of NULs
/// yield empty tokens.
///
/// ```
/// use parseropt::cmdline::split_nul;
///
/// assert_eq!(split_nul(b"prog\0-v\0"), vec!["prog", "-v"]);
/// assert_eq!(split_nul(b"a\0\0b"), vec!["a", "", "b"]);
/// assert!(split_nul(b"").is_empty());
/// ```
pub fn split_nul(record: &[u8]) -> Vec<String> {
    if record.is_empty() {
        return Vec::new();
    }

    let record = record.strip_suffix(b"\0").unwrap_or(record);
    record
        .split(|&b| b == 0)
        .map(|token| String::from_utf8_lossy(token).into_owned())
        .collect()
}

/// Read and split a command line record file
pub fn read_cmdline_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let record = std::fs::read(path.as_ref())?;
    Ok(split_nul(&record))
}

/// Read this process's arguments from `/proc/self/cmdline`
pub fn read_proc_cmdline() -> Result<Vec<String>> {
    read_cmdline_file(PROC_CMDLINE)
}

/// This process's arguments, preferring the kernel record
///
/// Falls back to the runtime arguments when the record cannot be read
/// (non-Linux platforms, restricted sandboxes) or is empty.
pub fn process_args() -> Vec<String> {
    match read_proc_cmdline() {
        Ok(args) if !args.is_empty() => {
            debug!(source = PROC_CMDLINE, count = args.len(), "Read process arguments");
            args
        }
        Ok(_) => {
            debug!("Empty command line record, using runtime arguments");
            env_args()
        }
        Err(e) => {
            if cfg!(target_os = "linux") {
                warn!(error = %e, "Failed to read {}, using runtime arguments", PROC_CMDLINE);
            }
            env_args()
        }
    }
}

/// Arguments joined with single spaces, for printing how the app was invoked
pub fn invocation<S: AsRef<str>>(args: &[S]) -> String {
    args.iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}
