//! Alias-resolving lookup
//!
//! `lookup(default, aliases)` returns the first alias whose converted value
//! differs from `default`. An alias that is present but converts to exactly
//! the default is treated like an absent one.
//!
//! The functional form reads a process-wide table built from this
//! process's own arguments on first use. A binary that rewrites its
//! arguments (for example to inject config defaults) can install the table
//! once with [`init_process_table`] before the first lookup.

use once_cell::sync::OnceCell;

use crate::cmdline;
use crate::convert::FromArg;
use crate::table::OptionTable;

/// Process-wide table, set at most once
static PROCESS_TABLE: OnceCell<OptionTable> = OnceCell::new();

/// The table built from this process's command line
///
/// Built from [`cmdline::process_args`] on first access unless
/// [`init_process_table`] ran earlier.
pub fn process_table() -> &'static OptionTable {
    PROCESS_TABLE.get_or_init(|| OptionTable::from_args(cmdline::process_args()))
}

/// Install the process-wide table from `args`
///
/// Returns false, leaving the existing table untouched, if the table was
/// already built or installed.
pub fn init_process_table<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    PROCESS_TABLE.set(OptionTable::from_args(args)).is_ok()
}

/// Look up `aliases` in `table`, in order, returning the first value that
/// differs from `default`
pub fn lookup_in<T>(table: &OptionTable, default: T, aliases: &[&str]) -> T
where
    T: FromArg + PartialEq,
{
    for alias in aliases {
        if let Some(value) = table.get_as::<T>(alias) {
            if value != default {
                return value;
            }
        }
    }
    default
}

/// Look up `aliases` in the process-wide table
///
/// ```no_run
/// let verbose = parseropt::lookup(false, &["-v", "--verbose"]);
/// let port = parseropt::lookup(8080u16, &["-p", "--port"]);
/// let name = parseropt::lookup(String::new(), &["-u", "--user"]);
/// ```
pub fn lookup<T>(default: T, aliases: &[&str]) -> T
where
    T: FromArg + PartialEq,
{
    lookup_in(process_table(), default, aliases)
}
