//! parseropt library interface
//!
//! A minimal command-line option lookup with two access patterns:
//!
//! - [`lookup`] returns a typed value for a list of alias flags, falling
//!   back to a default. No setup is needed; the process's own arguments are
//!   read once on first use.
//! - [`OptionTable`] is built explicitly from an argument vector and
//!   supports membership queries, typed extraction and printing.
//!
//! # Module Organization
//!
//! - [`table`] - Flag/value pairing (OptionTable)
//! - [`convert`] - Typed value conversion (FromArg)
//! - [`lookup`](mod@lookup) - Alias-resolving lookup and the process-wide table
//! - [`cmdline`] - Reading the process command line
//! - [`errors`] - Error types (ParseroptError, Result)

pub mod cmdline;
pub mod config;
pub mod convert;
pub mod demo;
pub mod errors;
pub mod logging;
pub mod lookup;
pub mod status;
pub mod table;

pub use convert::{ArgValue, Conversion, FromArg};
pub use errors::{ParseroptError, Result};
pub use lookup::{init_process_table, lookup, lookup_in, process_table};
pub use table::OptionTable;
