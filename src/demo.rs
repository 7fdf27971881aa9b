//! Demo program
//!
//! Shows both access patterns side by side: alias lookups with typed
//! defaults through the process-wide table, then an explicitly built table
//! with membership queries, followed by a dump of the whole table.

use std::io::Write;

use tracing::debug;

use crate::cmdline;
use crate::errors::Result;
use crate::lookup::lookup;
use crate::status::ExitStatus;
use crate::table::OptionTable;

pub const HELP_ALIASES: &[&str] = &["-h", "--help", "-?"];
pub const VERSION_ALIASES: &[&str] = &["-v", "--version", "--show-version"];
pub const USER_ALIASES: &[&str] = &["-u", "--user", "--user-name"];
pub const PASS_ALIASES: &[&str] = &["-p", "--pass", "--password"];

/// Line separating the lookup section from the table dump
pub const SEPARATOR: &str = "--------";

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_DATE: &str = env!("PARSEROPT_BUILD_DATE");

fn write_help<W: Write>(out: &mut W, program: &str) -> Result<()> {
    writeln!(
        out,
        "usage: {} [-h|--help|-?] [-v|--version] [-u name|--user name|--user-name name] [-p password|--pass password]",
        program
    )?;
    Ok(())
}

/// Run the demo, writing to `out`
///
/// The first section reads the process-wide table through [`lookup`]. The
/// second builds its own table from `args` (program name first).
/// `no_args` is true when the user passed nothing on the command line,
/// regardless of any defaults merged into `args`.
pub fn run<W: Write>(args: &[String], no_args: bool, out: &mut W) -> Result<ExitStatus> {
    let program = args.first().map(String::as_str).unwrap_or("parseropt");
    debug!(invocation = %cmdline::invocation(args), "Running demo");

    // Functional API, no table to build
    let help = lookup(false, HELP_ALIASES);
    let version = lookup(0i32, VERSION_ALIASES);
    let name = lookup(String::new(), USER_ALIASES);
    let pass = lookup(String::new(), PASS_ALIASES);

    if help || no_args {
        write_help(out, program)?;
        return Ok(ExitStatus::Success);
    }

    if version != 0 {
        writeln!(out, "{} | demo v{} Compiled on {}", program, VERSION, BUILD_DATE)?;
    }

    if !name.is_empty() {
        writeln!(out, "provided name: {}", name)?;
    }

    if !pass.is_empty() {
        writeln!(out, "provided pass: {}", pass)?;
    }

    // Explicit table API
    let table = OptionTable::from_args(args);

    if table.has_any(HELP_ALIASES) || table.size() == 1 {
        write_help(out, program)?;
        return Ok(ExitStatus::Success);
    }

    if table.has_any(&VERSION_ALIASES[..2]) {
        writeln!(out, "demo v{} Compiled on {}", VERSION, BUILD_DATE)?;
    }

    if table.has_any(USER_ALIASES) {
        writeln!(out, "provided user: {}", table.first_of(USER_ALIASES))?;
    }

    if table.has_any(PASS_ALIASES) {
        writeln!(out, "provided pass: {}", table.first_of(PASS_ALIASES))?;
    }

    writeln!(out, "{}", SEPARATOR)?;
    writeln!(out, "{}", table)?;

    Ok(ExitStatus::Success)
}
