//! Flag association table
//!
//! Built once from an argument vector with a single left-to-right scan.
//! Every token starting with `-` becomes a key. Its value is the next token
//! when that token is not itself a flag, otherwise the string `"true"`.
//! Positional tokens that do not follow a flag are dropped.
//!
//! ```
//! use parseropt::OptionTable;
//!
//! let table = OptionTable::from_args(["prog", "-u", "nine", "-v"]);
//! assert_eq!(table.get("-u"), "nine");
//! assert_eq!(table.get("-v"), "true");
//! assert_eq!(table.get("-x"), "");
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;
use std::ops::Index;

use tracing::{debug, trace};

use crate::convert::FromArg;

/// Value stored for a flag with no trailing value token
pub const FLAG_PRESENT: &str = "true";

/// Whether a token is a flag. Empty tokens are not.
#[inline]
pub fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Mapping from flag token to its associated value, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionTable {
    entries: BTreeMap<String, String>,
}

impl OptionTable {
    /// Build the table from an argument vector
    ///
    /// Index 0 is usually the program path; it is only treated as a flag if
    /// it starts with `-`. A repeated flag keeps its last value.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let mut entries = BTreeMap::new();

        for (i, arg) in args.iter().enumerate() {
            if !is_flag(arg) {
                continue;
            }

            let value = match args.get(i + 1) {
                Some(next) if !is_flag(next) => next.clone(),
                _ => FLAG_PRESENT.to_string(),
            };

            trace!(flag = %arg, value = %value, "Paired flag");
            entries.insert(arg.clone(), value);
        }

        debug!(args = args.len(), entries = entries.len(), "Built option table");

        Self { entries }
    }

    /// Exact-match membership test
    pub fn has(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// True if any of the aliases is present
    pub fn has_any(&self, aliases: &[&str]) -> bool {
        aliases.iter().any(|alias| self.has(alias))
    }

    /// Value for `token`, or `""` when absent
    pub fn get(&self, token: &str) -> &str {
        self.entries.get(token).map(String::as_str).unwrap_or("")
    }

    /// First non-empty value among `aliases`, or `""`
    pub fn first_of(&self, aliases: &[&str]) -> &str {
        aliases
            .iter()
            .map(|alias| self.get(alias))
            .find(|value| !value.is_empty())
            .unwrap_or("")
    }

    /// Converted value for `token`, if present
    pub fn get_as<T: FromArg>(&self, token: &str) -> Option<T> {
        self.entries.get(token).map(|value| T::from_arg(value))
    }

    /// Number of consecutive keys `"0"`, `"1"`, `"2"`, ... present
    ///
    /// This is not the entry count; see [`OptionTable::len`] for that.
    pub fn size(&self) -> usize {
        (0usize..).take_while(|i| self.has(&i.to_string())).count()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl Index<&str> for OptionTable {
    type Output = str;

    /// Missing keys index to `""` rather than panicking
    fn index(&self, token: &str) -> &str {
        self.get(token)
    }
}

impl<'a> IntoIterator for &'a OptionTable {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders `key value` pairs separated by single spaces, in key order
impl fmt::Display for OptionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for (key, value) in &self.entries {
            write!(f, "{}{} {}", sep, key, value)?;
            sep = " ";
        }
        Ok(())
    }
}
