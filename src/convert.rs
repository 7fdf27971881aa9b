//! Typed value conversion
//!
//! Turns a stored option value into a requested type. Conversion never
//! fails: when the text does not parse as the target type, the value's
//! truthiness is used instead (`""`, `"0"` and `"false"` are false,
//! anything else is true), coerced to `0`/`1` for numeric targets.

use std::fmt;

/// Truthiness fallback used when a value does not parse as the target type
#[inline]
pub fn is_truthy(value: &str) -> bool {
    !value.is_empty() && value != "0" && value != "false"
}

/// Convert to `bool`: `"true"`/`"false"`, otherwise truthiness
pub fn to_bool(value: &str) -> bool {
    value.parse::<bool>().unwrap_or_else(|_| is_truthy(value))
}

/// Convert to `i64`, falling back to truthiness as `0`/`1`
pub fn to_int(value: &str) -> i64 {
    i64::from_arg(value)
}

/// Convert to `f64`, falling back to truthiness as `0.0`/`1.0`
pub fn to_float(value: &str) -> f64 {
    f64::from_arg(value)
}

/// Convert to a single `char`
///
/// A one-character value is returned as that character. Anything else goes
/// through the `i32` path and is narrowed to a byte, so `"65"` becomes
/// `'A'` and `"true"` becomes `'\u{1}'`. Values outside `i32` fall back
/// to truthiness before narrowing.
pub fn to_char(value: &str) -> char {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => (i32::from_arg(value) as u8) as char,
    }
}

/// Types an option value can be converted into
///
/// Implemented for `bool`, every primitive integer, `f32`/`f64`, `char`
/// and `String`. `String` returns the stored value untouched.
pub trait FromArg: Sized {
    fn from_arg(value: &str) -> Self;
}

impl FromArg for bool {
    fn from_arg(value: &str) -> Self {
        to_bool(value)
    }
}

impl FromArg for char {
    fn from_arg(value: &str) -> Self {
        to_char(value)
    }
}

impl FromArg for String {
    fn from_arg(value: &str) -> Self {
        value.to_string()
    }
}

macro_rules! impl_from_arg_int {
    ($($t:ty),*) => {
        $(
            impl FromArg for $t {
                fn from_arg(value: &str) -> Self {
                    value.parse::<$t>().unwrap_or_else(|_| is_truthy(value) as $t)
                }
            }
        )*
    };
}

macro_rules! impl_from_arg_float {
    ($($t:ty),*) => {
        $(
            impl FromArg for $t {
                fn from_arg(value: &str) -> Self {
                    value.parse::<$t>().unwrap_or_else(|_| if is_truthy(value) { 1.0 } else { 0.0 })
                }
            }
        )*
    };
}

impl_from_arg_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_from_arg_float!(f32, f64);

/// Runtime-selected conversion target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Bool,
    Integer,
    Float,
    Char,
    Str,
}

/// Result of a [`Conversion`]
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Conversion {
    /// Convert `value` into the variant selected by `self`
    pub fn apply(self, value: &str) -> ArgValue {
        match self {
            Conversion::Bool => ArgValue::Bool(to_bool(value)),
            Conversion::Integer => ArgValue::Integer(to_int(value)),
            Conversion::Float => ArgValue::Float(to_float(value)),
            Conversion::Char => ArgValue::Char(to_char(value)),
            Conversion::Str => ArgValue::Str(value.to_string()),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Bool(b) => write!(f, "{}", b),
            ArgValue::Integer(n) => write!(f, "{}", n),
            ArgValue::Float(x) => write!(f, "{}", x),
            ArgValue::Char(c) => write!(f, "{}", c),
            ArgValue::Str(s) => f.write_str(s),
        }
    }
}
