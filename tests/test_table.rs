//! Option table and lookup tests against the public API

use parseropt::{lookup_in, ArgValue, Conversion, FromArg, OptionTable};

// ============================================================================
// Pairing Tests
// ============================================================================

#[test]
fn test_user_pass_pairing() {
    let table = OptionTable::from_args(["prog", "-u", "nine", "-p", "dreams"]);
    assert!(table.has("-u"));
    assert_eq!(table.get("-p"), "dreams");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_owned_string_input() {
    let args: Vec<String> = vec!["prog".into(), "--user".into(), "nine".into()];
    let table = OptionTable::from_args(&args);
    assert_eq!(table.get("--user"), "nine");
    // The input is left untouched
    assert_eq!(args.len(), 3);
}

#[test]
fn test_has_matches_scanned_keys_only() {
    let args = ["prog", "pos", "-a", "x", "-b", "-c"];
    let table = OptionTable::from_args(args);
    for token in args {
        assert_eq!(table.has(token), token.starts_with('-'), "token {}", token);
    }
}

#[test]
fn test_iter_in_key_order() {
    let table = OptionTable::from_args(["prog", "-z", "1", "-a", "2", "--m", "3"]);
    let keys: Vec<&str> = table.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["--m", "-a", "-z"]);
}

#[test]
fn test_typed_extraction() {
    let table = OptionTable::from_args(["prog", "--port", "8080", "--verbose", "--ratio", "0.5"]);
    assert_eq!(table.get_as::<u16>("--port"), Some(8080));
    assert_eq!(table.get_as::<bool>("--verbose"), Some(true));
    assert_eq!(table.get_as::<f64>("--ratio"), Some(0.5));
    assert_eq!(table.get_as::<i32>("--missing"), None);
}

#[test]
fn test_round_trip_through_display() {
    let table = OptionTable::from_args(["prog", "-u", "nine", "-v", "-p", "dreams"]);
    let rendered = table.to_string();
    let tokens: Vec<&str> = rendered.split(' ').collect();
    let rebuilt = OptionTable::from_args(tokens);
    assert_eq!(rebuilt, table);
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_lookup_version_truthiness() {
    let table = OptionTable::from_args(["prog", "-v"]);
    assert_eq!(lookup_in(&table, 0, &["-v", "--version"]), 1);
}

#[test]
fn test_lookup_missing_string() {
    let table = OptionTable::from_args(["prog", "-v"]);
    assert_eq!(lookup_in(&table, String::new(), &["-p", "--pass"]), "");
}

#[test]
fn test_lookup_skips_default_valued_alias() {
    let table = OptionTable::from_args(["prog", "-q", "false", "--quiet"]);
    assert!(lookup_in(&table, false, &["-q", "--quiet"]));
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn test_from_arg_dispatch() {
    assert!(bool::from_arg("true"));
    assert_eq!(i64::from_arg("-12"), -12);
    assert_eq!(usize::from_arg("on"), 1);
    assert_eq!(char::from_arg("q"), 'q');
    assert_eq!(String::from_arg("0"), "0");
}

#[test]
fn test_conversion_enum() {
    let table = OptionTable::from_args(["prog", "-n", "3"]);
    let value = table.get("-n");
    assert_eq!(Conversion::Integer.apply(value), ArgValue::Integer(3));
    assert_eq!(Conversion::Bool.apply(value), ArgValue::Bool(true));
    assert_eq!(Conversion::Str.apply(value).to_string(), "3");
}
