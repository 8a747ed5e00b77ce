#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_without_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_flips_boolean_value() {
    assert!(toggle(false));
    assert!(!toggle(true));
}

#[test]
fn theme_attr_names_both_themes() {
    assert_eq!(theme_attr(true), "dark");
    assert_eq!(theme_attr(false), "light");
}

#[test]
fn parse_stored_accepts_boolean_and_theme_names() {
    assert_eq!(parse_stored("true"), Some(true));
    assert_eq!(parse_stored(" dark "), Some(true));
    assert_eq!(parse_stored("false"), Some(false));
    assert_eq!(parse_stored("light"), Some(false));
    assert_eq!(parse_stored("auto"), None);
    assert_eq!(parse_stored(""), None);
}
