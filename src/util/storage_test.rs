#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_empty_in_non_hydrate_tests() {
    assert_eq!(LocalStorage.load("theme-preference"), None);
}

#[test]
fn save_reports_unavailable_in_non_hydrate_tests() {
    assert_eq!(LocalStorage.save("theme-preference", "dark"), Err(StorageError::Unavailable));
}

#[test]
fn prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!prefers_dark());
}
