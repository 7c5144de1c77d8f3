#[path = "integration/cli.rs"]
mod cli;
#[path = "integration/ordering.rs"]
mod ordering;
#[path = "integration/roundtrip.rs"]
mod roundtrip;
#[path = "integration/validation.rs"]
mod validation;

use std::fs;
use std::path::PathBuf;

/// Directory holding the canonical fixture files
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Contents of a fixture file
pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// Names of all fixture files, sorted
pub fn fixture_names() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(fixtures_dir())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".model"))
        .collect();
    names.sort();
    names
}
