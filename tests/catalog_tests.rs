//! The shipped catalog manifest and loading it through each backend.

use std::path::{Path, PathBuf};
use std::time::Duration;

use pretty_assertions::assert_eq;

use tui_echoword::audio::TimedSound;
use tui_echoword::core::{CatalogError, CatalogManifest, ManualSound, WordCatalog};
use tui_echoword::types::Difficulty;

fn shipped_manifest_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/catalog.json")
}

#[test]
fn shipped_manifest_matches_builtin() {
    let manifest = CatalogManifest::from_path(&shipped_manifest_path()).unwrap();
    assert_eq!(manifest, CatalogManifest::standard());
}

#[test]
fn missing_manifest_reports_path() {
    let err = CatalogManifest::from_path(Path::new("no/such/catalog.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Read { .. }));
    assert!(err.to_string().contains("no/such/catalog.json"));
}

#[test]
fn malformed_manifest_is_a_parse_error() {
    let err = CatalogManifest::from_json("{ \"words\": 3 }").unwrap_err();
    assert!(err.is_data());
}

#[test]
fn silent_backend_loads_without_files() {
    let mut sound = TimedSound::new(Duration::from_millis(10));
    let catalog = WordCatalog::load(
        &CatalogManifest::standard(),
        Path::new("does-not-exist"),
        &mut sound,
    )
    .unwrap();

    assert_eq!(catalog.len(), 3);
    let nine = catalog.sample('9', Difficulty::Hard).unwrap();
    assert_eq!(
        sound.path_of(nine),
        Some(Path::new("does-not-exist/hard/9.wav"))
    );
}

#[test]
fn every_word_is_voiced_in_both_difficulties() {
    let mut sound = ManualSound::new();
    let catalog = WordCatalog::load(&CatalogManifest::standard(), Path::new("assets"), &mut sound)
        .unwrap();
    for word in catalog.words() {
        for ch in word.chars() {
            assert!(catalog.sample(ch, Difficulty::Normal).is_some());
            assert!(catalog.sample(ch, Difficulty::Hard).is_some());
        }
    }
}
