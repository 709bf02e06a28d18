//! Word catalog: the target words and the samples that voice them.
//!
//! The catalog is described by a JSON [`CatalogManifest`] and resolved once,
//! at startup, into an immutable [`WordCatalog`] of loaded sample ids. All
//! completeness checks happen here, so a loaded catalog can voice every
//! character of every word in both difficulties.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sound::{SampleId, Sound, SoundError};
use crate::types::{is_input_char, Difficulty, INPUT_ALPHABET};

/// Words shipped with the game.
pub const STANDARD_WORDS: [&str; 3] = ["1234567890987234102831", "1234", "ok"];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog manifest")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has no words")]
    EmptyWordList,
    #[error("word #{index} is empty")]
    EmptyWord { index: usize },
    #[error("word {word:?} contains unsupported character {ch:?}")]
    UnsupportedCharacter { word: String, ch: char },
    #[error("{} sample key {key:?} is not a single input character", variant.as_str())]
    InvalidKey { variant: Difficulty, key: String },
    #[error("no {} sample for character {ch:?}", variant.as_str())]
    MissingSample { variant: Difficulty, ch: char },
    #[error(transparent)]
    Sound(#[from] SoundError),
}

/// On-disk description of a catalog.
///
/// Sample paths are relative to the asset directory passed to
/// [`WordCatalog::load`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogManifest {
    /// Target words, played in order.
    pub words: Vec<String>,
    /// Played once on the intro screen.
    pub intro: String,
    /// Played before every word.
    pub transition: String,
    /// Character → sample path, normal difficulty.
    #[serde(default)]
    pub normal: BTreeMap<String, String>,
    /// Character → sample path, hard difficulty.
    #[serde(default)]
    pub hard: BTreeMap<String, String>,
}

impl CatalogManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_json(&json)?)
    }

    /// The built-in catalog: [`STANDARD_WORDS`] with one `<c>.wav` per
    /// character and a `hard/` variant of each.
    pub fn standard() -> Self {
        let normal = INPUT_ALPHABET
            .chars()
            .map(|c| (c.to_string(), format!("{c}.wav")))
            .collect();
        let hard = INPUT_ALPHABET
            .chars()
            .map(|c| (c.to_string(), format!("hard/{c}.wav")))
            .collect();
        Self {
            words: STANDARD_WORDS.iter().map(|w| w.to_string()).collect(),
            intro: "intro.wav".to_string(),
            transition: "transition.wav".to_string(),
            normal,
            hard,
        }
    }

    fn samples(&self, variant: Difficulty) -> &BTreeMap<String, String> {
        match variant {
            Difficulty::Normal => &self.normal,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Check words, sample keys and sample coverage without loading anything.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.words.is_empty() {
            return Err(CatalogError::EmptyWordList);
        }
        for (index, word) in self.words.iter().enumerate() {
            if word.is_empty() {
                return Err(CatalogError::EmptyWord { index });
            }
            if let Some(ch) = word.chars().find(|c| !is_input_char(*c)) {
                return Err(CatalogError::UnsupportedCharacter {
                    word: word.clone(),
                    ch,
                });
            }
        }

        for variant in [Difficulty::Normal, Difficulty::Hard] {
            let samples = self.samples(variant);
            for key in samples.keys() {
                if key_char(key).is_none() {
                    return Err(CatalogError::InvalidKey {
                        variant,
                        key: key.clone(),
                    });
                }
            }
            for ch in self.words.iter().flat_map(|w| w.chars()) {
                let mut buf = [0u8; 4];
                if !samples.contains_key(ch.encode_utf8(&mut buf) as &str) {
                    return Err(CatalogError::MissingSample { variant, ch });
                }
            }
        }
        Ok(())
    }
}

fn key_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if is_input_char(c) => Some(c),
        _ => None,
    }
}

/// Validated, loaded catalog handed to the game at construction.
#[derive(Debug, Clone)]
pub struct WordCatalog {
    words: Vec<String>,
    normal: HashMap<char, SampleId>,
    hard: HashMap<char, SampleId>,
    intro: SampleId,
    transition: SampleId,
}

impl WordCatalog {
    /// Validate `manifest` and load every sample it names through `sound`.
    pub fn load<S: Sound>(
        manifest: &CatalogManifest,
        assets: &Path,
        sound: &mut S,
    ) -> Result<Self, CatalogError> {
        manifest.validate()?;

        let intro = sound.load(&assets.join(&manifest.intro))?;
        let transition = sound.load(&assets.join(&manifest.transition))?;

        let mut load_set = |variant: Difficulty| -> Result<HashMap<char, SampleId>, CatalogError> {
            let mut set = HashMap::new();
            for (key, path) in manifest.samples(variant) {
                // Keys were checked by `validate`.
                if let Some(ch) = key_char(key) {
                    set.insert(ch, sound.load(&assets.join(path))?);
                }
            }
            Ok(set)
        };
        let normal = load_set(Difficulty::Normal)?;
        let hard = load_set(Difficulty::Hard)?;

        log::info!(
            "catalog loaded: {} words, {} normal + {} hard samples",
            manifest.words.len(),
            normal.len(),
            hard.len()
        );

        Ok(Self {
            words: manifest.words.clone(),
            normal,
            hard,
            intro,
            transition,
        })
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Sample voicing `ch` in the given difficulty.
    pub fn sample(&self, ch: char, variant: Difficulty) -> Option<SampleId> {
        match variant {
            Difficulty::Normal => self.normal.get(&ch).copied(),
            Difficulty::Hard => self.hard.get(&ch).copied(),
        }
    }

    pub fn intro(&self) -> SampleId {
        self.intro
    }

    pub fn transition(&self) -> SampleId {
        self.transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::ManualSound;

    fn small_manifest() -> CatalogManifest {
        let mut normal = BTreeMap::new();
        let mut hard = BTreeMap::new();
        for c in ['o', 'k'] {
            normal.insert(c.to_string(), format!("{c}.wav"));
            hard.insert(c.to_string(), format!("hard/{c}.wav"));
        }
        CatalogManifest {
            words: vec!["ok".to_string()],
            intro: "intro.wav".to_string(),
            transition: "transition.wav".to_string(),
            normal,
            hard,
        }
    }

    #[test]
    fn standard_manifest_is_valid() {
        let m = CatalogManifest::standard();
        m.validate().unwrap();
        assert_eq!(m.words.len(), STANDARD_WORDS.len());
        assert_eq!(m.normal.len(), 36);
        assert_eq!(m.hard["9"], "hard/9.wav");
    }

    #[test]
    fn parse_manifest_from_json() {
        let json = r#"{
            "words": ["ok"],
            "intro": "intro.wav",
            "transition": "transition.wav",
            "normal": { "o": "o.wav", "k": "k.wav" },
            "hard": { "o": "o2.wav", "k": "k2.wav" }
        }"#;
        let m = CatalogManifest::from_json(json).unwrap();
        assert_eq!(m.words, vec!["ok"]);
        assert_eq!(m.hard["k"], "k2.wav");
        m.validate().unwrap();
    }

    #[test]
    fn missing_sample_sets_default_to_empty() {
        let json = r#"{ "words": ["ok"], "intro": "i.wav", "transition": "t.wav" }"#;
        let m = CatalogManifest::from_json(json).unwrap();
        assert!(m.normal.is_empty());
        assert!(matches!(
            m.validate(),
            Err(CatalogError::MissingSample {
                variant: Difficulty::Normal,
                ch: 'o'
            })
        ));
    }

    #[test]
    fn rejects_empty_word_list() {
        let mut m = small_manifest();
        m.words.clear();
        assert!(matches!(m.validate(), Err(CatalogError::EmptyWordList)));
    }

    #[test]
    fn rejects_empty_word() {
        let mut m = small_manifest();
        m.words.push(String::new());
        assert!(matches!(
            m.validate(),
            Err(CatalogError::EmptyWord { index: 1 })
        ));
    }

    #[test]
    fn rejects_characters_outside_alphabet() {
        let mut m = small_manifest();
        m.words = vec!["OK".to_string()];
        assert!(matches!(
            m.validate(),
            Err(CatalogError::UnsupportedCharacter { ch: 'O', .. })
        ));
    }

    #[test]
    fn rejects_multi_char_keys() {
        let mut m = small_manifest();
        m.hard.insert("ok".to_string(), "ok.wav".to_string());
        assert!(matches!(
            m.validate(),
            Err(CatalogError::InvalidKey {
                variant: Difficulty::Hard,
                ..
            })
        ));
    }

    #[test]
    fn rejects_missing_hard_sample() {
        let mut m = small_manifest();
        m.hard.remove("k");
        assert!(matches!(
            m.validate(),
            Err(CatalogError::MissingSample {
                variant: Difficulty::Hard,
                ch: 'k'
            })
        ));
    }

    #[test]
    fn load_resolves_paths_against_asset_dir() {
        let mut sound = ManualSound::new();
        let catalog = WordCatalog::load(&small_manifest(), Path::new("assets"), &mut sound).unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.word(0), Some("ok"));
        assert_eq!(catalog.word(1), None);
        assert_eq!(
            sound.path_of(catalog.intro()),
            Some(PathBuf::from("assets/intro.wav"))
        );

        let normal_k = catalog.sample('k', Difficulty::Normal).unwrap();
        let hard_k = catalog.sample('k', Difficulty::Hard).unwrap();
        assert_ne!(normal_k, hard_k);
        assert_eq!(sound.path_of(hard_k), Some(PathBuf::from("assets/hard/k.wav")));
        assert_eq!(catalog.sample('z', Difficulty::Normal), None);
    }

    #[test]
    fn load_fails_before_touching_sound_on_invalid_manifest() {
        let mut m = small_manifest();
        m.words.clear();
        let mut sound = ManualSound::new();
        assert!(WordCatalog::load(&m, Path::new("."), &mut sound).is_err());
        assert_eq!(sound.path_of(SampleId(0)), None);
    }
}
