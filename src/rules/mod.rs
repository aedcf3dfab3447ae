//! Rule tables shared by every pipeline stage
//!
//! Tables are loaded once at startup, optionally merged with a JSON
//! dictionary file, and then only ever read.

pub mod abbreviations;
pub mod calendar;
pub mod contractions;
pub mod currency;
pub mod emotion;
pub mod pronunciation;
pub mod symbols;

use regex::Regex;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::error::{NormalizerError, Result};
use crate::models::Emotion;

pub use abbreviations::{AbbreviationClass, AbbreviationEntry, AbbreviationTable};
pub use currency::CurrencyUnit;
pub use pronunciation::Window;

/// A compiled context rule for a homograph
#[derive(Debug, Clone)]
pub struct ContextRule {
    pub variant: String,
    pub window: Window,
    pub pattern: Regex,
}

/// A homograph ready for lookup
#[derive(Debug, Clone)]
pub struct Homograph {
    pub word: String,
    pub default_variant: String,
    pub variants: HashMap<String, String>,
    pub rules: Vec<ContextRule>,
}

impl Homograph {
    /// Respelling for a variant name
    pub fn respelling(&self, variant: &str) -> Option<&str> {
        self.variants.get(variant).map(String::as_str)
    }

    fn validate(&self) -> Result<()> {
        if !self.variants.contains_key(&self.default_variant) {
            return Err(NormalizerError::Configuration(format!(
                "homograph '{}' has unknown default variant '{}'",
                self.word, self.default_variant
            )));
        }
        for rule in &self.rules {
            if !self.variants.contains_key(&rule.variant) {
                return Err(NormalizerError::Configuration(format!(
                    "homograph '{}' rule refers to unknown variant '{}'",
                    self.word, rule.variant
                )));
            }
        }
        Ok(())
    }
}

/// Contraction lookup sets
#[derive(Debug, Clone)]
pub struct ContractionTable {
    pub expansions: HashMap<&'static str, &'static str>,
    pub phonetic: HashMap<&'static str, &'static str>,
    pub problematic: HashSet<&'static str>,
    pub natural: HashSet<&'static str>,
    pub pronouns: HashSet<&'static str>,
    pub skippable_adverbs: HashSet<&'static str>,
    pub past_participles: HashSet<&'static str>,
    pub false_participles: HashSet<&'static str>,
}

impl ContractionTable {
    fn builtin() -> Self {
        Self {
            expansions: contractions::EXPANSIONS.iter().copied().collect(),
            phonetic: contractions::PHONETIC.iter().copied().collect(),
            problematic: contractions::PROBLEMATIC.iter().copied().collect(),
            natural: contractions::NATURAL.iter().copied().collect(),
            pronouns: contractions::PRONOUNS.iter().copied().collect(),
            skippable_adverbs: contractions::SKIPPABLE_ADVERBS.iter().copied().collect(),
            past_participles: contractions::PAST_PARTICIPLES.iter().copied().collect(),
            false_participles: contractions::FALSE_PARTICIPLES.iter().copied().collect(),
        }
    }

    /// Whether a lowercase word reads as a past participle
    pub fn is_past_participle(&self, word: &str) -> bool {
        if self.past_participles.contains(word) {
            return true;
        }
        word.len() > 3 && word.ends_with("ed") && !self.false_participles.contains(word)
    }
}

/// Every table the stages consult
#[derive(Debug, Clone)]
pub struct RuleTables {
    pub contractions: ContractionTable,
    pub abbreviations: AbbreviationTable,
    pub pronunciations: HashMap<String, String>,
    pub interjections: HashMap<String, String>,
    pub homographs: HashMap<String, Homograph>,
    pub emotions: HashMap<String, Emotion>,
}

impl RuleTables {
    /// Built-in tables
    ///
    /// Fails only if a built-in homograph rule does not compile.
    pub fn builtin() -> Result<Self> {
        let mut homographs = HashMap::new();
        for spec in pronunciation::HOMOGRAPHS {
            let homograph = Homograph {
                word: spec.word.to_string(),
                default_variant: spec.default_variant.to_string(),
                variants: spec
                    .variants
                    .iter()
                    .map(|(name, spelling)| (name.to_string(), spelling.to_string()))
                    .collect(),
                rules: spec
                    .rules
                    .iter()
                    .map(|(variant, window, pattern)| {
                        Ok(ContextRule {
                            variant: variant.to_string(),
                            window: *window,
                            pattern: NormalizerError::compile(
                                format!("homograph '{}'", spec.word),
                                pattern,
                            )?,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
            };
            homograph.validate()?;
            homographs.insert(homograph.word.clone(), homograph);
        }

        Ok(Self {
            contractions: ContractionTable::builtin(),
            abbreviations: AbbreviationTable::builtin(),
            pronunciations: owned_map(pronunciation::PRONUNCIATIONS),
            interjections: owned_map(pronunciation::INTERJECTIONS),
            homographs,
            emotions: emotion::EMOTION_WORDS
                .iter()
                .map(|(word, emotion)| (word.to_string(), *emotion))
                .collect(),
        })
    }

    /// Built-in tables merged with a JSON dictionary file
    pub fn load_with_overrides(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            NormalizerError::Configuration(format!(
                "cannot read dictionary file {}: {}",
                path.display(),
                e
            ))
        })?;
        let overrides: DictionaryOverrides = serde_json::from_str(&content)?;

        let mut tables = Self::builtin()?;
        tables.apply(overrides)?;
        Ok(tables)
    }

    /// Merge overrides into the tables; entries replace built-ins by key
    pub fn apply(&mut self, overrides: DictionaryOverrides) -> Result<()> {
        for (word, spelling) in overrides.pronunciations {
            self.pronunciations.insert(word.to_lowercase(), spelling);
        }
        for (word, spelling) in overrides.interjections {
            self.interjections.insert(word.to_lowercase(), spelling);
        }
        for (key, entry) in overrides.abbreviations {
            if key.trim().is_empty() {
                return Err(NormalizerError::Configuration(
                    "abbreviation override with empty key".to_string(),
                ));
            }
            self.abbreviations.insert(&key, entry);
        }
        for (word, emotion) in overrides.emotions {
            self.emotions.insert(word.to_lowercase(), emotion);
        }
        for spec in overrides.homographs {
            let word = spec.word.to_lowercase();
            let homograph = Homograph {
                rules: spec
                    .rules
                    .into_iter()
                    .map(|rule| {
                        Ok(ContextRule {
                            pattern: NormalizerError::compile(
                                format!("homograph '{}'", word),
                                &rule.pattern,
                            )?,
                            variant: rule.variant,
                            window: rule.window,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?,
                word: word.clone(),
                default_variant: spec.default_variant,
                variants: spec.variants,
            };
            homograph.validate()?;
            self.homographs.insert(word, homograph);
        }
        Ok(())
    }
}

fn owned_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// User dictionary file contents
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DictionaryOverrides {
    pub pronunciations: HashMap<String, String>,
    pub interjections: HashMap<String, String>,
    pub abbreviations: HashMap<String, AbbreviationEntry>,
    pub emotions: HashMap<String, Emotion>,
    pub homographs: Vec<HomographOverride>,
}

#[derive(Debug, Deserialize)]
pub struct HomographOverride {
    pub word: String,
    #[serde(rename = "default")]
    pub default_variant: String,
    pub variants: HashMap<String, String>,
    #[serde(default)]
    pub rules: Vec<ContextRuleOverride>,
}

#[derive(Debug, Deserialize)]
pub struct ContextRuleOverride {
    pub variant: String,
    pub window: Window,
    pub pattern: String,
}
