//! Responder configuration.
//!
//! A [`ConfigFile`] is the optional, partially-filled TOML document; it is
//! resolved against the chosen persona's defaults into a [`DeeConfig`].
//! Pure parsing only: reading the file is the caller's job.

use serde::Deserialize;

use crate::constants::{
    DECREASE_FACTOR, DEFAULT_DECREASE_WORDS, DEFAULT_INCREASE_WORDS, DEFAULT_JUSTIFICATIONS,
    INCREASE_FACTOR,
};
use crate::error::ConfigError;
use crate::ledger::UnlockPolicy;
use crate::persona::Persona;

/// Fully resolved settings for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct DeeConfig {
    pub persona: Persona,
    pub allow_decrease: bool,
    pub unlock_policy: UnlockPolicy,
    pub show_constraints: bool,
    pub justifications: Vec<String>,
    pub increase_words: Vec<String>,
    pub decrease_words: Vec<String>,
    pub increase_factor: f64,
    pub decrease_factor: f64,
}

impl DeeConfig {
    pub fn for_persona(persona: Persona) -> Self {
        Self {
            persona,
            allow_decrease: persona.default_allow_decrease(),
            unlock_policy: UnlockPolicy::default(),
            show_constraints: persona.default_show_constraints(),
            justifications: owned(DEFAULT_JUSTIFICATIONS),
            increase_words: owned(DEFAULT_INCREASE_WORDS),
            decrease_words: owned(DEFAULT_DECREASE_WORDS),
            increase_factor: INCREASE_FACTOR,
            decrease_factor: DECREASE_FACTOR,
        }
    }

    /// Lowercase and trim word lists, then check every field is usable.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        self.justifications = normalize_words("justifications", self.justifications)?;
        self.increase_words = normalize_words("increase_words", self.increase_words)?;
        self.decrease_words = normalize_words("decrease_words", self.decrease_words)?;
        check_factor("increase_factor", self.increase_factor)?;
        check_factor("decrease_factor", self.decrease_factor)?;
        Ok(self)
    }
}

impl Default for DeeConfig {
    fn default() -> Self {
        Self::for_persona(Persona::default())
    }
}

/// On-disk shape. Every field is optional; missing fields take the
/// persona's defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub persona: Option<Persona>,
    pub allow_decrease: Option<bool>,
    pub unlock_policy: Option<UnlockPolicy>,
    pub show_constraints: Option<bool>,
    pub justifications: Option<Vec<String>>,
    pub increase_words: Option<Vec<String>>,
    pub decrease_words: Option<Vec<String>>,
    pub increase_factor: Option<f64>,
    pub decrease_factor: Option<f64>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay the file on the defaults of its persona (or the default persona).
    pub fn resolve(self) -> DeeConfig {
        let mut config = DeeConfig::for_persona(self.persona.unwrap_or_default());
        if let Some(v) = self.allow_decrease {
            config.allow_decrease = v;
        }
        if let Some(v) = self.unlock_policy {
            config.unlock_policy = v;
        }
        if let Some(v) = self.show_constraints {
            config.show_constraints = v;
        }
        if let Some(v) = self.justifications {
            config.justifications = v;
        }
        if let Some(v) = self.increase_words {
            config.increase_words = v;
        }
        if let Some(v) = self.decrease_words {
            config.decrease_words = v;
        }
        if let Some(v) = self.increase_factor {
            config.increase_factor = v;
        }
        if let Some(v) = self.decrease_factor {
            config.decrease_factor = v;
        }
        config
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn normalize_words(field: &'static str, words: Vec<String>) -> Result<Vec<String>, ConfigError> {
    if words.is_empty() {
        return Err(ConfigError::EmptyWordList(field));
    }
    words
        .into_iter()
        .map(|w| {
            let w = w.trim().to_lowercase();
            if w.is_empty() {
                Err(ConfigError::BlankWord(field))
            } else {
                Ok(w)
            }
        })
        .collect()
}

fn check_factor(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidFactor { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_wyoming_defaults() {
        let config = ConfigFile::parse("").unwrap().resolve();
        assert_eq!(config, DeeConfig::default());
        assert_eq!(config.persona, Persona::Wyoming);
        assert!(!config.allow_decrease);
        assert_eq!(config.unlock_policy, UnlockPolicy::Idempotent);
    }

    #[test]
    fn test_persona_sets_defaults() {
        let config = ConfigFile::parse("persona = \"frontier\"")
            .unwrap()
            .resolve();
        assert_eq!(config.persona, Persona::Frontier);
        assert!(config.allow_decrease);
        assert!(config.show_constraints);
    }

    #[test]
    fn test_explicit_field_beats_persona_default() {
        let config = ConfigFile::parse(
            "persona = \"frontier\"\nallow_decrease = false\nunlock_policy = \"repeatable\"",
        )
        .unwrap()
        .resolve();
        assert!(!config.allow_decrease);
        assert_eq!(config.unlock_policy, UnlockPolicy::Repeatable);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ConfigFile::parse("power_cap = 11").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_unknown_persona_rejected() {
        assert!(ConfigFile::parse("persona = \"texas\"").is_err());
    }

    #[test]
    fn test_words_normalized() {
        let mut config = DeeConfig::default();
        config.justifications = vec!["  For Good ".to_string(), "TRUTH".to_string()];
        let config = config.validated().unwrap();
        assert_eq!(config.justifications, vec!["for good", "truth"]);
    }

    #[test]
    fn test_empty_word_list_rejected() {
        let mut config = DeeConfig::default();
        config.increase_words.clear();
        assert!(matches!(
            config.validated(),
            Err(ConfigError::EmptyWordList("increase_words"))
        ));
    }

    #[test]
    fn test_blank_word_rejected() {
        let mut config = DeeConfig::default();
        config.decrease_words.push("   ".to_string());
        assert!(matches!(
            config.validated(),
            Err(ConfigError::BlankWord("decrease_words"))
        ));
    }

    #[test]
    fn test_bad_factor_rejected() {
        for bad in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let mut config = DeeConfig::default();
            config.increase_factor = bad;
            assert!(matches!(
                config.validated(),
                Err(ConfigError::InvalidFactor {
                    field: "increase_factor",
                    ..
                })
            ));
        }
    }
}
