use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::alphabet::normalize_symbol;
use crate::errors::ClassicCryptoError;

/// The most frequent symbols of a language, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub name: String,
    pub symbols: Vec<char>,
}

lazy_static! {
    /// Top four letters of English text.
    pub static ref ENGLISH: LanguageProfile = LanguageProfile::from_ranked("english", "ETAO");

    /// Top four letters of Spanish text.
    pub static ref SPANISH: LanguageProfile = LanguageProfile::from_ranked("spanish", "EAOS");

    static ref BUILTIN: Vec<&'static LanguageProfile> = vec![&*ENGLISH, &*SPANISH];
}

impl LanguageProfile {
    fn from_ranked(name: &str, ranked: &str) -> Self {
        Self {
            name: name.to_string(),
            symbols: ranked.chars().map(normalize_symbol).collect(),
        }
    }

    /// A custom profile. Symbols are case-normalized.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidParameters` if fewer than two symbols are given or
    /// a symbol is repeated.
    pub fn try_with(name: &str, ranked: &str) -> Result<Self, ClassicCryptoError> {
        let profile = Self::from_ranked(name, ranked);
        if profile.symbols.len() < 2 {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "Profile '{}' needs at least 2 symbols, got {}",
                name,
                profile.symbols.len()
            )));
        }
        for (i, s) in profile.symbols.iter().enumerate() {
            if profile.symbols[..i].contains(s) {
                return Err(ClassicCryptoError::InvalidParameters(format!(
                    "Profile '{}' repeats symbol '{}'",
                    name, s
                )));
            }
        }
        Ok(profile)
    }

    /// Looks up a built-in profile by name, ignoring case.
    pub fn builtin(name: &str) -> Option<&'static LanguageProfile> {
        BUILTIN
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The `k` most frequent symbols (all of them if the profile is shorter).
    pub fn top(&self, k: usize) -> &[char] {
        &self.symbols[..k.min(self.symbols.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(LanguageProfile::builtin("English").unwrap().symbols, vec!['E', 'T', 'A', 'O']);
        assert_eq!(LanguageProfile::builtin("SPANISH").unwrap().top(2), &['E', 'A']);
        assert!(LanguageProfile::builtin("klingon").is_none());
    }

    #[test]
    fn test_custom_profile_validation() {
        assert_eq!(LanguageProfile::try_with("x", "eaos").unwrap().symbols, vec!['E', 'A', 'O', 'S']);
        assert!(LanguageProfile::try_with("x", "e").is_err());
        assert!(LanguageProfile::try_with("x", "eae").is_err());
    }
}
