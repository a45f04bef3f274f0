//! # Alphabet Module
//!
//! Provides the [`Alphabet`] codec: a bidirectional mapping between symbols and the
//! elements `0..m` of the ring Z_m, where `m` is the number of symbols.
//!
//! Symbols are case-normalized to upper case both when the alphabet is built and
//! before every lookup.

use crate::diagnostics::{Outcome, SkippedSymbol};
use crate::errors::ClassicCryptoError;
use crate::preset::alphabets::LATIN_SYMBOLS;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

use std::collections::HashMap;
use std::path::Path;

/// Ordered set of unique symbols. The index of a symbol is its position in the set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<char>", into = "Vec<char>")]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.symbols == other.symbols
    }
}

impl Eq for Alphabet {}

/// Upper-cases a symbol when its upper-case form is a single `char`.
pub fn normalize_symbol(symbol: char) -> char {
    let mut upper = symbol.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => symbol,
    }
}

impl Alphabet {
    /// The 26-letter Latin alphabet `A..Z`.
    pub fn latin() -> Self {
        Self::from_unique(LATIN_SYMBOLS.chars())
    }

    /// Builds an alphabet from an ordered list of symbols.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::DuplicateSymbol` if two symbols are equal after case normalization.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::alphabet::Alphabet;
    /// let alphabet = Alphabet::try_from_symbols("abc".chars()).unwrap();
    /// assert_eq!(alphabet.encode('C').unwrap(), 2);
    /// assert!(Alphabet::try_from_symbols("aA".chars()).is_err());
    /// ```
    pub fn try_from_symbols<I>(symbols: I) -> Result<Self, ClassicCryptoError>
    where
        I: IntoIterator<Item = char>,
    {
        let mut alphabet = Self::default();
        for symbol in symbols {
            let symbol = normalize_symbol(symbol);
            if alphabet.index.contains_key(&symbol) {
                return Err(ClassicCryptoError::DuplicateSymbol(symbol));
            }
            alphabet.push(symbol);
        }
        Ok(alphabet)
    }

    /// Parses an alphabet out of free text, keeping the first occurrence of every symbol.
    ///
    /// Line terminators are never symbols, any other character is, spaces included. When
    /// `separator` is given the text is split on it and every piece contributes its characters.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::alphabet::Alphabet;
    /// let alphabet = Alphabet::from_text("b,a,b,ñ", Some(","));
    /// assert_eq!(alphabet.symbols(), &['B', 'A', 'Ñ']);
    /// ```
    pub fn from_text(text: &str, separator: Option<&str>) -> Self {
        let is_line_break = |c: &char| *c == '\n' || *c == '\r';
        match separator.filter(|s| !s.is_empty()) {
            Some(sep) => Self::from_unique(
                text.split(sep)
                    .flat_map(str::chars)
                    .filter(|c| !is_line_break(c)),
            ),
            None => Self::from_unique(text.chars().filter(|c| !is_line_break(c))),
        }
    }

    /// Reads an alphabet from a text file, see [`Alphabet::from_text`].
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::AlphabetLoad` if the file is missing or unreadable.
    pub fn from_file(
        path: impl AsRef<Path>,
        separator: Option<&str>,
    ) -> Result<Self, ClassicCryptoError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ClassicCryptoError::AlphabetLoad {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let alphabet = Self::from_text(&text, separator);
        log::debug!(
            "loaded alphabet of {} symbols from {}",
            alphabet.len(),
            path.display()
        );
        Ok(alphabet)
    }

    /// Like [`Alphabet::from_file`], but degrades to an empty alphabet on failure and hands
    /// the error back so the caller can decide whether to abort or fall back.
    pub fn load(
        path: impl AsRef<Path>,
        separator: Option<&str>,
    ) -> (Self, Option<ClassicCryptoError>) {
        match Self::from_file(path, separator) {
            Ok(alphabet) => (alphabet, None),
            Err(e) => {
                log::error!("{}", e);
                (Self::default(), Some(e))
            }
        }
    }

    fn from_unique(symbols: impl Iterator<Item = char>) -> Self {
        let mut alphabet = Self::default();
        for symbol in symbols.map(normalize_symbol) {
            if !alphabet.index.contains_key(&symbol) {
                alphabet.push(symbol);
            }
        }
        alphabet
    }

    fn push(&mut self, symbol: char) {
        self.index.insert(symbol, self.symbols.len());
        self.symbols.push(symbol);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&normalize_symbol(symbol))
    }

    /// The ring Z_m with `m` equal to the alphabet size.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidModulus` for alphabets with fewer than two symbols.
    pub fn ring(&self) -> Result<Ring, ClassicCryptoError> {
        Ring::try_with(self.len() as u64).map_err(|_| {
            ClassicCryptoError::InvalidModulus(format!(
                "An alphabet needs at least 2 symbols, this one has {}",
                self.len()
            ))
        })
    }

    fn index_of(&self, symbol: char) -> Option<i64> {
        self.index
            .get(&normalize_symbol(symbol))
            .map(|&i| i as i64)
    }

    /// Maps a symbol to its ring element.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::UnknownSymbol` if the symbol is not in the alphabet.
    pub fn encode(&self, symbol: char) -> Result<i64, ClassicCryptoError> {
        self.index_of(symbol)
            .ok_or(ClassicCryptoError::UnknownSymbol { symbol, position: 0 })
    }

    /// Maps a ring element back to its symbol.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::IndexOutOfRange` unless `0 <= index < m`.
    pub fn decode(&self, index: i64) -> Result<char, ClassicCryptoError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.symbols.get(i).copied())
            .ok_or(ClassicCryptoError::IndexOutOfRange {
                index,
                size: self.len(),
            })
    }

    /// Encodes every in-alphabet symbol of `text`, skipping and reporting the rest.
    pub fn encode_text(&self, text: &str) -> Outcome<Vec<i64>> {
        let mut encoded = Vec::with_capacity(text.len());
        let mut skipped = Vec::new();
        for (position, symbol) in text.chars().enumerate() {
            match self.index_of(symbol) {
                Some(x) => encoded.push(x),
                None => {
                    log::debug!("symbol {:?} at {} is not in the alphabet", symbol, position);
                    skipped.push(SkippedSymbol { position, symbol });
                }
            }
        }
        if !skipped.is_empty() {
            log::warn!(
                "skipped {} character(s) outside the alphabet",
                skipped.len()
            );
        }
        Outcome::new(encoded, skipped)
    }

    /// Encodes all of `text`, failing on the first symbol outside the alphabet.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::UnknownSymbol` carrying the offending position.
    pub fn encode_all(&self, text: &str) -> Result<Vec<i64>, ClassicCryptoError> {
        text.chars()
            .enumerate()
            .map(|(position, symbol)| {
                self.index_of(symbol)
                    .ok_or(ClassicCryptoError::UnknownSymbol { symbol, position })
            })
            .collect()
    }

    /// Decodes a sequence of ring elements into a string.
    pub fn decode_all(&self, indices: &[i64]) -> Result<String, ClassicCryptoError> {
        indices.iter().map(|&i| self.decode(i)).collect()
    }
}

impl TryFrom<Vec<char>> for Alphabet {
    type Error = ClassicCryptoError;

    fn try_from(symbols: Vec<char>) -> Result<Self, Self::Error> {
        Self::try_from_symbols(symbols)
    }
}

impl From<Alphabet> for Vec<char> {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_roundtrip() -> Result<(), ClassicCryptoError> {
        let alphabet = Alphabet::latin();
        assert_eq!(alphabet.len(), 26);
        assert_eq!(alphabet.encode('A')?, 0);
        assert_eq!(alphabet.encode('z')?, 25);
        assert_eq!(alphabet.decode(7)?, 'H');
        assert_eq!(alphabet.ring()?.modulus(), 26);
        Ok(())
    }

    #[test]
    fn test_unknown_symbol_and_out_of_range() {
        let alphabet = Alphabet::latin();
        assert!(matches!(
            alphabet.encode('?'),
            Err(ClassicCryptoError::UnknownSymbol { symbol: '?', .. })
        ));
        assert!(alphabet.decode(26).is_err());
        assert!(alphabet.decode(-1).is_err());
    }

    #[test]
    fn test_from_text_dedups_in_first_seen_order() {
        let alphabet = Alphabet::from_text("hola\nmundo", None);
        assert_eq!(alphabet.symbols(), &['H', 'O', 'L', 'A', 'M', 'U', 'N', 'D']);
    }

    #[test]
    fn test_from_text_with_separator() {
        let alphabet = Alphabet::from_text("a|b|c|a|ñ|\n", Some("|"));
        assert_eq!(alphabet.symbols(), &['A', 'B', 'C', 'Ñ']);
        assert_eq!(alphabet.encode('ñ').unwrap(), 3);

        let spaced = Alphabet::from_text("a| |b\r\n", Some("|"));
        assert_eq!(spaced.symbols(), &['A', ' ', 'B']);
        assert_eq!(spaced.encode(' ').unwrap(), 1);
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let (alphabet, err) = Alphabet::load("/definitely/not/here/alphabet.txt", None);
        assert!(alphabet.is_empty());
        assert!(matches!(err, Some(ClassicCryptoError::AlphabetLoad { .. })));
        assert!(matches!(
            alphabet.ring(),
            Err(ClassicCryptoError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_encode_text_reports_skipped() {
        let alphabet = Alphabet::latin();
        let outcome = alphabet.encode_text("Hi, you");
        assert_eq!(outcome.value, vec![7, 8, 24, 14, 20]);
        let positions: Vec<usize> = outcome.skipped.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![2, 3]);
    }

    #[test]
    fn test_encode_all_is_strict() {
        let alphabet = Alphabet::latin();
        assert_eq!(alphabet.encode_all("abc").unwrap(), vec![0, 1, 2]);
        assert_eq!(
            alphabet.encode_all("ab c"),
            Err(ClassicCryptoError::UnknownSymbol {
                symbol: ' ',
                position: 2
            })
        );
    }
}
