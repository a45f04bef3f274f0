//! Non-fatal findings collected while processing a message.

use serde::{Deserialize, Serialize};

/// A character that was left out of a result because it is not part of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedSymbol {
    /// Position of the character in the input, counted in `char`s.
    pub position: usize,
    pub symbol: char,
}

/// A result together with the symbols that were skipped while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub value: T,
    pub skipped: Vec<SkippedSymbol>,
}

impl<T> Outcome<T> {
    pub fn new(value: T, skipped: Vec<SkippedSymbol>) -> Self {
        Self { value, skipped }
    }

    /// `true` when nothing was skipped.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            skipped: self.skipped,
        }
    }

    /// Distinct skipped characters in order of first appearance.
    pub fn skipped_symbols(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for s in &self.skipped {
            if !seen.contains(&s.symbol) {
                seen.push(s.symbol);
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skipped_symbols_are_distinct() {
        let outcome = Outcome::new(
            "AB".to_string(),
            vec![
                SkippedSymbol { position: 1, symbol: ' ' },
                SkippedSymbol { position: 3, symbol: '!' },
                SkippedSymbol { position: 4, symbol: ' ' },
            ],
        );
        assert!(!outcome.is_clean());
        assert_eq!(outcome.skipped_symbols(), vec![' ', '!']);
        assert_eq!(outcome.map(|s| s.len()).value, 2);
    }
}
