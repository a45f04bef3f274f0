//! Symbol frequency ranking.

use crate::alphabet::Alphabet;
use crate::diagnostics::{Outcome, SkippedSymbol};

use serde::{Deserialize, Serialize};

use std::collections::HashMap;

/// `(symbol, count)` pairs, most frequent first, ties in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking(Vec<(char, usize)>);

impl Ranking {
    pub fn iter(&self) -> impl Iterator<Item = &(char, usize)> {
        self.0.iter()
    }

    /// The `k` most frequent symbols.
    pub fn top(&self, k: usize) -> impl Iterator<Item = char> + '_ {
        self.0.iter().take(k).map(|&(symbol, _)| symbol)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn entries(&self) -> &[(char, usize)] {
        &self.0
    }

    /// Symbols in rank order, e.g. `"BAC"`.
    pub fn symbols(&self) -> String {
        self.top(self.0.len()).collect()
    }
}

impl IntoIterator for Ranking {
    type Item = (char, usize);
    type IntoIter = std::vec::IntoIter<(char, usize)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Counts symbols of one alphabet.
#[derive(Debug, Clone)]
pub struct FrequencyAnalyzer {
    alphabet: Alphabet,
}

impl FrequencyAnalyzer {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Ranks the in-alphabet symbols of `text`; the others are skipped and reported.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::alphabet::Alphabet;
    /// # use classic_crypto::frequency::FrequencyAnalyzer;
    /// let analyzer = FrequencyAnalyzer::new(Alphabet::latin());
    /// let ranking = analyzer.rank("AABBBC").value;
    /// assert_eq!(ranking.entries(), &[('B', 3), ('A', 2), ('C', 1)]);
    /// ```
    pub fn rank(&self, text: &str) -> Outcome<Ranking> {
        let mut counts: Vec<(char, usize)> = Vec::new();
        let mut slot: HashMap<i64, usize> = HashMap::new();
        let mut skipped = Vec::new();

        for (position, symbol) in text.chars().enumerate() {
            let Ok(index) = self.alphabet.encode(symbol) else {
                skipped.push(SkippedSymbol { position, symbol });
                continue;
            };
            match slot.get(&index) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    slot.insert(index, counts.len());
                    // canonical spelling of the symbol, e.g. 'a' counts as 'A'
                    let canonical = self.alphabet.symbols()[index as usize];
                    counts.push((canonical, 1));
                }
            }
        }

        if !skipped.is_empty() {
            log::warn!(
                "frequency analysis ignored {} character(s) outside the alphabet",
                skipped.len()
            );
        }

        // stable: equal counts keep first-appearance order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        Outcome::new(Ranking(counts), skipped)
    }
}
