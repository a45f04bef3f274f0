//! # Candidate Key Search
//!
//! Frequency attack on affine-family ciphers: the most frequent ciphertext symbols are
//! matched against the most frequent symbols of the expected language, and every plausible
//! matching is turned into a key.

use crate::affine::{AffineKey, solve_two_point};
use crate::alphabet::Alphabet;
use crate::errors::ClassicCryptoError;
use crate::frequency::FrequencyAnalyzer;
use crate::preset::LanguageProfile;
use crate::ring::Ring;

use itertools::Itertools;

use std::collections::BTreeSet;

/// Two `(cipher, plain)` assignments of ring elements, sorted by the cipher element.
pub type Pairing = [(i64, i64); 2];

/// Every distinct way of assigning two of `cipher_top` to two of `plain_top`.
///
/// Two assignments that only differ in enumeration order count once. The result is sorted,
/// and each pairing is ordered by its cipher element.
///
/// # Example
///
/// ```
/// # use classic_crypto::search::pairings;
/// // 2·1 ordered pairs on each side, 4 combinations, 2 distinct correspondences
/// assert_eq!(
///     pairings(&[0, 1], &[4, 19]),
///     vec![[(0, 4), (1, 19)], [(0, 19), (1, 4)]]
/// );
/// ```
pub fn pairings(cipher_top: &[i64], plain_top: &[i64]) -> Vec<Pairing> {
    let unique: BTreeSet<Pairing> = cipher_top
        .iter()
        .permutations(2)
        .cartesian_product(plain_top.iter().permutations(2).collect_vec())
        .map(|(c, p)| {
            let mut pairing = [(*c[0], *p[0]), (*c[1], *p[1])];
            pairing.sort();
            pairing
        })
        .collect();

    unique.into_iter().collect()
}

/// Frequency-guided key search over one alphabet.
#[derive(Debug, Clone)]
pub struct CandidateSearch {
    analyzer: FrequencyAnalyzer,
    ring: Ring,
    depth: Option<usize>,
}

impl CandidateSearch {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidModulus` if the alphabet has fewer than two symbols.
    pub fn new(alphabet: Alphabet) -> Result<Self, ClassicCryptoError> {
        let ring = alphabet.ring()?;
        Ok(Self {
            analyzer: FrequencyAnalyzer::new(alphabet),
            ring,
            depth: None,
        })
    }

    /// Caps how many top symbols of each side are matched. Defaults to the profile length.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Top ciphertext and profile symbols as ring elements.
    fn top_symbols(
        &self,
        ciphertext: &str,
        profile: &LanguageProfile,
    ) -> Result<(Vec<i64>, Vec<i64>), ClassicCryptoError> {
        let k = self.depth.unwrap_or(profile.symbols.len());
        if k < 2 || profile.symbols.len() < 2 {
            return Err(ClassicCryptoError::InvalidParameters(format!(
                "Frequency search needs at least 2 symbols per side (depth {}, profile '{}' has {})",
                k,
                profile.name,
                profile.symbols.len()
            )));
        }

        let alphabet = self.analyzer.alphabet();
        let plain_top = profile
            .top(k)
            .iter()
            .enumerate()
            .map(|(position, &symbol)| {
                alphabet
                    .encode(symbol)
                    .map_err(|_| ClassicCryptoError::UnknownSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ranking = self.analyzer.rank(ciphertext).into_value();
        let cipher_top = ranking
            .top(k)
            .map(|symbol| alphabet.encode(symbol))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "matching cipher symbols {:?} against '{}' symbols {:?}",
            ranking.top(k).collect::<String>(),
            profile.name,
            profile.top(k)
        );
        Ok((cipher_top, plain_top))
    }

    /// Affine keys consistent with some matching of frequent cipher and plain symbols.
    ///
    /// Every key has a unit `a`. The same key may appear more than once when different
    /// matchings lead to it.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidParameters` if fewer than two symbols are matched and
    /// `ClassicCryptoError::UnknownSymbol` if the profile uses a symbol outside the alphabet.
    pub fn affine_candidates(
        &self,
        ciphertext: &str,
        profile: &LanguageProfile,
    ) -> Result<Vec<AffineKey>, ClassicCryptoError> {
        let (cipher_top, plain_top) = self.top_symbols(ciphertext, profile)?;
        let pairings = pairings(&cipher_top, &plain_top);

        let candidates: Vec<AffineKey> = pairings
            .iter()
            .flat_map(|&[(c1, p1), (c2, p2)]| solve_two_point((p1, c1), (p2, c2), &self.ring))
            .filter(|key| key.is_valid(&self.ring))
            .collect();

        log::debug!(
            "{} pairing(s) produced {} affine candidate(s)",
            pairings.len(),
            candidates.len()
        );
        Ok(candidates)
    }

    /// Multiplicative keys `k` with `cipher = k·plain` for some frequent pair, ascending.
    ///
    /// Only invertible keys are returned.
    ///
    /// # Errors
    ///
    /// Same as [`CandidateSearch::affine_candidates`].
    pub fn multiplicative_candidates(
        &self,
        ciphertext: &str,
        profile: &LanguageProfile,
    ) -> Result<Vec<i64>, ClassicCryptoError> {
        let (cipher_top, plain_top) = self.top_symbols(ciphertext, profile)?;
        let ring = &self.ring;

        Ok(cipher_top
            .iter()
            .cartesian_product(&plain_top)
            .filter_map(|(&c, &p)| ring.inv(p).ok().map(|p_inv| ring.mul(c, p_inv)))
            .filter(|&k| ring.is_unit(k))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }

    /// Shift keys `k` with `cipher = plain + k` for some frequent pair, ascending.
    ///
    /// # Errors
    ///
    /// Same as [`CandidateSearch::affine_candidates`].
    pub fn shift_candidates(
        &self,
        ciphertext: &str,
        profile: &LanguageProfile,
    ) -> Result<Vec<i64>, ClassicCryptoError> {
        let (cipher_top, plain_top) = self.top_symbols(ciphertext, profile)?;

        Ok(cipher_top
            .iter()
            .cartesian_product(&plain_top)
            .map(|(&c, &p)| self.ring.sub(c, p))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::affine::AffineCipher;
    use crate::preset::profiles::{ENGLISH, SPANISH};

    const SPANISH_TEXT: &str = "ESTEESUNMENSAJEDEPRUEBAPARAELANALISISDEFRECUENCIASQUESEESCRIBEENESPANOLCONLASLETRASMASCOMUNESDELIDIOMA";

    const ENGLISH_TEXT: &str = "THATTHETESTATTEMPTSTOTREATTHETOTALTEXTASATYPICALENGLISHTEXTWITHTHETEETOTALTOTTOO";

    fn search() -> CandidateSearch {
        CandidateSearch::new(Alphabet::latin()).unwrap()
    }

    #[test]
    fn test_pairings_are_deduplicated() {
        let cipher = [0, 1, 2, 3];
        let plain = [4, 19, 0, 14];
        let all = pairings(&cipher, &plain);
        // C(4,2) cipher sets times 4·3 ordered plain pairs
        assert_eq!(all.len(), 6 * 12);
        assert!(all.iter().all(|p| p[0].0 < p[1].0));
        assert_eq!(all.iter().collect::<BTreeSet<_>>().len(), all.len());
    }

    #[test]
    fn test_affine_candidates_contain_true_key() -> Result<(), ClassicCryptoError> {
        let search = search();
        let cipher = AffineCipher::new(Alphabet::latin())?;
        let key = AffineKey::new(5, 8);
        let ciphertext = cipher.encrypt(SPANISH_TEXT, &key).value;

        let candidates = search.affine_candidates(&ciphertext, &SPANISH)?;
        assert!(candidates.contains(&key));
        assert!(candidates.iter().all(|k| k.is_valid(search.ring())));
        Ok(())
    }

    #[test]
    fn test_shift_and_multiplicative_candidates() -> Result<(), ClassicCryptoError> {
        let search = search();
        let cipher = AffineCipher::new(Alphabet::latin())?;

        let shifted = cipher.encrypt(SPANISH_TEXT, &AffineKey::shift(5)).value;
        let shifts = search.shift_candidates(&shifted, &SPANISH)?;
        assert!(shifts.contains(&5));
        assert!(shifts.windows(2).all(|w| w[0] < w[1]));

        // E, A, O and S are all even, so no Spanish letter is a unit mod 26
        let multiplied = cipher.encrypt(SPANISH_TEXT, &AffineKey::multiplicative(11)).value;
        assert!(search.multiplicative_candidates(&multiplied, &SPANISH)?.is_empty());

        let multiplied = cipher.encrypt(ENGLISH_TEXT, &AffineKey::multiplicative(11)).value;
        let keys = search.multiplicative_candidates(&multiplied, &ENGLISH)?;
        assert_eq!(keys, vec![11, 15]);
        Ok(())
    }

    #[test]
    fn test_depth_is_validated() {
        let search = search().with_depth(1);
        assert!(matches!(
            search.affine_candidates("ABC", &ENGLISH),
            Err(ClassicCryptoError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_profile_outside_alphabet() {
        let search = CandidateSearch::new(Alphabet::from_text("ABCDEFGHIJ", None)).unwrap();
        assert!(matches!(
            search.affine_candidates("ABBA", &ENGLISH),
            Err(ClassicCryptoError::UnknownSymbol { symbol: 'T', .. })
        ));
    }

    #[test]
    fn test_single_symbol_ciphertext_has_no_candidates() -> Result<(), ClassicCryptoError> {
        assert!(search().affine_candidates("QQQQ", &ENGLISH)?.is_empty());
        Ok(())
    }
}
