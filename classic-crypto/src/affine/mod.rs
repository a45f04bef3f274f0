//! # Affine Cipher Module
//!
//! Single-symbol transform `y = a·x + b (mod m)` over an [`Alphabet`], together with the
//! two-point known-plaintext solver in [`solver`].

pub mod solver;

pub use solver::{Observation, solve_two_point};

use crate::alphabet::Alphabet;
use crate::diagnostics::Outcome;
use crate::errors::ClassicCryptoError;
use crate::ring::Ring;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Affine key `(a, b)`. `a` must be a unit of the ring to decrypt; this is checked when the
/// key is used, not when it is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AffineKey {
    pub a: i64,
    pub b: i64,
}

impl AffineKey {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// The shift (Caesar) key `x + k`.
    pub fn shift(k: i64) -> Self {
        Self { a: 1, b: k }
    }

    /// The multiplicative key `k·x`.
    pub fn multiplicative(k: i64) -> Self {
        Self { a: k, b: 0 }
    }

    /// `a` is a unit and `b` lies in `[0, m)`.
    pub fn is_valid(&self, ring: &Ring) -> bool {
        ring.is_unit(self.a) && (0..ring.modulus() as i64).contains(&self.b)
    }

    /// Both components reduced into `[0, m)`.
    pub fn normalized(&self, ring: &Ring) -> Self {
        Self {
            a: ring.normalize(self.a),
            b: ring.normalize(self.b),
        }
    }

    /// Applies the map to a single ring element.
    pub fn apply(&self, x: i64, ring: &Ring) -> i64 {
        ring.add(ring.mul(self.a, x), self.b)
    }

    /// The decryption map `x = a^-1·y - a^-1·b`, as an affine key.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NonInvertibleKey` if `a` is not a unit.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::affine::AffineKey;
    /// # use classic_crypto::ring::Ring;
    /// let ring = Ring::try_with(26).unwrap();
    /// let inverse = AffineKey::new(7, 2).inverse(&ring).unwrap();
    /// assert_eq!(inverse, AffineKey::new(15, 22));
    /// ```
    pub fn inverse(&self, ring: &Ring) -> Result<Self, ClassicCryptoError> {
        let a_inv = ring.inv(self.a).map_err(|_| {
            ClassicCryptoError::NonInvertibleKey(format!(
                "a = {} has no inverse mod {}",
                self.a,
                ring.modulus()
            ))
        })?;

        Ok(Self {
            a: a_inv,
            b: ring.neg(ring.mul(a_inv, self.b)),
        })
    }

    /// Draws a key whose `a` is a unit of the ring.
    pub fn random<R: Rng>(ring: &Ring, rng: &mut R) -> Self {
        let m = ring.modulus() as i64;
        loop {
            let a = rng.random_range(1..m);
            if ring.is_unit(a) {
                return Self {
                    a,
                    b: rng.random_range(0..m),
                };
            }
        }
    }
}

/// Affine cipher bound to one alphabet.
#[derive(Debug, Clone)]
pub struct AffineCipher {
    alphabet: Alphabet,
    ring: Ring,
}

impl AffineCipher {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidModulus` if the alphabet has fewer than two symbols.
    pub fn new(alphabet: Alphabet) -> Result<Self, ClassicCryptoError> {
        let ring = alphabet.ring()?;
        Ok(Self { alphabet, ring })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Encrypts every in-alphabet symbol of `message`; the others are skipped and reported.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::affine::{AffineCipher, AffineKey};
    /// # use classic_crypto::alphabet::Alphabet;
    /// let cipher = AffineCipher::new(Alphabet::latin()).unwrap();
    /// let outcome = cipher.encrypt("hello!", &AffineKey::new(7, 2));
    /// assert_eq!(outcome.value, "ZEBBW");
    /// assert_eq!(outcome.skipped_symbols(), vec!['!']);
    /// ```
    pub fn encrypt(&self, message: &str, key: &AffineKey) -> Outcome<String> {
        if !self.ring.is_unit(key.a) {
            log::warn!(
                "encrypting with a = {} which is not a unit mod {}; the result cannot be decrypted",
                key.a,
                self.ring.modulus()
            );
        }
        self.transform(message, key)
    }

    /// Decrypts every in-alphabet symbol of `message`; the others are skipped and reported.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::NonInvertibleKey` if `key.a` has no inverse.
    pub fn decrypt(
        &self,
        message: &str,
        key: &AffineKey,
    ) -> Result<Outcome<String>, ClassicCryptoError> {
        let inverse = key.inverse(&self.ring)?;
        Ok(self.transform(message, &inverse))
    }

    fn transform(&self, message: &str, key: &AffineKey) -> Outcome<String> {
        let encoded = self.alphabet.encode_text(message);
        let ring = &self.ring;
        let alphabet = &self.alphabet;
        encoded.map(|values| {
            values
                .into_iter()
                .filter_map(|x| alphabet.decode(key.apply(x, ring)).ok())
                .collect()
        })
    }
}
