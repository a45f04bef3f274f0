//! # Hill Cipher Module
//!
//! Block cipher over Z_m: every block of `n` symbols is multiplied by an `n×n` key matrix.
//! Decryption multiplies by the modular inverse of the key, built from the adjugate and the
//! inverse of the determinant (see [`crate::ring::matrix_ops`]).

use crate::alphabet::{Alphabet, normalize_symbol};
use crate::errors::ClassicCryptoError;
use crate::preset::alphabets::DEFAULT_FILLER;
use crate::ring::matrix_ops::{
    adjugate, determinant, matrix_inverse, matrix_vector_mul, square_dimension,
    vector_matrix_mul,
};
use crate::ring::{Matrix, Ring, Vector};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How a block is multiplied by the key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockLayout {
    /// `v·K`, the block is a row vector.
    #[default]
    Row,
    /// `K·v`, the block is a column vector (textbook convention).
    Column,
}

/// Square key matrix with every entry reduced into `[0, m)`.
///
/// Deserialization goes through [`HillKey::try_from`], so a deserialized key is always
/// square and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Matrix", into = "Matrix")]
pub struct HillKey {
    matrix: Matrix,
}

impl HillKey {
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::DimensionMismatch` if the matrix is empty or not square.
    pub fn try_with(matrix: Matrix, ring: &Ring) -> Result<Self, ClassicCryptoError> {
        let key = Self::try_from(matrix)?;
        let matrix = key
            .matrix
            .into_iter()
            .map(|row| row.into_iter().map(|v| ring.normalize(v)).collect())
            .collect();
        Ok(Self { matrix })
    }

    /// Draws a key whose determinant is a unit, so it can be used for decryption.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidParameters` for `n == 0`.
    pub fn random<R: Rng>(n: usize, ring: &Ring, rng: &mut R) -> Result<Self, ClassicCryptoError> {
        if n == 0 {
            return Err(ClassicCryptoError::InvalidParameters(
                "Hill key dimension must be > 0".into(),
            ));
        }

        let m = ring.modulus() as i64;
        loop {
            let matrix: Matrix = (0..n)
                .map(|_| (0..n).map(|_| rng.random_range(0..m)).collect())
                .collect();
            if ring.is_unit(determinant(&matrix, ring)?) {
                return Ok(Self { matrix });
            }
        }
    }

    pub fn dimension(&self) -> usize {
        self.matrix.len()
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    pub fn determinant(&self, ring: &Ring) -> Result<i64, ClassicCryptoError> {
        determinant(&self.matrix, ring)
    }

    pub fn adjugate(&self, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
        adjugate(&self.matrix, ring)
    }

    /// `true` when the determinant is a unit of the ring.
    pub fn is_invertible(&self, ring: &Ring) -> bool {
        self.determinant(ring).is_ok_and(|det| ring.is_unit(det))
    }

    /// The decryption key.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::SingularMatrix` if the determinant is not a unit.
    pub fn inverse(&self, ring: &Ring) -> Result<Self, ClassicCryptoError> {
        Ok(Self {
            matrix: matrix_inverse(&self.matrix, ring)?,
        })
    }
}

impl TryFrom<Matrix> for HillKey {
    type Error = ClassicCryptoError;

    /// Checks the shape only; entries are reduced by the ring operations when the key is used.
    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        if square_dimension(&matrix)? == 0 {
            return Err(ClassicCryptoError::DimensionMismatch(
                "Hill key must have at least one row".into(),
            ));
        }
        Ok(Self { matrix })
    }
}

impl From<HillKey> for Matrix {
    fn from(key: HillKey) -> Self {
        key.matrix
    }
}

/// Hill cipher bound to one alphabet.
#[derive(Debug, Clone)]
pub struct HillCipher {
    alphabet: Alphabet,
    ring: Ring,
    filler: char,
    layout: BlockLayout,
}

impl HillCipher {
    /// A cipher using the row layout and padding with `'X'`, or with the last symbol of
    /// the alphabet when it has no `'X'`.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::InvalidModulus` if the alphabet has fewer than two symbols.
    pub fn new(alphabet: Alphabet) -> Result<Self, ClassicCryptoError> {
        let ring = alphabet.ring()?;
        let filler = if alphabet.contains(DEFAULT_FILLER) {
            DEFAULT_FILLER
        } else {
            let last = alphabet.symbols()[alphabet.len() - 1];
            log::debug!("alphabet has no {:?}, padding with {:?}", DEFAULT_FILLER, last);
            last
        };

        Ok(Self {
            alphabet,
            ring,
            filler,
            layout: BlockLayout::default(),
        })
    }

    /// Replaces the padding symbol.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::UnknownSymbol` if `filler` is not in the alphabet.
    pub fn with_filler(mut self, filler: char) -> Result<Self, ClassicCryptoError> {
        self.alphabet.encode(filler)?;
        self.filler = normalize_symbol(filler);
        Ok(self)
    }

    pub fn with_layout(mut self, layout: BlockLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn filler(&self) -> char {
        self.filler
    }

    pub fn layout(&self) -> BlockLayout {
        self.layout
    }

    /// Encrypts `message`, padding the last block with the filler symbol.
    ///
    /// The whole message is validated before any block is transformed.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::UnknownSymbol` for the first symbol outside the alphabet.
    ///
    /// # Example
    ///
    /// ```
    /// # use classic_crypto::alphabet::Alphabet;
    /// # use classic_crypto::hill::{HillCipher, HillKey};
    /// let cipher = HillCipher::new(Alphabet::latin()).unwrap();
    /// let key = HillKey::try_with(vec![vec![3, 3], vec![2, 5]], cipher.ring()).unwrap();
    /// assert_eq!(cipher.encrypt("HELP", &key).unwrap(), "DPLE");
    /// assert_eq!(cipher.encrypt("HEL", &key).unwrap(), cipher.encrypt("HELX", &key).unwrap());
    /// ```
    pub fn encrypt(&self, message: &str, key: &HillKey) -> Result<String, ClassicCryptoError> {
        let mut values = self.alphabet.encode_all(message)?;

        let n = key.dimension();
        let filler = self.alphabet.encode(self.filler)?;
        while values.len() % n != 0 {
            values.push(filler);
        }

        self.transform(&values, key.matrix())
    }

    /// Decrypts `message` with the inverse of `key`. No padding is removed.
    ///
    /// # Errors
    ///
    /// Returns `ClassicCryptoError::SingularMatrix` if the key is not invertible,
    /// `ClassicCryptoError::UnknownSymbol` for symbols outside the alphabet and
    /// `ClassicCryptoError::DimensionMismatch` if the length is not a multiple of the block size.
    pub fn decrypt(&self, message: &str, key: &HillKey) -> Result<String, ClassicCryptoError> {
        let inverse = key.inverse(&self.ring)?;
        let values = self.alphabet.encode_all(message)?;

        let n = key.dimension();
        if values.len() % n != 0 {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Ciphertext length {} is not a multiple of the block size {}",
                values.len(),
                n
            )));
        }

        self.transform(&values, inverse.matrix())
    }

    fn transform(&self, values: &[i64], matrix: &Matrix) -> Result<String, ClassicCryptoError> {
        let n = matrix.len();
        let mut out: Vector = Vec::with_capacity(values.len());
        for block in values.chunks(n) {
            let block = block.to_vec();
            let transformed = match self.layout {
                BlockLayout::Column => matrix_vector_mul(matrix, &block, &self.ring)?,
                BlockLayout::Row => vector_matrix_mul(&block, matrix, &self.ring)?,
            };
            out.extend(transformed);
        }
        self.alphabet.decode_all(&out)
    }
}
