#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassicCryptoError {
    /// A character that is not part of the configured alphabet.
    #[error("UnknownSymbol: '{symbol}' at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: char, position: usize },
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// The affine multiplier is not a unit of the ring.
    #[error("NonInvertibleKey: {0}")]
    NonInvertibleKey(String),
    /// The Hill key determinant is not a unit of the ring.
    #[error("SingularMatrix: {0}")]
    SingularMatrix(String),
    /// Error when creating a ring with an invalid modulus (m <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("Symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(char),
    #[error("Index {index} is outside the alphabet of size {size}")]
    IndexOutOfRange { index: i64, size: usize },
    #[error("Could not load alphabet from {path}: {reason}")]
    AlphabetLoad { path: String, reason: String },

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
}
