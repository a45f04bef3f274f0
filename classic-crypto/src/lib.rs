//! Classical ciphers over the ring Z_m of an alphabet, and their cryptanalysis.
//!
//! - [`affine`]: `y = a·x + b` with the two-point known-plaintext solver.
//! - [`hill`]: block cipher by matrix multiplication, keys inverted through the adjugate.
//! - [`frequency`] and [`search`]: frequency ranking and candidate-key search.
//!
//! Every engine owns the [`alphabet::Alphabet`] it was built with; there is no global state.

pub mod affine;
pub mod alphabet;
pub mod diagnostics;
pub mod errors;
pub mod frequency;
pub mod hill;
pub mod preset;
pub mod ring;
pub mod search;

pub use affine::{AffineCipher, AffineKey};
pub use alphabet::Alphabet;
pub use diagnostics::{Outcome, SkippedSymbol};
pub use errors::ClassicCryptoError;
pub use frequency::{FrequencyAnalyzer, Ranking};
pub use hill::{BlockLayout, HillCipher, HillKey};
pub use preset::LanguageProfile;
pub use search::CandidateSearch;
