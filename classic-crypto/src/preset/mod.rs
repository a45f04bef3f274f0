//! Built-in alphabets and language frequency profiles.

pub mod alphabets;
pub mod profiles;

pub use profiles::LanguageProfile;
