/// Symbols of the default alphabet, in index order.
pub const LATIN_SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Filler appended to the last Hill block when the message does not fill it.
pub const DEFAULT_FILLER: char = 'X';
