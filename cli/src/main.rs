//! Command-line interface for `classic-crypto`.

#![forbid(unsafe_code)]

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use classic_crypto::diagnostics::Outcome;
use classic_crypto::ring::Matrix;
use classic_crypto::{
    AffineCipher, AffineKey, Alphabet, BlockLayout, CandidateSearch, FrequencyAnalyzer,
    HillCipher, HillKey, LanguageProfile,
};
use serde::Serialize;

/// Classical modular ciphers and frequency attacks.
#[derive(Parser)]
#[command(name = "classic", version, about = "Affine and Hill ciphers over custom alphabets")]
struct Cli {
    /// Alphabet file; the 26-letter Latin alphabet is used when absent or unreadable.
    #[arg(long, value_name = "FILE", global = true)]
    alphabet: Option<PathBuf>,
    /// Token separating the symbols of the alphabet file.
    #[arg(long, value_name = "TOKEN", global = true)]
    separator: Option<String>,
    /// Print results as JSON.
    #[arg(long, default_value_t = false, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Affine cipher `y = a·x + b (mod m)`.
    Affine {
        #[arg(value_enum)]
        direction: Direction,
        #[arg(long, allow_negative_numbers = true)]
        a: i64,
        #[arg(long, allow_negative_numbers = true)]
        b: i64,
        /// Message; read from stdin when omitted.
        text: Option<String>,
    },
    /// Hill block cipher.
    Hill {
        #[arg(value_enum)]
        direction: Direction,
        /// Key rows separated by ';', entries by ',', e.g. "3,3;2,5".
        #[arg(long, value_name = "ROWS")]
        matrix: String,
        #[arg(long, value_enum, default_value_t = Layout::Row)]
        layout: Layout,
        /// Symbol used to pad the last block.
        #[arg(long)]
        filler: Option<char>,
        /// Message; read from stdin when omitted.
        text: Option<String>,
    },
    /// Rank the symbols of a text by frequency.
    Rank {
        /// Text; read from stdin when omitted.
        text: Option<String>,
    },
    /// Guess keys from symbol frequencies.
    Search {
        #[arg(value_enum)]
        family: Family,
        /// Built-in profile name or the most frequent symbols of the language, e.g. "ETAOIN".
        #[arg(long, default_value = "english")]
        profile: String,
        /// How many top symbols of each side are matched.
        #[arg(long)]
        depth: Option<usize>,
        /// Ciphertext; read from stdin when omitted.
        text: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Direction {
    Encrypt,
    Decrypt,
}

#[derive(Clone, Copy, ValueEnum)]
enum Layout {
    Row,
    Column,
}

impl From<Layout> for BlockLayout {
    fn from(layout: Layout) -> Self {
        match layout {
            Layout::Row => BlockLayout::Row,
            Layout::Column => BlockLayout::Column,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Family {
    Affine,
    Multiplicative,
    Shift,
}

#[derive(Serialize)]
struct Candidate {
    key: AffineKey,
    preview: String,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let alphabet = load_alphabet(cli.alphabet.as_ref(), cli.separator.as_deref());
    match cli.command {
        Commands::Affine {
            direction,
            a,
            b,
            text,
        } => cmd_affine(alphabet, direction, AffineKey::new(a, b), text, cli.json),
        Commands::Hill {
            direction,
            matrix,
            layout,
            filler,
            text,
        } => cmd_hill(alphabet, direction, &matrix, layout, filler, text, cli.json),
        Commands::Rank { text } => cmd_rank(alphabet, text, cli.json),
        Commands::Search {
            family,
            profile,
            depth,
            text,
        } => cmd_search(alphabet, family, &profile, depth, text, cli.json),
    }
}

fn cmd_affine(
    alphabet: Alphabet,
    direction: Direction,
    key: AffineKey,
    text: Option<String>,
    json: bool,
) -> Result<()> {
    let cipher = AffineCipher::new(alphabet).context("build affine cipher")?;
    let text = read_text(text)?;
    let outcome = match direction {
        Direction::Encrypt => cipher.encrypt(&text, &key),
        Direction::Decrypt => cipher.decrypt(&text, &key).context("decrypt")?,
    };
    report_skipped(&outcome);
    emit(&outcome.value, json)
}

fn cmd_hill(
    alphabet: Alphabet,
    direction: Direction,
    matrix: &str,
    layout: Layout,
    filler: Option<char>,
    text: Option<String>,
    json: bool,
) -> Result<()> {
    let mut cipher = HillCipher::new(alphabet)
        .context("build Hill cipher")?
        .with_layout(layout.into());
    if let Some(filler) = filler {
        cipher = cipher.with_filler(filler).context("set filler")?;
    }
    let key = HillKey::try_with(parse_matrix(matrix)?, cipher.ring()).context("parse key")?;

    let text = read_text(text)?;
    let result = match direction {
        Direction::Encrypt => cipher.encrypt(&text, &key).context("encrypt")?,
        Direction::Decrypt => cipher.decrypt(&text, &key).context("decrypt")?,
    };
    emit(&result, json)
}

fn cmd_rank(alphabet: Alphabet, text: Option<String>, json: bool) -> Result<()> {
    let analyzer = FrequencyAnalyzer::new(alphabet);
    let outcome = analyzer.rank(&read_text(text)?);
    report_skipped(&outcome);

    if json {
        return emit_json(&outcome.value);
    }
    for (symbol, count) in outcome.value.iter() {
        println!("{symbol} {count}");
    }
    Ok(())
}

fn cmd_search(
    alphabet: Alphabet,
    family: Family,
    profile: &str,
    depth: Option<usize>,
    text: Option<String>,
    json: bool,
) -> Result<()> {
    let profile = match LanguageProfile::builtin(profile) {
        Some(builtin) => builtin.clone(),
        None => LanguageProfile::try_with("custom", profile).context("parse profile")?,
    };

    let cipher = AffineCipher::new(alphabet.clone()).context("build affine cipher")?;
    let mut search = CandidateSearch::new(alphabet).context("build search")?;
    if let Some(depth) = depth {
        search = search.with_depth(depth);
    }

    let ciphertext = read_text(text)?;
    let keys: Vec<AffineKey> = match family {
        Family::Affine => search.affine_candidates(&ciphertext, &profile)?,
        Family::Multiplicative => search
            .multiplicative_candidates(&ciphertext, &profile)?
            .into_iter()
            .map(AffineKey::multiplicative)
            .collect(),
        Family::Shift => search
            .shift_candidates(&ciphertext, &profile)?
            .into_iter()
            .map(AffineKey::shift)
            .collect(),
    };
    log::info!("{} candidate key(s) for profile '{}'", keys.len(), profile.name);

    let preview_source: String = ciphertext.chars().take(40).collect();
    let candidates = keys
        .into_iter()
        .map(|key| {
            let preview = cipher.decrypt(&preview_source, &key)?.into_value();
            Ok(Candidate { key, preview })
        })
        .collect::<Result<Vec<_>>>()?;

    if json {
        return emit_json(&candidates);
    }
    for Candidate { key, preview } in &candidates {
        println!("a={:<3} b={:<3} {}", key.a, key.b, preview);
    }
    Ok(())
}

fn load_alphabet(path: Option<&PathBuf>, separator: Option<&str>) -> Alphabet {
    let Some(path) = path else {
        return Alphabet::latin();
    };
    match Alphabet::load(path, separator) {
        (alphabet, None) => {
            log::debug!("loaded {} symbols from {}", alphabet.len(), path.display());
            alphabet
        }
        (_, Some(_)) => {
            log::warn!("falling back to the Latin alphabet");
            Alphabet::latin()
        }
    }
}

/// Parses `"3,3;2,5"` into `[[3, 3], [2, 5]]`.
fn parse_matrix(raw: &str) -> Result<Matrix> {
    let matrix = raw
        .split(';')
        .map(|row| {
            row.split(',')
                .map(|entry| {
                    entry
                        .trim()
                        .parse::<i64>()
                        .with_context(|| format!("invalid matrix entry '{}'", entry.trim()))
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Matrix>>()?;

    if matrix.iter().any(|row| row.len() != matrix.len()) {
        bail!("matrix must be square, got '{raw}'");
    }
    Ok(matrix)
}

fn read_text(text: Option<String>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("read stdin")?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn report_skipped<T>(outcome: &Outcome<T>) {
    for skipped in &outcome.skipped {
        log::warn!(
            "skipped '{}' at position {}",
            skipped.symbol.escape_debug(),
            skipped.position
        );
    }
}

fn emit(text: &str, json: bool) -> Result<()> {
    if json {
        return emit_json(&text);
    }
    println!("{text}");
    Ok(())
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("serialize output")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_square_matrix() {
        assert_eq!(parse_matrix("3,3;2,5").unwrap(), vec![vec![3, 3], vec![2, 5]]);
        assert_eq!(parse_matrix(" 7 ").unwrap(), vec![vec![7]]);
    }

    #[test]
    fn rejects_malformed_matrix() {
        assert!(parse_matrix("1,2;3").is_err());
        assert!(parse_matrix("1,x;3,4").is_err());
        assert!(parse_matrix("").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
