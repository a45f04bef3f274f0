use classic_crypto::errors::ClassicCryptoError;
use classic_crypto::{AffineCipher, AffineKey, Alphabet, CandidateSearch, HillCipher, HillKey};

use std::fs;

#[test]
fn happy_flow() -> Result<(), ClassicCryptoError> {
    let alphabet = Alphabet::latin();
    let affine = AffineCipher::new(alphabet.clone())?;
    let hill = HillCipher::new(alphabet)?;

    let original = "ATTACKATDAWN";

    let key = AffineKey::new(7, 2);
    let cipher = affine.encrypt(original, &key);
    assert!(cipher.is_clean());
    assert_eq!(affine.decrypt(&cipher.value, &key)?.value, original);

    let matrix = HillKey::try_with(vec![vec![3, 3], vec![2, 5]], hill.ring())?;
    let cipher = hill.encrypt(original, &matrix)?;
    assert_eq!(hill.decrypt(&cipher, &matrix)?, original);

    Ok(())
}

#[test]
fn custom_alphabet_from_file() -> Result<(), ClassicCryptoError> {
    let path = std::env::temp_dir().join(format!("classic-crypto-alphabet-{}.txt", std::process::id()));
    fs::write(&path, "a;b;c;d;e;f;g;h;i;j;k;l;m;n;ñ;o;p;q;r;s;t;u;v;w;x;y;z;a\n")
        .expect("write alphabet file");

    let (alphabet, err) = Alphabet::load(&path, Some(";"));
    fs::remove_file(&path).ok();
    assert!(err.is_none());
    assert_eq!(alphabet.len(), 27);
    assert_eq!(alphabet.encode('Ñ')?, 14);

    let cipher = AffineCipher::new(alphabet.clone())?;
    let key = AffineKey::new(5, 3);
    let encrypted = cipher.encrypt("El niño sueña", &key);
    // the two spaces
    assert_eq!(encrypted.skipped.len(), 2);
    assert_eq!(cipher.decrypt(&encrypted.value, &key)?.value, "ELNIÑOSUEÑA");

    let hill = HillCipher::new(alphabet)?;
    let matrix = HillKey::try_with(vec![vec![1, 2], vec![3, 5]], hill.ring())?;
    assert_eq!(hill.decrypt(&hill.encrypt("MAÑANA", &matrix)?, &matrix)?, "MAÑANA");
    Ok(())
}

#[test]
fn missing_alphabet_is_a_configuration_error() {
    let (alphabet, err) = Alphabet::load("/nonexistent/alphabet.txt", None);
    assert!(matches!(err, Some(ClassicCryptoError::AlphabetLoad { .. })));
    assert!(alphabet.is_empty());

    assert!(AffineCipher::new(alphabet.clone()).is_err());
    assert!(HillCipher::new(alphabet.clone()).is_err());
    assert!(CandidateSearch::new(alphabet).is_err());
}

#[test]
fn recovered_candidate_decrypts_message() -> Result<(), ClassicCryptoError> {
    let cipher = AffineCipher::new(Alphabet::latin())?;
    let search = CandidateSearch::new(Alphabet::latin())?;
    let profile = classic_crypto::LanguageProfile::try_with("custom", "ETAOINSH")?;

    let plain = "THEREISNOTHINGTHATTHESEATTESTATIONSCANNOTESTABLISHATTHEONSETOFTHETEST";
    let key = AffineKey::new(17, 9);
    let encrypted = cipher.encrypt(plain, &key).value;

    let candidates = search.with_depth(3).affine_candidates(&encrypted, &profile)?;
    let recovered = candidates
        .iter()
        .find(|k| cipher.decrypt(&encrypted, k).map(|o| o.value) == Ok(plain.to_string()));
    assert_eq!(recovered, Some(&key));
    Ok(())
}
