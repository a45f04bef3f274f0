use classic_crypto::preset::profiles::ENGLISH;
use classic_crypto::{AffineCipher, AffineKey, Alphabet, CandidateSearch, HillCipher, HillKey};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fake::Fake;
use fake::faker::lorem::en::Words;

/// About `len` upper-case letters of lorem text, nothing else.
fn make_string(len: usize) -> String {
    let mut s = String::with_capacity(len);
    while s.len() < len {
        let words: Vec<String> = Words(10..20).fake();
        s.extend(
            words
                .concat()
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_uppercase()),
        );
    }
    s.truncate(len);
    s
}

fn bench_sizes(c: &mut Criterion) {
    let affine = AffineCipher::new(Alphabet::latin()).expect("build affine cipher");
    let hill = HillCipher::new(Alphabet::latin()).expect("build hill cipher");
    let search = CandidateSearch::new(Alphabet::latin()).expect("build search");
    let affine_key = AffineKey::new(5, 8);
    let hill_key =
        HillKey::try_with(vec![vec![3, 3], vec![2, 5]], hill.ring()).expect("build hill key");

    let sizes: [(usize, &str); 2] = [(1_000, "1k"), (100_000, "100k")];

    let mut group = c.benchmark_group("Classic Ciphers Sizes");

    for (len, label) in sizes {
        let data = make_string(len);
        let ciphertext = affine.encrypt(&data, &affine_key).value;

        group.bench_with_input(BenchmarkId::new("affine_encrypt", label), &data, |b, d| {
            b.iter(|| black_box(affine.encrypt(black_box(d), &affine_key)));
        });

        group.bench_with_input(BenchmarkId::new("hill_encrypt", label), &data, |b, d| {
            b.iter(|| black_box(hill.encrypt(black_box(d), &hill_key).expect("encrypt")));
        });

        group.bench_with_input(
            BenchmarkId::new("affine_search", label),
            &ciphertext,
            |b, ctext| {
                b.iter(|| {
                    black_box(
                        search
                            .affine_candidates(black_box(ctext), &ENGLISH)
                            .expect("search"),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sizes);
criterion_main!(benches);
