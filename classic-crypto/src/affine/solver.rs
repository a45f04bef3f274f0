//! Known-plaintext solver for `y ≡ a·x + b (mod m)`.

use crate::affine::AffineKey;
use crate::ring::{Ring, gcd};

/// A known (plaintext, ciphertext) pair of ring elements.
pub type Observation = (i64, i64);

/// Every `(a, b)` with `y1 ≡ a·x1 + b` and `y2 ≡ a·x2 + b (mod m)`.
///
/// With `dx = x2 - x1`, `dy = y2 - y1` and `g = gcd(dx, m)` the system is solvable iff
/// `g | dy`, and then it has exactly `g` solutions:
/// `a_k = a0 + k·(m/g)` for `k in 0..g`, where `a0 = (dy/g)·(dx/g)^-1 mod m/g`.
/// Inconsistent observations give an empty vector.
///
/// The returned `a` values are not filtered: callers that need a usable key must keep only
/// the ones for which [`AffineKey::is_valid`] holds.
///
/// # Example
///
/// ```
/// # use classic_crypto::affine::{AffineKey, solve_two_point};
/// # use classic_crypto::ring::Ring;
/// let ring = Ring::try_with(26).unwrap();
/// // 'E'(4) -> 'E'(4), 'Y'(24) -> 'S'(18): gcd(20, 26) = 2 solutions
/// let keys = solve_two_point((4, 4), (24, 18), &ring);
/// assert_eq!(keys, vec![AffineKey::new(2, 22), AffineKey::new(15, 22)]);
/// // only a = 15 is a unit of Z_26
/// assert_eq!(keys.iter().filter(|k| k.is_valid(&ring)).count(), 1);
/// ```
pub fn solve_two_point(p1: Observation, p2: Observation, ring: &Ring) -> Vec<AffineKey> {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let m = ring.modulus() as i64;

    let dx = ring.sub(x2, x1);
    let dy = ring.sub(y2, y1);
    let g = gcd(dx, m);

    if dy % g != 0 {
        log::trace!("no affine map sends {:?} and {:?}", p1, p2);
        return Vec::new();
    }

    let reduced_modulus = m / g;
    let a0 = if reduced_modulus == 1 {
        0
    } else {
        // gcd(dx/g, m/g) == 1 by construction, so the inverse exists.
        let base = Ring::try_with(reduced_modulus as u64)
            .and_then(|reduced| Ok(reduced.mul(dy / g, reduced.inv(dx / g)?)));
        match base {
            Ok(a0) => a0,
            Err(_) => return Vec::new(),
        }
    };

    (0..g)
        .map(|k| {
            let a = ring.normalize(a0 + k * reduced_modulus);
            let b = ring.sub(y1, ring.mul(a, x1));
            AffineKey::new(a, b)
        })
        .collect()
}
