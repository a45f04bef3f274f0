use num_integer::Integer;

/// Computes the greatest common divisor of two numbers.
///
/// The result is always non-negative, `gcd(0, 0) == 0`.
pub fn gcd(a: i64, b: i64) -> i64 {
    a.gcd(&b)
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let egcd = a.extended_gcd(&b);
    (egcd.gcd, egcd.x, egcd.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(1, 26), 1);
        assert_eq!(gcd(7, 26), 1);
        assert_eq!(gcd(2, 26), 2);
        assert_eq!(gcd(13, 26), 13);
        assert_eq!(gcd(20, 26), 2);
        assert_eq!(gcd(26, 26), 26);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-4, 6), 2);
    }

    #[test]
    fn test_equivalence_with_extended_gcd() {
        let (g, _, _) = extended_gcd(12, 8);
        assert_eq!(g, gcd(12, 8));
    }

    #[test]
    fn test_extended_gcd_basic() {
        let (g, x, y) = extended_gcd(12, 8);
        assert_eq!(g, 4);
        assert_eq!(12 * x + 8 * y, g);

        let (g, x, y) = extended_gcd(7, 26);
        assert_eq!(g, 1);
        assert_eq!(7 * x + 26 * y, g);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, _x, y) = extended_gcd(0, 15);
        assert_eq!(g, 15);
        assert_eq!(15 * y, g);

        let (g, x, _y) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);
    }

    #[test]
    fn test_extended_gcd_negative() {
        let (g, x, y) = extended_gcd(-15, 10);
        assert_eq!(g, 5);
        assert_eq!(-15 * x + 10 * y, g);

        let (g, x, y) = extended_gcd(-12, -9);
        assert_eq!(g, 3);
        assert_eq!(-12 * x + (-9) * y, g);
    }
}
