use crate::errors::ClassicCryptoError;
use crate::ring::{Matrix, Ring, Vector};

/// A·x where A is an m×n matrix and x is a length–n vector.
/// Returns an m‐vector.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, ClassicCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        let mut sum = 0i64;
        for j in 0..n {
            let term = ring.mul(a[i][j], x[j]);
            sum = ring.add(sum, term);
        }
        y[i] = sum;
    }
    Ok(y)
}

/// x·A where x is a length–m row‐vector and A is m×n.
/// Returns a length–n row‐vector.
pub fn vector_matrix_mul(x: &Vector, a: &Matrix, ring: &Ring) -> Result<Vector, ClassicCryptoError> {
    let m = x.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    if a.len() != m {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "Vector length ({}) must match matrix rows ({})",
            m,
            a.len()
        )));
    }
    let n = a[0].len();
    // sanity‐check ragged rows
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
    }

    let mut y = vec![0i64; n];
    for j in 0..n {
        let mut sum = 0i64;
        for i in 0..m {
            let term = ring.mul(x[i], a[i][j]);
            sum = ring.add(sum, term);
        }
        y[j] = sum;
    }
    Ok(y)
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A
    if b.len() != m_common {
        return Err(ClassicCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    if m_common == 0 {
        return Ok(vec![Vec::new(); n]);
    }
    let p = b[0].len(); // cols in B

    let mut c = vec![vec![0; p]; n];

    for i in 0..n {
        if a[i].len() != m_common {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            #[allow(clippy::needless_range_loop)]
            for k in 0..m_common {
                if b[k].len() != p {
                    return Err(ClassicCryptoError::DimensionMismatch(format!(
                        "Matrix B row {} has incorrect length (expected {})",
                        k, p
                    )));
                }
                let term = ring.mul(a[i][k], b[k][j]);
                sum = ring.add(sum, term);
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Swaps rows and columns.
pub fn transpose(matrix: &Matrix) -> Matrix {
    let rows = matrix.len();
    if rows == 0 {
        return Matrix::new();
    }
    let cols = matrix[0].len();
    (0..cols)
        .map(|j| (0..rows).map(|i| matrix[i][j]).collect())
        .collect()
}

/// Returns the number of rows of `matrix` if it is square and non-ragged.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` otherwise.
pub fn square_dimension(matrix: &Matrix) -> Result<usize, ClassicCryptoError> {
    let n = matrix.len();
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(ClassicCryptoError::DimensionMismatch(format!(
                "Matrix must be square: row {} has length {} but there are {} rows",
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(n)
}

/// The (n-1)×(n-1) matrix left after deleting `row` and `col`.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

/// Determinant of a square matrix modulo `m`, by cofactor expansion along the first row.
///
/// Every intermediate value is an exact integer reduced into `[0, m)`, so the result is
/// correct for any dimension. The empty matrix has determinant 1.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` if the matrix is not square.
///
/// # Example
///
/// ```
/// # use classic_crypto::ring::{Ring, matrix_ops::determinant};
/// let ring = Ring::try_with(26).unwrap();
/// let key = vec![vec![3, 3], vec![2, 5]];
/// assert_eq!(determinant(&key, &ring).unwrap(), 9);
/// ```
pub fn determinant(matrix: &Matrix, ring: &Ring) -> Result<i64, ClassicCryptoError> {
    square_dimension(matrix)?;
    Ok(cofactor_expansion(matrix, ring))
}

fn cofactor_expansion(matrix: &Matrix, ring: &Ring) -> i64 {
    match matrix.len() {
        0 => ring.normalize(1),
        1 => ring.normalize(matrix[0][0]),
        2 => ring.sub(
            ring.mul(matrix[0][0], matrix[1][1]),
            ring.mul(matrix[0][1], matrix[1][0]),
        ),
        n => {
            let mut det = 0i64;
            for j in 0..n {
                let a = ring.normalize(matrix[0][j]);
                if a == 0 {
                    continue;
                }
                let term = ring.mul(a, cofactor_expansion(&minor(matrix, 0, j), ring));
                det = if j % 2 == 0 {
                    ring.add(det, term)
                } else {
                    ring.sub(det, term)
                };
            }
            det
        }
    }
}

/// Adjugate (transposed cofactor matrix) of a square matrix modulo `m`.
///
/// Cell `(j, i)` of the result is `(-1)^(i+j) · det(minor(i, j))`, normalized into `[0, m)`.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` if the matrix is not square.
pub fn adjugate(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = square_dimension(matrix)?;
    if n == 1 {
        return Ok(vec![vec![ring.normalize(1)]]);
    }

    let mut cofactors = vec![vec![0i64; n]; n];
    for (i, row) in cofactors.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let minor_det = cofactor_expansion(&minor(matrix, i, j), ring);
            *cell = if (i + j) % 2 == 0 {
                minor_det
            } else {
                ring.neg(minor_det)
            };
        }
    }

    Ok(transpose(&cofactors))
}

/// Inverse of a square matrix modulo `m` via `det^-1 · adj(A)`.
///
/// # Errors
///
/// Returns `ClassicCryptoError::DimensionMismatch` if the matrix is not square and
/// `ClassicCryptoError::SingularMatrix` if its determinant is not a unit of the ring.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, ClassicCryptoError> {
    let n = square_dimension(matrix)?;
    // empty = empty
    if n == 0 {
        return Ok(Vec::new());
    }

    let det = determinant(matrix, ring)?;
    let det_inv = ring.inv(det).map_err(|_| {
        ClassicCryptoError::SingularMatrix(format!(
            "Determinant {} is not invertible mod {}",
            det,
            ring.modulus()
        ))
    })?;

    let adj = adjugate(matrix, ring)?;
    Ok(adj
        .iter()
        .map(|row| row.iter().map(|&v| ring.mul(det_inv, v)).collect())
        .collect())
}
