use crate::error::{MatmultError, Result};
use rand::Rng;

/// Rows and columns of matrix A; also the length of vectors B and C.
pub const MATRIX_DIM: usize = 128;

/// Element count of A when flattened row-major.
pub const A_CARDINALITY: usize = MATRIX_DIM * MATRIX_DIM;

/// Rows per verification block.
pub const BLOCK_ROWS: usize = 8;

/// Number of verification blocks covering A.
pub const NUM_BLOCKS: usize = MATRIX_DIM / BLOCK_ROWS;

/// One set of test matrices: A (128x128, row-major), B (128x1), C (128x1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestMatrices {
    pub a: Vec<u8>,
    pub b: Vec<u8>,
    pub c: Vec<u16>,
}

impl TestMatrices {
    /// Draw a fresh set of matrices uniformly at random: A and B from
    /// [0, 255], C from [0, 65535].
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let a = (0..A_CARDINALITY).map(|_| rng.gen::<u8>()).collect();
        let b = (0..MATRIX_DIM).map(|_| rng.gen::<u8>()).collect();
        let c = (0..MATRIX_DIM).map(|_| rng.gen::<u16>()).collect();
        Self { a, b, c }
    }
}

/// Check a decoded value sequence against its expected cardinality.
///
/// A count mismatch is logged as a warning; only a count strictly below
/// `expected` is an error. Over-long input is truncated to the expected
/// count rather than rejected.
pub fn take_expected<'a>(name: &str, values: &'a [u64], expected: usize) -> Result<&'a [u64]> {
    if values.len() != expected {
        log::warn!(
            "expected {expected} values for {name}, got {}",
            values.len()
        );
    }
    if values.len() < expected {
        return Err(MatmultError::InsufficientData {
            name: name.to_string(),
            expected,
            got: values.len(),
        });
    }
    Ok(&values[..expected])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_random_dimensions() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mats = TestMatrices::random(&mut rng);
        assert_eq!(mats.a.len(), A_CARDINALITY);
        assert_eq!(mats.b.len(), MATRIX_DIM);
        assert_eq!(mats.c.len(), MATRIX_DIM);
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(42);
        let mut rng2 = ChaCha20Rng::seed_from_u64(42);
        assert_eq!(
            TestMatrices::random(&mut rng1),
            TestMatrices::random(&mut rng2)
        );
    }

    #[test]
    fn test_take_expected_exact() {
        let values = vec![1, 2, 3];
        assert_eq!(take_expected("B", &values, 3).unwrap(), &values[..]);
    }

    #[test]
    fn test_take_expected_truncates_overlong() {
        let values = vec![1, 2, 3, 4, 5];
        assert_eq!(take_expected("B", &values, 3).unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_take_expected_rejects_short() {
        let values = vec![1, 2];
        match take_expected("A", &values, 3).unwrap_err() {
            MatmultError::InsufficientData {
                name,
                expected,
                got,
            } => {
                assert_eq!(name, "A");
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
