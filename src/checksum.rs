use crate::matrix::{A_CARDINALITY, BLOCK_ROWS, MATRIX_DIM, NUM_BLOCKS};

/// Reference checksum for one set of test matrices.
///
/// Worst case is about 2^30 for `ab_sum` and 2^23 for `c_sum`, so u64
/// accumulation can never overflow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checksum {
    /// Sum of all 128 row-dot-products of A with B.
    pub ab_sum: u64,
    /// Sum of the 128 elements of C.
    pub c_sum: u64,
}

impl Checksum {
    /// The value the matrix-multiply hardware is expected to produce.
    pub fn total(&self) -> u64 {
        self.ab_sum + self.c_sum
    }
}

/// Single-pass checksum over freshly generated matrices: accumulate every
/// row-dot-product of A with B, and the sum of C, in one sweep.
pub fn reference_checksum(a: &[u8], b: &[u8], c: &[u16]) -> Checksum {
    assert_eq!(a.len(), A_CARDINALITY);
    assert_eq!(b.len(), MATRIX_DIM);
    assert_eq!(c.len(), MATRIX_DIM);

    let ab_sum = a
        .chunks_exact(MATRIX_DIM)
        .map(|row| {
            row.iter()
                .zip(b.iter())
                .map(|(&x, &y)| u64::from(x) * u64::from(y))
                .sum::<u64>()
        })
        .sum();
    let c_sum = c.iter().map(|&v| u64::from(v)).sum();

    Checksum { ab_sum, c_sum }
}

/// Per-block sums over a decoded matrix A: block k covers rows
/// [8k, 8k + 8); each block's 8x128 product with B is collapsed to one
/// scalar. Returns the 16 block scalars in row order.
pub fn block_sums(a: &[u64], b: &[u64]) -> Vec<u64> {
    assert_eq!(a.len(), A_CARDINALITY);
    assert_eq!(b.len(), MATRIX_DIM);

    let sums: Vec<u64> = a
        .chunks_exact(BLOCK_ROWS * MATRIX_DIM)
        .map(|block| {
            block
                .chunks_exact(MATRIX_DIM)
                .map(|row| dot(row, b))
                .sum()
        })
        .collect();
    debug_assert_eq!(sums.len(), NUM_BLOCKS);
    sums
}

/// Sum of the per-block scalars.
pub fn accumulate(sums: &[u64]) -> u64 {
    sums.iter().sum()
}

/// Sum of a decoded vector (used for C).
pub fn vector_sum(values: &[u64]) -> u64 {
    values.iter().sum()
}

fn dot(row: &[u64], b: &[u64]) -> u64 {
    row.iter().zip(b.iter()).map(|(&x, &y)| x * y).sum()
}
