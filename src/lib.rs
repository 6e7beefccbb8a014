pub mod checksum;
pub mod coe;
pub mod error;
pub mod matrix;

pub use checksum::{accumulate, block_sums, reference_checksum, vector_sum, Checksum};
pub use coe::{decode, encode, read_coe, write_coe, FieldWidth, RADIX_HEADER, VECTOR_HEADER};
pub use error::{MatmultError, Result};
pub use matrix::{
    take_expected, TestMatrices, A_CARDINALITY, BLOCK_ROWS, MATRIX_DIM, NUM_BLOCKS,
};

#[cfg(test)]
mod tests;
