use super::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_generate_write_read_verify() {
    let mut rng = ChaCha20Rng::seed_from_u64(0xC0E);
    let mats = TestMatrices::random(&mut rng);
    let expected = reference_checksum(&mats.a, &mats.b, &mats.c);

    let dir = tempfile::tempdir().unwrap();
    let path_a = dir.path().join("matA.coe");
    let path_b = dir.path().join("matB.coe");
    let path_c = dir.path().join("matC.coe");
    write_coe(&path_a, &mats.a, FieldWidth::Byte).unwrap();
    write_coe(&path_b, &mats.b, FieldWidth::Byte).unwrap();
    write_coe(&path_c, &mats.c, FieldWidth::Word).unwrap();

    // Verification path: decode the files and recompute block-wise.
    let a = read_coe(&path_a).unwrap();
    let b = read_coe(&path_b).unwrap();
    let c = read_coe(&path_c).unwrap();
    let a = take_expected("A", &a, A_CARDINALITY).unwrap();
    let b = take_expected("B", &b, MATRIX_DIM).unwrap();
    let c = take_expected("C", &c, MATRIX_DIM).unwrap();

    let sums = block_sums(a, b);
    assert_eq!(sums.len(), NUM_BLOCKS);
    assert_eq!(accumulate(&sums), expected.ab_sum);
    assert_eq!(vector_sum(c), expected.c_sum);
    assert_eq!(accumulate(&sums) + vector_sum(c), expected.total());
}

#[test]
fn test_truncated_a_file_is_rejected() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mats = TestMatrices::random(&mut rng);

    // Drop the tail of A so fewer than 16384 tokens survive decoding.
    let text = encode(&mats.a[..A_CARDINALITY - 1], FieldWidth::Byte).unwrap();
    let decoded = decode(&text).unwrap();
    let err = take_expected("A", &decoded, A_CARDINALITY).unwrap_err();
    assert!(matches!(
        err,
        MatmultError::InsufficientData { expected: 16384, got: 16383, .. }
    ));
}

#[test]
fn test_overlong_input_is_truncated_to_cardinality() {
    // Fixed behavior: extra tokens past the expected cardinality are
    // silently dropped rather than rejected.
    let values: Vec<u64> = (0..(MATRIX_DIM as u64 + 4)).map(|v| v & 0xFF).collect();
    let kept = take_expected("B", &values, MATRIX_DIM).unwrap();
    assert_eq!(kept.len(), MATRIX_DIM);
    assert_eq!(kept, &values[..MATRIX_DIM]);
}
