use qr_engine::prelude::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const EPS: f64 = 1e-9;

/// Max absolute elementwise difference between two matrices.
fn max_abs_diff(a: &Matrix, b: &Matrix) -> f64 {
    let mut max = 0.0_f64;
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            max = max.max((a.get(i, j) - b.get(i, j)).abs());
        }
    }
    max
}

fn random_matrix(rng: &mut StdRng, nrows: usize, ncols: usize) -> Matrix {
    let data: Vec<f64> = (0..nrows * ncols).map(|_| rng.gen_range(-5.0..5.0)).collect();
    Matrix::new(nrows, ncols, data).unwrap()
}

#[test]
fn qr_reconstructs_the_input() {
    let a = Matrix::from_rows(&[
        vec![2.0, 1.0, 0.5],
        vec![0.0, 3.0, 1.0],
        vec![1.0, 0.0, 2.0],
        vec![1.0, 1.0, 1.0],
    ])
    .unwrap();
    let QrDecomposition { q, r } = qr(&a).unwrap();
    let qr_product = q.matmul(&r).unwrap();
    assert!(max_abs_diff(&a, &qr_product) < EPS);
}

#[test]
fn q_has_orthonormal_columns() {
    let a = Matrix::from_rows(&[
        vec![1.0, 2.0, 0.0],
        vec![1.0, 0.0, 1.0],
        vec![0.0, 1.0, 2.0],
        vec![2.0, 1.0, 1.0],
    ])
    .unwrap();
    let QrDecomposition { q, .. } = qr(&a).unwrap();
    let qtq = q.transpose().matmul(&q).unwrap();
    let identity = Matrix::identity(q.ncols()).unwrap();
    assert!(max_abs_diff(&qtq, &identity) < EPS);
}

#[test]
fn random_well_conditioned_inputs_round_trip() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        // Tall random matrices are well conditioned with overwhelming
        // probability at these sizes.
        let a = random_matrix(&mut rng, 12, 6);
        let QrDecomposition { q, r } = qr(&a).unwrap();

        let qr_product = q.matmul(&r).unwrap();
        assert!(max_abs_diff(&a, &qr_product) < EPS);

        let qtq = q.transpose().matmul(&q).unwrap();
        let identity = Matrix::identity(6).unwrap();
        assert!(max_abs_diff(&qtq, &identity) < EPS);

        for i in 0..r.nrows() {
            assert!(r.get(i, i) >= 0.0);
            for j in 0..i {
                assert_eq!(r.get(i, j), 0.0);
            }
        }
    }
}

#[test]
fn identity_like_matrix_is_its_own_q() {
    let a = Matrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();
    let QrDecomposition { q, r } = qr(&a).unwrap();
    assert_eq!(q, a);
    assert_eq!(r, Matrix::identity(2).unwrap());
}

#[test]
fn worked_example_matches_hand_computation() {
    let a = Matrix::from_rows(&[vec![3.0, 1.0], vec![4.0, 0.0]]).unwrap();
    let QrDecomposition { q, r } = qr(&a).unwrap();

    // ‖[3,4]‖ = 5 → Q[:,0] = [0.6, 0.8]
    assert!((q.get(0, 0) - 0.6).abs() < 1e-12);
    assert!((q.get(1, 0) - 0.8).abs() < 1e-12);
    // R = [[5, 0.6], [0, 0.8]]
    assert!((r.get(0, 0) - 5.0).abs() < 1e-12);
    assert!((r.get(0, 1) - 0.6).abs() < 1e-12);
    assert!((r.get(1, 1) - 0.8).abs() < 1e-12);
    assert_eq!(r.get(1, 0), 0.0);
}

#[test]
fn identical_columns_fail_with_degenerate_input() {
    let a = Matrix::from_rows(&[
        vec![1.0, 1.0],
        vec![2.0, 2.0],
        vec![3.0, 3.0],
    ])
    .unwrap();
    match qr(&a) {
        Err(QrError::DegenerateInput { column }) => assert_eq!(column, 1),
        other => panic!("expected DegenerateInput, got {other:?}"),
    }
}

#[test]
fn empty_shapes_are_rejected_up_front() {
    assert!(Matrix::new(0, 2, vec![]).is_err());
    assert!(Matrix::new(2, 0, vec![]).is_err());
}

#[test]
fn decomposition_does_not_mutate_the_input() {
    let a = Matrix::from_rows(&[vec![3.0, 1.0], vec![4.0, 0.0]]).unwrap();
    let before = a.clone();
    let _ = qr(&a).unwrap();
    assert_eq!(a, before);
}
