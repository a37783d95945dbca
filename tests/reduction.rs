use echelon::{gauss_jordan_reduce, gauss_reduce, Matrix, MatrixError, DEFAULT_TOL};

const TOL: f64 = DEFAULT_TOL;

fn assert_mat_near(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64, msg: &str) {
    assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()), "{}", msg);
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            assert!(
                (a[(i, j)] - b[(i, j)]).abs() < tol,
                "{}: ({}, {}): {} vs {}",
                msg,
                i,
                j,
                a[(i, j)],
                b[(i, j)],
            );
        }
    }
}

/// `row_ops * m * col_ops` must reproduce the reduced matrix.
fn assert_replay(m: &Matrix<f64>, r: &echelon::Reduction<f64>) {
    let replayed = r.row_ops.matmul(m).unwrap().matmul(&r.col_ops).unwrap();
    assert_mat_near(&replayed, &r.reduced, 1e-10, "operation replay");
}

// ── Construction properties ─────────────────────────────────────────

#[test]
fn fill_modes() {
    let z = Matrix::<f64>::zeros(3, 2);
    let o = Matrix::<f64>::ones(3, 2);
    let id = Matrix::<f64>::eye(3, 2);
    for i in 0..3 {
        for j in 0..2 {
            assert_eq!(z[(i, j)], 0.0);
            assert_eq!(o[(i, j)], 1.0);
            assert_eq!(id[(i, j)], if i == j { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn transpose_round_trip() {
    let m = Matrix::from_rows(3, 4, &(0..12).map(|x| x as f64).collect::<Vec<_>>()).unwrap();
    assert_eq!(m.transpose().transpose(), m);
}

// ── Empty-matrix boundary ───────────────────────────────────────────

#[test]
fn empty_matrix_renders_and_rejects_arithmetic() {
    let empty = Matrix::<f64>::empty();
    assert_eq!(format!("{}", empty), "Matrix not initialized!");
    assert_eq!(
        empty.checked_add(&Matrix::<f64>::empty()).unwrap_err(),
        MatrixError::NotInitialized,
    );
    assert_eq!(
        empty.matmul(&Matrix::<f64>::empty()).unwrap_err(),
        MatrixError::NotInitialized,
    );
    assert_eq!(empty.scalar_add(1.0).unwrap_err(), MatrixError::NotInitialized);
}

// ── Row-echelon / RREF properties ───────────────────────────────────

#[test]
fn gauss_produces_row_echelon_form() {
    let m = Matrix::from_rows(4, 4, &[
        2.0, 1.0, 3.0, 4.0, //
        4.0, 7.0, 1.0, 2.0, //
        6.0, 2.0, 9.0, 1.0, //
        1.0, 5.0, 2.0, 8.0,
    ])
    .unwrap();
    let r = gauss_reduce(&m, TOL);

    assert_eq!(r.pivot_rank, 4);
    for i in 0..4 {
        for j in 0..i {
            assert!(
                r.reduced[(i, j)].abs() < 1e-10,
                "below-pivot entry ({}, {}) = {}",
                i,
                j,
                r.reduced[(i, j)],
            );
        }
    }
    assert_replay(&m, &r);
}

#[test]
fn gauss_jordan_produces_rref() {
    let m = Matrix::from_rows(3, 3, &[
        2.0, 1.0, -1.0, //
        -3.0, -1.0, 2.0, //
        -2.0, 1.0, 2.0,
    ])
    .unwrap();
    let r = gauss_jordan_reduce(&m, TOL);

    assert_eq!(r.pivot_rank, 3);
    assert_mat_near(&r.reduced, &Matrix::eye(3, 3), 1e-10, "rref");
    assert_replay(&m, &r);
}

#[test]
fn gauss_jordan_rref_with_rank_deficiency() {
    // Rank 2 out of 3: usable pivots are exactly 1 with cleared columns,
    // the dead row is left alone.
    let m = Matrix::from_rows(3, 3, &[
        1.0, 2.0, 3.0, //
        2.0, 4.0, 6.0, //
        1.0, 0.0, 1.0,
    ])
    .unwrap();
    let r = gauss_jordan_reduce(&m, TOL);

    assert_eq!(r.pivot_rank, 2);
    assert!(!r.is_full_rank());
    for line in 0..2 {
        assert!((r.reduced[(line, line)] - 1.0).abs() < 1e-10);
        for other in 0..3 {
            if other != line {
                assert!(
                    r.reduced[(other, line)].abs() < 1e-10,
                    "pivot column {} not cleared at row {}",
                    line,
                    other,
                );
            }
        }
    }
    assert_replay(&m, &r);
}

// ── Worked scenarios ────────────────────────────────────────────────

#[test]
fn scenario_a_inverse_from_row_ops() {
    let m = Matrix::from_rows(2, 2, &[2.0, 1.0, 1.0, 1.0]).unwrap();
    let r = gauss_jordan_reduce(&m, TOL);

    assert_mat_near(&r.reduced, &Matrix::eye(2, 2), 1e-12, "reduced");
    let expected_inv = Matrix::from_rows(2, 2, &[1.0, -1.0, -1.0, 2.0]).unwrap();
    assert_mat_near(&r.row_ops, &expected_inv, 1e-12, "row_ops as inverse");

    assert_eq!(m.inverse(TOL).unwrap(), r.row_ops);
}

#[test]
fn scenario_b_singular_halts() {
    let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 2.0, 4.0]).unwrap();
    let r = gauss_reduce(&m, TOL);

    assert_eq!(r.pivot_rank, 1);
    assert_eq!(r.reduced.row_slice(1), &[0.0, 0.0]);
    assert_eq!(r.reduced[(1, 1)], 0.0);
    assert_replay(&m, &r);
}

#[test]
fn scenario_c_partial_pivot_row_swap() {
    let m = Matrix::from_rows(2, 2, &[0.0, 1.0, 1.0, 0.0]).unwrap();
    let r = gauss_jordan_reduce(&m, TOL);

    assert_mat_near(&r.reduced, &Matrix::eye(2, 2), 1e-12, "reduced");
    let swap = Matrix::from_rows(2, 2, &[0.0, 1.0, 1.0, 0.0]).unwrap();
    assert_mat_near(&r.row_ops, &swap, 1e-12, "row_ops is the swap");
}

// ── Rank deficiency and early termination ───────────────────────────

#[test]
fn zero_row_matrix_terminates_without_error() {
    let m = Matrix::from_rows(3, 3, &[
        0.0, 0.0, 0.0, //
        1.0, 2.0, 3.0, //
        4.0, 5.0, 7.0,
    ])
    .unwrap();
    // Pivoting moves usable rows up; the zero row sinks to the bottom and
    // elimination stops there.
    let r = gauss_reduce(&m, TOL);
    assert_eq!(r.pivot_rank, 2);
    assert_replay(&m, &r);
}

#[test]
fn all_zero_matrix() {
    let m = Matrix::<f64>::zeros(3, 3);
    let r = gauss_jordan_reduce(&m, TOL);
    assert_eq!(r.pivot_rank, 0);
    assert_eq!(r.reduced, m);
    assert_eq!(r.row_ops, Matrix::eye(3, 3));
    assert_eq!(r.col_order, vec![0, 1, 2]);
}

// ── Column pivoting on wide matrices ────────────────────────────────

#[test]
fn wide_matrix_column_swap_recorded() {
    // Column 0 is entirely zero; total pivoting swaps a usable column in
    // and records the permutation.
    let m = Matrix::from_rows(2, 3, &[0.0, 2.0, 1.0, 0.0, 1.0, 3.0]).unwrap();
    let r = gauss_reduce(&m, TOL);

    assert_eq!(r.pivot_rank, 2);
    assert_ne!(r.col_order, vec![0, 1, 2]);
    // The permutation is a permutation.
    let mut sorted = r.col_order.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![0, 1, 2]);
    assert_replay(&m, &r);
}

// ── Tolerance behavior ──────────────────────────────────────────────

#[test]
fn near_zero_entries_below_tolerance_ignored() {
    // The (1, 0) entry is within tolerance, so no elimination step is
    // spent on it and it survives untouched.
    let m = Matrix::from_rows(2, 2, &[1.0, 0.0, 1e-7, 1.0]).unwrap();
    let r = gauss_reduce(&m, TOL);
    assert_eq!(r.pivot_rank, 2);
    assert_eq!(r.reduced[(1, 0)], 1e-7);
}

#[test]
fn tolerance_is_caller_controlled() {
    // With a tighter tolerance the same entry is eliminated.
    let m: Matrix<f64> = Matrix::from_rows(2, 2, &[1.0, 0.0, 1e-7, 1.0]).unwrap();
    let r = gauss_reduce(&m, 1e-12);
    assert!(r.reduced[(1, 0)].abs() < 1e-12);
}
