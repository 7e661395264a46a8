//! Classical and quantum gate constant tables.
//!
//! Classical reversible-logic tables may be rectangular: OR, AND and XOR
//! map two bits to one (2x4), while COPY maps one bit to two (4x2). The
//! quantum gates are assembled from these blocks with the composition
//! helpers, following the standard circuit identities.
//!
//! Every matrix is computed once on first access and read-only thereafter.

use crate::core::compose::{matmul, tensor};
use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use std::sync::LazyLock;

fn real(rows: usize, cols: usize, values: &[f64]) -> Array2<Complex64> {
    Array2::from_shape_vec(
        (rows, cols),
        values.iter().map(|&re| Complex64::new(re, 0.0)).collect(),
    )
    .unwrap()
}

/// Identity gate.
pub static IDEN: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(2, 2, &[
        1.0, 0.0,
        0.0, 1.0,
    ])
});

/// NOT gate (Pauli-X).
pub static NOT: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(2, 2, &[
        0.0, 1.0,
        1.0, 0.0,
    ])
});

/// Classical OR table, two bits in, one bit out.
pub static OR: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(2, 4, &[
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 1.0, 1.0,
    ])
});

/// Classical AND table, two bits in, one bit out.
pub static AND: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(2, 4, &[
        1.0, 1.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ])
});

/// Classical XOR table, two bits in, one bit out.
pub static XOR: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(2, 4, &[
        1.0, 0.0, 0.0, 1.0,
        0.0, 1.0, 1.0, 0.0,
    ])
});

/// Classical NOR table, NOT following OR.
pub static NOR: LazyLock<Array2<Complex64>> = LazyLock::new(|| matmul(&[&NOT, &OR]).unwrap());

/// Classical NAND table, NOT following AND.
pub static NAND: LazyLock<Array2<Complex64>> = LazyLock::new(|| matmul(&[&NOT, &AND]).unwrap());

/// Fan-out table, one bit in, two identical bits out.
pub static COPY: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(4, 2, &[
        1.0, 0.0,
        0.0, 0.0,
        0.0, 0.0,
        0.0, 1.0,
    ])
});

/// SWAP gate, exchanges two qubits.
pub static SWAP: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(4, 4, &[
        1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
    ])
});

/// Controlled-NOT gate: copy the control, then XOR it into the target.
pub static CNOT: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    matmul(&[
        &tensor(&[&IDEN, &XOR]).unwrap(),
        &tensor(&[&COPY, &IDEN]).unwrap(),
    ])
    .unwrap()
});

/// Toffoli (controlled-controlled-NOT) gate.
///
/// Fans out both controls, ANDs the copies, then XORs the result into the
/// target.
pub static TOFFOLI: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    matmul(&[
        &tensor(&[&IDEN, &IDEN, &XOR]).unwrap(),
        &tensor(&[&IDEN, &IDEN, &AND, &IDEN]).unwrap(),
        &tensor(&[&IDEN, &SWAP, &IDEN, &IDEN]).unwrap(),
        &tensor(&[&COPY, &COPY, &IDEN]).unwrap(),
    ])
    .unwrap()
});

/// Hadamard gate.
pub static HAD: LazyLock<Array2<Complex64>> = LazyLock::new(|| {
    real(2, 2, &[
        1.0, 1.0,
        1.0, -1.0,
    ])
    .mapv(|c| c * FRAC_1_SQRT_2)
});
