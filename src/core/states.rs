//! Basis-state and Bell-state constant tables.
//!
//! All vectors are computed once on first access and never mutated, so they
//! are safe to read from any number of threads.

use crate::core::compose::kron_states;
use crate::core::state::state;
use ndarray::Array1;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;
use std::sync::LazyLock;

fn real(values: &[f64]) -> Array1<Complex64> {
    values.iter().map(|&re| Complex64::new(re, 0.0)).collect()
}

/// Ground single-qubit basis vector |0⟩.
pub static QB0: LazyLock<Array1<Complex64>> = LazyLock::new(|| real(&[1.0, 0.0]));

/// Excited single-qubit basis vector |1⟩.
pub static QB1: LazyLock<Array1<Complex64>> = LazyLock::new(|| real(&[0.0, 1.0]));

/// Two-qubit basis vector |00⟩.
pub static QB00: LazyLock<Array1<Complex64>> = LazyLock::new(|| kron_states(&QB0, &QB0));

/// Two-qubit basis vector |01⟩.
pub static QB01: LazyLock<Array1<Complex64>> = LazyLock::new(|| kron_states(&QB0, &QB1));

/// Two-qubit basis vector |10⟩.
pub static QB10: LazyLock<Array1<Complex64>> = LazyLock::new(|| kron_states(&QB1, &QB0));

/// Two-qubit basis vector |11⟩.
pub static QB11: LazyLock<Array1<Complex64>> = LazyLock::new(|| kron_states(&QB1, &QB1));

fn bell(first: [u8; 2], second: [u8; 2], sign: f64) -> Array1<Complex64> {
    let amp = Complex64::new(FRAC_1_SQRT_2, 0.0);
    let plus = state(first).unwrap().mapv(|c| c * amp);
    let minus = state(second).unwrap().mapv(|c| c * amp * sign);
    plus + minus
}

/// Bell state (|00⟩ + |11⟩) / √2.
pub static BELL00: LazyLock<Array1<Complex64>> = LazyLock::new(|| bell([0, 0], [1, 1], 1.0));

/// Bell state (|01⟩ + |10⟩) / √2.
pub static BELL01: LazyLock<Array1<Complex64>> = LazyLock::new(|| bell([0, 1], [1, 0], 1.0));

/// Bell state (|00⟩ − |11⟩) / √2.
pub static BELL10: LazyLock<Array1<Complex64>> = LazyLock::new(|| bell([0, 0], [1, 1], -1.0));

/// Bell state (|01⟩ − |10⟩) / √2.
pub static BELL11: LazyLock<Array1<Complex64>> = LazyLock::new(|| bell([0, 1], [1, 0], -1.0));
