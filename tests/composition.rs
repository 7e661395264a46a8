//! End-to-end checks combining the constant tables with the composition
//! helpers, mirroring typical caller usage: build an operator chain, apply
//! it to a basis state, inspect the resulting vector.

use ndarray::Array1;
use num_complex::Complex64;
use qgates::gates::{CNOT, HAD, NOT, TOFFOLI};
use qgates::states::{BELL00, QB0, QB00, QB01, QB1, QB10, QB11};
use qgates::{apply, conjugate, state, tensor_states};

fn assert_state_eq(a: &Array1<Complex64>, b: &Array1<Complex64>) {
    assert_eq!(a.len(), b.len());
    assert!(a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < 1e-12));
}

#[test]
fn basis_pairs_factor_into_tensor_products() {
    assert_state_eq(&tensor_states(&[&QB0, &QB0]).unwrap(), &QB00);
    assert_state_eq(&tensor_states(&[&QB0, &QB1]).unwrap(), &QB01);
    assert_state_eq(&tensor_states(&[&QB1, &QB0]).unwrap(), &QB10);
    assert_state_eq(&tensor_states(&[&QB1, &QB1]).unwrap(), &QB11);
}

#[test]
fn gate_chains_apply_to_basis_states() {
    // Two Hadamards cancel, NOT excites the ground state.
    assert_state_eq(&apply(&[&HAD, &HAD], &QB0).unwrap(), &QB0);
    assert_state_eq(&apply(&[&NOT], &QB0).unwrap(), &QB1);
}

#[test]
fn bell_circuit_produces_bell_state() {
    // The usual Bell-pair circuit: Hadamard on the first qubit, then CNOT.
    let plus = apply(&[&HAD], &QB0).unwrap();
    let input = tensor_states(&[&plus, &QB0]).unwrap();
    let entangled = apply(&[&CNOT], &input).unwrap();

    assert_state_eq(&entangled, &BELL00);
}

#[test]
fn state_accepts_indices_and_bit_sequences() {
    assert_state_eq(&state(0u64).unwrap(), &QB0);
    assert_state_eq(&state(1u64).unwrap(), &QB1);
    assert_state_eq(
        &state(5u64).unwrap(),
        &tensor_states(&[&QB1, &QB0, &QB1]).unwrap(),
    );
    assert_state_eq(&state([1u8, 0, 1]).unwrap(), &state(5u64).unwrap());
}

#[test]
fn toffoli_acts_as_controlled_controlled_not() {
    for pattern in [[0u8, 0, 0], [0, 1, 0], [1, 0, 1], [1, 1, 0], [1, 1, 1]] {
        let input = state(pattern).unwrap();
        let output = apply(&[&TOFFOLI], &input).unwrap();

        let mut expected = pattern;
        if pattern[0] == 1 && pattern[1] == 1 {
            expected[2] ^= 1;
        }
        assert_state_eq(&output, &state(expected).unwrap());
    }
}

#[test]
fn conjugate_preserves_real_constants() {
    assert_state_eq(&conjugate(&*BELL00), &BELL00);

    let v = Array1::from_vec(vec![Complex64::new(0.5, 0.5), Complex64::new(0.5, -0.5)]);
    let cc = conjugate(&conjugate(&v));
    assert_state_eq(&cc, &v);
}
