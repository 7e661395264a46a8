//! Composition helpers for vectors and operators.
//!
//! This module contains the building blocks used by the constant tables:
//! - Kronecker (tensor) product folds over matrices and state vectors.
//! - Matrix multiplication folds for chaining gates.
//! - Application of a gate chain to a state vector.
//! - Complex conjugation.

use crate::core::errors::ComposeError;
use ndarray::{Array, Array1, Array2, Axis, Dimension};
use num_complex::Complex64;

/// Computes the Kronecker (tensor) product of two matrices.
///
/// If `A` is an $m \times n$ matrix and `B` is a $p \times q$ matrix,
/// the result is an $mp \times nq$ matrix.
pub fn kron(a: &Array2<Complex64>, b: &Array2<Complex64>) -> Array2<Complex64> {
    let (m, n) = a.dim();
    let (p, q) = b.dim();

    // A reshaped to (m, 1, n, 1), B reshaped to (1, p, 1, q),
    // broadcast multiply -> (m, p, n, q), flatten to (m*p, n*q).
    let a_expanded = a.view().insert_axis(Axis(1)).insert_axis(Axis(3));
    let b_expanded = b.view().insert_axis(Axis(0)).insert_axis(Axis(2));

    let product = &a_expanded * &b_expanded;

    product.into_shape_with_order((m * p, n * q)).unwrap()
}

/// Kronecker product of two state vectors.
///
/// The result has length `a.len() * b.len()`, with entry `i * b.len() + j`
/// equal to `a[i] * b[j]`.
pub fn kron_states(a: &Array1<Complex64>, b: &Array1<Complex64>) -> Array1<Complex64> {
    let (n, m) = (a.len(), b.len());

    let a_col = a.view().insert_axis(Axis(1));
    let b_row = b.view().insert_axis(Axis(0));

    let product = &a_col * &b_row;

    product.into_shape_with_order(n * m).unwrap()
}

/// Folds the Kronecker product over a sequence of matrices, left to right.
///
/// A single operand is returned unchanged (identity of the fold).
///
/// # Errors
///
/// Returns `ComposeError::NoOperands` if `operands` is empty.
pub fn tensor(operands: &[&Array2<Complex64>]) -> Result<Array2<Complex64>, ComposeError> {
    let (first, rest) = operands.split_first().ok_or(ComposeError::NoOperands)?;

    Ok(rest.iter().fold((*first).clone(), |acc, op| kron(&acc, op)))
}

/// Folds the Kronecker product over a sequence of state vectors, left to right.
///
/// # Errors
///
/// Returns `ComposeError::NoOperands` if `operands` is empty.
pub fn tensor_states(operands: &[&Array1<Complex64>]) -> Result<Array1<Complex64>, ComposeError> {
    let (first, rest) = operands.split_first().ok_or(ComposeError::NoOperands)?;

    Ok(rest
        .iter()
        .fold((*first).clone(), |acc, op| kron_states(&acc, op)))
}

/// Folds matrix multiplication over a sequence of matrices, left to right.
///
/// Used to compose gate matrices from primitive logic-gate blocks.
///
/// # Errors
///
/// Returns `ComposeError::NoOperands` if `operands` is empty, or
/// `ComposeError::ShapeMismatch` if an adjacent pair has incompatible
/// inner dimensions.
pub fn matmul(operands: &[&Array2<Complex64>]) -> Result<Array2<Complex64>, ComposeError> {
    let (first, rest) = operands.split_first().ok_or(ComposeError::NoOperands)?;

    rest.iter().try_fold((*first).clone(), |acc, op| {
        if acc.ncols() != op.nrows() {
            return Err(ComposeError::ShapeMismatch {
                left: acc.dim(),
                right: op.dim(),
            });
        }
        Ok(acc.dot(*op))
    })
}

/// Composes a chain of gates and applies it to a state vector.
///
/// The state vector plays the role of the final one-column operand of the
/// multiplication chain.
///
/// # Errors
///
/// Returns `ComposeError` if the chain is empty, if adjacent gates have
/// incompatible dimensions, or if the composed operator does not match the
/// state vector's length.
pub fn apply(
    gates: &[&Array2<Complex64>],
    state: &Array1<Complex64>,
) -> Result<Array1<Complex64>, ComposeError> {
    let operator = matmul(gates)?;

    if operator.ncols() != state.len() {
        return Err(ComposeError::ShapeMismatch {
            left: operator.dim(),
            right: (state.len(), 1),
        });
    }

    Ok(operator.dot(state))
}

/// Returns the element-wise complex conjugate, preserving shape.
pub fn conjugate<D: Dimension>(v: &Array<Complex64, D>) -> Array<Complex64, D> {
    v.mapv(|c| c.conj())
}
