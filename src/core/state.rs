use crate::core::compose::kron_states;
use crate::core::errors::StateError;
use crate::core::states::{QB0, QB1};
use ndarray::Array1;
use num_complex::Complex64;

/// Input accepted by [`state`]: either a basis-state index or an explicit
/// bit sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BitPattern {
    /// A non-negative integer whose binary digits supply the bit sequence,
    /// most significant bit first and with no fixed width.
    Index(u64),
    /// An explicit ordered bit sequence, leftmost qubit first.
    Bits(Vec<u8>),
}

impl From<u64> for BitPattern {
    fn from(index: u64) -> Self {
        BitPattern::Index(index)
    }
}

impl From<Vec<u8>> for BitPattern {
    fn from(bits: Vec<u8>) -> Self {
        BitPattern::Bits(bits)
    }
}

impl From<&[u8]> for BitPattern {
    fn from(bits: &[u8]) -> Self {
        BitPattern::Bits(bits.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for BitPattern {
    fn from(bits: [u8; N]) -> Self {
        BitPattern::Bits(bits.to_vec())
    }
}

/// Converts an index to its binary digits, most significant bit first.
///
/// The width is implicit in the magnitude: `5` yields `[1, 0, 1]` (three
/// qubits), and `0` yields `[0]` (one qubit). No zero-padding is applied.
fn index_bits(index: u64) -> Vec<u8> {
    if index == 0 {
        return vec![0];
    }

    let width = 64 - index.leading_zeros();
    (0..width)
        .rev()
        .map(|pos| ((index >> pos) & 1) as u8)
        .collect()
}

/// Constructs the basis-state vector for a multi-qubit register.
///
/// Starts from the single-qubit basis vector of the first bit and tensors
/// the basis vector of each subsequent bit onto the running state. The
/// result has length `2^bits` with a single 1 at the index equal to the
/// integer value of the bit sequence.
///
/// Nonzero bit values all select the excited basis vector.
///
/// # Errors
///
/// Returns `StateError::EmptyBitPattern` if the bit sequence is empty.
pub fn state(pattern: impl Into<BitPattern>) -> Result<Array1<Complex64>, StateError> {
    let bits = match pattern.into() {
        BitPattern::Index(index) => index_bits(index),
        BitPattern::Bits(bits) => bits,
    };

    let (first, rest) = bits.split_first().ok_or(StateError::EmptyBitPattern)?;

    let mut running = basis(*first).clone();
    for &bit in rest {
        running = kron_states(&running, basis(bit));
    }

    Ok(running)
}

fn basis(bit: u8) -> &'static Array1<Complex64> {
    if bit == 0 { &QB0 } else { &QB1 }
}
