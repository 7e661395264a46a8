mod core;

pub use crate::core::{
    BitPattern, apply, conjugate, errors, gates, matmul, state, states, tensor, tensor_states,
};
