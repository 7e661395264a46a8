mod compose;
pub mod errors;
pub mod gates;
mod state;
pub mod states;

pub use compose::{apply, conjugate, matmul, tensor, tensor_states};
pub use state::{BitPattern, state};
