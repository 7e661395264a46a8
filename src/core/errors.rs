use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("At least one operand is required")]
    NoOperands,

    #[error("Shape mismatch: {left:?} cannot be multiplied by {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("Bit pattern must contain at least one bit")]
    EmptyBitPattern,
}
