use thiserror::Error;

pub type BigNumResult<T> = Result<T, BigNumError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigNumError {
    #[error("capacity must be at least 1 bit, got {bits}")]
    InvalidCapacity { bits: usize },

    #[error("failed to parse {input:?}: {reason}")]
    Format { input: String, reason: &'static str },

    #[error("division by zero")]
    DivisionByZero,

    /// A result needed bit `index` but only `bits` were allocated.
    /// The capacity growth rule makes this unreachable; seeing it means the rule is broken.
    #[error("bit {index} does not fit into a {bits}-bit value")]
    Overflow { index: usize, bits: usize },

    #[error("cannot convert non-finite value {value} to an integer")]
    NotFinite { value: String },

    #[error("value does not fit into {ty}")]
    OutOfRange { ty: &'static str },
}

impl BigNumError {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        BigNumError::Format { input: input.to_string(), reason }
    }
}
