#[cfg(feature = "std")]
use thiserror::Error;

#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitStoreError {
    #[cfg_attr(
        feature = "std",
        error("Index {index} is out of range for length {len}")
    )]
    OutOfRange { index: usize, len: usize },

    #[cfg_attr(
        feature = "std",
        error("Length mismatch: {left} bits vs {right} bits")
    )]
    LengthMismatch { left: usize, right: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitStoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitStoreError::OutOfRange { index, len } => {
                write!(f, "Index {} is out of range for length {}", index, len)
            }
            BitStoreError::LengthMismatch { left, right } => {
                write!(f, "Length mismatch: {} bits vs {} bits", left, right)
            }
        }
    }
}
