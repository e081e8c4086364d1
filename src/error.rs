/// Errors the transform engine can throw at construction.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FftError {
    /// Input sample buffer is empty.
    EmptyInput,
    /// Input sample buffer is longer than the largest supported power of two.
    LengthOverflow {
        /// Length of the rejected input.
        len: usize,
    },
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("Input sample buffer is empty"),
            Self::LengthOverflow { len } => write!(
                f,
                "Input length {len} exceeds the maximum transform size of {}",
                crate::MAX_LEN
            ),
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

#[cfg(not(feature = "no_std"))]
impl std::error::Error for FftError {}
