//! In-place discrete Fourier transform using the iterative radix-2 Cooley-Tukey
//! algorithm with bit-reversal permutation.
//!
//! Inputs of any non-zero length are zero-padded to the next power of two. The
//! inverse transform is derived from the forward one by conjugation and is
//! normalized by the padded length.
//!
//! ## Example
//!
//! ```
//! use ctfft::{Complex64, Radix2Fft};
//!
//! let samples: Vec<Complex64> = [1.0, 2.0, 3.0, 4.0, 0.0]
//!     .into_iter()
//!     .map(Complex64::from)
//!     .collect();
//!
//! let mut fft = Radix2Fft::new(samples).unwrap();
//! assert_eq!(fft.padded_len(), 8);
//!
//! fft.forward();
//! fft.inverse();
//!
//! let restored = fft.to_vec();
//! assert!((restored[3].re - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Features
//!
//! - `no_std`: Builds against `core` and `alloc` only, using `libm` for the
//!   trigonometric functions.
#![cfg_attr(feature = "no_std", no_std)]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod error;
mod fft;

pub use error::FftError;
pub use fft::*;

/// Largest supported transform length. Bit reversal works on 32-bit indices.
pub const MAX_LEN: usize = 1 << 31;
