use alloc::vec::Vec;

use super::{
    bit_reverse::bit_reverse_permutation, butterfly::butterfly_network, size::zero_pad,
};
use crate::{Complex64, FftError};

/// In-place radix-2 FFT over complex samples.
///
/// The engine takes ownership of the sample buffer and zero-pads it to the
/// next power of two. Both transforms overwrite the buffer; read it back with
/// [`Radix2Fft::to_vec`], [`Radix2Fft::as_slice`] or [`Radix2Fft::into_inner`].
///
/// The type is intentionally not `Clone`. Duplicate the data explicitly with
/// `to_vec()` and construct a second engine if needed.
///
/// # Normalization
///
///  - Forward FFT produces raw DFT values (no scaling applied)
///  - Inverse FFT applies the `1/N` scaling, where `N` is the padded length
///  - A forward+inverse round-trip reproduces the padded input up to rounding
#[derive(Debug)]
pub struct Radix2Fft {
    data: Vec<Complex64>,
    len: usize,
}

impl Radix2Fft {
    /// Constructs a new [`Radix2Fft`] instance from `samples`.
    ///
    /// # Errors
    /// * [`FftError::EmptyInput`] if `samples` is empty.
    /// * [`FftError::LengthOverflow`] if `samples` is longer than [`crate::MAX_LEN`].
    pub fn new(mut samples: Vec<Complex64>) -> Result<Self, FftError> {
        let original_len = samples.len();
        let len = zero_pad(&mut samples)?;

        tracing::trace!(original_len, padded_len = len, "created radix-2 FFT");

        Ok(Self { data: samples, len })
    }

    /// Returns the padded transform length.
    pub fn padded_len(&self) -> usize {
        self.len
    }

    /// Replaces the buffer by its discrete Fourier transform.
    pub fn forward(&mut self) {
        bit_reverse_permutation(&mut self.data);
        butterfly_network(&mut self.data);
    }

    /// Replaces the buffer by its inverse discrete Fourier transform.
    ///
    /// Computed as `conj(DFT(conj(x))) / N`.
    pub fn inverse(&mut self) {
        self.conjugate();
        self.forward();
        self.conjugate();

        let len = self.len as f64;
        self.data
            .iter_mut()
            .for_each(|c| *c = Complex64::new(c.re / len, c.im / len));
    }

    /// Returns a copy of the current buffer.
    pub fn to_vec(&self) -> Vec<Complex64> {
        self.data.clone()
    }

    /// Borrows the current buffer.
    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    /// Consumes the engine and returns its buffer.
    pub fn into_inner(self) -> Vec<Complex64> {
        self.data
    }

    fn conjugate(&mut self) {
        self.data.iter_mut().for_each(|c| *c = c.conj());
    }
}

impl TryFrom<Vec<Complex64>> for Radix2Fft {
    type Error = FftError;

    fn try_from(samples: Vec<Complex64>) -> Result<Self, Self::Error> {
        Self::new(samples)
    }
}
