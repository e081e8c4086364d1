use alloc::vec::Vec;

use crate::{Complex64, FftError, MAX_LEN};

/// Rounds `value` up to the next power of two by smearing the highest set bit
/// into every lower position.
///
/// Powers of two map to themselves. `0` and values above `2^31` wrap to `0`.
pub const fn next_power_of_two(value: u32) -> u32 {
    let mut tmp = value.wrapping_sub(1);
    tmp |= tmp >> 1;
    tmp |= tmp >> 2;
    tmp |= tmp >> 4;
    tmp |= tmp >> 8;
    tmp |= tmp >> 16;
    tmp.wrapping_add(1)
}

/// Returns the padded transform length for an input of `len` samples.
pub(crate) fn padded_len(len: usize) -> Result<usize, FftError> {
    if len == 0 {
        return Err(FftError::EmptyInput);
    }

    match u32::try_from(len) {
        Ok(len_u32) if len <= MAX_LEN => Ok(next_power_of_two(len_u32) as usize),
        _ => Err(FftError::LengthOverflow { len }),
    }
}

/// Extends `data` with complex zeros up to the next power of two and returns
/// the padded length.
pub(crate) fn zero_pad(data: &mut Vec<Complex64>) -> Result<usize, FftError> {
    let len = data.len();
    let padded = padded_len(len)?;
    if padded > len {
        data.resize(padded, Complex64::zero());
    }

    Ok(padded)
}
