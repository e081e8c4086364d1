use crate::Complex64;

const BIT_LENGTH: u32 = u32::BITS;

/// Reverses the low `power` bits of `index`.
///
/// All 32 bits are reversed with a parallel swap cascade (adjacent bits, pairs,
/// nibbles, bytes, halves) and the result is shifted down so only the top
/// `power` bits remain. `power == 0` and `power > 32` yield `0`.
///
/// Based on the "Reverse bits in parallel" entry of Sean Eron Anderson's
/// "Bit Twiddling Hacks".
pub const fn bit_reverse_index(index: u32, power: u32) -> u32 {
    let mut reversed = index;
    reversed = ((reversed >> 1) & 0x5555_5555) | ((reversed & 0x5555_5555) << 1);
    reversed = ((reversed >> 2) & 0x3333_3333) | ((reversed & 0x3333_3333) << 2);
    reversed = ((reversed >> 4) & 0x0F0F_0F0F) | ((reversed & 0x0F0F_0F0F) << 4);
    reversed = ((reversed >> 8) & 0x00FF_00FF) | ((reversed & 0x00FF_00FF) << 8);
    reversed = reversed.rotate_left(16);

    let shift = match BIT_LENGTH.checked_sub(power) {
        Some(shift) => shift,
        None => return 0,
    };

    match reversed.checked_shr(shift) {
        Some(shifted) => shifted,
        None => 0,
    }
}

/// Performs the bit-reversal permutation on `data` in place.
///
/// The length of `data` must be a power of two. Each pair is swapped exactly
/// once, from the smaller index.
pub(crate) fn bit_reverse_permutation(data: &mut [Complex64]) {
    let n = data.len();
    assert!(n.is_power_of_two(), "length {n} is not a power of two");

    let power = n.trailing_zeros();

    for index in 0..n {
        let reversed = bit_reverse_index(index as u32, power) as usize;

        if reversed > index {
            assert!(reversed < n, "reversed index {reversed} out of bounds {n}");
            data.swap(index, reversed);
        }
    }
}
