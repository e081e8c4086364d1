use core::f64::consts::PI;

use crate::Complex64;

/// Processes a single radix-2 butterfly block.
///
/// The block is split into its lower and upper half. The twiddle factor starts
/// at `1` and is advanced by `root` after every butterfly.
#[inline(always)]
pub(crate) fn butterfly_2(block: &mut [Complex64], root: Complex64) {
    let half_stage = block.len() >> 1;
    debug_assert_eq!(half_stage << 1, block.len());

    let (lower, upper) = block.split_at_mut(half_stage);
    let mut twiddle = Complex64::one();

    for (left, right) in lower.iter_mut().zip(upper.iter_mut()) {
        let u = *left;
        let t = twiddle.mul(right);
        *left = u.add(&t);
        *right = u.sub(&t);

        twiddle = twiddle.mul(&root);
    }
}

/// Runs the iterative radix-2 decimation-in-time butterfly network in place.
///
/// `data` must already be in bit-reversed order and its length must be a power
/// of two. A single element needs no stage at all.
pub(crate) fn butterfly_network(data: &mut [Complex64]) {
    let n = data.len();
    debug_assert!(n.is_power_of_two());

    let mut stage_size = 2;

    while stage_size <= n {
        let root = Complex64::from_angle(-2.0 * PI / stage_size as f64);

        for block in data.chunks_exact_mut(stage_size) {
            butterfly_2(block, root);
        }

        stage_size <<= 1;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::fft::bit_reverse::bit_reverse_permutation;

    const EPSILON: f64 = 1e-9;

    fn approx_eq_complex(a: Complex64, b: Complex64, epsilon: f64) -> bool {
        (a.re - b.re).abs() < epsilon && (a.im - b.im).abs() < epsilon
    }

    /// Direct O(N^2) evaluation of the DFT sum.
    fn naive_dft(input: &[Complex64]) -> Vec<Complex64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input.iter().enumerate().fold(Complex64::zero(), |acc, (j, x)| {
                    let angle = -2.0 * PI * ((j * k) % n) as f64 / n as f64;
                    acc.add(&x.mul(&Complex64::from_angle(angle)))
                })
            })
            .collect()
    }

    #[test]
    fn test_single_butterfly() {
        let mut block = [Complex64::new(1.0, 2.0), Complex64::new(3.0, -1.0)];
        butterfly_2(&mut block, Complex64::new(-1.0, 0.0));
        assert_eq!(block[0], Complex64::new(4.0, 1.0));
        assert_eq!(block[1], Complex64::new(-2.0, 3.0));
    }

    #[test]
    fn test_single_element_runs_no_stage() {
        let mut data = [Complex64::new(7.0, -3.0)];
        butterfly_network(&mut data);
        assert_eq!(data[0], Complex64::new(7.0, -3.0));
    }

    #[test]
    fn test_network_matches_naive_dft() {
        for power in 1..=8 {
            let n = 1 << power;
            let input: Vec<Complex64> = (0..n)
                .map(|i| Complex64::new((i as f64 * 0.5).sin(), (i as f64 * 0.3).cos()))
                .collect();
            let expected = naive_dft(&input);

            let mut data = input.clone();
            bit_reverse_permutation(&mut data);
            butterfly_network(&mut data);

            for (i, (a, e)) in data.iter().zip(expected.iter()).enumerate() {
                assert!(
                    approx_eq_complex(*a, *e, EPSILON),
                    "size {n}: mismatch at index {i}: actual = ({}, {}), expected = ({}, {})",
                    a.re,
                    a.im,
                    e.re,
                    e.im
                );
            }
        }
    }
}
