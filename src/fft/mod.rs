pub(crate) mod bit_reverse;
pub(crate) mod butterfly;
mod radix2_fft;
pub(crate) mod size;

pub use bit_reverse::bit_reverse_index;
pub use radix2_fft::Radix2Fft;
pub use size::next_power_of_two;

/// Simple complex number struct
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    #[inline(always)]
    pub const fn one() -> Self {
        Self { re: 1.0, im: 0.0 }
    }

    /// Point on the unit circle at `angle` radians.
    #[inline(always)]
    pub fn from_angle(angle: f64) -> Self {
        #[cfg(not(feature = "no_std"))]
        let (sin, cos) = angle.sin_cos();
        #[cfg(feature = "no_std")]
        let (sin, cos) = libm::sincos(angle);

        Self { re: cos, im: sin }
    }

    #[inline(always)]
    pub const fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline(always)]
    pub const fn add(&self, o: &Self) -> Self {
        Self {
            re: self.re + o.re,
            im: self.im + o.im,
        }
    }

    #[inline(always)]
    pub const fn sub(&self, o: &Self) -> Self {
        Self {
            re: self.re - o.re,
            im: self.im - o.im,
        }
    }

    #[inline(always)]
    pub const fn mul(&self, o: &Self) -> Self {
        Self {
            re: self.re * o.re - self.im * o.im,
            im: self.re * o.im + self.im * o.re,
        }
    }

    #[inline(always)]
    pub const fn scale(&self, f: f64) -> Self {
        Self {
            re: self.re * f,
            im: self.im * f,
        }
    }

    /// Magnitude `|z|`.
    #[inline(always)]
    pub fn norm(&self) -> f64 {
        #[cfg(not(feature = "no_std"))]
        let norm = self.re.hypot(self.im);
        #[cfg(feature = "no_std")]
        let norm = libm::hypot(self.re, self.im);

        norm
    }
}

impl From<f64> for Complex64 {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex64 {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}
