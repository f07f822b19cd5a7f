use num_complex::Complex;

use crate::{Direction, FftNum};

/// Angle of the principal `m`-th root of unity for `direction`, i.e. `sign * 2π / m`.
#[inline]
fn root_angle<T: FftNum>(m: usize, direction: Direction) -> T {
    let two = T::one() + T::one();
    direction.sign::<T>() * two * T::PI() / T::from_len(m)
}

/// Running-product generator for the twiddle factors of a single butterfly stage.
///
/// Yields `w_0 = 1, w_1 = wm, w_2 = wm^2, ...` where `wm = exp(sign * 2πi / m)`. Each factor is
/// obtained from the previous one with a single complex multiplication, so the stage never calls
/// `exp` more than once.
pub(crate) struct Twiddles<T> {
    wm: Complex<T>,
    w: Complex<T>,
}

impl<T: FftNum> Twiddles<T> {
    /// `m` is the butterfly span of the stage (the size of the sub-transform being assembled).
    pub fn new(m: usize, direction: Direction) -> Self {
        Self {
            wm: Complex::cis(root_angle(m, direction)),
            w: Complex::new(T::one(), T::zero()),
        }
    }
}

impl<T: FftNum> Iterator for Twiddles<T> {
    type Item = Complex<T>;

    #[inline]
    fn next(&mut self) -> Option<Complex<T>> {
        let w = self.w;
        self.w = self.w * self.wm;
        Some(w)
    }
}

/// Computes the single twiddle factor `exp(sign * 2πi * k / n)` directly.
#[inline]
pub(crate) fn twiddle<T: FftNum>(k: usize, n: usize, direction: Direction) -> Complex<T> {
    let two = T::one() + T::one();
    let angle = direction.sign::<T>() * two * T::PI() * T::from_len(k) / T::from_len(n);
    Complex::cis(angle)
}
