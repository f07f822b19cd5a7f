//! Recursive (top-down) radix-2 FFT
//!
//! Splits the input into its even- and odd-indexed halves, transforms each half recursively and
//! stitches the two sub-transforms together with one directly computed twiddle factor per output
//! pair. It computes exactly the same transform as [`super::iterative`], and is mostly useful as a
//! readable reference to cross-check against.
use num_complex::Complex;
use num_traits::Zero;

use crate::twiddles::twiddle;
use crate::{normalize, Direction, FftNum};

/// Recursion step. Never scales; the `1/N` factor of the inverse is applied once by the caller.
fn fft_recursive_unscaled<T: FftNum>(x: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    let n = x.len();
    if n < 2 {
        return x.to_vec();
    }

    let (evens, odds): (Vec<_>, Vec<_>) = x.chunks_exact(2).map(|c| (c[0], c[1])).unzip();
    let f_even = fft_recursive_unscaled(&evens, direction);
    let f_odd = fft_recursive_unscaled(&odds, direction);

    let half = n >> 1;
    let mut out = vec![Complex::zero(); n];
    let (out_lo, out_hi) = out.split_at_mut(half);

    out_lo
        .iter_mut()
        .zip(out_hi.iter_mut())
        .zip(f_even.iter().zip(f_odd.iter()))
        .enumerate()
        .for_each(|(k, ((lo, hi), (e, o)))| {
            let t = twiddle::<T>(k, n, direction) * *o;
            *lo = *e + t;
            *hi = *e - t;
        });

    out
}

/// FFT of `x` using top-down recursion.
///
/// Returns a new sequence of the same length; `x` is left untouched. For
/// [`Direction::Inverse`] the result is scaled by `1/N`, once, after the outermost combine step.
///
/// The length of `x` must be zero or a power of two. An odd length at any level of the recursion
/// silently drops its last sample; use [`crate::transform`] for a checked entry point.
pub fn fft_recursive<T: FftNum>(x: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    debug_assert!(x.is_empty() || x.len().is_power_of_two());

    let mut out = fft_recursive_unscaled(x, direction);
    if let Direction::Inverse = direction {
        normalize(&mut out);
    }
    out
}
