//! Iterative Decimation-in-Time (DIT) FFT
//!
//! The DIT algorithm works bottom-up. Input is permuted into bit-reversed order, after which
//! every stage combines pairs of adjacent sub-transforms into one of twice the size, in place.
//!
//! ## Algorithm Overview
//!
//! 1. Apply bit-reversal to a private copy of the input
//! 2. Start with butterflies of span 2
//! 3. Double the span every stage, up to stage `log2(N)`, where `N` is the size of the input
//!
//! Stage `s + 1` reads what stage `s` wrote, so stages run strictly one after the other.
use num_complex::Complex;

use crate::algorithms::bit_reverse::bit_reverse_permutation;
use crate::twiddles::Twiddles;
use crate::{normalize, Direction, FftNum};

/// Runs every butterfly stage over `buf`, which must already be in bit-reversed order.
///
/// Within a stage of span `m`, each chunk of `m` elements is split in two halves `lo` and `hi`,
/// and the `j`-th pair becomes `(u + t, u - t)` with `u = lo[j]` and `t = w_j * hi[j]`.
pub(crate) fn dit_butterflies<T: FftNum>(buf: &mut [Complex<T>], direction: Direction) {
    let n = buf.len();
    if n < 2 {
        return;
    }

    for stage in 1..=n.ilog2() {
        let m = 1usize << stage;
        let m2 = m >> 1;

        buf.chunks_exact_mut(m).for_each(|chunk| {
            let (lo, hi) = chunk.split_at_mut(m2);

            lo.iter_mut()
                .zip(hi.iter_mut())
                .zip(Twiddles::<T>::new(m, direction))
                .for_each(|((u, v), w)| {
                    let t = w * *v;
                    let z = *u;
                    *u = z + t;
                    *v = z - t;
                });
        });
    }
}

/// FFT of `x` using the in-place iterative algorithm.
///
/// Returns a new sequence of the same length; `x` is left untouched. For
/// [`Direction::Inverse`] the result is scaled by `1/N`.
///
/// The length of `x` must be zero or a power of two. Other lengths give an unspecified result; use
/// [`crate::transform`] for a checked entry point.
pub fn fft_iterative<T: FftNum>(x: &[Complex<T>], direction: Direction) -> Vec<Complex<T>> {
    debug_assert!(x.is_empty() || x.len().is_power_of_two());
    if x.is_empty() {
        return Vec::new();
    }

    let mut buf = x.to_vec();
    bit_reverse_permutation(&mut buf);
    dit_butterflies(&mut buf, direction);

    if let Direction::Inverse = direction {
        normalize(&mut buf);
    }
    buf
}
