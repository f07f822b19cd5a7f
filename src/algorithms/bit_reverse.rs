//! Bit reversal permutation used by the iterative (decimation-in-time) FFT.
//!
//! The iterative algorithm needs its input in bit-reversed order so that every butterfly stage can
//! work in place on contiguous chunks. For `N = 2^n` elements, the element at index `i` moves to the
//! index whose low `n` bits are those of `i` in reverse order.

/// Returns `i` with its low `log2(n)` bits reversed.
///
/// `n` is the transform size and must be a power of two; `i` must be in `[0, n)`.
/// For `n == 1` every index maps to itself.
#[inline]
pub fn reverse(i: usize, n: usize) -> usize {
    debug_assert!(n.is_power_of_two() && i < n);

    let bits = n.ilog2();
    if bits == 0 {
        return i;
    }
    i.reverse_bits() >> (usize::BITS - bits)
}

/// Reorders `buf` in place into bit-reversed order.
///
/// Each pair is swapped exactly once: the swap happens only from the smaller index of the pair,
/// and fixed points (palindromic indices) are left alone.
pub fn bit_reverse_permutation<T>(buf: &mut [T]) {
    let n = buf.len();
    if n < 2 {
        return;
    }

    for i in 0..n {
        let j = reverse(i, n);
        if j > i {
            buf.swap(i, j);
        }
    }
}
