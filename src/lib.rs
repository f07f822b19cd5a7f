//! Radix-2 Cooley-Tukey FFT
//!
//! Computes the Discrete Fourier Transform (DFT) of a complex sequence, and its inverse, for
//! lengths that are zero or a power of two. Two interchangeable algorithms are provided: an
//! in-place iterative (decimation-in-time) transform, which is the default, and a top-down
//! recursive one.
//!
//! The forward transform uses `exp(-2πi·jk/N)` and is not scaled. The inverse uses
//! `exp(+2πi·jk/N)` and is scaled by `1/N`, so [`ifft`] undoes [`fft`] up to rounding.
//!
//! ```
//! use ctfft::{fft, ifft, Complex64};
//!
//! let x: Vec<Complex64> = (1..=8).map(|i| Complex64::new(f64::from(i), 0.0)).collect();
//! let spectrum = fft(&x).unwrap();
//! assert!((spectrum[0].re - 36.0).abs() < 1e-12);
//!
//! let back = ifft(&spectrum).unwrap();
//! assert!((back[3].re - 4.0).abs() < 1e-12);
//! ```
//!
//! Every entry point returns a new buffer and leaves its input untouched. Lengths that are not a
//! power of two are rejected with [`FftError::NonPowerOfTwo`].
use std::fmt::Debug;

use num_traits::{Float, FloatConst};
use tracing::{debug, trace};

use crate::algorithms::iterative::fft_iterative;
use crate::algorithms::recursive::fft_recursive;
use crate::options::{Algorithm, Options};

pub use crate::error::FftError;
pub use num_complex::{Complex, Complex32, Complex64};

pub mod algorithms;
mod error;
pub mod options;
mod twiddles;
#[cfg(feature = "split")]
mod utils;

/// Floating point types the transforms can be computed in.
pub trait FftNum: Float + FloatConst + Debug {
    /// Converts a buffer length or index into this float type.
    fn from_len(n: usize) -> Self;
}

impl FftNum for f64 {
    #[inline]
    fn from_len(n: usize) -> Self {
        n as f64
    }
}

impl FftNum for f32 {
    #[inline]
    fn from_len(n: usize) -> Self {
        n as f32
    }
}

/// Forward is for running the regular FFT
/// Inverse is for running the Inverse Fast Fourier Transform (IFFT)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Negative exponent in the twiddle factors, no scaling
    Forward,
    /// Positive exponent in the twiddle factors, result scaled by `1/N`
    Inverse,
}

impl Direction {
    /// Sign of the exponent of the twiddle factors: `-1` for `Forward`, `+1` for `Inverse`
    #[inline]
    pub fn sign<T: Float>(self) -> T {
        match self {
            Direction::Forward => -T::one(),
            Direction::Inverse => T::one(),
        }
    }
}

/// Divides every element of `buf` by its length.
pub(crate) fn normalize<T: FftNum>(buf: &mut [Complex<T>]) {
    let big_n = T::from_len(buf.len());
    buf.iter_mut().for_each(|z| *z = z.unscale(big_n));
}

fn check_len(len: usize) -> Result<(), FftError> {
    if len == 0 || len.is_power_of_two() {
        Ok(())
    } else {
        debug!(len, "rejecting input: length is not a power of 2");
        Err(FftError::NonPowerOfTwo { len })
    }
}

/// Computes the FFT of `x` in `direction` with the given `algorithm`.
///
/// Both algorithms share the sign convention and normalization, so their results agree up to
/// rounding.
///
/// # Errors
///
/// Returns [`FftError::NonPowerOfTwo`] if `x.len()` is neither zero nor a power of two.
pub fn transform<T: FftNum>(
    x: &[Complex<T>],
    direction: Direction,
    algorithm: Algorithm,
) -> Result<Vec<Complex<T>>, FftError> {
    check_len(x.len())?;
    trace!(len = x.len(), ?direction, ?algorithm, "computing fft");

    let out = match algorithm {
        Algorithm::Iterative => fft_iterative(x, direction),
        Algorithm::Recursive => fft_recursive(x, direction),
    };
    Ok(out)
}

/// FFT of `x` in `direction`, computed as described by `opts`.
///
/// # Errors
///
/// Returns [`FftError::NonPowerOfTwo`] if `x.len()` is neither zero nor a power of two.
pub fn fft_with_opts<T: FftNum>(
    x: &[Complex<T>],
    direction: Direction,
    opts: &Options,
) -> Result<Vec<Complex<T>>, FftError> {
    transform(x, direction, opts.algorithm)
}

/// Forward FFT of `x`. The result is not scaled.
///
/// # Errors
///
/// Returns [`FftError::NonPowerOfTwo`] if `x.len()` is neither zero nor a power of two.
pub fn fft<T: FftNum>(x: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    fft_with_opts(x, Direction::Forward, &Options::default())
}

/// Inverse FFT of `big_x`, scaled by `1/N`.
///
/// # Errors
///
/// Returns [`FftError::NonPowerOfTwo`] if `big_x.len()` is neither zero nor a power of two.
pub fn ifft<T: FftNum>(big_x: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    fft_with_opts(big_x, Direction::Inverse, &Options::default())
}

macro_rules! impl_fft_for {
    ($fft_name:ident, $ifft_name:ident, $precision:ty) => {
        /// Forward FFT of `x`. The result is not scaled.
        ///
        /// # Errors
        ///
        /// Returns [`FftError::NonPowerOfTwo`] if `x.len()` is neither zero nor a power of two.
        pub fn $fft_name(x: &[Complex<$precision>]) -> Result<Vec<Complex<$precision>>, FftError> {
            fft(x)
        }

        /// Inverse FFT of `big_x`, scaled by `1/N`.
        ///
        /// # Errors
        ///
        /// Returns [`FftError::NonPowerOfTwo`] if `big_x.len()` is neither zero nor a power of two.
        pub fn $ifft_name(
            big_x: &[Complex<$precision>],
        ) -> Result<Vec<Complex<$precision>>, FftError> {
            ifft(big_x)
        }
    };
}

impl_fft_for!(fft_64, ifft_64, f64);
impl_fft_for!(fft_32, ifft_32, f32);

#[cfg(feature = "split")]
macro_rules! impl_fft_split_for {
    ($func_name:ident, $precision:ty, $deinterleave:ident) => {
        /// FFT of a signal given as separate real and imaginary buffers.
        ///
        /// Returns the real and imaginary components of the result. For [`Direction::Inverse`]
        /// the result is scaled by `1/N`.
        ///
        /// # Errors
        ///
        /// Returns [`FftError::MismatchedLengths`] if `reals.len() != imags.len()`, and
        /// [`FftError::NonPowerOfTwo`] if the length is neither zero nor a power of two.
        pub fn $func_name(
            reals: &[$precision],
            imags: &[$precision],
            direction: Direction,
        ) -> Result<(Vec<$precision>, Vec<$precision>), FftError> {
            if reals.len() != imags.len() {
                return Err(FftError::MismatchedLengths {
                    reals: reals.len(),
                    imags: imags.len(),
                });
            }

            let signal = utils::combine_re_im(reals, imags);
            let out = fft_with_opts(&signal, direction, &Options::default())?;
            Ok(utils::$deinterleave(&out))
        }
    };
}

#[cfg(feature = "split")]
impl_fft_split_for!(fft_64_split, f64, deinterleave_complex64);
#[cfg(feature = "split")]
impl_fft_split_for!(fft_32_split, f32, deinterleave_complex32);
