/// An error returned by the checked FFT entry points.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FftError {
    /// The input length is neither zero nor a power of two.
    #[error("input length {len} is not a power of 2")]
    NonPowerOfTwo { len: usize },
    /// Separate real and imaginary buffers were given with different lengths.
    #[error("real and imaginary buffers differ in length ({reals} != {imags})")]
    MismatchedLengths { reals: usize, imags: usize },
}
