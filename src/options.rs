/// Options to select how a transform is computed.
///
/// Calling FFT routines without specifying options uses [`Algorithm::Iterative`].
///
/// Both algorithms compute the same transform, so this only affects speed and memory use, never
/// the meaning of the result.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub algorithm: Algorithm,
}

impl Options {
    /// Options that run the transform with `algorithm`
    pub fn with_algorithm(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

/// The algorithm used to compute the transform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    /// In-place bit reversal followed by `log2(N)` butterfly stages
    Iterative,
    /// Top-down even/odd decomposition
    ///
    /// Allocates new buffers at every level of the recursion.
    Recursive,
}
