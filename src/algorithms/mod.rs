//! FFT Algorithm Implementations
//!
//! This module contains the core FFT algorithm implementations. Both compute the same radix-2
//! transform with the same sign convention and normalization, and can be swapped for one another.
//!
//! ## Available Algorithms
//!
//! - **Iterative (Decimation-in-Time)**: The default algorithm. Input is bit-reversed into a
//!   private buffer, then butterflies run from small spans to large, in place.
//!
//! - **Recursive**: Splits into even/odd halves, recurses, and combines with directly computed
//!   twiddle factors. Allocates per level; mostly useful as a reference.
//!
//! Both expect a length that is zero or a power of two and do not check it in release builds.

pub mod bit_reverse;
pub mod iterative;
pub mod recursive;
