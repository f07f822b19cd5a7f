pub extern crate rustfft;

// export rustfft to ctfft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex;
use rustfft::num_traits::{Float, FloatConst};

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that two complex sequences are elementwise approximately equal, comparing the real and
/// imaginary parts separately.
///
/// # Panics
///
/// Panics if the lengths differ or if any pair of components is too far apart
#[track_caller]
pub fn assert_complex_closeness<T: Float + std::fmt::Display>(
    actual: &[Complex<T>],
    expected: &[Complex<T>],
    epsilon: T,
) {
    assert_eq!(actual.len(), expected.len(), "sequence lengths differ");

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if (a.re - e.re).abs() >= epsilon || (a.im - e.im).abs() >= epsilon {
            panic!(
                "Assertion failed at index {i}: {}{:+}i too far from expected value {}{:+}i (with epsilon {epsilon})",
                a.re, a.im, e.re, e.im,
            );
        }
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Generate a random, complex, signal of length `len` with components drawn from `[-1, 1)`
pub fn gen_random_complex_signal<T>(len: usize) -> Vec<Complex<T>>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let mut reals = vec![T::zero(); len];
    let mut imags = vec![T::zero(); len];
    gen_random_signal(&mut reals, &mut imags);

    reals
        .into_iter()
        .zip(imags)
        .map(|(re, im)| Complex::new(re, im))
        .collect()
}

/// Slow but obviously correct O(N^2) DFT, to be used as a reference in tests.
///
/// Uses `exp(-2πi·jk/N)` for the forward direction and `exp(+2πi·jk/N)` scaled by `1/N` for the
/// inverse.
pub fn naive_dft<T: Float + FloatConst>(x: &[Complex<T>], inverse: bool) -> Vec<Complex<T>> {
    let n = x.len();
    let big_n = T::from(n).unwrap();
    let sign = if inverse { T::one() } else { -T::one() };

    (0..n)
        .map(|k| {
            let sum = x
                .iter()
                .enumerate()
                .fold(Complex::new(T::zero(), T::zero()), |acc, (j, z)| {
                    // reduce jk mod n first so the angle stays small for large inputs
                    let jk = T::from((j * k) % n).unwrap();
                    let angle = sign * (T::PI() + T::PI()) * jk / big_n;
                    acc + *z * Complex::new(angle.cos(), angle.sin())
                });
            if inverse {
                sum / big_n
            } else {
                sum
            }
        })
        .collect()
}
