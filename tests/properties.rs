use ctfft::options::Algorithm;
use ctfft::{fft, ifft, transform, Complex64, Direction};
use proptest::prelude::*;

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Iterative, Algorithm::Recursive];

fn to_complex(pairs: Vec<(f64, f64)>) -> Vec<Complex64> {
    pairs
        .into_iter()
        .map(|(re, im)| Complex64::new(re, im))
        .collect()
}

/// Power-of-two length signals with components in `[-100, 100)`
fn signal() -> impl Strategy<Value = Vec<Complex64>> {
    (0u32..10)
        .prop_flat_map(|k| {
            prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 1usize << k)
        })
        .prop_map(to_complex)
}

/// Two signals of the same power-of-two length
fn signal_pair() -> impl Strategy<Value = (Vec<Complex64>, Vec<Complex64>)> {
    (0u32..10).prop_flat_map(|k| {
        let n = 1usize << k;
        (
            prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), n).prop_map(to_complex),
            prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), n).prop_map(to_complex),
        )
    })
}

fn max_abs_diff(a: &[Complex64], b: &[Complex64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x.re - y.re).abs().max((x.im - y.im).abs()))
        .fold(0.0, f64::max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip(x in signal()) {
        for algorithm in ALGORITHMS {
            let spectrum = transform(&x, Direction::Forward, algorithm).unwrap();
            let back = transform(&spectrum, Direction::Inverse, algorithm).unwrap();
            prop_assert_eq!(back.len(), x.len());
            let err = max_abs_diff(&back, &x);
            prop_assert!(err < 1e-9, "round trip error {err} with {algorithm:?}");
        }
    }

    #[test]
    fn prop_default_entry_points_round_trip(x in signal()) {
        let back = ifft(&fft(&x).unwrap()).unwrap();
        let err = max_abs_diff(&back, &x);
        prop_assert!(err < 1e-9, "round trip error {err}");
    }

    #[test]
    fn prop_algorithms_agree(x in signal()) {
        for direction in [Direction::Forward, Direction::Inverse] {
            let iterative = transform(&x, direction, Algorithm::Iterative).unwrap();
            let recursive = transform(&x, direction, Algorithm::Recursive).unwrap();
            let err = max_abs_diff(&iterative, &recursive);
            prop_assert!(err < 1e-8, "iterative and recursive differ by {err} ({direction:?})");
        }
    }

    #[test]
    fn prop_linearity(
        (x, y) in signal_pair(),
        a in -10.0f64..10.0,
        b in -10.0f64..10.0,
    ) {
        let combined: Vec<Complex64> = x
            .iter()
            .zip(y.iter())
            .map(|(xi, yi)| *xi * a + *yi * b)
            .collect();

        for algorithm in ALGORITHMS {
            let lhs = transform(&combined, Direction::Forward, algorithm).unwrap();
            let fx = transform(&x, Direction::Forward, algorithm).unwrap();
            let fy = transform(&y, Direction::Forward, algorithm).unwrap();
            let rhs: Vec<Complex64> = fx
                .iter()
                .zip(fy.iter())
                .map(|(xi, yi)| *xi * a + *yi * b)
                .collect();

            let err = max_abs_diff(&lhs, &rhs);
            prop_assert!(err < 1e-6, "linearity violated by {err} with {algorithm:?}");
        }
    }

    #[test]
    fn prop_input_untouched(x in signal()) {
        let before = x.clone();
        let _ = fft(&x).unwrap();
        let _ = transform(&x, Direction::Inverse, Algorithm::Recursive).unwrap();
        prop_assert_eq!(x, before);
    }

    #[test]
    fn prop_non_power_of_two_rejected(len in 3usize..2048) {
        prop_assume!(!len.is_power_of_two());
        let x = vec![Complex64::new(1.0, 0.0); len];
        prop_assert!(fft(&x).is_err());
        prop_assert!(ifft(&x).is_err());
    }
}
