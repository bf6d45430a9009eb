//! Tests on seeded synthetic signals with injected spikes

use hampel_filter::{
    FilterParameters, HampelFilter, OutlierDetector, OutlierFilter, OutlierReport,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

const LEN: usize = 2000;
const SPIKE_STRIDE: usize = 100;

/// Slow sine with Gaussian noise and a +5 spike every `SPIKE_STRIDE` samples
fn noisy_sine_with_spikes(seed: u64) -> (Vec<f64>, Vec<usize>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.1).unwrap();

    let mut signal: Vec<f64> = (0..LEN)
        .map(|i| (i as f64 * 0.01).sin() + rng.sample(noise))
        .collect();

    let spikes: Vec<usize> = (SPIKE_STRIDE / 2..LEN).step_by(SPIKE_STRIDE).collect();
    for &i in &spikes {
        signal[i] += 5.0;
    }
    (signal, spikes)
}

fn filter(window_size: usize) -> HampelFilter {
    HampelFilter::new(FilterParameters::new(window_size, 3.0).unwrap()).unwrap()
}

#[test]
fn test_all_spikes_detected() {
    for seed in [1, 2, 3] {
        let (signal, spikes) = noisy_sine_with_spikes(seed);
        let outliers = filter(21).detect(&signal).unwrap();

        for &i in &spikes {
            assert!(outliers.contains(i), "seed {seed}: spike at {i} missed");
        }
        // Gaussian noise alone should trip the rule rarely
        let false_positives = outliers.len() - spikes.len();
        assert!(
            false_positives < LEN / 50,
            "seed {seed}: {false_positives} false positives"
        );
    }
}

#[test]
fn test_spikes_replaced_near_local_level() {
    let (signal, spikes) = noisy_sine_with_spikes(7);
    let result = filter(21).apply(&signal).unwrap();

    for &i in &spikes {
        let level = (i as f64 * 0.01).sin();
        assert!(
            (result.cleaned()[i] - level).abs() < 0.5,
            "spike at {i} replaced by {}",
            result.cleaned()[i]
        );
    }
}

#[test]
fn test_second_pass_flags_fewer() {
    // Statistical, not absolute: cleaning removes the injected spikes so a
    // second pass over the cleaned signal finds fewer outliers.
    for seed in [11, 12, 13] {
        let (signal, spikes) = noisy_sine_with_spikes(seed);
        let f = filter(21);

        let first = f.apply(&signal).unwrap();
        let second = f.detect(first.cleaned().as_slice()).unwrap();

        assert!(second.len() < first.count(), "seed {seed}");
        for &i in &spikes {
            assert!(!second.contains(i), "seed {seed}: spike at {i} flagged twice");
        }
    }
}

#[test]
fn test_report_deviations_match_spikes() {
    let (signal, spikes) = noisy_sine_with_spikes(21);
    let result = filter(21).apply(&signal).unwrap();
    let report = OutlierReport::new(&signal, &result).unwrap();

    let spike_entries: Vec<_> = report
        .entries()
        .iter()
        .filter(|e| spikes.contains(&e.index))
        .collect();
    assert_eq!(spike_entries.len(), spikes.len());
    for entry in spike_entries {
        assert!(entry.deviation() > 4.0);
    }

    let hist = report.histogram(20).unwrap();
    assert_eq!(hist.total(), result.count());
}

#[test]
fn test_window_size_one_never_flags() {
    let (signal, _) = noisy_sine_with_spikes(5);
    assert!(filter(1).detect(&signal).unwrap().is_empty());
}
