//! Seeded synthetic training data for the comfort model.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

use crate::models::{HabitatFeatures, SyntheticSample};

/// Seed for training data, so every request trains on identical rows.
pub const TRAINING_SEED: u64 = 42;
pub const SAMPLE_COUNT: usize = 500;
/// Standard deviation of the label noise, before scaling to 0-10.
pub const NOISE_SD: f64 = 0.05;

/// Weighted comfort formula scaled to 0-10 and clamped.
///
/// `noise` is added to the weighted sum before scaling.
pub fn comfort_label(f: &HabitatFeatures, noise: f64) -> f64 {
    let weighted = 0.3 * (f.nhv_util / 100.0)
        + 0.3 * (f.radius / 6.0)
        + 0.2 * (f.social_vol / 20.0)
        + 0.1 * (f.exercise_vol / 8.0)
        + noise;
    (weighted * 10.0).clamp(0.0, 10.0)
}

/// Draw one set of features from the training distribution.
pub fn sample_features<R: Rng + ?Sized>(rng: &mut R) -> HabitatFeatures {
    HabitatFeatures {
        crew_size: rng.gen_range(2..8),
        radius: rng.gen_range(3.0..6.0),
        nhv_util: rng.gen_range(60.0..120.0),
        sleep_vol: rng.gen_range(10.0..16.0),
        social_vol: rng.gen_range(10.0..20.0),
        exercise_vol: rng.gen_range(4.0..8.0),
    }
}

/// Generate `count` labelled samples from a fixed seed.
pub fn generate_samples(count: usize, seed: u64) -> Vec<SyntheticSample> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let features = sample_features(&mut rng);
            let noise: f64 = rng.sample::<f64, _>(StandardNormal) * NOISE_SD;
            SyntheticSample {
                features,
                comfort_score: comfort_label(&features, noise),
            }
        })
        .collect()
}

/// Split samples into a feature matrix and label vector.
pub fn to_training_set(samples: &[SyntheticSample]) -> (Vec<Vec<f64>>, Vec<f64>) {
    samples
        .iter()
        .map(|s| (s.features.to_row().to_vec(), s.comfort_score))
        .unzip()
}
