//! Habitat layout recommender.
//!
//! Every call trains a fresh comfort model on seeded synthetic data, samples
//! candidate layouts around the caller's mission parameters, and returns the
//! candidate the model scores highest. Nothing is cached between calls.

pub mod dataset;
pub mod forest;
pub mod report;

use rand::Rng;

use crate::error::{AresError, Result};
use crate::models::{CandidateLayout, HabitatFeatures, RecommendInput, Recommendation};
use forest::{ForestConfig, RandomForest, Regressor, TreeConfig};

pub const CANDIDATE_COUNT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizerConfig {
    pub sample_count: usize,
    pub candidate_count: usize,
    pub trees: usize,
    /// Seeds both the training data and the forest's bootstrap draws.
    pub seed: u64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            sample_count: dataset::SAMPLE_COUNT,
            candidate_count: CANDIDATE_COUNT,
            trees: 200,
            seed: dataset::TRAINING_SEED,
        }
    }
}

impl OptimizerConfig {
    fn forest(&self) -> ForestConfig {
        ForestConfig {
            trees: self.trees,
            seed: self.seed,
            tree: TreeConfig::default(),
        }
    }
}

/// Train the comfort model from scratch.
pub fn train_model(config: &OptimizerConfig) -> Result<RandomForest> {
    let samples = dataset::generate_samples(config.sample_count, config.seed);
    let (x, y) = dataset::to_training_set(&samples);
    RandomForest::fit(&config.forest(), &x, &y)
}

/// Sample unscored layouts around the caller's mission parameters.
///
/// Crew size and radius are taken as given; the rest vary.
pub fn sample_candidates<R: Rng + ?Sized>(
    input: &RecommendInput,
    count: usize,
    rng: &mut R,
) -> Vec<HabitatFeatures> {
    let nhv = input.nhv_target as f64;
    (0..count)
        .map(|_| HabitatFeatures {
            crew_size: input.crew_size,
            radius: input.radius,
            nhv_util: rng.gen_range(nhv - 10.0..nhv + 10.0),
            sleep_vol: rng.gen_range(12.0..15.0),
            social_vol: rng.gen_range(12.0..18.0),
            exercise_vol: rng.gen_range(5.0..7.0),
        })
        .collect()
}

/// Index of the highest score; ties go to the earliest candidate.
pub fn best_candidate(candidates: &[CandidateLayout]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, candidate) in candidates.iter().enumerate() {
        match best {
            Some(b) if candidate.comfort_score <= candidates[b].comfort_score => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Score candidates with `model` and pick the best.
pub fn select<M: Regressor>(model: &M, candidates: Vec<HabitatFeatures>) -> Result<Recommendation> {
    let scored: Vec<CandidateLayout> = candidates
        .into_iter()
        .map(|features| CandidateLayout {
            features,
            comfort_score: model.predict(&features.to_row()),
        })
        .collect();

    let best_index = best_candidate(&scored).ok_or(AresError::NoCandidates)?;
    Ok(Recommendation {
        best: scored[best_index],
        best_index,
        candidates: scored,
    })
}

/// Recommend a layout using an unseeded candidate generator.
pub fn recommend(config: &OptimizerConfig, input: &RecommendInput) -> Result<Recommendation> {
    recommend_with_rng(config, input, &mut rand::thread_rng())
}

/// Recommend a layout drawing candidates from `rng`.
pub fn recommend_with_rng<R: Rng + ?Sized>(
    config: &OptimizerConfig,
    input: &RecommendInput,
    rng: &mut R,
) -> Result<Recommendation> {
    input.validate()?;

    let model = train_model(config)?;
    let candidates = sample_candidates(input, config.candidate_count, rng);
    let recommendation = select(&model, candidates)?;

    tracing::info!(
        "Recommended layout {} of {} for crew {} (comfort {:.2})",
        recommendation.best_index,
        recommendation.candidates.len(),
        input.crew_size,
        recommendation.comfort_score()
    );
    Ok(recommendation)
}
