use ares::models::RecommendInput;
use ares::optimizer::dataset::{generate_samples, SAMPLE_COUNT, TRAINING_SEED};
use ares::optimizer::forest::Regressor;
use ares::optimizer::{recommend_with_rng, report, train_model, OptimizerConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use speculate2::speculate;

speculate! {
    before {
        let config = OptimizerConfig {
            trees: 30,
            ..Default::default()
        };
    }

    describe "synthetic dataset" {
        it "keeps every comfort score within 0 to 10" {
            let samples = generate_samples(SAMPLE_COUNT, TRAINING_SEED);
            assert_eq!(samples.len(), 500);
            assert!(samples
                .iter()
                .all(|s| (0.0..=10.0).contains(&s.comfort_score)));
        }

        it "is identical across runs with the fixed seed" {
            assert_eq!(
                generate_samples(SAMPLE_COUNT, TRAINING_SEED),
                generate_samples(SAMPLE_COUNT, TRAINING_SEED)
            );
        }
    }

    describe "train_model" {
        it "learns that more NHV means more comfort" {
            let model = train_model(&config).expect("training failed");
            let cramped = model.predict(&[4.0, 4.5, 65.0, 13.0, 15.0, 6.0]);
            let roomy = model.predict(&[4.0, 4.5, 115.0, 13.0, 15.0, 6.0]);
            assert!(roomy > cramped, "roomy {} <= cramped {}", roomy, cramped);
        }

        it "predicts inside the label range" {
            let model = train_model(&config).expect("training failed");
            let score = model.predict(&[5.0, 4.0, 95.0, 13.0, 15.0, 6.0]);
            assert!((0.0..=10.0).contains(&score));
        }
    }

    describe "recommend_with_rng" {
        it "returns exactly one of the twenty candidates with the top score" {
            let mut rng = ChaCha8Rng::seed_from_u64(9);
            let rec = recommend_with_rng(&config, &RecommendInput::default(), &mut rng)
                .expect("recommend failed");

            assert_eq!(rec.candidates.len(), 20);
            assert_eq!(rec.candidates[rec.best_index], rec.best);
            for (i, c) in rec.candidates.iter().enumerate() {
                if i < rec.best_index {
                    assert!(c.comfort_score < rec.best.comfort_score);
                } else {
                    assert!(c.comfort_score <= rec.best.comfort_score);
                }
            }
        }

        it "keeps nhv within ten points of the target" {
            let input = RecommendInput {
                crew_size: 3,
                radius: 3.5,
                nhv_target: 70,
            };
            let mut rng = ChaCha8Rng::seed_from_u64(11);
            let rec = recommend_with_rng(&config, &input, &mut rng).expect("recommend failed");

            for c in &rec.candidates {
                assert_eq!(c.features.crew_size, 3);
                assert!((60.0..80.0).contains(&c.features.nhv_util));
            }
        }

        it "is deterministic for a seeded candidate generator" {
            let input = RecommendInput::default();
            let a = recommend_with_rng(&config, &input, &mut ChaCha8Rng::seed_from_u64(5))
                .expect("recommend failed");
            let b = recommend_with_rng(&config, &input, &mut ChaCha8Rng::seed_from_u64(5))
                .expect("recommend failed");
            assert_eq!(a, b);
        }

        it "renders a report for the recommendation" {
            let mut rng = ChaCha8Rng::seed_from_u64(2);
            let rec = recommend_with_rng(&config, &RecommendInput::default(), &mut rng)
                .expect("recommend failed");
            let text = report::render_report(&rec);
            assert!(text.contains(&format!("{:.2}/10", rec.best.comfort_score)));
        }
    }
}
