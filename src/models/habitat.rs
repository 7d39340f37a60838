use serde::{Deserialize, Serialize};

use super::page::{CREW_SIZE, CYLINDER_RADIUS, NHV_TARGET};
use crate::error::Result;

/// The six habitat design parameters the comfort model is trained on.
///
/// Field order is the model's feature order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitatFeatures {
    pub crew_size: u32,
    /// Cylinder radius in meters.
    pub radius: f64,
    /// Net habitable volume utilization in percent.
    pub nhv_util: f64,
    /// Sleep volume per person in m³.
    pub sleep_vol: f64,
    /// Shared social volume in m³.
    pub social_vol: f64,
    /// Exercise volume in m³.
    pub exercise_vol: f64,
}

impl HabitatFeatures {
    pub const COUNT: usize = 6;

    pub fn to_row(&self) -> [f64; Self::COUNT] {
        [
            self.crew_size as f64,
            self.radius,
            self.nhv_util,
            self.sleep_vol,
            self.social_vol,
            self.exercise_vol,
        ]
    }
}

/// A generated training sample with its formula-derived comfort label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSample {
    #[serde(flatten)]
    pub features: HabitatFeatures,
    pub comfort_score: f64,
}

/// A candidate layout scored by the fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandidateLayout {
    #[serde(flatten)]
    pub features: HabitatFeatures,
    /// Predicted comfort, not computed by formula.
    pub comfort_score: f64,
}

/// Mission parameters chosen on the optimizer page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendInput {
    pub crew_size: u32,
    pub radius: f64,
    /// Whole percent, like the slider it comes from.
    pub nhv_target: u32,
}

impl Default for RecommendInput {
    fn default() -> Self {
        Self {
            crew_size: CREW_SIZE.default as u32,
            radius: CYLINDER_RADIUS.default,
            nhv_target: NHV_TARGET.default as u32,
        }
    }
}

impl RecommendInput {
    pub fn validate(&self) -> Result<()> {
        CREW_SIZE.check(self.crew_size as f64)?;
        CYLINDER_RADIUS.check(self.radius)?;
        NHV_TARGET.check(self.nhv_target as f64)?;
        Ok(())
    }
}

/// The outcome of one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub best: CandidateLayout,
    /// Index of `best` within `candidates`.
    pub best_index: usize,
    pub candidates: Vec<CandidateLayout>,
}

impl Recommendation {
    pub fn comfort_score(&self) -> f64 {
        self.best.comfort_score
    }
}

/// Recommendation plus the human-readable summary lines shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub summary: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_follows_field_order() {
        let f = HabitatFeatures {
            crew_size: 4,
            radius: 4.5,
            nhv_util: 95.0,
            sleep_vol: 13.0,
            social_vol: 15.0,
            exercise_vol: 6.0,
        };
        assert_eq!(f.to_row(), [4.0, 4.5, 95.0, 13.0, 15.0, 6.0]);
    }

    #[test]
    fn input_defaults_to_slider_defaults() {
        let input: RecommendInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, RecommendInput::default());
        assert_eq!(input.crew_size, 4);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn input_rejects_crew_outside_bounds() {
        let input = RecommendInput {
            crew_size: 1,
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn input_rejects_fractional_nhv_target() {
        assert!(serde_json::from_str::<RecommendInput>(r#"{"nhv_target": 95.5}"#).is_err());
        let input: RecommendInput = serde_json::from_str(r#"{"nhv_target": 120}"#).unwrap();
        assert_eq!(input.nhv_target, 120);
        assert!(input.validate().is_ok());
    }
}
