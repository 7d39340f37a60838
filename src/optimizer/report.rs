//! Text rendering of a layout recommendation.

use crate::models::Recommendation;

pub const HEADING: &str = "AI-Optimized Habitat Recommendation";
pub const CLOSING: &str = "Design achieves optimal comfort balance for mission parameters!";

/// The summary lines shown under the recommendation heading.
pub fn summary_lines(rec: &Recommendation) -> Vec<String> {
    let best = &rec.best.features;
    vec![
        format!("Predicted Crew Comfort: {:.2}/10", rec.comfort_score()),
        format!("- Sleep Volume: {:.1} m³", best.sleep_vol),
        format!("- Social Volume: {:.1} m³", best.social_vol),
        format!("- Exercise Volume: {:.1} m³", best.exercise_vol),
        format!("- NHV Utilization: {:.1}%", best.nhv_util),
    ]
}

/// Full plain-text report, one line per entry.
///
/// ```text
/// AI-Optimized Habitat Recommendation
/// Predicted Crew Comfort: 7.84/10
/// - Sleep Volume: 13.2 m³
/// - Social Volume: 17.1 m³
/// - Exercise Volume: 6.4 m³
/// - NHV Utilization: 104.6%
/// Design achieves optimal comfort balance for mission parameters!
/// ```
pub fn render_report(rec: &Recommendation) -> String {
    let mut output = String::new();
    output.push_str(HEADING);
    output.push('\n');
    for line in summary_lines(rec) {
        output.push_str(&line);
        output.push('\n');
    }
    output.push_str(CLOSING);
    output.push('\n');
    output
}
