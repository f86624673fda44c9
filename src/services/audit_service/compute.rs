use crate::lighthouse::CATEGORIES;
use crate::models::ModeScores;

/// Mean score per fixed category across all audited modes, rounded to
/// nearest integer. Categories absent from a report contribute 0.
pub fn average_scores(runs: &[ModeScores]) -> Vec<(&'static str, u32)> {
    CATEGORIES
        .iter()
        .map(|&category| {
            let sum: u32 = runs.iter().map(|run| run.get(category)).sum();
            let avg = (sum as f64 / runs.len() as f64).round() as u32;
            (category, avg)
        })
        .collect()
}
