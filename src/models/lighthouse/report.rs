use super::{Category, Mode};
use serde::Deserialize;
use std::collections::HashMap;

// Raw Lighthouse report, reduced to the fields this tool reads. Reports
// without a categories object deserialize to an empty map.
#[derive(Debug, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub categories: HashMap<String, Category>,
}

// Integer scores extracted for one audited mode.
#[derive(Debug, Clone)]
pub struct ModeScores {
    pub mode: Mode,
    pub scores: HashMap<String, u32>,
}

impl ModeScores {
    /// Score for a category, 0 when the report had none.
    pub fn get(&self, category: &str) -> u32 {
        self.scores.get(category).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_categories_key_deserializes_empty() {
        let report: Report = serde_json::from_str(r#"{"lighthouseVersion":"11.0.0"}"#).unwrap();
        assert!(report.categories.is_empty());
    }

    #[test]
    fn absent_category_scores_zero() {
        let scores = ModeScores {
            mode: Mode::Landing,
            scores: HashMap::from([("performance".to_string(), 97)]),
        };
        assert_eq!(scores.get("performance"), 97);
        assert_eq!(scores.get("seo"), 0);
    }
}
