use serde::{Deserialize, Deserializer};

// pub struct for each category entry in a Lighthouse report. The `score`
// field is tri-state: a number in [0,1], an explicit null, or absent.
#[derive(Debug, Deserialize, Clone)]
pub struct Category {
    #[serde(default, deserialize_with = "double_option")]
    pub score: Option<Option<f64>>,
}

impl Category {
    /// Integer percent for this category, or `None` when the report carries
    /// no `score` field at all. A null score counts as 0.
    pub fn percent(&self) -> Option<u32> {
        match self.score {
            None => None,
            Some(None) => Some(0),
            Some(Some(score)) => Some((score * 100.0).round() as u32),
        }
    }
}

// Distinguishes a missing field (outer None) from an explicit null
// (Some(None)), which plain Option<Option<T>> cannot.
fn double_option<'de, D>(de: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(de).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_score_scales_to_percent() {
        let category: Category = serde_json::from_str(r#"{"score":0.873}"#).unwrap();
        assert_eq!(category.percent(), Some(87));
    }

    #[test]
    fn null_score_counts_as_zero() {
        let category: Category = serde_json::from_str(r#"{"score":null}"#).unwrap();
        assert_eq!(category.percent(), Some(0));
    }

    #[test]
    fn absent_score_yields_none() {
        let category: Category = serde_json::from_str(r#"{"title":"SEO"}"#).unwrap();
        assert_eq!(category.percent(), None);
    }

    #[test]
    fn perfect_score_is_one_hundred() {
        let category: Category = serde_json::from_str(r#"{"score":1.0}"#).unwrap();
        assert_eq!(category.percent(), Some(100));
    }
}
