use std::fmt;

// Pass/fail call for a single score against the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn of(score: u32, threshold: u32) -> Verdict {
        if score >= threshold {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }

    /// Annotation appended to each score line in the markdown report.
    pub fn annotation(&self) -> &'static str {
        match self {
            Verdict::Pass => "✓",
            Verdict::Fail => "✗ NEEDS IMPROVEMENT",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self {
            Verdict::Pass => "✓",
            Verdict::Fail => "✗",
        };
        write!(f, "{}", marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive() {
        assert_eq!(Verdict::of(90, 90), Verdict::Pass);
        assert_eq!(Verdict::of(89, 90), Verdict::Fail);
    }

    #[test]
    fn failing_annotation_flags_improvement() {
        assert_eq!(Verdict::of(100, 90).annotation(), "✓");
        assert_eq!(Verdict::of(0, 90).annotation(), "✗ NEEDS IMPROVEMENT");
    }
}
