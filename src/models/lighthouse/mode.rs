use std::fmt;

// URL variants under audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Landing,
    Professional,
    Retro,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Landing, Mode::Professional, Mode::Retro];

    /// Heading used in console output and report sections.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Landing => "Landing Page",
            Mode::Professional => "Professional Mode",
            Mode::Retro => "Retro Mode",
        }
    }

    /// Short name used in the report link lists.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Landing => "Landing",
            Mode::Professional => "Professional",
            Mode::Retro => "Retro",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Mode::Landing => "landing",
            Mode::Professional => "professional",
            Mode::Retro => "retro",
        }
    }

    /// Audit target for this mode. Landing is the bare base URL; the other
    /// modes select themselves with a query parameter.
    pub fn url(&self, base_url: &str) -> String {
        match self {
            Mode::Landing => base_url.to_string(),
            _ => format!("{}?mode={}", base_url, self.slug()),
        }
    }

    /// Path of the JSON report the lighthouse CLI writes for this mode.
    pub fn json_path(&self) -> String {
        format!("lh-{}.json", self.slug())
    }

    /// Filename of the HTML report linked from the markdown summary.
    pub fn html_report(&self) -> String {
        format!("lighthouse-{}.report.html", self.slug())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_audits_the_bare_base_url() {
        assert_eq!(Mode::Landing.url("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn other_modes_select_themselves_by_query() {
        assert_eq!(
            Mode::Retro.url("http://localhost:3000"),
            "http://localhost:3000?mode=retro"
        );
    }

    #[test]
    fn report_paths_follow_the_slug() {
        assert_eq!(Mode::Professional.json_path(), "lh-professional.json");
        assert_eq!(
            Mode::Professional.html_report(),
            "lighthouse-professional.report.html"
        );
    }
}
