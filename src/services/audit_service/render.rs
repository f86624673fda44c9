use super::compute::average_scores;
use crate::lighthouse::CATEGORIES;
use crate::models::{ModeScores, Verdict};
use chrono::Local;

/// Print the per-mode console summaries followed by the cross-mode averages.
pub fn print_results(runs: &[ModeScores], threshold: u32) {
    let rule = "=".repeat(60);

    println!("\n{}", rule);
    println!("LIGHTHOUSE AUDIT RESULTS");
    println!("{}\n", rule);

    for (i, run) in runs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}:", run.mode.label().to_uppercase());
        for category in CATEGORIES {
            // Categories the report did not score are skipped here, unlike
            // the markdown summary where they show as 0.
            let Some(&score) = run.scores.get(category) else {
                continue;
            };
            let verdict = Verdict::of(score, threshold);
            println!("  {} {}: {}/100", verdict, display_name(category), score);
        }
    }

    println!("\n{}", rule);
    println!("AVERAGE SCORES ACROSS ALL MODES:");
    println!("{}", rule);
    for (category, avg) in average_scores(runs) {
        let verdict = Verdict::of(avg, threshold);
        println!("  {} {}: {}/100", verdict, display_name(category), avg);
    }
}

/// Render the markdown report: summary per mode, pass/fail annotations, and
/// links to the HTML/JSON reports the lighthouse CLI leaves behind.
pub fn render_markdown(runs: &[ModeScores], threshold: u32) -> String {
    let generated = Local::now().format("%a %m/%d/%Y %I:%M %p");

    let mut report = format!(
        "# Lighthouse Audit Report\nGenerated: {}\n\n## Summary\n\nTarget: All scores >= {}/100\n",
        generated, threshold
    );

    for run in runs {
        report.push_str(&format!("\n### {}\n", run.mode.label()));
        for category in CATEGORIES {
            let score = run.get(category);
            let verdict = Verdict::of(score, threshold);
            report.push_str(&format!(
                "- {}: {}/100 {}\n",
                report_label(category),
                score,
                verdict.annotation()
            ));
        }
    }

    report.push_str("\n## Detailed Reports\n\nHTML reports available at:\n");
    for run in runs {
        report.push_str(&format!("- {}: {}\n", run.mode.name(), run.mode.html_report()));
    }

    report.push_str("\nJSON reports available at:\n");
    for run in runs {
        report.push_str(&format!("- {}: {}\n", run.mode.name(), run.mode.json_path()));
    }

    report.push_str(
        "\n## Next Steps\n\nReview the HTML reports to identify specific issues and optimization opportunities.\n",
    );

    report
}

/// Console form of a category name: "best-practices" → "Best Practices".
fn display_name(category: &str) -> String {
    category
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Markdown labels are fixed, so the acronym keeps its casing there.
fn report_label(category: &str) -> &str {
    match category {
        "performance" => "Performance",
        "accessibility" => "Accessibility",
        "best-practices" => "Best Practices",
        "seo" => "SEO",
        other => other,
    }
}
