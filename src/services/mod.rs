pub mod audit_service;

pub use audit_service::{average_scores, print_results, render_markdown};
