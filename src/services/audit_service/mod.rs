pub mod compute;
pub mod render;

pub use compute::average_scores;
pub use render::{print_results, render_markdown};
