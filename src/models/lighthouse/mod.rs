pub mod category;
pub mod mode;
pub mod report;
pub mod verdict;

pub use category::Category;
pub use mode::Mode;
pub use report::{ModeScores, Report};
pub use verdict::Verdict;
