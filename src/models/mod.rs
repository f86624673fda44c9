pub mod lighthouse;

pub use lighthouse::{Category, Mode, ModeScores, Report, Verdict};
