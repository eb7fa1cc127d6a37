mod filter;
mod model;
mod rank;

pub use filter::{IgnoreSet, filter, title_case};
pub use model::{CategorizedCounts, Category, SkillEntry, TagCount};
pub use rank::{TOP_N, rank, top_n};
