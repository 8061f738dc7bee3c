pub mod types;
pub mod error;
pub mod dedup;
pub mod tags;
pub mod source;
pub mod board;
pub mod render;

pub use error::{FridgeError, Result};
pub use types::*;
pub use dedup::{dedup_avoid, dedupe, trailing_word, PairKey};
pub use tags::{clickable_tags, visible_additional_tags, TagGlossary};
pub use source::RulesSource;
pub use board::IssueBoard;
pub use render::{render_issue_report, render_lines};
