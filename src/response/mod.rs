//! Best-effort interpretation of workflow results
//!
//! - `extract` - Locate the first usable text among workflow outputs
//! - `list` - Turn a text blob into a list of candidates

pub mod extract;
pub mod list;

pub use extract::extract_text;
pub use list::parse_list;
