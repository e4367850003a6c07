//! String similarity metrics used to score a pair of normalized files.
//!
//! All four follow the Apache Commons Text algorithm family so that composite
//! scores (and therefore rankings) line up with reports produced by that
//! toolchain. Characters are compared as Unicode scalar values, which agrees
//! with the UTF-16 based originals for ASCII input.

mod fuzzy;
mod jaccard;
mod jaro_winkler;
mod lcs;

pub use fuzzy::fuzzy_score;
pub use jaccard::jaccard;
pub use jaro_winkler::jaro_winkler;
pub use lcs::lcs_length;
