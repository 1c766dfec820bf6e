//! Access log reports
//!
//! Every report is built the same way: tokenize each line, pull one or two
//! fields out by position, fold them into an `Aggregation`, rank the result
//! and render it. See `pipeline` for the five report functions and `kind`
//! for how a report name is mapped to one of them.

mod aggregation;
mod kind;
mod pipeline;
mod rank;
mod record;
mod render;
mod size;
mod skip;
mod tokenize;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::*;
pub use kind::*;
pub use pipeline::*;
pub use rank::*;
pub use record::*;
pub use render::*;
pub use size::*;
pub use skip::*;
pub use tokenize::*;
pub use types::*;
