//! Cross-source search: per-museum adapters that normalize heterogeneous
//! API records into the canonical artwork shape, and the aggregator that
//! combines both sources into one result page.

mod aggregate;
pub mod normalize;
mod source;

pub use aggregate::SearchAggregator;
pub use source::{
    DegradeReason, HarvardSource, MetSource, SearchSource, SourceOutcome, PAGE_SIZE,
};
