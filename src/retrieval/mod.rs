mod client;
mod config;
mod parse;
mod score;

pub use client::{RetrievalBackendError, ScoringClient};
pub use config::{RetrievalConfig, RetrievalMode};
pub use parse::RetrievedIdSet;
pub use score::{BENCHMARK_QUESTION, gold_standard_ids, recall_percentage};
