use clap::ValueEnum;
use serde::Serialize;

/// Retrieval strategy the backend uses to surface cases. Exactly one is
/// active per query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalMode {
    Vector,
    Semantic,
    GraphRag,
}

impl RetrievalMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Vector => "Vector",
            Self::Semantic => "Semantic",
            Self::GraphRag => "GraphRAG",
        }
    }
}

/// Overrides sent with every scoring request.
#[derive(Clone, Copy, Debug)]
pub struct RetrievalConfig {
    pub use_advanced_flow: bool,
    pub top_k: u32,
    pub retrieval_mode: RetrievalMode,
    pub temperature: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_serializes_to_backend_wire_names() {
        let encoded = serde_json::to_string(&RetrievalMode::GraphRag).unwrap();
        assert_eq!(encoded, "\"graph_rag\"");
        let encoded = serde_json::to_string(&RetrievalMode::Vector).unwrap();
        assert_eq!(encoded, "\"vector\"");
    }
}
