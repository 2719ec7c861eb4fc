use std::collections::HashSet;

use anyhow::{Result, anyhow};

use crate::retrieval::RetrievalMode;

/// Which retrieval strategies are expected to surface a case. Fixed
/// topology metadata, immutable for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeMembership {
    pub vector: bool,
    pub semantic: bool,
    pub graph_rag: bool,
}

impl ModeMembership {
    pub const NONE: Self = Self {
        vector: false,
        semantic: false,
        graph_rag: false,
    };

    pub fn covers(self, mode: RetrievalMode) -> bool {
        match mode {
            RetrievalMode::Vector => self.vector,
            RetrievalMode::Semantic => self.semantic,
            RetrievalMode::GraphRag => self.graph_rag,
        }
    }
}

/// A citable case in the fixed topology. `id` is the stable external case
/// identifier that keys into both the retrieved-id set and the gold
/// standard.
#[derive(Clone, Debug)]
pub struct CaseNode {
    pub id: String,
    pub label: String,
    pub reference_count: u32,
    pub member_of: ModeMembership,
    pub position: (f32, f32),
}

/// Synthetic node standing in for one inbound citation of a case. Purely
/// decorative; never scored and never a retrieval target.
#[derive(Clone, Debug)]
pub struct ReferenceNode {
    pub id: String,
    pub parent_case_id: String,
    pub position: (f32, f32),
}

/// Edge from a citing node toward the case it cites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectedEdge {
    pub source: String,
    pub target: String,
}

/// The static citation topology: cases, their synthetic citation nodes,
/// and the directed edges between them. No mutation API; built once by
/// [`super::load_case_graph`] and validated on construction.
#[derive(Clone, Debug)]
pub struct CaseGraph {
    cases: Vec<CaseNode>,
    references: Vec<ReferenceNode>,
    edges: Vec<DirectedEdge>,
}

impl CaseGraph {
    /// Validates referential integrity once, at load time. A dangling edge
    /// or orphaned reference node is a static-data bug, so it fails the
    /// whole load instead of being tolerated at render time.
    pub fn new(
        cases: Vec<CaseNode>,
        references: Vec<ReferenceNode>,
        edges: Vec<DirectedEdge>,
    ) -> Result<Self> {
        let mut ids = HashSet::with_capacity(cases.len() + references.len());
        for case in &cases {
            if !ids.insert(case.id.as_str()) {
                return Err(anyhow!("duplicate node id {} in case table", case.id));
            }
        }

        let case_ids: HashSet<&str> = ids.iter().copied().collect();
        for reference in &references {
            if !ids.insert(reference.id.as_str()) {
                return Err(anyhow!(
                    "duplicate node id {} in reference table",
                    reference.id
                ));
            }
            if !case_ids.contains(reference.parent_case_id.as_str()) {
                return Err(anyhow!(
                    "reference node {} cites unknown case {}",
                    reference.id,
                    reference.parent_case_id
                ));
            }
        }

        for edge in &edges {
            if !ids.contains(edge.source.as_str()) {
                return Err(anyhow!("edge source {} is not a known node", edge.source));
            }
            if !ids.contains(edge.target.as_str()) {
                return Err(anyhow!("edge target {} is not a known node", edge.target));
            }
        }

        Ok(Self {
            cases,
            references,
            edges,
        })
    }

    pub fn cases(&self) -> &[CaseNode] {
        &self.cases
    }

    pub fn references(&self) -> &[ReferenceNode] {
        &self.references
    }

    pub fn edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    pub fn case(&self, id: &str) -> Option<&CaseNode> {
        self.cases.iter().find(|case| case.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.cases.len() + self.references.len()
    }

    /// Node position by id, regardless of node kind.
    pub fn position(&self, id: &str) -> Option<(f32, f32)> {
        self.cases
            .iter()
            .find(|case| case.id == id)
            .map(|case| case.position)
            .or_else(|| {
                self.references
                    .iter()
                    .find(|reference| reference.id == id)
                    .map(|reference| reference.position)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(id: &str) -> CaseNode {
        CaseNode {
            id: id.to_owned(),
            label: format!("Case {id}"),
            reference_count: 0,
            member_of: ModeMembership::NONE,
            position: (0.0, 0.0),
        }
    }

    fn reference(id: &str, parent: &str) -> ReferenceNode {
        ReferenceNode {
            id: id.to_owned(),
            parent_case_id: parent.to_owned(),
            position: (0.0, 0.0),
        }
    }

    fn edge(source: &str, target: &str) -> DirectedEdge {
        DirectedEdge {
            source: source.to_owned(),
            target: target.to_owned(),
        }
    }

    #[test]
    fn accepts_a_consistent_graph() {
        let graph = CaseGraph::new(
            vec![case("100")],
            vec![reference("100-1", "100")],
            vec![edge("100-1", "100")],
        )
        .unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.position("100-1"), Some((0.0, 0.0)));
    }

    #[test]
    fn rejects_a_dangling_edge_target() {
        let result = CaseGraph::new(
            vec![case("100")],
            vec![reference("100-1", "100")],
            vec![edge("100-1", "200")],
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_an_orphaned_reference_node() {
        let result = CaseGraph::new(vec![case("100")], vec![reference("200-1", "200")], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_duplicate_ids_across_tables() {
        let result = CaseGraph::new(vec![case("100")], vec![reference("100", "100")], vec![]);
        assert!(result.is_err());
    }
}
