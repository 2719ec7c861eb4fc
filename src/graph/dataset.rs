use anyhow::Result;

use super::model::{CaseGraph, CaseNode, DirectedEdge, ModeMembership, ReferenceNode};

const VECTOR: ModeMembership = ModeMembership {
    vector: true,
    semantic: false,
    graph_rag: false,
};
const SEMANTIC: ModeMembership = ModeMembership {
    vector: false,
    semantic: true,
    graph_rag: false,
};
const GRAPH_RAG: ModeMembership = ModeMembership {
    vector: false,
    semantic: false,
    graph_rag: true,
};
const SEMANTIC_AND_GRAPH: ModeMembership = ModeMembership {
    vector: false,
    semantic: true,
    graph_rag: true,
};

struct CaseRow {
    id: &'static str,
    reference_count: u32,
    label: &'static str,
    position: (f32, f32),
    member_of: ModeMembership,
}

/// One synthetic citation of a case: the node id is derived as
/// `<case id>-<ordinal>`.
struct ReferenceRow {
    case_id: &'static str,
    ordinal: u32,
    position: (f32, f32),
}

const CASES: [CaseRow; 20] = [
    CaseRow { id: "615468", reference_count: 5, label: "Le Vette v. Hardman Estate", position: (850.0, 600.0), member_of: GRAPH_RAG },
    CaseRow { id: "4975399", reference_count: 12, label: "Laurelon Terrace, Inc. v. City of Seattle", position: (1100.0, 320.0), member_of: SEMANTIC_AND_GRAPH },
    CaseRow { id: "1034620", reference_count: 5, label: "Jorgensen v. Massart", position: (250.0, 220.0), member_of: GRAPH_RAG },
    CaseRow { id: "1127907", reference_count: 22, label: "Foisy v. Wyman", position: (740.0, 190.0), member_of: GRAPH_RAG },
    CaseRow { id: "1095193", reference_count: 7, label: "Thomas v. Housing Authority", position: (430.0, 300.0), member_of: GRAPH_RAG },
    CaseRow { id: "1186056", reference_count: 40, label: "Stuart v. Coldwell Banker Commercial Group, Inc.", position: (950.0, 140.0), member_of: GRAPH_RAG },
    CaseRow { id: "4953587", reference_count: 13, label: "Schedler v. Wagner", position: (800.0, 350.0), member_of: GRAPH_RAG },
    CaseRow { id: "2601920", reference_count: 10, label: "Pappas v. Zerwoodis", position: (500.0, 400.0), member_of: GRAPH_RAG },
    CaseRow { id: "594079", reference_count: 1, label: "Martindale Clothing Co. v. Spokane & Eastern Trust Co.", position: (530.0, 590.0), member_of: GRAPH_RAG },
    CaseRow { id: "1279441", reference_count: 9, label: "Tope v. King County", position: (1010.0, 470.0), member_of: GRAPH_RAG },
    CaseRow { id: "481657", reference_count: 0, label: "Swanson v. White & Bollard, Inc.", position: (270.0, 470.0), member_of: SEMANTIC },
    CaseRow { id: "630224", reference_count: 1, label: "Imperial Candy Co. v. City of Seattle", position: (1200.0, 600.0), member_of: SEMANTIC },
    CaseRow { id: "1346648", reference_count: 3, label: "Tombari v. City of Spokane", position: (680.0, 495.0), member_of: SEMANTIC },
    CaseRow { id: "768356", reference_count: 3, label: "Uhl Bros. v. Hull", position: (1080.0, 540.0), member_of: SEMANTIC },
    CaseRow { id: "1005731", reference_count: 0, label: "Finley v. City of Puyallup", position: (650.0, 300.0), member_of: SEMANTIC },
    CaseRow { id: "674990", reference_count: 0, label: "Woolworth Co. v. City of Seattle", position: (220.0, 560.0), member_of: VECTOR },
    CaseRow { id: "4938756", reference_count: 5, label: "Stevens v. King County", position: (270.0, 340.0), member_of: VECTOR },
    CaseRow { id: "5041745", reference_count: 0, label: "Frisken v. Art Strand Floor Coverings, Inc.", position: (1250.0, 240.0), member_of: VECTOR },
    CaseRow { id: "1017660", reference_count: 4, label: "United Mutual Savings Bank v. Riebli", position: (1170.0, 200.0), member_of: VECTOR },
    CaseRow { id: "782330", reference_count: 0, label: "DeHoney v. Gjarde", position: (1230.0, 540.0), member_of: VECTOR },
];

const REFERENCES: [ReferenceRow; 26] = [
    ReferenceRow { case_id: "615468", ordinal: 1, position: (820.0, 540.0) },
    ReferenceRow { case_id: "4975399", ordinal: 1, position: (1070.0, 260.0) },
    ReferenceRow { case_id: "4975399", ordinal: 2, position: (1130.0, 260.0) },
    ReferenceRow { case_id: "1034620", ordinal: 1, position: (280.0, 160.0) },
    ReferenceRow { case_id: "1127907", ordinal: 1, position: (710.0, 110.0) },
    ReferenceRow { case_id: "1127907", ordinal: 2, position: (770.0, 110.0) },
    ReferenceRow { case_id: "1127907", ordinal: 3, position: (670.0, 135.0) },
    ReferenceRow { case_id: "1127907", ordinal: 4, position: (810.0, 135.0) },
    ReferenceRow { case_id: "1095193", ordinal: 1, position: (400.0, 240.0) },
    ReferenceRow { case_id: "1186056", ordinal: 1, position: (930.0, 10.0) },
    ReferenceRow { case_id: "1186056", ordinal: 2, position: (970.0, 10.0) },
    ReferenceRow { case_id: "1186056", ordinal: 3, position: (900.0, 16.0) },
    ReferenceRow { case_id: "1186056", ordinal: 4, position: (1000.0, 16.0) },
    ReferenceRow { case_id: "1186056", ordinal: 5, position: (870.0, 30.0) },
    ReferenceRow { case_id: "1186056", ordinal: 6, position: (1030.0, 30.0) },
    ReferenceRow { case_id: "1186056", ordinal: 7, position: (845.0, 45.0) },
    ReferenceRow { case_id: "1186056", ordinal: 8, position: (1055.0, 45.0) },
    ReferenceRow { case_id: "4953587", ordinal: 1, position: (770.0, 290.0) },
    ReferenceRow { case_id: "4953587", ordinal: 2, position: (830.0, 290.0) },
    ReferenceRow { case_id: "2601920", ordinal: 1, position: (470.0, 340.0) },
    ReferenceRow { case_id: "2601920", ordinal: 2, position: (530.0, 340.0) },
    ReferenceRow { case_id: "594079", ordinal: 1, position: (500.0, 530.0) },
    ReferenceRow { case_id: "1279441", ordinal: 1, position: (980.0, 410.0) },
    ReferenceRow { case_id: "1279441", ordinal: 2, position: (1040.0, 410.0) },
    ReferenceRow { case_id: "4938756", ordinal: 1, position: (300.0, 280.0) },
    ReferenceRow { case_id: "1017660", ordinal: 1, position: (1200.0, 140.0) },
];

/// Citations that also point at a second case beyond their own parent.
const CROSS_CITATIONS: [(&str, &str); 3] = [
    ("4975399-1", "1279441"),
    ("1127907-3", "1095193"),
    ("1186056-7", "1127907"),
];

/// Builds the fixed citation topology and validates it. Called once at
/// startup; a failure here is a bug in the tables above.
pub fn load_case_graph() -> Result<CaseGraph> {
    let cases = CASES
        .iter()
        .map(|row| CaseNode {
            id: row.id.to_owned(),
            label: row.label.to_owned(),
            reference_count: row.reference_count,
            member_of: row.member_of,
            position: row.position,
        })
        .collect::<Vec<_>>();

    let references = REFERENCES
        .iter()
        .map(|row| ReferenceNode {
            id: format!("{}-{}", row.case_id, row.ordinal),
            parent_case_id: row.case_id.to_owned(),
            position: row.position,
        })
        .collect::<Vec<_>>();

    let mut edges = references
        .iter()
        .map(|reference| DirectedEdge {
            source: reference.id.clone(),
            target: reference.parent_case_id.clone(),
        })
        .collect::<Vec<_>>();
    edges.extend(CROSS_CITATIONS.iter().map(|(source, target)| DirectedEdge {
        source: (*source).to_owned(),
        target: (*target).to_owned(),
    }));

    CaseGraph::new(cases, references, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retrieval::{RetrievalMode, gold_standard_ids};

    #[test]
    fn dataset_loads_and_validates() {
        let graph = load_case_graph().unwrap();
        assert_eq!(graph.cases().len(), 20);
        assert_eq!(graph.references().len(), 26);
        assert_eq!(graph.edges().len(), 29);
        assert_eq!(graph.node_count(), 46);
    }

    #[test]
    fn every_gold_standard_id_exists_in_the_dataset() {
        let graph = load_case_graph().unwrap();
        for id in gold_standard_ids() {
            assert!(graph.case(&id).is_some(), "gold id {id} missing from dataset");
        }
    }

    #[test]
    fn reference_node_ids_derive_from_their_parent_case() {
        let graph = load_case_graph().unwrap();
        for reference in graph.references() {
            let expected_prefix = format!("{}-", reference.parent_case_id);
            assert!(reference.id.starts_with(&expected_prefix));
            assert!(graph.case(&reference.parent_case_id).is_some());
        }
    }

    #[test]
    fn every_edge_resolves_to_known_nodes() {
        let graph = load_case_graph().unwrap();
        for edge in graph.edges() {
            assert!(graph.position(&edge.source).is_some(), "dangling {}", edge.source);
            assert!(graph.position(&edge.target).is_some(), "dangling {}", edge.target);
        }
    }

    #[test]
    fn every_mode_surfaces_at_least_one_case() {
        let graph = load_case_graph().unwrap();
        for mode in [
            RetrievalMode::Vector,
            RetrievalMode::Semantic,
            RetrievalMode::GraphRag,
        ] {
            assert!(graph.cases().iter().any(|case| case.member_of.covers(mode)));
        }
    }
}
