use std::collections::BTreeSet;

use serde::Serialize;

use crate::encode::{mode_strength, node_diameter, retrieval_strength};
use crate::graph::CaseGraph;
use crate::retrieval::{RetrievalMode, RetrievedIdSet};

/// Fill color marking a case that belongs to the gold standard.
pub const GOLD_CASE_COLOR: &str = "#ed8035";

/// Attributes of one drawable element handed to the graph renderer. Only
/// `refs`, `selection`, `mode_selection` and `color` are computed here;
/// everything else is static topology.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ElementData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Rendered diameter, from the citation count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<f32>,
    /// Border width for the actual-retrieval channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<f32>,
    /// Border width for the declared-mode channel. Kept separate from
    /// `selection` so the renderer can show false negatives/positives.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode_selection: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Element {
    pub data: ElementData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<String>,
}

/// Annotates the fixed topology with the current query's visual
/// attributes: cases first, then citation nodes, then edges, in dataset
/// order.
pub fn build_elements(
    graph: &CaseGraph,
    active_mode: RetrievalMode,
    retrieved: &RetrievedIdSet,
    gold_standard: &BTreeSet<String>,
) -> Vec<Element> {
    let mut elements =
        Vec::with_capacity(graph.node_count() + graph.edges().len());

    for case in graph.cases() {
        let color = gold_standard
            .contains(&case.id)
            .then(|| GOLD_CASE_COLOR.to_owned());

        elements.push(Element {
            data: ElementData {
                id: Some(case.id.clone()),
                label: Some(case.label.clone()),
                refs: Some(node_diameter(case.reference_count)),
                selection: Some(retrieval_strength(&case.id, retrieved)),
                mode_selection: Some(mode_strength(active_mode, case.member_of)),
                color,
                ..ElementData::default()
            },
            position: Some(Position {
                x: case.position.0,
                y: case.position.1,
            }),
            classes: None,
        });
    }

    for reference in graph.references() {
        elements.push(Element {
            data: ElementData {
                id: Some(reference.id.clone()),
                refs: Some(node_diameter(0)),
                ..ElementData::default()
            },
            position: Some(Position {
                x: reference.position.0,
                y: reference.position.1,
            }),
            classes: None,
        });
    }

    for edge in graph.edges() {
        elements.push(Element {
            data: ElementData {
                source: Some(edge.source.clone()),
                target: Some(edge.target.clone()),
                ..ElementData::default()
            },
            position: None,
            classes: Some("directed".to_owned()),
        });
    }

    elements
}
