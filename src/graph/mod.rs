mod dataset;
mod model;

pub use dataset::load_case_graph;
pub use model::{CaseGraph, CaseNode, DirectedEdge, ModeMembership, ReferenceNode};
