//! Common test utilities for building flow fixtures.
use keiro::prelude::*;

/// Creates a node with an id and description and no edges.
#[allow(dead_code)]
pub fn node(id: &str, description: &str) -> Node {
    Node::new(id, description)
}

/// Creates a node with unconditioned edges to the given targets.
#[allow(dead_code)]
pub fn node_with_edges(id: &str, description: &str, targets: &[&str]) -> Node {
    let mut node = Node::new(id, description);
    node.edges = targets.iter().map(|t| Edge::to(*t)).collect();
    node
}

/// A linear three-node flow: intake -> triage -> done.
#[allow(dead_code)]
pub fn linear_flow() -> Vec<Node> {
    vec![
        node_with_edges("intake", "Collect the request", &["triage"]),
        node_with_edges("triage", "Route the request", &["done"]),
        node("done", "Wrap up"),
    ]
}

/// A flow with an island: the start node reaches "followup", while
/// "island" has no inbound path.
#[allow(dead_code)]
pub fn flow_with_orphan() -> Vec<Node> {
    vec![
        node_with_edges("start", "Greet the caller", &["followup"]),
        node("followup", "Answer the question"),
        node("island", "Never reached"),
    ]
}

/// Builds a state from nodes, start pointer clamped to the first node.
#[allow(dead_code)]
pub fn state_of(nodes: Vec<Node>) -> FlowState {
    FlowState::from_nodes(nodes, None)
}
