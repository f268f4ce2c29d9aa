use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use std::collections::VecDeque;

use crate::flow::Node;

/// Validation output for a single node: the node's id plus every message
/// raised against it, in check order.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeIssues {
    pub node_id: String,
    pub messages: Vec<String>,
}

/// Checks every node's own required fields: a non-blank, collection-unique
/// id and a non-blank description.
///
/// Returns one entry per offending node, preserving node order. A blank id
/// is reported as missing, not additionally as non-unique; duplicates are
/// flagged on every node sharing the id.
pub fn validate_nodes(nodes: &[Node]) -> Vec<NodeIssues> {
    let id_counts = nodes.iter().map(|n| n.id.as_str()).counts();

    nodes
        .iter()
        .filter_map(|node| {
            let mut messages = Vec::new();

            if node.id.trim().is_empty() {
                messages.push("ID is required".to_string());
            } else if id_counts.get(node.id.as_str()).copied().unwrap_or(0) > 1 {
                messages.push("ID must be unique".to_string());
            }

            if node.description.trim().is_empty() {
                messages.push("Description is required".to_string());
            }

            (!messages.is_empty()).then(|| NodeIssues {
                node_id: node.id.clone(),
                messages,
            })
        })
        .collect()
}

/// Flags every node that a breadth-first walk from the start node cannot
/// reach, following each node's outgoing `to_node_id` adjacency.
///
/// The start node is the one named by `start_node_id` when that id
/// references a node in the collection, the first node otherwise. The start
/// node itself is exempt. Edge targets that reference no node are skipped
/// silently; they belong to structural validation, not reachability.
/// Collections with fewer than two nodes yield no warnings.
pub fn reachability_warnings(nodes: &[Node], start_node_id: Option<&str>) -> Vec<NodeIssues> {
    if nodes.len() < 2 {
        return Vec::new();
    }

    // First occurrence wins so duplicated ids resolve deterministically.
    let mut by_id: AHashMap<&str, &Node> = AHashMap::with_capacity(nodes.len());
    for node in nodes {
        by_id.entry(node.id.as_str()).or_insert(node);
    }

    let start_id = start_node_id
        .filter(|id| by_id.contains_key(*id))
        .unwrap_or_else(|| nodes[0].id.as_str());

    let mut reachable: AHashSet<&str> = AHashSet::new();
    let mut queue = VecDeque::new();
    reachable.insert(start_id);
    queue.push_back(start_id);

    while let Some(current) = queue.pop_front() {
        let Some(&node) = by_id.get(current) else {
            continue;
        };
        for edge in &node.edges {
            let Some(&target) = by_id.get(edge.to_node_id.as_str()) else {
                continue;
            };
            if reachable.insert(target.id.as_str()) {
                queue.push_back(target.id.as_str());
            }
        }
    }

    nodes
        .iter()
        .filter(|n| n.id != start_id && !reachable.contains(n.id.as_str()))
        .map(|n| NodeIssues {
            node_id: n.id.clone(),
            messages: vec!["Not reachable from the start node".to_string()],
        })
        .collect()
}
