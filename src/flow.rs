use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

/// A directed, labeled connection from its owning node to another node's id.
///
/// Edges live on their source node's adjacency list; the pair
/// `(source id, to_node_id)` is the only edge identity there is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub to_node_id: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<AHashMap<String, String>>,
}

impl Edge {
    /// Creates an unconditioned edge to the given target id.
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            to_node_id: target.into(),
            condition: String::new(),
            parameters: None,
        }
    }

    /// Creates an edge guarded by a condition label.
    pub fn when(target: impl Into<String>, condition: impl Into<String>) -> Self {
        Self {
            to_node_id: target.into(),
            condition: condition.into(),
            parameters: None,
        }
    }
}

/// A single vertex of a flow definition: identity, a user-facing
/// description, a free-text prompt and the outgoing adjacency list.
///
/// A blank `id` or `description` is tolerated here and surfaced by
/// validation; nothing in the model layer rejects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Node {
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            prompt: String::new(),
            edges: Vec::new(),
        }
    }

    /// Whether an interactive connect to `target_id` would be accepted.
    ///
    /// Rejects self-targets and duplicate `(source, target)` pairs. This is
    /// the connect-time check only; stored collections may still carry
    /// duplicates or dangling targets, which validation reports instead.
    pub fn can_connect(&self, target_id: &str) -> bool {
        self.id != target_id && !self.edges.iter().any(|e| e.to_node_id == target_id)
    }
}

/// A partial update merged into a node by `Action::UpdateNode`.
///
/// Only fields that are `Some` are written; `edges` replaces the adjacency
/// list wholesale, matching how hosts edit the list as a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub id: Option<String>,
    pub description: Option<String>,
    pub prompt: Option<String>,
    pub edges: Option<Vec<Edge>>,
}

impl NodePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn edges(mut self, edges: Vec<Edge>) -> Self {
        self.edges = Some(edges);
        self
    }
}

/// Returns the smallest free id of the form `node-N` for a new node.
///
/// The caller owns id generation; the store appends whatever it is given
/// and leaves uniqueness to the validator.
pub fn generate_node_id(nodes: &[Node]) -> String {
    let ids: AHashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
    let mut i = 1usize;
    loop {
        let candidate = format!("node-{}", i);
        if !ids.contains(candidate.as_str()) {
            return candidate;
        }
        i += 1;
    }
}
