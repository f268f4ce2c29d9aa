use crate::flow::{Node, NodePatch};

/// A snapshot of the editor state: the node collection plus the start-node
/// and selection pointers.
///
/// `reduce` never mutates a snapshot in place; every transition builds a
/// fresh value, so prior snapshots stay usable for comparison by hosts
/// (e.g. preserving canvas layout across structural updates).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowState {
    pub nodes: Vec<Node>,
    /// The graph's entry point. Clamped to the first node's id whenever the
    /// stored pointer does not reference a live node. The start node is
    /// exempt from reachability checks and cannot be deleted.
    pub start_node_id: Option<String>,
    /// The at-most-one node currently being edited, by id.
    pub selected_id: Option<String>,
}

impl FlowState {
    /// The default state for a fresh session: one start node, selected.
    pub fn seeded() -> Self {
        let start = Node::new("node-1", "Start node");
        Self {
            start_node_id: Some(start.id.clone()),
            selected_id: Some(start.id.clone()),
            nodes: vec![start],
        }
    }

    /// Builds a state from a loaded or imported collection, clamping the
    /// start pointer and selecting the first node.
    pub fn from_nodes(nodes: Vec<Node>, start_node_id: Option<String>) -> Self {
        let start_node_id = clamp_start(&nodes, start_node_id.as_deref());
        let selected_id = nodes.first().map(|n| n.id.clone());
        Self {
            nodes,
            start_node_id,
            selected_id,
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.selected_id.as_deref().and_then(|id| self.node(id))
    }

    pub fn start_node(&self) -> Option<&Node> {
        self.start_node_id.as_deref().and_then(|id| self.node(id))
    }

    pub fn is_start(&self, id: &str) -> bool {
        self.start_node_id.as_deref() == Some(id)
    }
}

/// A structural edit applied to the store.
///
/// The action set is a closed enumeration and `reduce` matches it
/// exhaustively; hosts never dispatch by string key.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replaces the whole collection, as on import or load.
    SetNodes {
        nodes: Vec<Node>,
        start_node_id: Option<String>,
    },
    /// Appends a node. The caller supplies the id; uniqueness is the
    /// validator's concern, not this transition's.
    AddNode(Node),
    /// Removes a node by id and strips every edge pointing at it.
    DeleteNode(String),
    /// Merges a patch into a node, cascading id renames through the graph.
    UpdateNode { id: String, patch: NodePatch },
    /// Moves the selection pointer; `None` clears it.
    SelectNode(Option<String>),
}

/// The state-transition function: synchronous, deterministic and total.
///
/// Unknown ids in `DeleteNode`/`UpdateNode` return the state unchanged,
/// never an error. Deleting the start node is likewise a no-op; the UI
/// blocks it, the reducer merely refuses it.
pub fn reduce(state: &FlowState, action: Action) -> FlowState {
    match action {
        Action::SetNodes {
            nodes,
            start_node_id,
        } => set_nodes(state, nodes, start_node_id),
        Action::AddNode(node) => add_node(state, node),
        Action::DeleteNode(id) => delete_node(state, &id),
        Action::UpdateNode { id, patch } => update_node(state, &id, patch),
        Action::SelectNode(id) => select_node(state, id),
    }
}

fn clamp_start(nodes: &[Node], requested: Option<&str>) -> Option<String> {
    requested
        .filter(|id| nodes.iter().any(|n| n.id == *id))
        .map(str::to_string)
        .or_else(|| nodes.first().map(|n| n.id.clone()))
}

// Stored invariant: a node's adjacency list never targets the node itself.
fn strip_self_edges(node: &mut Node) {
    let id = node.id.clone();
    node.edges.retain(|e| e.to_node_id != id);
}

fn set_nodes(state: &FlowState, nodes: Vec<Node>, start_node_id: Option<String>) -> FlowState {
    let start_node_id = clamp_start(&nodes, start_node_id.as_deref());
    let selected_id = state
        .selected_id
        .as_deref()
        .filter(|id| nodes.iter().any(|n| n.id == *id))
        .map(str::to_string)
        .or_else(|| nodes.first().map(|n| n.id.clone()));
    FlowState {
        nodes,
        start_node_id,
        selected_id,
    }
}

fn add_node(state: &FlowState, mut node: Node) -> FlowState {
    strip_self_edges(&mut node);
    let selected_id = Some(node.id.clone());
    let mut nodes = state.nodes.clone();
    nodes.push(node);
    // An empty collection promotes the newcomer to start node.
    let start_node_id = clamp_start(&nodes, state.start_node_id.as_deref());
    FlowState {
        nodes,
        start_node_id,
        selected_id,
    }
}

fn delete_node(state: &FlowState, id: &str) -> FlowState {
    if state.is_start(id) {
        return state.clone();
    }
    let Some(index) = state.nodes.iter().position(|n| n.id == id) else {
        return state.clone();
    };

    let mut nodes = state.nodes.clone();
    nodes.remove(index);
    // Cascade: no orphan edge may keep pointing at the removed node.
    for node in &mut nodes {
        node.edges.retain(|e| e.to_node_id != id);
    }

    let selected_id = if state.selected_id.as_deref() == Some(id) {
        nodes.first().map(|n| n.id.clone())
    } else {
        state.selected_id.clone()
    };

    FlowState {
        nodes,
        start_node_id: state.start_node_id.clone(),
        selected_id,
    }
}

fn update_node(state: &FlowState, id: &str, patch: NodePatch) -> FlowState {
    let Some(index) = state.nodes.iter().position(|n| n.id == id) else {
        return state.clone();
    };

    let mut nodes = state.nodes.clone();
    let old_id = nodes[index].id.clone();

    {
        let node = &mut nodes[index];
        if let Some(new_id) = patch.id {
            node.id = new_id;
        }
        if let Some(description) = patch.description {
            node.description = description;
        }
        if let Some(prompt) = patch.prompt {
            node.prompt = prompt;
        }
        if let Some(edges) = patch.edges {
            node.edges = edges;
        }
    }

    let new_id = nodes[index].id.clone();
    if new_id != old_id {
        // Rename cascade, in the same transition: the adjacency graph never
        // passes through a state where edges point at the stale id.
        for (i, node) in nodes.iter_mut().enumerate() {
            if i == index {
                continue;
            }
            for edge in &mut node.edges {
                if edge.to_node_id == old_id {
                    edge.to_node_id = new_id.clone();
                }
            }
        }
    }
    strip_self_edges(&mut nodes[index]);

    let retarget = |pointer: &Option<String>| match pointer.as_deref() {
        Some(p) if p == old_id => Some(new_id.clone()),
        _ => pointer.clone(),
    };

    FlowState {
        start_node_id: retarget(&state.start_node_id),
        selected_id: retarget(&state.selected_id),
        nodes,
    }
}

fn select_node(state: &FlowState, id: Option<String>) -> FlowState {
    // An id that references no node clears the selection instead of
    // storing a dangling pointer.
    let selected_id = id.filter(|id| state.contains(id));
    FlowState {
        selected_id,
        ..state.clone()
    }
}
