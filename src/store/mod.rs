//! The graph store: the canonical node/edge collection, the reducer that
//! keeps it consistent under structural edits, and the `FlowStore` owner
//! that wires transitions to validation and the persistence slot.

mod reducer;

pub use reducer::{Action, FlowState, reduce};

use crate::codec::{FlowDocument, serialize_flow};
use crate::error::ParseError;
use crate::persist::SlotStore;
use crate::validate::{NodeIssues, reachability_warnings, validate_nodes};

/// The owner of the canonical editor state.
///
/// Hosts hold one `FlowStore` per editing session, dispatch structural
/// actions into it and re-read state plus the derived error/warning sets
/// after each transition. There is no ambient or global instance; pass the
/// store by reference to whichever layer needs it.
pub struct FlowStore {
    state: FlowState,
    slot: Option<Box<dyn SlotStore>>,
}

impl FlowStore {
    /// Creates a store seeded with the default single start node.
    pub fn new() -> Self {
        Self {
            state: FlowState::seeded(),
            slot: None,
        }
    }

    /// Creates a store backed by a persistence slot.
    ///
    /// The slot is read once, here; a stored non-empty collection wins over
    /// the default seed. A corrupt or unreadable slot degrades to the seed
    /// with a warning rather than failing the session.
    pub fn with_slot(slot: Box<dyn SlotStore>) -> Self {
        let state = match slot.load() {
            Ok(Some(nodes)) if !nodes.is_empty() => FlowState::from_nodes(nodes, None),
            Ok(_) => FlowState::seeded(),
            Err(e) => {
                log::warn!("ignoring persisted flow: {}", e);
                FlowState::seeded()
            }
        };
        Self {
            state,
            slot: Some(slot),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    /// Applies one structural action and returns the new state.
    ///
    /// The transition itself is pure and total. When it changed the node
    /// collection or the start pointer, the slot (if any) is rewritten;
    /// slot failures are logged and never propagated, persistence must not
    /// block editing.
    pub fn dispatch(&mut self, action: Action) -> &FlowState {
        log::debug!("dispatch {:?}", action);
        let next = reduce(&self.state, action);
        let collection_changed =
            next.nodes != self.state.nodes || next.start_node_id != self.state.start_node_id;
        self.state = next;
        if collection_changed {
            self.persist();
        }
        &self.state
    }

    fn persist(&self) {
        if let Some(slot) = &self.slot {
            if let Err(e) = slot.save(&self.state.nodes) {
                log::warn!("failed to persist flow: {}", e);
            }
        }
    }

    /// Structural errors for the current collection.
    pub fn errors(&self) -> Vec<NodeIssues> {
        validate_nodes(&self.state.nodes)
    }

    /// Reachability warnings for the current collection.
    pub fn warnings(&self) -> Vec<NodeIssues> {
        reachability_warnings(&self.state.nodes, self.state.start_node_id.as_deref())
    }

    /// Replaces the collection with an imported document.
    ///
    /// Callers go through `codec::import_flow` first; a flagged outcome
    /// must have been explicitly confirmed before its document reaches this
    /// point.
    pub fn load_document(&mut self, document: FlowDocument) -> &FlowState {
        self.dispatch(Action::SetNodes {
            nodes: document.nodes,
            start_node_id: document.start_node_id,
        })
    }

    /// The current collection in canonical export form.
    pub fn export(&self) -> Result<String, ParseError> {
        serialize_flow(&FlowDocument::new(
            self.state.start_node_id.clone(),
            self.state.nodes.clone(),
        ))
    }

    /// Empties the persisted slot, if any. The in-memory state is
    /// untouched; the next collection change writes it back.
    pub fn clear_slot(&self) {
        if let Some(slot) = &self.slot {
            if let Err(e) = slot.clear() {
                log::warn!("failed to clear flow slot: {}", e);
            }
        }
    }
}

impl Default for FlowStore {
    fn default() -> Self {
        Self::new()
    }
}
